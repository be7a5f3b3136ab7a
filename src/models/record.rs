//! The normalized trait record shared by the parser and the breeding engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed personality profile, normalized into five fixed sections.
///
/// Every field is always present; an empty container means the section was
/// absent from the source document. Deserialization intentionally has no
/// per-field defaults: a payload missing one of the five keys is malformed
/// and must fail rather than be silently patched, because downstream
/// crossover code indexes all five sections unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitRecord {
    /// Free-form identity attributes. By convention holds at least a
    /// `description` key with a one-sentence self-summary, and optionally
    /// a `name`.
    pub identity: IndexMap<String, String>,
    /// Style-dimension name to free-text value (e.g. "voice" -> "Warm").
    pub tone_style: IndexMap<String, String>,
    /// Value name to free-text justification. Keys are unique; order is
    /// not semantically meaningful.
    pub core_values: IndexMap<String, String>,
    /// Prohibition statements. Merging applies set semantics.
    pub boundaries: Vec<String>,
    /// Workflow steps, first-to-last = priority order.
    pub workflow: Vec<String>,
}

impl TraitRecord {
    /// The one-sentence self-summary, if any.
    pub fn description(&self) -> Option<&str> {
        self.identity.get("description").map(String::as_str)
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.identity.get("name").map(String::as_str)
    }

    /// Set the self-summary, replacing any existing one.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.identity
            .insert("description".to_string(), description.into());
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.identity.is_empty()
            && self.tone_style.is_empty()
            && self.core_values.is_empty()
            && self.boundaries.is_empty()
            && self.workflow.is_empty()
    }
}
