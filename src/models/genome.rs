//! Three-strand genome structure carried by every specimen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::record::TraitRecord;
use crate::utilities::errors::ValidationError;

/// Capability strand: skill list plus opaque plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Named skills. Skills shared by both parents are dominant and always
    /// inherited; single-parent skills are recessive.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Plugin configuration, inherited wholesale from one parent. The core
    /// never interprets these values.
    #[serde(default)]
    pub plugins: IndexMap<String, Value>,
}

/// The full attribute set of a specimen, split into three strands.
///
/// Each strand defaults to an empty mapping when absent from a payload;
/// breeding treats a missing strand as "nothing to inherit" rather than an
/// error, since shape validation belongs to the schema layer upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Flat scalar/string parameters (e.g. `temperature`, `provider`,
    /// `model`). Crossed over key by key.
    #[serde(default)]
    pub cognition: IndexMap<String, Value>,
    /// Personality strand: the structured trait record.
    #[serde(default)]
    pub personality: TraitRecord,
    /// Capability strand.
    #[serde(default)]
    pub capability: Capability,
}

impl Genome {
    /// Cognition temperature, defaulting to 0.5 when absent or non-numeric.
    pub fn temperature(&self) -> f64 {
        self.cognition
            .get("temperature")
            .and_then(Value::as_f64)
            .unwrap_or(0.5)
    }

    /// Model provider string, if set.
    pub fn provider(&self) -> Option<&str> {
        self.cognition.get("provider").and_then(Value::as_str)
    }

    /// Validate numeric ranges on the cognition strand.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a `temperature` key is present but
    /// non-numeric or outside `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(raw) = self.cognition.get("temperature") {
            let value = raw.as_f64().ok_or_else(|| ValidationError::NotNumeric {
                field: "cognition.temperature".to_string(),
            })?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: "cognition.temperature".to_string(),
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        Ok(())
    }
}
