//! Screening and lineage record types.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::models::specimen::Tier;

/// Fixed facility label stamped on every birth record.
pub const FACILITY_LABEL: &str = "Hatchery Incubation Bay";

/// Genome schema tag recorded in the technical block of birth records.
pub const GENOME_VERSION: &str = "1.0-hatchery";

/// Outcome of a pairwise compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approved,
    Warning,
    Rejected,
}

impl Verdict {
    /// Whether breeding may proceed under this verdict. Warnings are
    /// advisory; only rejection blocks.
    pub fn permits_breeding(&self) -> bool {
        !matches!(self, Verdict::Rejected)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Approved => write!(f, "APPROVED"),
            Verdict::Warning => write!(f, "WARNING"),
            Verdict::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Result of a pre-breeding compatibility evaluation.
///
/// Created fresh per evaluation and immutable once returned. Rejections are
/// expected policy outcomes, not errors, so they travel in the verdict
/// rather than an `Err`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub timestamp: DateTime<Utc>,
    pub parent_a_id: String,
    pub parent_b_id: String,
    /// Check name to measured value (variance, match flags, counts).
    pub checks: IndexMap<String, Value>,
    pub verdict: Verdict,
    pub warnings: Vec<String>,
    pub notes: String,
}

impl CompatibilityReport {
    pub(crate) fn new(parent_a_id: impl Into<String>, parent_b_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            parent_a_id: parent_a_id.into(),
            parent_b_id: parent_b_id.into(),
            checks: IndexMap::new(),
            verdict: Verdict::Approved,
            warnings: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Lineage block of a birth record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineage {
    pub name: String,
    pub parents: Vec<String>,
    pub generation: u32,
    pub facility: String,
}

/// Technical block of a birth record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSpec {
    pub service_tier: Tier,
    pub mutation_flag: bool,
    pub genome_version: String,
    pub specimen_id: String,
}

/// Lineage certificate issued for every offspring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthRecord {
    pub record_id: String,
    pub born_at: DateTime<Utc>,
    pub lineage: Lineage,
    pub technical: TechnicalSpec,
    pub attestation: String,
}

impl BirthRecord {
    pub(crate) fn issue(lineage: Lineage, technical: TechnicalSpec) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            born_at: Utc::now(),
            lineage,
            technical,
            attestation: "Lineage verified and sealed by the Hatchery registry".to_string(),
        }
    }
}

/// Status of a quarantine record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuarantineStatus {
    Quarantined,
    Released,
}

/// Record produced when an arrival fails the stability screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarantineRecord {
    pub specimen_id: String,
    pub quarantined_at: DateTime<Utc>,
    pub reason: String,
    /// Stability metrics captured at quarantine time.
    pub metrics: IndexMap<String, f64>,
    pub status: QuarantineStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_permits_breeding() {
        assert!(Verdict::Approved.permits_breeding());
        assert!(Verdict::Warning.permits_breeding());
        assert!(!Verdict::Rejected.permits_breeding());
    }

    #[test]
    fn test_verdict_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn test_birth_record_carries_attestation() {
        let record = BirthRecord::issue(
            Lineage {
                name: "Child".to_string(),
                parents: vec!["a".to_string(), "b".to_string()],
                generation: 1,
                facility: FACILITY_LABEL.to_string(),
            },
            TechnicalSpec {
                service_tier: Tier::Participant,
                mutation_flag: false,
                genome_version: GENOME_VERSION.to_string(),
                specimen_id: "child-id".to_string(),
            },
        );
        assert!(!record.attestation.is_empty());
        assert_eq!(record.lineage.parents.len(), 2);
    }
}
