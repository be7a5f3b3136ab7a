//! Specimen entity: the breeding participant record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::genome::Genome;
use crate::models::sanitize::sanitize_text;
use crate::utilities::errors::ValidationError;

/// Habitat areas a specimen can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Default holding area for registered specimens.
    Commons,
    /// Breeding and incubation area.
    Nursery,
    /// Isolation for specimens that failed the stability screen.
    Quarantine,
}

/// Lifecycle state of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Waiting,
    Paired,
    Processing,
    Quarantined,
    Completed,
}

/// Service tier recorded on birth records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Participant,
    Observer,
}

fn default_stability() -> f64 {
    1.0
}

fn default_entropy() -> f64 {
    0.1
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A breeding candidate: genome plus the bookkeeping the habitat tracks.
///
/// Specimens are independent values. The breeding engine reads two of them
/// and constructs a fresh offspring; it never mutates its inputs and the
/// offspring shares no aliasing with either parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specimen {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genome: Genome,

    /// Caller-supplied confidence in behavioral consistency, in [0, 1].
    /// Drives crossover dominance weighting.
    #[serde(default = "default_stability")]
    pub stability_score: f64,
    /// Configured randomness appetite, in [0, 1].
    #[serde(default = "default_entropy")]
    pub entropy: f64,
    /// Diversity ratio measured by the last stability screen, kept for
    /// audit. `None` until the specimen has been screened.
    #[serde(default)]
    pub diversity_ratio: Option<f64>,

    #[serde(default)]
    pub generation: u32,
    #[serde(default)]
    pub parent_ids: Option<Vec<String>>,
    #[serde(default)]
    pub mutation_flag: bool,

    #[serde(default = "default_tier")]
    pub tier: Tier,
    #[serde(default = "default_location")]
    pub location: Location,
    #[serde(default = "default_status")]
    pub status: Status,

    #[serde(default = "Utc::now")]
    pub arrival_time: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub last_activity: DateTime<Utc>,
}

fn default_tier() -> Tier {
    Tier::Participant
}

fn default_location() -> Location {
    Location::Commons
}

fn default_status() -> Status {
    Status::Waiting
}

impl Specimen {
    /// Register a new first-generation specimen. The name is sanitized.
    pub fn new(name: impl Into<String>, genome: Genome) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: sanitize_text(&name.into()),
            genome,
            stability_score: default_stability(),
            entropy: default_entropy(),
            diversity_ratio: None,
            generation: 0,
            parent_ids: None,
            mutation_flag: false,
            tier: Tier::Participant,
            location: Location::Commons,
            status: Status::Waiting,
            arrival_time: now,
            last_activity: now,
        }
    }

    /// Construct an offspring specimen from two parents.
    ///
    /// Generation is `max(parents) + 1` and the parent ids are recorded in
    /// `[a, b]` order.
    pub fn offspring(
        name: impl Into<String>,
        genome: Genome,
        parent_a: &Specimen,
        parent_b: &Specimen,
        mutation_flag: bool,
    ) -> Self {
        let mut specimen = Self::new(name, genome);
        specimen.generation = parent_a.generation.max(parent_b.generation) + 1;
        specimen.parent_ids = Some(vec![parent_a.id.clone(), parent_b.id.clone()]);
        specimen.mutation_flag = mutation_flag;
        specimen.location = Location::Nursery;
        specimen
    }

    /// Validate scalar ranges and the genome.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `stability_score` or `entropy` leave
    /// [0, 1], or the genome fails its own validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("stability_score", self.stability_score),
            ("entropy", self.entropy),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        self.genome.validate()
    }
}
