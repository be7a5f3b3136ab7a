//! # Hatchery
//!
//! Core library for a breeding habitat of AI-agent personality profiles:
//! candidates arrive with a three-strand genome (cognition, personality,
//! capability), pass a text-stability screen and a pairwise compatibility
//! check, and are recombined into offspring via weighted probabilistic
//! crossover plus independent mutation rolls.
//!
//! The crate holds the pure core only. Every entry point takes fully
//! formed inputs and returns fully formed values with no retained state
//! and no blocking I/O; persistence and the HTTP surface live in the
//! surrounding service.
//!
//! ```
//! use hatchery::{BreedingEngine, Genome, ScreeningGate, Specimen};
//!
//! let mut parent_a = Specimen::new("Alpha", Genome::default());
//! let mut parent_b = Specimen::new("Beta", Genome::default());
//!
//! let gate = ScreeningGate::default();
//! gate.screen_arrival(&mut parent_a, "a careful planner with varied interests");
//! gate.screen_arrival(&mut parent_b, "a bold improviser who sketches before building");
//!
//! let (cleared, _report) = gate.clear_for_breeding(&parent_a, &parent_b);
//! if cleared {
//!     let mut engine = BreedingEngine::new();
//!     let (offspring, _birth) = engine.breed(&parent_a, &parent_b);
//!     assert_eq!(offspring.generation, 1);
//! }
//! ```

pub mod breeding;
pub mod models;
pub mod persona;
pub mod screening;
pub mod utilities;

pub use breeding::{BreedingEngine, BreedingParams};
pub use models::{
    BirthRecord, Capability, CompatibilityReport, Genome, QuarantineRecord, Specimen,
    TraitRecord, Verdict,
};
pub use persona::{DocumentFormat, PersonaParser};
pub use screening::{
    CompatibilityChecker, ScreeningGate, ScreeningParams, StabilityChecker, StabilityReading,
};
pub use utilities::ValidationError;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
