//! Pre-breeding screening: stability and compatibility checks.
//!
//! Two independent checks gate the breeding pipeline. The stability check
//! is a text-diversity heuristic run on a single candidate's sample text;
//! the compatibility check vets a candidate pair. The [`ScreeningGate`]
//! composes both for callers that want the full front-door flow, but each
//! checker also stands alone.

pub mod compatibility;
pub mod gate;
pub mod stability;

pub use compatibility::{CompatibilityChecker, ForbiddenCombo, ScreeningParams};
pub use gate::{ArrivalScreen, ScreeningGate};
pub use stability::{StabilityChecker, StabilityReading, DEFAULT_STABILITY_THRESHOLD};
