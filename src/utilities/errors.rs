//! Error types for model validation.

use thiserror::Error;

/// Errors raised by the explicit `validate()` entry points on model types.
///
/// The pure breeding and screening operations are total and never return
/// these; validation is the schema layer's concern and runs before records
/// reach the engine.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A numeric field left its allowed range.
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field that must be numeric held another JSON type.
    #[error("{field} must be numeric")]
    NotNumeric { field: String },
}
