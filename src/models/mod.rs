//! Data model for the breeding habitat.
//!
//! All types here are plain values: serde-serializable, cheap to clone, and
//! free of interior mutability. The persistence and API layers live outside
//! this crate; callers durably store whatever these types return.

pub mod genome;
pub mod record;
pub mod report;
pub mod sanitize;
pub mod specimen;

pub use genome::{Capability, Genome};
pub use record::TraitRecord;
pub use report::{
    BirthRecord, CompatibilityReport, Lineage, QuarantineRecord, QuarantineStatus, TechnicalSpec,
    Verdict, FACILITY_LABEL, GENOME_VERSION,
};
pub use sanitize::sanitize_text;
pub use specimen::{Location, Specimen, Status, Tier};
