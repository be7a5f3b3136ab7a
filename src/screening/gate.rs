//! Screening gate: composes the stability and compatibility checks.

use indexmap::IndexMap;

use crate::models::{
    CompatibilityReport, Location, QuarantineRecord, QuarantineStatus, Specimen, Status,
};
use crate::screening::compatibility::{CompatibilityChecker, ScreeningParams};
use crate::screening::stability::{StabilityChecker, StabilityReading};

/// Outcome of an arrival screen.
#[derive(Debug, Clone)]
pub struct ArrivalScreen {
    pub approved: bool,
    pub reading: StabilityReading,
    /// Present when the specimen was quarantined. The caller owns storage;
    /// the gate only produces the record.
    pub quarantine: Option<QuarantineRecord>,
}

/// Front door of the breeding pipeline.
///
/// Arrival screening runs the text-stability check and quarantines
/// failures; breeding clearance runs the pairwise compatibility check and
/// maps its verdict to a go/no-go. Both checks stay independently usable.
#[derive(Debug, Clone, Default)]
pub struct ScreeningGate {
    stability: StabilityChecker,
    compatibility: CompatibilityChecker,
}

impl ScreeningGate {
    pub fn new(params: ScreeningParams) -> Self {
        Self {
            stability: StabilityChecker::new(params.stability_threshold),
            compatibility: CompatibilityChecker::new(params),
        }
    }

    /// Screen a newly arrived specimen against its sample text.
    ///
    /// The measured diversity ratio is stamped on the specimen for audit.
    /// On failure the specimen is moved to quarantine and a record is
    /// returned for the caller to persist.
    pub fn screen_arrival(&self, specimen: &mut Specimen, sample: &str) -> ArrivalScreen {
        let reading = self.stability.evaluate(sample);
        specimen.diversity_ratio = Some(reading.ratio);

        if reading.stable {
            tracing::debug!(specimen = %specimen.name, ratio = reading.ratio, "arrival screen passed");
            return ArrivalScreen {
                approved: true,
                reading,
                quarantine: None,
            };
        }

        tracing::warn!(
            specimen = %specimen.name,
            ratio = reading.ratio,
            "arrival screen failed, quarantining"
        );
        specimen.location = Location::Quarantine;
        specimen.status = Status::Quarantined;

        let mut metrics = IndexMap::new();
        metrics.insert("diversity_ratio".to_string(), reading.ratio);
        metrics.insert("entropy".to_string(), specimen.entropy);
        metrics.insert("stability_score".to_string(), specimen.stability_score);

        let quarantine = QuarantineRecord {
            specimen_id: specimen.id.clone(),
            quarantined_at: chrono::Utc::now(),
            reason: reading.reason.clone(),
            metrics,
            status: QuarantineStatus::Quarantined,
        };

        ArrivalScreen {
            approved: false,
            reading,
            quarantine: Some(quarantine),
        }
    }

    /// Run the compatibility check and decide whether breeding may proceed.
    /// APPROVED and WARNING both clear the gate; only REJECTED blocks.
    pub fn clear_for_breeding(
        &self,
        parent_a: &Specimen,
        parent_b: &Specimen,
    ) -> (bool, CompatibilityReport) {
        let report = self.compatibility.evaluate(parent_a, parent_b);
        let cleared = report.verdict.permits_breeding();
        tracing::info!(verdict = %report.verdict, cleared, "breeding clearance evaluated");
        (cleared, report)
    }
}
