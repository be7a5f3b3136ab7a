//! Pairwise compatibility check run before breeding is permitted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{CompatibilityReport, Specimen, Verdict};
use crate::screening::stability::DEFAULT_STABILITY_THRESHOLD;

/// A mutually exclusive capability pairing. Breeding is rejected when the
/// combined skill pool contains every skill of both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForbiddenCombo {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl ForbiddenCombo {
    fn new(left: &[&str], right: &[&str]) -> Self {
        Self {
            left: left.iter().map(|s| s.to_string()).collect(),
            right: right.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Screening thresholds and the forbidden-pair policy table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningParams {
    /// Diversity-ratio floor for the stability screen.
    pub stability_threshold: f64,
    /// Maximum allowed |tempA - tempB| before rejection.
    pub max_temperature_variance: f64,
    /// Combined unique skill count above which a warning is raised.
    pub max_skill_count: usize,
    /// Parent stability score below which a warning is raised.
    pub min_parent_stability: f64,
    /// Capability pairings that reject the pairing outright.
    pub forbidden_combos: Vec<ForbiddenCombo>,
}

impl Default for ScreeningParams {
    fn default() -> Self {
        Self {
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            max_temperature_variance: 0.6,
            max_skill_count: 8,
            min_parent_stability: 0.5,
            forbidden_combos: vec![
                ForbiddenCombo::new(&["filesystem-nuke"], &["filesystem-write"]),
                ForbiddenCombo::new(&["network-scan"], &["open-dm-policy"]),
            ],
        }
    }
}

/// Vets two specimens for breeding compatibility.
///
/// Checks run in a fixed order and the two hard checks short-circuit:
/// temperature variance first, forbidden skill pairings fourth. Everything
/// else accumulates warnings, which downgrade the verdict to WARNING but
/// still permit breeding.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityChecker {
    params: ScreeningParams,
}

impl CompatibilityChecker {
    pub fn new(params: ScreeningParams) -> Self {
        Self { params }
    }

    pub fn evaluate(&self, parent_a: &Specimen, parent_b: &Specimen) -> CompatibilityReport {
        let mut report = CompatibilityReport::new(&parent_a.id, &parent_b.id);

        // 1. Temperature variance.
        let temp_a = parent_a.genome.temperature();
        let temp_b = parent_b.genome.temperature();
        let variance = (temp_a - temp_b).abs();
        report
            .checks
            .insert("temperature_variance".to_string(), json!(variance));

        if variance > self.params.max_temperature_variance {
            report.verdict = Verdict::Rejected;
            report.notes = format!(
                "Temperature variance {:.2} exceeds maximum {}. Offspring would be unstable.",
                variance, self.params.max_temperature_variance
            );
            tracing::info!(variance, "pairing rejected on temperature variance");
            return report;
        }

        // 2. Provider lineage.
        let provider_a = parent_a.genome.provider().unwrap_or("unknown");
        let provider_b = parent_b.genome.provider().unwrap_or("unknown");
        report
            .checks
            .insert("provider_match".to_string(), json!(provider_a == provider_b));

        if provider_a != provider_b {
            report.warnings.push(format!(
                "Hybrid lineage ({} + {}). Monitor for hallucinations.",
                provider_a, provider_b
            ));
        }

        // 3. Combined skill complexity.
        let combined: HashSet<&str> = parent_a
            .genome
            .capability
            .skills
            .iter()
            .chain(parent_b.genome.capability.skills.iter())
            .map(String::as_str)
            .collect();
        report
            .checks
            .insert("total_skills".to_string(), json!(combined.len()));

        if combined.len() > self.params.max_skill_count {
            report.warnings.push(format!(
                "Bloated skillset: {} skills. Offspring may suffer high latency.",
                combined.len()
            ));
        }

        // 4. Forbidden capability pairings.
        for combo in &self.params.forbidden_combos {
            let left_present = combo.left.iter().all(|s| combined.contains(s.as_str()));
            let right_present = combo.right.iter().all(|s| combined.contains(s.as_str()));
            if left_present && right_present {
                report.verdict = Verdict::Rejected;
                report.notes = format!(
                    "Forbidden skill combination: {:?} + {:?}. Security risk.",
                    combo.left, combo.right
                );
                tracing::info!(?combo, "pairing rejected on forbidden skill combination");
                return report;
            }
        }

        // 5. Parent stability.
        if parent_a.stability_score < self.params.min_parent_stability
            || parent_b.stability_score < self.params.min_parent_stability
        {
            report.warnings.push(
                "One or both parents carry low stability scores. Offspring may inherit instability."
                    .to_string(),
            );
        }

        if report.warnings.is_empty() {
            report.verdict = Verdict::Approved;
            report.notes = "Fully compatible. Breeding approved.".to_string();
        } else {
            report.verdict = Verdict::Warning;
            report.notes = "Compatible with caveats. Review warnings.".to_string();
        }
        report
    }
}
