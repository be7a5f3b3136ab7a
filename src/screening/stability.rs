//! Text-diversity stability check.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default diversity-ratio threshold below which a sample is unstable.
pub const DEFAULT_STABILITY_THRESHOLD: f64 = 0.4;

/// Outcome of a stability evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityReading {
    pub stable: bool,
    /// `unique tokens / total tokens` of the sample, in [0, 1].
    pub ratio: f64,
    pub reason: String,
}

/// Cheap anti-loop detector over a candidate's sample text.
///
/// Tokenizes by whitespace and measures the unique-to-total token ratio.
/// Text that repeats one short phrase collapses the ratio toward the
/// reciprocal of the phrase length, while varied prose stays well above
/// the threshold. Known imprecision: genuinely terse samples can
/// false-positive; longer prose with modest natural repetition is safe.
#[derive(Debug, Clone, Copy)]
pub struct StabilityChecker {
    threshold: f64,
}

impl Default for StabilityChecker {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STABILITY_THRESHOLD,
        }
    }
}

impl StabilityChecker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Evaluate a text sample. Empty samples are unstable with ratio 0.
    pub fn evaluate(&self, sample: &str) -> StabilityReading {
        let lowered = sample.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        if tokens.is_empty() {
            return StabilityReading {
                stable: false,
                ratio: 0.0,
                reason: "Empty text sample".to_string(),
            };
        }

        let unique = tokens.iter().collect::<HashSet<_>>().len();
        let ratio = unique as f64 / tokens.len() as f64;
        let stable = ratio > self.threshold;

        let reason = if stable {
            format!("Stable: {:.2} diversity ratio", ratio)
        } else {
            format!(
                "Unstable: {:.2} diversity ratio (threshold {})",
                ratio, self.threshold
            )
        };

        StabilityReading {
            stable,
            ratio,
            reason,
        }
    }
}
