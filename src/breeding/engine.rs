//! The recombination engine: weighted crossover, mutation, and offspring
//! assembly.
//!
//! Breeding is a pure transformation over copies of the two parent records.
//! Neither parent is ever mutated; the engine reads both genomes and builds
//! a fresh offspring plus its birth record. All probabilistic choices flow
//! through the injected random source, so seeded runs are reproducible.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::breeding::choice::{coin_flip, weighted_interleave, weighted_merge};
use crate::models::{
    BirthRecord, Capability, Genome, Lineage, Specimen, TechnicalSpec, TraitRecord,
    FACILITY_LABEL, GENOME_VERSION,
};
use crate::persona::{DocumentFormat, PersonaParser};

// ---------------------------------------------------------------------------
// Tunables
// ---------------------------------------------------------------------------

/// Mutation rates, pools, and caps driving the engine.
///
/// Defaults are the production values; tests and operators can load
/// overrides (the struct deserializes with per-field fallbacks).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingParams {
    /// Chance of a temperature shift mutation.
    pub temperature_shift_rate: f64,
    /// Chance of awakening an exotic skill.
    pub skill_awakening_rate: f64,
    /// Chance of inserting a novel core value.
    pub value_insertion_rate: f64,
    /// Chance of entering the tone mutation branch (a further 50/50 flip
    /// decides whether the voice actually changes).
    pub tone_mutation_rate: f64,
    /// Keep probability for skills present in only one parent.
    pub recessive_keep_rate: f64,
    /// Maximum workflow steps an offspring inherits.
    pub workflow_cap: usize,
    /// Candidate temperature deltas, drawn uniformly.
    pub temperature_shifts: Vec<f64>,
    /// Skills an awakening mutation can grant.
    pub exotic_skills: Vec<String>,
    /// `key: description` entries an insertion mutation can add.
    pub value_pool: Vec<String>,
    /// Voice descriptors a tone mutation can append.
    pub voice_pool: Vec<String>,
}

impl Default for BreedingParams {
    fn default() -> Self {
        Self {
            temperature_shift_rate: 0.10,
            skill_awakening_rate: 0.01,
            value_insertion_rate: 0.05,
            tone_mutation_rate: 0.05,
            recessive_keep_rate: 0.7,
            workflow_cap: 6,
            temperature_shifts: vec![-0.2, -0.1, 0.1, 0.2],
            exotic_skills: vec![
                "browser-automation".to_string(),
                "vector-search".to_string(),
                "data-analysis".to_string(),
                "creative-writing".to_string(),
            ],
            value_pool: vec![
                "curiosity: Seeks to understand before acting".to_string(),
                "efficiency: Values speed and directness".to_string(),
                "empathy: Reads the room before responding".to_string(),
                "precision: Accuracy over speed".to_string(),
                "creativity: Reaches for the unobvious".to_string(),
                "stability: Prefers proven paths".to_string(),
            ],
            voice_pool: vec![
                "Playful".to_string(),
                "Serious".to_string(),
                "Sarcastic".to_string(),
                "Warm".to_string(),
                "Clinical".to_string(),
                "Enthusiastic".to_string(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Breeds two specimens into one offspring.
pub struct BreedingEngine<R: Rng> {
    rng: R,
    params: BreedingParams,
    parser: PersonaParser,
}

impl BreedingEngine<ThreadRng> {
    /// Engine over the thread-local random source with default tunables.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for BreedingEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BreedingEngine<R> {
    /// Engine over an injected random source, for reproducible runs.
    pub fn with_rng(rng: R) -> Self {
        Self::with_params(rng, BreedingParams::default())
    }

    /// Engine with explicit tunables.
    pub fn with_params(rng: R, params: BreedingParams) -> Self {
        Self {
            rng,
            params,
            parser: PersonaParser::new(),
        }
    }

    /// Breed two parents into an offspring specimen and its birth record.
    ///
    /// Both parents are read-only; the offspring is a fresh value with
    /// `generation = max(parents) + 1` and the parent ids recorded in
    /// argument order.
    pub fn breed(&mut self, parent_a: &Specimen, parent_b: &Specimen) -> (Specimen, BirthRecord) {
        let weight_a =
            Self::dominance_weight(parent_a.stability_score, parent_b.stability_score);
        tracing::debug!(
            weight_a,
            parent_a = %parent_a.name,
            parent_b = %parent_b.name,
            "starting crossover"
        );

        let mut genome = self.crossover(
            &parent_a.genome,
            &parent_b.genome,
            parent_a.stability_score,
            parent_b.stability_score,
        );
        let mutated = self.mutate(&mut genome);

        let name = self.offspring_name(&parent_a.name, &parent_b.name);
        let offspring = Specimen::offspring(name, genome, parent_a, parent_b, mutated);
        tracing::info!(
            offspring = %offspring.name,
            generation = offspring.generation,
            mutated,
            "offspring incubated"
        );

        let record = Self::issue_birth_record(&offspring);
        (offspring, record)
    }

    /// Dominance weight toward parent A, derived from the stability scores.
    /// Falls back to an even split when both scores are zero.
    pub fn dominance_weight(stability_a: f64, stability_b: f64) -> f64 {
        let total = stability_a + stability_b;
        if total > 0.0 {
            stability_a / total
        } else {
            0.5
        }
    }

    /// Cross two genomes strand by strand.
    pub fn crossover(
        &mut self,
        a: &Genome,
        b: &Genome,
        stability_a: f64,
        stability_b: f64,
    ) -> Genome {
        let weight_a = Self::dominance_weight(stability_a, stability_b);
        Genome {
            cognition: weighted_merge(&mut self.rng, &a.cognition, &b.cognition, weight_a),
            personality: self.blend_personality(&a.personality, &b.personality, weight_a),
            capability: self.combine_capabilities(&a.capability, &b.capability),
        }
    }

    fn blend_personality(
        &mut self,
        a: &TraitRecord,
        b: &TraitRecord,
        weight_a: f64,
    ) -> TraitRecord {
        let mut blended = TraitRecord::default();

        let description = Self::blend_identity(a.description(), b.description(), weight_a);
        if !description.is_empty() {
            blended.set_description(description);
        }

        blended.tone_style =
            weighted_merge(&mut self.rng, &a.tone_style, &b.tone_style, weight_a);

        // Union both value maps, then apply one dominance-skewed keep rate
        // uniformly. Retention scales with dominance magnitude, not with
        // which parent a value came from.
        let retention = weight_a.max(1.0 - weight_a);
        let mut union = a.core_values.clone();
        for (key, value) in &b.core_values {
            union.insert(key.clone(), value.clone());
        }
        blended.core_values = union
            .into_iter()
            .filter(|_| self.rng.gen::<f64>() < retention)
            .collect();

        // Boundaries are safety constraints: monotonically inherited.
        let mut seen = HashSet::new();
        blended.boundaries = a
            .boundaries
            .iter()
            .chain(b.boundaries.iter())
            .filter(|item| seen.insert(item.as_str()))
            .cloned()
            .collect();

        blended.workflow = weighted_interleave(
            &mut self.rng,
            &a.workflow,
            &b.workflow,
            weight_a,
            self.params.workflow_cap,
        );

        blended
    }

    /// Blend two identity descriptions with dominance-aware templating.
    ///
    /// Above 0.7 the dominant side leads; below 0.3 it yields; in between
    /// the result is an even synthesis. An empty or missing side returns
    /// the other unmodified.
    pub fn blend_identity(a: Option<&str>, b: Option<&str>, weight_a: f64) -> String {
        let a = a.filter(|text| !text.is_empty());
        let b = b.filter(|text| !text.is_empty());
        match (a, b) {
            (Some(a), Some(b)) => {
                if weight_a > 0.7 {
                    format!("{}, subtly influenced by {}", a, b.to_lowercase())
                } else if weight_a < 0.3 {
                    format!("{}, tempered with {}", b, a.to_lowercase())
                } else {
                    format!("A synthesis of {} and {}", a.to_lowercase(), b.to_lowercase())
                }
            }
            (one, other) => one.or(other).unwrap_or_default().to_string(),
        }
    }

    fn combine_capabilities(&mut self, a: &Capability, b: &Capability) -> Capability {
        let in_a: HashSet<&str> = a.skills.iter().map(String::as_str).collect();
        let in_b: HashSet<&str> = b.skills.iter().map(String::as_str).collect();

        let mut seen = HashSet::new();
        let mut skills = Vec::new();
        for skill in a.skills.iter().chain(b.skills.iter()) {
            if !seen.insert(skill.as_str()) {
                continue;
            }
            // Shared skills are dominant and always survive; single-parent
            // skills are recessive.
            let dominant = in_a.contains(skill.as_str()) && in_b.contains(skill.as_str());
            if dominant || self.rng.gen::<f64>() < self.params.recessive_keep_rate {
                skills.push(skill.clone());
            }
        }

        // Plugin config travels wholesale from one parent. This flip is
        // intentionally unweighted, unlike every other strand.
        let plugins = if coin_flip(&mut self.rng) {
            a.plugins.clone()
        } else {
            b.plugins.clone()
        };

        Capability { skills, plugins }
    }

    /// Apply the four mutation checks to a crossover result.
    ///
    /// Each check rolls independently of the others' outcomes. Returns
    /// true when at least one check fired and applied a change.
    pub fn mutate(&mut self, genome: &mut Genome) -> bool {
        let mut fired = false;

        if self.rng.gen::<f64>() < self.params.temperature_shift_rate {
            if let Some(current) = genome.cognition.get("temperature").and_then(Value::as_f64) {
                let shift = self
                    .params
                    .temperature_shifts
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(0.0);
                let shifted = ((current + shift).clamp(0.1, 1.0) * 100.0).round() / 100.0;
                genome
                    .cognition
                    .insert("temperature".to_string(), Value::from(shifted));
                tracing::debug!(from = current, to = shifted, "temperature mutation");
                fired = true;
            }
        }

        if self.rng.gen::<f64>() < self.params.skill_awakening_rate {
            if let Some(skill) = self.params.exotic_skills.choose(&mut self.rng) {
                if !genome.capability.skills.contains(skill) {
                    genome.capability.skills.push(skill.clone());
                    tracing::debug!(skill = %skill, "skill awakening");
                    fired = true;
                }
            }
        }

        if self.rng.gen::<f64>() < self.params.value_insertion_rate {
            if let Some(entry) = self.params.value_pool.choose(&mut self.rng) {
                if let Some((key, description)) = entry.split_once(": ") {
                    genome
                        .personality
                        .core_values
                        .insert(key.to_string(), description.to_string());
                    fired = true;
                }
            }
        }

        if self.rng.gen::<f64>() < self.params.tone_mutation_rate && coin_flip(&mut self.rng) {
            if let Some(descriptor) = self.params.voice_pool.choose(&mut self.rng) {
                let current = genome
                    .personality
                    .tone_style
                    .get("voice")
                    .cloned()
                    .unwrap_or_default();
                let voice = format!("{}, {}", current, descriptor);
                genome.personality.tone_style.insert(
                    "voice".to_string(),
                    voice
                        .trim_matches(|c: char| c == ',' || c == ' ')
                        .to_string(),
                );
                fired = true;
            }
        }

        fired
    }

    fn offspring_name(&mut self, name_a: &str, name_b: &str) -> String {
        let parts_a: Vec<&str> = name_a.split_whitespace().collect();
        let parts_b: Vec<&str> = name_b.split_whitespace().collect();

        match (parts_a.first(), parts_a.last(), parts_b.first(), parts_b.last()) {
            (Some(a_first), Some(a_last), Some(b_first), Some(b_last)) => {
                if coin_flip(&mut self.rng) {
                    format!("{}{}", a_first, b_last)
                } else {
                    format!("{}{}", b_first, a_last)
                }
            }
            _ => format!("Hybrid-{}", self.rng.gen_range(1000..10000)),
        }
    }

    fn issue_birth_record(offspring: &Specimen) -> BirthRecord {
        BirthRecord::issue(
            Lineage {
                name: offspring.name.clone(),
                parents: offspring.parent_ids.clone().unwrap_or_default(),
                generation: offspring.generation,
                facility: FACILITY_LABEL.to_string(),
            },
            TechnicalSpec {
                service_tier: offspring.tier,
                mutation_flag: offspring.mutation_flag,
                genome_version: GENOME_VERSION.to_string(),
                specimen_id: offspring.id.clone(),
            },
        )
    }

    /// Round-trip the offspring's personality strand back to document text.
    pub fn render_offspring(&self, specimen: &Specimen, format: DocumentFormat) -> String {
        self.parser.render(&specimen.genome.personality, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    type TestEngine = BreedingEngine<StdRng>;

    fn engine(seed: u64) -> TestEngine {
        BreedingEngine::with_rng(StdRng::seed_from_u64(seed))
    }

    fn quiet_params() -> BreedingParams {
        BreedingParams {
            temperature_shift_rate: 0.0,
            skill_awakening_rate: 0.0,
            value_insertion_rate: 0.0,
            tone_mutation_rate: 0.0,
            ..BreedingParams::default()
        }
    }

    fn specimen(name: &str, stability: f64, skills: &[&str]) -> Specimen {
        let mut genome = Genome::default();
        genome.cognition.insert("temperature".to_string(), json!(0.5));
        genome
            .cognition
            .insert("provider".to_string(), json!("anthropic"));
        genome.capability.skills = skills.iter().map(|s| s.to_string()).collect();
        let mut specimen = Specimen::new(name, genome);
        specimen.stability_score = stability;
        specimen
    }

    #[test]
    fn test_dominance_weight() {
        assert!((TestEngine::dominance_weight(0.9, 0.1) - 0.9).abs() < 1e-9);
        assert!((TestEngine::dominance_weight(0.2, 0.2) - 0.5).abs() < 1e-9);
        assert_eq!(TestEngine::dominance_weight(0.0, 0.0), 0.5);
    }

    #[test]
    fn test_blend_identity_dominant_a() {
        let blended =
            TestEngine::blend_identity(Some("calm analyst"), Some("wild artist"), 0.9);
        assert_eq!(blended, "calm analyst, subtly influenced by wild artist");
    }

    #[test]
    fn test_blend_identity_dominant_b() {
        let blended = TestEngine::blend_identity(Some("Calm Analyst"), Some("Wild Artist"), 0.1);
        assert_eq!(blended, "Wild Artist, tempered with calm analyst");
    }

    #[test]
    fn test_blend_identity_synthesis() {
        let blended = TestEngine::blend_identity(Some("Calm Analyst"), Some("Wild Artist"), 0.5);
        assert_eq!(blended, "A synthesis of calm analyst and wild artist");
    }

    #[test]
    fn test_blend_identity_one_sided() {
        assert_eq!(
            TestEngine::blend_identity(Some("calm analyst"), None, 0.9),
            "calm analyst"
        );
        assert_eq!(
            TestEngine::blend_identity(Some(""), Some("wild artist"), 0.9),
            "wild artist"
        );
        assert_eq!(TestEngine::blend_identity(None, None, 0.5), "");
    }

    #[test]
    fn test_offspring_generation_and_parents() {
        let mut engine = engine(1);
        let mut a = specimen("Alpha", 0.8, &["coding"]);
        let mut b = specimen("Beta", 0.6, &["writing"]);
        a.generation = 3;
        b.generation = 1;

        let (offspring, record) = engine.breed(&a, &b);
        assert_eq!(offspring.generation, 4);
        assert_eq!(
            offspring.parent_ids,
            Some(vec![a.id.clone(), b.id.clone()])
        );
        assert_eq!(record.lineage.parents, vec![a.id.clone(), b.id.clone()]);
        assert_eq!(record.lineage.generation, 4);
        assert_eq!(record.lineage.facility, FACILITY_LABEL);
        assert_eq!(record.technical.genome_version, GENOME_VERSION);
        assert_eq!(record.technical.specimen_id, offspring.id);
    }

    #[test]
    fn test_parents_are_never_mutated() {
        let mut engine = engine(2);
        let a = specimen("Alpha", 0.8, &["coding"]);
        let b = specimen("Beta", 0.6, &["writing"]);
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = engine.breed(&a, &b);
        assert_eq!(a.genome, a_before.genome);
        assert_eq!(b.genome, b_before.genome);
    }

    #[test]
    fn test_shared_skills_always_inherited() {
        let mut engine = engine(3);
        let a = specimen("Alpha", 0.9, &["logic", "coding"]);
        let b = specimen("Beta", 0.1, &["logic", "painting"]);

        for _ in 0..100 {
            let (offspring, _) = engine.breed(&a, &b);
            assert!(offspring
                .genome
                .capability
                .skills
                .contains(&"logic".to_string()));
        }
    }

    #[test]
    fn test_recessive_skill_keep_rate() {
        // Spec scenario: the single-parent skill survives at 0.7. Over
        // 1000 seeded trials the count lands inside a generous band.
        let mut engine = BreedingEngine::with_params(
            StdRng::seed_from_u64(4),
            quiet_params(),
        );
        let a = specimen("Alpha", 0.9, &["x"]);
        let b = specimen("Beta", 0.1, &["x", "y"]);

        let mut kept = 0;
        for _ in 0..1000 {
            let (offspring, _) = engine.breed(&a, &b);
            assert!(offspring.genome.capability.skills.contains(&"x".to_string()));
            if offspring.genome.capability.skills.contains(&"y".to_string()) {
                kept += 1;
            }
        }
        assert!(
            (650..=750).contains(&kept),
            "expected ~700 of 1000 recessive inclusions, got {}",
            kept
        );
    }

    #[test]
    fn test_boundaries_union_deduplicated() {
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(5), quiet_params());
        let mut a = specimen("Alpha", 0.5, &[]);
        let mut b = specimen("Beta", 0.5, &[]);
        a.genome.personality.boundaries =
            vec!["No secrets".to_string(), "No spam".to_string()];
        b.genome.personality.boundaries =
            vec!["No spam".to_string(), "No threats".to_string()];

        let (offspring, _) = engine.breed(&a, &b);
        assert_eq!(
            offspring.genome.personality.boundaries,
            vec![
                "No secrets".to_string(),
                "No spam".to_string(),
                "No threats".to_string()
            ]
        );
    }

    #[test]
    fn test_workflow_capped() {
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(6), quiet_params());
        let mut a = specimen("Alpha", 0.5, &[]);
        let mut b = specimen("Beta", 0.5, &[]);
        a.genome.personality.workflow = (1..=5).map(|i| format!("a{}", i)).collect();
        b.genome.personality.workflow = (1..=5).map(|i| format!("b{}", i)).collect();

        let (offspring, _) = engine.breed(&a, &b);
        assert_eq!(offspring.genome.personality.workflow.len(), 6);
    }

    #[test]
    fn test_full_dominance_keeps_all_core_values() {
        // weight_a = 1.0 makes the retention rate 1.0, so the whole union
        // survives.
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(7), quiet_params());
        let mut a = specimen("Alpha", 1.0, &[]);
        let mut b = specimen("Beta", 0.0, &[]);
        a.genome
            .personality
            .core_values
            .insert("logic".to_string(), "Proof first".to_string());
        b.genome
            .personality
            .core_values
            .insert("chaos".to_string(), "Embrace noise".to_string());

        let (offspring, _) = engine.breed(&a, &b);
        assert_eq!(offspring.genome.personality.core_values.len(), 2);
    }

    #[test]
    fn test_plugins_inherited_wholesale() {
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(8), quiet_params());
        let mut a = specimen("Alpha", 0.9, &[]);
        let mut b = specimen("Beta", 0.1, &[]);
        a.genome
            .capability
            .plugins
            .insert("search".to_string(), json!({"depth": 3}));
        b.genome
            .capability
            .plugins
            .insert("scheduler".to_string(), json!({"cron": "daily"}));

        for _ in 0..50 {
            let (offspring, _) = engine.breed(&a, &b);
            let plugins = &offspring.genome.capability.plugins;
            let from_a = *plugins == a.genome.capability.plugins;
            let from_b = *plugins == b.genome.capability.plugins;
            assert!(from_a || from_b, "plugins must come from exactly one parent");
        }
    }

    #[test]
    fn test_identity_blend_through_breed() {
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(9), quiet_params());
        let mut a = specimen("Alpha", 0.9, &[]);
        let mut b = specimen("Beta", 0.1, &[]);
        a.genome.personality.set_description("calm analyst");
        b.genome.personality.set_description("wild artist");

        let (offspring, _) = engine.breed(&a, &b);
        assert_eq!(
            offspring.genome.personality.description(),
            Some("calm analyst, subtly influenced by wild artist")
        );
    }

    #[test]
    fn test_mutation_flag_false_when_rates_zero() {
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(10), quiet_params());
        let a = specimen("Alpha", 0.5, &["coding"]);
        let b = specimen("Beta", 0.5, &["writing"]);
        for _ in 0..50 {
            let (offspring, record) = engine.breed(&a, &b);
            assert!(!offspring.mutation_flag);
            assert!(!record.technical.mutation_flag);
        }
    }

    #[test]
    fn test_forced_temperature_mutation_clamps_and_rounds() {
        let params = BreedingParams {
            temperature_shift_rate: 1.0,
            skill_awakening_rate: 0.0,
            value_insertion_rate: 0.0,
            tone_mutation_rate: 0.0,
            temperature_shifts: vec![0.2],
            ..BreedingParams::default()
        };
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(11), params);
        let mut genome = Genome::default();
        genome.cognition.insert("temperature".to_string(), json!(0.95));

        let fired = engine.mutate(&mut genome);
        assert!(fired);
        assert_eq!(genome.temperature(), 1.0);
    }

    #[test]
    fn test_temperature_mutation_skipped_without_key() {
        let params = BreedingParams {
            temperature_shift_rate: 1.0,
            skill_awakening_rate: 0.0,
            value_insertion_rate: 0.0,
            tone_mutation_rate: 0.0,
            ..BreedingParams::default()
        };
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(12), params);
        let mut genome = Genome::default();
        assert!(!engine.mutate(&mut genome));
        assert!(genome.cognition.is_empty());
    }

    #[test]
    fn test_skill_awakening_never_duplicates() {
        let params = BreedingParams {
            temperature_shift_rate: 0.0,
            skill_awakening_rate: 1.0,
            value_insertion_rate: 0.0,
            tone_mutation_rate: 0.0,
            exotic_skills: vec!["vector-search".to_string()],
            ..BreedingParams::default()
        };
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(13), params);
        let mut genome = Genome::default();
        genome.capability.skills.push("vector-search".to_string());

        assert!(!engine.mutate(&mut genome));
        assert_eq!(genome.capability.skills.len(), 1);
    }

    #[test]
    fn test_tone_mutation_trims_stray_commas() {
        let params = BreedingParams {
            temperature_shift_rate: 0.0,
            skill_awakening_rate: 0.0,
            value_insertion_rate: 0.0,
            tone_mutation_rate: 1.0,
            voice_pool: vec!["Warm".to_string()],
            ..BreedingParams::default()
        };
        let mut engine = BreedingEngine::with_params(StdRng::seed_from_u64(14), params);

        // The tone branch still carries an inner 50/50, so retry until it
        // lands; a fresh genome each round isolates the trim behavior.
        let mut applied = false;
        for _ in 0..100 {
            let mut genome = Genome::default();
            if engine.mutate(&mut genome) {
                let voice = genome.personality.tone_style.get("voice").unwrap();
                assert_eq!(voice, "Warm");
                applied = true;
                break;
            }
        }
        assert!(applied, "tone mutation never landed in 100 attempts");
    }

    #[test]
    fn test_offspring_name_combines_parent_tokens() {
        let mut engine = engine(15);
        for _ in 0..20 {
            let name = engine.offspring_name("Agent Alpha", "Beta Prime");
            assert!(
                name == "AgentPrime" || name == "BetaAlpha",
                "unexpected name {}",
                name
            );
        }
    }

    #[test]
    fn test_offspring_name_fallback_for_empty_parent() {
        let mut engine = engine(16);
        let name = engine.offspring_name("", "Beta");
        assert!(name.starts_with("Hybrid-"), "unexpected name {}", name);
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: BreedingParams =
            serde_json::from_str(r#"{"workflow_cap": 4}"#).unwrap();
        assert_eq!(params.workflow_cap, 4);
        assert_eq!(params.temperature_shift_rate, 0.10);
        assert_eq!(params.voice_pool.len(), 6);
    }
}
