//! Hatchery demo binary.
//!
//! Walks the full breeding pipeline once: registers two parent specimens,
//! runs the arrival stability screen and the compatibility clearance, breeds
//! an offspring, and prints its birth record and rendered persona document.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo
//! ```

use anyhow::{bail, Result};
use serde_json::json;

use hatchery::{BreedingEngine, DocumentFormat, Genome, ScreeningGate, Specimen};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hatchery=debug".into()),
        )
        .init();

    let mut parent_a = seed_parent(
        "Agent Alpha",
        "A creative problem solver who sketches three options before committing",
        0.7,
        0.9,
        &["coding", "writing"],
    );
    let mut parent_b = seed_parent(
        "Agent Beta",
        "A precise analyst who distrusts unverified claims",
        0.3,
        0.6,
        &["analysis", "research", "writing"],
    );

    let gate = ScreeningGate::default();
    for (specimen, sample) in [
        (&mut parent_a, "I explore widely, compare options, and commit once the tradeoffs are clear."),
        (&mut parent_b, "I verify sources, measure twice, and flag anything that does not replicate."),
    ] {
        let screen = gate.screen_arrival(specimen, sample);
        if !screen.approved {
            bail!("{} failed arrival screening: {}", specimen.name, screen.reading.reason);
        }
    }

    let (cleared, report) = gate.clear_for_breeding(&parent_a, &parent_b);
    println!("Compatibility verdict: {}", report.verdict);
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    if !cleared {
        bail!("pairing blocked: {}", report.notes);
    }

    let mut engine = BreedingEngine::new();
    let (offspring, birth) = engine.breed(&parent_a, &parent_b);

    println!();
    println!("Offspring: {} (generation {})", offspring.name, offspring.generation);
    println!("Mutation occurred: {}", offspring.mutation_flag);
    println!("Skills: {:?}", offspring.genome.capability.skills);
    println!();
    println!("Birth record:");
    println!("{}", serde_json::to_string_pretty(&birth)?);
    println!();
    println!("Persona document:");
    println!("{}", engine.render_offspring(&offspring, DocumentFormat::Structured));

    Ok(())
}

fn seed_parent(
    name: &str,
    description: &str,
    temperature: f64,
    stability: f64,
    skills: &[&str],
) -> Specimen {
    let mut genome = Genome::default();
    genome
        .cognition
        .insert("temperature".to_string(), json!(temperature));
    genome
        .cognition
        .insert("provider".to_string(), json!("anthropic"));
    genome.personality.set_description(description);
    genome
        .personality
        .tone_style
        .insert("voice".to_string(), "Warm".to_string());
    genome.personality.boundaries.push("Never act on credentials without asking".to_string());
    genome.personality.workflow.push("Restate the goal".to_string());
    genome.personality.workflow.push("Check prior art".to_string());
    genome.capability.skills = skills.iter().map(|s| s.to_string()).collect();

    let mut specimen = Specimen::new(name, genome);
    specimen.stability_score = stability;
    specimen
}
