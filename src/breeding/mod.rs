//! Recombination engine: dominance weighting, per-strand crossover, and
//! post-crossover mutation.
//!
//! The engine is pure over its inputs. Each `breed` call reads two parent
//! specimens, builds a fresh offspring genome strand by strand, and issues
//! a birth record; nothing is retained between calls and the parents are
//! never written to. Randomness comes from an injected `rand::Rng`, so
//! tests run seeded and production uses the thread-local source.

pub mod choice;
pub mod engine;

pub use choice::{coin_flip, weighted_interleave, weighted_merge, weighted_pick};
pub use engine::{BreedingEngine, BreedingParams};
