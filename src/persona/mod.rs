//! Personality document parsing and rendering.
//!
//! A persona document is a semi-structured text profile describing how an
//! agent presents itself. This module converts documents into normalized
//! [`TraitRecord`](crate::models::TraitRecord)s and serializes records back
//! to text in either of two dialects:
//!
//! - **Structured**: YAML front-matter metadata followed by fixed `##`
//!   sections. Parses losslessly for the fields the dialect carries.
//! - **Narrative**: free prose. Parsed with best-effort heuristics
//!   (emphasized spans, bolded trade-off statements); extraction is
//!   pattern matching, not a grammar, and is not guaranteed complete.

pub mod parser;
pub mod render;

pub use parser::PersonaParser;
pub use render::DocumentFormat;
