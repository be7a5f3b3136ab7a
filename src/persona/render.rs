//! Trait record serialization back to persona document text.

use crate::models::TraitRecord;
use crate::persona::parser::{
    SECTION_BOUNDARIES, SECTION_TONE, SECTION_VALUES, SECTION_WORKFLOW,
};
use serde::{Deserialize, Serialize};

/// Output dialect for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Front-matter metadata plus fixed `##` sections. Round-trips through
    /// the parser for identity name/description, tone, values, boundaries,
    /// and workflow.
    Structured,
    /// Free prose. Decorative; re-parsing is best-effort only.
    Narrative,
}

/// Serialize a trait record to document text.
pub fn render(record: &TraitRecord, format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Structured => render_structured(record),
        DocumentFormat::Narrative => render_narrative(record),
    }
}

fn render_structured(record: &TraitRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    // The front-matter fence is always emitted, even when empty, so the
    // parser's dialect detection sees a structured document.
    lines.push("---".to_string());
    if let Some(name) = record.name().filter(|n| !n.is_empty()) {
        lines.push(format!("name: {}", name));
    }
    if let Some(description) = record.description().filter(|d| !d.is_empty()) {
        lines.push(format!("description: {}", description));
    }
    lines.push("---".to_string());
    lines.push(String::new());

    lines.push("# Persona".to_string());
    lines.push(String::new());

    if let Some(description) = record.description() {
        lines.push(format!("You are {}.", description));
        lines.push(String::new());
    }

    if !record.tone_style.is_empty() {
        lines.push(format!("## {}", SECTION_TONE));
        lines.push(String::new());
        for (key, value) in &record.tone_style {
            lines.push(format!("- **{}:** {}", display_key(key), value));
        }
        lines.push(String::new());
    }

    if !record.core_values.is_empty() {
        lines.push(format!("## {}", SECTION_VALUES));
        lines.push(String::new());
        for (key, value) in &record.core_values {
            lines.push(format!("- **{}:** {}", display_key(key), value));
        }
        lines.push(String::new());
    }

    if !record.boundaries.is_empty() {
        lines.push(format!("## {}", SECTION_BOUNDARIES));
        lines.push(String::new());
        for boundary in &record.boundaries {
            lines.push(format!("🚫 {}", boundary));
        }
        lines.push(String::new());
    }

    if !record.workflow.is_empty() {
        lines.push(format!("## {}", SECTION_WORKFLOW));
        lines.push(String::new());
        for (index, step) in record.workflow.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, step));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_narrative(record: &TraitRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Who I Am".to_string());
    lines.push(String::new());

    if let Some(description) = record.description() {
        lines.push(format!("*{}*", description));
        lines.push(String::new());
    }

    if !record.core_values.is_empty() {
        lines.push("## Core Principles".to_string());
        lines.push(String::new());
        for value in record.core_values.values() {
            lines.push(format!("**{}**", value));
        }
        lines.push(String::new());
    }

    if !record.tone_style.is_empty() {
        lines.push("## How I Communicate".to_string());
        lines.push(String::new());
        for value in record.tone_style.values() {
            lines.push(value.clone());
        }
        lines.push(String::new());
    }

    lines.push("## On Changing".to_string());
    lines.push(String::new());
    lines.push("This is a starting point, not a destination.".to_string());
    lines.push("Changes get documented, not hidden.".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// `snake_case` key to display form: "response_style" -> "Response Style".
fn display_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TraitRecord {
        let mut record = TraitRecord::default();
        record.identity.insert("name".to_string(), "Echo".to_string());
        record.set_description("a patient troubleshooter");
        record
            .tone_style
            .insert("voice".to_string(), "Calm".to_string());
        record
            .core_values
            .insert("patience".to_string(), "Waits for the full picture".to_string());
        record.boundaries.push("No irreversible actions".to_string());
        record.workflow.push("Reproduce before fixing".to_string());
        record
    }

    #[test]
    fn test_structured_contains_fixed_sections() {
        let text = render(&sample_record(), DocumentFormat::Structured);
        assert!(text.starts_with("---\n"));
        assert!(text.contains("name: Echo"));
        assert!(text.contains("## Tone and Style Guidelines"));
        assert!(text.contains("## Core Values"));
        assert!(text.contains("## Boundaries and Constraints"));
        assert!(text.contains("## Workflow Priorities"));
        assert!(text.contains("- **Voice:** Calm"));
        assert!(text.contains("🚫 No irreversible actions"));
        assert!(text.contains("1. Reproduce before fixing"));
    }

    #[test]
    fn test_structured_skips_empty_sections() {
        let mut record = sample_record();
        record.workflow.clear();
        let text = render(&record, DocumentFormat::Structured);
        assert!(!text.contains("## Workflow Priorities"));
    }

    #[test]
    fn test_narrative_emphasizes_identity() {
        let text = render(&sample_record(), DocumentFormat::Narrative);
        assert!(text.contains("*a patient troubleshooter*"));
        assert!(text.contains("**Waits for the full picture**"));
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("response_style"), "Response Style");
        assert_eq!(display_key("voice"), "Voice");
    }
}
