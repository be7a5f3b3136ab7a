//! Persona document parser.
//!
//! Auto-detects the document dialect and extracts a [`TraitRecord`].
//! Malformed metadata is skipped, never fatal: a document with a broken
//! front-matter block still yields its sections with an empty identity.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::TraitRecord;
use crate::persona::render::{self, DocumentFormat};

/// Section names fixed by the structured dialect.
pub const SECTION_TONE: &str = "Tone and Style Guidelines";
pub const SECTION_VALUES: &str = "Core Values";
pub const SECTION_BOUNDARIES: &str = "Boundaries and Constraints";
pub const SECTION_WORKFLOW: &str = "Workflow Priorities";

static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---").unwrap());
static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").unwrap());
static BULLET_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s*(.+?):\s*(.+)$").unwrap());
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*]|🚫|⚠️|✅)\s*(.+)$").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static EMPHASIZED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_](.+?)[*_]").unwrap());
static BOLD_STATEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\.\*\*").unwrap());

/// Parses persona documents and renders trait records back to text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaParser;

impl PersonaParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a document into a trait record, auto-detecting the dialect.
    pub fn parse(&self, document: &str) -> TraitRecord {
        if is_structured(document) {
            parse_structured(document)
        } else {
            parse_narrative(document)
        }
    }

    /// Serialize a trait record to document text in the requested dialect.
    pub fn render(&self, record: &TraitRecord, format: DocumentFormat) -> String {
        render::render(record, format)
    }
}

/// Structured documents open with a front-matter fence.
fn is_structured(document: &str) -> bool {
    document.trim_start().starts_with("---")
}

fn parse_structured(document: &str) -> TraitRecord {
    let mut record = TraitRecord::default();
    let trimmed = document.trim_start();
    let mut body = trimmed;

    if let Some(caps) = FRONT_MATTER.captures(trimmed) {
        // Unparseable metadata is dropped silently; the sections below
        // are still worth extracting.
        if let Ok(meta) =
            serde_yaml::from_str::<IndexMap<String, serde_yaml::Value>>(&caps[1])
        {
            for key in ["name", "description"] {
                if let Some(value) = meta.get(key).and_then(|v| v.as_str()) {
                    if !value.is_empty() {
                        record.identity.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }
        body = &trimmed[caps.get(0).expect("capture 0 always present").end()..];
    }

    let sections = split_sections(body);
    if let Some(text) = sections.get(SECTION_TONE) {
        record.tone_style = parse_bullet_map(text);
    }
    if let Some(text) = sections.get(SECTION_VALUES) {
        record.core_values = parse_bullet_map(text);
    }
    if let Some(text) = sections.get(SECTION_BOUNDARIES) {
        record.boundaries = parse_list_items(text);
    }
    if let Some(text) = sections.get(SECTION_WORKFLOW) {
        record.workflow = parse_numbered_list(text);
    }
    record
}

/// Best-effort extraction from free prose.
///
/// Identity comes from the first emphasized span in the opening lines;
/// values from bolded sentences, with ` over ` as the tell for a trade-off
/// statement; tone from a small keyword table. Heuristic by design.
fn parse_narrative(document: &str) -> TraitRecord {
    let mut record = TraitRecord::default();

    for line in document.trim().lines().take(5) {
        if !line.contains('*') && !line.contains('_') {
            continue;
        }
        if let Some(caps) = EMPHASIZED_SPAN.captures(line) {
            let description = caps[1].trim_matches(|c| c == '*' || c == '_').trim();
            if !description.is_empty() {
                record.set_description(description);
                break;
            }
        }
    }

    for (index, caps) in BOLD_STATEMENT.captures_iter(document).enumerate() {
        let statement = caps[1].trim();
        let key = match statement.split_once(" over ") {
            Some((principle, _)) => principle.to_lowercase().replace(' ', "_"),
            None => format!("value_{}", index + 1),
        };
        record.core_values.insert(key, statement.to_string());
    }

    let lowered = document.to_lowercase();
    if ["quiet", "concise", "brief"].iter().any(|w| lowered.contains(w)) {
        record
            .tone_style
            .insert("voice".to_string(), "Quiet, concise".to_string());
    }
    if ["kind", "compassion", "empathy"]
        .iter()
        .any(|w| lowered.contains(w))
    {
        record
            .tone_style
            .insert("empathy".to_string(), "High".to_string());
    }

    record
}

/// Split markdown content into `## `-headed sections.
fn split_sections(content: &str) -> IndexMap<String, String> {
    let mut sections = IndexMap::new();
    let mut current: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = SECTION_HEADER.captures(line) {
            if let Some(name) = current.take() {
                sections.insert(name, buffer.join("\n").trim().to_string());
            }
            current = Some(caps[1].trim().to_string());
            buffer.clear();
        } else if current.is_some() {
            buffer.push(line);
        }
    }
    if let Some(name) = current {
        sections.insert(name, buffer.join("\n").trim().to_string());
    }
    sections
}

/// Parse `- Key: Value` bullets (bold markers tolerated on either part)
/// into a map with lowercased, underscore-joined keys.
fn parse_bullet_map(text: &str) -> IndexMap<String, String> {
    let mut result = IndexMap::new();
    for line in text.lines() {
        if let Some(caps) = BULLET_PAIR.captures(line.trim()) {
            let key = caps[1]
                .trim()
                .trim_matches('*')
                .trim()
                .to_lowercase()
                .replace(' ', "_");
            let value = caps[2].trim().trim_matches('*').trim().to_string();
            if !key.is_empty() && !value.is_empty() {
                result.insert(key, value);
            }
        }
    }
    result
}

/// Parse bulleted or marker-prefixed list items.
fn parse_list_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            LIST_ITEM
                .captures(line.trim())
                .map(|caps| caps[1].trim().to_string())
        })
        .collect()
}

/// Parse `1. step` numbered items in order.
fn parse_numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            NUMBERED_ITEM
                .captures(line.trim())
                .map(|caps| caps[1].trim().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED_SAMPLE: &str = "---\n\
name: TestAgent\n\
description: A test agent for parsing\n\
---\n\
\n\
# Persona\n\
\n\
## Tone and Style Guidelines\n\
\n\
- **Voice:** Professional and clear\n\
- Clarity: Prioritize understanding\n\
\n\
## Core Values\n\
\n\
- **Accuracy:** Always be truthful\n\
- **Response Speed:** Value the user's time\n\
\n\
## Boundaries and Constraints\n\
\n\
🚫 Never modify code without permission\n\
- Ask before destructive actions\n\
\n\
## Workflow Priorities\n\
\n\
1. Read the request twice\n\
2. Answer the question asked\n";

    #[test]
    fn test_parse_structured_identity() {
        let record = PersonaParser::new().parse(STRUCTURED_SAMPLE);
        assert_eq!(record.name(), Some("TestAgent"));
        assert_eq!(record.description(), Some("A test agent for parsing"));
    }

    #[test]
    fn test_parse_structured_sections() {
        let record = PersonaParser::new().parse(STRUCTURED_SAMPLE);
        assert_eq!(
            record.tone_style.get("voice").map(String::as_str),
            Some("Professional and clear")
        );
        assert_eq!(
            record.tone_style.get("clarity").map(String::as_str),
            Some("Prioritize understanding")
        );
        assert_eq!(
            record.core_values.get("response_speed").map(String::as_str),
            Some("Value the user's time")
        );
        assert_eq!(
            record.boundaries,
            vec![
                "Never modify code without permission".to_string(),
                "Ask before destructive actions".to_string()
            ]
        );
        assert_eq!(record.workflow.len(), 2);
        assert_eq!(record.workflow[0], "Read the request twice");
    }

    #[test]
    fn test_malformed_front_matter_is_skipped() {
        let document = "---\n: : not yaml : :\n---\n\n## Core Values\n\n- Honesty: Yes\n";
        let record = PersonaParser::new().parse(document);
        assert!(record.identity.is_empty());
        assert_eq!(record.core_values.get("honesty").map(String::as_str), Some("Yes"));
    }

    #[test]
    fn test_parse_narrative_identity_and_values() {
        let document = "# Who I Am\n\
\n\
*A quiet archivist of small moments.*\n\
\n\
**Quiet over loud.**\n\
**Depth over speed.**\n\
**Always finish what you start.**\n\
\n\
I try to be kind to everyone I work with.\n";
        let record = PersonaParser::new().parse(document);
        assert_eq!(
            record.description(),
            Some("A quiet archivist of small moments.")
        );
        assert_eq!(
            record.core_values.get("quiet").map(String::as_str),
            Some("Quiet over loud")
        );
        assert_eq!(
            record.core_values.get("depth").map(String::as_str),
            Some("Depth over speed")
        );
        // Non-trade-off statements get positional keys.
        assert_eq!(
            record.core_values.get("value_3").map(String::as_str),
            Some("Always finish what you start")
        );
        assert_eq!(
            record.tone_style.get("voice").map(String::as_str),
            Some("Quiet, concise")
        );
        assert_eq!(record.tone_style.get("empathy").map(String::as_str), Some("High"));
    }

    #[test]
    fn test_parse_empty_document() {
        let record = PersonaParser::new().parse("");
        assert!(record.is_empty());
    }

    #[test]
    fn test_structured_roundtrip_equivalence() {
        let parser = PersonaParser::new();
        let record = parser.parse(STRUCTURED_SAMPLE);
        let rendered = parser.render(&record, DocumentFormat::Structured);
        let reparsed = parser.parse(&rendered);
        assert_eq!(record, reparsed);

        // And once more: render of the reparse is stable.
        let rendered_again = parser.render(&reparsed, DocumentFormat::Structured);
        assert_eq!(rendered, rendered_again);
    }

    #[test]
    fn test_empty_record_roundtrip() {
        let parser = PersonaParser::new();
        let rendered = parser.render(&TraitRecord::default(), DocumentFormat::Structured);
        let reparsed = parser.parse(&rendered);
        assert!(reparsed.is_empty());
    }
}
