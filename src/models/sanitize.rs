//! Free-text sanitization applied to caller-supplied strings.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strip HTML tags and escape the remaining markup-significant characters.
///
/// Specimen names and document text arrive from untrusted registration
/// payloads and end up embedded in rendered documents, so markup is
/// neutralized at construction time. Ampersand is escaped first so already
/// escaped entities are not double-expanded out of order.
pub fn sanitize_text(text: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(text, "");
    stripped
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .trim()
        .to_string()
}
