//! Response Parser: extracts the JSON object from raw model text.
//!
//! Decode failures never propagate: the caller receives the matching
//! fallback analysis instead.

use serde_json::Value;

use crate::analysis::fallback::{comprehensive_fallback, note_fallback};
use crate::analysis::note::NoteAnalysis;
use crate::analysis::snapshot::Polarity;
use crate::analysis::types::NormalizedAnalysis;

/// Outcome of parsing a comprehensive-analysis response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    /// The decoded JSON object, unchanged, for the normalizer.
    Decoded(Value),
    /// The text held no JSON object.
    Fallback(NormalizedAnalysis),
}

/// Strips ``` code fences from model output, along with any language tag
/// (`json`, `JSON`, `javascript`, ...) on the opening fence.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();

    match text.strip_prefix("```") {
        Some(fenced) => {
            let body = match fenced.split_once('\n') {
                Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
                _ => fenced.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
            };
            let stripped = body.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Decodes fenced model text. Only a JSON object counts as a decoded analysis.
pub fn decode_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(strip_json_fences(text))
        .ok()
        .filter(Value::is_object)
}

pub fn parse_comprehensive_response(text: &str) -> ParsedResponse {
    match decode_object(text) {
        Some(value) => ParsedResponse::Decoded(value),
        None => ParsedResponse::Fallback(comprehensive_fallback()),
    }
}

pub fn parse_note_response(text: &str, polarity: Polarity) -> NoteAnalysis {
    match decode_object(text) {
        Some(value) => NoteAnalysis::from_raw(&value, polarity),
        None => note_fallback(polarity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_tag_is_case_insensitive() {
        let input = "```JSON\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_other_language_tag() {
        let input = "```javascript\n{\"key\": 2}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": 2}");
    }

    #[test]
    fn test_strip_json_fences_tag_on_same_line() {
        assert_eq!(strip_json_fences("```json {\"key\": 3}```"), "{\"key\": 3}");
    }

    #[test]
    fn test_uppercase_fence_tag_is_decoded() {
        let parsed = parse_comprehensive_response("```JSON\n{\"a\":1}\n```");
        assert_eq!(parsed, ParsedResponse::Decoded(json!({"a": 1})));
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"key\": 1}";
        assert_eq!(strip_json_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_fenced_object_is_decoded() {
        let parsed = parse_comprehensive_response("```json\n{\"a\":1}\n```");
        assert_eq!(parsed, ParsedResponse::Decoded(json!({"a": 1})));
    }

    #[test]
    fn test_invalid_text_yields_fallback() {
        let parsed = parse_comprehensive_response("not json");
        assert_eq!(parsed, ParsedResponse::Fallback(comprehensive_fallback()));
    }

    #[test]
    fn test_non_object_json_yields_fallback() {
        assert!(matches!(
            parse_comprehensive_response("[1, 2]"),
            ParsedResponse::Fallback(_)
        ));
        assert!(matches!(
            parse_comprehensive_response("\"text\""),
            ParsedResponse::Fallback(_)
        ));
    }

    #[test]
    fn test_note_response_decoded() {
        let text = "```json\n{\"category\": \"basic_rules\", \"sentiment\": \"negative\"}\n```";
        let analysis = parse_note_response(text, Polarity::Positive);
        assert_eq!(analysis.category, "basic_rules");
        assert_eq!(analysis.sentiment, Polarity::Negative);
    }

    #[test]
    fn test_note_response_garbage_yields_note_fallback() {
        let analysis = parse_note_response("Üzgünüm, yardımcı olamıyorum.", Polarity::Negative);
        assert_eq!(analysis, note_fallback(Polarity::Negative));
    }
}
