//! Payload recovery from unstructured model responses.
//!
//! Normalization never raises: every entry point returns either a
//! successfully parsed payload of the expected shape or the caller's
//! fallback of the same shape, logging a diagnostic on the way down.

use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::warn;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*").expect("fence pattern is valid"));

/// Remove all Markdown code-fence delimiters, language-tagged and bare.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").into_owned()
}

/// The span from the first `{` to the last `}`, greedy.
///
/// Returns `None` when no balanced-looking object span exists.
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// The span from the first `[` to the last `]`, greedy.
pub fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Recover an object payload from raw response text, or return `fallback`.
///
/// Steps: strip fences, scan for the object span, strict-parse it into `T`.
/// Any failure — no span, parse error, wrong top-level shape — yields the
/// fallback and a warning. This function never returns an error.
pub fn parse_object_or<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
    let cleaned = strip_code_fences(raw);
    let Some(span) = extract_object(&cleaned) else {
        warn!(
            response_chars = raw.chars().count(),
            "No object literal in response, using fallback payload"
        );
        return fallback;
    };
    match serde_json::from_str::<T>(span) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Failed to parse object payload, using fallback");
            fallback
        }
    }
}

/// Recover an object payload, falling back to `T::default()`.
pub fn parse_object_report<T: DeserializeOwned + Default>(raw: &str) -> T {
    parse_object_or(raw, T::default())
}

/// Recover an array payload from raw response text, or return `fallback`.
pub fn parse_array_or<T: DeserializeOwned>(raw: &str, fallback: Vec<T>) -> Vec<T> {
    let cleaned = strip_code_fences(raw);
    let Some(span) = extract_array(&cleaned) else {
        warn!(
            response_chars = raw.chars().count(),
            "No array literal in response, using fallback payload"
        );
        return fallback;
    };
    match serde_json::from_str::<Vec<T>>(span) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Failed to parse array payload, using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::BreakdownElementSet;
    use slate_core::ElementCategory;
    use slate_core::report::ToneReport;

    #[test]
    fn strips_tagged_and_bare_fences() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}\n");

        let raw = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fences(raw), "[1, 2]\n");
    }

    #[test]
    fn object_span_is_greedy() {
        let text = "noise {\"a\": {\"b\": 1}} trailing } nope";
        assert_eq!(extract_object(text), Some("{\"a\": {\"b\": 1}} trailing }"));
    }

    #[test]
    fn no_span_when_no_delimiters() {
        assert_eq!(extract_object("plain prose"), None);
        assert_eq!(extract_array("plain prose"), None);
        assert_eq!(extract_object("} reversed {"), None);
    }

    #[test]
    fn fenced_breakdown_parses_without_defaults() {
        let raw = "```json\n{\"props\":[\"lamp\"],\"wardrobe\":[]}\n```";
        let set: BreakdownElementSet = parse_object_report(raw);
        assert_eq!(set.items(ElementCategory::Props), ["lamp"]);
        assert!(set.items(ElementCategory::Wardrobe).is_empty());
    }

    #[test]
    fn prose_refusal_yields_the_default_report() {
        let report: ToneReport = parse_object_report("I cannot process this request.");
        assert_eq!(report, ToneReport::default());
    }

    #[test]
    fn truncated_json_yields_the_default_report() {
        let report: ToneReport = parse_object_report("{\"overallTone\": \"warm");
        assert_eq!(report, ToneReport::default());
    }

    #[test]
    fn surrounding_prose_is_tolerated() {
        let raw = "Here is your analysis:\n{\"overallTone\": \"ominous\"}\nHope that helps!";
        let report: ToneReport = parse_object_report(raw);
        assert_eq!(report.overall_tone(), "ominous");
    }

    #[test]
    fn array_payload_parses_strings() {
        let raw = "```json\n[\"struck\", \"pounded\"]\n```";
        let words: Vec<String> = parse_array_or(raw, Vec::new());
        assert_eq!(words, ["struck", "pounded"]);
    }

    #[test]
    fn object_where_array_expected_falls_back() {
        let raw = "{\"synonyms\": [\"struck\"]}";
        let words: Vec<String> = parse_array_or(raw, vec!["fallback".to_string()]);
        assert_eq!(words, ["fallback"]);
    }

    #[test]
    fn wrong_shape_inside_valid_json_falls_back() {
        // An array arrives where an object report was promised.
        let report: ToneReport = parse_object_report("[1, 2, 3]");
        assert_eq!(report, ToneReport::default());
    }

    #[test]
    fn never_panics_on_adversarial_input() {
        for raw in [
            "",
            "{",
            "}",
            "[",
            "]",
            "{]",
            "[}",
            "``````",
            "```json```",
            "{{{{",
            "}}}}{",
            "\u{0}\u{1}{\"a\"",
            "🎬🎬🎬",
        ] {
            let _: ToneReport = parse_object_report(raw);
            let _: Vec<String> = parse_array_or(raw, Vec::new());
        }
    }
}
