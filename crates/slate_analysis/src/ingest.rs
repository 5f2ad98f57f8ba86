//! Shot ingestion: from a raw shot-list response to complete records.
//!
//! Ingestion never fails. Whatever subset of fields the model supplied is
//! layered over the documented defaults, every record gets a fresh
//! identifier, and zero recovered shots is a valid outcome — distinguished
//! from a hard error by the facade, not by this module.

use crate::extraction::{extract_array, strip_code_fences};
use regex::Regex;
use serde_json::Value as JsonValue;
use slate_core::{PartialShot, ShotRecord};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Recovery pattern: an array of objects anywhere in the raw text.
///
/// Applied to the *raw* response when the fence-stripped scan found no
/// parseable array; a model sometimes nests the array where the object scan
/// tripped over other braces.
static ARRAY_RECOVERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\{[\s\S]*\}\s*\]").expect("recovery pattern is valid"));

/// Recover a sequence of complete shot records from a raw response.
///
/// When `fallback_scene` is given, records whose scene label the model
/// omitted (or left blank) take it instead of the stock default.
pub fn ingest_shots(raw: &str, fallback_scene: Option<&str>) -> Vec<ShotRecord> {
    let elements = recover_elements(raw);
    debug!(count = elements.len(), "Recovered shot elements");

    elements
        .into_iter()
        .map(|value| {
            let mut partial: PartialShot = serde_json::from_value(value).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding malformed shot element fields");
                PartialShot::default()
            });
            if let Some(scene) = fallback_scene
                && partial.scene.as_deref().is_none_or(|s| s.trim().is_empty())
            {
                partial.scene = Some(scene.to_string());
            }
            ShotRecord::from_partial(partial)
        })
        .collect()
}

fn recover_elements(raw: &str) -> Vec<JsonValue> {
    let cleaned = strip_code_fences(raw);
    if let Some(span) = extract_array(&cleaned)
        && let Ok(JsonValue::Array(elements)) = serde_json::from_str::<JsonValue>(span)
    {
        return elements;
    }

    // One more pass over the raw text, looking specifically for an array of
    // objects.
    if let Some(found) = ARRAY_RECOVERY_RE.find(raw)
        && let Ok(JsonValue::Array(elements)) = serde_json::from_str::<JsonValue>(found.as_str())
    {
        warn!("Primary array scan failed, recovered shots from raw text");
        return elements;
    }

    warn!(
        response_chars = raw.chars().count(),
        "No shot array recovered from response"
    );
    Vec::new()
}
