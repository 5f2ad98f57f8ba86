//! Script file import.
//!
//! Import hands the full text content of a plain-text (or Fountain) file to
//! the caller as subject text; no screenplay-format parsing happens here
//! beyond counting scene headings.

use regex::Regex;
use slate_error::{ExportError, SlateResult};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static SCENE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(INT|EXT|INT/EXT|EXT/INT|I/E|E/I).*$").expect("heading pattern is valid")
});

/// Read a script file into a subject-text string.
pub fn read_script(path: impl AsRef<Path>) -> SlateResult<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| ExportError::new(format!("Failed to read {}: {}", path.display(), e)))?;
    debug!(
        path = %path.display(),
        chars = text.chars().count(),
        scenes = count_scene_headings(&text),
        "Imported script"
    );
    Ok(text)
}

/// Count Fountain-style scene heading lines (INT/EXT and variants).
pub fn count_scene_headings(script: &str) -> usize {
    SCENE_HEADING_RE.find_iter(script).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_interior_and_exterior_headings() {
        let script = "INT. OFFICE - NIGHT\n\nMarlowe waits.\n\nEXT. STREET - CONTINUOUS\n\nRain.\n";
        assert_eq!(count_scene_headings(script), 2);
    }

    #[test]
    fn ignores_headings_mid_line() {
        let script = "He pointed at the INT. sign.\n";
        assert_eq!(count_scene_headings(script), 0);
    }

    #[test]
    fn counts_slash_variants() {
        let script = "INT/EXT. CAR - DAY\nI/E. TRUCK - DUSK\n";
        assert_eq!(count_scene_headings(script), 2);
    }

    #[test]
    fn missing_file_is_an_export_error() {
        let result = read_script("/nonexistent/script.fountain");
        assert!(result.is_err());
    }
}
