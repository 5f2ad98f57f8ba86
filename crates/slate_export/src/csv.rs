//! CSV formatting for breakdown sheets and shot lists.

use slate_core::{BreakdownElementSet, ElementCategory, ShotRecord};
use slate_error::{ExportError, SlateResult};
use std::borrow::Cow;

/// Column header of a breakdown sheet export.
pub const BREAKDOWN_HEADER: &str = "Category,Element";

/// Column header of a shot list export.
pub const SHOT_LIST_HEADER: &str =
    "Scene,Shot,Description,Type,Angle,Movement,Equipment,Lens,Framing,Duration,Frame Rate,Notes";

/// Quote a field when it contains a double-quote, comma, or line break,
/// doubling internal double-quotes.
fn quote_field(value: &str) -> Cow<'_, str> {
    if value.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Format a breakdown element set as a CSV document.
pub fn breakdown_to_csv(elements: &BreakdownElementSet) -> String {
    let mut csv = String::from(BREAKDOWN_HEADER);
    csv.push('\n');
    for (category, items) in elements.iter() {
        for item in items {
            csv.push_str(&category.to_string());
            csv.push(',');
            csv.push_str(&quote_field(item));
            csv.push('\n');
        }
    }
    csv
}

/// Format a shot list as a CSV document.
pub fn shots_to_csv(shots: &[ShotRecord]) -> String {
    let mut csv = String::from(SHOT_LIST_HEADER);
    csv.push('\n');
    for shot in shots {
        let fields: [String; 12] = [
            shot.scene().clone(),
            shot.shot_number().clone(),
            shot.description().clone(),
            shot.shot_type().to_string(),
            shot.angle().to_string(),
            shot.movement().to_string(),
            shot.equipment().clone(),
            shot.lens().to_string(),
            shot.framing().clone(),
            shot.duration().clone(),
            shot.frame_rate().to_string(),
            shot.notes().clone(),
        ];
        let row = fields
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
}

/// Parse a CSV document into records, honoring quoted fields.
///
/// Quoted fields may contain commas, doubled quotes, and line breaks.
fn parse_csv(text: &str) -> SlateResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => {
                if field.is_empty() {
                    in_quotes = true;
                } else {
                    return Err(
                        ExportError::new("Quote character inside an unquoted field").into()
                    );
                }
            }
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(ExportError::new("Unterminated quoted field").into());
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

/// Read a breakdown element set back from a CSV document produced by
/// [`breakdown_to_csv`].
///
/// # Errors
///
/// Fails on a missing/mismatched header, malformed quoting, a row with the
/// wrong field count, or an unknown category.
pub fn breakdown_from_csv(text: &str) -> SlateResult<BreakdownElementSet> {
    let records = parse_csv(text)?;
    let mut rows = records.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| ExportError::new("Empty CSV document"))?;
    if header.join(",") != BREAKDOWN_HEADER {
        return Err(ExportError::new(format!(
            "Unexpected breakdown header: {:?}",
            header.join(",")
        ))
        .into());
    }

    let mut elements = BreakdownElementSet::new();
    for row in rows {
        if row.len() != 2 {
            return Err(ExportError::new(format!(
                "Expected 2 fields per breakdown row, got {}",
                row.len()
            ))
            .into());
        }
        let category: ElementCategory = row[0]
            .parse()
            .map_err(|_| ExportError::new(format!("Unknown category: {:?}", row[0])))?;
        elements.push(category, row[1].clone());
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_field_escapes_internal_quotes() {
        assert_eq!(
            quote_field(r#"He said, "go now""#),
            r#""He said, ""go now""""#
        );
    }

    #[test]
    fn plain_fields_are_left_bare() {
        assert_eq!(quote_field("lamp"), "lamp");
    }

    #[test]
    fn breakdown_round_trips_modulo_quoting() {
        let mut elements = BreakdownElementSet::new();
        elements.push(ElementCategory::Props, r#"He said, "go now""#);
        elements.push(ElementCategory::Props, "lamp, brass");
        elements.push(ElementCategory::Cast, "MARLOWE");
        elements.push(ElementCategory::Sfx, "thunder\nrolling");

        let csv = breakdown_to_csv(&elements);
        let recovered = breakdown_from_csv(&csv).unwrap();
        assert_eq!(recovered, elements);
    }

    #[test]
    fn export_emits_the_documented_quoting() {
        let mut elements = BreakdownElementSet::new();
        elements.push(ElementCategory::Props, r#"He said, "go now""#);
        let csv = breakdown_to_csv(&elements);
        assert!(csv.contains(r#"props,"He said, ""go now""""#));
    }

    #[test]
    fn shot_list_export_has_fixed_columns() {
        let shot = ShotRecord::builder()
            .scene("2")
            .shot_number("5")
            .description("Tracking shot, platform edge")
            .notes("Steadicam operator needed")
            .build()
            .unwrap();
        let csv = shots_to_csv(&[shot]);

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(SHOT_LIST_HEADER));
        let row = lines.next().unwrap();
        assert!(row.starts_with("2,5,\"Tracking shot, platform edge\",MS,Eye Level,Static,"));
        assert!(row.ends_with("24 fps,Steadicam operator needed"));
    }

    #[test]
    fn header_mismatch_is_an_error() {
        assert!(breakdown_from_csv("Kind,Item\nprops,lamp\n").is_err());
        assert!(breakdown_from_csv("").is_err());
    }

    #[test]
    fn unknown_category_is_an_error() {
        let csv = "Category,Element\ngadgets,sonic screwdriver\n";
        assert!(breakdown_from_csv(csv).is_err());
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let csv = "Category,Element\nprops,\"unterminated\n";
        assert!(breakdown_from_csv(csv).is_err());
    }
}
