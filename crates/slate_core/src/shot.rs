//! Shot records and the camera vocabulary enums.
//!
//! Every field of a [`ShotRecord`] has a documented non-null default, so a
//! partially-populated record coming back from the upstream model is always
//! completable. Enum fields parse their wire strings leniently: an
//! unrecognized value degrades to the field default rather than failing
//! ingestion.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Documented defaults for the free-text shot fields.
///
/// The enum-typed fields take their defaults from their `Default` impls:
/// [`ShotType::MediumShot`], [`CameraAngle::EyeLevel`],
/// [`CameraMovement::Static`], [`Lens::Mm50`], [`FrameRate::Fps24`].
pub mod defaults {
    /// Scene label assigned when the model omits one.
    pub const SCENE: &str = "1";
    /// Shot number assigned when the model omits one.
    pub const SHOT_NUMBER: &str = "1";
    /// Placeholder description.
    pub const DESCRIPTION: &str = "Shot description";
    /// Equipment assumed for an unspecified setup.
    pub const EQUIPMENT: &str = "Tripod";
    /// Framing note assigned when the model omits one.
    pub const FRAMING: &str = "Medium";
    /// Estimated duration assigned when the model omits one.
    pub const DURATION: &str = "5s";
}

/// Shot size vocabulary shared by the editor and the upstream model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum ShotType {
    #[serde(rename = "ECU")]
    #[strum(serialize = "ECU")]
    ExtremeCloseUp,
    #[serde(rename = "CU")]
    #[strum(serialize = "CU")]
    CloseUp,
    #[serde(rename = "MCU")]
    #[strum(serialize = "MCU")]
    MediumCloseUp,
    #[default]
    #[serde(rename = "MS")]
    #[strum(serialize = "MS")]
    MediumShot,
    #[serde(rename = "MLS")]
    #[strum(serialize = "MLS")]
    MediumLongShot,
    #[serde(rename = "LS")]
    #[strum(serialize = "LS")]
    LongShot,
    #[serde(rename = "ELS")]
    #[strum(serialize = "ELS")]
    ExtremeLongShot,
    #[serde(rename = "WS")]
    #[strum(serialize = "WS")]
    WideShot,
    #[serde(rename = "Two Shot")]
    #[strum(serialize = "Two Shot")]
    TwoShot,
    #[serde(rename = "OTS")]
    #[strum(serialize = "OTS")]
    OverTheShoulder,
    #[serde(rename = "POV")]
    #[strum(serialize = "POV")]
    PointOfView,
    Insert,
    Cutaway,
    Establishing,
}

/// Camera angle vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CameraAngle {
    #[default]
    #[serde(rename = "Eye Level")]
    #[strum(serialize = "Eye Level")]
    EyeLevel,
    #[serde(rename = "High Angle")]
    #[strum(serialize = "High Angle")]
    HighAngle,
    #[serde(rename = "Low Angle")]
    #[strum(serialize = "Low Angle")]
    LowAngle,
    #[serde(rename = "Dutch Angle")]
    #[strum(serialize = "Dutch Angle")]
    DutchAngle,
    #[serde(rename = "Bird's Eye")]
    #[strum(serialize = "Bird's Eye")]
    BirdsEye,
    #[serde(rename = "Worm's Eye")]
    #[strum(serialize = "Worm's Eye")]
    WormsEye,
    #[serde(rename = "Over The Shoulder")]
    #[strum(serialize = "Over The Shoulder")]
    OverTheShoulder,
    #[serde(rename = "POV")]
    #[strum(serialize = "POV")]
    PointOfView,
}

/// Camera movement vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CameraMovement {
    #[default]
    Static,
    Pan,
    Tilt,
    #[serde(rename = "Dolly In")]
    #[strum(serialize = "Dolly In")]
    DollyIn,
    #[serde(rename = "Dolly Out")]
    #[strum(serialize = "Dolly Out")]
    DollyOut,
    #[serde(rename = "Truck Left")]
    #[strum(serialize = "Truck Left")]
    TruckLeft,
    #[serde(rename = "Truck Right")]
    #[strum(serialize = "Truck Right")]
    TruckRight,
    Pedestal,
    #[serde(rename = "Crane Up")]
    #[strum(serialize = "Crane Up")]
    CraneUp,
    #[serde(rename = "Crane Down")]
    #[strum(serialize = "Crane Down")]
    CraneDown,
    Handheld,
    Steadicam,
    Gimbal,
    Drone,
    #[serde(rename = "Zoom In")]
    #[strum(serialize = "Zoom In")]
    ZoomIn,
    #[serde(rename = "Zoom Out")]
    #[strum(serialize = "Zoom Out")]
    ZoomOut,
}

/// Lens focal length vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Lens {
    #[serde(rename = "16mm")]
    #[strum(serialize = "16mm")]
    Mm16,
    #[serde(rename = "24mm")]
    #[strum(serialize = "24mm")]
    Mm24,
    #[serde(rename = "35mm")]
    #[strum(serialize = "35mm")]
    Mm35,
    #[default]
    #[serde(rename = "50mm")]
    #[strum(serialize = "50mm")]
    Mm50,
    #[serde(rename = "85mm")]
    #[strum(serialize = "85mm")]
    Mm85,
    #[serde(rename = "100mm")]
    #[strum(serialize = "100mm")]
    Mm100,
    #[serde(rename = "135mm")]
    #[strum(serialize = "135mm")]
    Mm135,
}

/// Frame rate vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum FrameRate {
    #[default]
    #[serde(rename = "24 fps")]
    #[strum(serialize = "24 fps")]
    Fps24,
    #[serde(rename = "25 fps")]
    #[strum(serialize = "25 fps")]
    Fps25,
    #[serde(rename = "30 fps")]
    #[strum(serialize = "30 fps")]
    Fps30,
    #[serde(rename = "48 fps")]
    #[strum(serialize = "48 fps")]
    Fps48,
    #[serde(rename = "60 fps")]
    #[strum(serialize = "60 fps")]
    Fps60,
    #[serde(rename = "120 fps")]
    #[strum(serialize = "120 fps")]
    Fps120,
}

/// Parse a wire string leniently: `None` or an unrecognized value yields the
/// field default.
fn lenient<T>(value: Option<&str>, field: &'static str) -> T
where
    T: FromStr + Default,
{
    match value {
        None => T::default(),
        Some(raw) => T::from_str(raw).unwrap_or_else(|_| {
            tracing::warn!(field, value = raw, "Unrecognized wire value, using default");
            T::default()
        }),
    }
}

/// A structured description of a single planned camera setup within a scene.
///
/// Created either by local user input (via [`ShotRecord::builder`]) or by
/// shot ingestion from upstream data (via [`ShotRecord::from_partial`]);
/// replaced wholesale by edit operations keyed on `id`; removed by explicit
/// delete.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into), pattern = "owned")]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    /// Unique identifier within a session.
    #[builder(default = "Uuid::new_v4()")]
    #[setters(skip)]
    id: Uuid,
    /// Scene label, e.g. "1" or "12A".
    #[builder(default = "defaults::SCENE.to_string()")]
    scene: String,
    /// Shot number within the scene.
    #[builder(default = "defaults::SHOT_NUMBER.to_string()")]
    shot_number: String,
    /// What the shot shows.
    #[builder(default = "defaults::DESCRIPTION.to_string()")]
    description: String,
    /// Shot size.
    #[builder(default)]
    #[serde(rename = "type")]
    shot_type: ShotType,
    /// Camera angle.
    #[builder(default)]
    angle: CameraAngle,
    /// Camera movement.
    #[builder(default)]
    movement: CameraMovement,
    /// Equipment needed, free text.
    #[builder(default = "defaults::EQUIPMENT.to_string()")]
    equipment: String,
    /// Lens recommendation.
    #[builder(default)]
    lens: Lens,
    /// Framing note.
    #[builder(default = "defaults::FRAMING.to_string()")]
    framing: String,
    /// Additional technical notes.
    #[builder(default)]
    notes: String,
    /// Estimated duration, free text, e.g. "5s".
    #[builder(default = "defaults::DURATION.to_string()")]
    duration: String,
    /// Frame rate.
    #[builder(default)]
    frame_rate: FrameRate,
}

impl ShotRecord {
    /// Returns a builder whose unset fields take the documented defaults.
    pub fn builder() -> ShotRecordBuilder {
        ShotRecordBuilder::default()
    }

    /// Complete a partial upstream record by layering its fields over the
    /// full default set, assigning a freshly generated identifier.
    pub fn from_partial(partial: PartialShot) -> Self {
        Self {
            id: Uuid::new_v4(),
            scene: partial.scene.unwrap_or_else(|| defaults::SCENE.to_string()),
            shot_number: partial
                .shot_number
                .unwrap_or_else(|| defaults::SHOT_NUMBER.to_string()),
            description: partial
                .description
                .unwrap_or_else(|| defaults::DESCRIPTION.to_string()),
            shot_type: lenient(partial.shot_type.as_deref(), "type"),
            angle: lenient(partial.angle.as_deref(), "angle"),
            movement: lenient(partial.movement.as_deref(), "movement"),
            equipment: partial
                .equipment
                .unwrap_or_else(|| defaults::EQUIPMENT.to_string()),
            lens: lenient(partial.lens.as_deref(), "lens"),
            framing: partial
                .framing
                .unwrap_or_else(|| defaults::FRAMING.to_string()),
            notes: partial.notes.unwrap_or_default(),
            duration: partial
                .duration
                .unwrap_or_else(|| defaults::DURATION.to_string()),
            frame_rate: lenient(partial.frame_rate.as_deref(), "frameRate"),
        }
    }
}

/// Deserialize an optional field that the model may emit as a string, a
/// number, or a boolean, coercing to a string.
fn opt_stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// A shot-like record as the upstream model returns it: any subset of fields
/// may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialShot {
    #[serde(deserialize_with = "opt_stringish")]
    pub scene: Option<String>,
    #[serde(deserialize_with = "opt_stringish")]
    pub shot_number: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub shot_type: Option<String>,
    pub angle: Option<String>,
    pub movement: Option<String>,
    pub equipment: Option<String>,
    pub lens: Option<String>,
    pub framing: Option<String>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "opt_stringish")]
    pub duration: Option<String>,
    pub frame_rate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_partial_fills_every_field_with_defaults() {
        let partial = PartialShot {
            description: Some("Wide shot of the house".to_string()),
            ..PartialShot::default()
        };
        let shot = ShotRecord::from_partial(partial);

        assert_eq!(shot.description(), "Wide shot of the house");
        assert_eq!(*shot.shot_type(), ShotType::MediumShot);
        assert_eq!(*shot.lens(), Lens::Mm50);
        assert_eq!(shot.scene(), defaults::SCENE);
        assert_eq!(shot.shot_number(), defaults::SHOT_NUMBER);
        assert_eq!(*shot.angle(), CameraAngle::EyeLevel);
        assert_eq!(*shot.movement(), CameraMovement::Static);
        assert_eq!(shot.equipment(), defaults::EQUIPMENT);
        assert_eq!(shot.framing(), defaults::FRAMING);
        assert_eq!(shot.notes(), "");
        assert_eq!(shot.duration(), defaults::DURATION);
        assert_eq!(*shot.frame_rate(), FrameRate::Fps24);
    }

    #[test]
    fn unknown_enum_wire_string_degrades_to_default() {
        let partial = PartialShot {
            shot_type: Some("Super Wide Telephoto".to_string()),
            ..PartialShot::default()
        };
        let shot = ShotRecord::from_partial(partial);
        assert_eq!(*shot.shot_type(), ShotType::MediumShot);
    }

    #[test]
    fn known_wire_strings_survive() {
        let partial = PartialShot {
            shot_type: Some("Two Shot".to_string()),
            angle: Some("Bird's Eye".to_string()),
            movement: Some("Dolly In".to_string()),
            lens: Some("85mm".to_string()),
            frame_rate: Some("60 fps".to_string()),
            ..PartialShot::default()
        };
        let shot = ShotRecord::from_partial(partial);
        assert_eq!(*shot.shot_type(), ShotType::TwoShot);
        assert_eq!(*shot.angle(), CameraAngle::BirdsEye);
        assert_eq!(*shot.movement(), CameraMovement::DollyIn);
        assert_eq!(*shot.lens(), Lens::Mm85);
        assert_eq!(*shot.frame_rate(), FrameRate::Fps60);
    }

    #[test]
    fn numeric_scene_and_shot_number_are_coerced() {
        let json = r#"{"scene": 3, "shotNumber": 12, "description": "Opening"}"#;
        let partial: PartialShot = serde_json::from_str(json).unwrap();
        assert_eq!(partial.scene.as_deref(), Some("3"));
        assert_eq!(partial.shot_number.as_deref(), Some("12"));
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let shot = ShotRecord::builder().build().unwrap();
        let json = serde_json::to_value(&shot).unwrap();
        assert_eq!(json["type"], "MS");
        assert_eq!(json["angle"], "Eye Level");
        assert_eq!(json["frameRate"], "24 fps");
        assert_eq!(json["shotNumber"], "1");
    }

    #[test]
    fn fresh_identifiers_are_unique() {
        let a = ShotRecord::from_partial(PartialShot::default());
        let b = ShotRecord::from_partial(PartialShot::default());
        assert_ne!(a.id(), b.id());
    }
}
