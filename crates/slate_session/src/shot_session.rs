//! Shot list authoring session.

use slate_core::{ShotRecord, defaults};
use slate_error::SlateResult;
use slate_interface::{BlobStore, CharRange, ScriptSurface};
use slate_storage::SessionArchive;
use tracing::debug;
use uuid::Uuid;

/// Maximum number of characters of selected script text pre-filled into a
/// draft shot description.
pub const DESCRIPTION_PREFILL_LIMIT: usize = 150;

/// One shot-list authoring session.
///
/// Shots are added, replaced, and deleted keyed on their identifier; the
/// list and the script text are written back to the archive on every
/// mutation.
pub struct ShotListSession<S> {
    shots: Vec<ShotRecord>,
    script: String,
    current_scene: String,
    archive: SessionArchive<S>,
}

impl<S: BlobStore> ShotListSession<S> {
    /// Open a session, restoring any shots and script text saved by a
    /// previous session.
    pub fn open(archive: SessionArchive<S>) -> SlateResult<Self> {
        let shots = archive.load_shots()?.unwrap_or_default();
        let script = archive.load_script()?.unwrap_or_default();
        debug!(shots = shots.len(), "Opened shot list session");
        Ok(Self {
            shots,
            script,
            current_scene: defaults::SCENE.to_string(),
            archive,
        })
    }

    /// The shots, in insertion order.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    /// The script text.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The scene label new shots default to.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// Change the scene label new shots default to.
    pub fn set_current_scene(&mut self, scene: impl Into<String>) {
        self.current_scene = scene.into();
    }

    /// Replace the script text, persisting it.
    pub fn set_script(&mut self, script: impl Into<String>) -> SlateResult<()> {
        self.script = script.into();
        self.archive.save_script(&self.script)
    }

    /// Next shot number within a scene: one past the number of shots already
    /// in it.
    pub fn next_shot_number(&self, scene: &str) -> String {
        let in_scene = self.shots.iter().filter(|s| s.scene() == scene).count();
        (in_scene + 1).to_string()
    }

    /// Draft a new shot from a script selection: the selection text
    /// (truncated) becomes the description, the current scene and next shot
    /// number are pre-filled, and every other field takes its default.
    pub fn draft_from_selection(
        &self,
        surface: &impl ScriptSurface,
        range: CharRange,
    ) -> ShotRecord {
        let selected = surface.selection_text(range);
        let description: String = selected.chars().take(DESCRIPTION_PREFILL_LIMIT).collect();
        ShotRecord::builder()
            .scene(self.current_scene.clone())
            .shot_number(self.next_shot_number(&self.current_scene))
            .description(description)
            .equipment("")
            .build()
            .expect("all other fields have defaults")
    }

    /// Append a shot, persisting the list.
    pub fn add_shot(&mut self, shot: ShotRecord) -> SlateResult<()> {
        self.shots.push(shot);
        self.archive.save_shots(&self.shots)
    }

    /// Replace the shot with the same identifier, persisting the list.
    ///
    /// Returns `false` (and persists nothing) when no shot matches.
    pub fn update_shot(&mut self, updated: ShotRecord) -> SlateResult<bool> {
        let Some(slot) = self.shots.iter_mut().find(|s| s.id() == updated.id()) else {
            return Ok(false);
        };
        *slot = updated;
        self.archive.save_shots(&self.shots)?;
        Ok(true)
    }

    /// Delete the shot with the given identifier, persisting the list.
    pub fn delete_shot(&mut self, id: &Uuid) -> SlateResult<bool> {
        let before = self.shots.len();
        self.shots.retain(|s| s.id() != id);
        if self.shots.len() == before {
            return Ok(false);
        }
        self.archive.save_shots(&self.shots)?;
        Ok(true)
    }

    /// Append a batch of generated shots, persisting the list.
    pub fn merge_generated(&mut self, generated: Vec<ShotRecord>) -> SlateResult<()> {
        debug!(count = generated.len(), "Merging generated shots");
        self.shots.extend(generated);
        self.archive.save_shots(&self.shots)
    }
}
