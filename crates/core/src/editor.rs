//! Lesson editor: per-lesson editable fields and the open/closed editing
//! flag.
//!
//! The editing flag is presentation-session state, not part of the course
//! draft. It lives in [`EditState`], a plain map owned by the authoring
//! session, so the persisted entities never carry it and draft
//! serialization cannot leak it.

use std::collections::HashMap;

use crate::course::AssetRef;
use crate::curriculum::{CurriculumTree, LessonContent, LessonType};
use crate::error::CoreError;
use crate::types::{LessonId, SectionId};

// ---------------------------------------------------------------------------
// Edit state
// ---------------------------------------------------------------------------

/// Which lessons are currently open in the editor view.
///
/// Lessons absent from the map are closed. Entries are pruned when their
/// lesson is removed, so the map never outlives the tree it describes.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    open: HashMap<LessonId, bool>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a lesson as open for editing. Newly created lessons open
    /// directly into edit mode.
    pub fn open_for_editing(&mut self, lesson_id: LessonId) {
        self.open.insert(lesson_id, true);
    }

    /// Whether the lesson is currently open in the editor.
    pub fn is_editing(&self, lesson_id: LessonId) -> bool {
        self.open.get(&lesson_id).copied().unwrap_or(false)
    }

    /// Drop state for a removed lesson.
    pub fn forget(&mut self, lesson_id: LessonId) {
        self.open.remove(&lesson_id);
    }

    fn toggle(&mut self, lesson_id: LessonId) -> bool {
        let flag = self.open.entry(lesson_id).or_insert(false);
        *flag = !*flag;
        *flag
    }
}

// ---------------------------------------------------------------------------
// Lesson editor
// ---------------------------------------------------------------------------

/// Mutations on a single lesson's editable fields and edit-mode flag.
///
/// Borrows the tree and edit state for the duration of one author action;
/// every method is atomic and validates the target before touching
/// anything.
pub struct LessonEditor<'a> {
    tree: &'a mut CurriculumTree,
    edits: &'a mut EditState,
}

impl<'a> LessonEditor<'a> {
    pub fn new(tree: &'a mut CurriculumTree, edits: &'a mut EditState) -> Self {
        Self { tree, edits }
    }

    /// Replace the title of exactly the matching lesson. Every other node
    /// in the tree is untouched.
    pub fn rename_lesson(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
        title: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.tree.lesson_mut(section_id, lesson_id)?.title = title.into();
        Ok(())
    }

    /// Flip the lesson's editing flag and return the new value. Two
    /// consecutive toggles restore the original value.
    pub fn toggle_edit(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
    ) -> Result<bool, CoreError> {
        // Validate the reference before mutating the flag map.
        self.tree.lesson(section_id, lesson_id)?;
        Ok(self.edits.toggle(lesson_id))
    }

    /// Attach an uploaded asset reference to a video lesson. Applying this
    /// to a quiz lesson is an [`CoreError::InvalidKind`] failure.
    pub fn set_video_asset(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
        asset_ref: AssetRef,
    ) -> Result<(), CoreError> {
        let lesson = self.tree.lesson_mut(section_id, lesson_id)?;
        match &mut lesson.content {
            LessonContent::Video { asset } => {
                *asset = Some(asset_ref);
                Ok(())
            }
            LessonContent::Quiz { .. } => Err(CoreError::InvalidKind {
                id: lesson_id,
                expected: LessonType::Video,
                actual: LessonType::Quiz,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
