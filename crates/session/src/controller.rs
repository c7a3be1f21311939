//! The wizard controller: one instructor's course-creation session.
//!
//! Owns the basic-info draft, the curriculum tree, and the editor's
//! presentation state, and routes every author action through the step
//! machine. Commands flow top-down; the assembled [`CourseDraft`] is read
//! back out only on registration.

use tracing::{info, warn};

use learnflow_core::{
    apply, AssetRef, BasicInfo, CommandOutcome, CoreError, CourseDraft, CourseId, CurriculumCommand,
    CurriculumTree, EditState, LessonContent, LessonEditor, LessonId, LessonType, SectionId,
    WizardAction, WizardStep,
};

use crate::store::{AssetStore, CourseStore, StoreError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Two-step course creation flow: basic info, then curriculum, then a
/// single hand-off to the persistence collaborator.
///
/// Every method is one synchronous author action. Failures leave the whole
/// session untouched, including the register transition: a rejected
/// submission keeps the session in the curriculum step so the author can
/// retry.
#[derive(Debug)]
pub struct WizardController {
    step: WizardStep,
    basic_info: BasicInfo,
    tree: CurriculumTree,
    edits: EditState,
}

impl WizardController {
    /// Start a fresh session: basic-info step, the seeded introductory
    /// section, nothing open in the editor.
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            basic_info: BasicInfo::default(),
            tree: CurriculumTree::seeded(),
            edits: EditState::new(),
        }
    }

    // -- reads --------------------------------------------------------------

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn basic_info(&self) -> &BasicInfo {
        &self.basic_info
    }

    pub fn curriculum(&self) -> &CurriculumTree {
        &self.tree
    }

    /// Whether a lesson is currently open in the editor view.
    pub fn is_editing(&self, lesson_id: LessonId) -> bool {
        self.edits.is_editing(lesson_id)
    }

    /// Assemble the draft as it would be submitted right now. Presentation
    /// state is not part of it.
    pub fn assemble_draft(&self) -> CourseDraft {
        CourseDraft {
            basic_info: self.basic_info.clone(),
            curriculum: self.tree.sections().to_vec(),
        }
    }

    // -- basic info step ----------------------------------------------------

    /// Replace the basic-info draft with whatever the author typed. No
    /// field is validated here; validation is the persistence
    /// collaborator's concern at registration.
    pub fn update_basic_info(&mut self, info: BasicInfo) -> Result<(), SessionError> {
        self.ensure_step(WizardStep::BasicInfo)?;
        self.basic_info = info;
        Ok(())
    }

    /// Upload a thumbnail image and attach the returned reference. On
    /// upload failure the thumbnail field stays as it was.
    pub fn upload_thumbnail(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        store: &mut dyn AssetStore,
    ) -> Result<AssetRef, SessionError> {
        self.ensure_step(WizardStep::BasicInfo)?;
        let asset = store.upload_asset(file_name, bytes).inspect_err(|e| {
            warn!(file_name, error = %e, "thumbnail upload failed");
        })?;
        self.basic_info.thumbnail = Some(asset.clone());
        Ok(asset)
    }

    /// Save basic info and move on to the curriculum step. The draft is
    /// retained verbatim.
    pub fn save_basic_info(&mut self) -> Result<(), SessionError> {
        self.transition(WizardAction::Save)
    }

    // -- curriculum step ----------------------------------------------------

    /// Apply one curriculum command.
    pub fn apply(&mut self, command: CurriculumCommand) -> Result<CommandOutcome, SessionError> {
        self.ensure_step(WizardStep::Curriculum)?;
        Ok(apply(&mut self.tree, &mut self.edits, command)?)
    }

    /// Upload a lesson video and attach the returned reference to the
    /// lesson. The lesson must exist and be video-kind before anything is
    /// uploaded; on upload failure the lesson stays without an asset.
    pub fn upload_lesson_video(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
        file_name: &str,
        bytes: &[u8],
        store: &mut dyn AssetStore,
    ) -> Result<AssetRef, SessionError> {
        self.ensure_step(WizardStep::Curriculum)?;
        let lesson = self.tree.lesson(section_id, lesson_id)?;
        if let LessonContent::Quiz { .. } = lesson.content {
            return Err(CoreError::InvalidKind {
                id: lesson_id,
                expected: LessonType::Video,
                actual: LessonType::Quiz,
            }
            .into());
        }

        let asset = store.upload_asset(file_name, bytes).inspect_err(|e| {
            warn!(%lesson_id, file_name, error = %e, "lesson video upload failed");
        })?;
        LessonEditor::new(&mut self.tree, &mut self.edits).set_video_asset(
            section_id,
            lesson_id,
            asset.clone(),
        )?;
        Ok(asset)
    }

    /// Return to the basic-info step. Non-destructive: the curriculum
    /// built so far is retained.
    pub fn back_to_basic_info(&mut self) -> Result<(), SessionError> {
        self.transition(WizardAction::Back)
    }

    /// Assemble the draft and hand it to the persistence collaborator.
    ///
    /// On success the session reaches its terminal submitted state and
    /// accepts no further actions. On failure every part of the draft is
    /// left intact and the session stays in the curriculum step.
    pub fn register(&mut self, store: &mut dyn CourseStore) -> Result<CourseId, SessionError> {
        let next = self.step.transition(WizardAction::Register)?;
        let draft = self.assemble_draft();
        match store.submit_course_draft(&draft) {
            Ok(course_id) => {
                self.step = next;
                info!(%course_id, sections = draft.curriculum.len(), "course registered");
                Ok(course_id)
            }
            Err(e) => {
                warn!(error = %e, "course registration failed, draft retained");
                Err(e.into())
            }
        }
    }

    // -- internal -----------------------------------------------------------

    fn transition(&mut self, action: WizardAction) -> Result<(), SessionError> {
        let next = self.step.transition(action)?;
        info!(from = self.step.as_str(), to = next.as_str(), "wizard step change");
        self.step = next;
        Ok(())
    }

    fn ensure_step(&self, expected: WizardStep) -> Result<(), CoreError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CoreError::Conflict(format!(
                "action requires the {} step, session is in {}",
                expected.as_str(),
                self.step.as_str()
            )))
        }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
