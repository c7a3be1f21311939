//! Curriculum commands: every mutation of the authoring state as one
//! closed enum, applied through a single reducer.
//!
//! One author action maps to one command, one command to one atomic state
//! transition. Keeping the full set in one enum makes every mutation path
//! enumerable and testable without a rendering layer on top.

use serde::{Deserialize, Serialize};

use crate::course::AssetRef;
use crate::curriculum::{Answer, CurriculumTree, LessonType};
use crate::editor::{EditState, LessonEditor};
use crate::error::CoreError;
use crate::quiz::{AddQuestionOutcome, QuizAuthoring};
use crate::types::{LessonId, QuestionId, SectionId};

/// A single author action against the curriculum being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CurriculumCommand {
    AddSection,
    RenameSection {
        section_id: SectionId,
        title: String,
    },
    RemoveSection {
        section_id: SectionId,
    },
    ReorderSection {
        from: usize,
        to: usize,
    },
    AddLesson {
        section_id: SectionId,
        lesson_type: LessonType,
    },
    RenameLesson {
        section_id: SectionId,
        lesson_id: LessonId,
        title: String,
    },
    RemoveLesson {
        section_id: SectionId,
        lesson_id: LessonId,
    },
    ReorderLesson {
        section_id: SectionId,
        from: usize,
        to: usize,
    },
    ToggleEdit {
        section_id: SectionId,
        lesson_id: LessonId,
    },
    SetVideoAsset {
        section_id: SectionId,
        lesson_id: LessonId,
        asset: AssetRef,
    },
    AddQuestion {
        section_id: SectionId,
        lesson_id: LessonId,
        prompt: String,
        answer: Answer,
    },
    RemoveQuestion {
        section_id: SectionId,
        lesson_id: LessonId,
        question_id: QuestionId,
    },
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    SectionAdded(SectionId),
    LessonAdded(LessonId),
    QuestionAdded(QuestionId),
    /// The add-question prompt was empty; nothing changed.
    QuestionSkipped,
    EditToggled { editing: bool },
    Done,
}

/// Apply one command to the curriculum tree and editor state.
///
/// On error the tree and edit state are unchanged. Removals cascade: a
/// removed section releases the edit-state entries of all its lessons in
/// the same step.
pub fn apply(
    tree: &mut CurriculumTree,
    edits: &mut EditState,
    command: CurriculumCommand,
) -> Result<CommandOutcome, CoreError> {
    match command {
        CurriculumCommand::AddSection => Ok(CommandOutcome::SectionAdded(tree.add_section())),
        CurriculumCommand::RenameSection { section_id, title } => {
            tree.rename_section(section_id, title)?;
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::RemoveSection { section_id } => {
            let removed = tree.remove_section(section_id)?;
            for lesson in &removed.lessons {
                edits.forget(lesson.id);
            }
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::ReorderSection { from, to } => {
            tree.reorder_section(from, to)?;
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::AddLesson {
            section_id,
            lesson_type,
        } => {
            let lesson_id = tree.add_lesson(section_id, lesson_type)?;
            edits.open_for_editing(lesson_id);
            Ok(CommandOutcome::LessonAdded(lesson_id))
        }
        CurriculumCommand::RenameLesson {
            section_id,
            lesson_id,
            title,
        } => {
            LessonEditor::new(tree, edits).rename_lesson(section_id, lesson_id, title)?;
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::RemoveLesson {
            section_id,
            lesson_id,
        } => {
            tree.remove_lesson(section_id, lesson_id)?;
            edits.forget(lesson_id);
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::ReorderLesson {
            section_id,
            from,
            to,
        } => {
            tree.reorder_lesson(section_id, from, to)?;
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::ToggleEdit {
            section_id,
            lesson_id,
        } => {
            let editing = LessonEditor::new(tree, edits).toggle_edit(section_id, lesson_id)?;
            Ok(CommandOutcome::EditToggled { editing })
        }
        CurriculumCommand::SetVideoAsset {
            section_id,
            lesson_id,
            asset,
        } => {
            LessonEditor::new(tree, edits).set_video_asset(section_id, lesson_id, asset)?;
            Ok(CommandOutcome::Done)
        }
        CurriculumCommand::AddQuestion {
            section_id,
            lesson_id,
            prompt,
            answer,
        } => {
            let outcome =
                QuizAuthoring::new(tree).add_question(section_id, lesson_id, prompt, answer)?;
            Ok(match outcome {
                AddQuestionOutcome::Added(id) => CommandOutcome::QuestionAdded(id),
                AddQuestionOutcome::SkippedEmptyPrompt => CommandOutcome::QuestionSkipped,
            })
        }
        CurriculumCommand::RemoveQuestion {
            section_id,
            lesson_id,
            question_id,
        } => {
            QuizAuthoring::new(tree).remove_question(section_id, lesson_id, question_id)?;
            Ok(CommandOutcome::Done)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
