//! Pure in-memory domain for LearnFlow course authoring.
//!
//! This crate has **zero I/O and zero async**. It models the course draft
//! an instructor builds in the two-step creation wizard: the basic-info
//! fields, the curriculum tree of ordered sections and lessons, the quiz
//! question lists, and the wizard step machine. All state is exclusively
//! owned by one authoring session and mutated synchronously, one atomic
//! operation per author action.
//!
//! Persistence, uploads, transport, and rendering live behind collaborator
//! seams in the session crate; nothing here knows about them.

pub mod commands;
pub mod course;
pub mod curriculum;
pub mod editor;
pub mod error;
pub mod quiz;
pub mod types;
pub mod wizard;

pub use commands::{apply, CommandOutcome, CurriculumCommand};
pub use course::{AssetRef, BasicInfo, Category, CourseDraft, Difficulty};
pub use curriculum::{
    Answer, CurriculumTree, Lesson, LessonContent, LessonType, QuizQuestion, Section,
};
pub use editor::{EditState, LessonEditor};
pub use error::CoreError;
pub use quiz::{AddQuestionOutcome, QuizAuthoring};
pub use types::{CourseId, LessonId, QuestionId, SectionId, Timestamp};
pub use wizard::{WizardAction, WizardStep};
