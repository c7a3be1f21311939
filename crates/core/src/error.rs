//! Error type shared by every mutation in the authoring core.
//!
//! All failures are local and non-fatal: a returned error guarantees the
//! curriculum tree was left exactly as it was before the call.

use uuid::Uuid;

use crate::curriculum::LessonType;
use crate::types::LessonId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The targeted section/lesson/question id does not exist anywhere in
    /// the draft. Signals a stale reference held by the caller; the tree
    /// is never mutated on a near-miss.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// An operation was applied to a lesson of the wrong kind, e.g.
    /// setting a video asset on a quiz lesson.
    #[error("lesson {id} is a {actual} lesson, operation requires {expected}")]
    InvalidKind {
        id: LessonId,
        expected: LessonType,
        actual: LessonType,
    },

    /// A reorder index fell outside the current list bounds.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation is not legal in the current wizard state.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for a missing section.
    pub fn section_not_found(id: crate::types::SectionId) -> Self {
        Self::NotFound {
            entity: "section",
            id: id.as_uuid(),
        }
    }

    /// Shorthand for a missing lesson.
    pub fn lesson_not_found(id: LessonId) -> Self {
        Self::NotFound {
            entity: "lesson",
            id: id.as_uuid(),
        }
    }

    /// Shorthand for a missing quiz question.
    pub fn question_not_found(id: crate::types::QuestionId) -> Self {
        Self::NotFound {
            entity: "question",
            id: id.as_uuid(),
        }
    }
}
