//! Quiz authoring: the ordered question list of one quiz-kind lesson.
//!
//! Adding a question with an empty prompt is deliberately a no-op rather
//! than an error: the authoring form submits whatever is in the input box
//! and simply keeps the attempt invisible. The outcome enum makes the skip
//! observable to the caller without changing that behavior.

use crate::curriculum::{Answer, CurriculumTree, LessonContent, LessonType, QuizQuestion};
use crate::error::CoreError;
use crate::types::{LessonId, QuestionId, SectionId};

/// Result of an [`QuizAuthoring::add_question`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddQuestionOutcome {
    /// The question was appended.
    Added(QuestionId),
    /// The prompt was empty; nothing was added and nothing failed.
    SkippedEmptyPrompt,
}

impl AddQuestionOutcome {
    /// The id of the appended question, if one was appended.
    pub fn question_id(self) -> Option<QuestionId> {
        match self {
            Self::Added(id) => Some(id),
            Self::SkippedEmptyPrompt => None,
        }
    }
}

/// Mutations on the question list of one quiz lesson.
pub struct QuizAuthoring<'a> {
    tree: &'a mut CurriculumTree,
}

impl<'a> QuizAuthoring<'a> {
    pub fn new(tree: &'a mut CurriculumTree) -> Self {
        Self { tree }
    }

    /// Append a question with the given prompt and answer.
    ///
    /// An empty prompt leaves the question list unchanged and reports
    /// [`AddQuestionOutcome::SkippedEmptyPrompt`]. Whitespace-only prompts
    /// are kept as-is; only the exactly-empty string is skipped.
    pub fn add_question(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
        prompt: impl Into<String>,
        answer: Answer,
    ) -> Result<AddQuestionOutcome, CoreError> {
        let questions = self.questions_mut(section_id, lesson_id)?;
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Ok(AddQuestionOutcome::SkippedEmptyPrompt);
        }
        let id = QuestionId::new();
        questions.push(QuizQuestion { id, prompt, answer });
        Ok(AddQuestionOutcome::Added(id))
    }

    /// Remove exactly the matching question, preserving the relative order
    /// of the rest.
    pub fn remove_question(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
        question_id: QuestionId,
    ) -> Result<QuizQuestion, CoreError> {
        let questions = self.questions_mut(section_id, lesson_id)?;
        let index = questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| CoreError::question_not_found(question_id))?;
        Ok(questions.remove(index))
    }

    fn questions_mut(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
    ) -> Result<&mut Vec<QuizQuestion>, CoreError> {
        let lesson = self.tree.lesson_mut(section_id, lesson_id)?;
        match &mut lesson.content {
            LessonContent::Quiz { questions } => Ok(questions),
            LessonContent::Video { .. } => Err(CoreError::InvalidKind {
                id: lesson_id,
                expected: LessonType::Quiz,
                actual: LessonType::Video,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
