//! The curriculum tree: ordered sections owning ordered lessons.
//!
//! This is the one genuinely stateful part of course authoring. The tree is
//! exclusively owned by a single authoring session; every operation is a
//! synchronous, atomic mutation that either fully applies or leaves the
//! tree untouched and returns a [`CoreError`]. Ordering is insertion order
//! unless an explicit reorder is applied; nothing ever re-sorts.

use serde::{Deserialize, Serialize};

use crate::course::AssetRef;
use crate::error::CoreError;
use crate::types::{LessonId, QuestionId, SectionId};

// ---------------------------------------------------------------------------
// Lesson kinds
// ---------------------------------------------------------------------------

/// Discriminant of the two lesson kinds. Fixed at creation; converting a
/// lesson between kinds is not a supported mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    Video,
    Quiz,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Quiz => "quiz",
        }
    }

    /// Default title for a freshly created lesson of this kind.
    pub fn default_title(self) -> String {
        match self {
            Self::Video => "새로운 영상 레슨".to_string(),
            Self::Quiz => "새로운 퀴즈 레슨".to_string(),
        }
    }
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific lesson payload.
///
/// A closed sum type: a video lesson can only ever carry an optional asset
/// reference, a quiz lesson only its question list. Accessing the wrong
/// variant is an exhaustiveness error at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LessonContent {
    Video {
        /// Unset until the upload collaborator returns a reference.
        asset: Option<AssetRef>,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
}

impl LessonContent {
    /// Empty payload for a new lesson of the given kind.
    pub fn empty(lesson_type: LessonType) -> Self {
        match lesson_type {
            LessonType::Video => Self::Video { asset: None },
            LessonType::Quiz => Self::Quiz { questions: vec![] },
        }
    }

    pub fn lesson_type(&self) -> LessonType {
        match self {
            Self::Video { .. } => LessonType::Video,
            Self::Quiz { .. } => LessonType::Quiz,
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// The answer to a binary-choice quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    O,
    X,
}

/// One binary-choice question belonging to a quiz lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub answer: Answer,
}

/// An individual curriculum unit: a video reference or a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(flatten)]
    pub content: LessonContent,
}

impl Lesson {
    pub fn lesson_type(&self) -> LessonType {
        self.content.lesson_type()
    }
}

/// A named, ordered group of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

// ---------------------------------------------------------------------------
// Curriculum tree
// ---------------------------------------------------------------------------

/// Ordered section list with section- and lesson-level CRUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumTree {
    sections: Vec<Section>,
}

impl CurriculumTree {
    /// An empty tree with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree with the single introductory section every new course
    /// starts from.
    pub fn seeded() -> Self {
        Self {
            sections: vec![Section {
                id: SectionId::new(),
                title: "챕터 1: 소개".to_string(),
                lessons: vec![],
            }],
        }
    }

    // -- section operations -------------------------------------------------

    /// Append a new section with a generated default title and an empty
    /// lesson list. Always succeeds.
    pub fn add_section(&mut self) -> SectionId {
        let id = SectionId::new();
        let title = format!("챕터 {}: 새로운 챕터", self.sections.len() + 1);
        self.sections.push(Section {
            id,
            title,
            lessons: vec![],
        });
        id
    }

    /// Replace the title of exactly the matching section. Every other
    /// section is untouched.
    pub fn rename_section(
        &mut self,
        section_id: SectionId,
        title: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.section_mut(section_id)?.title = title.into();
        Ok(())
    }

    /// Remove the section together with all of its lessons and their
    /// questions, in one step. Returns the removed section so callers can
    /// release any per-lesson state they hold.
    pub fn remove_section(&mut self, section_id: SectionId) -> Result<Section, CoreError> {
        let index = self.section_index(section_id)?;
        Ok(self.sections.remove(index))
    }

    /// Move a section from one position to another, shifting the sections
    /// in between. Equal in-range indices are a no-op.
    pub fn reorder_section(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        reorder(&mut self.sections, from, to)
    }

    // -- lesson operations --------------------------------------------------

    /// Append a lesson of the given kind to the target section, titled with
    /// the kind's default and carrying an empty payload.
    pub fn add_lesson(
        &mut self,
        section_id: SectionId,
        lesson_type: LessonType,
    ) -> Result<LessonId, CoreError> {
        let section = self.section_mut(section_id)?;
        let id = LessonId::new();
        section.lessons.push(Lesson {
            id,
            title: lesson_type.default_title(),
            content: LessonContent::empty(lesson_type),
        });
        Ok(id)
    }

    /// Remove the lesson (and its questions, if it is a quiz) from the
    /// section. Returns the removed lesson.
    pub fn remove_lesson(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
    ) -> Result<Lesson, CoreError> {
        let section = self.section_mut(section_id)?;
        let index = section
            .lessons
            .iter()
            .position(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| CoreError::lesson_not_found(lesson_id))?;
        Ok(section.lessons.remove(index))
    }

    /// Move a lesson within its section's ordered list.
    pub fn reorder_lesson(
        &mut self,
        section_id: SectionId,
        from: usize,
        to: usize,
    ) -> Result<(), CoreError> {
        let section = self.section_mut(section_id)?;
        reorder(&mut section.lessons, from, to)
    }

    // -- reads --------------------------------------------------------------

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, section_id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Look up a lesson anywhere in the tree by its id alone.
    pub fn find_lesson(&self, lesson_id: LessonId) -> Option<(&Section, &Lesson)> {
        self.sections.iter().find_map(|section| {
            section
                .lessons
                .iter()
                .find(|lesson| lesson.id == lesson_id)
                .map(|lesson| (section, lesson))
        })
    }

    /// Look up a quiz question anywhere in the tree by its id alone.
    pub fn find_question(&self, question_id: QuestionId) -> Option<(&Lesson, &QuizQuestion)> {
        self.sections
            .iter()
            .flat_map(|section| section.lessons.iter())
            .find_map(|lesson| match &lesson.content {
                LessonContent::Quiz { questions } => questions
                    .iter()
                    .find(|q| q.id == question_id)
                    .map(|q| (lesson, q)),
                LessonContent::Video { .. } => None,
            })
    }

    pub fn lesson(
        &self,
        section_id: SectionId,
        lesson_id: LessonId,
    ) -> Result<&Lesson, CoreError> {
        self.section(section_id)
            .ok_or_else(|| CoreError::section_not_found(section_id))?
            .lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| CoreError::lesson_not_found(lesson_id))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    // -- internal -----------------------------------------------------------

    fn section_index(&self, section_id: SectionId) -> Result<usize, CoreError> {
        self.sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or_else(|| CoreError::section_not_found(section_id))
    }

    pub(crate) fn section_mut(&mut self, section_id: SectionId) -> Result<&mut Section, CoreError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or_else(|| CoreError::section_not_found(section_id))
    }

    pub(crate) fn lesson_mut(
        &mut self,
        section_id: SectionId,
        lesson_id: LessonId,
    ) -> Result<&mut Lesson, CoreError> {
        self.section_mut(section_id)?
            .lessons
            .iter_mut()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| CoreError::lesson_not_found(lesson_id))
    }
}

/// Move `list[from]` to position `to`, shifting the entries in between.
/// Both indices are validated against the current length before anything
/// is touched.
fn reorder<T>(list: &mut Vec<T>, from: usize, to: usize) -> Result<(), CoreError> {
    let len = list.len();
    if from >= len {
        return Err(CoreError::OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(CoreError::OutOfRange { index: to, len });
    }
    if from != to {
        let entry = list.remove(from);
        list.insert(to, entry);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
