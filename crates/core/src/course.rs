//! Course-level data model: basic info fields, category/difficulty enums,
//! and the assembled draft handed to the persistence collaborator.
//!
//! None of the fields are mandatory while authoring; the wizard's save
//! transition retains whatever the author typed, verbatim. The `validator`
//! rules on [`BasicInfo`] are evaluated by the persistence collaborator at
//! registration time, not by the wizard.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::curriculum::Section;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Course category, matching the four marketplace categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Development,
    Design,
    Business,
    Marketing,
}

impl Category {
    /// Parse a category string from stored form values.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "development" => Ok(Self::Development),
            "design" => Ok(Self::Design),
            "business" => Ok(Self::Business),
            "marketing" => Ok(Self::Marketing),
            _ => Err(CoreError::Validation(format!(
                "Invalid category '{s}'. Must be one of: development, design, business, marketing"
            ))),
        }
    }

    /// Convert to a stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Design => "design",
            Self::Business => "business",
            Self::Marketing => "marketing",
        }
    }

    /// Display label shown to authors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Development => "개발",
            Self::Design => "디자인",
            Self::Business => "비즈니스",
            Self::Marketing => "마케팅",
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a difficulty string from stored form values.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CoreError::Validation(format!(
                "Invalid difficulty '{s}'. Must be one of: beginner, intermediate, advanced"
            ))),
        }
    }

    /// Convert to a stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Display label shown to authors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "입문",
            Self::Intermediate => "중급",
            Self::Advanced => "고급",
        }
    }
}

// ---------------------------------------------------------------------------
// Asset references
// ---------------------------------------------------------------------------

/// Opaque reference to an uploaded asset (thumbnail image or lesson video),
/// issued by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Basic info
// ---------------------------------------------------------------------------

/// The step-1 form fields of the course wizard.
///
/// Everything is optional or empty-allowed while authoring. The length
/// rules below are enforced by the persistence collaborator when the
/// assembled draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BasicInfo {
    /// Course title, e.g. "Next.js 15 완벽 가이드".
    #[validate(length(max = 200))]
    pub title: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    /// One-sentence summary shown on course cards.
    #[validate(length(max = 500))]
    pub description: String,
    /// Long-form description shown on the course detail page.
    #[validate(length(max = 5000))]
    pub long_description: String,
    /// Thumbnail reference; unset until an upload succeeds.
    pub thumbnail: Option<AssetRef>,
}

// ---------------------------------------------------------------------------
// Course draft
// ---------------------------------------------------------------------------

/// The complete in-memory course being authored, as handed to the
/// persistence collaborator on registration.
///
/// Presentation-session state (which lessons are open in the editor) is
/// deliberately not part of this type and can never appear in its
/// serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CourseDraft {
    #[validate(nested)]
    pub basic_info: BasicInfo,
    pub curriculum: Vec<Section>,
}
