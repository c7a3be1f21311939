//! Collaborator contracts consumed by the authoring session, plus the
//! in-memory implementations used in tests.
//!
//! The core guarantees there are no suspension points inside an authoring
//! session, so both seams are synchronous traits. The persistence
//! collaborator is invoked at most once per session, on the register
//! transition; upload calls may happen any number of times while editing.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use learnflow_core::{AssetRef, CourseDraft, CourseId, Timestamp};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure of an external collaborator. Surfaced to the author with the
/// draft left intact, so the action can be retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("upload failed: {0}")]
    Upload(String),
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// Persistence collaborator: receives the assembled draft on registration.
pub trait CourseStore {
    /// Persist the draft and return the id the course was registered
    /// under. Network and validation failures alike come back as
    /// [`StoreError::Persistence`].
    fn submit_course_draft(&mut self, draft: &CourseDraft) -> Result<CourseId, StoreError>;
}

/// Upload collaborator: turns raw file bytes into an asset reference.
pub trait AssetStore {
    /// Upload a file and return its reference. The caller leaves the
    /// target field unset unless a reference is returned.
    fn upload_asset(&mut self, file_name: &str, bytes: &[u8]) -> Result<AssetRef, StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory course store
// ---------------------------------------------------------------------------

/// A draft accepted by [`MemoryCourseStore`].
#[derive(Debug, Clone)]
pub struct SubmittedCourse {
    pub id: CourseId,
    pub draft: CourseDraft,
    pub submitted_at: Timestamp,
}

/// In-memory persistence collaborator.
///
/// Runs the draft's `validator` rules the way the real backend would and
/// records accepted drafts. `fail_next` injects one failure for
/// retry-path tests.
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    accepted: Vec<SubmittedCourse>,
    fail_next: Option<String>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next submission fail with the given message.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    pub fn accepted(&self) -> &[SubmittedCourse] {
        &self.accepted
    }
}

impl CourseStore for MemoryCourseStore {
    fn submit_course_draft(&mut self, draft: &CourseDraft) -> Result<CourseId, StoreError> {
        if let Some(message) = self.fail_next.take() {
            return Err(StoreError::Persistence(message));
        }
        draft
            .validate()
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        let id = CourseId::new();
        self.accepted.push(SubmittedCourse {
            id,
            draft: draft.clone(),
            submitted_at: Utc::now(),
        });
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// In-memory asset store
// ---------------------------------------------------------------------------

/// In-memory upload collaborator. Issues opaque `assets/` keys.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    uploaded: Vec<(AssetRef, String)>,
    fail_next: Option<String>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next upload fail with the given message.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    pub fn uploaded(&self) -> &[(AssetRef, String)] {
        &self.uploaded
    }
}

impl AssetStore for MemoryAssetStore {
    fn upload_asset(&mut self, file_name: &str, bytes: &[u8]) -> Result<AssetRef, StoreError> {
        if let Some(message) = self.fail_next.take() {
            return Err(StoreError::Upload(message));
        }
        if bytes.is_empty() {
            return Err(StoreError::Upload(format!("empty file: {file_name}")));
        }
        let asset = AssetRef::new(format!("assets/{}/{file_name}", Uuid::new_v4()));
        self.uploaded.push((asset.clone(), file_name.to_string()));
        Ok(asset)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
