//! LearnFlow authoring session: the wizard controller plus the
//! collaborator seams it drives.
//!
//! The domain itself lives in `learnflow-core`; this crate owns one
//! instructor's session state, enforces which actions are legal in which
//! wizard step, and talks to the persistence and upload collaborators.

pub mod controller;
pub mod store;

pub use controller::{SessionError, WizardController};
pub use store::{
    AssetStore, CourseStore, MemoryAssetStore, MemoryCourseStore, StoreError, SubmittedCourse,
};
