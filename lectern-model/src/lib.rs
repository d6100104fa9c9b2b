//! Core data model definitions shared across Lectern crates.
//!
//! The types here are a read-only snapshot of what the catalog API returns:
//! a course, its ordered modules, and their ordered lessons. Nothing in this
//! crate performs I/O; the navigator in `lectern-core` consumes these types
//! and owns all behavior.
#![allow(missing_docs)]

pub mod course;
pub mod duration;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod video;
pub mod watch;

// Intentionally curated re-exports for downstream consumers.
pub use course::{Course, Lesson, Module};
pub use duration::RawDuration;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CourseId, LessonId, ModuleId};
pub use video::VideoId;
pub use watch::{CourseProgress, ProgressSummary};
