//! Navigator/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in lectern-core or other presentation layers.

pub use super::course::{Course, Lesson, Module};
pub use super::duration::RawDuration;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::{CourseId, LessonId, ModuleId};
pub use super::video::{VIDEO_ID_LEN, VideoId};
pub use super::watch::{CourseProgress, ProgressSummary};
