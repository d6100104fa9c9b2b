use crate::duration::RawDuration;
use crate::ids::{CourseId, LessonId, ModuleId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Top-level content unit: a course and its ordered modules.
///
/// Immutable for the lifetime of one playback session. The catalog layer
/// owns construction; the navigator only ever reads it (behind `Arc`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub modules: Vec<Module>,
}

/// Named group of ordered lessons within a course.
///
/// Well-formed data has a non-empty `lessons` list, but the API does not
/// guarantee it; consumers must tolerate empty modules without panicking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub order: u32,
    pub lessons: Vec<Lesson>,
}

/// Leaf content unit with a video reference and duration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub order: u32,
    /// Raw video reference as stored by the API: a watch URL, a bare
    /// platform ID, or garbage. Resolution to a playable identifier happens
    /// in `lectern-core`.
    pub video_ref: String,
    pub duration_raw: RawDuration,
    pub completed: bool,
}

impl Course {
    /// Total lessons across all modules.
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Whether any module holds at least one lesson.
    pub fn has_playable_lesson(&self) -> bool {
        self.modules.iter().any(|m| !m.lessons.is_empty())
    }

    pub fn lesson_at(
        &self,
        module_index: usize,
        lesson_index: usize,
    ) -> Option<&Lesson> {
        self.modules.get(module_index)?.lessons.get(lesson_index)
    }
}

impl Module {
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
