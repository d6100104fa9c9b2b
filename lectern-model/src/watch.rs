use std::collections::HashSet;

use crate::course::Course;
use crate::ids::LessonId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Completion summary for one course within a playback session.
///
/// Completion arrives from two places: the `completed` flags baked into the
/// course snapshot at fetch time, and lessons the navigator marks complete
/// when their playback ends. The session-side set is additive only; nothing
/// is persisted beyond the session.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseProgress {
    /// Lessons completed during this session, on top of the snapshot flags.
    completed: HashSet<LessonId>,
}

impl CourseProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lesson as completed. Idempotent.
    pub fn mark_completed(&mut self, lesson: LessonId) {
        self.completed.insert(lesson);
    }

    pub fn is_completed(&self, course: &Course, lesson: &LessonId) -> bool {
        if self.completed.contains(lesson) {
            return true;
        }
        course
            .modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .any(|l| &l.id == lesson && l.completed)
    }

    /// Completed lessons over total lessons for the given course.
    pub fn summary(&self, course: &Course) -> ProgressSummary {
        let total = course.lesson_count();
        let completed = course
            .modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .filter(|l| l.completed || self.completed.contains(&l.id))
            .count();
        ProgressSummary { total, completed }
    }

    /// Drop session-side completions, e.g. when a different course loads.
    pub fn reset(&mut self) {
        self.completed.clear();
    }
}

/// Derived completed/total counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
}

impl ProgressSummary {
    /// Completion fraction in `0.0..=1.0`; zero-lesson courses read as 0.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}
