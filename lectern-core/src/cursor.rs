//! The `(module, lesson)` navigation cursor.
//!
//! The cursor is the single source of truth for which lesson is playing.
//! Its indices always address a real lesson in the bound course snapshot;
//! every transition clamps or refuses rather than leaving that invariant.
//! Modules with zero lessons (malformed data) are skipped over, so forward
//! and backward motion stays possible when a later module is playable.

use std::sync::Arc;

use lectern_model::{Course, Lesson};
use tracing::warn;

use crate::error::NavigatorError;

/// Bounds-checked two-level cursor over a course tree.
///
/// The three transition operations ([`next`](Self::next),
/// [`previous`](Self::previous), [`jump_to`](Self::jump_to)) are the only
/// mutators; everything else is a pure derivation.
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    course: Arc<Course>,
    module_index: usize,
    lesson_index: usize,
}

impl NavigationCursor {
    /// Create a cursor over `course`, positioned at `initial` (clamped) or
    /// at the first playable lesson.
    ///
    /// Fails only when no module holds any lesson; in that state no valid
    /// cursor can exist and the navigator renders the course as empty.
    pub fn new(
        course: Arc<Course>,
        initial: Option<(usize, usize)>,
    ) -> Result<Self, NavigatorError> {
        if !course.has_playable_lesson() {
            return Err(NavigatorError::Data(format!(
                "course {} has no playable lesson",
                course.id
            )));
        }
        let mut cursor = Self {
            course,
            module_index: 0,
            lesson_index: 0,
        };
        let (module, lesson) = initial.unwrap_or((0, 0));
        cursor.jump_to(module, lesson);
        Ok(cursor)
    }

    pub fn position(&self) -> (usize, usize) {
        (self.module_index, self.lesson_index)
    }

    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    /// The lesson the cursor points at. Always resolvable while the
    /// invariant holds; the fallback only fires if the snapshot was swapped
    /// out from under us, which `set_course` prevents.
    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.course.lesson_at(self.module_index, self.lesson_index)
    }

    pub fn has_next(&self) -> bool {
        self.peek_next().is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.peek_previous().is_some()
    }

    /// Advance to the next lesson, crossing into the next non-empty module
    /// when the current one is exhausted. No-op at the end of the course.
    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        match self.peek_next() {
            Some(position) => {
                (self.module_index, self.lesson_index) = position;
                true
            }
            None => false,
        }
    }

    /// Step back to the previous lesson, crossing into the previous
    /// non-empty module at a module boundary. No-op at the very start.
    /// Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        match self.peek_previous() {
            Some(position) => {
                (self.module_index, self.lesson_index) = position;
                true
            }
            None => false,
        }
    }

    /// Explicit selection, e.g. from a sidebar click. Out-of-range input is
    /// clamped to the nearest valid position rather than rejected, since
    /// index values may arrive from stale asynchronous events.
    pub fn jump_to(&mut self, module_index: usize, lesson_index: usize) {
        let modules = &self.course.modules;
        if modules.is_empty() {
            return;
        }
        let mut module = module_index.min(modules.len() - 1);

        if modules[module].is_empty() {
            warn!(module, "selection landed on empty module, clamping");
            // Nearest playable module: scan backward first, then forward.
            module = (0..module)
                .rev()
                .chain(module + 1..modules.len())
                .find(|&m| !modules[m].is_empty())
                .unwrap_or(module);
        }
        if modules[module].is_empty() {
            // Unreachable while the constructor invariant holds.
            return;
        }

        self.module_index = module;
        self.lesson_index = lesson_index.min(modules[module].lessons.len() - 1);
    }

    /// Rebind to a refetched snapshot of the same course, clamping the
    /// position in case the tree shrank.
    pub fn set_course(&mut self, course: Arc<Course>) -> Result<(), NavigatorError> {
        if !course.has_playable_lesson() {
            return Err(NavigatorError::Data(format!(
                "refetched course {} has no playable lesson",
                course.id
            )));
        }
        let (module, lesson) = self.position();
        self.course = course;
        self.jump_to(module, lesson);
        Ok(())
    }

    fn peek_next(&self) -> Option<(usize, usize)> {
        let modules = &self.course.modules;
        let current = modules.get(self.module_index)?;
        if self.lesson_index + 1 < current.lessons.len() {
            return Some((self.module_index, self.lesson_index + 1));
        }
        (self.module_index + 1..modules.len())
            .find(|&m| !modules[m].is_empty())
            .map(|m| (m, 0))
    }

    fn peek_previous(&self) -> Option<(usize, usize)> {
        if self.lesson_index > 0 {
            return Some((self.module_index, self.lesson_index - 1));
        }
        let modules = &self.course.modules;
        (0..self.module_index)
            .rev()
            .find(|&m| !modules[m].is_empty())
            .map(|m| (m, modules[m].lessons.len() - 1))
    }
}
