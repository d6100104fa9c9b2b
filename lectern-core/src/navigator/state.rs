use std::sync::Arc;

use lectern_model::{Course, CourseProgress, Lesson, ProgressSummary};
use tracing::warn;

use crate::advance::AutoAdvanceCoordinator;
use crate::config::NavigatorConfig;
use crate::cursor::NavigationCursor;
use crate::navigator::messages::Effect;
use crate::player::{PlayerBackend, PlayerLifecycleController, PlayerUiState};
use crate::sidebar::SidebarExpansionState;

/// Full navigator domain state for one playback session.
///
/// Mutated exclusively by [`update`](crate::navigator::update::update);
/// the hosting view reads it through [`snapshot`](Self::snapshot) or the
/// individual derived getters.
#[derive(Debug)]
pub struct NavigatorState {
    pub(crate) config: NavigatorConfig,
    pub(crate) course: Arc<Course>,
    /// `None` when the course holds no playable lesson (malformed data);
    /// the page renders an empty state and navigation is inert.
    pub(crate) cursor: Option<NavigationCursor>,
    pub(crate) sidebar: SidebarExpansionState,
    pub(crate) player: PlayerLifecycleController,
    pub(crate) advance: AutoAdvanceCoordinator,
    pub(crate) progress: CourseProgress,
    pub(crate) disposed: bool,
}

/// Derived view of the navigator for the UI layer, cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorSnapshot {
    pub position: Option<(usize, usize)>,
    pub current_lesson: Option<Lesson>,
    pub has_next: bool,
    pub has_previous: bool,
    pub player: PlayerUiState,
    pub sidebar: Vec<bool>,
    pub progress: ProgressSummary,
}

impl NavigatorState {
    /// Build the session over an already-fetched course tree. Returns the
    /// initial effects (at most a bounded-SDK-wait timer; binding cannot
    /// start before the node mounts and the SDK signals ready).
    pub fn new(
        course: Course,
        initial_selection: Option<(usize, usize)>,
        config: NavigatorConfig,
        backend: Box<dyn PlayerBackend>,
    ) -> (Self, Vec<Effect>) {
        let course = Arc::new(course);
        let cursor =
            match NavigationCursor::new(Arc::clone(&course), initial_selection)
            {
                Ok(cursor) => Some(cursor),
                Err(err) => {
                    warn!(%err, "course not navigable");
                    None
                }
            };
        let cursor_module =
            cursor.as_ref().map(|c| c.position().0).unwrap_or(0);
        let sidebar = SidebarExpansionState::for_course(
            course.modules.len(),
            cursor_module,
        );

        let mut state = Self {
            course,
            cursor,
            sidebar,
            player: PlayerLifecycleController::new(backend),
            advance: AutoAdvanceCoordinator::new(),
            progress: CourseProgress::new(),
            disposed: false,
            config,
        };

        let mut effects = Vec::new();
        if let Some(delay) = state.config.sdk_wait_timeout {
            effects.push(Effect::ScheduleSdkDeadline { delay });
        }
        // Record the initial target; no bind can be scheduled yet.
        effects.extend(crate::navigator::update::sync_player_target(
            &mut state,
        ));
        (state, effects)
    }

    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.cursor.as_ref().and_then(|c| c.current_lesson())
    }

    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.as_ref().map(|c| c.position())
    }

    pub fn has_next(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.has_next())
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.has_previous())
    }

    pub fn player_state(&self) -> PlayerUiState {
        self.player.ui_state()
    }

    pub fn sidebar(&self) -> &[bool] {
        self.sidebar.as_slice()
    }

    pub fn progress(&self) -> ProgressSummary {
        self.progress.summary(&self.course)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            position: self.position(),
            current_lesson: self.current_lesson().cloned(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            player: self.player_state(),
            sidebar: self.sidebar().to_vec(),
            progress: self.progress(),
        }
    }
}
