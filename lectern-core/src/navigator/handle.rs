use lectern_model::{Course, Lesson, ProgressSummary};

use crate::config::NavigatorConfig;
use crate::navigator::messages::{Effect, NavigatorMessage};
use crate::navigator::state::{NavigatorSnapshot, NavigatorState};
use crate::navigator::update::update;
use crate::player::{PlayerBackend, PlayerUiState};

/// Narrow, statically checkable surface between the navigator and the
/// hosting page.
///
/// Commands mutate the session through the message pipeline and hand back
/// the [`Effect`]s the host must perform (or feed to the tokio driver);
/// everything the view renders comes from the derived getters. Hosts that
/// would rather not run effects themselves wrap the handle in
/// [`NavigatorRuntime`](crate::runtime::NavigatorRuntime).
#[derive(Debug)]
pub struct NavigatorHandle {
    state: NavigatorState,
}

impl NavigatorHandle {
    /// Start a playback session over an already-fetched course tree,
    /// optionally at an explicit initial selection.
    pub fn initialize(
        course: Course,
        initial_selection: Option<(usize, usize)>,
        config: NavigatorConfig,
        backend: Box<dyn PlayerBackend>,
    ) -> (Self, Vec<Effect>) {
        let (state, effects) =
            NavigatorState::new(course, initial_selection, config, backend);
        (Self { state }, effects)
    }

    /// Feed any message (command or environment event) through the
    /// update pipeline.
    pub fn apply(&mut self, message: NavigatorMessage) -> Vec<Effect> {
        update(&mut self.state, message)
    }

    pub fn select(
        &mut self,
        module_index: usize,
        lesson_index: usize,
    ) -> Vec<Effect> {
        self.apply(NavigatorMessage::Select {
            module_index,
            lesson_index,
        })
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.apply(NavigatorMessage::Next)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.apply(NavigatorMessage::Previous)
    }

    pub fn toggle_module(&mut self, module_index: usize) -> Vec<Effect> {
        self.apply(NavigatorMessage::ToggleModule { module_index })
    }

    pub fn like(&mut self) -> Vec<Effect> {
        self.apply(NavigatorMessage::Like)
    }

    pub fn dispose(&mut self) -> Vec<Effect> {
        self.apply(NavigatorMessage::Dispose)
    }

    // Derived outputs for the view layer.

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.state.current_lesson()
    }

    pub fn position(&self) -> Option<(usize, usize)> {
        self.state.position()
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    pub fn player_state(&self) -> PlayerUiState {
        self.state.player_state()
    }

    pub fn sidebar(&self) -> &[bool] {
        self.state.sidebar()
    }

    pub fn progress(&self) -> ProgressSummary {
        self.state.progress()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        self.state.snapshot()
    }
}
