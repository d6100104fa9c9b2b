//! Navigator message handling.
//!
//! `update` is synchronous and pure with respect to the outside world: all
//! side effects come back as [`Effect`] requests for the host or the tokio
//! driver to perform. That keeps every ordering rule in this file
//! exhaustively testable without timers or a real player SDK.

use std::sync::Arc;

use lectern_model::Course;
use tracing::{debug, info, warn};

use crate::cursor::NavigationCursor;
use crate::error::NavigatorError;
use crate::navigator::messages::{Effect, NavigatorMessage};
use crate::navigator::state::NavigatorState;
use crate::player::PlaybackState;
use crate::resolver;
use crate::sidebar::SidebarExpansionState;

/// Apply one message to the navigator, returning the side effects to run.
pub fn update(
    state: &mut NavigatorState,
    message: NavigatorMessage,
) -> Vec<Effect> {
    if state.disposed {
        // Everything after dispose is a zombie callback or a stray command.
        debug!(?message, "message after dispose, dropping");
        return Vec::new();
    }

    match message {
        NavigatorMessage::Select {
            module_index,
            lesson_index,
        } => navigate(state, |cursor| {
            cursor.jump_to(module_index, lesson_index);
            true
        }),

        NavigatorMessage::SelectModule { module_index } => {
            // Module-header click selects the module's first lesson.
            navigate(state, move |cursor| {
                cursor.jump_to(module_index, 0);
                true
            })
        }

        NavigatorMessage::Next => navigate(state, |cursor| cursor.next()),

        NavigatorMessage::Previous => {
            navigate(state, |cursor| cursor.previous())
        }

        NavigatorMessage::ToggleModule { module_index } => {
            state.sidebar.toggle(module_index);
            Vec::new()
        }

        NavigatorMessage::Like => {
            let course = state.course.id.clone();
            vec![
                Effect::SubmitLike {
                    course: course.clone(),
                },
                Effect::RefetchCourse { course },
            ]
        }

        NavigatorMessage::Dispose => {
            info!(course = %state.course.id, "navigator disposed");
            state.advance.cancel();
            state.player.teardown();
            state.disposed = true;
            Vec::new()
        }

        NavigatorMessage::NodeMounted(node) => {
            schedule_bind(state, |player| player.node_mounted(node))
        }

        NavigatorMessage::NodeUnmounted => {
            state.player.node_unmounted();
            Vec::new()
        }

        NavigatorMessage::SdkReady => {
            schedule_bind(state, |player| player.sdk_ready())
        }

        NavigatorMessage::SdkFailed { reason } => {
            state.player.sdk_failed(reason);
            Vec::new()
        }

        NavigatorMessage::SdkDeadlineElapsed => {
            state.player.sdk_deadline_elapsed();
            Vec::new()
        }

        NavigatorMessage::BindDelayElapsed { epoch } => {
            state.player.bind_due(epoch);
            Vec::new()
        }

        NavigatorMessage::Player { epoch, event } => {
            match state.player.handle_event(epoch, event) {
                Some(PlaybackState::Ended) => on_playback_ended(state),
                _ => Vec::new(),
            }
        }

        NavigatorMessage::AutoAdvanceElapsed { token } => {
            if !state.advance.try_fire(token) {
                return Vec::new();
            }
            let Some(cursor) = state.cursor.as_mut() else {
                return Vec::new();
            };
            if cursor.next() {
                after_cursor_motion(state)
            } else {
                Vec::new()
            }
        }

        NavigatorMessage::CourseRefetched(course) => {
            apply_refetched_course(state, course)
        }
    }
}

/// Manual navigation: cancel any pending auto-advance (user intent wins),
/// run the cursor transition, then re-sync sidebar and player target.
fn navigate(
    state: &mut NavigatorState,
    transition: impl FnOnce(&mut NavigationCursor) -> bool,
) -> Vec<Effect> {
    state.advance.cancel();
    let Some(cursor) = state.cursor.as_mut() else {
        return Vec::new();
    };
    transition(cursor);
    after_cursor_motion(state)
}

/// Post-transition sync: the cursor's module is forced open (additively)
/// and the player is pointed at the newly current lesson's video.
fn after_cursor_motion(state: &mut NavigatorState) -> Vec<Effect> {
    if let Some(cursor) = &state.cursor {
        state.sidebar.reveal(cursor.position().0);
    }
    sync_player_target(state)
}

/// Resolve the current lesson's raw reference and retarget the player.
/// Returns the bind-delay effect when a (re)bind was started.
pub(crate) fn sync_player_target(state: &mut NavigatorState) -> Vec<Effect> {
    let resolved = state.current_lesson().and_then(|lesson| {
        let id = resolver::resolve(&lesson.video_ref);
        if id.is_none() {
            // Surfaced as a "no video" state; navigation stays usable.
            let err = NavigatorError::Resolution(lesson.video_ref.clone());
            warn!(lesson = %lesson.id, %err, "video reference did not resolve");
        }
        id
    });
    schedule_bind(state, |player| player.set_target(resolved))
}

fn schedule_bind(
    state: &mut NavigatorState,
    begin: impl FnOnce(
        &mut crate::player::PlayerLifecycleController,
    ) -> Option<u64>,
) -> Vec<Effect> {
    match begin(&mut state.player) {
        Some(epoch) => vec![Effect::ScheduleBind {
            epoch,
            delay: state.config.bind_delay,
        }],
        None => Vec::new(),
    }
}

/// The live session finished its video: record completion, then schedule
/// the advance if a next lesson exists.
fn on_playback_ended(state: &mut NavigatorState) -> Vec<Effect> {
    let ended_lesson = state.current_lesson().map(|lesson| lesson.id.clone());
    if let Some(lesson) = ended_lesson {
        state.progress.mark_completed(lesson);
    }
    if !state.has_next() {
        debug!("playback ended on the last lesson, nothing to advance to");
        return Vec::new();
    }
    let token = state.advance.schedule();
    vec![Effect::ScheduleAutoAdvance {
        token,
        delay: state.config.auto_advance_delay,
    }]
}

/// Swap in a refetched tree. Same course identity preserves the session
/// (cursor clamped if the tree shrank); a different identity is a fresh
/// session: cursor, sidebar, and session progress all reset.
fn apply_refetched_course(
    state: &mut NavigatorState,
    course: Course,
) -> Vec<Effect> {
    let previous_id = state.course.id.clone();
    let same_identity = course.id == previous_id;
    let course = Arc::new(course);
    state.course = Arc::clone(&course);

    if same_identity {
        match state.cursor.as_mut() {
            Some(cursor) => {
                if let Err(err) = cursor.set_course(Arc::clone(&course)) {
                    warn!(%err, "refetched course no longer navigable");
                    state.cursor = None;
                }
            }
            None => {
                // A previously empty course may have gained lessons.
                state.cursor =
                    NavigationCursor::new(Arc::clone(&course), None).ok();
            }
        }
        state.sidebar.resize(course.modules.len());
    } else {
        info!(from = %previous_id, to = %course.id, "course identity changed");
        state.advance.cancel();
        state.progress.reset();
        state.cursor = match NavigationCursor::new(Arc::clone(&course), None) {
            Ok(cursor) => Some(cursor),
            Err(err) => {
                warn!(%err, "replacement course not navigable");
                None
            }
        };
        let cursor_module =
            state.cursor.as_ref().map(|c| c.position().0).unwrap_or(0);
        state.sidebar = SidebarExpansionState::for_course(
            course.modules.len(),
            cursor_module,
        );
    }

    after_cursor_motion(state)
}
