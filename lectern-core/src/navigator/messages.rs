use std::time::Duration;

use lectern_model::{Course, CourseId};

use crate::player::{MountNode, PlayerEvent};

/// Everything that can happen to the navigator: user commands from the
/// hosting view and environment events from the SDK, timers, and catalog.
#[derive(Debug, Clone)]
pub enum NavigatorMessage {
    // User commands
    /// Sidebar lesson click.
    Select {
        module_index: usize,
        lesson_index: usize,
    },
    /// Module-header click: jump to the module's first lesson.
    SelectModule { module_index: usize },
    Next,
    Previous,
    /// Sidebar expand/collapse chevron.
    ToggleModule { module_index: usize },
    /// "Like" button; fire-and-forget, refreshes counts afterwards.
    Like,
    /// The hosting view is going away for good.
    Dispose,

    // View lifecycle
    NodeMounted(MountNode),
    NodeUnmounted,

    // Environment events
    SdkReady,
    SdkFailed { reason: String },
    /// Configured SDK wait bound elapsed (only sent when one is set).
    SdkDeadlineElapsed,
    /// Bind settle delay elapsed for the binding scheduled under `epoch`.
    BindDelayElapsed { epoch: u64 },
    /// Event from a player instance constructed under `epoch`.
    Player { epoch: u64, event: PlayerEvent },
    /// Auto-advance delay elapsed for schedule `token`.
    AutoAdvanceElapsed { token: u64 },
    /// A catalog refetch completed.
    CourseRefetched(Course),
}

/// Side-effect requests the host (or the tokio driver) performs on behalf
/// of the pure update function.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the bind settle timer; deliver
    /// [`NavigatorMessage::BindDelayElapsed`] with this epoch when it fires.
    ScheduleBind { epoch: u64, delay: Duration },
    /// Start the auto-advance timer; deliver
    /// [`NavigatorMessage::AutoAdvanceElapsed`] with this token.
    ScheduleAutoAdvance { token: u64, delay: Duration },
    /// Bound wait for the SDK ready signal; deliver
    /// [`NavigatorMessage::SdkDeadlineElapsed`].
    ScheduleSdkDeadline { delay: Duration },
    /// Submit a like through the catalog.
    SubmitLike { course: CourseId },
    /// Refetch the course tree; deliver
    /// [`NavigatorMessage::CourseRefetched`] on success.
    RefetchCourse { course: CourseId },
}
