use lectern_model::CourseId;

/// Failure taxonomy for the navigator.
///
/// None of these propagate to the hosting application as panics or uncaught
/// errors; each is converted at the point of detection into one of the
/// finite [`PlayerUiState`](crate::player::PlayerUiState) values or an
/// inline UI condition. Late callbacks referencing a torn-down session are
/// not an error variant at all: they are detected by epoch checks and
/// dropped with a debug log, since they originate from inherently racy
/// external callbacks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigatorError {
    /// Malformed or empty course tree, e.g. no module holds any lesson.
    #[error("malformed course data: {0}")]
    Data(String),

    /// A lesson's raw video reference yielded no canonical identifier.
    #[error("unresolvable video reference: {0:?}")]
    Resolution(String),

    /// The external player SDK failed to load or never signaled ready.
    #[error("player SDK unavailable: {0}")]
    SdkLoad(String),

    /// The player reported an error after a successful binding.
    #[error("player runtime error: {0}")]
    PlayerRuntime(String),
}

/// Errors surfaced by the external catalog collaborator.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("course not found: {0}")]
    NotFound(CourseId),

    #[error("catalog request failed: {0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
