/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("invalid video id: {0}")]
    InvalidVideoId(String),

    #[error("invalid course: {0}")]
    InvalidCourse(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
