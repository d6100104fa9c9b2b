//! Player domain
//!
//! Owns the external player SDK seam and the lifecycle of the one live
//! instance bound to the lesson page's render surface.

pub mod backend;
pub mod lifecycle;

pub use backend::{
    MountNode, PlaybackState, PlayerBackend, PlayerEvent, PlayerHandle,
};
pub use lifecycle::{PlayerLifecycleController, PlayerSession, PlayerUiState};
