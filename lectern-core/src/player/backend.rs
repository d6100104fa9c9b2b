//! Seam between the navigator and the externally loaded player SDK.
//!
//! The SDK is loaded once, globally, by the enclosing application; the
//! navigator only awaits its ready signal and drives instance construction
//! and destruction through [`PlayerBackend`]. Instances live behind
//! [`PlayerHandle`] and are exclusively owned by the lifecycle controller;
//! no other component may call methods on them.

use std::fmt;

use lectern_model::VideoId;

use crate::error::NavigatorError;

/// Host-side identifier of the render surface a player binds to.
///
/// The navigator treats it as opaque; it only matters that binding targets
/// the node reference current at construction time, and that the node may
/// disappear between scheduling a bind and performing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountNode(String);

impl MountNode {
    pub fn new(id: impl Into<String>) -> Self {
        MountNode(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Events reported by a live player instance.
///
/// The host tags each event with the session epoch it was constructed
/// under; the controller drops events whose epoch no longer matches the
/// live session.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Instance finished initializing; carries the reported duration.
    Ready { duration_seconds: f64 },
    /// Playback state moved.
    StateChange(PlaybackState),
    /// Player-level error after successful binding. Non-fatal to the page.
    Error { message: String },
}

/// Coarse playback states forwarded by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Buffering,
    Ended,
}

/// Constructor surface of the external player SDK.
///
/// `create` is called only once the SDK signaled ready and the bind delay
/// elapsed with the target node still mounted. Implementations deliver
/// subsequent [`PlayerEvent`]s tagged with the `epoch` given here.
pub trait PlayerBackend: Send + fmt::Debug {
    fn create(
        &mut self,
        node: &MountNode,
        video: &VideoId,
        epoch: u64,
    ) -> Result<Box<dyn PlayerHandle>, NavigatorError>;
}

/// A live player instance. Dropped handles must release the underlying
/// SDK object; `destroy` exists so teardown is explicit and observable.
pub trait PlayerHandle: Send + fmt::Debug {
    fn video(&self) -> &VideoId;

    /// Tear the instance down. Must be idempotent.
    fn destroy(&mut self);
}
