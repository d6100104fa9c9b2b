//! # Lectern Core
//!
//! Lesson-playback navigation for the Lectern course player: hierarchical
//! cursor over a course tree, video reference resolution, player instance
//! lifecycle against an externally loaded SDK, auto-advance, and sidebar
//! expansion state.
//!
//! ## Overview
//!
//! The crate is built around a pure message pipeline in the Elm style:
//!
//! - [`navigator::NavigatorState`] holds the whole session
//! - [`navigator::update`] applies one [`navigator::NavigatorMessage`] and
//!   returns the [`navigator::Effect`]s the host must perform
//! - [`runtime::NavigatorRuntime`] is an optional tokio driver that performs
//!   those effects (timers, catalog calls) and feeds results back in
//!
//! Nothing in the update path blocks or spawns, so every timing-sensitive
//! scenario (rapid lesson switching, unmount during a bind delay, auto-
//! advance racing a manual click) is testable as a plain message sequence.
//!
//! ## Architecture
//!
//! - [`cursor`]: (module, lesson) position over the course tree
//! - [`resolver`]: video reference string to canonical video id
//! - [`player`]: SDK binding state machine behind a backend trait
//! - [`advance`]: one-shot auto-advance token bookkeeping
//! - [`sidebar`]: per-module expansion flags
//! - [`catalog`]: async trait for course fetch and like submission
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lectern_core::catalog::CourseCatalog;
//! use lectern_core::navigator::{NavigatorHandle, NavigatorMessage};
//! use lectern_core::player::PlayerBackend;
//! use lectern_core::runtime::NavigatorRuntime;
//! use lectern_core::NavigatorConfig;
//! use lectern_model::Course;
//!
//! fn start(
//!     course: Course,
//!     backend: Box<dyn PlayerBackend>,
//!     catalog: Arc<dyn CourseCatalog>,
//! ) -> NavigatorRuntime {
//!     let (handle, effects) =
//!         NavigatorHandle::initialize(course, None, NavigatorConfig::default(), backend);
//!     let runtime = NavigatorRuntime::spawn(handle, effects, catalog);
//!     runtime.send(NavigatorMessage::Next);
//!     runtime
//! }
//! ```

#![allow(missing_docs)]

/// Auto-advance scheduling tokens
pub mod advance;

/// Async course catalog trait (fetch, like)
pub mod catalog;

/// Navigator timing knobs
pub mod config;

/// Hierarchical (module, lesson) cursor
pub mod cursor;

/// Error types
pub mod error;

/// Message, state, and update pipeline for a playback session
pub mod navigator;

/// Player lifecycle state machine and backend trait
pub mod player;

/// Video reference resolution
pub mod resolver;

/// Tokio driver performing navigator effects
pub mod runtime;

/// Sidebar module expansion state
pub mod sidebar;

pub use config::NavigatorConfig;
pub use error::{CatalogError, NavigatorError, Result};
pub use navigator::{Effect, NavigatorHandle, NavigatorMessage, NavigatorSnapshot};
pub use runtime::NavigatorRuntime;
