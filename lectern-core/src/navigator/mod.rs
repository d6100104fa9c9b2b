//! Navigator domain
//!
//! The lesson-page orchestrator: binds the cursor, sidebar, player
//! lifecycle, and auto-advance together behind one message pipeline.

pub mod handle;
pub mod messages;
pub mod state;
pub mod update;

pub use handle::NavigatorHandle;
pub use messages::{Effect, NavigatorMessage};
pub use state::{NavigatorSnapshot, NavigatorState};
pub use update::update;
