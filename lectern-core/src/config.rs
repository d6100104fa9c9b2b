use std::time::Duration;

/// Timing knobs for the navigator.
///
/// Defaults: a short settle delay
/// before binding a player to a freshly rendered node, a short pause before
/// auto-advancing after playback ends, and an unbounded wait for the
/// external SDK with no retries. Hosts that want a bounded SDK wait set
/// `sdk_wait_timeout`.
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Delay between entering `Binding` and constructing the player
    /// instance, accommodating SDK iframe mount timing.
    pub bind_delay: Duration,

    /// Delay between an `Ended` event and the scheduled cursor transition,
    /// letting end-of-video UI settle.
    pub auto_advance_delay: Duration,

    /// Upper bound on waiting for the SDK ready signal. `None` waits
    /// forever.
    pub sdk_wait_timeout: Option<Duration>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            bind_delay: Duration::from_millis(100),
            auto_advance_delay: Duration::from_millis(1500),
            sdk_wait_timeout: None,
        }
    }
}
