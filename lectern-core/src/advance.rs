//! Auto-advance scheduling.
//!
//! When the live session reports "ended" and a next lesson exists, the
//! cursor transition runs after a short delay so end-of-video UI can
//! settle. The scheduled transition must be cancellable: manual navigation,
//! disposal, or a newer schedule all invalidate it, and a token that
//! already fired can never fire again.

use tracing::debug;

/// One-shot token bookkeeping for the pending auto-advance.
///
/// At most one schedule is outstanding; tokens are monotonically increasing
/// so a timer callback can prove it is still the current one.
#[derive(Debug, Default)]
pub struct AutoAdvanceCoordinator {
    next_token: u64,
    pending: Option<u64>,
}

impl AutoAdvanceCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an advance, superseding any outstanding one. Returns the
    /// token the timer must present when it fires.
    pub fn schedule(&mut self) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        if let Some(stale) = self.pending.replace(token) {
            debug!(stale, token, "superseding pending auto-advance");
        }
        token
    }

    /// Invalidate the outstanding schedule, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            debug!(token, "auto-advance cancelled");
        }
    }

    /// A timer fired. True exactly when `token` is the outstanding
    /// schedule; the token is consumed either way it matches, so repeats
    /// and zombies cannot fire twice.
    pub fn try_fire(&mut self, token: u64) -> bool {
        match self.pending {
            Some(pending) if pending == token => {
                self.pending = None;
                true
            }
            _ => {
                debug!(token, "stale auto-advance timer, dropping");
                false
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
