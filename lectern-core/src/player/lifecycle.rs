//! Player instance lifecycle.
//!
//! Exactly one live player instance per mount node, ever. A change of the
//! resolved video identifier never re-points a live instance; the old one
//! is destroyed before construction of the new one begins, because the
//! underlying SDK does not support retargeting mid-life reliably.
//!
//! Every asynchronous step (the bind delay, SDK callbacks) is tagged with a
//! session epoch captured at schedule time. A callback whose epoch no
//! longer matches the live session is a zombie from a torn-down view; it is
//! logged and dropped, never acted on.

use lectern_model::VideoId;
use tracing::{debug, info, warn};

use crate::error::NavigatorError;
use crate::player::backend::{
    MountNode, PlaybackState, PlayerBackend, PlayerEvent, PlayerHandle,
};

/// One successfully constructed player binding.
#[derive(Debug)]
pub struct PlayerSession {
    video: VideoId,
    epoch: u64,
    handle: Box<dyn PlayerHandle>,
    duration_seconds: Option<f64>,
}

/// Where the controller sits in the binding sequence. Destruction through
/// the backend is synchronous, so teardown moves straight back to
/// `Unbound`; there is no observable destroying phase.
#[derive(Debug)]
enum Phase {
    Unbound,
    Binding { video: VideoId, epoch: u64 },
    Bound(PlayerSession),
}

/// How the external SDK load is going.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SdkState {
    Loading,
    Ready,
    Failed(NavigatorError),
}

/// Player condition as the view layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUiState {
    /// Waiting for the external SDK's ready signal.
    LoadingSdk,
    /// The current lesson has no resolvable video; navigation still works.
    NoVideo,
    /// SDK ready, identifier resolved, construction pending.
    Binding,
    /// Instance live and wired.
    Bound,
    /// The player reported a runtime error; inline, non-fatal.
    Error(String),
    /// SDK load failed; playback is permanently unavailable this session.
    Unavailable(String),
}

/// Owns the one live player instance and the rules for (re)binding it.
#[derive(Debug)]
pub struct PlayerLifecycleController {
    backend: Box<dyn PlayerBackend>,
    node: Option<MountNode>,
    sdk: SdkState,
    phase: Phase,
    target: Option<VideoId>,
    epoch: u64,
    last_error: Option<NavigatorError>,
}

impl PlayerLifecycleController {
    pub fn new(backend: Box<dyn PlayerBackend>) -> Self {
        Self {
            backend,
            node: None,
            sdk: SdkState::Loading,
            phase: Phase::Unbound,
            target: None,
            epoch: 0,
            last_error: None,
        }
    }

    /// The view's render surface appeared. May start a pending binding.
    pub fn node_mounted(&mut self, node: MountNode) -> Option<u64> {
        self.node = Some(node);
        self.try_begin_binding()
    }

    /// The render surface is gone; any live instance must go with it.
    pub fn node_unmounted(&mut self) {
        self.node = None;
        self.teardown();
    }

    /// External SDK signaled ready. May start a pending binding. A ready
    /// signal after a recorded load failure is not believed; failure is
    /// permanent for the session.
    pub fn sdk_ready(&mut self) -> Option<u64> {
        if self.sdk != SdkState::Loading {
            return None;
        }
        info!("player SDK ready");
        self.sdk = SdkState::Ready;
        self.try_begin_binding()
    }

    /// External SDK script failed to load. Permanent for this session.
    pub fn sdk_failed(&mut self, reason: String) {
        let err = NavigatorError::SdkLoad(reason);
        warn!(%err, "player SDK load failed");
        self.teardown();
        self.sdk = SdkState::Failed(err);
    }

    /// A configured SDK wait bound elapsed. Counts as a load failure only
    /// if the ready signal never arrived.
    pub fn sdk_deadline_elapsed(&mut self) {
        if self.sdk == SdkState::Loading {
            self.sdk_failed("ready signal deadline elapsed".into());
        }
    }

    /// Point the controller at a new resolved identifier (or none).
    ///
    /// A changed identifier while `Bound` forces the full rebind sequence:
    /// the live instance is destroyed here, before any construction for the
    /// new identifier is scheduled. Returns the epoch to schedule a bind
    /// delay for, when construction should proceed.
    pub fn set_target(&mut self, video: Option<VideoId>) -> Option<u64> {
        if self.target == video {
            return None;
        }
        self.teardown();
        self.last_error = None;
        self.target = video;
        self.try_begin_binding()
    }

    /// The bind delay elapsed. Constructs the instance if this epoch still
    /// names the pending binding and the node survived the delay.
    pub fn bind_due(&mut self, epoch: u64) {
        let Phase::Binding { video, epoch: pending } = &self.phase else {
            debug!(epoch, "bind fired with no pending binding, dropping");
            return;
        };
        if *pending != epoch {
            debug!(
                epoch,
                pending, "bind fired for a superseded session, dropping"
            );
            return;
        }
        let video = video.clone();
        let Some(node) = self.node.clone() else {
            // Node unmounted during the delay; abort silently.
            debug!(epoch, "bind target node gone, aborting");
            self.phase = Phase::Unbound;
            return;
        };

        match self.backend.create(&node, &video, epoch) {
            Ok(handle) => {
                info!(%video, epoch, "player bound");
                self.phase = Phase::Bound(PlayerSession {
                    video,
                    epoch,
                    handle,
                    duration_seconds: None,
                });
            }
            Err(err) => {
                warn!(%video, %err, "player construction failed");
                self.phase = Phase::Unbound;
                self.record_error(err);
            }
        }
    }

    /// An event arrived from a player instance. Returns the playback state
    /// change when the event belongs to the live session; stale epochs are
    /// dropped here.
    pub fn handle_event(
        &mut self,
        epoch: u64,
        event: PlayerEvent,
    ) -> Option<PlaybackState> {
        let Phase::Bound(session) = &mut self.phase else {
            debug!(epoch, ?event, "player event with no live session, dropping");
            return None;
        };
        if session.epoch != epoch {
            debug!(
                epoch,
                live = session.epoch,
                ?event,
                "player event from a destroyed session, dropping"
            );
            return None;
        }

        match event {
            PlayerEvent::Ready { duration_seconds } => {
                session.duration_seconds = Some(duration_seconds);
                None
            }
            PlayerEvent::StateChange(state) => Some(state),
            PlayerEvent::Error { message } => {
                let err = NavigatorError::PlayerRuntime(message);
                warn!(%err, "player runtime error");
                self.record_error(err);
                None
            }
        }
    }

    /// Destroy any live or pending binding and invalidate outstanding
    /// asynchronous callbacks. Invoked before every rebind, on unmount,
    /// and on navigation away.
    pub fn teardown(&mut self) {
        let previous = std::mem::replace(&mut self.phase, Phase::Unbound);
        if let Phase::Bound(mut session) = previous {
            info!(video = %session.video, epoch = session.epoch, "destroying player");
            session.handle.destroy();
        }
        // The handle (if any) dropped with `previous`; bump the epoch so
        // late callbacks from it are detectable.
        self.epoch += 1;
    }

    /// Duration reported by the live session, if it signaled ready.
    pub fn duration_seconds(&self) -> Option<f64> {
        match &self.phase {
            Phase::Bound(session) => session.duration_seconds,
            _ => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.phase, Phase::Bound(_))
    }

    /// The most recent runtime or construction error, if a live one exists.
    /// Cleared when the player is retargeted.
    pub fn last_error(&self) -> Option<&NavigatorError> {
        self.last_error.as_ref()
    }

    /// Collapse internal state into what the view should show.
    pub fn ui_state(&self) -> PlayerUiState {
        if let SdkState::Failed(err) = &self.sdk {
            return PlayerUiState::Unavailable(err.to_string());
        }
        if let Some(err) = &self.last_error {
            return PlayerUiState::Error(err.to_string());
        }
        if self.target.is_none() {
            return PlayerUiState::NoVideo;
        }
        match (&self.sdk, &self.phase) {
            (SdkState::Loading, _) => PlayerUiState::LoadingSdk,
            (_, Phase::Bound(_)) => PlayerUiState::Bound,
            _ => PlayerUiState::Binding,
        }
    }

    fn record_error(&mut self, err: NavigatorError) {
        self.last_error = Some(err);
    }

    /// Enter `Binding` when every precondition holds: SDK ready, resolved
    /// identifier, mounted node, and nothing already pending or live for
    /// the same identifier.
    fn try_begin_binding(&mut self) -> Option<u64> {
        if self.sdk != SdkState::Ready || self.node.is_none() {
            return None;
        }
        let video = self.target.as_ref()?;
        match &self.phase {
            Phase::Binding { video: pending, .. } if pending == video => {
                // Duplicate trigger for the same identifier; one bind is
                // already scheduled.
                return None;
            }
            Phase::Bound(session) if &session.video == video => return None,
            _ => {}
        }
        self.epoch += 1;
        let epoch = self.epoch;
        debug!(%video, epoch, "binding scheduled");
        self.phase = Phase::Binding {
            video: video.clone(),
            epoch,
        };
        Some(epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum BackendCall {
        Create(String, u64),
        Destroy(String),
    }

    #[derive(Debug, Default)]
    struct RecordingBackend {
        calls: Arc<Mutex<Vec<BackendCall>>>,
        fail_next: bool,
    }

    #[derive(Debug)]
    struct RecordingHandle {
        video: VideoId,
        calls: Arc<Mutex<Vec<BackendCall>>>,
        destroyed: bool,
    }

    impl PlayerBackend for RecordingBackend {
        fn create(
            &mut self,
            _node: &MountNode,
            video: &VideoId,
            epoch: u64,
        ) -> Result<Box<dyn PlayerHandle>, NavigatorError> {
            if self.fail_next {
                return Err(NavigatorError::PlayerRuntime(
                    "construction refused".into(),
                ));
            }
            self.calls.lock().unwrap().push(BackendCall::Create(
                video.as_str().to_string(),
                epoch,
            ));
            Ok(Box::new(RecordingHandle {
                video: video.clone(),
                calls: Arc::clone(&self.calls),
                destroyed: false,
            }))
        }
    }

    impl PlayerHandle for RecordingHandle {
        fn video(&self) -> &VideoId {
            &self.video
        }

        fn destroy(&mut self) {
            if !self.destroyed {
                self.destroyed = true;
                self.calls
                    .lock()
                    .unwrap()
                    .push(BackendCall::Destroy(self.video.as_str().to_string()));
            }
        }
    }

    fn video(token: &str) -> VideoId {
        VideoId::new(token).unwrap()
    }

    fn controller() -> (PlayerLifecycleController, Arc<Mutex<Vec<BackendCall>>>)
    {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Arc::clone(&calls),
            fail_next: false,
        };
        (PlayerLifecycleController::new(Box::new(backend)), calls)
    }

    #[test]
    fn no_binding_until_sdk_node_and_target_align() {
        let (mut ctl, _) = controller();
        assert_eq!(ctl.set_target(Some(video("dQw4w9WgXcQ"))), None);
        assert_eq!(ctl.node_mounted(MountNode::new("player-root")), None);
        assert_eq!(ctl.ui_state(), PlayerUiState::LoadingSdk);

        let epoch = ctl.sdk_ready().expect("binding should start");
        assert_eq!(ctl.ui_state(), PlayerUiState::Binding);
        ctl.bind_due(epoch);
        assert_eq!(ctl.ui_state(), PlayerUiState::Bound);
    }

    #[test]
    fn rebind_destroys_before_creating() {
        let (mut ctl, calls) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let first = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(first);

        let second = ctl.set_target(Some(video("bbbbbbbbbbb"))).unwrap();
        ctl.bind_due(second);

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                BackendCall::Create("aaaaaaaaaaa".into(), first),
                BackendCall::Destroy("aaaaaaaaaaa".into()),
                BackendCall::Create("bbbbbbbbbbb".into(), second),
            ]
        );
    }

    #[test]
    fn same_target_is_a_no_op() {
        let (mut ctl, calls) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let epoch = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(epoch);
        assert_eq!(ctl.set_target(Some(video("aaaaaaaaaaa"))), None);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn stale_bind_epoch_is_dropped() {
        let (mut ctl, calls) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let first = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        // Target moves on before the first delay fires.
        let second = ctl.set_target(Some(video("bbbbbbbbbbb"))).unwrap();

        ctl.bind_due(first);
        assert!(!ctl.is_bound());
        ctl.bind_due(second);
        assert!(ctl.is_bound());
        assert_eq!(
            *calls.lock().unwrap(),
            vec![BackendCall::Create("bbbbbbbbbbb".into(), second)]
        );
    }

    #[test]
    fn bind_aborts_silently_when_node_unmounts_during_delay() {
        let (mut ctl, calls) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let epoch = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.node_unmounted();
        ctl.bind_due(epoch);
        assert!(!ctl.is_bound());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn events_from_destroyed_sessions_are_dropped() {
        let (mut ctl, _) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let first = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(first);
        let second = ctl.set_target(Some(video("bbbbbbbbbbb"))).unwrap();
        ctl.bind_due(second);

        // Late "ended" from the destroyed first session.
        let stale = ctl
            .handle_event(first, PlayerEvent::StateChange(PlaybackState::Ended));
        assert_eq!(stale, None);

        let live = ctl
            .handle_event(second, PlayerEvent::StateChange(PlaybackState::Ended));
        assert_eq!(live, Some(PlaybackState::Ended));
    }

    #[test]
    fn ready_event_captures_duration() {
        let (mut ctl, _) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let epoch = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(epoch);
        assert_eq!(ctl.duration_seconds(), None);
        ctl.handle_event(epoch, PlayerEvent::Ready { duration_seconds: 245.0 });
        assert_eq!(ctl.duration_seconds(), Some(245.0));
    }

    #[test]
    fn sdk_failure_is_permanent_and_unavailable() {
        let (mut ctl, _) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_failed("script blocked".into());
        ctl.set_target(Some(video("aaaaaaaaaaa")));
        assert!(matches!(ctl.ui_state(), PlayerUiState::Unavailable(_)));
        // A ready signal after a recorded failure is not believed.
        assert_eq!(ctl.sdk_ready(), None);
    }

    #[test]
    fn player_error_is_inline_and_nonfatal() {
        let (mut ctl, _) = controller();
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let epoch = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(epoch);
        ctl.handle_event(
            epoch,
            PlayerEvent::Error { message: "embed forbidden".into() },
        );
        assert!(matches!(ctl.ui_state(), PlayerUiState::Error(_)));
        assert_eq!(
            ctl.last_error(),
            Some(&NavigatorError::PlayerRuntime("embed forbidden".into()))
        );
        // Navigating to a different lesson clears the inline error.
        let next = ctl.set_target(Some(video("bbbbbbbbbbb"))).unwrap();
        ctl.bind_due(next);
        assert_eq!(ctl.ui_state(), PlayerUiState::Bound);
        assert_eq!(ctl.last_error(), None);
    }

    #[test]
    fn failure_states_carry_the_error_taxonomy() {
        // SDK load failure surfaces as `SdkLoad`.
        let (mut ctl, _) = controller();
        ctl.sdk_failed("script blocked".into());
        assert_eq!(
            ctl.ui_state(),
            PlayerUiState::Unavailable(
                NavigatorError::SdkLoad("script blocked".into()).to_string()
            )
        );

        // Construction failure surfaces through `last_error`.
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Arc::clone(&calls),
            fail_next: true,
        };
        let mut ctl = PlayerLifecycleController::new(Box::new(backend));
        ctl.node_mounted(MountNode::new("player-root"));
        ctl.sdk_ready();
        let epoch = ctl.set_target(Some(video("aaaaaaaaaaa"))).unwrap();
        ctl.bind_due(epoch);
        assert!(matches!(
            ctl.last_error(),
            Some(NavigatorError::PlayerRuntime(_))
        ));
        assert!(matches!(ctl.ui_state(), PlayerUiState::Error(_)));
    }
}
