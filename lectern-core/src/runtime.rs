//! Tokio driver for a navigator session.
//!
//! [`NavigatorHandle`] is deliberately synchronous; this wrapper owns the
//! suspension points around it: the bind settle delay, the auto-advance
//! delay, the optional SDK wait bound, and catalog calls. Each timer
//! carries the epoch or token it was scheduled with, so cancellation is a
//! liveness check at delivery time rather than a race against task abort.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::CourseCatalog;
use crate::navigator::{
    Effect, NavigatorHandle, NavigatorMessage, NavigatorSnapshot,
};

/// A spawned navigator session: a message inbox plus a watch channel of
/// derived view state.
#[derive(Debug)]
pub struct NavigatorRuntime {
    tx: mpsc::UnboundedSender<NavigatorMessage>,
    snapshot: watch::Receiver<NavigatorSnapshot>,
    task: JoinHandle<()>,
}

impl NavigatorRuntime {
    /// Drive `handle` on a tokio task, performing its effects through
    /// `catalog` and the tokio timer.
    pub fn spawn(
        handle: NavigatorHandle,
        initial_effects: Vec<Effect>,
        catalog: Arc<dyn CourseCatalog>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(handle.snapshot());
        let task = tokio::spawn(run(
            handle,
            initial_effects,
            catalog,
            tx.clone(),
            rx,
            snapshot_tx,
        ));
        Self {
            tx,
            snapshot: snapshot_rx,
            task,
        }
    }

    /// Queue a message for the session. Returns false once the session has
    /// shut down.
    pub fn send(&self, message: NavigatorMessage) -> bool {
        self.tx.send(message).is_ok()
    }

    /// A sender the host can hand to its SDK event bridge.
    pub fn sender(&self) -> mpsc::UnboundedSender<NavigatorMessage> {
        self.tx.clone()
    }

    /// Observe derived view state; updated after every applied message.
    pub fn snapshot(&self) -> watch::Receiver<NavigatorSnapshot> {
        self.snapshot.clone()
    }

    /// Dispose the session and wait for the driver task to finish.
    pub async fn shutdown(self) {
        let _ = self.tx.send(NavigatorMessage::Dispose);
        if let Err(err) = self.task.await {
            warn!(%err, "navigator driver task failed");
        }
    }
}

async fn run(
    mut handle: NavigatorHandle,
    initial_effects: Vec<Effect>,
    catalog: Arc<dyn CourseCatalog>,
    tx: mpsc::UnboundedSender<NavigatorMessage>,
    mut rx: mpsc::UnboundedReceiver<NavigatorMessage>,
    snapshot_tx: watch::Sender<NavigatorSnapshot>,
) {
    perform_all(initial_effects, &catalog, &tx);

    while let Some(message) = rx.recv().await {
        let effects = handle.apply(message);
        // watch::send only fails with no receivers, which is fine: the
        // session can outlive every observer.
        let _ = snapshot_tx.send(handle.snapshot());
        perform_all(effects, &catalog, &tx);
        if handle.is_disposed() {
            debug!("navigator session disposed, driver exiting");
            break;
        }
    }
}

fn perform_all(
    effects: Vec<Effect>,
    catalog: &Arc<dyn CourseCatalog>,
    tx: &mpsc::UnboundedSender<NavigatorMessage>,
) {
    for effect in effects {
        perform(effect, catalog, tx);
    }
}

fn perform(
    effect: Effect,
    catalog: &Arc<dyn CourseCatalog>,
    tx: &mpsc::UnboundedSender<NavigatorMessage>,
) {
    match effect {
        Effect::ScheduleBind { epoch, delay } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // Send failure means the session shut down mid-delay;
                // exactly the zombie this message's epoch check exists for.
                let _ = tx.send(NavigatorMessage::BindDelayElapsed { epoch });
            });
        }
        Effect::ScheduleAutoAdvance { token, delay } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(NavigatorMessage::AutoAdvanceElapsed { token });
            });
        }
        Effect::ScheduleSdkDeadline { delay } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(NavigatorMessage::SdkDeadlineElapsed);
            });
        }
        Effect::SubmitLike { course } => {
            let catalog = Arc::clone(catalog);
            tokio::spawn(async move {
                if let Err(err) = catalog.submit_like(&course).await {
                    // Fire-and-forget by contract; the UI never blocks on it.
                    warn!(%course, %err, "like submission failed");
                }
            });
        }
        Effect::RefetchCourse { course } => {
            let catalog = Arc::clone(catalog);
            let tx = tx.clone();
            tokio::spawn(async move {
                match catalog.fetch_course(&course).await {
                    Ok(tree) => {
                        let _ =
                            tx.send(NavigatorMessage::CourseRefetched(tree));
                    }
                    Err(err) => {
                        warn!(%course, %err, "course refetch failed");
                    }
                }
            });
        }
    }
}
