//! Single-writer broadcast slot for [`UiState`].

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::ui_state::UiState;

/// Observable slot holding the current [`UiState`] of one screen.
///
/// Wraps a watch channel: the cell is the single logical writer and
/// subscribers only observe. Starts out `Loading`. The cell is not
/// `Clone`: readers go through [`StateCell::subscribe`], which keeps
/// ownership of the write side with the operation's initiator.
pub struct StateCell<T, E> {
    tx: Arc<watch::Sender<UiState<T, E>>>,
}

impl<T, E> StateCell<T, E> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::Loading);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> UiState<T, E>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Replace the current state.
    pub fn set(&self, state: UiState<T, E>) {
        // send_replace publishes even while no receiver is live
        self.tx.send_replace(state);
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes the current value immediately and every
    /// replacement afterwards.
    pub fn subscribe(&self) -> watch::Receiver<UiState<T, E>> {
        self.tx.subscribe()
    }
}

impl<T, E> StateCell<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Run `op` on the runtime and publish its outcome.
    ///
    /// Publishes `Loading` synchronously before spawning, then exactly
    /// one of `Success`/`Error` when `op` resolves. Nothing escapes to
    /// the caller; the publication sequence is the only visible effect.
    ///
    /// The returned handle lets a lifecycle owner abort the pending
    /// operation; an aborted operation publishes no terminal state, so
    /// the slot stays at `Loading` until the next `drive`.
    ///
    /// Concurrent `drive` calls against one cell are not serialized:
    /// the last write wins. Callers that can have more than one
    /// operation in flight for a single slot must serialize themselves.
    pub fn drive<Fut>(&self, op: Fut) -> JoinHandle<()>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.set(UiState::Loading);
        let tx = Arc::clone(&self.tx);
        tokio::spawn(async move {
            let state = UiState::from(op.await);
            if state.is_error() {
                tracing::debug!("operation failed, publishing error state");
            }
            tx.send_replace(state);
        })
    }
}

impl<T, E> Default for StateCell<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
