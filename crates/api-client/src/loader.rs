//! Background loading with an observable state
//!
//! A [`Loader`] is what a screen holds: it starts out [`LoadState::Loading`],
//! runs the repository fetch on a tokio task when asked, and publishes the
//! outcome on a `watch` channel. Dropping the loader cancels a load that is
//! still in flight.

use crate::error::ApiError;
use crate::repository::Repository;
use samplekit_core::load_state::LoadState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// State published by a loader over repository `R`
pub type ListState<R> = LoadState<Vec<<R as Repository>::Entity>>;

/// Runs fetches for one repository and publishes their outcome
pub struct Loader<R: Repository + 'static> {
    repository: Arc<R>,
    state: Arc<watch::Sender<ListState<R>>>,
    generation: Arc<AtomicU64>,
    cancelled: Notify,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<R: Repository + 'static> Loader<R> {
    /// Create a loader in the `Loading` state; nothing is fetched yet
    pub fn new(repository: R) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            repository: Arc::new(repository),
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            cancelled: Notify::new(),
            task: Mutex::new(None),
        }
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<ListState<R>> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ListState<R> {
        self.state.borrow().clone()
    }

    /// Start a new load in the background
    ///
    /// Replaces any load still in flight, then publishes `Loading`. A
    /// replaced load never publishes its result. Must be called from within
    /// a tokio runtime.
    pub fn refresh(&self) {
        let mut task = self.lock_task();
        if let Some(previous) = task.take() {
            previous.abort();
        }

        // Bumped before `Loading` goes out: a stale task compares under the
        // channel lock and either lands before `Loading` or not at all.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);

        *task = Some(tokio::spawn(async move {
            // A panic in the fetch surfaces here as a JoinError.
            let mut fetch = AbortOnDrop(tokio::spawn(async move { repository.fetch().await }));

            let next = match (&mut fetch.0).await {
                Ok(result) => LoadState::from_result(result),
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    warn!(source = R::SOURCE, error = %e, "Fetch task panicked");
                    LoadState::from_result(Err(ApiError::Task(e.to_string())))
                }
            };

            let loaded = next.len();
            let failed = next.is_error();
            let published = state.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = next;
                true
            });

            if published {
                debug!(source = R::SOURCE, loaded, failed, "Load settled");
            } else {
                debug!(source = R::SOURCE, "Superseded load discarded");
            }
        }));
    }

    /// Wait until the state leaves `Loading` or no load is in flight
    ///
    /// Returns immediately on a loader that was never refreshed, and returns
    /// the current state, still `Loading`, when the load is cancelled.
    pub async fn wait_until_settled(&self) -> ListState<R> {
        let mut receiver = self.subscribe();
        loop {
            let cancelled = self.cancelled.notified();
            tokio::pin!(cancelled);
            cancelled.as_mut().enable();

            let in_flight = self.in_flight();
            let settled = {
                let state = receiver.borrow_and_update();
                (!state.is_loading() || !in_flight).then(|| state.clone())
            };
            if let Some(state) = settled {
                return state;
            }

            tokio::select! {
                changed = receiver.changed() => {
                    if changed.is_err() {
                        return self.state();
                    }
                }
                () = cancelled.as_mut() => {}
            }
        }
    }

    /// Refresh and wait for the outcome
    pub async fn load(&self) -> ListState<R> {
        self.refresh();
        self.wait_until_settled().await
    }

    /// Cancel the load in flight, if any, leaving the state untouched
    ///
    /// Anyone waiting in [`Loader::wait_until_settled`] is released.
    pub fn cancel(&self) {
        if let Some(task) = self.lock_task().take() {
            self.generation.fetch_add(1, Ordering::SeqCst);
            task.abort();
        }
        self.cancelled.notify_waiters();
    }

    fn in_flight(&self) -> bool {
        self.lock_task()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Repository + 'static> Drop for Loader<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Aborts the wrapped task when dropped
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
