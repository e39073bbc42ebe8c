//! The screen loader.

use crate::error::LoadError;
use crate::screen::{LoadState, ScreenRef};
use crate::source::{ScreenSource, SessionGuard};
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

type Outcome<S> = Result<Arc<S>, LoadError>;
type OutcomeRx<S> = watch::Receiver<Option<Outcome<S>>>;
type OutcomeTx<S> = watch::Sender<Option<Outcome<S>>>;

enum Entry<S> {
    Loading(OutcomeRx<S>),
    Loaded(Arc<S>),
    Failed,
}

enum Claim<S> {
    Ready(Arc<S>),
    Follow(OutcomeRx<S>),
    Lead(OutcomeTx<S>),
}

/// Lazy, single-flight loader for screen modules.
///
/// The fetch itself runs on a detached task: a caller that goes away
/// mid-load (the consumer unmounted) does not abort the load, it merely
/// never observes the outcome — the cached entry stays valid for future
/// navigations.
pub struct ScreenLoader<S> {
    entries: Arc<DashMap<ScreenRef, Entry<S>>>,
    source: Arc<dyn ScreenSource<S>>,
    session: Arc<dyn SessionGuard>,
}

impl<S> Clone for ScreenLoader<S> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            source: Arc::clone(&self.source),
            session: Arc::clone(&self.session),
        }
    }
}

impl<S> fmt::Debug for ScreenLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenLoader")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<S: Send + Sync + 'static> ScreenLoader<S> {
    /// Create a loader over a source and a session sink.
    #[must_use]
    pub fn new(source: Arc<dyn ScreenSource<S>>, session: Arc<dyn SessionGuard>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            source,
            session,
        }
    }

    /// Current state of a screen reference.
    #[must_use]
    pub fn state(&self, screen: &ScreenRef) -> LoadState {
        match self.entries.get(screen) {
            None => LoadState::Unloaded,
            Some(entry) => match &*entry {
                Entry::Loading(_) => LoadState::Loading,
                Entry::Loaded(_) => LoadState::Loaded,
                Entry::Failed => LoadState::Failed,
            },
        }
    }

    /// Resolve a screen module, fetching it on first use.
    ///
    /// While the fetch is in flight the caller should render its fallback
    /// placeholder. Requests arriving during `Loading` join the in-flight
    /// attempt; requests after `Loaded` return the cached module
    /// immediately; requests after `Failed` claim a fresh attempt.
    ///
    /// # Errors
    /// [`LoadError::Fetch`] when the attempt this call observed failed (the
    /// session has already been invalidated by then), or
    /// [`LoadError::Abandoned`] when the load task died without an outcome.
    pub async fn load(&self, screen: &ScreenRef) -> Outcome<S> {
        match self.claim(screen) {
            Claim::Ready(module) => Ok(module),
            Claim::Follow(rx) => Self::await_outcome(rx, screen).await,
            Claim::Lead(tx) => {
                let rx = tx.subscribe();
                self.spawn_fetch(screen.clone(), tx);
                Self::await_outcome(rx, screen).await
            }
        }
    }

    /// Decide, atomically under the entry lock, whether this call rides an
    /// existing attempt or leads a new one. Never held across an await.
    fn claim(&self, screen: &ScreenRef) -> Claim<S> {
        match self.entries.entry(screen.clone()) {
            MapEntry::Occupied(mut occupied) => match occupied.get() {
                Entry::Loaded(module) => Claim::Ready(Arc::clone(module)),
                Entry::Loading(rx) => Claim::Follow(rx.clone()),
                Entry::Failed => {
                    let (tx, rx) = watch::channel(None);
                    occupied.insert(Entry::Loading(rx));
                    Claim::Lead(tx)
                }
            },
            MapEntry::Vacant(vacant) => {
                let (tx, rx) = watch::channel(None);
                vacant.insert(Entry::Loading(rx));
                Claim::Lead(tx)
            }
        }
    }

    fn spawn_fetch(&self, screen: ScreenRef, tx: OutcomeTx<S>) {
        let entries = Arc::clone(&self.entries);
        let source = Arc::clone(&self.source);
        let session = Arc::clone(&self.session);

        tokio::spawn(async move {
            tracing::debug!(screen = %screen, "screen load started");
            let outcome = match source.fetch(&screen).await {
                Ok(module) => {
                    let module = Arc::new(module);
                    entries.insert(screen.clone(), Entry::Loaded(Arc::clone(&module)));
                    tracing::debug!(screen = %screen, "screen load finished");
                    Ok(module)
                }
                Err(fetch_err) => {
                    let err = LoadError::fetch(&screen, &fetch_err);
                    entries.insert(screen.clone(), Entry::Failed);
                    tracing::warn!(
                        screen = %screen,
                        error = %fetch_err,
                        "screen load failed; invalidating session"
                    );
                    session.invalidate(&format!("screen '{screen}' failed to load"));
                    Err(err)
                }
            };
            // The map entry is already final; waiters having gone away is fine.
            let _ = tx.send(Some(outcome));
        });
    }

    async fn await_outcome(mut rx: OutcomeRx<S>, screen: &ScreenRef) -> Outcome<S> {
        loop {
            if let Some(outcome) = rx.borrow_and_update().clone() {
                return outcome;
            }
            if rx.changed().await.is_err() {
                return Err(LoadError::abandoned(screen));
            }
        }
    }
}
