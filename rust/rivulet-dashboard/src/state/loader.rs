//! Background collection loading.
//!
//! The dashboard renders on a single thread; fetches run on the runtime
//! and report back over a channel that [`CollectionLoader::sync`] drains
//! at the top of each render pass. A collection is only ever replaced
//! wholesale, so the UI never observes a partial update.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use futures_util::future::BoxFuture;

use crate::{Notifier, Promise};

type FetchFn<T> = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<Vec<T>>> + Send + Sync>;

/// Loads a collection in the background, keeping the last good result.
///
/// Each call to [`CollectionLoader::load`] spawns exactly one fetch; there
/// is no deduplication of overlapping calls and no automatic retry. A
/// failed fetch leaves the previous collection untouched, raises one error
/// toast through the injected [`Notifier`] and logs the failure. Results
/// are applied in completion order, but a generation counter discards any
/// result older than the newest one already applied, so a stale slow
/// response can never overwrite fresher data.
pub struct CollectionLoader<T> {
    fetch: FetchFn<T>,
    tx: Sender<(u64, anyhow::Result<Vec<T>>)>,
    rx: Receiver<(u64, anyhow::Result<Vec<T>>)>,
    issued: u64,
    settled: u64,
    applied: u64,
    collection: Promise<Vec<T>>,
}

impl<T> CollectionLoader<T>
where
    T: Send + 'static,
{
    /// Creates a loader around a zero-argument asynchronous fetch function.
    ///
    /// The fetch must resolve with the full replacement collection, or
    /// reject with an error whose `Display` form is fit for users.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Vec<T>>> + Send + 'static,
    {
        let (tx, rx) = channel();

        Self {
            fetch: Arc::new(move || -> BoxFuture<'static, anyhow::Result<Vec<T>>> {
                Box::pin(fetch())
            }),
            tx,
            rx,
            issued: 0,
            settled: 0,
            applied: 0,
            collection: Promise::Pending,
        }
    }

    /// Starts one background fetch. The in-flight fetch is not cancelled
    /// by further calls or by teardown; its late result is discarded by
    /// the generation guard (or by the closed channel).
    pub fn load(&mut self) {
        self.issued += 1;
        let generation = self.issued;
        let fetch = self.fetch.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = fetch().await;
            // A send failure means the loader is gone; nothing to do.
            let _ = tx.send((generation, result));
        });
    }

    /// Applies settled fetches. Called once per render pass, from the UI
    /// thread.
    pub fn sync(&mut self, notifier: &Notifier) {
        while let Ok((generation, result)) = self.rx.try_recv() {
            self.settled += 1;

            match result {
                Ok(collection) if generation > self.applied => {
                    self.applied = generation;
                    self.collection = Promise::Resolved(collection);
                }
                Ok(_) => {
                    tracing::debug!(generation, "discarding stale catalog fetch result");
                }
                Err(error) => {
                    tracing::error!(%error, "catalog fetch failed");
                    notifier.error("Error Occurred", error.to_string());
                }
            }
        }
    }

    /// The loaded collection. Empty until the first fetch resolves.
    pub fn entities(&self) -> &[T] {
        self.collection
            .resolved()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether at least one fetch has resolved.
    pub fn has_loaded(&self) -> bool {
        !self.collection.is_pending()
    }

    /// Whether a fetch is currently in flight.
    pub fn loading(&self) -> bool {
        self.settled < self.issued
    }
}
