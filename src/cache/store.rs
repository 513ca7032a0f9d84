//! In-memory response cache with time-based reclamation
//!
//! Stores raw response bodies under opaque string keys. A single mutex
//! serializes all access to the backing map; a background sweeper owned by
//! the cache wakes once per TTL period and removes every entry whose age
//! has reached the TTL. Lookups never remove entries themselves, so a dead
//! entry can stay resident for just under two TTL periods before the next
//! sweep reclaims it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::debug;

/// A single cached response body and its insertion time
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached payload, never mutated after insertion
    payload: Vec<u8>,
    /// Monotonic timestamp captured when the entry was inserted
    created_at: Instant,
}

/// Shared handle to an in-memory response cache
///
/// Cloning the handle is cheap and every clone refers to the same backing
/// store. The sweeper spawned at construction keeps running until
/// [`shutdown`](ResponseCache::shutdown) is called or every handle has been
/// dropped, whichever comes first.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    /// Backing store; accessed only while the mutex is held
    store: Arc<Mutex<HashMap<String, CacheEntry>>>,
    /// Closing this channel stops the background sweeper
    shutdown_tx: mpsc::Sender<()>,
}

impl ResponseCache {
    /// Creates a cache whose entries live for `ttl` and starts its sweeper.
    ///
    /// The sweeper is spawned before this returns and wakes once per `ttl`
    /// period, so no explicit start call is needed. Must be called from
    /// within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `ttl` is zero; a zero period has no meaningful sweep
    /// schedule.
    pub fn new(ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "cache TTL must be non-zero");

        let store = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let sweep_store = Arc::clone(&store);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(ttl);
            // Skip the first tick (immediate)
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let removed = sweep(&sweep_store, ttl);
                        if removed > 0 {
                            debug!("cache sweep removed {} expired entries", removed);
                        }
                    }
                    // Returns None once every sender handle is gone
                    _ = shutdown_rx.recv() => break,
                }
            }
            debug!("cache sweeper stopped");
        });

        Self { store, shutdown_tx }
    }

    /// Inserts or overwrites the entry for `key`, stamping the current time.
    ///
    /// A later `add` for the same key fully replaces the previous entry
    /// (last write wins). Never triggers eviction; reclamation is the
    /// sweeper's job alone.
    pub fn add(&self, key: impl Into<String>, payload: Vec<u8>) {
        let entry = CacheEntry {
            payload,
            created_at: Instant::now(),
        };
        self.lock_store().insert(key.into(), entry);
    }

    /// Returns the payload stored under `key`, if any.
    ///
    /// A key that was never inserted and one that was already swept both
    /// look like a miss. Lookups never refresh an entry's timestamp and
    /// never remove an entry, even one past its TTL that the sweeper has
    /// not reached yet.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock_store().get(key).map(|entry| entry.payload.clone())
    }

    /// Stops the background sweeper.
    ///
    /// Entries already in the store stay readable afterwards but are no
    /// longer reclaimed. Dropping every handle has the same effect.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.try_send(());
    }

    /// Locks the store. A poisoned mutex is recovered rather than
    /// propagated; the cache API has no error path.
    fn lock_store(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Removes every entry whose age has reached `ttl`, returning the count.
///
/// Takes the lock exactly once for the whole pass.
fn sweep(store: &Mutex<HashMap<String, CacheEntry>>, ttl: Duration) -> usize {
    let now = Instant::now();
    let mut entries = store.lock().unwrap_or_else(PoisonError::into_inner);
    let before = entries.len();
    entries.retain(|_, entry| now.duration_since(entry.created_at) < ttl);
    before - entries.len()
}
