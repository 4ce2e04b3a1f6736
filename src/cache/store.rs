//! Image Cache Module
//!
//! Status-code to image mapping behind a single lock. Every insertion arms its
//! own removal timer; there is no sweep and no read-side expiry check.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{RelayError, Result};
use crate::tasks::spawn_expiry_task;

/// Map plus bookkeeping, guarded together by one lock.
#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<u16, CacheEntry>,
    stats: CacheStats,
    /// Last generation handed out by `put`
    generation: u64,
}

impl Inner {
    /// Removes `code` if present; removing an absent code is a no-op.
    fn remove(&mut self, code: u16) -> bool {
        let removed = self.entries.remove(&code).is_some();
        if removed {
            self.stats.record_expiration();
        }
        removed
    }
}

// == Image Cache ==
/// Shared, time-expiring cache of status-code images.
///
/// Cloning is cheap and every clone refers to the same map.
#[derive(Debug, Clone)]
pub struct ImageCache {
    inner: Arc<RwLock<Inner>>,
    ttl: Duration,
}

impl ImageCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            ttl,
        }
    }

    /// Lifetime applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Contains ==
    /// Returns true if an image for `code` is currently present.
    pub async fn contains(&self, code: u16) -> bool {
        self.inner.read().await.entries.contains_key(&code)
    }

    // == Get ==
    /// Returns the stored image for `code`.
    ///
    /// Absence is an error: a `contains` followed by `get` can still fail if
    /// the expiry timer runs in between. Prefer [`ImageCache::lookup`].
    pub async fn get(&self, code: u16) -> Result<Bytes> {
        self.inner
            .read()
            .await
            .entries
            .get(&code)
            .map(|entry| entry.image.clone())
            .ok_or(RelayError::KeyNotFound(code))
    }

    // == Lookup ==
    /// Returns the image for `code` if present, recording a hit or a miss.
    pub async fn lookup(&self, code: u16) -> Option<Bytes> {
        let mut inner = self.inner.write().await;

        match inner.entries.get(&code) {
            Some(entry) => {
                let image = entry.image.clone();
                debug!(
                    code,
                    ttl_remaining_ms = entry.ttl_remaining().as_millis() as u64,
                    "image cache hit"
                );
                inner.stats.record_hit();
                Some(image)
            }
            None => {
                debug!(code, "image cache miss");
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores `image` under `code` and arms a removal timer for it.
    ///
    /// Overwriting re-arms: the new entry gets a full TTL and a timer left by
    /// an earlier `put` will not remove it. Returns without waiting on the timer.
    pub async fn put(&self, code: u16, image: Bytes) {
        let generation = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            let generation = inner.generation;

            inner
                .entries
                .insert(code, CacheEntry::new(image, self.ttl, generation));
            inner.stats.record_insert();
            generation
        };

        spawn_expiry_task(self.clone(), code, generation, self.ttl);
    }

    // == Expire ==
    /// Timer action: removes `code` only if it still holds the entry from `generation`.
    ///
    /// Returns true if an entry was removed.
    pub(crate) async fn expire(&self, code: u16, generation: u64) -> bool {
        let mut inner = self.inner.write().await;

        let current = inner
            .entries
            .get(&code)
            .is_some_and(|entry| entry.generation == generation);
        current && inner.remove(code)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }

    #[cfg(test)]
    async fn generation_of(&self, code: u16) -> Option<u64> {
        self.inner
            .read()
            .await
            .entries
            .get(&code)
            .map(|entry| entry.generation)
    }
}
