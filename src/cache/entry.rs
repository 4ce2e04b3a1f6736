//! Cache Entry Module
//!
//! Defines a single cached image together with its expiry deadline.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A cached status-code image.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw image payload, never mutated after insertion
    pub image: Bytes,
    /// When the entry was inserted
    pub inserted_at: Instant,
    /// When the scheduled removal is due
    pub expires_at: Instant,
    /// Stamp of the `put` that created this entry
    pub generation: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `image` - The image bytes to store
    /// * `ttl` - Lifetime of the entry
    /// * `generation` - Stamp identifying the insertion
    pub fn new(image: Bytes, ttl: Duration, generation: u64) -> Self {
        let now = Instant::now();

        Self {
            image,
            inserted_at: now,
            expires_at: now + ttl,
            generation,
        }
    }

    // == Time To Live ==
    /// Returns the time left until the scheduled removal, zero once past due.
    ///
    /// A past-due entry may still be present until its timer has run.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
