//! Cache Module
//!
//! In-memory status-code image cache with per-entry timed expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ImageCache;
