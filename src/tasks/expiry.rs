//! Entry Expiry Task
//!
//! One detached timer per cache insertion. When the delay elapses the task
//! asks the cache to drop the entry it was armed for.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::ImageCache;

/// Spawns a task that removes `code` from `cache` after `delay`.
///
/// The removal only applies to the entry stamped with `generation`; if the
/// code was overwritten in the meantime the task finishes without effect.
/// The handle may be dropped, the task keeps running.
///
/// # Arguments
/// * `cache` - Shared handle to the image cache
/// * `code` - Status code the timer belongs to
/// * `generation` - Stamp of the insertion that armed the timer
/// * `delay` - Time until removal
pub fn spawn_expiry_task(
    cache: ImageCache,
    code: u16,
    generation: u64,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if cache.expire(code, generation).await {
            debug!(code, generation, "expired cached image");
        } else {
            debug!(code, generation, "expiry timer superseded");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_expiry_task_removes_matching_entry() {
        let cache = ImageCache::new(Duration::from_secs(900));
        cache.put(404, Bytes::from_static(b"cat")).await;

        // put() handed out generation 1
        let handle = spawn_expiry_task(cache.clone(), 404, 1, Duration::from_millis(20));
        handle.await.unwrap();

        assert!(!cache.contains(404).await);
    }

    #[tokio::test]
    async fn test_expiry_task_ignores_other_generation() {
        let cache = ImageCache::new(Duration::from_secs(900));
        cache.put(404, Bytes::from_static(b"cat")).await;

        let handle = spawn_expiry_task(cache.clone(), 404, 99, Duration::from_millis(20));
        handle.await.unwrap();

        assert!(cache.contains(404).await);
    }

    #[tokio::test]
    async fn test_expiry_task_on_absent_key() {
        let cache = ImageCache::new(Duration::from_secs(900));

        let handle = spawn_expiry_task(cache.clone(), 302, 1, Duration::from_millis(5));
        handle.await.unwrap();

        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_expiry_task_can_be_aborted() {
        let cache = ImageCache::new(Duration::from_secs(900));
        cache.put(200, Bytes::from_static(b"ok")).await;

        let handle = spawn_expiry_task(cache.clone(), 200, 1, Duration::from_millis(50));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
        assert!(cache.contains(200).await);
    }
}
