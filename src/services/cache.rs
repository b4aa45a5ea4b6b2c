//! Single-slot TTL cache
//!
//! Time-boxed memoization cell in front of the upstream fetch pipelines.
//! Holds at most one value; writing always replaces. There is no
//! single-flight deduplication: concurrent misses may both fetch and both
//! write, and the last writer wins. Snapshot writes are idempotent so this
//! is acceptable.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::clock::Clock;

/// A cached value together with the time it was stored
#[derive(Debug, Clone)]
pub struct Cached<T> {
    pub value: T,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// Single-slot cache with a fixed time-to-live
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    /// Cache with a TTL given in whole seconds. Values beyond what
    /// `chrono::Duration` can represent clamp to the maximum instead of
    /// wrapping.
    pub fn from_secs(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self::new(ttl, clock)
    }

    /// Return the stored value only while it is fresher than the TTL
    pub async fn get(&self) -> Option<Cached<T>> {
        let slot = self.slot.read().await;
        let entry = slot.as_ref()?;

        if self.clock.now() - entry.stored_at < self.ttl {
            Some(Cached {
                value: entry.value.clone(),
                stored_at: entry.stored_at,
            })
        } else {
            None
        }
    }

    /// Return the stored value regardless of age.
    ///
    /// Used by the stale-on-error policy of the repository-list cache.
    pub async fn get_any(&self) -> Option<Cached<T>> {
        let slot = self.slot.read().await;
        slot.as_ref().map(|entry| Cached {
            value: entry.value.clone(),
            stored_at: entry.stored_at,
        })
    }

    /// Store a value, replacing any existing entry, and return the
    /// timestamp it was stamped with.
    pub async fn put(&self, value: T) -> DateTime<Utc> {
        let stored_at = self.clock.now();
        let mut slot = self.slot.write().await;
        *slot = Some(Entry { value, stored_at });
        stored_at
    }

    /// Clear the entry regardless of age, forcing the next `get` to miss.
    /// Clearing an empty cache is a no-op.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        if slot.take().is_some() {
            debug!("cache invalidated");
        }
    }
}
