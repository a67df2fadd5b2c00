#![allow(dead_code)]

//! In-process TTL cache for generated results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

/// Default time-to-live for cached generations.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Longest accepted TTL. Larger values are clamped so expiry instants cannot overflow.
pub const MAX_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Snapshot of cache counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Raw entry count, including expired entries not yet swept.
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Key → value map with a single fixed TTL.
///
/// Expired entries are never returned: `get` and `has` delete them on access,
/// and [`clear_expired`](Self::clear_expired) reclaims the ones nobody asks
/// for again. Every operation is a short sharded-lock map operation and is
/// safe to call from concurrent request handlers and the sweeper.
///
/// Time is read from `tokio::time::Instant`, so tests can drive expiry with a
/// paused runtime clock.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: ttl.min(MAX_TTL),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the live value for `key`, removing it if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let found = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => Some(entry.value.clone()),
            Some(_) => {
                // The shard guard is released at the end of the match; only
                // then is it safe to remove.
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("cache hit: {key}");
                Some(value)
            }
            None => {
                self.remove_if_expired(key, now);
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("cache entry expired: {key}");
                None
            }
        }
    }

    /// Inserts or replaces the value for `key` with a fresh expiry window.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.insert(key.into(), entry);
    }

    /// Whether a live entry exists. Expired entries are removed.
    pub fn has(&self, key: &str) -> bool {
        let now = Instant::now();
        let live = match self.entries.get(key) {
            Some(entry) => !entry.is_expired_at(now),
            None => return false,
        };
        if !live {
            self.remove_if_expired(key, now);
        }
        live
    }

    pub fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Removes every entry expired as of now. Returns how many were removed.
    pub fn clear_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            if entry.is_expired_at(now) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Raw number of stored entries.
    ///
    /// This includes entries that have expired but have not been read or swept
    /// yet. Call [`clear_expired`](Self::clear_expired) first for a live count.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.size(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    // A concurrent `set` may have replaced the entry since it was observed
    // expired; re-check under the shard lock so the fresh value survives.
    fn remove_if_expired(&self, key: &str, now: Instant) {
        self.entries.remove_if(key, |_, entry| entry.is_expired_at(now));
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
