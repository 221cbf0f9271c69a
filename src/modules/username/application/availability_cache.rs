use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::shared::clock::Clock;

pub const DEFAULT_TTL_MS: i64 = 15_000;

/// Past this many entries a write also sweeps out everything expired,
/// at most once per TTL.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    available: bool,
    expires_at: DateTime<Utc>,
}

/// Short-lived memo of "is this username free?" answers.
///
/// Shared by every request; an entry written at `T` is served while
/// `now < T + ttl` and dropped on the first read at or after that.
/// Values can be stale for up to one TTL, so the unique index on
/// `users.username` stays the authority.
pub struct AvailabilityCache {
    entries: DashMap<String, CacheEntry>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    last_sweep_ms: AtomicI64,
}

impl AvailabilityCache {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        let last_sweep_ms = AtomicI64::new(clock.now().timestamp_millis());
        Self {
            entries: DashMap::new(),
            clock,
            ttl,
            last_sweep_ms,
        }
    }

    pub fn with_default_ttl(clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, Duration::milliseconds(DEFAULT_TTL_MS))
    }

    pub fn get(&self, username: &str) -> Option<bool> {
        let now = self.clock.now();
        // Copy out so the shard guard is released before any removal
        let entry = self.entries.get(username).map(|e| *e)?;

        if now < entry.expires_at {
            debug!(username, "Availability cache hit");
            return Some(entry.available);
        }

        self.entries
            .remove_if(username, |_, e| e.expires_at <= now);
        debug!(username, "Availability cache entry expired");
        None
    }

    pub fn put(&self, username: &str, available: bool) {
        let now = self.clock.now();
        self.sweep_if_due(now);

        self.entries.insert(
            username.to_string(),
            CacheEntry {
                available,
                expires_at: now + self.ttl,
            },
        );
    }

    fn sweep_if_due(&self, now: DateTime<Utc>) {
        if self.entries.len() < SWEEP_THRESHOLD {
            return;
        }

        let now_ms = now.timestamp_millis();
        let last = self.last_sweep_ms.load(Ordering::Acquire);
        if now_ms - last < self.ttl.num_milliseconds() {
            return;
        }
        // Concurrent writers race for the slot; only the winner sweeps
        if self
            .last_sweep_ms
            .compare_exchange(last, now_ms, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let before = self.entries.len();
        self.entries.retain(|_, e| e.expires_at > now);
        debug!(
            removed = before.saturating_sub(self.entries.len()),
            "Swept expired availability entries"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
