//! Mood-keyed recommendation cache with lazy expiry

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::profile::Mood;

use super::ports::Clock;

/// Default time-to-live for cached recommendations (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 24);

#[derive(Debug, Clone)]
struct CacheEntry {
    text: String,
    created_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

type Slot = Arc<AsyncMutex<Option<CacheEntry>>>;

/// Cache of generated recommendations keyed by mood.
///
/// Entries are checked against the TTL when read; nothing is evicted in the
/// background. Each mood has its own async lock, so the cache can be shared
/// between sessions: holding a [`CacheSlot`] serialises all work for that
/// mood while other moods proceed independently.
pub struct RecommendationCache<C: Clock> {
    clock: C,
    ttl: Duration,
    slots: Mutex<HashMap<Mood, Slot>>,
}

impl<C: Clock> RecommendationCache<C> {
    pub fn new(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Create a cache with the default 24 hour TTL
    pub fn with_default_ttl(clock: C) -> Self {
        Self::new(clock, DEFAULT_TTL)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached text for `mood` if present and not expired
    pub async fn get(&self, mood: Mood) -> Option<String> {
        let slot = self.lock(mood).await;
        slot.fresh().map(str::to_string)
    }

    /// Store `text` for `mood`, stamped with the current time
    pub async fn insert(&self, mood: Mood, text: impl Into<String>) {
        self.lock(mood).await.store(text);
    }

    /// Take exclusive access to the entry for `mood`
    pub async fn lock(&self, mood: Mood) -> CacheSlot<'_, C> {
        let slot = self.slot(mood);
        CacheSlot {
            guard: slot.lock_owned().await,
            cache: self,
        }
    }

    fn slot(&self, mood: Mood) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(mood).or_default())
    }
}

/// Exclusive handle on one mood's cache entry
pub struct CacheSlot<'a, C: Clock> {
    guard: OwnedMutexGuard<Option<CacheEntry>>,
    cache: &'a RecommendationCache<C>,
}

impl<C: Clock> CacheSlot<'_, C> {
    /// The cached text, unless absent or older than the TTL
    pub fn fresh(&self) -> Option<&str> {
        let now = self.cache.clock.now();
        self.guard
            .as_ref()
            .filter(|entry| entry.is_fresh(now, self.cache.ttl))
            .map(|entry| entry.text.as_str())
    }

    pub fn store(&mut self, text: impl Into<String>) {
        *self.guard = Some(CacheEntry {
            text: text.into(),
            created_at: self.cache.clock.now(),
        });
    }
}
