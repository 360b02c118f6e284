//! In-memory response cache with a fixed freshness window per instance.
//!
//! Entries are never evicted proactively: a stale entry is ignored on read and
//! overwritten by the next insert under the same key.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::Serialize;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

pub struct ExpiringCache<V, C: Clock> {
    name: &'static str,
    ttl: Duration,
    clock: Arc<C>,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone, C: Clock> ExpiringCache<V, C> {
    pub fn new(name: &'static str, ttl: Duration, clock: Arc<C>) -> Self {
        Self {
            name,
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh value for `key`, if one was stored less than `ttl` ago.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;

        if self.clock.now() - entry.stored_at < self.ttl {
            debug!("{} cache hit for {}", self.name, key);
            Some(entry.value.clone())
        } else {
            debug!("{} cache entry for {} is stale", self.name, key);
            None
        }
    }

    pub fn insert(&self, key: String, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Cache key for a request: its parameters serialized as JSON.
pub fn cache_key<P: Serialize>(params: &P) -> String {
    serde_json::to_string(params).unwrap_or_default()
}
