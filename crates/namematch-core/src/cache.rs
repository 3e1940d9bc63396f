//! Result cache
//!
//! Bounded, insertion-ordered cache with a per-entry lifetime. Expired
//! entries read as absent but stay in the map until capacity pressure
//! evicts them. Reads never reorder entries; only [`ResultCache::update`]
//! moves a key to the back, so eviction is FIFO unless callers refresh
//! keys explicitly.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::matcher::{Attributes, MatchResult};

const KEY_DELIMITER: &str = "||";

/// Order-independent fingerprint of a comparison.
///
/// Both names are lowercased and sorted; attribute flags follow as
/// `name:bool` pairs in name order.
pub fn cache_key(name1: &str, name2: &str, attributes: Option<&Attributes>) -> String {
    let mut names = [name1.to_lowercase(), name2.to_lowercase()];
    names.sort();

    let mut key = String::with_capacity(names[0].len() + names[1].len() + 8);
    key.push_str(&names[0]);
    key.push_str(KEY_DELIMITER);
    key.push_str(&names[1]);
    key.push_str(KEY_DELIMITER);
    // BTreeMap iterates in sorted key order
    if let Some(attributes) = attributes {
        for (name, value) in attributes {
            key.push_str(name);
            key.push(':');
            key.push_str(if *value { "true" } else { "false" });
            key.push_str(KEY_DELIMITER);
        }
    }
    key
}

struct CacheEntry {
    result: MatchResult,
    created: Instant,
}

struct CacheState {
    entries: AHashMap<String, CacheEntry>,
    order: VecDeque<String>,
}

/// Thread-safe result cache shared by all comparisons of a matcher.
pub struct ResultCache {
    state: RwLock<CacheState>,
    capacity: usize,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState {
                entries: AHashMap::with_capacity(capacity.min(4096)),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Cached result for `key`, unless missing or older than the TTL.
    pub fn get(&self, key: &str) -> Option<MatchResult> {
        let state = self.state.read();
        let entry = state.entries.get(key)?;
        if entry.created.elapsed() > self.ttl {
            return None;
        }
        Some(entry.result.clone())
    }

    /// Insert or replace `key`. At capacity, the oldest key goes first.
    pub fn put(&self, key: String, result: MatchResult) {
        let mut state = self.state.write();
        let entry = CacheEntry {
            result,
            created: Instant::now(),
        };

        if state.entries.contains_key(&key) {
            state.order.retain(|k| k != &key);
            state.order.push_back(key.clone());
            state.entries.insert(key, entry);
            return;
        }

        if state.entries.len() >= self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
                tracing::trace!(key = %oldest, "evicted cache entry");
            }
        }
        state.order.push_back(key.clone());
        state.entries.insert(key, entry);
    }

    /// Move `key` to the most recently used position.
    pub fn update(&self, key: &str) {
        let mut state = self.state.write();
        if !state.entries.contains_key(key) {
            return;
        }
        if let Some(pos) = state.order.iter().position(|k| k == key) {
            if let Some(k) = state.order.remove(pos) {
                state.order.push_back(k);
            }
        }
    }

    /// Stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.read().entries.contains_key(key)
    }

    pub fn clear(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.order.clear();
    }
}
