//! Bounded memoization cache shared by the stat and description layers
//!
//! Entries are evicted oldest-first once the capacity is reached. The cache
//! is owned by whoever composes the engine; nothing here is global.

use std::collections::VecDeque;
use std::hash::{BuildHasher, Hash};
use std::sync::{Mutex, MutexGuard};

use ahash::{AHashMap, AHasher, RandomState};

/// Hasher with fixed seeds, so equal content always fingerprints equally
pub fn fingerprint_hasher() -> AHasher {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
    .build_hasher()
}

#[derive(Debug)]
struct CacheInner<K, V> {
    entries: AHashMap<K, V>,
    order: VecDeque<K>,
}

/// Thread-safe, size-bounded key/value cache
///
/// A capacity of 0 disables the cache: `insert` is a no-op and `get`
/// always misses.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    inner: Mutex<CacheInner<K, V>>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: AHashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a cached value
    pub fn get(&self, key: &K) -> Option<V> {
        if self.capacity == 0 {
            return None;
        }
        self.lock().entries.get(key).cloned()
    }

    /// Store a value, evicting the oldest entry when full
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.lock();
        if inner.entries.insert(key.clone(), value).is_some() {
            // Replaced in place; insertion order is unchanged.
            return;
        }
        inner.order.push_back(key);
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                tracing::debug!(capacity = self.capacity, "evicted oldest cache entry");
            }
        }
    }

    /// Return the cached value or compute, store and return it
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        // Computed outside the lock; a concurrent miss may compute twice,
        // which is harmless because values are pure functions of the key.
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner<K, V>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still consistent enough to serve memoized values.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
