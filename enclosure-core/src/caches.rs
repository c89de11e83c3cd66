//! Key/value caches handed out by the `make_*_cache` factories.
//!
//! Each cache owns its map behind a `parking_lot` lock, so one instance can be
//! shared between threads (for example through an `Arc`) without extra
//! synchronization. Separately constructed caches never share entries.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::{Mutex, RwLock};

use crate::{CacheStats, FifoStore, StatsSnapshot};

/// Unbounded cache with `get`, `set` and `has`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_simple_cache;
///
/// let cache = make_simple_cache::<String, i32>();
/// assert!(!cache.has("x"));
/// assert_eq!(cache.set("x".to_string(), 42), 42);
/// assert!(cache.has("x"));
/// assert_eq!(cache.get("x"), Some(42));
/// assert_eq!(cache.get("y"), None);
/// ```
#[derive(Debug)]
pub struct SimpleCache<K, V> {
    map: RwLock<HashMap<K, V>>,
}

impl<K, V> SimpleCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a copy of the stored value, `None` if `key` is missing.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.read().get(key).cloned()
    }

    /// Stores `value` under `key`, replacing any previous value, and returns it.
    pub fn set(&self, key: K, value: V) -> V {
        self.map.write().insert(key, value.clone());
        value
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.read().contains_key(key)
    }
}

impl<K, V> Default for SimpleCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an empty [`SimpleCache`].
pub fn make_simple_cache<K, V>() -> SimpleCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    SimpleCache::new()
}

/// Unbounded cache that counts hits and misses of `get`.
///
/// # Examples
///
/// ```
/// use enclosure_core::{make_cache_with_stats, StatsSnapshot};
///
/// let cache = make_cache_with_stats();
/// cache.set("a", 1);
/// assert_eq!(cache.get("a"), Some(1));
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.get("a"), Some(1));
/// assert_eq!(cache.get_stats(), StatsSnapshot { hits: 2, misses: 1 });
/// ```
#[derive(Debug)]
pub struct StatsCache<K, V> {
    map: RwLock<HashMap<K, V>>,
    stats: CacheStats,
}

impl<K, V> StatsCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            stats: CacheStats::new(),
        }
    }

    /// Looks `key` up, recording a hit when present and a miss otherwise.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let value = self.map.read().get(key).cloned();
        if value.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        value
    }

    /// Stores `value` under `key` and returns it. Does not touch the counters.
    pub fn set(&self, key: K, value: V) -> V {
        self.map.write().insert(key, value.clone());
        value
    }

    pub fn get_stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<K, V> Default for StatsCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an empty [`StatsCache`] with zeroed counters.
pub fn make_cache_with_stats<K, V>() -> StatsCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    StatsCache::new()
}

/// Cache holding at most `max_size` entries, evicting the oldest insertion
/// first.
///
/// Setting a key that is already present replaces its value without evicting
/// anything and without moving the key in the eviction order. See
/// [`FifoStore`].
///
/// # Examples
///
/// ```
/// use enclosure_core::make_limited_cache;
///
/// let cache = make_limited_cache(2);
/// cache.set("a", 1);
/// cache.set("b", 2);
/// assert_eq!(cache.size(), 2);
/// cache.set("c", 3); // "a" is evicted
/// assert_eq!(cache.get("a"), None);
/// assert_eq!(cache.get("b"), Some(2));
/// ```
#[derive(Debug)]
pub struct LimitedCache<K, V> {
    store: Mutex<FifoStore<K, V>>,
}

impl<K, V> LimitedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(max_size: usize) -> Self {
        Self {
            store: Mutex::new(FifoStore::new(Some(max_size))),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.lock().get(key).cloned()
    }

    /// Stores `value` under `key` and returns it, evicting the oldest entry
    /// if a new key would exceed the capacity.
    pub fn set(&self, key: K, value: V) -> V {
        self.store.lock().insert(key, value.clone());
        value
    }

    /// Number of entries currently held.
    pub fn size(&self) -> usize {
        self.store.lock().len()
    }

    pub fn max_size(&self) -> usize {
        self.store.lock().limit().unwrap_or(usize::MAX)
    }
}

/// Creates an empty [`LimitedCache`] with the given capacity.
pub fn make_limited_cache<K, V>(max_size: usize) -> LimitedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    LimitedCache::new(max_size)
}

/// Returns a closure yielding `value` for the first `max_reads` calls and
/// `None` afterwards.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_expiring_value;
///
/// let mut get_secret = make_expiring_value("secret123", 2);
/// assert_eq!(get_secret(), Some("secret123"));
/// assert_eq!(get_secret(), Some("secret123"));
/// assert_eq!(get_secret(), None);
/// ```
pub fn make_expiring_value<V>(value: V, max_reads: usize) -> impl FnMut() -> Option<V>
where
    V: Clone,
{
    let mut value = Some(value);
    let mut reads_left = max_reads;
    move || {
        if reads_left == 0 {
            return None;
        }
        reads_left -= 1;
        if reads_left == 0 {
            // Last permitted read: hand the value over instead of cloning it.
            value.take()
        } else {
            value.clone()
        }
    }
}
