use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Key/value map with an optional capacity and first-in, first-out eviction.
///
/// Keys are kept in a `VecDeque` in insertion order next to the `HashMap`
/// holding the values. When a *new* key would push the map past `limit`, the
/// key at the front of the queue (the oldest insertion still present) is
/// evicted first. Reads never reorder keys, and replacing the value of a
/// present key keeps its original position and evicts nothing.
///
/// `FifoStore` is a plain single-owner structure; [`crate::LimitedCache`] and
/// [`crate::Memoize`] wrap it in a lock.
///
/// # Examples
///
/// ```
/// use enclosure_core::FifoStore;
///
/// let mut store = FifoStore::new(Some(2));
/// store.insert("a", 1);
/// store.insert("b", 2);
/// store.insert("c", 3); // evicts "a"
///
/// assert_eq!(store.get("a"), None);
/// assert_eq!(store.get("b"), Some(&2));
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FifoStore<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    limit: Option<usize>,
}

impl<K, V> FifoStore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty store. `None` means unbounded.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns the evicted entry when the insertion displaced the oldest key.
    /// With a limit of zero nothing is retained and the new entry itself is
    /// returned as evicted.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.map.get_mut(&key) {
            *slot = value;
            return None;
        }

        if self.limit == Some(0) {
            return Some((key, value));
        }

        let evicted = match self.limit {
            Some(limit) if self.map.len() >= limit => self.evict_oldest(),
            _ => None,
        };

        self.order.push_back(key.clone());
        self.map.insert(key, value);

        if evicted.is_some() {
            tracing::debug!(limit = ?self.limit, len = self.map.len(), "evicted oldest entry");
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Copies the entries into a plain `HashMap`.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        V: Clone,
    {
        self.map.clone()
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let oldest = self.order.pop_front()?;
        let value = self.map.remove(&oldest)?;
        Some((oldest, value))
    }
}
