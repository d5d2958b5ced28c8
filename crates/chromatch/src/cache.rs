//! Bounded memoization for repeated color computations.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;

/// A bounded, thread-safe memoization cache with least-recently-used
/// eviction.
///
/// Each cache is an explicit object owned by whatever component wants to
/// remember results, notably [`ColorGroup`](crate::ColorGroup) for its
/// nearest-match lookups. The capacity is fixed at construction, with
/// [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) entries unless
/// [`with_capacity`](Self::with_capacity) says otherwise. Once the cache is
/// full, inserting a new entry evicts the least recently used one.
///
/// All methods take `&self`; an internal mutex serializes access, so a cache
/// shared between threads stays coherent without outside locking.
///
/// # Examples
///
/// ```
/// # use chromatch::LookupCache;
/// let cache = LookupCache::new();
/// assert_eq!(cache.get_or_insert_with("high", || 3), 3);
/// // The closure only runs on a miss.
/// assert_eq!(cache.get_or_insert_with("high", || 9), 3);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct LookupCache<K, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K, V> LookupCache<K, V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
{
    /// The capacity of caches created with [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Create a new cache with the default capacity.
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }

    /// Create a new cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up the value for the given key, refreshing its recency.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Insert a value for the given key, returning the previous value if
    /// there was one.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.lock().put(key, value)
    }

    /// Look up the value for the given key, computing and caching it first
    /// if it is missing.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.lock().get_or_insert(key, compute).clone()
    }

    /// Determine the number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Determine whether the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Determine the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Acquire the cache behind the mutex. No cache operation panics while
    /// holding the lock, so a poisoned mutex still guards a well-formed
    /// cache.
    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(error) => error.into_inner(),
        }
    }
}

impl<K, V> Default for LookupCache<K, V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for LookupCache<K, V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.lock();
        f.debug_struct("LookupCache")
            .field("len", &cache.len())
            .field("capacity", &cache.cap().get())
            .finish()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::LookupCache;
    use std::num::NonZeroUsize;

    #[test]
    fn test_memoization() {
        let cache = LookupCache::new();
        assert_eq!(cache.capacity(), LookupCache::<u8, u8>::DEFAULT_CAPACITY);
        assert!(cache.is_empty());

        assert_eq!(cache.get_or_insert_with(7_u8, || 49_u8), 49);
        assert_eq!(cache.get_or_insert_with(7, || 0), 49);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&7), Some(49));
        assert_eq!(cache.get(&8), None);
    }

    #[test]
    fn test_eviction() {
        let cache = LookupCache::with_capacity(NonZeroUsize::MIN.saturating_add(1));
        assert_eq!(cache.capacity(), 2);

        cache.put("a", 1);
        cache.put("b", 2);
        // Touch "a" so that "b" is the least recently used entry.
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("c", 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"c"), Some(3));
    }
}
