//! Capacity-bounded memoization - approximate least-recently-used eviction.
//!
//! Every lookup, hit or miss, advances a monotone access clock and stamps
//! the touched entry. When an insertion would grow the cache beyond its
//! capacity, exactly one entry with the smallest stamp is evicted first.
//! The victim is found by a linear scan, so this approximates LRU rather
//! than implementing it strictly; ties are broken arbitrarily.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

struct BoundedState<K, V> {
    entries: HashMap<K, (V, u64)>,
    clock: u64,
}

/// A function wrapped with a cache holding at most `capacity` entries.
///
/// # Examples
///
/// ```rust
/// use railway::memo::BoundedMemo;
///
/// let memo = BoundedMemo::new(|n: &u64| n * 2, 128);
/// assert_eq!(memo.call(21), 42);
/// ```
pub struct BoundedMemo<K, V, F> {
    state: Mutex<BoundedState<K, V>>,
    capacity: usize,
    operation: F,
}

impl<K, V, F> BoundedMemo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wraps `operation` with a cache bounded to `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a non-positive capacity is a contract
    /// violation.
    pub fn new(operation: F, capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedMemo: capacity must be positive");
        Self {
            state: Mutex::new(BoundedState {
                entries: HashMap::new(),
                clock: 0,
            }),
            capacity,
            operation,
        }
    }

    /// Returns the cached value for `key`, stamping the entry with the
    /// current access ordinal. On a miss the wrapped function runs, and the
    /// minimum-stamp entry is evicted if the cache is full.
    pub fn call(&self, key: K) -> V {
        {
            let mut state = self.state.lock();
            state.clock += 1;
            let stamp = state.clock;
            if let Some((value, last_access)) = state.entries.get_mut(&key) {
                *last_access = stamp;
                return value.clone();
            }
        }
        let value = (self.operation)(&key);
        let mut state = self.state.lock();
        state.clock += 1;
        let stamp = state.clock;
        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            let victim = state
                .entries
                .iter()
                .min_by_key(|(_, (_, last_access))| *last_access)
                .map(|(candidate, _)| candidate.clone());
            if let Some(victim) = victim {
                state.entries.remove(&victim);
            }
        }
        state.entries.insert(key, (value.clone(), stamp));
        value
    }
}

impl<K, V, F> fmt::Debug for BoundedMemo<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoundedMemo")
            .field("entries", &self.state.lock().entries.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Wraps a function with a capacity-bounded cache, returning a function of
/// identical signature.
///
/// # Panics
///
/// Panics if `capacity` is zero.
///
/// # Examples
///
/// ```rust
/// use railway::memo::memoize_with_capacity;
///
/// let cached = memoize_with_capacity(|n: &u64| n * 2, 2);
/// assert_eq!(cached(21), 42);
/// ```
pub fn memoize_with_capacity<K, V, F>(operation: F, capacity: usize) -> impl Fn(K) -> V
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    let memo = BoundedMemo::new(operation, capacity);
    move |key| memo.call(key)
}
