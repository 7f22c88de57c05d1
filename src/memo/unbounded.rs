//! Unbounded memoization - indefinite caching keyed by argument.
//!
//! [`Memo`] wraps a function with a thread-safe cache that never evicts.
//! Lookup and insert are separate critical sections and the wrapped function
//! runs outside the lock, so two threads racing on the same missing key may
//! both invoke it; there is no single-flight guarantee here (see
//! [`SingleFlightMemo`](super::SingleFlightMemo) for the async variant that
//! does promise it).
//!
//! # Examples
//!
//! ```rust
//! use railway::memo::memoize;
//!
//! let slow_square = memoize(|n: &u64| n * n);
//! assert_eq!(slow_square(12), 144);
//! assert_eq!(slow_square(12), 144); // served from the cache
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

/// A function wrapped with an unbounded, thread-safe, indefinite cache.
///
/// One cache exists per `Memo` instance. Entries are added on first miss
/// and never removed.
///
/// # Examples
///
/// ```rust
/// use railway::memo::Memo;
///
/// let memo = Memo::new(|n: &u64| n + 1);
/// assert_eq!(memo.call(41), 42);
/// ```
pub struct Memo<K, V, F> {
    cache: Mutex<HashMap<K, V>>,
    operation: F,
}

impl<K, V, F> Memo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wraps `operation` with a fresh, empty cache.
    pub fn new(operation: F) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            operation,
        }
    }

    /// Returns the cached value for `key`, invoking the wrapped function on
    /// a miss and caching its result.
    ///
    /// Concurrent callers with the same missing key may both invoke the
    /// wrapped function; the cache keeps whichever result is inserted last.
    pub fn call(&self, key: K) -> V {
        if let Some(value) = self.cache.lock().get(&key) {
            return value.clone();
        }
        let value = (self.operation)(&key);
        self.cache.lock().insert(key, value.clone());
        value
    }
}

impl<K, V, F> fmt::Debug for Memo<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memo")
            .field("entries", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Cache Control Handle
// =============================================================================

/// A handle for inspecting and invalidating the cache behind a memoized
/// function produced by [`memoize_with_cache`].
///
/// The handle and the memoized closure share one store; clearing through
/// the handle is immediately visible to the closure.
pub struct MemoCache<K, V> {
    entries: Arc<Mutex<HashMap<K, V>>>,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Removes every cached entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Removes and returns the entry for `key`, if cached.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.lock().remove(key)
    }

    /// Returns `true` if `key` is cached.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the cached value for `key` without invoking the wrapped
    /// function.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().get(key).cloned()
    }
}

impl<K, V> fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}

// =============================================================================
// Closure Adapters
// =============================================================================

/// Wraps a single-argument function with an unbounded cache, returning a
/// function of identical signature.
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use railway::memo::memoize;
///
/// let calls = AtomicUsize::new(0);
/// let cached = memoize(|n: &u64| {
///     calls.fetch_add(1, Ordering::SeqCst);
///     n * 2
/// });
///
/// assert_eq!(cached(21), 42);
/// assert_eq!(cached(21), 42);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn memoize<K, V, F>(operation: F) -> impl Fn(K) -> V
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    let memo = Memo::new(operation);
    move |key| memo.call(key)
}

/// Like [`memoize`], but also returns a [`MemoCache`] handle for external
/// inspection and invalidation.
///
/// # Examples
///
/// ```rust
/// use railway::memo::memoize_with_cache;
///
/// let (cached, cache) = memoize_with_cache(|n: &u64| n * 2);
/// assert_eq!(cached(21), 42);
/// assert!(cache.contains(&21));
///
/// cache.clear();
/// assert_eq!(cache.len(), 0);
/// ```
pub fn memoize_with_cache<K, V, F>(operation: F) -> (impl Fn(K) -> V, MemoCache<K, V>)
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    let entries = Arc::new(Mutex::new(HashMap::<K, V>::new()));
    let store = Arc::clone(&entries);
    let call = move |key: K| {
        if let Some(value) = store.lock().get(&key) {
            return value.clone();
        }
        let value = operation(&key);
        store.lock().insert(key, value.clone());
        value
    };
    (call, MemoCache { entries })
}

/// Wraps a two-argument function, using the argument pair as the composite
/// cache key.
pub fn memoize2<A, B, V, F>(operation: F) -> impl Fn(A, B) -> V
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&A, &B) -> V,
{
    let memo = Memo::new(move |key: &(A, B)| operation(&key.0, &key.1));
    move |first, second| memo.call((first, second))
}

/// Wraps a three-argument function, using the argument triple as the
/// composite cache key.
pub fn memoize3<A, B, C, V, F>(operation: F) -> impl Fn(A, B, C) -> V
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&A, &B, &C) -> V,
{
    let memo = Memo::new(move |key: &(A, B, C)| operation(&key.0, &key.1, &key.2));
    move |first, second, third| memo.call((first, second, third))
}

/// Wraps a four-argument function, using the argument quadruple as the
/// composite cache key.
pub fn memoize4<A, B, C, D, V, F>(operation: F) -> impl Fn(A, B, C, D) -> V
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    D: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&A, &B, &C, &D) -> V,
{
    let memo = Memo::new(move |key: &(A, B, C, D)| operation(&key.0, &key.1, &key.2, &key.3));
    move |first, second, third, fourth| memo.call((first, second, third, fourth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn memo_serves_repeated_keys_from_cache() {
        let calls = AtomicUsize::new(0);
        let memo = Memo::new(|n: &u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            n * n
        });
        assert_eq!(memo.call(5), 25);
        assert_eq!(memo.call(5), 25);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn memoize_with_cache_shares_one_store() {
        let (cached, cache) = memoize_with_cache(|n: &u64| n * 10);
        assert_eq!(cached(3), 30);
        assert_eq!(cache.get(&3), Some(30));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[rstest]
    fn memoize2_keys_on_both_arguments() {
        let calls = AtomicUsize::new(0);
        let cached = memoize2(|a: &i32, b: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            a + b
        });
        assert_eq!(cached(1, 2), 3);
        assert_eq!(cached(2, 1), 3);
        assert_eq!(cached(1, 2), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
