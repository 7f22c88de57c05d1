//! Time-expiring memoization - entries valid until a deadline.
//!
//! Each entry carries its expiry instant; an entry is valid for use iff the
//! lookup happens strictly before it. Expired entries are evicted lazily:
//! the next lookup recomputes and replaces them, and no background sweeper
//! runs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A function wrapped with a cache whose entries expire after a fixed
/// time-to-live.
///
/// Two threads may simultaneously observe an entry as expired and both
/// recompute; like [`Memo`](super::Memo), this policy makes no single-flight
/// promise.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use railway::memo::TtlMemo;
///
/// let memo = TtlMemo::new(|n: &u64| n * 2, Duration::from_secs(60));
/// assert_eq!(memo.call(21), 42);
/// ```
pub struct TtlMemo<K, V, F> {
    cache: Mutex<HashMap<K, (V, Instant)>>,
    ttl: Duration,
    operation: F,
}

impl<K, V, F> TtlMemo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wraps `operation` with a cache whose entries live for `ttl` after
    /// insertion.
    ///
    /// # Panics
    ///
    /// Panics if `ttl` is zero; a non-positive time-to-live is a contract
    /// violation.
    pub fn new(operation: F, ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "TtlMemo: ttl must be positive");
        Self {
            cache: Mutex::new(HashMap::new()),
            ttl,
            operation,
        }
    }

    /// Returns the cached value for `key` if its entry has not expired;
    /// otherwise invokes the wrapped function and replaces the entry with a
    /// fresh expiry.
    pub fn call(&self, key: K) -> V {
        if let Some((value, expiry)) = self.cache.lock().get(&key) {
            if Instant::now() < *expiry {
                return value.clone();
            }
        }
        let value = (self.operation)(&key);
        self.cache
            .lock()
            .insert(key, (value.clone(), Instant::now() + self.ttl));
        value
    }
}

impl<K, V, F> fmt::Debug for TtlMemo<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TtlMemo")
            .field("entries", &self.cache.lock().len())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Wraps a function with a time-expiring cache, returning a function of
/// identical signature.
///
/// # Panics
///
/// Panics if `ttl` is zero.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use railway::memo::memoize_with_ttl;
///
/// let cached = memoize_with_ttl(|n: &u64| n * 2, Duration::from_millis(100));
/// assert_eq!(cached(21), 42);
/// ```
pub fn memoize_with_ttl<K, V, F>(operation: F, ttl: Duration) -> impl Fn(K) -> V
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    let memo = TtlMemo::new(operation, ttl);
    move |key| memo.call(key)
}
