//! Single-flight async memoization - concurrent callers share one
//! execution.
//!
//! [`SingleFlightMemo`] caches the in-flight unit of work itself, not just
//! its eventual value: the first caller for a key inserts a shared future
//! under the cache lock (an atomic insert-if-absent on the backing map),
//! and every concurrent caller with the same key awaits that same pending
//! operation. The wrapped function runs at most once per key.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use railway::memo::SingleFlightMemo;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let memo = SingleFlightMemo::new(move |n: u64| {
//!     let counter = Arc::clone(&counter);
//!     async move {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         n * 2
//!     }
//! });
//!
//! assert_eq!(memo.call(21).await, 42);
//! assert_eq!(memo.call(21).await, 42);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! # }
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::future::Future;
use std::hash::Hash;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;

/// An asynchronous function wrapped with a cache of shared in-flight
/// computations.
///
/// The cached unit is the future, so a key's computation is started by
/// whichever caller arrives first and joined by everyone else; once it
/// resolves, later callers receive the settled value from the same shared
/// handle without re-running the function.
pub struct SingleFlightMemo<K, V, F> {
    cache: Mutex<HashMap<K, Shared<BoxFuture<'static, V>>>>,
    operation: F,
}

impl<K, V, F> SingleFlightMemo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Wraps `operation` with a fresh, empty cache.
    pub fn new(operation: F) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            operation,
        }
    }

    /// Awaits the shared computation for `key`, starting it iff no caller
    /// has before.
    ///
    /// The insert-if-absent happens in one critical section, so concurrent
    /// same-key callers always observe a single execution.
    pub async fn call<Fut>(&self, key: K) -> V
    where
        F: Fn(K) -> Fut,
        Fut: Future<Output = V> + Send + 'static,
    {
        let shared = {
            let mut cache = self.cache.lock();
            match cache.entry(key.clone()) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(slot) => slot
                    .insert((self.operation)(key).boxed().shared())
                    .clone(),
            }
        };
        shared.await
    }

    /// The number of cached computations, settled or still in flight.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drops every cached computation. Callers already awaiting a shared
    /// future keep it alive and still observe its value.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    /// Drops the cached computation for `key`, if any. The next call
    /// restarts the wrapped function.
    pub fn invalidate(&self, key: &K) {
        self.cache.lock().remove(key);
    }
}

impl<K, V, F> fmt::Debug for SingleFlightMemo<K, V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SingleFlightMemo")
            .field("entries", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}
