//! Memoization: generic key→value caching for wrapped functions.
//!
//! Each wrapper pairs a function with one cache keyed by its argument
//! (argument tuples for multi-argument functions via `memoize2`/`3`/`4`).
//! Three policies are provided, plus an async single-flight variant:
//!
//! - [`Memo`] / [`memoize`]: unbounded, indefinite
//! - [`TtlMemo`] / [`memoize_with_ttl`]: entries expire after a fixed
//!   time-to-live, evicted lazily on the next lookup
//! - [`BoundedMemo`] / [`memoize_with_capacity`]: at most `capacity`
//!   entries, approximate-LRU eviction by access ordinal
//! - [`memoize_with_cache`]: unbounded plus a [`MemoCache`] control handle
//!   for inspection and invalidation
//! - [`SingleFlightMemo`]: async; concurrent same-key callers share one
//!   in-flight computation (feature `async`)
//!
//! Keys must be `Eq + Hash + Clone` and values `Clone`. The backing store is
//! a lock-guarded map; the synchronous policies deliberately run the wrapped
//! function outside the lock, so they do not serialize concurrent misses.
//!
//! Memoization composes with the algebra: a wrapped function may return an
//! [`Outcome`](crate::algebra::Outcome) or
//! [`Maybe`](crate::algebra::Maybe), in which case failures are cached like
//! any other value.
//!
//! # Examples
//!
//! ```rust
//! use railway::memo::memoize_with_capacity;
//!
//! let fibonacci = memoize_with_capacity(
//!     |n: &u64| {
//!         let mut pair = (0u64, 1u64);
//!         for _ in 0..*n {
//!             pair = (pair.1, pair.0 + pair.1);
//!         }
//!         pair.0
//!     },
//!     64,
//! );
//! assert_eq!(fibonacci(10), 55);
//! ```

mod capacity;
mod ttl;
mod unbounded;

#[cfg(feature = "async")]
mod single_flight;

pub use capacity::{BoundedMemo, memoize_with_capacity};
pub use ttl::{TtlMemo, memoize_with_ttl};
pub use unbounded::{Memo, MemoCache, memoize, memoize2, memoize3, memoize4, memoize_with_cache};

#[cfg(feature = "async")]
pub use single_flight::SingleFlightMemo;
