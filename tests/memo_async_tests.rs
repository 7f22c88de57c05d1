//! Integration tests for the single-flight async cache.
//!
//! The defining property: concurrent callers with the same key share one
//! in-flight computation, so the wrapped function runs exactly once per key
//! no matter how many callers race.

#![cfg(feature = "async")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use railway::memo::SingleFlightMemo;

// =============================================================================
// Single-Flight Guarantee
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_same_key_callers_share_one_execution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let memo = Arc::new(SingleFlightMemo::new(move |n: u64| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(100)).await;
            n * 2
        }
    }));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let memo = Arc::clone(&memo);
            tokio::spawn(async move { memo.call(7).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 14);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_keys_run_distinct_computations() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let memo = SingleFlightMemo::new(move |n: u64| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            n * 2
        }
    });

    assert_eq!(memo.call(1).await, 2);
    assert_eq!(memo.call(2).await, 4);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn settled_values_are_served_without_rerunning() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let memo = SingleFlightMemo::new(move |n: u64| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            n + 1
        }
    });

    assert_eq!(memo.call(41).await, 42);
    assert_eq!(memo.call(41).await, 42);
    assert_eq!(memo.call(41).await, 42);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Invalidation
// =============================================================================

#[tokio::test]
async fn invalidate_restarts_the_computation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let memo = SingleFlightMemo::new(move |n: u64| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        }
    });

    memo.call(1).await;
    memo.invalidate(&1);
    memo.call(1).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn clear_empties_the_cache() {
    let memo = SingleFlightMemo::new(|n: u64| async move { n });
    memo.call(1).await;
    memo.call(2).await;
    assert_eq!(memo.len(), 2);

    memo.clear();
    assert!(memo.is_empty());
}
