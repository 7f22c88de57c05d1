//! Parallel traversal - concurrent per-element dispatch with positional
//! error selection.
//!
//! [`traverse_parallel`] launches the element computation for every input
//! concurrently, waits for **all** of them to finish, then folds the results
//! in original sequence order. The failure it returns is therefore the first
//! by *position*, not the first to *complete*, and a failing element never
//! cancels its siblings.

use std::future::Future;

use futures::future::join_all;

use crate::algebra::Outcome;
use crate::collection::SequenceOutcomes;

/// Applies an asynchronous fallible computation to every element
/// concurrently, collecting all success values or the first failure by
/// sequence position once every computation has finished.
///
/// # Examples
///
/// ```rust
/// use railway::algebra::Outcome;
/// use railway::collection::traverse_parallel;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doubled = traverse_parallel(vec![1, 2, 3], |n| async move {
///     Outcome::<i32, String>::Success(n * 2)
/// })
/// .await;
/// assert_eq!(doubled, Outcome::Success(vec![2, 4, 6]));
/// # }
/// ```
pub async fn traverse_parallel<I, T, E, F, Fut>(source: I, operation: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    let outcomes = join_all(source.into_iter().map(operation)).await;
    outcomes.sequence()
}

/// Like [`traverse_parallel`], but every element computation runs as its own
/// spawned task, so independent elements can progress on separate runtime
/// worker threads instead of sharing one poll loop.
///
/// Error selection is identical: all tasks run to completion, then the first
/// failure by sequence position wins.
///
/// # Panics
///
/// A panic inside an element computation is resumed on the awaiting task
/// once all siblings have been joined.
pub async fn traverse_parallel_spawned<I, T, E, F, Fut>(source: I, operation: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let handles: Vec<_> = source
        .into_iter()
        .map(|item| tokio::spawn(operation(item)))
        .collect();
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }
    outcomes.sequence()
}
