//! Scan - accumulator histories over sequences.
//!
//! `scan_all` returns the seed followed by every intermediate accumulator
//! value, so the output is always one element longer than the input.
//! `scan_right` folds from the end toward the start with symmetric
//! semantics (the seed is last). `scan_outcome` and `scan_maybe`
//! short-circuit like `bind` the moment the accumulator function yields a
//! failure or `Nothing`, returning that instead of the partial history.
//!
//! # Examples
//!
//! ```rust
//! use railway::collection::ScanCollection;
//!
//! let sums = vec![1, 2, 3, 4].scan_all(0, |accumulator, n| accumulator + n);
//! assert_eq!(sums, vec![0, 1, 3, 6, 10]);
//! ```

use crate::algebra::{Maybe, Outcome};

/// Accumulator-history folds over any sequence.
pub trait ScanCollection: IntoIterator + Sized {
    /// Returns the seed followed by every intermediate accumulator value.
    /// The output length is the input length plus one.
    fn scan_all<S, F>(self, seed: S, mut function: F) -> Vec<S>
    where
        S: Clone,
        F: FnMut(S, Self::Item) -> S,
    {
        let iterator = self.into_iter();
        let mut history = Vec::with_capacity(iterator.size_hint().0 + 1);
        let mut accumulator = seed;
        history.push(accumulator.clone());
        for item in iterator {
            accumulator = function(accumulator, item);
            history.push(accumulator.clone());
        }
        history
    }

    /// Folds from the end toward the start. The first element of the output
    /// is the full fold and the last is the seed; the output length is the
    /// input length plus one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::collection::ScanCollection;
    ///
    /// let sums = vec![1, 2, 3].scan_right(0, |n, accumulator| n + accumulator);
    /// assert_eq!(sums, vec![6, 5, 3, 0]);
    /// ```
    fn scan_right<S, F>(self, seed: S, mut function: F) -> Vec<S>
    where
        S: Clone,
        F: FnMut(Self::Item, S) -> S,
    {
        let items: Vec<Self::Item> = self.into_iter().collect();
        let mut history = Vec::with_capacity(items.len() + 1);
        let mut accumulator = seed;
        history.push(accumulator.clone());
        for item in items.into_iter().rev() {
            accumulator = function(item, accumulator);
            history.push(accumulator.clone());
        }
        history.reverse();
        history
    }

    /// Like [`scan_all`](Self::scan_all) with a fallible accumulator: the
    /// moment the function yields a failure, that failure is returned
    /// instead of the partial history.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    /// use railway::collection::ScanCollection;
    ///
    /// let balances = vec![50, -80].scan_outcome(100, |balance, delta| {
    ///     let next = balance + delta;
    ///     if next < 0 {
    ///         Outcome::Failure("overdrawn".to_string())
    ///     } else {
    ///         Outcome::Success(next)
    ///     }
    /// });
    /// assert_eq!(balances, Outcome::Success(vec![100, 150, 70]));
    /// ```
    fn scan_outcome<S, E, F>(self, seed: S, mut function: F) -> Outcome<Vec<S>, E>
    where
        S: Clone,
        F: FnMut(S, Self::Item) -> Outcome<S, E>,
    {
        let iterator = self.into_iter();
        let mut history = Vec::with_capacity(iterator.size_hint().0 + 1);
        let mut accumulator = seed;
        history.push(accumulator.clone());
        for item in iterator {
            match function(accumulator, item) {
                Outcome::Success(next) => {
                    history.push(next.clone());
                    accumulator = next;
                }
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(history)
    }

    /// Like [`scan_all`](Self::scan_all) with an optional accumulator: the
    /// moment the function yields `Nothing`, `Nothing` is returned instead
    /// of the partial history.
    fn scan_maybe<S, F>(self, seed: S, mut function: F) -> Maybe<Vec<S>>
    where
        S: Clone,
        F: FnMut(S, Self::Item) -> Maybe<S>,
    {
        let iterator = self.into_iter();
        let mut history = Vec::with_capacity(iterator.size_hint().0 + 1);
        let mut accumulator = seed;
        history.push(accumulator.clone());
        for item in iterator {
            match function(accumulator, item) {
                Maybe::Just(next) => {
                    history.push(next.clone());
                    accumulator = next;
                }
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
        Maybe::Just(history)
    }
}

impl<C: IntoIterator> ScanCollection for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scan_all_has_length_plus_one() {
        let history = vec![1, 2, 3].scan_all(0, |accumulator, n| accumulator + n);
        assert_eq!(history.len(), 4);
    }

    #[rstest]
    fn scan_right_seed_is_last() {
        let history = vec![1, 2, 3].scan_right(0, |n, accumulator| n + accumulator);
        assert_eq!(history.last(), Some(&0));
        assert_eq!(history.first(), Some(&6));
    }

    #[rstest]
    fn scan_outcome_short_circuits() {
        let outcome: Outcome<Vec<i32>, String> = vec![1, 2, 3].scan_outcome(0, |_, n| {
            if n == 2 {
                Outcome::Failure("two".to_string())
            } else {
                Outcome::Success(n)
            }
        });
        assert_eq!(outcome, Outcome::Failure("two".to_string()));
    }
}
