//! Traverse and sequence - lifting the algebra across sequences.
//!
//! `sequence` turns a collection of already-wrapped values inside out:
//! `Vec<Outcome<T, E>>` becomes `Outcome<Vec<T>, E>`. `traverse` fuses a
//! per-element fallible computation with the same collection step, without
//! building the intermediate mapped sequence.
//!
//! Both short-circuit: scanning in iteration order, the **first** failure or
//! `Nothing` is returned immediately and no later element (or element
//! function) is touched.
//!
//! # Examples
//!
//! ```rust
//! use railway::algebra::Outcome;
//! use railway::collection::Traverse;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.parse::<i32>()).map_error(|_| format!("Cannot parse {input}"))
//! }
//!
//! let parsed = vec!["1", "2", "3"].traverse_outcome(parse);
//! assert_eq!(parsed, Outcome::Success(vec![1, 2, 3]));
//!
//! let failed = vec!["1", "x", "3"].traverse_outcome(parse);
//! assert_eq!(failed, Outcome::Failure("Cannot parse x".to_string()));
//! ```

use crate::algebra::{Maybe, Outcome};

/// Per-element traversal with a fallible or optional computation.
///
/// Equivalent to mapping then [`sequence`](SequenceOutcomes::sequence), but
/// evaluated lazily element by element and short-circuiting on the first
/// failure or `Nothing`.
pub trait Traverse: IntoIterator + Sized {
    /// Applies a fallible computation to every element, collecting all
    /// success values or returning the first failure.
    ///
    /// Elements after the first failure are not visited.
    fn traverse_outcome<T, E, F>(self, mut operation: F) -> Outcome<Vec<T>, E>
    where
        F: FnMut(Self::Item) -> Outcome<T, E>,
    {
        let iterator = self.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for item in iterator {
            match operation(item) {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }

    /// Applies an optional computation to every element, collecting all
    /// present values or returning `Nothing` at the first absence.
    fn traverse_maybe<T, F>(self, mut operation: F) -> Maybe<Vec<T>>
    where
        F: FnMut(Self::Item) -> Maybe<T>,
    {
        let iterator = self.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for item in iterator {
            match operation(item) {
                Maybe::Just(value) => values.push(value),
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
        Maybe::Just(values)
    }
}

impl<C: IntoIterator> Traverse for C {}

/// Collecting a sequence of outcomes into an outcome of a sequence.
pub trait SequenceOutcomes<T, E>: IntoIterator<Item = Outcome<T, E>> + Sized {
    /// Returns a success with all values iff every element succeeded,
    /// otherwise the **first** encountered failure in iteration order.
    ///
    /// Stops consuming the sequence at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    /// use railway::collection::SequenceOutcomes;
    ///
    /// let outcomes: Vec<Outcome<i32, String>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("E1".to_string()),
    ///     Outcome::Failure("E2".to_string()),
    /// ];
    /// assert_eq!(outcomes.sequence(), Outcome::Failure("E1".to_string()));
    /// ```
    fn sequence(self) -> Outcome<Vec<T>, E> {
        self.traverse_outcome(|outcome| outcome)
    }
}

impl<C, T, E> SequenceOutcomes<T, E> for C where C: IntoIterator<Item = Outcome<T, E>> {}

/// Collecting a sequence of maybes into a maybe of a sequence.
pub trait SequenceMaybes<T>: IntoIterator<Item = Maybe<T>> + Sized {
    /// Returns all present values iff every element was present, otherwise
    /// `Nothing` at the first absence in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    /// use railway::collection::SequenceMaybes;
    ///
    /// let maybes = vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)];
    /// assert_eq!(maybes.sequence(), Maybe::Nothing);
    /// ```
    fn sequence(self) -> Maybe<Vec<T>> {
        self.traverse_maybe(|maybe| maybe)
    }
}

impl<C, T> SequenceMaybes<T> for C where C: IntoIterator<Item = Maybe<T>> {}
