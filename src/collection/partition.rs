//! Partition - splitting wrapped sequences exhaustively.
//!
//! Unlike [`sequence`](super::SequenceOutcomes::sequence), partitioning
//! never short-circuits: the whole sequence is consumed and every element
//! lands in exactly one group, preserving relative order within each group.

use crate::algebra::{Maybe, Outcome};

/// Splitting a sequence of outcomes into its two channels.
pub trait PartitionOutcomes<T, E>: IntoIterator<Item = Outcome<T, E>> + Sized {
    /// Splits into `(success values, failure values)`, preserving the
    /// relative order within each group. Always consumes the whole sequence.
    ///
    /// For any input, `successes.len() + failures.len()` equals the input
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    /// use railway::collection::PartitionOutcomes;
    ///
    /// let outcomes: Vec<Outcome<i32, String>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("a".to_string()),
    ///     Outcome::Success(2),
    /// ];
    /// let (values, errors) = outcomes.partition_outcomes();
    /// assert_eq!(values, vec![1, 2]);
    /// assert_eq!(errors, vec!["a".to_string()]);
    /// ```
    fn partition_outcomes(self) -> (Vec<T>, Vec<E>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in self {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => errors.push(error),
            }
        }
        (values, errors)
    }
}

impl<C, T, E> PartitionOutcomes<T, E> for C where C: IntoIterator<Item = Outcome<T, E>> {}

/// Splitting a sequence of maybes into present values and an absence count.
pub trait PartitionMaybes<T>: IntoIterator<Item = Maybe<T>> + Sized {
    /// Splits into `(present values, count of absent)`, preserving the
    /// order of present values. Always consumes the whole sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    /// use railway::collection::PartitionMaybes;
    ///
    /// let maybes = vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)];
    /// let (values, absent) = maybes.partition_maybes();
    /// assert_eq!(values, vec![1, 3]);
    /// assert_eq!(absent, 1);
    /// ```
    fn partition_maybes(self) -> (Vec<T>, usize) {
        let mut values = Vec::new();
        let mut absent = 0;
        for maybe in self {
            match maybe {
                Maybe::Just(value) => values.push(value),
                Maybe::Nothing => absent += 1,
            }
        }
        (values, absent)
    }
}

impl<C, T> PartitionMaybes<T> for C where C: IntoIterator<Item = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn partition_consumes_everything() {
        let outcomes: Vec<Outcome<i32, String>> = vec![
            Outcome::Failure("a".to_string()),
            Outcome::Success(1),
            Outcome::Failure("b".to_string()),
        ];
        let (values, errors) = outcomes.partition_outcomes();
        assert_eq!(values.len() + errors.len(), 3);
        assert_eq!(errors, vec!["a".to_string(), "b".to_string()]);
    }
}
