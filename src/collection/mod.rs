//! Collection algebra: lifting [`Outcome`](crate::algebra::Outcome) and
//! [`Maybe`](crate::algebra::Maybe) across sequences.
//!
//! - [`Traverse`], [`SequenceOutcomes`], [`SequenceMaybes`]: short-circuit
//!   on the first failure or absence, in iteration order
//! - [`PartitionOutcomes`], [`PartitionMaybes`]: exhaustive, order-preserving
//!   splits
//! - [`ScanCollection`]: accumulator histories, plain and short-circuiting
//! - [`traverse_parallel`]: concurrent dispatch with positional error
//!   selection (feature `async`)
//!
//! All of these are blanket extension traits over `IntoIterator`, so they
//! work on vectors, slices, iterators, and anything else iterable.
//!
//! # Examples
//!
//! ```rust
//! use railway::algebra::Outcome;
//! use railway::collection::{PartitionOutcomes, Traverse};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.parse::<i32>()).map_error(|_| format!("Cannot parse {input}"))
//! }
//!
//! // Short-circuit at the first bad element:
//! let all = vec!["1", "2", "x", "3"].traverse_outcome(parse);
//! assert_eq!(all, Outcome::Failure("Cannot parse x".to_string()));
//!
//! // Or keep both channels:
//! let (values, errors) = ["1", "2", "x", "3"].iter().map(|s| parse(s)).partition_outcomes();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(errors.len(), 1);
//! ```

mod partition;
mod scan;
mod traverse;

#[cfg(feature = "async")]
mod parallel;

pub use partition::{PartitionMaybes, PartitionOutcomes};
pub use scan::ScanCollection;
pub use traverse::{SequenceMaybes, SequenceOutcomes, Traverse};

#[cfg(feature = "async")]
pub use parallel::{traverse_parallel, traverse_parallel_spawned};
