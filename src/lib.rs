//! # railway
//!
//! Railway-oriented programming for Rust: algebraic success/failure and
//! presence/absence types with a combinator algebra, collection traversals,
//! and memoization utilities.
//!
//! ## Overview
//!
//! This library provides two immutable container types and the algebra to
//! compose computations over them without exceptions or null checks:
//!
//! - **`Outcome<T, E>`**: a success-or-failure value with map/bind/ensure/
//!   apply/compensate combinators obeying the functor, applicative, and
//!   monad laws
//! - **`Maybe<T>`**: a presence-or-absence value with the symmetric
//!   combinator set
//! - **Collection algebra**: traverse, sequence, partition, and scan for
//!   lifting the algebra across sequences
//! - **Memoization**: generic key→value caching for wrapped functions with
//!   unbounded, time-expiring, and capacity-bounded policies, plus an async
//!   single-flight variant
//!
//! ## Feature Flags
//!
//! - `algebra`: the `Outcome` and `Maybe` types and their combinators
//! - `collection`: traverse/sequence/partition/scan extension traits
//! - `memo`: memoization caches
//! - `async`: `traverse_parallel` and the single-flight async cache
//! - `serde`: serde derives for `Outcome` and `Maybe`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_or_else(|_| Outcome::Failure(format!("Cannot parse {input}")), Outcome::Success)
//! }
//!
//! let total = parse("20")
//!     .ensure(|n| *n >= 0, "negative".to_string())
//!     .map(|n| n + 1)
//!     .value_or(0);
//! assert_eq!(total, 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;
}

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "memo")]
pub mod memo;
