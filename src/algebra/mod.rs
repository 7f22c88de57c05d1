//! The core algebra: success-or-failure and presence-or-absence values.
//!
//! This module provides the two immutable container types and their
//! combinator algebra:
//!
//! - [`Outcome`]: a success-or-failure value (map, bind, ensure, apply,
//!   compensate, the `attempt` panic boundary, and `combine`)
//! - [`Maybe`]: a presence-or-absence value with the symmetric combinators
//! - [`Combinable`]: the capability trait used by `Outcome::combine_all`
//!
//! # Examples
//!
//! ## Railway Pipelines
//!
//! ```rust
//! use railway::algebra::Outcome;
//!
//! fn validate(name: &str) -> Outcome<&str, String> {
//!     Outcome::Success(name)
//!         .ensure(|n| !n.is_empty(), "name is empty".to_string())
//!         .ensure(|n| n.len() <= 64, "name too long".to_string())
//! }
//!
//! let greeting = validate("ada")
//!     .map(|name| format!("hello, {name}"))
//!     .value_or_else(|error| format!("invalid: {error}"));
//! assert_eq!(greeting, "hello, ada");
//! ```
//!
//! ## Optional Values
//!
//! ```rust
//! use railway::algebra::Maybe;
//!
//! let port = Maybe::from("8080".parse::<u16>().ok())
//!     .filter(|p| *p >= 1024)
//!     .value_or(3000);
//! assert_eq!(port, 8080);
//! ```

mod combinable;
mod maybe;
mod outcome;

pub use combinable::Combinable;
pub use maybe::Maybe;
pub use outcome::{Outcome, describe_panic};
