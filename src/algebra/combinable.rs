//! Combinable capability - error types that know how to fold themselves.
//!
//! [`Outcome::combine_all`](super::Outcome::combine_all) collects a sequence
//! of outcomes, folding every encountered error through the error type's own
//! combining rule. This module provides that rule as the [`Combinable`]
//! trait, an associative binary operation over owned values.
//!
//! # Examples
//!
//! ```rust
//! use railway::algebra::Combinable;
//!
//! let combined = "not found".to_string().combine("; timed out".to_string());
//! assert_eq!(combined, "not found; timed out");
//! ```

/// A capability for types that can be folded pairwise into one value.
///
/// # Laws
///
/// `combine` must be associative:
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Combinable {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Combinable for String {
    /// String concatenation.
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Combinable for Vec<T> {
    /// Vector concatenation, preserving element order.
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
