//! Maybe type - a presence-or-absence value with a combinator algebra.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either `Just(T)` or `Nothing`. It carries the combinator set of
//! [`Outcome`](super::Outcome) restricted to a single channel: map, bind,
//! tap, filter, check, apply, fold, and recovery via `or_else`.
//!
//! Unlike implicit-conversion designs, construction is explicit:
//! [`Maybe::of`] always wraps, and `From<Option<T>>` collapses `None` to
//! `Nothing`. Double-wrapping cannot happen by accident; nested maybes are
//! unwrapped with an explicit [`flatten`](Maybe::flatten).
//!
//! # Examples
//!
//! ```rust
//! use railway::algebra::Maybe;
//!
//! let name: Maybe<&str> = Maybe::from("alice".strip_prefix("a"));
//! let shouted = name.map(str::to_uppercase).value_or_else(|| "UNKNOWN".to_string());
//! assert_eq!(shouted, "LICE");
//! ```

use std::fmt;

use super::outcome::Outcome;

/// A value that is either present or absent.
///
/// `Maybe<T>` is an immutable container created via [`Maybe::of`] or the
/// `From<Option<T>>` conversion and consumed by combinators that return new
/// `Maybe` instances. Two maybes are equal iff both are `Nothing`, or both
/// are `Just` of equal values; `Nothing` hashes to a fixed discriminant
/// sentinel.
///
/// # Examples
///
/// ```rust
/// use railway::algebra::Maybe;
///
/// let present = Maybe::of(42);
/// assert_eq!(present.map(|x| x + 1), Maybe::Just(43));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(absent.map(|x| x + 1), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The present variant, carrying the value.
    Just(T),
    /// The absent variant.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. Always yields `Just`; never double-wraps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(42), Maybe::Just(42));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<T>`, the idiomatic non-panicking accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn just_ref(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`. Reading an absent value is a contract
    /// violation, not a recoverable error.
    #[inline]
    pub fn unwrap_just(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap_just()` on a `Nothing` value"),
        }
    }

    /// Returns the value or panics with the supplied message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(42).expect_just("expected an id"), 42);
    /// ```
    #[inline]
    pub fn expect_just(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the value or the supplied fallback. Never panics.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Returns the value or computes a fallback.
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    // =========================================================================
    // Transformation Combinators
    // =========================================================================

    /// Applies a function to the present value; `Nothing` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(21).map(|x| x * 2), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Monadic composition: chains a function that itself returns a maybe.
    /// `Nothing` propagates without invoking the function; the result is
    /// never double-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::of(42).bind(half), Maybe::Just(21));
    /// assert_eq!(Maybe::of(21).bind(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Invokes a side effect on the present value, returning the maybe
    /// unchanged. The return value of `operation` is discarded.
    #[inline]
    pub fn tap<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            operation(value);
        }
        self
    }

    /// Keeps a present value only if it passes the predicate; the
    /// presence-channel counterpart of `Outcome::ensure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(42).filter(|x| *x > 0), Maybe::Just(42));
    /// assert_eq!(Maybe::of(-1).filter(|x| *x > 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Sequences a validation step without changing the carried value: runs
    /// `operation` on the present value, propagates its `Nothing`, otherwise
    /// returns the **original** value unchanged.
    #[inline]
    pub fn check<U, F>(self, operation: F) -> Self
    where
        F: FnOnce(&T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => match operation(&value) {
                Maybe::Just(_) => Self::Just(value),
                Maybe::Nothing => Self::Nothing,
            },
            Self::Nothing => Self::Nothing,
        }
    }

    // =========================================================================
    // Applicative Combinators
    // =========================================================================

    /// Applicative application: applies a function wrapped in a maybe to
    /// this value. An absent function wins over an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x * 2);
    /// assert_eq!(Maybe::of(21).apply(function), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn apply<U, F>(self, function: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match function {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(apply) => self.map(apply),
        }
    }

    /// Pairs two present values; `Nothing` on either side wins.
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(T, B)> {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just((a, b)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Recovery Combinators
    // =========================================================================

    /// Replaces `Nothing` by invoking a recovery function; a present value
    /// is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.or_else(|| Maybe::Just(0)), Maybe::Just(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, recovery: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            just @ Self::Just(_) => just,
            Self::Nothing => recovery(),
        }
    }

    // =========================================================================
    // Terminal Folds
    // =========================================================================

    /// Exhaustively folds the maybe into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// let message = Maybe::of(42).fold(|v| format!("got {v}"), || "nothing".to_string());
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_just: F, on_nothing: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Folds the whole maybe through a single function, terminal to a
    /// pipeline.
    #[inline]
    pub fn finally<U, F>(self, operation: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        operation(self)
    }

    // =========================================================================
    // Channel Upgrades
    // =========================================================================

    /// Upgrades to an [`Outcome`], supplying the error for the absent case.
    ///
    /// The inverse of [`Outcome::into_maybe`], which forgets the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::{Maybe, Outcome};
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(
    ///     absent.to_outcome("missing".to_string()),
    ///     Outcome::Failure("missing".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error),
        }
    }

    /// Upgrades to an [`Outcome`], computing the error lazily.
    #[inline]
    pub fn to_outcome_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error()),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Unwraps one level of nesting; an outer `Nothing` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::of(Maybe::of(42)).flatten(), Maybe::Just(42));
    /// assert_eq!(Maybe::of(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Maybe<T> {
    /// Returns the value, or the type default if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::Nothing.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// The default maybe is `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Collapsing construction: `Some(value)` becomes `Just(value)` and
    /// `None` becomes `Nothing`. This is the sole conversion surface from
    /// optional values; an absent input never becomes "some wrapping
    /// nothing".
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// `Just(value)` becomes `Some(value)`, `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
