//! Outcome type - a success-or-failure value with a combinator algebra.
//!
//! This module provides the `Outcome<T, E>` type, which represents a value
//! that is either a `Success(T)` or a `Failure(E)`, together with the
//! combinators to compose fallible computations declaratively:
//!
//! - Transformation: `map`, `bind`, `bimap`, `map_error`
//! - Validation: `ensure`, `check`
//! - Side effects: `tap`, `tap_error`, `tap_if`
//! - Recovery: `compensate`
//! - Applicative combination: `apply`, `map2`, `map3`
//! - Terminal folds: `fold`, `finally`, `value_or`
//!
//! All combinators preserve the short-circuit law: once an outcome is a
//! `Failure`, no subsequent transformation function is invoked; the failure
//! propagates unchanged until a recovery combinator or a terminal fold
//! consumes it.
//!
//! # Examples
//!
//! ```rust
//! use railway::algebra::Outcome;
//!
//! fn parse_age(input: &str) -> Outcome<u8, String> {
//!     Outcome::from(input.parse::<u8>())
//!         .map_error(|_| format!("Cannot parse {input}"))
//!         .ensure(|age| *age >= 18, "Must be an adult".to_string())
//! }
//!
//! assert_eq!(parse_age("42"), Outcome::Success(42));
//! assert_eq!(parse_age("7"), Outcome::Failure("Must be an adult".to_string()));
//! assert_eq!(parse_age("x"), Outcome::Failure("Cannot parse x".to_string()));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::combinable::Combinable;
use super::maybe::Maybe;

/// A value that is either a success or a failure.
///
/// `Outcome<T, E>` is the modeled, expected result of a fallible operation.
/// Domain failures travel in the `Failure` channel and are composed with
/// combinators; they are never thrown. Misusing the API (for example calling
/// [`unwrap_success`](Self::unwrap_success) on a failure) is a contract
/// violation and panics immediately.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use railway::algebra::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
///
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(84));
///
/// let recovered = failure.compensate(|_| Outcome::<i32, String>::Success(0));
/// assert_eq!(recovered, Outcome::Success(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success variant, carrying the computed value.
    Success(T),
    /// The failure variant, carrying the diagnostic error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome into an `Option<T>`, consuming it.
    ///
    /// Returns `Some(value)` for a success, otherwise `None`. This is the
    /// idiomatic non-panicking accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.into_option(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>` of the failure, consuming it.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Forgets the error channel, converting into a [`Maybe`].
    ///
    /// A success maps to `Just(value)`, a failure maps to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.into_maybe(), Maybe::Just(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.into_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value. Reading the value of a failure
    /// is a contract violation, not a recoverable error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or panics with the supplied message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.expect_success("expected a parsed id"), 42);
    /// ```
    #[inline]
    pub fn expect_success(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{message}"),
        }
    }

    /// Returns the success value or the supplied fallback. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value or computes a fallback from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<usize, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.value_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    // =========================================================================
    // Transformation Combinators
    // =========================================================================

    /// Applies a function to the success value, leaving failures unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// assert_eq!(success.map(|x| x * 2), Outcome::Success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Outcome::Failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure value, leaving successes unchanged.
    ///
    /// The error type may change; the success channel is only relabeled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.map_error(|e| e.len()), Outcome::Failure(4));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Monadic composition: chains a function that itself returns an outcome.
    ///
    /// A success flows into `function`; a failure propagates unchanged
    /// without invoking it. The success type may change, the result is never
    /// double-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// fn reciprocal(x: f64) -> Outcome<f64, String> {
    ///     if x == 0.0 {
    ///         Outcome::Failure("division by zero".to_string())
    ///     } else {
    ///         Outcome::Success(1.0 / x)
    ///     }
    /// }
    ///
    /// let outcome: Outcome<f64, String> = Outcome::Success(4.0);
    /// assert_eq!(outcome.bind(reciprocal), Outcome::Success(0.25));
    ///
    /// let zero: Outcome<f64, String> = Outcome::Success(0.0);
    /// assert!(zero.bind(reciprocal).is_failure());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies exactly one of two mapping functions depending on the
    /// discriminant, potentially changing both channels at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// let mapped = success.bimap(|x| x * 2, |e: String| e.len());
    /// assert_eq!(mapped, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn bimap<U, F2, F, G>(self, on_success: F, on_failure: G) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(on_success(value)),
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Swaps the channels: a success becomes a failure and vice versa.
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Self::Success(value) => Outcome::Failure(value),
            Self::Failure(error) => Outcome::Success(error),
        }
    }

    // =========================================================================
    // Side-Effect Combinators
    // =========================================================================

    /// Invokes a side effect on the success value, returning the outcome
    /// unchanged. The return value of `operation` is discarded. Failures are
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// let unchanged = outcome.tap(|value| seen = Some(*value));
    /// assert_eq!(unchanged, Outcome::Success(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn tap<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            operation(value);
        }
        self
    }

    /// The error-channel dual of [`tap`](Self::tap): invoked only on failure.
    #[inline]
    pub fn tap_error<F>(self, operation: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            operation(error);
        }
        self
    }

    /// Like [`tap`](Self::tap), but the side effect runs only when the
    /// success value also passes the predicate. Failures and non-matching
    /// successes are untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let mut flagged = false;
    /// let outcome: Outcome<i32, String> = Outcome::Success(3);
    /// let unchanged = outcome.tap_if(|n| *n > 10, |_| flagged = true);
    /// assert_eq!(unchanged, Outcome::Success(3));
    /// assert!(!flagged);
    /// ```
    #[inline]
    pub fn tap_if<P, F>(self, predicate: P, operation: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            if predicate(value) {
                operation(value);
            }
        }
        self
    }

    // =========================================================================
    // Validation Combinators
    // =========================================================================

    /// Turns a success whose value fails the predicate into the supplied
    /// failure. Already-failed outcomes stay failed; passing successes are
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(-5);
    /// let checked = outcome.ensure(|age| *age >= 0, "negative age".to_string());
    /// assert_eq!(checked, Outcome::Failure("negative age".to_string()));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error)
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Sequences a validation step without changing the carried value.
    ///
    /// On success, runs `operation` on the value; if it fails, that failure
    /// propagates, otherwise the **original** value is returned unchanged
    /// and the operation's success value is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// fn audit(id: &u32) -> Outcome<String, String> {
    ///     if *id == 0 {
    ///         Outcome::Failure("reserved id".to_string())
    ///     } else {
    ///         Outcome::Success(format!("audited {id}"))
    ///     }
    /// }
    ///
    /// let outcome: Outcome<u32, String> = Outcome::Success(7);
    /// assert_eq!(outcome.check(audit), Outcome::Success(7));
    ///
    /// let reserved: Outcome<u32, String> = Outcome::Success(0);
    /// assert_eq!(reserved.check(audit), Outcome::Failure("reserved id".to_string()));
    /// ```
    #[inline]
    pub fn check<U, F>(self, operation: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => match operation(&value) {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    // =========================================================================
    // Recovery Combinators
    // =========================================================================

    /// Replaces a failure by invoking a recovery function that returns a
    /// brand-new outcome, possibly with a different error type. Successes
    /// are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// let recovered: Outcome<i32, u8> = failure.compensate(|_| Outcome::Success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn compensate<F2, F>(self, recovery: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    // =========================================================================
    // Applicative Combinators
    // =========================================================================

    /// Applicative application: applies a function wrapped in an outcome to
    /// this value.
    ///
    /// Tie-break rule: when both sides are failures, the **function-side
    /// failure wins**. This ordering is part of the contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::Failure("V".to_string());
    /// let function: Outcome<fn(i32) -> i32, String> = Outcome::Failure("F".to_string());
    /// assert_eq!(value.apply(function), Outcome::Failure("F".to_string()));
    /// ```
    #[inline]
    pub fn apply<U, F>(self, function: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match function {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(apply) => self.map(apply),
        }
    }

    /// Combines two independently-evaluated outcomes with a binary function.
    ///
    /// When both fail, the left-most failure (this one) wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let a: Outcome<i32, String> = Outcome::Success(1);
    /// let b: Outcome<i32, String> = Outcome::Success(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Outcome::Success(3));
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) => Outcome::Failure(error),
            (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Combines three independently-evaluated outcomes with a ternary
    /// function, selecting the left-most failure when several fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let a: Outcome<i32, String> = Outcome::Success(1);
    /// let b: Outcome<i32, String> = Outcome::Success(2);
    /// let c: Outcome<i32, String> = Outcome::Success(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Outcome::Success(6));
    /// ```
    #[inline]
    pub fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    // =========================================================================
    // Terminal Folds
    // =========================================================================

    /// Exhaustively folds the outcome into a single value by applying
    /// exactly one of two functions. No hidden state is retained afterward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// let message = outcome.fold(|v| format!("got {v}"), |e| format!("error: {e}"));
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Folds the whole outcome through a single function, terminal to a
    /// pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(outcome.finally(|o| o.is_success()));
    /// ```
    #[inline]
    pub fn finally<U, F>(self, operation: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        operation(self)
    }

    // =========================================================================
    // Panic Boundary (attempt family)
    // =========================================================================

    /// Invokes `operation`, converting a panic into a failure through
    /// `handler`. A normal return becomes a success.
    ///
    /// This is the single blessed boundary between panic-based and
    /// outcome-based error handling: no other combinator intercepts panics
    /// except the explicitly `_attempt`-suffixed ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::{Outcome, describe_panic};
    ///
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::attempt(|| panic!("bad input"), |payload| describe_panic(payload.as_ref()));
    /// assert_eq!(outcome, Outcome::Failure("bad input".to_string()));
    /// ```
    pub fn attempt<F, H>(operation: F, handler: H) -> Self
    where
        F: FnOnce() -> T,
        H: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(handler(payload)),
        }
    }

    /// Like [`map`](Self::map), but a panic raised by the mapping function
    /// is caught exactly once and converted into a failure through `handler`.
    pub fn map_attempt<U, F, H>(self, operation: F, handler: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(|| operation(value))) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(payload) => Outcome::Failure(handler(payload)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`bind`](Self::bind), but a panic raised by the chained function
    /// is caught exactly once and converted into a failure through `handler`.
    pub fn bind_attempt<U, F, H>(self, operation: F, handler: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        H: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(|| operation(value))) {
                Ok(outcome) => outcome,
                Err(payload) => Outcome::Failure(handler(payload)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`tap`](Self::tap), but a panic raised by the side effect is
    /// caught exactly once and converted into a failure through `handler`.
    pub fn tap_attempt<F, H>(self, operation: F, handler: H) -> Self
    where
        F: FnOnce(&T),
        H: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(|| operation(&value))) {
                Ok(()) => Self::Success(value),
                Err(payload) => Self::Failure(handler(payload)),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Like [`tap_if`](Self::tap_if), but a panic raised by the side effect
    /// is caught exactly once and converted into a failure through `handler`.
    /// The predicate itself is not intercepted.
    pub fn tap_if_attempt<P, F, H>(self, predicate: P, operation: F, handler: H) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T),
        H: FnOnce(Box<dyn Any + Send>) -> E,
    {
        match self {
            Self::Success(value) => {
                if !predicate(&value) {
                    return Self::Success(value);
                }
                match catch_unwind(AssertUnwindSafe(|| operation(&value))) {
                    Ok(()) => Self::Success(value),
                    Err(payload) => Self::Failure(handler(payload)),
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    // =========================================================================
    // Collection Construction
    // =========================================================================

    /// Collects a sequence of outcomes into a success with all values, or a
    /// single failure folded from **every** encountered error through
    /// `composer`. Never short-circuits; the whole sequence is consumed.
    ///
    /// An empty sequence is a success with an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let outcomes: Vec<Outcome<i32, String>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("a".to_string()),
    ///     Outcome::Failure("b".to_string()),
    /// ];
    /// let combined = Outcome::combine(outcomes, |left, right| format!("{left}; {right}"));
    /// assert_eq!(combined, Outcome::Failure("a; b".to_string()));
    /// ```
    pub fn combine<I, F>(outcomes: I, mut composer: F) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(E, E) -> E,
    {
        let mut values = Vec::new();
        let mut composed: Option<E> = None;
        for outcome in outcomes {
            match outcome {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => {
                    composed = Some(match composed {
                        None => error,
                        Some(previous) => composer(previous, error),
                    });
                }
            }
        }
        match composed {
            None => Outcome::Success(values),
            Some(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Combinable-based Operations
// =============================================================================

impl<T, E: Combinable> Outcome<T, E> {
    /// Collects a sequence of outcomes, folding all errors through the error
    /// type's own [`Combinable`] rule instead of a caller-supplied composer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let outcomes: Vec<Outcome<i32, Vec<String>>> = vec![
    ///     Outcome::Failure(vec!["a".to_string()]),
    ///     Outcome::Success(1),
    ///     Outcome::Failure(vec!["b".to_string()]),
    /// ];
    /// let combined = Outcome::combine_all(outcomes);
    /// assert_eq!(
    ///     combined,
    ///     Outcome::Failure(vec!["a".to_string(), "b".to_string()]),
    /// );
    /// ```
    pub fn combine_all<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::combine(outcomes, Combinable::combine)
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Unwraps one level of nesting. An outer failure wins over any inner
    /// content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, String>, String> =
    ///     Outcome::Success(Outcome::Success(42));
    /// assert_eq!(nested.flatten(), Outcome::Success(42));
    ///
    /// let inner: Outcome<Outcome<i32, String>, String> =
    ///     Outcome::Success(Outcome::Failure("inner".to_string()));
    /// assert_eq!(inner.flatten(), Outcome::Failure("inner".to_string()));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or the type default if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::algebra::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a std `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)`, `Err(error)` becomes
    /// `Failure(error)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a std `Result`.
    ///
    /// `Success(value)` becomes `Ok(value)`, `Failure(error)` becomes
    /// `Err(error)`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Panic Payload Helper
// =============================================================================

/// Extracts a human-readable message from a panic payload.
///
/// Panic payloads are `&'static str` for literal panics and `String` for
/// formatted ones; anything else yields a fixed placeholder.
///
/// # Examples
///
/// ```rust
/// use railway::algebra::{Outcome, describe_panic};
///
/// let outcome: Outcome<(), String> =
///     Outcome::attempt(|| panic!("oops"), |payload| describe_panic(payload.as_ref()));
/// assert_eq!(outcome.unwrap_failure(), "oops");
/// ```
pub fn describe_panic(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&'static str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "panic with non-string payload".to_string())
        },
        |message| (*message).to_string(),
    )
}
