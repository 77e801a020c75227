//! Fallible type - the outcome of a computation that may fail.
//!
//! This module provides the `Fallible<T, E>` type, which is exactly one of
//! `Success(T)` or `Failure(E)`. The failure payload `E` is chosen by the
//! caller and is never inspected, wrapped, or transformed by this crate.
//!
//! `Fallible` mirrors [`Optional`] structurally, with `Success` playing the
//! role of `Present` and `Failure` the role of `Absent`, except that a failure
//! carries its reason.
//!
//! # Examples
//!
//! ```rust
//! use totality::{Fallible, failure, success};
//!
//! fn checked_divide(numerator: i32, denominator: i32) -> Fallible<i32, String> {
//!     if denominator == 0 {
//!         failure("division by zero".to_string())
//!     } else {
//!         success(numerator / denominator)
//!     }
//! }
//!
//! let chained = checked_divide(100, 5).and_then(|value| checked_divide(value, 2));
//! assert_eq!(chained, success(10));
//!
//! let failed = checked_divide(1, 0).map(|value| value + 1);
//! assert_eq!(failed.err().unwrap(), "division by zero");
//! ```

use std::fmt;
#[cfg(feature = "async")]
use std::future::Future;

use crate::optional::Optional;

/// The outcome of a computation: a success value or a failure payload.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use totality::Fallible;
///
/// let success: Fallible<i32, String> = Fallible::Success(42);
/// let failure: Fallible<i32, String> = Fallible::Failure("boom".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Fallible::Success(84));
/// assert_eq!(failure.map_err(|e| e.len()), Fallible::Failure(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fallible<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with a payload.
    Failure(E),
}

static_assertions::assert_impl_all!(Fallible<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Fallible<u8, ()>: Copy);

/// Creates a successful `Fallible`.
///
/// # Examples
///
/// ```rust
/// use totality::{Fallible, success};
///
/// let value: Fallible<i32, String> = success(1);
/// assert_eq!(value, Fallible::Success(1));
/// ```
#[inline]
pub const fn success<T, E>(value: T) -> Fallible<T, E> {
    Fallible::Success(value)
}

/// Creates a failed `Fallible`.
///
/// # Examples
///
/// ```rust
/// use totality::{Fallible, failure};
///
/// let value: Fallible<i32, &str> = failure("boom");
/// assert_eq!(value, Fallible::Failure("boom"));
/// ```
#[inline]
pub const fn failure<T, E>(error: E) -> Fallible<T, E> {
    Fallible::Failure(error)
}

impl<T, E> Fallible<T, E> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    #[inline]
    pub fn is_success_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose payload satisfies `predicate`.
    #[inline]
    pub fn is_failure_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Reference Views
    // =========================================================================

    /// Converts from `&Fallible<T, E>` to `Fallible<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Fallible<&T, &E> {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, using the failure payload itself as the
    /// panic payload. A catcher (for example [`wrap`](crate::wrap::wrap)) can
    /// downcast it back to `E` and gets the exact stored value.
    ///
    /// A panic payload must be `Send + 'static`, so `unwrap` is unavailable
    /// when `E` is not (for example `Rc<_>`). Use [`expect`](Self::expect)
    /// or [`unwrap_or_else`](Self::unwrap_or_else) for such payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Fallible, failure, success, wrap};
    ///
    /// assert_eq!(success::<i32, String>(3).unwrap(), 3);
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Rejected(&'static str);
    ///
    /// let rejected: Fallible<i32, Rejected> = failure(Rejected("quota"));
    /// let caught = wrap(move || rejected.unwrap()).unwrap_failure();
    /// assert_eq!(caught.downcast_ref::<Rejected>(), Some(&Rejected("quota")));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the failure payload if this is a
    /// `Failure`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called `Fallible::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the success value if this is a
    /// `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!("{message}: {value:?}"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure payload.
    ///
    /// `function` is called only when this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Fallible, failure, success};
    ///
    /// let recovered: Fallible<usize, String> = failure("four".to_string());
    /// assert_eq!(recovered.unwrap_or_else(|error| error.len()), 4);
    /// assert_eq!(success::<usize, String>(1).unwrap_or_else(|_| unreachable!()), 1);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Conversion to Optional
    // =========================================================================

    /// Converts into an `Optional` of the success value, discarding any
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, failure, success};
    ///
    /// assert_eq!(success::<i32, &str>(1).ok(), Optional::Present(1));
    /// assert_eq!(failure::<i32, &str>("boom").ok(), Optional::Absent);
    /// ```
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Converts into an `Optional` of the failure payload, discarding any
    /// success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, failure, success};
    ///
    /// assert_eq!(success::<i32, &str>(1).err(), Optional::Absent);
    /// assert_eq!(failure::<i32, &str>("boom").err(), Optional::Present("boom"));
    /// ```
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(error) => Optional::Present(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Fallible::Success(function(value)),
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Applies `function` to the failure payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{failure, success};
    ///
    /// let parsed = failure::<i32, &str>("12x").map_err(|input| format!("bad input: {input}"));
    /// assert_eq!(parsed, failure("bad input: 12x".to_string()));
    ///
    /// let kept = success::<i32, &str>(12).map_err(|input| input.len());
    /// assert_eq!(kept, success(12));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Fallible<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(error) => Fallible::Failure(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the failure
    /// payload.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Eliminates the `Fallible` by applying one of two functions.
    #[inline]
    pub fn fold<U, D, F>(self, failure_function: D, success_function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.map_or_else(failure_function, success_function)
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns this failure if this is a `Failure`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{failure, success};
    ///
    /// assert_eq!(success::<i32, &str>(1).and(success::<&str, &str>("b")), success("b"));
    /// assert_eq!(success::<i32, &str>(1).and(failure::<&str, &str>("late")), failure("late"));
    /// assert_eq!(failure::<i32, &str>("early").and(failure::<&str, &str>("late")), failure("early"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Fallible<U, E>) -> Fallible<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Returns this success if this is a `Success`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{failure, success};
    ///
    /// assert_eq!(success::<i32, &str>(1).or(success::<i32, u8>(2)), success(1));
    /// assert_eq!(failure::<i32, &str>("a").or(success::<i32, u8>(2)), success(2));
    /// assert_eq!(failure::<i32, &str>("a").or(failure::<i32, u8>(7)), failure(7));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Fallible<T, F>) -> Fallible<T, F> {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(_) => other,
        }
    }

    // =========================================================================
    // Monadic Chaining
    // =========================================================================

    /// Calls `function` with the success value and returns its result.
    ///
    /// Propagates a failure without calling `function`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Calls `function` with the failure payload and returns its result.
    ///
    /// Passes a success through without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Fallible, failure, success};
    ///
    /// let retry = |attempt: u32| -> Fallible<&str, u32> {
    ///     if attempt < 2 { failure(attempt + 1) } else { success("connected") }
    /// };
    /// assert_eq!(failure(0).or_else(retry).or_else(retry).or_else(retry), success("connected"));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Fallible<T, F>
    where
        O: FnOnce(E) -> Fallible<T, F>,
    {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Async counterpart of [`Fallible::and_then`].
    ///
    /// `function` is called and awaited only when this is a `Success`.
    #[cfg(feature = "async")]
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Fallible::Failure(error),
        }
    }

    /// Async counterpart of [`Fallible::or_else`].
    ///
    /// `function` is called and awaited only when this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Fallible, failure, success};
    ///
    /// # futures::executor::block_on(async {
    /// let recovered = failure::<i32, &str>("cache miss")
    ///     .or_else_async(|_| async { success::<i32, ()>(7) })
    ///     .await;
    /// assert_eq!(recovered, success(7));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn or_else_async<F, O, Fut>(self, function: O) -> Fallible<T, F>
    where
        O: FnOnce(E) -> Fut,
        Fut: Future<Output = Fallible<T, F>>,
    {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Failure(error) => function(error).await,
        }
    }
}

// =============================================================================
// Nested Operations
// =============================================================================

impl<T, E> Fallible<Fallible<T, E>, E> {
    /// Removes exactly one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Fallible, failure, success};
    ///
    /// let nested: Fallible<Fallible<i32, &str>, &str> = success(success(1));
    /// assert_eq!(nested.flatten(), success(1));
    ///
    /// let inner: Fallible<Fallible<i32, &str>, &str> = success(failure("inner"));
    /// assert_eq!(inner.flatten(), failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Fallible<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Fallible::Failure(error),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    /// Converts a `Result`: `Ok` becomes `Success`, `Err` becomes `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Fallible;
    ///
    /// let parsed: Fallible<i32, _> = "42".parse::<i32>().into();
    /// assert_eq!(parsed.ok().unwrap(), 42);
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
    #[inline]
    fn from(fallible: Fallible<T, E>) -> Self {
        fallible.into_result()
    }
}
