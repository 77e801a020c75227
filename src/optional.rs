//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, which is exactly one of
//! `Present(T)` or `Absent`. Absence carries no diagnostic payload; when a
//! caller needs to know *why* a value is missing, [`Fallible`] is the right
//! type instead.
//!
//! All combinators are total. The only operations that panic are
//! [`Optional::unwrap`] and [`Optional::expect`].
//!
//! # Examples
//!
//! ```rust
//! use totality::{Optional, absent, present};
//!
//! let port = present("8080")
//!     .map(|text| text.parse::<u16>().ok())
//!     .and_then(Optional::from)
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, present(8080));
//!
//! let missing: Optional<u16> = absent();
//! assert_eq!(missing.or(present(80)), present(80));
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use crate::error::AbsentValueError;
use crate::fallible::Fallible;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use totality::Optional;
///
/// let present: Optional<i32> = Optional::Present(42);
/// let absent: Optional<i32> = Optional::Absent;
///
/// assert_eq!(present.map(|x| x * 2), Optional::Present(84));
/// assert_eq!(absent.map(|x| x * 2), Optional::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A contained value.
    Present(T),
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);

/// Creates an `Optional` holding `value`.
///
/// # Examples
///
/// ```rust
/// use totality::{Optional, present};
///
/// assert_eq!(present(1), Optional::Present(1));
/// ```
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an absent `Optional`.
///
/// # Examples
///
/// ```rust
/// use totality::{Optional, absent};
///
/// let value: Optional<i32> = absent();
/// assert!(value.is_absent());
/// ```
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// Creates an `Optional` from a nullable value: `None` becomes `Absent`,
/// `Some(value)` becomes `Present(value)`.
///
/// # Examples
///
/// ```rust
/// use totality::{absent, optional_from, present};
///
/// assert_eq!(optional_from(Some(3)), present(3));
/// assert_eq!(optional_from::<i32>(None), absent());
/// ```
#[inline]
pub fn optional_from<T>(value: Option<T>) -> Optional<T> {
    Optional::from(value)
}

impl<T> Optional<T> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// This holds for every contained value, including zero, empty strings
    /// and `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, present};
    ///
    /// assert!(present(0).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert!(absent::<()>().is_absent());
    /// assert!(!present(false).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is `Present` and the value satisfies `predicate`.
    #[inline]
    pub fn is_present_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Reference Views
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::present;
    ///
    /// let name = present(String::from("totality"));
    /// assert_eq!(name.as_ref().map(|text| text.len()), present(8));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns an iterator over the contained value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::present;
    ///
    /// assert_eq!(present("value").expect("value should be present"), "value");
    /// ```
    ///
    /// ```rust,should_panic
    /// use totality::absent;
    ///
    /// absent::<i32>().expect("configuration must define a port");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`AbsentValueError`] payload if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::present;
    ///
    /// assert_eq!(present(5).unwrap(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => std::panic::panic_any(AbsentValueError),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated eagerly; prefer [`Optional::unwrap_or_else`]
    /// when producing it has a cost or a side effect.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    ///
    /// `function` is called only when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(absent().unwrap_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns the contained value, or `T::default()` if absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }

    /// Converts into a standard `Option`, mapping `Absent` to `None`.
    ///
    /// This is the total extraction for callers that want the "no value"
    /// marker of the standard library.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).into_option(), Some(1));
    /// assert_eq!(absent::<i32>().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Conversion to Fallible
    // =========================================================================

    /// Converts into a `Fallible`, mapping `Absent` to `Failure(error)`.
    ///
    /// `error` is evaluated eagerly; use [`Optional::ok_or_else`] for a lazily
    /// built error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, failure, present, success};
    ///
    /// assert_eq!(present(1).ok_or("missing"), success(1));
    /// assert_eq!(absent::<i32>().ok_or("missing"), failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Fallible<T, E> {
        match self {
            Self::Present(value) => Fallible::Success(value),
            Self::Absent => Fallible::Failure(error),
        }
    }

    /// Converts into a `Fallible`, mapping `Absent` to `Failure(function())`.
    ///
    /// `function` is called only when this is `Absent`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Fallible<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Fallible::Success(value),
            Self::Absent => Fallible::Failure(function()),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `function` is never called on `Absent`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the contained value, or computes a fallback
    /// with `default` when absent.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    /// Eliminates the `Optional` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// let describe = |value: totality::Optional<i32>| {
    ///     value.fold(|| "nothing".to_string(), |n| format!("got {n}"))
    /// };
    /// assert_eq!(describe(present(3)), "got 3");
    /// assert_eq!(describe(absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, D, F>(self, absent_function: D, present_function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.map_or_else(absent_function, present_function)
    }

    /// Keeps the contained value only if `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(4).filter(|n| n % 2 == 0), present(4));
    /// assert_eq!(present(3).filter(|n| n % 2 == 0), absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Pairs this value with `other` when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).zip(present("a")), present((1, "a")));
    /// assert_eq!(present(1).zip(absent::<&str>()), absent());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Present(value), Optional::Present(other_value)) => {
                Optional::Present((value, other_value))
            }
            _ => Optional::Absent,
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `Absent` if this is `Absent`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).and(present("b")), present("b"));
    /// assert_eq!(absent::<i32>().and(present("b")), absent());
    /// assert_eq!(present(1).and(absent::<&str>()), absent());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns this value if present, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).or(present(2)), present(1));
    /// assert_eq!(absent().or(present(2)), present(2));
    /// assert_eq!(absent::<i32>().or(absent()), absent());
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns whichever side is present when exactly one of them is.
    ///
    /// This is exclusive-or over presence, not over the values: two present
    /// values yield `Absent` even when they are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{absent, present};
    ///
    /// assert_eq!(present(1).xor(present(2)), absent());
    /// assert_eq!(present(1).xor(absent()), present(1));
    /// assert_eq!(absent().xor(present(2)), present(2));
    /// assert_eq!(absent::<i32>().xor(absent()), absent());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Monadic Chaining
    // =========================================================================

    /// Calls `function` with the contained value and returns its result.
    ///
    /// Returns `Absent` without calling `function` when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, absent, present};
    ///
    /// let half = |n: i32| if n % 2 == 0 { present(n / 2) } else { absent() };
    /// assert_eq!(present(8).and_then(half).and_then(half), present(2));
    /// assert_eq!(present(6).and_then(half).and_then(half), absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns this value if present, otherwise calls `function`.
    ///
    /// `function` is called only when this is `Absent`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Async counterpart of [`Optional::and_then`].
    ///
    /// Awaits the future returned by `function` when present. When absent,
    /// `function` is never called and the result is ready immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, present};
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = present(21).and_then_async(|n| async move { present(n * 2) }).await;
    /// assert_eq!(doubled, present(42));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        match self {
            Self::Present(value) => function(value).await,
            Self::Absent => Optional::Absent,
        }
    }

    /// Async counterpart of [`Optional::or_else`].
    ///
    /// `function` is called and awaited only when this is `Absent`.
    #[cfg(feature = "async")]
    pub async fn or_else_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function().await,
        }
    }
}

// =============================================================================
// Nested Operations
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::{Optional, absent, present};
    ///
    /// assert_eq!(present(present(1)).flatten(), present(1));
    /// assert_eq!(present(absent::<i32>()).flatten(), absent());
    /// assert_eq!(absent::<Optional<i32>>().flatten(), absent());
    ///
    /// // Only the outer level is removed.
    /// assert_eq!(present(present(present(1))).flatten(), present(present(1)));
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a nullable `Option` into an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::Optional;
    ///
    /// assert_eq!(Optional::from(Some(1)), Optional::Present(1));
    /// assert_eq!(Optional::<i32>::from(None), Optional::Absent);
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
