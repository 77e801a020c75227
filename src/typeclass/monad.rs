//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::typeclass::Monad;
//! use totality::{Fallible, failure, success};
//!
//! fn parse_positive(input: &str) -> Fallible<i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(n) if n > 0 => success(n),
//!         _ => failure(format!("not positive: {input}")),
//!     }
//! }
//!
//! let doubled = success::<_, String>("21").flat_map(parse_positive).flat_map(|n| success(n * 2));
//! assert_eq!(doubled, success(42));
//! ```

use super::applicative::Applicative;
use crate::fallible::Fallible;
use crate::optional::Optional;

/// A type class for types that support sequencing of computations.
///
/// `Optional` and `Fallible` already expose an inherent `and_then`. Method
/// call syntax resolves to the inherent method, so the trait's `and_then`
/// is reached through `Monad::and_then` in generic code.
pub trait Monad: Applicative {
    /// Applies a function that returns a monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Monad;
    /// use totality::{Optional, absent, present};
    ///
    /// let halve = |n: i32| if n % 2 == 0 { present(n / 2) } else { absent() };
    /// assert_eq!(present(10).flat_map(halve), present(5));
    /// assert_eq!(present(7).flat_map(halve), absent());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Monad;
    /// use totality::{Fallible, failure, success};
    ///
    /// let first: Fallible<i32, &str> = success(1);
    /// assert_eq!(first.then(success("next")), success("next"));
    ///
    /// let first: Fallible<i32, &str> = failure("stop");
    /// assert_eq!(first.then(success("next")), failure("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Fallible<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Fallible<B, E>
    where
        F: FnOnce(T) -> Fallible<B, E>,
    {
        Self::and_then(self, function)
    }
}
