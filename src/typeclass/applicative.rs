//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - Lifting a pure value into the context (`pure`)
//! - Combining independent contexts with a function (`map2`, `map3`)
//! - Pairing contexts (`product`)
//!
//! For `Fallible`, combination keeps the first failure in argument order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::typeclass::Applicative;
//! use totality::{Optional, present};
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(x, present(42));
//!
//! assert_eq!(present(1).map2(present(2), |a, b| a + b), present(3));
//! assert_eq!(present(1).product(present("one")), present((1, "one")));
//! ```

use super::functor::Functor;
use crate::fallible::Fallible;
use crate::optional::Optional;

/// A type class for types that support lifting values and combining contexts.
///
/// See module-level documentation for laws.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Applicative;
    /// use totality::{Fallible, success};
    ///
    /// let lifted: Fallible<String, ()> = <Fallible<(), ()>>::pure("hi".to_string());
    /// assert_eq!(lifted, success("hi".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Applicative;
    /// use totality::{Fallible, failure, success};
    ///
    /// let a: Fallible<i32, &str> = success(1);
    /// let b: Fallible<i32, &str> = failure("b");
    /// assert_eq!(a.map2(b, |x, y| x + y), failure("b"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Applicative;
    /// use totality::{Optional, present};
    ///
    /// let function: Optional<fn(i32) -> i32> = present(|x| x + 1);
    /// assert_eq!(function.apply(present(5)), present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Present(function), Optional::Present(b)) => Optional::Present(function(b)),
            _ => Optional::Absent,
        }
    }
}

// =============================================================================
// Fallible<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Fallible<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Fallible<B, E> {
        Fallible::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Fallible<B, E>, function: F) -> Fallible<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Fallible::Success(b)) => Fallible::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Fallible::Failure(error)) => Fallible::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Fallible<B, E>,
        third: Fallible<C, E>,
        function: F,
    ) -> Fallible<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Fallible::Success(b), Fallible::Success(c)) => {
                Fallible::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Fallible::Failure(error), _)
            | (_, _, Fallible::Failure(error)) => Fallible::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Fallible<B, E>) -> Fallible<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Success(function), Fallible::Success(b)) => Fallible::Success(function(b)),
            (Self::Failure(error), _) | (_, Fallible::Failure(error)) => Fallible::Failure(error),
        }
    }
}
