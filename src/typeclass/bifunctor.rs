//! Mapping over both sides of a [`Fallible`].
//!
//! `Fallible<T, E>` implements `Bifunctor<E, T>`: the failure payload is the
//! left parameter and the success value is the right one. `first` is
//! therefore `map_err` and `second` is `map`, which keeps `second` in line
//! with `Functor::fmap`. Only the side that is actually held is touched; the
//! closure for the other side is dropped without being called.
//!
//! # Laws
//!
//! ```text
//! fallible.bimap(|e| e, |t| t) == fallible
//! fallible.bimap(|e| g(f(e)), |t| k(h(t))) == fallible.bimap(f, h).bimap(g, k)
//! fallible.bimap(f, h) == fallible.first(f).second(h) == fallible.second(h).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::typeclass::Bifunctor;
//! use totality::{Fallible, failure, success};
//!
//! let failed: Fallible<i32, &str> = failure("timeout");
//! assert_eq!(failed.bimap(|e| e.len(), |n| n * 2), failure(7));
//!
//! let loaded: Fallible<i32, &str> = success(21);
//! assert_eq!(loaded.bimap(|e| e.len(), |n| n * 2), success(42));
//! ```

use crate::fallible::Fallible;

/// Two-sided mapping, with `Left` the failure payload and `Right` the
/// success value of a [`Fallible`].
pub trait Bifunctor<Left, Right> {
    /// The `Fallible` produced after mapping, written left side first:
    /// `Target<NewError, NewValue> = Fallible<NewValue, NewError>`.
    type Target<NewLeft, NewRight>;

    /// Maps the failure payload with `on_failure` or the success value with
    /// `on_success`, whichever is held.
    fn bimap<NewLeft, NewRight, F, G>(self, on_failure: F, on_success: G) -> Self::Target<NewLeft, NewRight>
    where
        F: FnOnce(Left) -> NewLeft,
        G: FnOnce(Right) -> NewRight;

    /// Maps the failure payload; a success passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Bifunctor;
    /// use totality::{Fallible, failure};
    ///
    /// let failed: Fallible<i32, i32> = failure(404);
    /// assert_eq!(failed.first(|code| format!("HTTP {code}")), failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    fn first<NewLeft, F>(self, function: F) -> Self::Target<NewLeft, Right>
    where
        F: FnOnce(Left) -> NewLeft,
        Self: Sized,
    {
        self.bimap(function, |value| value)
    }

    /// Maps the success value; a failure passes through unchanged.
    #[inline]
    fn second<NewRight, G>(self, function: G) -> Self::Target<Left, NewRight>
    where
        G: FnOnce(Right) -> NewRight,
        Self: Sized,
    {
        self.bimap(|error| error, function)
    }

    /// Borrowing form of [`bimap`](Self::bimap).
    fn bimap_ref<NewLeft, NewRight, F, G>(&self, on_failure: F, on_success: G) -> Self::Target<NewLeft, NewRight>
    where
        F: FnOnce(&Left) -> NewLeft,
        G: FnOnce(&Right) -> NewRight;

    /// Maps a borrowed failure payload, cloning the success value when that
    /// is what the `Fallible` holds.
    #[inline]
    fn first_ref<NewLeft, F>(&self, function: F) -> Self::Target<NewLeft, Right>
    where
        Right: Clone,
        F: FnOnce(&Left) -> NewLeft,
        Self: Sized,
    {
        self.bimap_ref(function, Right::clone)
    }

    /// Maps a borrowed success value, cloning the failure payload when that
    /// is what the `Fallible` holds.
    #[inline]
    fn second_ref<NewRight, G>(&self, function: G) -> Self::Target<Left, NewRight>
    where
        Left: Clone,
        G: FnOnce(&Right) -> NewRight,
        Self: Sized,
    {
        self.bimap_ref(Left::clone, function)
    }
}

impl<T, E> Bifunctor<E, T> for Fallible<T, E> {
    type Target<NewError, NewValue> = Fallible<NewValue, NewError>;

    #[inline]
    fn bimap<NewError, NewValue, F, G>(self, on_failure: F, on_success: G) -> Fallible<NewValue, NewError>
    where
        F: FnOnce(E) -> NewError,
        G: FnOnce(T) -> NewValue,
    {
        match self {
            Self::Success(value) => Fallible::Success(on_success(value)),
            Self::Failure(error) => Fallible::Failure(on_failure(error)),
        }
    }

    #[inline]
    fn first<NewError, F>(self, function: F) -> Fallible<T, NewError>
    where
        F: FnOnce(E) -> NewError,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<NewValue, G>(self, function: G) -> Fallible<NewValue, E>
    where
        G: FnOnce(T) -> NewValue,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<NewError, NewValue, F, G>(&self, on_failure: F, on_success: G) -> Fallible<NewValue, NewError>
    where
        F: FnOnce(&E) -> NewError,
        G: FnOnce(&T) -> NewValue,
    {
        match self {
            Self::Success(value) => Fallible::Success(on_success(value)),
            Self::Failure(error) => Fallible::Failure(on_failure(error)),
        }
    }
}
