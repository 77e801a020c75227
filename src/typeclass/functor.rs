//! Functor type class - mapping over the carried value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use totality::typeclass::Functor;
//! use totality::{Fallible, Optional, absent, failure, present};
//!
//! let found: Optional<i32> = present(5);
//! assert_eq!(found.fmap(|n| n.to_string()), present("5".to_string()));
//!
//! let missing: Optional<i32> = absent();
//! assert_eq!(missing.fmap(|n| n.to_string()), absent());
//!
//! let failed: Fallible<i32, &str> = failure("denied");
//! assert_eq!(failed.fmap(|n| n + 1), failure("denied"));
//! ```

use super::higher::TypeConstructor;
use crate::fallible::Fallible;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// See module-level documentation for laws.
///
/// # Examples
///
/// ```rust
/// use totality::typeclass::Functor;
/// use totality::{Optional, present};
///
/// let x: Optional<i32> = present(5);
/// let y: Optional<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Functor;
    /// use totality::{Fallible, success};
    ///
    /// let x: Fallible<i32, ()> = success(5);
    /// assert_eq!(x.fmap(|n| n * 2), success(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left untouched. Implementations for types that carry
    /// something besides the mapped value clone it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Functor;
    /// use totality::{Optional, present};
    ///
    /// let x: Optional<String> = present("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), present(5));
    /// assert!(x.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::typeclass::Functor;
    /// use totality::{Optional, absent, present};
    ///
    /// assert_eq!(present(5).replace("replaced"), present("replaced"));
    /// assert_eq!(absent::<i32>().replace("replaced"), absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Fallible<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Fallible<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Fallible<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Fallible<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Fallible::Success(function(value)),
            Self::Failure(error) => Fallible::Failure(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Optional<A> Tests
    // =========================================================================

    #[rstest]
    fn optional_fmap_present() {
        let x: Optional<i32> = Optional::Present(5);
        assert_eq!(x.fmap(|n| n.to_string()), Optional::Present("5".to_string()));
    }

    #[rstest]
    fn optional_fmap_absent() {
        let x: Optional<i32> = Optional::Absent;
        assert_eq!(x.fmap(|n| n.to_string()), Optional::Absent);
    }

    #[rstest]
    fn optional_fmap_ref_keeps_original() {
        let x: Optional<String> = Optional::Present("hello".to_string());
        assert_eq!(x.fmap_ref(|s| s.len()), Optional::Present(5));
        assert_eq!(x, Optional::Present("hello".to_string()));
    }

    #[rstest]
    fn optional_void() {
        assert_eq!(Optional::Present(5).void(), Optional::Present(()));
        assert_eq!(Optional::<i32>::Absent.void(), Optional::Absent);
    }

    // =========================================================================
    // Fallible<T, E> Tests
    // =========================================================================

    #[rstest]
    fn fallible_fmap_success() {
        let x: Fallible<i32, &str> = Fallible::Success(5);
        assert_eq!(x.fmap(|n| n * 3), Fallible::Success(15));
    }

    #[rstest]
    fn fallible_fmap_failure_skips_function() {
        let x: Fallible<i32, &str> = Fallible::Failure("denied");
        assert_eq!(x.fmap(|_| -> i32 { unreachable!() }), Fallible::Failure("denied"));
    }

    #[rstest]
    fn fallible_fmap_ref_clones_error() {
        let x: Fallible<i32, String> = Fallible::Failure("io".to_string());
        assert_eq!(x.fmap_ref(|n| n + 1), Fallible::Failure("io".to_string()));
        assert!(x.is_failure());
    }

    #[rstest]
    fn fallible_replace() {
        let x: Fallible<i32, ()> = Fallible::Success(1);
        assert_eq!(x.replace('r'), Fallible::Success('r'));
    }
}
