//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Fallible<_, E>` as type
//! constructors directly. [`TypeConstructor`] works around this with a GAT
//! naming the same constructor applied to another type.
//!
//! # Example
//!
//! ```rust
//! use totality::typeclass::TypeConstructor;
//! use totality::{Optional, present};
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Optional<String> = reset(present(42));
//! assert_eq!(emptied, Optional::Absent);
//! ```

use crate::fallible::Fallible;
use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be equivalent to `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`; for `Fallible<i32, E>` it is also
    /// `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Fallible<T, E> {
    type Inner = T;
    type WithType<B> = Fallible<B, E>;
}
