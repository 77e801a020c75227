//! Transposition between `Optional<Fallible<T, E>>` and
//! `Fallible<Optional<T>, E>`.
//!
//! The two conversions are exact inverses:
//!
//! | `Optional<Fallible<T, E>>` | `Fallible<Optional<T>, E>` |
//! |----------------------------|----------------------------|
//! | `Absent`                   | `Success(Absent)`          |
//! | `Present(Success(v))`      | `Success(Present(v))`      |
//! | `Present(Failure(e))`      | `Failure(e)`               |
//!
//! Both directions are available as free functions and as `transpose`
//! methods on the nested types.
//!
//! # Examples
//!
//! ```rust
//! use totality::{Fallible, Optional, present, success};
//! use totality::{transpose_to_fallible, transpose_to_optional};
//!
//! let lookup: Optional<Fallible<u16, String>> = present(success(8080));
//! let transposed = transpose_to_fallible(lookup);
//! assert_eq!(transposed, success(present(8080)));
//! assert_eq!(transpose_to_optional(transposed), present(success(8080)));
//! ```

use crate::fallible::Fallible;
use crate::optional::Optional;

/// Swaps an `Optional` of a `Fallible` into a `Fallible` of an `Optional`.
///
/// `Absent` maps to `Success(Absent)`; `Present(Success(v))` maps to
/// `Success(Present(v))`; `Present(Failure(e))` maps to `Failure(e)`.
///
/// # Examples
///
/// ```rust
/// use totality::{Fallible, Optional, absent, failure, present, success};
/// use totality::transpose_to_fallible;
///
/// let missing: Optional<Fallible<i32, &str>> = absent();
/// assert_eq!(transpose_to_fallible(missing), success(absent()));
///
/// let broken: Optional<Fallible<i32, &str>> = present(failure("parse"));
/// assert_eq!(transpose_to_fallible(broken), failure("parse"));
/// ```
#[inline]
pub fn transpose_to_fallible<T, E>(optional: Optional<Fallible<T, E>>) -> Fallible<Optional<T>, E> {
    match optional {
        Optional::Present(Fallible::Success(value)) => Fallible::Success(Optional::Present(value)),
        Optional::Present(Fallible::Failure(error)) => Fallible::Failure(error),
        Optional::Absent => Fallible::Success(Optional::Absent),
    }
}

/// Swaps a `Fallible` of an `Optional` into an `Optional` of a `Fallible`.
///
/// `Success(Absent)` maps to `Absent`; `Success(Present(v))` maps to
/// `Present(Success(v))`; `Failure(e)` maps to `Present(Failure(e))`.
///
/// # Examples
///
/// ```rust
/// use totality::{Fallible, Optional, absent, failure, present, success};
/// use totality::transpose_to_optional;
///
/// let empty: Fallible<Optional<i32>, &str> = success(absent());
/// assert_eq!(transpose_to_optional(empty), absent());
///
/// let broken: Fallible<Optional<i32>, &str> = failure("io");
/// assert_eq!(transpose_to_optional(broken), present(failure("io")));
/// ```
#[inline]
pub fn transpose_to_optional<T, E>(fallible: Fallible<Optional<T>, E>) -> Optional<Fallible<T, E>> {
    match fallible {
        Fallible::Success(Optional::Present(value)) => Optional::Present(Fallible::Success(value)),
        Fallible::Success(Optional::Absent) => Optional::Absent,
        Fallible::Failure(error) => Optional::Present(Fallible::Failure(error)),
    }
}

impl<T, E> Optional<Fallible<T, E>> {
    /// Method form of [`transpose_to_fallible`].
    #[inline]
    pub fn transpose(self) -> Fallible<Optional<T>, E> {
        transpose_to_fallible(self)
    }
}

impl<T, E> Fallible<Optional<T>, E> {
    /// Method form of [`transpose_to_optional`].
    #[inline]
    pub fn transpose(self) -> Optional<Fallible<T, E>> {
        transpose_to_optional(self)
    }
}
