//! Runtime discrimination of `Optional` and `Fallible` values.
//!
//! Two tools are offered:
//!
//! - [`is_optional_value`] and [`is_fallible_result`] inspect a `&dyn Any`
//!   and report whether it holds an `Optional<T>` or `Fallible<T, E>` for
//!   the given parameters. Any other value, including `Option`, `Result`
//!   and lookalike structs, answers `false`.
//! - The sealed [`Algebraic`] trait reports which [`Variant`] a value holds
//!   without knowing its payload types.
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//! use totality::{Algebraic, Optional, Variant, is_optional_value, present};
//!
//! let value: Optional<i32> = present(1);
//! assert!(is_optional_value::<i32>(&value as &dyn Any));
//! assert!(!is_optional_value::<i32>(&Some(1) as &dyn Any));
//! assert_eq!(value.variant(), Variant::Present);
//! ```

use std::any::Any;
use std::fmt;

use crate::fallible::Fallible;
use crate::optional::Optional;

/// Returns `true` if `value` is an `Optional<T>`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use totality::{absent, is_optional_value, Optional};
///
/// let empty: Optional<String> = absent();
/// assert!(is_optional_value::<String>(&empty as &dyn Any));
/// assert!(!is_optional_value::<String>(&"text" as &dyn Any));
/// ```
#[inline]
#[must_use]
pub fn is_optional_value<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Optional<T>>()
}

/// Returns `true` if `value` is a `Fallible<T, E>`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use totality::{failure, is_fallible_result, Fallible};
///
/// let failed: Fallible<u8, String> = failure("bad".to_string());
/// assert!(is_fallible_result::<u8, String>(&failed as &dyn Any));
/// assert!(!is_fallible_result::<u8, String>(&Err::<u8, String>("bad".into()) as &dyn Any));
/// ```
#[inline]
#[must_use]
pub fn is_fallible_result<T: 'static, E: 'static>(value: &dyn Any) -> bool {
    value.is::<Fallible<T, E>>()
}

/// The variant a value of this crate currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `Optional::Present`.
    Present,
    /// `Optional::Absent`.
    Absent,
    /// `Fallible::Success`.
    Success,
    /// `Fallible::Failure`.
    Failure,
}

impl Variant {
    /// Returns `true` for the variants of `Optional`.
    #[inline]
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Present | Self::Absent)
    }

    /// Returns `true` for the variants of `Fallible`.
    #[inline]
    #[must_use]
    pub const fn is_fallible(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Success => "Success",
            Self::Failure => "Failure",
        };
        formatter.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for crate::optional::Optional<T> {}
    impl<T, E> Sealed for crate::fallible::Fallible<T, E> {}
}

/// Implemented only by `Optional` and `Fallible`.
///
/// Lets generic code ask which variant a value holds without matching on
/// its concrete type.
///
/// # Examples
///
/// ```rust
/// use totality::{Algebraic, Variant, failure, present, Fallible, Optional};
///
/// fn describe<V: Algebraic>(value: &V) -> String {
///     value.variant().to_string()
/// }
///
/// let found: Optional<u8> = present(3);
/// let failed: Fallible<u8, &str> = failure("x");
/// assert_eq!(describe(&found), "Present");
/// assert_eq!(describe(&failed), "Failure");
/// assert_eq!(failed.variant(), Variant::Failure);
/// ```
pub trait Algebraic: sealed::Sealed {
    /// Returns the variant `self` holds.
    fn variant(&self) -> Variant;
}

impl<T> Algebraic for Optional<T> {
    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Self::Present(_) => Variant::Present,
            Self::Absent => Variant::Absent,
        }
    }
}

impl<T, E> Algebraic for Fallible<T, E> {
    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }
}
