//! Aggregation of several independent `Optional` or `Fallible` values.
//!
//! Each aggregation comes in two shapes:
//!
//! - a free function over any [`IntoIterator`] of a single element type,
//!   returning `Vec` collections;
//! - a trait method on tuples of arity 2 through 6, whose elements may carry
//!   different types wherever the output type allows it.
//!
//! | Operation           | Stops at          | Output on the stopping side          |
//! |---------------------|-------------------|--------------------------------------|
//! | `all_optionals`     | first `Absent`    | `Absent`                             |
//! | `any_optionals`     | first `Present`   | that value                           |
//! | `all_results`       | first `Failure`   | that exact failure payload           |
//! | `any_results`       | first `Success`   | that value                           |
//! | `try_all_results`   | never             | per-slot `Optional` failure payloads |
//!
//! Inputs are examined strictly left to right. The short-circuiting free
//! functions stop pulling from the iterator at the stopping element, so
//! lazily produced inputs after that point are never produced. Storage grows
//! with the elements actually pulled, never with the iterator's size hint.
//!
//! # Examples
//!
//! ```rust
//! use totality::{AllOptionals, TryAllResults, absent, failure, present, success};
//!
//! let pair = (present(1), present("one")).all_optionals();
//! assert_eq!(pair, present((1, "one")));
//!
//! let outcome = (success::<i32, &str>(1), failure::<bool, u8>(9)).try_all_results();
//! assert_eq!(outcome, failure((absent(), present(9))));
//! ```

use crate::fallible::Fallible;
use crate::optional::Optional;

// =============================================================================
// Homogeneous Sequences
// =============================================================================

/// Collects every present value, or returns `Absent` at the first absence.
///
/// # Examples
///
/// ```rust
/// use totality::{absent, all_optionals, present};
///
/// assert_eq!(all_optionals([present(1), present(2)]), present(vec![1, 2]));
/// assert_eq!(all_optionals([present(1), absent(), present(2)]), absent());
/// ```
pub fn all_optionals<T, I>(optionals: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    let mut values = Vec::new();
    for optional in optionals {
        match optional {
            Optional::Present(value) => values.push(value),
            Optional::Absent => return Optional::Absent,
        }
    }
    Optional::Present(values)
}

/// Returns the first present value, or `Absent` if every input is absent.
///
/// # Examples
///
/// ```rust
/// use totality::{absent, any_optionals, present};
///
/// assert_eq!(any_optionals([absent(), present(2), present(3)]), present(2));
/// assert_eq!(any_optionals::<i32, _>([absent(), absent()]), absent());
/// ```
pub fn any_optionals<T, I>(optionals: I) -> Optional<T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    for optional in optionals {
        if let Optional::Present(value) = optional {
            return Optional::Present(value);
        }
    }
    Optional::Absent
}

/// Collects every success value, or returns the first failure unchanged.
///
/// # Examples
///
/// ```rust
/// use totality::{all_results, failure, success};
///
/// assert_eq!(all_results([success::<i32, &str>(1), success(2)]), success(vec![1, 2]));
/// assert_eq!(all_results([success(1), failure("a"), failure("b")]), failure("a"));
/// ```
pub fn all_results<T, E, I>(results: I) -> Fallible<Vec<T>, E>
where
    I: IntoIterator<Item = Fallible<T, E>>,
{
    let mut values = Vec::new();
    for result in results {
        match result {
            Fallible::Success(value) => values.push(value),
            Fallible::Failure(error) => return Fallible::Failure(error),
        }
    }
    Fallible::Success(values)
}

/// Returns the first success, or every failure payload in input order.
///
/// Unlike [`all_results`], which surfaces only the first failure, a failed
/// `any_results` reports all of them.
///
/// # Examples
///
/// ```rust
/// use totality::{any_results, failure, success};
///
/// assert_eq!(any_results([failure("a"), success(2)]), success(2));
/// assert_eq!(any_results([failure::<i32, _>("a"), failure("b")]), failure(vec!["a", "b"]));
/// ```
pub fn any_results<T, E, I>(results: I) -> Fallible<T, Vec<E>>
where
    I: IntoIterator<Item = Fallible<T, E>>,
{
    let mut errors = Vec::new();
    for result in results {
        match result {
            Fallible::Success(value) => return Fallible::Success(value),
            Fallible::Failure(error) => errors.push(error),
        }
    }
    Fallible::Failure(errors)
}

/// Examines every input and reports each slot's failure, if any.
///
/// On failure the payload has one entry per input: `Present(error)` for a
/// failed input and `Absent` for a successful one. Every input is consumed
/// regardless of earlier failures.
///
/// # Examples
///
/// ```rust
/// use totality::{absent, failure, present, success, try_all_results};
///
/// assert_eq!(
///     try_all_results([success(1), failure("x"), failure("y")]),
///     failure(vec![absent(), present("x"), present("y")]),
/// );
/// assert_eq!(try_all_results([success::<i32, &str>(1), success(2)]), success(vec![1, 2]));
/// ```
pub fn try_all_results<T, E, I>(results: I) -> Fallible<Vec<T>, Vec<Optional<E>>>
where
    I: IntoIterator<Item = Fallible<T, E>>,
{
    let mut values = Vec::new();
    let mut failures = Vec::new();
    let mut failed = false;
    for result in results {
        match result {
            Fallible::Success(value) => {
                values.push(value);
                failures.push(Optional::Absent);
            }
            Fallible::Failure(error) => {
                failed = true;
                failures.push(Optional::Present(error));
            }
        }
    }
    if failed {
        Fallible::Failure(failures)
    } else {
        Fallible::Success(values)
    }
}

// =============================================================================
// Fixed-Arity Tuples
// =============================================================================

/// Tuples of `Optional`s that can be combined into an `Optional` of a tuple.
///
/// # Examples
///
/// ```rust
/// use totality::{AllOptionals, absent, present};
///
/// assert_eq!((present(1), present('a'), present("b")).all_optionals(), present((1, 'a', "b")));
/// assert_eq!((present(1), absent::<char>()).all_optionals(), absent());
/// ```
pub trait AllOptionals {
    /// The tuple of contained values.
    type Values;

    /// Returns every contained value, or `Absent` at the first absence.
    fn all_optionals(self) -> Optional<Self::Values>;
}

/// Tuples of `Optional`s sharing one value type.
pub trait AnyOptionals<T> {
    /// Returns the first present value, or `Absent` if none is present.
    fn any_optionals(self) -> Optional<T>;
}

/// Tuples of `Fallible`s sharing one failure type.
///
/// # Examples
///
/// ```rust
/// use totality::{AllResults, failure, success};
///
/// let outcome = (success::<i32, &str>(1), failure::<bool, &str>("no"), failure::<u8, &str>("late"))
///     .all_results();
/// assert_eq!(outcome, failure("no"));
/// ```
pub trait AllResults<E> {
    /// The tuple of success values.
    type Values;

    /// Returns every success value, or the first failure payload.
    fn all_results(self) -> Fallible<Self::Values, E>;
}

/// Tuples of `Fallible`s sharing one success type.
pub trait AnyResults<T> {
    /// The tuple of failure payloads.
    type Errors;

    /// Returns the first success, or every failure payload in order.
    fn any_results(self) -> Fallible<T, Self::Errors>;
}

/// Tuples of `Fallible`s examined exhaustively.
pub trait TryAllResults {
    /// The tuple of success values.
    type Values;
    /// The tuple of per-slot failure payloads.
    type Failures;

    /// Returns every success value, or a tuple marking each slot's failure.
    fn try_all_results(self) -> Fallible<Self::Values, Self::Failures>;
}

fn split<T, E>(fallible: Fallible<T, E>) -> (Optional<T>, Optional<E>) {
    match fallible {
        Fallible::Success(value) => (Optional::Present(value), Optional::Absent),
        Fallible::Failure(error) => (Optional::Absent, Optional::Present(error)),
    }
}

macro_rules! same_type {
    ($_ignored:ident, $target:ty) => {
        $target
    };
}

macro_rules! impl_tuple_aggregation {
    ($(($value:ident, $error:ident, $index:tt)),+) => {
        impl<$($value),+> AllOptionals for ($(Optional<$value>,)+) {
            type Values = ($($value,)+);

            fn all_optionals(self) -> Optional<Self::Values> {
                Optional::Present(($(
                    match self.$index {
                        Optional::Present(value) => value,
                        Optional::Absent => return Optional::Absent,
                    },
                )+))
            }
        }

        impl<T> AnyOptionals<T> for ($(same_type!($value, Optional<T>),)+) {
            fn any_optionals(self) -> Optional<T> {
                $(
                    if let Optional::Present(value) = self.$index {
                        return Optional::Present(value);
                    }
                )+
                Optional::Absent
            }
        }

        impl<E, $($value),+> AllResults<E> for ($(Fallible<$value, E>,)+) {
            type Values = ($($value,)+);

            fn all_results(self) -> Fallible<Self::Values, E> {
                Fallible::Success(($(
                    match self.$index {
                        Fallible::Success(value) => value,
                        Fallible::Failure(error) => return Fallible::Failure(error),
                    },
                )+))
            }
        }

        impl<T, $($error),+> AnyResults<T> for ($(Fallible<T, $error>,)+) {
            type Errors = ($($error,)+);

            fn any_results(self) -> Fallible<T, Self::Errors> {
                Fallible::Failure(($(
                    match self.$index {
                        Fallible::Success(value) => return Fallible::Success(value),
                        Fallible::Failure(error) => error,
                    },
                )+))
            }
        }

        impl<$($value, $error),+> TryAllResults for ($(Fallible<$value, $error>,)+) {
            type Values = ($($value,)+);
            type Failures = ($(Optional<$error>,)+);

            fn try_all_results(self) -> Fallible<Self::Values, Self::Failures> {
                let slots = ($(split(self.$index),)+);
                let failures = ($((slots.$index).1,)+);
                match ($((slots.$index).0,)+).all_optionals() {
                    Optional::Present(values) => Fallible::Success(values),
                    Optional::Absent => Fallible::Failure(failures),
                }
            }
        }
    };
}

impl_tuple_aggregation!((V1, E1, 0), (V2, E2, 1));
impl_tuple_aggregation!((V1, E1, 0), (V2, E2, 1), (V3, E3, 2));
impl_tuple_aggregation!((V1, E1, 0), (V2, E2, 1), (V3, E3, 2), (V4, E4, 3));
impl_tuple_aggregation!(
    (V1, E1, 0),
    (V2, E2, 1),
    (V3, E3, 2),
    (V4, E4, 3),
    (V5, E5, 4)
);
impl_tuple_aggregation!(
    (V1, E1, 0),
    (V2, E2, 1),
    (V3, E3, 2),
    (V4, E4, 3),
    (V5, E5, 4),
    (V6, E6, 5)
);
