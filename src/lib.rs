//! # totality
//!
//! Explicit, type-safe representations of "a value that may be absent" and
//! "a computation that may fail", with combinators that never raise.
//!
//! ## Overview
//!
//! Instead of sentinel values and unwinding, producers hand back one of two
//! closed sum types and consumers chain combinators over them:
//!
//! - **[`Optional<T>`]**: `Present(T)` or `Absent`
//! - **[`Fallible<T, E>`]**: `Success(T)` or `Failure(E)`
//! - **Aggregation**: [`all_optionals`], [`any_optionals`], [`all_results`],
//!   [`any_results`], [`try_all_results`] and their tuple counterparts
//! - **Transposition**: [`transpose_to_fallible`], [`transpose_to_optional`]
//! - **Panic adapters**: [`wrap`], [`wrap_fallible`] and `wrap_async`
//! - **Discriminators**: [`is_optional_value`], [`is_fallible_result`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad, Bifunctor)
//! - `async`: Async combinators and `wrap_async`
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use totality::prelude::*;
//!
//! fn parse(input: &str) -> Fallible<i32, String> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let total = all_results([parse("1"), parse("2"), parse("3")])
//!     .map(|values| values.into_iter().sum::<i32>());
//! assert_eq!(total, success(6));
//!
//! let failed = all_results([parse("1"), parse("x"), parse("y")]);
//! assert_eq!(failed, failure("not a number: x".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sum types, their constructors, and every free function
/// and aggregation trait.
///
/// # Usage
///
/// ```rust
/// use totality::prelude::*;
///
/// assert!(present(1).is_present());
/// ```
pub mod prelude {
    pub use crate::aggregate::*;
    pub use crate::discriminate::*;
    pub use crate::error::*;
    pub use crate::fallible::*;
    pub use crate::optional::*;
    pub use crate::transpose::*;
    pub use crate::wrap::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod aggregate;
pub mod discriminate;
pub mod error;
pub mod fallible;
pub mod optional;
pub mod transpose;
pub mod wrap;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use aggregate::{
    AllOptionals, AllResults, AnyOptionals, AnyResults, TryAllResults, all_optionals,
    all_results, any_optionals, any_results, try_all_results,
};
pub use discriminate::{Algebraic, Variant, is_fallible_result, is_optional_value};
pub use error::{AbsentValueError, Panic};
pub use fallible::{Fallible, failure, success};
pub use optional::{Optional, absent, optional_from, present};
pub use transpose::{transpose_to_fallible, transpose_to_optional};
#[cfg(feature = "async")]
pub use wrap::wrap_async;
pub use wrap::{wrap, wrap_fallible};
