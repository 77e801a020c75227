//! Type class instances for [`Optional`] and [`Fallible`].
//!
//! Enabled by the `typeclass` feature. This module provides:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the carried value
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing dependent computations
//! - [`Bifunctor`]: Mapping over both sides of a `Fallible`
//!
//! `Optional<A>` is a functor in `A`. `Fallible<T, E>` is a functor in `T`
//! and a bifunctor in `(E, T)`, so `first` maps the error and `second` maps
//! the success value.
//!
//! # Examples
//!
//! ```rust
//! use totality::typeclass::{Applicative, Functor, Monad};
//! use totality::{Fallible, Optional, present, success};
//!
//! let port: Optional<u16> = present(8080);
//! assert_eq!(port.fmap(|p| p + 1), present(8081));
//!
//! let lifted: Fallible<i32, String> = <Fallible<(), String>>::pure(3);
//! let doubled = lifted.flat_map(|n| success(n * 2));
//! assert_eq!(doubled, success(6));
//! ```
//!
//! [`Optional`]: crate::Optional
//! [`Fallible`]: crate::Fallible

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
