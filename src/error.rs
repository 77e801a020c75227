//! Signal types raised or captured at the edges of the algebra.
//!
//! Every combinator in this crate is total. The two exceptions are the
//! `unwrap`/`expect` family, which convert back into a panic, and the
//! [`wrap`](crate::wrap::wrap) adapters, which convert a panic into a
//! [`Fallible`]. This module holds the payload types used on both sides.

use std::any::Any;
use std::fmt;

use crate::fallible::Fallible;

/// The panic payload raised by [`Optional::unwrap`](crate::Optional::unwrap)
/// on an `Absent` value.
///
/// The payload is raised with [`std::panic::panic_any`], so a catcher can
/// identify it by downcasting rather than by matching on a message.
///
/// # Examples
///
/// ```rust
/// use totality::{AbsentValueError, Optional, wrap};
///
/// let outcome = wrap(|| Optional::<i32>::Absent.unwrap());
/// let panic = outcome.unwrap_failure();
/// assert!(panic.is::<AbsentValueError>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError;

impl fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "called `Optional::unwrap()` on an `Absent` value")
    }
}

impl std::error::Error for AbsentValueError {}

/// A captured panic payload.
///
/// Produced by [`wrap`](crate::wrap::wrap) and `wrap_async` when the wrapped
/// computation panics. The original payload box is kept as-is: nothing is
/// cloned, formatted, or re-wrapped, so [`Panic::downcast`] hands back the
/// very value that was raised.
///
/// # Examples
///
/// ```rust
/// use totality::wrap;
///
/// let outcome = wrap(|| -> i32 { panic!("boom") });
/// let panic = outcome.unwrap_failure();
/// assert_eq!(panic.message(), Some("boom"));
/// ```
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wraps a payload obtained from `catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message if the payload is a `&str` or `String`.
    ///
    /// `panic!("literal")` produces a `&'static str` payload while formatted
    /// panics produce a `String`; both are recognized.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns `true` if the payload is of type `E`.
    #[inline]
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Returns a reference to the payload if it is of type `E`.
    #[inline]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Moves the payload out as an `E`.
    ///
    /// Returns `Success(payload)` when the payload is an `E`, otherwise
    /// hands `self` back unchanged as `Failure(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::wrap;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Boom(u8);
    ///
    /// let panic = wrap(|| -> () { std::panic::panic_any(Boom(7)) }).unwrap_failure();
    /// assert_eq!(panic.downcast::<Boom>().ok().unwrap(), Boom(7));
    /// ```
    pub fn downcast<E: Any>(self) -> Fallible<E, Self> {
        match self.payload.downcast::<E>() {
            Ok(value) => Fallible::Success(*value),
            Err(payload) => Fallible::Failure(Self { payload }),
        }
    }

    /// Unwraps the raw payload box.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the captured panic with its original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.debug_tuple("Panic").field(&message).finish(),
            None => formatter.debug_tuple("Panic").field(&"<non-string payload>").finish(),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => write!(formatter, "panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

impl From<Box<dyn Any + Send>> for Panic {
    #[inline]
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload)
    }
}
