//! Adapters that absorb panicking or `Result`-returning code into
//! [`Fallible`].
//!
//! - [`wrap`] runs a closure and captures a panic as `Failure(Panic)`.
//! - `wrap_async` does the same across an `.await`, covering panics both
//!   while the future is created and while it is polled.
//! - [`wrap_fallible`] lifts a `Result`-returning closure.
//!
//! The captured [`Panic`] owns the original payload. Downcasting it yields
//! the raised value itself, not a copy.
//!
//! # Examples
//!
//! ```rust
//! use totality::{present, wrap};
//!
//! assert_eq!(wrap(|| 5).ok(), present(5));
//!
//! let panicked = wrap(|| -> i32 { panic!("boom") });
//! assert_eq!(panicked.unwrap_failure().message(), Some("boom"));
//! ```

#[cfg(feature = "async")]
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "async")]
use futures::FutureExt;

use crate::error::Panic;
use crate::fallible::Fallible;

/// Runs `computation`, capturing a panic as a failure.
///
/// A normal return becomes `Success(value)`. A panic becomes
/// `Failure(Panic)` holding the unmodified payload. The default panic hook
/// still runs, so the panic message is reported on stderr as usual.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use totality::wrap;
///
/// let raised = Arc::new("shared");
/// let thrown = Arc::clone(&raised);
/// let outcome = wrap(move || -> () { std::panic::panic_any(thrown) });
///
/// let caught = outcome.unwrap_failure().downcast::<Arc<&str>>().ok().unwrap();
/// assert!(Arc::ptr_eq(&caught, &raised));
/// ```
pub fn wrap<T, F>(computation: F) -> Fallible<T, Panic>
where
    F: FnOnce() -> T,
{
    Fallible::from(panic::catch_unwind(AssertUnwindSafe(computation))).map_err(Panic::new)
}

/// Runs a `Result`-returning `computation` and lifts its outcome.
///
/// # Examples
///
/// ```rust
/// use totality::{success, wrap_fallible};
///
/// assert_eq!(wrap_fallible(|| "7".parse::<u8>()), success(7));
/// assert!(wrap_fallible(|| "x".parse::<u8>()).is_failure());
/// ```
pub fn wrap_fallible<T, E, F>(computation: F) -> Fallible<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Fallible::from(computation())
}

/// Runs an async `computation`, capturing a panic as a failure.
///
/// `computation` is called once to obtain the future, which is then awaited.
/// The caller is suspended until the future settles. No task is spawned and
/// no timeout is applied; cancellation behaves as it does for the wrapped
/// future.
///
/// # Examples
///
/// ```rust
/// use totality::{present, wrap_async};
///
/// # futures::executor::block_on(async {
/// assert_eq!(wrap_async(|| async { 2 }).await.ok(), present(2));
///
/// let failed = wrap_async(|| async { if true { panic!("1") } else { 0 } }).await;
/// assert_eq!(failed.unwrap_failure().message(), Some("1"));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn wrap_async<T, F, Fut>(computation: F) -> Fallible<T, Panic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(computation)) {
        Ok(future) => future,
        Err(payload) => return Fallible::Failure(Panic::new(payload)),
    };
    Fallible::from(AssertUnwindSafe(future).catch_unwind().await).map_err(Panic::new)
}
