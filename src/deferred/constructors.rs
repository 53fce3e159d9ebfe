//! Constructor functions for deferred outcomes.

use std::future::{Future, IntoFuture};

use futures::future::{ready, Ready};

use crate::deferred::DeferredOutcome;
use crate::fault::Fault;
use crate::outcome::Outcome;

/// Lift an already-settled outcome.
///
/// # Example
///
/// ```rust
/// use wellspring::deferred;
/// use wellspring::Outcome;
///
/// # tokio_test::block_on(async {
/// let outcome = deferred::resolved(Outcome::<_, ()>::success(1)).map(|x| x + 1).await;
/// assert_eq!(outcome, Outcome::success(2));
/// # });
/// ```
pub fn resolved<S, E>(outcome: Outcome<S, E>) -> DeferredOutcome<Ready<Outcome<S, E>>> {
    DeferredOutcome::new(ready(outcome))
}

/// Lift a success payload.
pub fn success<S, E>(value: S) -> DeferredOutcome<Ready<Outcome<S, E>>> {
    resolved(Outcome::success(value))
}

/// Lift an error payload.
pub fn error<S, E>(value: E) -> DeferredOutcome<Ready<Outcome<S, E>>> {
    resolved(Outcome::error(value))
}

/// Wrap a fallible future without awaiting it.
///
/// When the chain is awaited, `Ok` settles as Success and `Err` as Error.
/// See [`Outcome::from_async`].
///
/// # Example
///
/// ```rust
/// use wellspring::deferred;
/// use wellspring::Outcome;
///
/// async fn read_setting() -> Result<String, std::io::Error> {
///     Ok("verbose".to_string())
/// }
///
/// # tokio_test::block_on(async {
/// let level = deferred::from_async(read_setting())
///     .map_error(|e| e.kind())
///     .map(|s| s.len())
///     .await;
/// assert_eq!(level, Outcome::success(7));
/// # });
/// ```
pub fn from_async<Fut, S, E>(pending: Fut) -> DeferredOutcome<impl Future<Output = Outcome<S, E>>>
where
    Fut: IntoFuture<Output = Result<S, E>>,
{
    DeferredOutcome::new(Outcome::from_async(pending))
}

/// Wrap a future, capturing a panic raised while polling it as an Error.
///
/// See [`Outcome::from_async_catching`].
pub fn from_async_catching<Fut, S>(
    pending: Fut,
) -> DeferredOutcome<impl Future<Output = Outcome<S, Fault>>>
where
    Fut: Future<Output = S>,
{
    DeferredOutcome::new(Outcome::from_async_catching(pending))
}

/// Run `f` now, capturing a panic, and lift the result.
///
/// See [`Outcome::from_throwing`].
pub fn from_throwing<S, F>(f: F) -> DeferredOutcome<Ready<Outcome<S, Fault>>>
where
    F: FnOnce() -> S,
{
    resolved(Outcome::from_throwing(f))
}
