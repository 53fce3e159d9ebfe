//! Extension trait for lifting arbitrary futures into deferred outcomes.

use std::future::Future;

use crate::deferred::DeferredOutcome;
use crate::outcome::Outcome;

/// Extension methods for every `Future`.
///
/// This trait is automatically implemented for all futures; import it to
/// start a deferred chain from an existing future.
///
/// # Example
///
/// ```rust
/// use wellspring::deferred::OutcomeFutureExt;
/// use wellspring::Outcome;
///
/// async fn fetch_count() -> Result<u64, String> {
///     Ok(41)
/// }
///
/// # tokio_test::block_on(async {
/// let count = fetch_count().deferred_result().map(|n| n + 1).await;
/// assert_eq!(count, Outcome::success(42));
///
/// let checked = async { Outcome::<u64, String>::success(5) }
///     .deferred()
///     .bind(|n| if n > 3 { Outcome::success(n) } else { Outcome::error("too few".into()) })
///     .await;
/// assert_eq!(checked, Outcome::success(5));
/// # });
/// ```
pub trait OutcomeFutureExt: Future + Sized {
    /// Wrap a future of an [`Outcome`] so combinators can be chained on it.
    fn deferred<S, E>(self) -> DeferredOutcome<Self>
    where
        Self: Future<Output = Outcome<S, E>>,
    {
        DeferredOutcome::new(self)
    }

    /// Wrap a future of a `Result`, settling `Ok` as Success and `Err` as Error.
    fn deferred_result<S, E>(self) -> DeferredOutcome<impl Future<Output = Outcome<S, E>>>
    where
        Self: Future<Output = Result<S, E>>,
    {
        crate::deferred::from_async(self)
    }
}

impl<Fut: Future> OutcomeFutureExt for Fut {}
