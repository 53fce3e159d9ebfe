//! Type-erased deferred outcomes for opt-in boxing.
//!
//! Use boxing when you need to:
//! - Store different chains in a collection
//! - Return different chains from match arms
//! - Build recursive chains

use std::future::Future;

use futures::future::{BoxFuture, LocalBoxFuture};
use futures::FutureExt;

use crate::deferred::DeferredOutcome;
use crate::outcome::Outcome;

/// A deferred outcome backed by a boxed `Send` future.
///
/// # Example
///
/// ```rust
/// use wellspring::deferred::{self, BoxedDeferred};
/// use wellspring::Outcome;
///
/// fn countdown(n: u32) -> BoxedDeferred<'static, u32, String> {
///     if n == 0 {
///         deferred::success(0).boxed()
///     } else {
///         deferred::success(n)
///             .bind_async(move |x| countdown(x - 1).map(move |sum| x + sum))
///             .boxed()
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(countdown(4).await, Outcome::success(10));
/// # });
/// ```
pub type BoxedDeferred<'a, S, E> = DeferredOutcome<BoxFuture<'a, Outcome<S, E>>>;

/// A deferred outcome backed by a boxed future that is not `Send`.
pub type LocalBoxedDeferred<'a, S, E> = DeferredOutcome<LocalBoxFuture<'a, Outcome<S, E>>>;

impl<Fut, S, E> DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, E>>,
{
    /// Erase the chain's type behind a boxed `Send` future.
    pub fn boxed<'a>(self) -> BoxedDeferred<'a, S, E>
    where
        Fut: Send + 'a,
    {
        DeferredOutcome::new(self.inner.boxed())
    }

    /// Erase the chain's type behind a boxed future that need not be `Send`.
    pub fn boxed_local<'a>(self) -> LocalBoxedDeferred<'a, S, E>
    where
        Fut: 'a,
    {
        DeferredOutcome::new(self.inner.boxed_local())
    }
}
