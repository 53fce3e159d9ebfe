//! Conversion into a deferred outcome, used to flatten async mappers.

use std::future::Future;

use futures::future::{ready, Ready};

use crate::deferred::DeferredOutcome;
use crate::outcome::Outcome;

/// Anything that can stand in for a pending [`Outcome`].
///
/// Implemented for:
///
/// - [`Outcome`] itself, as an already-settled computation;
/// - [`DeferredOutcome`], unchanged;
/// - any `Future<Output = Outcome<S, E>>`.
///
/// [`DeferredOutcome::bind_async`] accepts mappers returning any of these,
/// so callers never have to care whether a step was synchronous.
///
/// # Example
///
/// ```rust
/// use wellspring::deferred::IntoDeferred;
/// use wellspring::Outcome;
///
/// # tokio_test::block_on(async {
/// let from_value = Outcome::<_, ()>::success(1).into_deferred();
/// let from_future = async { Outcome::<_, ()>::success(1) }.into_deferred();
/// assert_eq!(from_value.await, from_future.await);
/// # });
/// ```
pub trait IntoDeferred {
    /// Payload of the success variant.
    type Success;

    /// Payload of the error variant.
    type Error;

    /// The pending computation behind the returned deferred outcome.
    type Future: Future<Output = Outcome<Self::Success, Self::Error>>;

    /// Convert into a deferred outcome.
    fn into_deferred(self) -> DeferredOutcome<Self::Future>;
}

impl<S, E> IntoDeferred for Outcome<S, E> {
    type Success = S;
    type Error = E;
    type Future = Ready<Outcome<S, E>>;

    fn into_deferred(self) -> DeferredOutcome<Self::Future> {
        DeferredOutcome::new(ready(self))
    }
}

impl<Fut, S, E> IntoDeferred for DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, E>>,
{
    type Success = S;
    type Error = E;
    type Future = Fut;

    fn into_deferred(self) -> DeferredOutcome<Fut> {
        self
    }
}

impl<Fut, S, E> IntoDeferred for Fut
where
    Fut: Future<Output = Outcome<S, E>>,
{
    type Success = S;
    type Error = E;
    type Future = Fut;

    fn into_deferred(self) -> DeferredOutcome<Fut> {
        DeferredOutcome::new(self)
    }
}
