//! Outcome combinators that chain through a pending future.
//!
//! A [`DeferredOutcome`] wraps any `Future<Output = Outcome<S, E>>` and
//! re-exposes the [`Outcome`] API on it. Every chain link takes the pending
//! future by value, awaits it once, applies the synchronous combinator and
//! hands back a new `DeferredOutcome`. Nothing runs until the end of the
//! chain is awaited, and since each future is moved into the next link it
//! can never be driven to completion twice.
//!
//! ```text
//! resolved(Success(1)) --map--> Pending --bind--> Pending --.await--> Outcome
//! ```
//!
//! # Zero-Cost by Default
//!
//! Chain links return `DeferredOutcome<impl Future<...>>`; no combinator
//! allocates. Call [`boxed`](DeferredOutcome::boxed) when a nameable type is
//! needed: recursion, collections, or different chains in match arms.
//!
//! # Async Mappers
//!
//! [`bind_async`](DeferredOutcome::bind_async) and
//! [`bind_error_async`](DeferredOutcome::bind_error_async) accept mappers
//! that return anything implementing [`IntoDeferred`]: a plain [`Outcome`],
//! another `DeferredOutcome`, or any future of an `Outcome`. Whatever comes
//! back is awaited in place, so a chain never yields a pending of a pending.
//!
//! # Example
//!
//! ```rust
//! use wellspring::deferred::{self, DeferredOutcome};
//! use wellspring::Outcome;
//!
//! async fn lookup_quota(user: &'static str) -> Outcome<u32, String> {
//!     match user {
//!         "alice" => Outcome::success(10),
//!         _ => Outcome::error(format!("unknown user {}", user)),
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let remaining = deferred::success::<_, String>("alice")
//!     .bind_async(lookup_quota)
//!     .map(|quota| quota - 3)
//!     .recover(|_| 0)
//!     .resolve_success_payload()
//!     .await;
//!
//! assert_eq!(remaining, 7);
//! # });
//! ```

mod boxed;
mod constructors;
mod ext;
mod into_deferred;
#[cfg(feature = "tracing")]
pub mod tracing;

use std::convert::Infallible;
use std::future::{Future, IntoFuture};

use crate::fault::UnwrappedError;
use crate::outcome::Outcome;

pub use boxed::{BoxedDeferred, LocalBoxedDeferred};
pub use constructors::{error, from_async, from_async_catching, from_throwing, resolved, success};
pub use ext::OutcomeFutureExt;
pub use into_deferred::IntoDeferred;

#[cfg(feature = "tracing")]
pub use self::tracing::DeferredTracingExt;

/// A pending computation that will settle to exactly one [`Outcome`].
///
/// Build one with [`DeferredOutcome::new`], the constructors in this module
/// ([`resolved`], [`success`], [`error`], [`from_async`]), or
/// [`OutcomeFutureExt::deferred`]. Await it directly to get the `Outcome`,
/// or chain combinators first.
///
/// # Example
///
/// ```rust
/// use wellspring::deferred::DeferredOutcome;
/// use wellspring::Outcome;
///
/// # tokio_test::block_on(async {
/// let outcome = DeferredOutcome::new(async { Outcome::<_, String>::success(20) })
///     .map(|x| x + 1)
///     .bind(|x| if x > 20 { Outcome::success(x * 2) } else { Outcome::error("small".into()) })
///     .await;
///
/// assert_eq!(outcome, Outcome::success(42));
/// # });
/// ```
#[must_use = "deferred outcomes do nothing unless awaited"]
pub struct DeferredOutcome<Fut> {
    pub(crate) inner: Fut,
}

impl<Fut> std::fmt::Debug for DeferredOutcome<Fut> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredOutcome")
            .field("inner", &"<future>")
            .finish()
    }
}

impl<Fut> DeferredOutcome<Fut> {
    /// Wrap a pending computation.
    #[inline]
    pub fn new(pending: Fut) -> Self {
        DeferredOutcome { inner: pending }
    }

    /// Give back the wrapped future without awaiting it.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.inner
    }
}

impl<Fut: Future> IntoFuture for DeferredOutcome<Fut> {
    type Output = Fut::Output;
    type IntoFuture = Fut;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<Fut, S, E> DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, E>>,
{
    // ========== Chain links ==========

    /// Transform the success payload once the computation settles.
    ///
    /// See [`Outcome::map`].
    pub fn map<S2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S2, E>>>
    where
        F: FnOnce(S) -> S2,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.map(f) })
    }

    /// Transform the error payload once the computation settles.
    ///
    /// See [`Outcome::map_error`].
    pub fn map_error<E2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, E2>>>
    where
        F: FnOnce(E) -> E2,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.map_error(f) })
    }

    /// Chain a synchronous step that may fail.
    ///
    /// See [`Outcome::bind`]. For a mapper that is itself asynchronous use
    /// [`bind_async`](DeferredOutcome::bind_async).
    pub fn bind<S2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S2, E>>>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.bind(f) })
    }

    /// Alias for [`bind`](DeferredOutcome::bind).
    pub fn and_then<S2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S2, E>>>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        self.bind(f)
    }

    /// Chain a synchronous recovery step on the error payload.
    ///
    /// See [`Outcome::bind_error`].
    pub fn bind_error<E2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, E2>>>
    where
        F: FnOnce(E) -> Outcome<S, E2>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.bind_error(f) })
    }

    /// Alias for [`bind_error`](DeferredOutcome::bind_error).
    pub fn or_else<E2, F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, E2>>>
    where
        F: FnOnce(E) -> Outcome<S, E2>,
    {
        self.bind_error(f)
    }

    /// Chain a step whose result may still be pending.
    ///
    /// The mapper may return an [`Outcome`], a [`DeferredOutcome`] or any
    /// future of an `Outcome`; it is awaited in place and the chain stays a
    /// single level deep.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::deferred;
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let doubled = deferred::success::<i32, &str>(4)
    ///     .bind_async(|x| async move { Outcome::success(x * 2) })
    ///     .bind_async(|x| Outcome::success(x + 1))
    ///     .bind_async(|x| deferred::success(x * 10))
    ///     .await;
    ///
    /// assert_eq!(doubled, Outcome::success(90));
    /// # });
    /// ```
    pub fn bind_async<S2, F, R>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S2, E>>>
    where
        F: FnOnce(S) -> R,
        R: IntoDeferred<Success = S2, Error = E>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move {
            match pending.await.map(|s| f(s).into_deferred()) {
                Outcome::Success(next) => next.inner.await,
                Outcome::Error(e) => Outcome::Error(e),
            }
        })
    }

    /// Chain a recovery step on the error payload whose result may still be pending.
    ///
    /// The error-side counterpart of [`bind_async`](DeferredOutcome::bind_async).
    pub fn bind_error_async<E2, F, R>(
        self,
        f: F,
    ) -> DeferredOutcome<impl Future<Output = Outcome<S, E2>>>
    where
        F: FnOnce(E) -> R,
        R: IntoDeferred<Success = S, Error = E2>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move {
            match pending.await.map_error(|e| f(e).into_deferred()) {
                Outcome::Success(s) => Outcome::Success(s),
                Outcome::Error(next) => next.inner.await,
            }
        })
    }

    /// Transform the success payload with an asynchronous mapper.
    ///
    /// The mapper must return something awaitable. A mapper that returns the
    /// new payload directly belongs in [`map`](DeferredOutcome::map); wrap it
    /// in `std::future::ready` when one call site has to take both shapes.
    /// Either way the chain settles to the same outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::deferred;
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let len = deferred::success::<_, ()>("wellspring")
    ///     .map_async(|s| async move { s.len() })
    ///     .await;
    /// assert_eq!(len, Outcome::success(10));
    /// # });
    /// ```
    pub fn map_async<S2, F, R>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S2, E>>>
    where
        F: FnOnce(S) -> R,
        R: IntoFuture<Output = S2>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move {
            match pending.await.map(f) {
                Outcome::Success(next) => Outcome::Success(next.await),
                Outcome::Error(e) => Outcome::Error(e),
            }
        })
    }

    /// Transform the error payload with an asynchronous mapper.
    ///
    /// Like [`map_async`](DeferredOutcome::map_async), the mapper must return
    /// something awaitable; use [`map_error`](DeferredOutcome::map_error) for
    /// a plain replacement payload.
    pub fn map_error_async<E2, F, R>(
        self,
        f: F,
    ) -> DeferredOutcome<impl Future<Output = Outcome<S, E2>>>
    where
        F: FnOnce(E) -> R,
        R: IntoFuture<Output = E2>,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move {
            match pending.await.map_error(f) {
                Outcome::Success(s) => Outcome::Success(s),
                Outcome::Error(next) => Outcome::Error(next.await),
            }
        })
    }

    /// Observe the success payload once settled; the outcome passes through.
    pub fn tap_success<F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, E>>>
    where
        F: FnOnce(&S),
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.tap_success(f) })
    }

    /// Observe the error payload once settled; the outcome passes through.
    pub fn tap_error<F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, E>>>
    where
        F: FnOnce(&E),
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.tap_error(f) })
    }

    /// Turn an Error into a Success once settled.
    ///
    /// The result can only ever be a Success; take its payload with
    /// [`resolve_success_payload`](DeferredOutcome::resolve_success_payload).
    pub fn recover<F>(self, f: F) -> DeferredOutcome<impl Future<Output = Outcome<S, Infallible>>>
    where
        F: FnOnce(E) -> S,
    {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.recover(f) })
    }

    // ========== Terminal operations ==========

    /// Settle and fold both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::deferred;
    ///
    /// # tokio_test::block_on(async {
    /// let label = deferred::error::<i32, _>("denied")
    ///     .fold(|n| format!("granted {}", n), |e| e.to_string())
    ///     .await;
    /// assert_eq!(label, "denied");
    /// # });
    /// ```
    pub async fn fold<T, F, G>(self, on_success: F, on_error: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        self.inner.await.fold(on_success, on_error)
    }

    /// Settle and decompose into `(success, error)`.
    pub async fn into_pair(self) -> (Option<S>, Option<E>) {
        self.inner.await.into_pair()
    }

    /// Settle and take the success payload, or an [`UnwrappedError`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::deferred;
    /// use wellspring::UnwrappedError;
    ///
    /// async fn port() -> Result<u16, UnwrappedError<String>> {
    ///     let port = deferred::success::<_, String>(8080).unwrap_or_throw().await?;
    ///     Ok(port)
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(port().await, Ok(8080));
    /// # });
    /// ```
    pub async fn unwrap_or_throw(self) -> Result<S, UnwrappedError<E>> {
        self.inner.await.unwrap_or_throw()
    }

    /// Settle and take the success payload, or `S::default()`.
    pub async fn unwrap_or_default(self) -> S
    where
        S: Default,
    {
        self.inner.await.unwrap_or_default()
    }

    /// Settle and take the success payload, or `default`.
    pub async fn unwrap_or(self, default: S) -> S {
        self.inner.await.unwrap_or(default)
    }

    /// Settle and take the success payload, or compute one from the error.
    pub async fn unwrap_or_else<F>(self, f: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        self.inner.await.unwrap_or_else(f)
    }

    /// Settle and report whether the outcome is a Success.
    pub async fn is_success(self) -> bool {
        self.inner.await.is_success()
    }

    /// Settle and report whether the outcome is an Error.
    pub async fn is_error(self) -> bool {
        self.inner.await.is_error()
    }

    /// Settle and convert to a `Result`.
    pub async fn into_result(self) -> Result<S, E> {
        self.inner.await.into_result()
    }
}

impl<Fut, S> DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, Infallible>>,
{
    /// Settle a chain that is known to succeed and return its payload.
    ///
    /// Only available once the error type is [`Infallible`], which is what
    /// [`recover`](DeferredOutcome::recover) produces.
    pub async fn resolve_success_payload(self) -> S {
        self.inner.await.into_success()
    }
}

impl<Fut, S, E> DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<Outcome<S, E>, E>>,
{
    /// Flatten a deferred nested Outcome.
    pub fn flatten(self) -> DeferredOutcome<impl Future<Output = Outcome<S, E>>> {
        let pending = self.inner;
        DeferredOutcome::new(async move { pending.await.flatten() })
    }
}
