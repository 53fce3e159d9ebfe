//! A two-variant result type with a fluent combinator API.
//!
//! # Outcome vs Result
//!
//! `Outcome<S, E>` carries the same information as `std::result::Result<S, E>`,
//! but its API is built around a single extraction primitive, [`Outcome::fold`],
//! and a symmetric set of combinators for both branches:
//!
//! | Success side | Error side |
//! |---|---|
//! | [`map`](Outcome::map) | [`map_error`](Outcome::map_error) |
//! | [`bind`](Outcome::bind) | [`bind_error`](Outcome::bind_error) |
//! | [`tap_success`](Outcome::tap_success) | [`tap_error`](Outcome::tap_error) |
//!
//! Converting to and from `Result` is free (see [`Outcome::into_result`] and
//! the `From` impls), so `?` is always one call away.
//!
//! # Panics are not captured by combinators
//!
//! Only [`Outcome::from_throwing`] and [`Outcome::from_async_catching`]
//! catch panics. Mappers passed to `map`, `bind`, `map_error`, `bind_error`
//! and the tap hooks are called directly, so a panicking mapper unwinds
//! through the combinator untouched.
//!
//! # Example
//!
//! ```rust
//! use wellspring::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from_result(raw.parse::<u16>()).map_error(|e| e.to_string())
//! }
//!
//! let port = parse_port("8080")
//!     .bind(|p| {
//!         if p >= 1024 {
//!             Outcome::success(p)
//!         } else {
//!             Outcome::error(format!("port {} is privileged", p))
//!         }
//!     })
//!     .recover(|_| 8000)
//!     .into_success();
//!
//! assert_eq!(port, 8080);
//! ```

use std::convert::Infallible;
use std::future::{Future, IntoFuture};
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::fault::{Fault, UnwrappedError};

/// A value that is either `Success(S)` or `Error(E)`.
///
/// An `Outcome` is exactly one of the two variants for its whole lifetime.
/// Every combinator consumes `self` and builds a new value; the payload of an
/// existing outcome is never modified.
///
/// # Example
///
/// ```rust
/// use wellspring::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(21);
/// let failed: Outcome<i32, &str> = Outcome::error("nope");
///
/// assert_eq!(ok.map(|x| x * 2), Outcome::success(42));
/// assert_eq!(failed.map(|x| x * 2), Outcome::error("nope"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Error` variant, which should be handled"]
pub enum Outcome<S, E> {
    /// The success variant
    Success(S),
    /// The error variant
    Error(E),
}

impl<S, E> Outcome<S, E> {
    // ========== Constructors ==========

    /// Create a Success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::success(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Create an Error value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::error("bad input");
    /// assert!(o.is_error());
    /// ```
    #[inline]
    pub fn error(value: E) -> Self {
        Outcome::Error(value)
    }

    /// Create from a `Result` (`Ok` becomes Success, `Err` becomes Error).
    #[inline]
    pub fn from_result(result: Result<S, E>) -> Self {
        match result {
            Ok(s) => Outcome::Success(s),
            Err(e) => Outcome::Error(e),
        }
    }

    /// Await a fallible future and wrap its settlement.
    ///
    /// `Ok` becomes Success, `Err` (the rejection cause) becomes Error. A
    /// task that was cancelled and reports it as an `Err`, such as an aborted
    /// `tokio::task::JoinHandle`, therefore surfaces as an Error too.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let fetched = Outcome::from_async(async { Ok::<_, String>(7) }).await;
    /// assert_eq!(fetched, Outcome::success(7));
    ///
    /// let rejected = Outcome::from_async(async { Err::<i32, _>("timeout") }).await;
    /// assert_eq!(rejected, Outcome::error("timeout"));
    /// # });
    /// ```
    pub async fn from_async<Fut>(pending: Fut) -> Self
    where
        Fut: IntoFuture<Output = Result<S, E>>,
    {
        Outcome::from_result(pending.await)
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    ///
    /// Exactly one of the two functions is invoked. This is the extraction
    /// primitive the rest of the API is written against.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(42);
    /// let failed: Outcome<i32, &str> = Outcome::error("nope");
    ///
    /// assert_eq!(ok.fold(|x| x.to_string(), |e| e.to_uppercase()), "42");
    /// assert_eq!(failed.fold(|x| x.to_string(), |e| e.to_uppercase()), "NOPE");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_error: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(s) => on_success(s),
            Outcome::Error(e) => on_error(e),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    /// Returns `true` if this is an `Error` value.
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    // ========== Views ==========

    /// Convert to `Outcome<&S, &E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let o: Outcome<String, i32> = Outcome::success("hi".to_string());
    /// assert_eq!(o.as_ref().map(|s| s.len()), Outcome::success(2));
    /// assert_eq!(o, Outcome::success("hi".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Convert to `Outcome<&mut S, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut E> {
        match self {
            Outcome::Success(s) => Outcome::Success(s),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    // ========== Transformations ==========

    /// Transform the success payload, passing errors through unchanged.
    ///
    /// The mapper is never invoked on an Error. A panic inside the mapper
    /// propagates to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(21);
    /// assert_eq!(ok.map(|x| x * 2), Outcome::success(42));
    /// ```
    #[inline]
    pub fn map<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        self.fold(|s| Outcome::Success(f(s)), Outcome::Error)
    }

    /// Transform the error payload, passing successes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::error("io");
    /// assert_eq!(
    ///     failed.map_error(|e| format!("while loading: {}", e)),
    ///     Outcome::error("while loading: io".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.fold(Outcome::Success, |e| Outcome::Error(f(e)))
    }

    /// Chain a computation that may itself fail.
    ///
    /// On Success the mapper's outcome is returned as is (no nesting). On
    /// Error the chain short-circuits and the mapper is never invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::error(format!("{} is odd", x))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).bind(halve).bind(halve), Outcome::success(2));
    /// assert_eq!(
    ///     Outcome::success(6).bind(halve).bind(halve),
    ///     Outcome::error("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn bind<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        self.fold(f, Outcome::Error)
    }

    /// Alias for [`bind`](Outcome::bind).
    #[inline]
    pub fn and_then<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        self.bind(f)
    }

    /// Chain a recovery step on the error payload that may itself fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let cached: Outcome<&str, &str> = Outcome::error("cache miss");
    /// let loaded = cached.bind_error(|reason| {
    ///     if reason == "cache miss" {
    ///         Outcome::success("from disk")
    ///     } else {
    ///         Outcome::error(500)
    ///     }
    /// });
    /// assert_eq!(loaded, Outcome::success("from disk"));
    /// ```
    #[inline]
    pub fn bind_error<E2, F>(self, f: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> Outcome<S, E2>,
    {
        self.fold(Outcome::Success, f)
    }

    /// Alias for [`bind_error`](Outcome::bind_error).
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> Outcome<S, E2>,
    {
        self.bind_error(f)
    }

    /// Observe the success payload and return the outcome unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o: Outcome<i32, &str> = Outcome::success(3).tap_success(|x| seen.push(*x));
    /// assert_eq!(o, Outcome::success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn tap_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        self.as_ref().fold(f, |_| ());
        self
    }

    /// Observe the error payload and return the outcome unchanged.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.as_ref().fold(|_| (), f);
        self
    }

    /// Turn an Error into a Success by computing a replacement payload.
    ///
    /// The returned outcome has [`Infallible`] as its error type, so it is
    /// known to be a Success without inspecting it; use
    /// [`into_success`](Outcome::into_success) to take the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let failed: Outcome<usize, &str> = Outcome::error("oops");
    /// assert_eq!(failed.recover(|e| e.len()).into_success(), 4);
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Outcome<S, Infallible>
    where
        F: FnOnce(E) -> S,
    {
        self.fold(Outcome::Success, |e| Outcome::Success(f(e)))
    }

    // ========== Extractors ==========

    /// Take the success payload, or return an [`UnwrappedError`] carrying
    /// the error payload.
    ///
    /// This is the fallible exit of a chain; combine it with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(ok.unwrap_or_throw(), Ok(1));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::error("nope");
    /// assert_eq!(failed.unwrap_or_throw().unwrap_err().into_cause(), "nope");
    /// ```
    #[inline]
    pub fn unwrap_or_throw(self) -> Result<S, UnwrappedError<E>> {
        self.fold(Ok, |e| Err(UnwrappedError::new(e)))
    }

    /// Take the success payload, or `S::default()` on Error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let failed: Outcome<Vec<u8>, &str> = Outcome::error("nope");
    /// assert!(failed.unwrap_or_default().is_empty());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> S
    where
        S: Default,
    {
        self.fold(|s| s, |_| S::default())
    }

    /// Take the success payload, or `default` on Error.
    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        self.fold(|s| s, |_| default)
    }

    /// Take the success payload, or compute one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        self.fold(|s| s, f)
    }

    /// Extract the success payload, panicking if Error.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Error`.
    #[inline]
    pub fn unwrap_success(self) -> S
    where
        E: std::fmt::Debug,
    {
        self.fold(|s| s, |e| unwrap_failed(&e))
    }

    /// Extract the success payload with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the value is an `Error`.
    #[inline]
    pub fn expect_success(self, msg: &str) -> S {
        self.fold(|s| s, |_| panic!("{}", msg))
    }

    /// Decompose into `(success, error)`; exactly one slot is `Some`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.into_pair(), (Some(5), None));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::error("e");
    /// assert_eq!(failed.into_pair(), (None, Some("e")));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (Option<S>, Option<E>) {
        self.fold(|s| (Some(s), None), |e| (None, Some(e)))
    }

    /// Returns the success payload if present, consuming self.
    #[inline]
    pub fn success_value(self) -> Option<S> {
        self.fold(Some, |_| None)
    }

    /// Returns the error payload if present, consuming self.
    #[inline]
    pub fn error_value(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    // ========== Conversions ==========

    /// Convert to `Result` (Success becomes `Ok`, Error becomes `Err`).
    #[inline]
    pub fn into_result(self) -> Result<S, E> {
        self.fold(Ok, Err)
    }
}

impl<S> Outcome<S, Fault> {
    /// Run `f`, capturing a panic as an Error.
    ///
    /// The return value of `f` becomes Success. If `f` panics, the unwind is
    /// stopped here and its payload becomes an Error holding a [`Fault`]; no
    /// panic escapes this call. The default panic hook still runs, so the
    /// message is printed to stderr as usual.
    ///
    /// `f` is treated as unwind safe. State it shares with the caller may be
    /// left half-updated by the panic, exactly as with a `Mutex` guard
    /// dropped during unwinding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let ok = Outcome::from_throwing(|| 40 + 2);
    /// assert_eq!(ok.success_value(), Some(42));
    ///
    /// let items: Vec<i32> = Vec::new();
    /// let failed = Outcome::from_throwing(|| items[3]);
    /// assert!(failed.is_error());
    /// ```
    pub fn from_throwing<F>(f: F) -> Self
    where
        F: FnOnce() -> S,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => {
                let fault = Fault::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!("captured panic as error outcome: {}", fault);
                Outcome::Error(fault)
            }
        }
    }

    /// Await a future, capturing a panic raised while polling it as an Error.
    ///
    /// The asynchronous counterpart of [`from_throwing`](Outcome::from_throwing).
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let ok = Outcome::from_async_catching(async { 7 }).await;
    /// assert_eq!(ok.success_value(), Some(7));
    ///
    /// let failed = Outcome::from_async_catching(async {
    ///     if true {
    ///         panic!("lost connection");
    ///     }
    ///     7
    /// })
    /// .await;
    /// assert_eq!(failed.error_value().unwrap().message(), Some("lost connection"));
    /// # });
    /// ```
    pub async fn from_async_catching<Fut>(pending: Fut) -> Self
    where
        Fut: Future<Output = S>,
    {
        match AssertUnwindSafe(pending).catch_unwind().await {
            Ok(value) => Outcome::Success(value),
            Err(payload) => {
                let fault = Fault::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!("captured panic in future as error outcome: {}", fault);
                Outcome::Error(fault)
            }
        }
    }
}

impl<S> Outcome<S, Infallible> {
    /// Take the payload of an outcome that cannot be an Error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::error("gone").recover(|_| 0);
    /// assert_eq!(recovered.into_success(), 0);
    /// ```
    #[inline]
    pub fn into_success(self) -> S {
        self.fold(|s| s, |never| match never {})
    }
}

// Flatten for nested Outcome
impl<S, E> Outcome<Outcome<S, E>, E> {
    /// Flatten a nested Outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::error("inner"));
    /// assert_eq!(nested.flatten(), Outcome::error("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<S, E> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

impl<S, E> Default for Outcome<S, E>
where
    S: Default,
{
    /// Returns `Outcome::Success(S::default())`.
    fn default() -> Self {
        Outcome::Success(S::default())
    }
}

#[cold]
#[track_caller]
fn unwrap_failed(error: &dyn std::fmt::Debug) -> ! {
    panic!("called `Outcome::unwrap_success()` on an `Error` value: {:?}", error)
}

// ========== Collection Utilities ==========

/// Partition an iterator of outcomes into success and error payloads.
///
/// # Example
///
/// ```rust
/// use wellspring::outcome::{partition, Outcome};
///
/// let items = vec![
///     Outcome::success(1),
///     Outcome::error("a"),
///     Outcome::success(2),
/// ];
///
/// let (successes, errors) = partition(items);
/// assert_eq!(successes, vec![1, 2]);
/// assert_eq!(errors, vec!["a"]);
/// ```
pub fn partition<S, E, I>(iter: I) -> (Vec<S>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<S, E>>,
{
    let mut successes = Vec::new();
    let mut errors = Vec::new();

    for item in iter {
        item.fold(|s| successes.push(s), |e| errors.push(e));
    }

    (successes, errors)
}

/// Extract all success payloads from an iterator.
pub fn successes<S, E, I>(iter: I) -> impl Iterator<Item = S>
where
    I: IntoIterator<Item = Outcome<S, E>>,
{
    iter.into_iter().filter_map(Outcome::success_value)
}

/// Extract all error payloads from an iterator.
pub fn errors<S, E, I>(iter: I) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = Outcome<S, E>>,
{
    iter.into_iter().filter_map(Outcome::error_value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
        prop_oneof![
            any::<i32>().prop_map(Outcome::success),
            ".*".prop_map(Outcome::error),
        ]
    }

    proptest! {
        #[test]
        fn prop_variant_predicates(x: i32) {
            let ok: Outcome<i32, i32> = Outcome::success(x);
            prop_assert!(ok.is_success());
            prop_assert!(!ok.is_error());

            let failed: Outcome<i32, i32> = Outcome::error(x);
            prop_assert!(failed.is_error());
            prop_assert!(!failed.is_success());
        }

        #[test]
        fn prop_map_identity(o in outcome_strategy()) {
            prop_assert_eq!(o.clone().map(|v| v), o);
        }

        #[test]
        fn prop_bind_success_identity(o in outcome_strategy()) {
            prop_assert_eq!(o.clone().bind(Outcome::success), o);
        }

        #[test]
        fn prop_map_composition(o in outcome_strategy()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(o.clone().map(f).map(g), o.map(|v| g(f(v))));
        }

        #[test]
        fn prop_error_short_circuits(e in ".*") {
            let failed: Outcome<i32, String> = Outcome::error(e.clone());
            let mut invoked = false;
            let mapped = failed.map(|v| {
                invoked = true;
                v
            });
            prop_assert!(!invoked);
            prop_assert_eq!(mapped, Outcome::error(e));
        }

        #[test]
        fn prop_recovery_law(o in outcome_strategy()) {
            let f = |e: String| e.len() as i32;
            let expected = match o.clone() {
                Outcome::Success(s) => Outcome::success(s),
                Outcome::Error(e) => Outcome::success(f(e)),
            };
            prop_assert_eq!(o.recover(f), expected);
        }

        #[test]
        fn prop_pair_has_exactly_one_slot(o in outcome_strategy()) {
            let (s, e) = o.into_pair();
            prop_assert!(s.is_some() != e.is_some());
        }

        #[test]
        fn prop_result_roundtrip(o in outcome_strategy()) {
            let result: Result<i32, String> = o.clone().into();
            prop_assert_eq!(Outcome::from(result), o);
        }
    }
}
