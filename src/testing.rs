//! Testing utilities and helpers for Wellspring
//!
//! This module provides assertion macros for outcomes, a resolution counter
//! for checking how often a pending computation settles, and property-based
//! testing support.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use wellspring::{Outcome, assert_success, assert_error};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let failed = Outcome::<i32, _>::error("denied");
//! assert_error!(failed);
//! ```
//!
//! ## Counting settlements
//!
//! ```rust
//! use wellspring::deferred::OutcomeFutureExt;
//! use wellspring::testing::counted;
//! use wellspring::Outcome;
//!
//! # tokio_test::block_on(async {
//! let (pending, counter) = counted(async { Outcome::<_, ()>::success(1) });
//! let outcome = pending.deferred().map(|x| x + 1).map(|x| x * 3).await;
//!
//! assert_eq!(outcome, Outcome::success(6));
//! assert_eq!(counter.count(), 1);
//! # });
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared count of how many times a wrapped future has settled.
///
/// Created by [`counted`]. Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCounter {
    settled: Arc<AtomicUsize>,
}

impl ResolutionCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of settlements recorded so far.
    pub fn count(&self) -> usize {
        self.settled.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.settled.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wrap a future so every time it settles the returned counter is bumped.
///
/// The wrapper has the same output as `pending` and is `Send` whenever
/// `pending` is.
pub fn counted<Fut>(pending: Fut) -> (impl Future<Output = Fut::Output>, ResolutionCounter)
where
    Fut: Future,
{
    let counter = ResolutionCounter::new();
    let handle = counter.clone();
    let wrapped = async move {
        let output = pending.await;
        handle.record();
        output
    };
    (wrapped, counter)
}

/// Assert that an outcome is a Success.
///
/// This macro will panic if the outcome is an `Error`.
///
/// # Example
///
/// ```rust
/// use wellspring::{Outcome, assert_success};
///
/// let ok = Outcome::<_, Vec<String>>::success(42);
/// assert_success!(ok);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Error(e) => {
                panic!("Expected Success, got Error: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is an Error.
///
/// This macro will panic if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use wellspring::{Outcome, assert_error};
///
/// let failed = Outcome::<i32, _>::error("timeout");
/// assert_error!(failed);
/// ```
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Error(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Error, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is an Error holding a specific payload.
///
/// This macro will panic if the outcome is a `Success` or if the error
/// payload doesn't match.
///
/// # Example
///
/// ```rust
/// use wellspring::{Outcome, assert_error_eq};
///
/// let failed = Outcome::<i32, _>::error("timeout");
/// assert_error_eq!(failed, "timeout");
/// ```
#[macro_export]
macro_rules! assert_error_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Error(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Error with payload {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<S, E> Arbitrary for crate::Outcome<S, E>
where
    S: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, e_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(crate::Outcome::success),
            any_with::<E>(e_params).prop_map(crate::Outcome::error),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn assert_success_macro() {
        let ok = Outcome::<_, Vec<String>>::success(42);
        assert_success!(ok);
    }

    #[test]
    fn assert_error_macro() {
        let failed = Outcome::<i32, _>::error(vec!["error".to_string()]);
        assert_error!(failed);
    }

    #[test]
    fn assert_error_eq_macro() {
        let failed = Outcome::<i32, _>::error(vec!["error1", "error2"]);
        assert_error_eq!(failed, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Error")]
    fn assert_success_panics_on_error() {
        let failed = Outcome::<i32, _>::error("error".to_string());
        assert_success!(failed);
    }

    #[test]
    #[should_panic(expected = "Expected Error, got Success")]
    fn assert_error_panics_on_success() {
        let ok = Outcome::<_, String>::success(42);
        assert_error!(ok);
    }

    #[test]
    #[should_panic(expected = "Expected Error with payload")]
    fn assert_error_eq_panics_on_success() {
        let ok = Outcome::<_, String>::success(42);
        assert_error_eq!(ok, "error".to_string());
    }

    #[test]
    fn counter_starts_at_zero() {
        let (_pending, counter) = counted(async { 1 });
        assert_eq!(counter.count(), 0);
    }

    #[tokio::test]
    async fn counter_records_settlement() {
        let (pending, counter) = counted(async { "done" });
        let observer = counter.clone();
        assert_eq!(pending.await, "done");
        assert_eq!(counter.count(), 1);
        assert_eq!(observer.count(), 1);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                o in any::<Outcome<i32, String>>()
            ) {
                match o {
                    Outcome::Success(_) => assert!(o.is_success()),
                    Outcome::Error(_) => assert!(o.is_error()),
                }
            }

            #[test]
            fn outcome_arbitrary_works_with_owned_payloads(
                o in any::<Outcome<String, Vec<u8>>>()
            ) {
                let (s, e) = o.into_pair();
                prop_assert!(s.is_some() != e.is_some());
            }
        }
    }
}
