//! Property tests for the combinator laws, and for the deferred chain
//! producing the same outcome as its synchronous twin.

use std::future::IntoFuture;

use proptest::prelude::*;
use wellspring::deferred::{self, BoxedDeferred};
use wellspring::testing::counted;
use wellspring::{Fault, Outcome, UnwrappedError};

#[derive(Debug, Clone)]
enum Step {
    Add(i32),
    Double,
    RejectAbove(i32),
    Prefix(String),
    RetryEven(i32),
    Observe,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<i32>().prop_map(Step::Add),
        Just(Step::Double),
        any::<i32>().prop_map(Step::RejectAbove),
        "[a-z]{0,3}".prop_map(Step::Prefix),
        any::<i32>().prop_map(Step::RetryEven),
        Just(Step::Observe),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        "[a-z]{0,5}".prop_map(Outcome::error),
    ]
}

fn reject_above(limit: i32) -> impl FnOnce(i32) -> Outcome<i32, String> {
    move |x| {
        if x > limit {
            Outcome::error(format!("{} > {}", x, limit))
        } else {
            Outcome::success(x)
        }
    }
}

fn retry_even(value: i32) -> impl FnOnce(String) -> Outcome<i32, String> {
    move |e| {
        if e.len() % 2 == 0 {
            Outcome::success(value)
        } else {
            Outcome::error(e)
        }
    }
}

fn apply_sync(outcome: Outcome<i32, String>, step: Step) -> Outcome<i32, String> {
    match step {
        Step::Add(n) => outcome.map(move |x| x.wrapping_add(n)),
        Step::Double => outcome.map(|x| x.wrapping_mul(2)),
        Step::RejectAbove(limit) => outcome.bind(reject_above(limit)),
        Step::Prefix(prefix) => outcome.map_error(move |e| format!("{}{}", prefix, e)),
        Step::RetryEven(value) => outcome.bind_error(retry_even(value)),
        Step::Observe => outcome.tap_success(|_| {}).tap_error(|_| {}),
    }
}

fn apply_deferred(
    chain: BoxedDeferred<'static, i32, String>,
    step: Step,
) -> BoxedDeferred<'static, i32, String> {
    match step {
        Step::Add(n) => chain.map(move |x| x.wrapping_add(n)).boxed(),
        Step::Double => chain.map(|x| x.wrapping_mul(2)).boxed(),
        Step::RejectAbove(limit) => chain.bind_async(reject_above(limit)).boxed(),
        Step::Prefix(prefix) => chain
            .map_error_async(move |e| async move { format!("{}{}", prefix, e) })
            .boxed(),
        Step::RetryEven(value) => chain.bind_error(retry_even(value)).boxed(),
        Step::Observe => chain.tap_success(|_| {}).tap_error(|_| {}).boxed(),
    }
}

proptest! {
    #[test]
    fn prop_deferred_matches_sync(
        start in outcome_strategy(),
        steps in prop::collection::vec(step_strategy(), 0..12),
    ) {
        let expected = steps
            .clone()
            .into_iter()
            .fold(start.clone(), apply_sync);

        let (pending, counter) = counted(async move { start });
        let chain = steps
            .into_iter()
            .fold(deferred::DeferredOutcome::new(pending).boxed(), apply_deferred);
        let actual = tokio_test::block_on(chain.into_future());

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(counter.count(), 1);
    }

    #[test]
    fn prop_success_and_error_predicates(x: i32) {
        prop_assert!(Outcome::<i32, i32>::success(x).is_success());
        prop_assert!(!Outcome::<i32, i32>::success(x).is_error());
        prop_assert!(Outcome::<i32, i32>::error(x).is_error());
        prop_assert!(!Outcome::<i32, i32>::error(x).is_success());
    }

    #[test]
    fn prop_unwrap_law(x in any::<i32>(), e in "[a-z]{1,8}") {
        prop_assert_eq!(Outcome::<i32, String>::success(x).unwrap_or_throw(), Ok(x));

        let err: UnwrappedError<String> = Outcome::<i32, String>::error(e.clone())
            .unwrap_or_throw()
            .unwrap_err();
        prop_assert_eq!(err.into_cause(), e);
    }

    #[test]
    fn prop_tuple_law(o in outcome_strategy()) {
        let expected = match o.clone() {
            Outcome::Success(s) => (Some(s), None),
            Outcome::Error(e) => (None, Some(e)),
        };
        prop_assert_eq!(o.into_pair(), expected);
    }

    #[test]
    fn prop_fault_capture(x: i32) {
        let ok = Outcome::from_throwing(move || x);
        prop_assert_eq!(ok.success_value(), Some(x));

        let failed: Outcome<(), Fault> =
            Outcome::from_throwing(move || std::panic::panic_any(x));
        let fault = failed.error_value().unwrap();
        prop_assert_eq!(fault.downcast::<i32>().ok(), Some(x));
    }

    #[test]
    fn prop_deferred_recover_matches_sync(o in outcome_strategy()) {
        let expected = o.clone().recover(|e| e.len() as i32).into_success();
        let actual = tokio_test::block_on(
            deferred::resolved(o)
                .recover(|e| e.len() as i32)
                .resolve_success_payload(),
        );
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn ordering_scenario_from_deferred_lift() {
    let chain = |start: i32| {
        deferred::resolved(Outcome::<i32, &str>::success(start))
            .map(|x| x + 1)
            .bind(|x| {
                if x > 1 {
                    Outcome::success(x * 10)
                } else {
                    Outcome::error("small")
                }
            })
    };

    assert_eq!(
        tokio_test::block_on(chain(1).into_future()),
        Outcome::success(20)
    );
    assert_eq!(
        tokio_test::block_on(chain(0).into_future()),
        Outcome::error("small")
    );
}
