//! Tracing support for deferred outcomes.
//!
//! This module provides the `instrument` method for wrapping a deferred chain
//! in a tracing span. Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::future::Future;

use ::tracing::instrument::Instrumented;
use ::tracing::Span;

use crate::deferred::DeferredOutcome;
use crate::outcome::Outcome;

/// Extension trait for adding tracing instrumentation to deferred outcomes.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait DeferredTracingExt<Fut> {
    /// Wrap the chain so far in a tracing span.
    ///
    /// The span is entered every time the underlying future is polled and
    /// exited when it yields, following the standard `tracing::Instrument`
    /// pattern for async code. Links chained after `instrument` run outside
    /// the span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use wellspring::deferred::{self, DeferredTracingExt};
    /// use tracing::info_span;
    ///
    /// let outcome = deferred::from_async(load_order(order_id))
    ///     .map(|order| order.total())
    ///     .instrument(info_span!("load_order", order_id = %order_id))
    ///     .await;
    /// ```
    fn instrument(self, span: Span) -> DeferredOutcome<Instrumented<Fut>>;
}

impl<Fut, S, E> DeferredTracingExt<Fut> for DeferredOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, E>>,
{
    fn instrument(self, span: Span) -> DeferredOutcome<Instrumented<Fut>> {
        use ::tracing::Instrument as _;
        DeferredOutcome::new(self.inner.instrument(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_instrument_returns_value() {
        let outcome = deferred::success::<_, String>(42)
            .instrument(::tracing::info_span!("test_span"))
            .await;
        assert_eq!(outcome, Outcome::success(42));
    }

    #[tokio::test]
    async fn test_error_in_span_propagates() {
        let outcome = deferred::error::<i32, _>("oops".to_string())
            .instrument(::tracing::info_span!("failing"))
            .await;
        assert_eq!(outcome, Outcome::error("oops".to_string()));
    }

    #[tokio::test]
    async fn test_composition_with_instrument() {
        let step3 = ::tracing::debug_span!("step3");
        let outcome = deferred::success::<_, String>(5)
            .instrument(::tracing::debug_span!("step1"))
            .map(|x| x * 2)
            .instrument(::tracing::debug_span!("step2"))
            .bind_async(|x| deferred::success(x + 10).instrument(step3))
            .await;
        assert_eq!(outcome, Outcome::success(20));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_events_inside_chain_are_recorded() {
        let outcome = deferred::success::<_, String>(3)
            .tap_success(|value| ::tracing::info!(value = *value, "observed payload"))
            .instrument(::tracing::info_span!("observe"))
            .await;

        assert_eq!(outcome, Outcome::success(3));
        assert!(logs_contain("observed payload"));
    }

    #[test]
    #[traced_test]
    fn test_captured_panic_is_logged() {
        let outcome = Outcome::from_throwing(|| -> i32 { panic!("kaboom") });
        assert!(outcome.is_error());
        assert!(logs_contain("captured panic"));
    }
}
