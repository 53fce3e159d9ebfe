//! Demonstrates tracing integration with deferred outcomes
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::future::Future;
use std::time::Duration;

use wellspring::deferred::{self, DeferredTracingExt, OutcomeFutureExt};
use wellspring::{DeferredOutcome, Outcome};

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // Simulate a workflow with instrumented links
    let outcome = fetch_data()
        .instrument(tracing::info_span!("fetch"))
        .bind(process_data)
        .tap_success(|data| tracing::debug!(len = data.len(), "processed payload"))
        .bind_async(save_result)
        .instrument(tracing::info_span!("workflow", operation = "import"))
        .await;

    match outcome {
        Outcome::Success(id) => tracing::info!("Workflow completed successfully: {}", id),
        Outcome::Error(e) => tracing::error!("Workflow failed: {}", e),
    }

    // A failing chain records its error inside the span
    let failed = deferred::error::<i32, String>("upstream timeout".to_string())
        .tap_error(|e| tracing::warn!(error = %e, "recovering"))
        .recover(|_| 0)
        .instrument(tracing::info_span!("fallback"))
        .resolve_success_payload()
        .await;
    tracing::info!("Fallback value: {}", failed);

    // Captured panics emit a debug event
    let captured = deferred::from_throwing(|| -> i32 { panic!("parser bug") })
        .is_error()
        .await;
    tracing::info!("Captured panic as error: {}", captured);
}

fn fetch_data() -> DeferredOutcome<impl Future<Output = Outcome<String, String>>> {
    deferred::from_async(async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok::<_, String>("raw data".to_string())
    })
}

fn process_data(data: String) -> Outcome<String, String> {
    if data.is_empty() {
        Outcome::error("empty input".to_string())
    } else {
        Outcome::success(format!("processed: {}", data))
    }
}

fn save_result(data: String) -> DeferredOutcome<impl Future<Output = Outcome<i32, String>>> {
    async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Outcome::success(data.len() as i32)
    }
    .deferred()
    .instrument(tracing::info_span!("save", operation = "database"))
}
