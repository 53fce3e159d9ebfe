//! # Wellspring
//!
//! A two-variant outcome type with a fluent combinator API, and the same API
//! chained straight through pending futures.
//!
//! ## Two halves, one algebra
//!
//! - [`Outcome<S, E>`](Outcome) is either `Success(S)` or `Error(E)`, with
//!   `map`, `bind`, `fold`, `recover`, taps and the unwrap family.
//! - [`DeferredOutcome`](deferred::DeferredOutcome) wraps a future of an
//!   `Outcome` and offers the same methods, so a whole pipeline can be
//!   written without awaiting every step. Awaiting the end of the chain
//!   settles each link once, in order, and yields the same `Outcome` the
//!   synchronous chain would.
//!
//! ## Quick Example
//!
//! ```rust
//! use wellspring::deferred::OutcomeFutureExt;
//! use wellspring::Outcome;
//!
//! async fn fetch_balance(account: u32) -> Result<i64, String> {
//!     if account == 7 {
//!         Ok(120)
//!     } else {
//!         Err(format!("no account {}", account))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let summary = fetch_balance(7)
//!     .deferred_result()
//!     .bind(|balance| {
//!         if balance >= 100 {
//!             Outcome::success(balance - 100)
//!         } else {
//!             Outcome::error("insufficient funds".to_string())
//!         }
//!     })
//!     .fold(|left| format!("{} left", left), |e| format!("failed: {}", e))
//!     .await;
//!
//! assert_eq!(summary, "20 left");
//! # });
//! ```
//!
//! ## Panics
//!
//! Combinators never catch panics raised by the closures handed to them.
//! Only [`Outcome::from_throwing`] and [`Outcome::from_async_catching`]
//! turn a panic into an `Error` holding a [`Fault`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod fault;
pub mod outcome;
pub mod testing;

// Re-exports
pub use deferred::{DeferredOutcome, IntoDeferred, OutcomeFutureExt};
pub use fault::{Fault, UnwrappedError};
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deferred::{DeferredOutcome, IntoDeferred, OutcomeFutureExt};
    pub use crate::fault::{Fault, UnwrappedError};
    pub use crate::outcome::Outcome;

    #[cfg(feature = "tracing")]
    pub use crate::deferred::DeferredTracingExt;
}
