//! Bounded retry of fallible async operations
//!
//! A `RetryExecutor` repeats an operation under a `RetryPolicy`, waiting
//! `RetryPolicy::delay_after` between attempts through an injectable
//! `Sleeper`. Each attempt is logged with `tracing` under the executor's
//! operation name.
//!
//! # Example
//!
//! ```rust,no_run
//! use lineage_core::retry::{RetryError, RetryExecutor};
//! use lineage_core::types::RetryPolicy;
//!
//! async fn example() -> Result<String, RetryError<std::io::Error>> {
//!     RetryExecutor::new("example", RetryPolicy::default())
//!         .execute(|| async { Ok("success".to_string()) }, |_err| true)
//!         .await
//! }
//! ```

mod classify;
mod error;
mod executor;
mod sleeper;

pub use classify::{is_transient_status, HttpStatusError};
pub use error::RetryError;
pub use executor::RetryExecutor;
pub use sleeper::{RecordingSleeper, Sleeper, TokioSleeper};
