// crates/resilience/src/lib.rs
//! Retry utilities for transient-failure handling

mod error;
mod retry;

pub use error::{ResilienceError, ResilienceResult};
pub use retry::{with_retry, RetryPolicy};
