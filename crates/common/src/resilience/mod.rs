//! Resilience patterns for fault tolerance
//!
//! This module provides a **fixed-interval retry executor**: run an
//! operation, retry it a bounded number of times with a constant blocking
//! delay, report failed retries to an optional callback that may stop the
//! sequence, and aggregate every failure when the budget runs out.
//!
//! Execution is synchronous. Attempts never overlap and the delay blocks the
//! calling thread. Every failure is retried the same way; there is no
//! classification of errors and no backoff growth.

pub mod retry;

// Re-export retry types
pub use retry::{
    execute, retry, retry_with_callback, AttemptFailure, ConfigError, ConfigResult, NoCallback,
    RetryConfig, RetryConfigBuilder, RetryDecision, RetryError, RetryExecutor, RetryReport,
    RetryResult, RetryState,
};
