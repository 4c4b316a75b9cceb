//! Common utilities shared across Steadfast crates.
//!
//! The centerpiece is [`resilience::RetryExecutor`], a synchronous
//! fixed-interval retry loop with an optional early-stop callback.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors and serialization utilities
//! - `runtime` (default): retry execution, sleep abstraction
//! - `observability`: tracing (pulled in by `runtime`)
//!
//! The [`testing`] module (mock sleeper) ships with `runtime`.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod utils;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod resilience;
#[cfg(feature = "runtime")]
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use resilience::{
    execute, retry, retry_with_callback, AttemptFailure, ConfigError, NoCallback, RetryConfig,
    RetryConfigBuilder, RetryDecision, RetryError, RetryExecutor, RetryReport, RetryResult,
    RetryState,
};
#[cfg(feature = "runtime")]
pub use time::{Sleeper, ThreadSleeper};
#[cfg(feature = "foundation")]
pub use utils::serde::duration_millis;
