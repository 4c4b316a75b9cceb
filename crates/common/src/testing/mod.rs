//! Testing utilities and helpers
//!
//! This module provides testing utilities for code built on the retry
//! executor:
//! - **[`time`]**: Sleep mocking utilities (re-exported from `crate::time`)
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "runtime")]
//! # {
//! use steadfast_common::resilience::{RetryConfig, RetryExecutor};
//! use steadfast_common::testing::MockSleeper;
//!
//! let sleeper = MockSleeper::new();
//! let executor = RetryExecutor::with_sleeper(RetryConfig::default(), sleeper.clone());
//! let value = executor.execute(|| Ok::<_, std::io::Error>(7));
//! assert_eq!(value.ok(), Some(7));
//! assert_eq!(sleeper.count(), 0);
//! # }
//! ```

pub mod time;

// Re-export commonly used items
pub use time::MockSleeper;
