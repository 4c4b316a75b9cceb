//! Time utilities and abstractions
//!
//! This module provides the blocking sleep abstraction used between retry
//! attempts:
//! - **[`sleeper`]**: the [`Sleeper`] trait and the real [`ThreadSleeper`]
//! - **Mock sleeper**: deterministic sleeps for testing (re-exported from
//!   testing)
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "runtime")]
//! # {
//! use std::time::Duration;
//!
//! use steadfast_common::time::{MockSleeper, Sleeper};
//!
//! let sleeper = MockSleeper::new();
//! sleeper.sleep(Duration::from_secs(5));
//! assert_eq!(sleeper.total(), Duration::from_secs(5));
//! # }
//! ```

pub mod sleeper;

pub use sleeper::{Sleeper, ThreadSleeper};

// Re-export the mock sleeper from testing module
pub use crate::testing::time::MockSleeper;
