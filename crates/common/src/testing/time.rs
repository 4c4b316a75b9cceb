//! Sleep mocking for deterministic tests
//!
//! [`MockSleeper`] implements [`Sleeper`] by recording every requested
//! duration and returning immediately, so retry tests can assert on the
//! delays the executor asked for without waiting on real time.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use steadfast_common::testing::MockSleeper;
//! use steadfast_common::time::Sleeper;
//!
//! let sleeper = MockSleeper::new();
//! sleeper.sleep(Duration::from_millis(100));
//! sleeper.sleep(Duration::from_millis(100));
//!
//! assert_eq!(sleeper.count(), 2);
//! assert_eq!(sleeper.total(), Duration::from_millis(200));
//! ```

// Allow missing panics docs for test utilities - a poisoned mutex should fail
// the test immediately
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::time::Sleeper;

/// Mock sleeper for deterministic testing
///
/// Clones share the same recording, so a clone can be handed to an executor
/// while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl MockSleeper {
    /// Create a new mock sleeper with an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// All requested sleeps, in call order
    #[must_use]
    pub fn sleeps(&self) -> Vec<Duration> {
        // Test utility: panic on poisoned mutex to fail tests early
        self.sleeps.lock().expect("mutex poisoned").clone()
    }

    /// Number of sleeps requested so far
    #[must_use]
    pub fn count(&self) -> usize {
        // Test utility: panic on poisoned mutex to fail tests early
        self.sleeps.lock().expect("mutex poisoned").len()
    }

    /// Sum of all requested sleeps
    #[must_use]
    pub fn total(&self) -> Duration {
        // Test utility: panic on poisoned mutex to fail tests early
        self.sleeps.lock().expect("mutex poisoned").iter().sum()
    }

    /// Forget everything recorded so far
    pub fn reset(&self) {
        // Test utility: panic on poisoned mutex to fail tests early
        self.sleeps.lock().expect("mutex poisoned").clear();
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&self, duration: Duration) {
        // Test utility: panic on poisoned mutex to fail tests early
        self.sleeps.lock().expect("mutex poisoned").push(duration);
    }
}
