//! Blocking sleep abstraction
//!
//! The retry executor waits between attempts through a [`Sleeper`] so that
//! production code blocks the calling thread while tests can record the
//! requested delays without waiting.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use steadfast_common::time::{Sleeper, ThreadSleeper};
//!
//! let sleeper = ThreadSleeper;
//! sleeper.sleep(Duration::from_millis(1));
//! ```

use std::time::Duration;

/// Trait for blocking the current thread between retry attempts
pub trait Sleeper: Send + Sync {
    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by [`std::thread::sleep`]
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for std::sync::Arc<S> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}
