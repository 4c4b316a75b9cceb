//! Fixed-interval retry execution
//!
//! This module runs a caller-supplied operation and, on failure, retries it
//! up to a configured number of additional attempts with a fixed blocking
//! delay in between. An optional error callback observes every failed retry
//! and may stop the sequence early by returning [`RetryDecision::Stop`].
//!
//! Failure propagation depends on whether a callback is registered:
//!
//! | Ending | No callback | Callback |
//! |--------|-------------|----------|
//! | Success | `Ok(value)` | `Some(value)` |
//! | Callback returned `Stop` | n/a | `None` |
//! | All attempts failed | `Err(RetryError::Exhausted)` | `None` |
//!
//! The initial attempt's failure is never reported to the callback and is
//! never followed by a delay; the first retry starts immediately.
//!
//! # Examples
//!
//! ```
//! use steadfast_common::resilience::{retry_with_callback, RetryDecision};
//!
//! let mut calls = 0;
//! let value = retry_with_callback(
//!     3,
//!     0,
//!     || {
//!         calls += 1;
//!         if calls < 3 { Err("not yet") } else { Ok(calls) }
//!     },
//!     |failure| {
//!         assert!(failure.retry_count() >= 1);
//!         RetryDecision::Continue
//!     },
//! );
//! assert_eq!(value, Some(3));
//! ```

pub mod config;
pub mod constants;
pub mod error;

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

pub use self::config::{RetryConfig, RetryConfigBuilder};
pub use self::error::{ConfigError, ConfigResult, RetryError, RetryResult};
use crate::time::{Sleeper, ThreadSleeper};

/// Decision returned by an error callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryDecision {
    /// Keep retrying while the budget lasts
    #[default]
    Continue,
    /// Abandon the remaining retries without raising an error
    Stop,
}

/// Information about one failed retry, handed to the error callback
#[derive(Debug)]
pub struct AttemptFailure<'a, E> {
    retry_count: u32,
    cause: &'a E,
}

impl<'a, E> AttemptFailure<'a, E> {
    /// Retries made so far, counting the one that just failed (starts at 1)
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Failure returned by the operation
    pub fn cause(&self) -> &'a E {
        self.cause
    }
}

/// Signature of an error callback
///
/// Useful for naming the callback type when none is passed:
/// `None::<NoCallback<MyError>>`.
pub type NoCallback<E> = fn(&AttemptFailure<'_, E>) -> RetryDecision;

/// State of a retry sequence
///
/// `Attempting` is the initial state. `Failed(n)` means an attempt failed and
/// `n` retries have been made or are about to be made; the next attempt is
/// retry number `n`. The remaining three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// About to make the initial attempt
    Attempting,
    /// Waiting to make retry `n`
    Failed(u32),
    /// The error callback returned [`RetryDecision::Stop`]
    Stopped,
    /// Every permitted attempt failed
    Exhausted,
    /// An attempt succeeded
    Succeeded,
}

impl RetryState {
    /// Whether the sequence has ended
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Stopped | Self::Exhausted | Self::Succeeded)
    }

    /// Active retry counter for a state that still has an attempt to make
    const fn pending_retry(self) -> Option<u32> {
        match self {
            Self::Attempting => Some(0),
            Self::Failed(retry) => Some(retry),
            Self::Stopped | Self::Exhausted | Self::Succeeded => None,
        }
    }
}

/// Outcome of a retry execution including result and summary statistics.
#[derive(Debug)]
pub struct RetryReport<T, E> {
    /// Terminal state the sequence ended in
    pub state: RetryState,
    /// Value from the successful attempt, if any
    pub value: Option<T>,
    /// Every failure encountered, in attempt order
    pub failures: Vec<E>,
    /// Total time requested from the sleeper
    pub total_delay: Duration,
    callback_registered: bool,
}

impl<T, E> RetryReport<T, E> {
    /// Number of times the operation was invoked
    pub fn attempts(&self) -> usize {
        self.failures.len() + usize::from(self.value.is_some())
    }

    /// Number of attempts after the initial one
    pub fn retries(&self) -> usize {
        self.attempts().saturating_sub(1)
    }

    /// Whether an attempt succeeded
    pub fn is_success(&self) -> bool {
        self.state == RetryState::Succeeded
    }

    /// Apply the propagation policy and return only the result.
    ///
    /// Exhaustion is an error only when no error callback was registered.
    /// Early stop and callback-handled exhaustion both yield `Ok(None)`.
    pub fn into_result(self) -> RetryResult<Option<T>, E> {
        match self.state {
            RetryState::Exhausted if !self.callback_registered => {
                Err(RetryError::Exhausted { failures: self.failures })
            }
            _ => Ok(self.value),
        }
    }
}

/// The main retry executor
///
/// Holds only immutable configuration and a sleeper; every call owns its own
/// counter and failure list, so one executor can be shared across threads.
#[derive(Debug, Clone)]
pub struct RetryExecutor<S = ThreadSleeper> {
    config: RetryConfig,
    sleeper: S,
}

impl RetryExecutor {
    /// Create a new retry executor that blocks the calling thread between
    /// attempts
    pub fn new(config: RetryConfig) -> Self {
        Self::with_sleeper(config, ThreadSleeper)
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl Default for RetryExecutor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<S: Sleeper> RetryExecutor<S> {
    /// Create a retry executor with a custom sleeper
    pub fn with_sleeper(config: RetryConfig, sleeper: S) -> Self {
        Self { config, sleeper }
    }

    /// Configuration this executor runs with
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation with retry logic and no error callback.
    ///
    /// Returns the first successful value, or every failure once all
    /// attempts are used up.
    pub fn execute<T, E, F>(&self, action: F) -> RetryResult<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Debug,
    {
        let report = self.run(action, None::<NoCallback<E>>);
        match report.value {
            Some(value) => Ok(value),
            None => Err(RetryError::Exhausted { failures: report.failures }),
        }
    }

    /// Execute an operation with retry logic, reporting each failed retry
    /// to `callback`.
    ///
    /// Never fails: the callback is the only failure channel. Returns `None`
    /// when the callback stopped the sequence or every attempt failed.
    pub fn execute_with_callback<T, E, F, C>(&self, action: F, callback: C) -> Option<T>
    where
        F: FnMut() -> Result<T, E>,
        C: FnMut(&AttemptFailure<'_, E>) -> RetryDecision,
        E: fmt::Debug,
    {
        self.run(action, Some(callback)).value
    }

    /// Execute an operation with retry logic and return outcome statistics.
    #[instrument(
        skip(self, action, callback),
        fields(max_retries = self.config.max_retries, interval_ms = self.config.interval_millis())
    )]
    pub fn run<T, E, F, C>(&self, mut action: F, mut callback: Option<C>) -> RetryReport<T, E>
    where
        F: FnMut() -> Result<T, E>,
        C: FnMut(&AttemptFailure<'_, E>) -> RetryDecision,
        E: fmt::Debug,
    {
        let callback_registered = callback.is_some();
        let mut failures = Vec::new();
        let mut value = None;
        let mut total_delay = Duration::ZERO;
        let mut state = RetryState::Attempting;

        while let Some(retry) = state.pending_retry() {
            debug!(
                "Executing operation (attempt {}/{})",
                retry.saturating_add(1),
                self.config.attempt_budget()
            );

            state = match action() {
                Ok(result) => {
                    value = Some(result);
                    RetryState::Succeeded
                }
                Err(error) => {
                    let next = self.after_failure(retry, &error, callback.as_mut(), &mut total_delay);
                    failures.push(error);
                    next
                }
            };
        }

        match state {
            RetryState::Succeeded if !failures.is_empty() => {
                debug!("Operation succeeded after {} retries", failures.len());
            }
            RetryState::Stopped => {
                info!("Retry stopped by error callback after {} attempts", failures.len());
            }
            RetryState::Exhausted => {
                warn!(
                    "All retry attempts exhausted after {} tries, last error: {:?}",
                    failures.len(),
                    failures.last()
                );
            }
            _ => {}
        }

        RetryReport { state, value, failures, total_delay, callback_registered }
    }

    /// Transition out of a failed attempt.
    ///
    /// `retry` is the active retry counter for the attempt that just failed;
    /// zero means the initial attempt, which skips the callback and the
    /// delay.
    fn after_failure<E, C>(
        &self,
        retry: u32,
        error: &E,
        callback: Option<&mut C>,
        total_delay: &mut Duration,
    ) -> RetryState
    where
        C: FnMut(&AttemptFailure<'_, E>) -> RetryDecision,
        E: fmt::Debug,
    {
        if retry == 0 {
            warn!("Initial attempt failed: {:?}", error);
        } else {
            warn!("Retry {} of {} failed: {:?}", retry, self.config.max_retries, error);

            if let Some(callback) = callback {
                let failure = AttemptFailure { retry_count: retry, cause: error };
                if callback(&failure) == RetryDecision::Stop {
                    return RetryState::Stopped;
                }
            }

            if retry < self.config.max_retries {
                debug!("Waiting {:?} before retry {}", self.config.interval, retry + 1);
                self.sleeper.sleep(self.config.interval);
                *total_delay = total_delay.saturating_add(self.config.interval);
            }
        }

        if retry >= self.config.max_retries {
            RetryState::Exhausted
        } else {
            RetryState::Failed(retry + 1)
        }
    }
}

/// Convenience function mirroring the full contract: optional callback,
/// interval in milliseconds.
///
/// Returns `Ok(Some(value))` on success, `Ok(None)` when a callback was
/// given and the sequence stopped or ran out, and `Err` only when every
/// attempt failed with no callback registered.
pub fn execute<T, E, F, C>(
    max_retries: u32,
    interval_millis: u64,
    action: F,
    callback: Option<C>,
) -> RetryResult<Option<T>, E>
where
    F: FnMut() -> Result<T, E>,
    C: FnMut(&AttemptFailure<'_, E>) -> RetryDecision,
    E: fmt::Debug,
{
    RetryExecutor::new(RetryConfig::fixed(max_retries, interval_millis))
        .run(action, callback)
        .into_result()
}

/// Convenience function to retry without an error callback
pub fn retry<T, E, F>(max_retries: u32, interval_millis: u64, action: F) -> RetryResult<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Debug,
{
    RetryExecutor::new(RetryConfig::fixed(max_retries, interval_millis)).execute(action)
}

/// Convenience function to retry with an error callback
pub fn retry_with_callback<T, E, F, C>(
    max_retries: u32,
    interval_millis: u64,
    action: F,
    callback: C,
) -> Option<T>
where
    F: FnMut() -> Result<T, E>,
    C: FnMut(&AttemptFailure<'_, E>) -> RetryDecision,
    E: fmt::Debug,
{
    RetryExecutor::new(RetryConfig::fixed(max_retries, interval_millis))
        .execute_with_callback(action, callback)
}

#[cfg(test)]
mod tests {
    //! Unit tests for the retry executor
    //!
    //! Tests cover attempt accounting, callback invocation order, early stop,
    //! failure aggregation, and the delays requested between attempts.

    use super::*;
    use crate::testing::MockSleeper;

    #[derive(Debug, Clone, PartialEq)]
    struct AttemptError(usize);

    fn mock_executor(max_retries: u32, interval_millis: u64) -> (RetryExecutor<MockSleeper>, MockSleeper) {
        let sleeper = MockSleeper::new();
        let executor = RetryExecutor::with_sleeper(
            RetryConfig::fixed(max_retries, interval_millis),
            sleeper.clone(),
        );
        (executor, sleeper)
    }

    /// Validates that a succeeding operation runs exactly once.
    ///
    /// Assertions:
    /// - Confirms the operation ran once and returned its value.
    /// - Confirms the callback was never invoked and nothing slept.
    #[test]
    fn test_success_runs_once() {
        let (executor, sleeper) = mock_executor(3, 500);
        let mut calls = 0;
        let mut callbacks = 0;

        let report = executor.run(
            || {
                calls += 1;
                Ok::<_, AttemptError>("done")
            },
            Some(|_: &AttemptFailure<'_, AttemptError>| {
                callbacks += 1;
                RetryDecision::Continue
            }),
        );

        assert_eq!(calls, 1);
        assert_eq!(callbacks, 0);
        assert_eq!(report.state, RetryState::Succeeded);
        assert_eq!(report.value, Some("done"));
        assert_eq!(report.attempts(), 1);
        assert_eq!(report.retries(), 0);
        assert_eq!(sleeper.count(), 0);
    }

    /// Validates exhaustion without a callback for several retry budgets.
    ///
    /// Assertions:
    /// - Confirms the operation ran `max_retries + 1` times.
    /// - Confirms the aggregate error holds every failure in attempt order.
    #[test]
    fn test_exhaustion_without_callback_aggregates_failures() {
        for max_retries in 0..=4u32 {
            let (executor, _) = mock_executor(max_retries, 10);
            let mut calls = 0usize;

            let error = executor
                .execute(|| {
                    calls += 1;
                    Err::<(), _>(AttemptError(calls))
                })
                .expect_err("every attempt fails");

            let expected: Vec<_> = (1..=max_retries as usize + 1).map(AttemptError).collect();
            assert_eq!(calls, max_retries as usize + 1);
            assert_eq!(error.failures(), expected.as_slice());
        }
    }

    /// Validates that zero retries means a single attempt and a single entry.
    #[test]
    fn test_zero_retries_single_attempt() {
        let (executor, sleeper) = mock_executor(0, 100);
        let mut calls = 0;

        let error = executor
            .execute(|| {
                calls += 1;
                Err::<(), _>(AttemptError(calls))
            })
            .expect_err("single attempt fails");

        assert_eq!(calls, 1);
        assert_eq!(error.attempts(), 1);
        assert_eq!(sleeper.count(), 0);
    }

    /// Validates callback accounting when every attempt fails.
    ///
    /// Assertions:
    /// - Confirms retry counts `1, 2, 3` were reported in order.
    /// - Confirms each cause is the failure from the matching retry.
    /// - Confirms no value is returned and no error is raised.
    #[test]
    fn test_callback_sees_every_retry() {
        let (executor, _) = mock_executor(3, 100);
        let mut calls = 0usize;
        let mut seen = Vec::new();

        let value = executor.execute_with_callback(
            || {
                calls += 1;
                Err::<(), _>(AttemptError(calls))
            },
            |failure| {
                seen.push((failure.retry_count(), failure.cause().clone()));
                RetryDecision::Continue
            },
        );

        assert_eq!(value, None);
        assert_eq!(calls, 4);
        assert_eq!(
            seen,
            vec![(1, AttemptError(2)), (2, AttemptError(3)), (3, AttemptError(4))]
        );
    }

    /// Validates that stopping on retry `k` leaves `k + 1` invocations.
    #[test]
    fn test_callback_stop_abandons_remaining_retries() {
        for stop_at in 1..=3u32 {
            let (executor, _) = mock_executor(3, 100);
            let mut calls = 0usize;

            let report = executor.run(
                || {
                    calls += 1;
                    Err::<(), _>(AttemptError(calls))
                },
                Some(|failure: &AttemptFailure<'_, AttemptError>| {
                    if failure.retry_count() == stop_at {
                        RetryDecision::Stop
                    } else {
                        RetryDecision::Continue
                    }
                }),
            );

            assert_eq!(calls, stop_at as usize + 1);
            assert_eq!(report.state, RetryState::Stopped);
            assert_eq!(report.failures.len(), calls);
            assert!(matches!(report.into_result(), Ok(None)));
        }
    }

    /// Validates the delays requested from the sleeper.
    ///
    /// Assertions:
    /// - Confirms the initial failure and the final retry do not sleep.
    /// - Confirms each intermediate retry sleeps for the fixed interval.
    #[test]
    fn test_sleeps_between_retries_only() {
        let (executor, sleeper) = mock_executor(3, 100);

        let report = executor.run(|| Err::<(), _>(AttemptError(0)), None::<NoCallback<AttemptError>>);

        assert_eq!(report.state, RetryState::Exhausted);
        assert_eq!(sleeper.sleeps(), vec![Duration::from_millis(100); 2]);
        assert_eq!(report.total_delay, Duration::from_millis(200));

        let (executor, sleeper) = mock_executor(1, 100);
        let _ = executor.execute(|| Err::<(), _>(AttemptError(0)));
        assert_eq!(sleeper.count(), 0);
    }

    /// Validates that an unvalidated maximal interval accumulates without
    /// overflowing the total delay.
    ///
    /// Assertions:
    /// - Confirms two sleeps of `Duration::MAX` were requested.
    /// - Confirms `total_delay` saturates at `Duration::MAX`.
    #[test]
    fn test_total_delay_saturates() {
        let sleeper = MockSleeper::new();
        let config = RetryConfig { max_retries: 3, interval: Duration::MAX };
        let executor = RetryExecutor::with_sleeper(config, sleeper.clone());

        let report = executor.run(|| Err::<(), _>(AttemptError(0)), None::<NoCallback<AttemptError>>);

        assert_eq!(report.state, RetryState::Exhausted);
        assert_eq!(sleeper.count(), 2);
        assert_eq!(report.total_delay, Duration::MAX);
    }

    /// Validates that an early stop skips the delay for the stopping retry.
    #[test]
    fn test_stop_does_not_sleep() {
        let (executor, sleeper) = mock_executor(3, 100);

        let _ = executor.execute_with_callback(
            || Err::<(), _>(AttemptError(0)),
            |failure| {
                if failure.retry_count() == 2 {
                    RetryDecision::Stop
                } else {
                    RetryDecision::Continue
                }
            },
        );

        assert_eq!(sleeper.count(), 1);
    }

    /// Validates that success after failures returns the value and keeps the
    /// failure history in the report.
    #[test]
    fn test_success_after_failures() {
        let (executor, sleeper) = mock_executor(5, 50);
        let mut calls = 0usize;
        let mut callbacks = Vec::new();

        let report = executor.run(
            || {
                calls += 1;
                if calls < 4 {
                    Err(AttemptError(calls))
                } else {
                    Ok(calls)
                }
            },
            Some(|failure: &AttemptFailure<'_, AttemptError>| {
                callbacks.push(failure.retry_count());
                RetryDecision::Continue
            }),
        );

        assert!(report.is_success());
        assert_eq!(report.value, Some(4));
        assert_eq!(report.attempts(), 4);
        assert_eq!(report.retries(), 3);
        assert_eq!(report.failures.len(), 3);
        assert_eq!(callbacks, vec![1, 2]);
        assert_eq!(sleeper.count(), 2);
    }

    /// Validates the propagation policy applied by `RetryReport::into_result`.
    ///
    /// Assertions:
    /// - Ensures exhaustion without a callback is an error.
    /// - Ensures exhaustion with a callback is `Ok(None)`.
    #[test]
    fn test_into_result_policy() {
        let (executor, _) = mock_executor(2, 0);

        let without = executor.run(|| Err::<(), _>(AttemptError(0)), None::<NoCallback<AttemptError>>);
        assert!(matches!(without.into_result(), Err(RetryError::Exhausted { failures }) if failures.len() == 3));

        let with = executor.run(
            || Err::<(), _>(AttemptError(0)),
            Some(|_: &AttemptFailure<'_, AttemptError>| RetryDecision::Continue),
        );
        assert_eq!(with.state, RetryState::Exhausted);
        assert!(matches!(with.into_result(), Ok(None)));
    }

    /// Validates `RetryState` terminal classification.
    #[test]
    fn test_retry_state_terminal() {
        assert!(!RetryState::Attempting.is_terminal());
        assert!(!RetryState::Failed(2).is_terminal());
        assert!(RetryState::Stopped.is_terminal());
        assert!(RetryState::Exhausted.is_terminal());
        assert!(RetryState::Succeeded.is_terminal());
    }

    /// Validates `RetryDecision` defaults to continuing.
    #[test]
    fn test_retry_decision_default() {
        assert_eq!(RetryDecision::default(), RetryDecision::Continue);
        assert_ne!(RetryDecision::Continue, RetryDecision::Stop);
    }

    /// Validates the free `execute` function across all three endings.
    #[test]
    fn test_execute_function_contract() {
        assert_eq!(execute(3, 0, || Ok::<_, AttemptError>(1), None::<NoCallback<AttemptError>>).ok(), Some(Some(1)));

        let error = execute(1, 0, || Err::<(), _>(AttemptError(0)), None::<NoCallback<AttemptError>>)
            .expect_err("no callback means exhaustion is an error");
        assert_eq!(error.attempts(), 2);

        let handled = execute(
            1,
            0,
            || Err::<(), _>(AttemptError(0)),
            Some(|_: &AttemptFailure<'_, AttemptError>| RetryDecision::Continue),
        );
        assert!(matches!(handled, Ok(None)));
    }
}
