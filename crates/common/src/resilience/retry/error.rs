//! Error types for retry execution

use thiserror::Error;

/// Errors that can occur during retry operations
///
/// The executor never surfaces an individual attempt's failure directly. When
/// every permitted attempt fails and no error callback was registered, the
/// whole history comes back at once as [`RetryError::Exhausted`].
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// All retry attempts have been exhausted
    #[error("All {} attempts failed", .failures.len())]
    Exhausted {
        /// Every failure encountered, in attempt order
        failures: Vec<E>,
    },
}

impl<E> RetryError<E> {
    /// Failures in attempt order
    pub fn failures(&self) -> &[E] {
        match self {
            Self::Exhausted { failures } => failures,
        }
    }

    /// Consume the error and return the recorded failures
    pub fn into_failures(self) -> Vec<E> {
        match self {
            Self::Exhausted { failures } => failures,
        }
    }

    /// Number of times the operation was invoked
    pub fn attempts(&self) -> usize {
        self.failures().len()
    }

    /// Failure from the final attempt
    pub fn last_failure(&self) -> Option<&E> {
        self.failures().last()
    }
}

/// Result type for retry operations
pub type RetryResult<T, E> = Result<T, RetryError<E>>;

/// Simple configuration error for validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field is outside its accepted range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Which field was rejected and why
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid { message: message.into() }
    }
}

/// Configuration result type using simple config errors
pub type ConfigResult<T> = Result<T, ConfigError>;
