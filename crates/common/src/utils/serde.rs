//! Serialization helpers for configuration values

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Serde adapter encoding a [`Duration`] as whole milliseconds (u64)
///
/// Sub-millisecond precision is dropped on serialization; durations beyond
/// `u64::MAX` milliseconds saturate.
///
/// # Usage
/// ```rust
/// use std::time::Duration;
///
/// use serde::{Deserialize, Serialize};
/// use steadfast_common::duration_millis;
///
/// #[derive(Serialize, Deserialize)]
/// struct Polling {
///     #[serde(with = "duration_millis")]
///     every: Duration,
/// }
/// ```
pub mod duration_millis {
    use super::{Deserialize, Deserializer, Duration, Serializer};

    /// Serialize a Duration as milliseconds
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    /// Deserialize milliseconds into a Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
