//! Common utility functions
//!
//! This module provides reusable utilities including:
//! - **[`serde`]**: Serialization helpers for configuration values

pub mod serde;

// Re-export commonly used items for convenience
pub use self::serde::duration_millis;
