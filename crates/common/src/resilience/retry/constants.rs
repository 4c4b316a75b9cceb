// Constants for retry module
use std::time::Duration;

/// Default number of retries after the initial attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default fixed delay between attempts
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Maximum allowed max_retries value
pub const MAX_MAX_RETRIES: u32 = 100;

/// Maximum allowed interval between attempts
pub const MAX_INTERVAL: Duration = Duration::from_secs(60 * 60);
