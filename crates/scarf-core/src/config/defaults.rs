// Single source of truth for all default values.

/// Default per-request deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

/// Default product token in the user-agent.
pub const DEFAULT_PRODUCT: &str = crate::constants::PRODUCT_NAME;
