//! Names and sentinels shared across the client.

/// Product token at the start of the user-agent string.
pub const PRODUCT_NAME: &str = "scarf-rust";

/// Version reported when no packaged version metadata is available.
pub const VERSION_SENTINEL: &str = "dev";

/// Placeholder for host facts that could not be determined.
pub const UNKNOWN: &str = "unknown";

// --- Environment variables ---

/// Generic cross-tool opt-out.
pub const ENV_DO_NOT_TRACK: &str = "DO_NOT_TRACK";
/// Scarf-specific opt-out.
pub const ENV_NO_ANALYTICS: &str = "SCARF_NO_ANALYTICS";
/// Enables diagnostic output on stderr.
pub const ENV_VERBOSE: &str = "SCARF_VERBOSE";
/// Filter directive for the tracing subscriber.
pub const ENV_LOG: &str = "SCARF_LOG";

// --- HTTP ---

pub const CONTENT_TYPE_JSON: &str = "application/json";
