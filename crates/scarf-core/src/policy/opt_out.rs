//! Opt-out and verbosity flags.

use super::Environment;
use crate::constants::{ENV_DO_NOT_TRACK, ENV_NO_ANALYTICS, ENV_VERBOSE};

/// Reads the opt-out and verbosity variables from a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentPolicy;

impl EnvironmentPolicy {
    /// True when either opt-out variable is truthy.
    pub fn is_disabled(env: &Environment) -> bool {
        is_truthy(env.get(ENV_DO_NOT_TRACK)) || is_truthy(env.get(ENV_NO_ANALYTICS))
    }

    /// True when diagnostic output is requested. Does not affect sending.
    pub fn is_verbose(env: &Environment) -> bool {
        is_truthy(env.get(ENV_VERBOSE))
    }
}

/// `1`, `true`, `yes` or `on`, trimmed and case-insensitive.
/// Absent, empty, and every other value are falsy.
pub fn is_truthy(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let value = value.trim();
    ["1", "true", "yes", "on"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
}
