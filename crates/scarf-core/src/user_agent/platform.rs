//! Platform name normalization.

use crate::constants::UNKNOWN;

/// Map a raw OS name onto `macOS`, `linux` or `windows`.
/// Anything else is returned lowercased; blank becomes `unknown`.
pub fn normalize_platform(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if lower.contains("mac") || lower.contains("darwin") {
        "macOS".to_string()
    } else if lower.contains("linux") {
        "linux".to_string()
    } else if lower.contains("windows") {
        "windows".to_string()
    } else if lower.is_empty() {
        UNKNOWN.to_string()
    } else {
        lower
    }
}

/// Trimmed value, or `unknown` if blank.
pub(crate) fn or_unknown(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}
