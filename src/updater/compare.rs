//! Version ordering helpers for the update gate

use semver::Version;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "6" or "6.4" by padding with zeros, since
/// host and runtime requirements are commonly published as major.minor.
///
/// Examples:
/// - "6" -> Version(6, 0, 0)
/// - "6.4" -> Version(6, 4, 0)
/// - "6.4.1" -> Version(6, 4, 1)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Strict `a < b` over version strings.
///
/// Returns `false` when either side fails to parse, so a malformed remote
/// version never passes a gate condition.
pub fn older_than(a: &str, b: &str) -> bool {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Inclusive `a <= b` over version strings.
///
/// Returns `false` when either side fails to parse.
pub fn at_most(a: &str, b: &str) -> bool {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => a <= b,
        _ => false,
    }
}
