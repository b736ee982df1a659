//! Version comparison against remote catalog version strings

use semver::Version;

/// Parse a remote catalog version string into a three-component version.
///
/// Remote versions are free-form text, so parsing is deliberately
/// conservative:
/// - anything containing a non-digit besides the '.' separators is
///   unparsable and yields `None`
/// - fewer than three numeric components collapse to 0.0.0
/// - extra components beyond the third are ignored
pub fn parse_remote_version(raw: &str) -> Option<Version> {
    let stripped: String = raw.chars().filter(|c| *c != '.').collect();
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let components: Vec<u64> = raw
        .split('.')
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    if components.len() < 3 {
        return Some(Version::new(0, 0, 0));
    }

    Some(Version::new(components[0], components[1], components[2]))
}

/// Returns true iff `installed` is strictly older than the remote version.
///
/// An unparsable remote version is never treated as newer; false positives
/// from non-semantic version strings are worse than a missed update.
pub fn is_outdated(installed: &Version, latest_raw: &str) -> bool {
    match parse_remote_version(latest_raw) {
        Some(latest) => *installed < latest,
        None => false,
    }
}
