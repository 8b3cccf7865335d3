//! Version-triple parsing for install directory names.
//!
//! Install directories embed their version in the name ("Houdini 13.0.376"
//! on Windows and macOS, "hfs13.0.376" on Linux). The parser extracts every
//! maximal run of decimal digits from the name, left to right, and treats
//! the first three as (major, minor, patch).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ResolveError;

/// Longest digit run captured as a single version component.
///
/// Runs longer than this are split, so "99999" parses as [9999, 9]. Existing
/// install names rely on this split for build numbers; do not raise the cap.
pub const MAX_COMPONENT_DIGITS: usize = 4;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[0-9]{{1,{MAX_COMPONENT_DIGITS}}}"))
        .expect("digit-run pattern is valid")
});

/// Extract every bounded digit run from a name, in order of appearance.
///
/// Returns one integer per run. Callers requiring exactly three components
/// must validate the length themselves.
pub fn digit_groups(name: &str) -> Vec<u32> {
    DIGIT_RUN
        .find_iter(name)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// A (major, minor, patch) install version.
///
/// Ordering is lexicographic over the triple, which matches how installs
/// are ranked during the latest-version scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// The sentinel used to seed the latest-version scan.
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Parse a version from a scanned install directory name.
    ///
    /// Requires at least three digit groups; fewer is a fatal
    /// `UnexpectedVersionFormat` error.
    pub fn from_install_name(name: &str) -> Result<Self, ResolveError> {
        let groups = digit_groups(name);
        if groups.len() < 3 {
            return Err(ResolveError::UnexpectedVersionFormat {
                name: name.to_string(),
            });
        }
        Ok(Version {
            major: groups[0],
            minor: groups[1],
            patch: groups[2],
        })
    }

    /// Parse a version from a trusted override path leaf.
    ///
    /// The override is not validated; missing components default to zero.
    pub fn from_override_name(name: &str) -> Self {
        let groups = digit_groups(name);
        let component = |i: usize| groups.get(i).copied().unwrap_or(0);
        Version {
            major: component(0),
            minor: component(1),
            patch: component(2),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
