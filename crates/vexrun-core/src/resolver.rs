//! Latest-version install scan and override resolution.
//!
//! `resolve` is the entry point: an explicit override path wins outright;
//! otherwise the platform's install root is enumerated and the candidate
//! with the highest (major, minor, patch) triple is chosen.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::InstallLocations;
use crate::error::ResolveError;
use crate::platform::Platform;
use crate::version::Version;

/// Placeholder name paired with the sentinel version when no candidate
/// matches the filter. The caller fails later when the path is used.
pub const FALLBACK_INSTALL_NAME: &str = "Houdini 0.0.0";

/// A resolved install: the absolute install path and its parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Full path to the chosen install directory.
    pub install: PathBuf,
    /// Version triple parsed from the install name.
    pub version: Version,
}

/// Pick the highest-versioned name from pre-filtered candidates.
///
/// The running best starts at the (0,0,0) sentinel. A candidate replaces
/// the best iff its triple is strictly greater; equal triples never
/// replace, so the first-seen of a tie group wins. A candidate with fewer
/// than three digit groups aborts the whole scan.
pub fn select_latest<I, S>(names: I) -> Result<(String, Version), ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best_name = FALLBACK_INSTALL_NAME.to_string();
    let mut best = Version::ZERO;

    for name in names {
        let name = name.as_ref();
        let version = Version::from_install_name(name)?;
        if version > best {
            best_name = name.to_string();
            best = version;
        }
    }

    Ok((best_name, best))
}

/// Scan an install root for the newest install matching a name prefix.
///
/// Only immediate subdirectories are considered. Zero matches is not an
/// error; the sentinel result is returned and the caller fails later if it
/// tries to use the placeholder path.
pub fn scan_install_root(root: &Path, prefix: &str) -> Result<Resolution, ResolveError> {
    let entries = fs::read_dir(root).map_err(|e| ResolveError::ScanFailed {
        root: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ResolveError::ScanFailed {
            root: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(prefix) {
            candidates.push(name.to_string());
        }
    }
    debug!(
        root = %root.display(),
        prefix,
        count = candidates.len(),
        "scanned install root"
    );

    let (name, version) = select_latest(candidates)?;
    Ok(Resolution {
        install: root.join(name),
        version,
    })
}

/// Resolve an install from an override path or a platform scan.
///
/// An override (the CLI passes the `HFS` environment value) is trusted: its
/// leaf is parsed leniently and the filesystem is never touched. Without an
/// override, the platform descriptor selects the install root to scan.
pub fn resolve(
    locations: &InstallLocations,
    descriptor: &str,
    override_path: Option<&str>,
) -> Result<Resolution, ResolveError> {
    if let Some(raw) = override_path {
        let install = PathBuf::from(raw);
        let leaf = install
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let version = Version::from_override_name(&leaf);
        debug!(install = %install.display(), %version, "using override install");
        return Ok(Resolution { install, version });
    }

    let platform = Platform::from_descriptor(descriptor)?;
    let (root, prefix) = locations.search_root(platform);
    scan_install_root(root, prefix)
}
