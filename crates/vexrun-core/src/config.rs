//! Configurable install locations.
//!
//! The per-platform default roots live in an injectable record rather than
//! global constants, so tests can point the resolver at a fabricated tree.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Default Windows install root.
pub const WINDOWS_DEFAULT_ROOT: &str = "C:/Program Files/Side Effects Software";
/// Default macOS install root.
pub const MACOS_DEFAULT_ROOT: &str = "/Applications";
/// Default Linux install root.
pub const LINUX_DEFAULT_ROOT: &str = "/opt";

/// Name filter for Windows and macOS installs ("Houdini 13.0.376").
pub const HOUDINI_PREFIX: &str = "Houdini";
/// Name filter for Linux installs ("hfs13.0.376").
pub const HFS_PREFIX: &str = "hfs";

/// Per-platform install roots used by the latest-version scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLocations {
    /// Install root on Windows.
    pub windows: PathBuf,
    /// Install root on macOS.
    pub macos: PathBuf,
    /// Install root on Linux.
    pub linux: PathBuf,
}

impl Default for InstallLocations {
    fn default() -> Self {
        Self {
            windows: PathBuf::from(WINDOWS_DEFAULT_ROOT),
            macos: PathBuf::from(MACOS_DEFAULT_ROOT),
            linux: PathBuf::from(LINUX_DEFAULT_ROOT),
        }
    }
}

impl InstallLocations {
    /// Get the search root and name-filter prefix for a platform.
    pub fn search_root(&self, platform: Platform) -> (&Path, &'static str) {
        match platform {
            Platform::Windows => (&self.windows, HOUDINI_PREFIX),
            Platform::MacOs => (&self.macos, HOUDINI_PREFIX),
            Platform::Linux => (&self.linux, HFS_PREFIX),
        }
    }
}
