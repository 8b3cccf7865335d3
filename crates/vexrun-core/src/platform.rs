//! Platform detection for install-root selection.

use crate::error::ResolveError;

/// Platforms with a known Houdini install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows (Program Files-style root, "Houdini X.Y.Z" directories)
    Windows,
    /// macOS (/Applications root, "Houdini X.Y.Z" directories)
    MacOs,
    /// Linux (package root, "hfsX.Y.Z" directories)
    Linux,
}

impl Platform {
    /// Match a platform descriptor against the known install layouts.
    ///
    /// The match is a case-insensitive prefix check ("win", "dar", "lin"),
    /// mirroring uname-style descriptors such as "Windows-10" or
    /// "Darwin-21.3". Anything else is a fatal `UnknownPlatform` error.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, ResolveError> {
        let lower = descriptor.to_ascii_lowercase();
        if lower.starts_with("win") {
            Ok(Platform::Windows)
        } else if lower.starts_with("dar") {
            Ok(Platform::MacOs)
        } else if lower.starts_with("lin") {
            Ok(Platform::Linux)
        } else {
            Err(ResolveError::UnknownPlatform {
                descriptor: descriptor.to_string(),
            })
        }
    }

    /// Get the display name for this platform.
    pub fn display_name(&self) -> &str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Uname-style descriptor for the running OS.
///
/// Feeds `Platform::from_descriptor`; unsupported targets fall through to
/// `std::env::consts::OS` and fail platform detection downstream.
pub fn os_descriptor() -> &'static str {
    if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "macos") {
        "Darwin"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else {
        std::env::consts::OS
    }
}
