//! Error types for install resolution.
//!
//! Provides semantic errors for platform selection and install scanning
//! without exposing adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a Houdini install.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The platform descriptor matched none of the known install layouts.
    #[error("Unknown platform '{descriptor}', cannot find a Houdini install")]
    UnknownPlatform { descriptor: String },

    /// A candidate install name yielded fewer than three version components.
    #[error("Unexpected version format in install name '{name}'")]
    UnexpectedVersionFormat { name: String },

    /// The install root could not be enumerated.
    #[error("Failed to scan install root {root}: {reason}")]
    ScanFailed { root: PathBuf, reason: String },
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
