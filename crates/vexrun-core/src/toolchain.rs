//! Toolchain binary and artifact path conventions.
//!
//! A resolved install keeps its executables under `bin/`. Compiled programs
//! sit next to their source with the extension swapped.

use std::path::{Path, PathBuf};

/// Extension of VEX source files.
pub const SOURCE_EXTENSION: &str = "vfl";
/// Extension of compiled VEX artifacts.
pub const ARTIFACT_EXTENSION: &str = "vex";

/// Get the binary directory of an install.
pub fn bin_dir(install: &Path) -> PathBuf {
    install.join("bin")
}

/// Get the path to the `vcc` compiler of an install.
pub fn vcc_path(install: &Path) -> PathBuf {
    #[cfg(target_os = "windows")]
    let binary_name = "vcc.exe";

    #[cfg(not(target_os = "windows"))]
    let binary_name = "vcc";

    bin_dir(install).join(binary_name)
}

/// Get the path to the `vexexec` runner of an install.
pub fn vexexec_path(install: &Path) -> PathBuf {
    #[cfg(target_os = "windows")]
    let binary_name = "vexexec.exe";

    #[cfg(not(target_os = "windows"))]
    let binary_name = "vexexec";

    bin_dir(install).join(binary_name)
}

/// Compute the compiled-artifact path for a source file.
///
/// Same directory and stem, with the extension replaced.
pub fn artifact_path(source: &Path) -> PathBuf {
    source.with_extension(ARTIFACT_EXTENSION)
}
