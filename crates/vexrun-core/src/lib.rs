//! Install discovery and version resolution for the vexrun tool.
//!
//! This crate locates a local Houdini installation so the CLI can shell out
//! to the `vcc` compiler and the `vexexec` runner. It provides:
//! - Version-triple parsing from install directory names
//! - Platform-specific install roots and name filters
//! - The latest-version scan over an install root
//! - Override resolution via an explicit parameter (the CLI reads `HFS`)
//!
//! # Design
//!
//! - Pure with respect to the environment: the override path and the platform
//!   descriptor are arguments, never read from `std::env` here
//! - Returns semantic errors via `ResolveError`; no interactive I/O

pub mod config;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod toolchain;
pub mod version;

// Re-export primary types for convenient access
pub use config::InstallLocations;
pub use error::ResolveError;
pub use platform::{Platform, os_descriptor};
pub use resolver::{Resolution, resolve, scan_install_root, select_latest};
pub use version::Version;
