//! Tests for install resolution against fabricated install trees.
//!
//! The resolver takes the override path and the platform descriptor as
//! arguments, so these tests never touch environment variables or the real
//! install roots.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use vexrun_core::resolver::FALLBACK_INSTALL_NAME;
use vexrun_core::{InstallLocations, ResolveError, Version, resolve, scan_install_root};

fn linux_locations(root: &std::path::Path) -> InstallLocations {
    InstallLocations {
        linux: root.to_path_buf(),
        ..InstallLocations::default()
    }
}

#[test]
fn test_scan_picks_newest_install() {
    let temp = tempdir().unwrap();
    for name in ["hfs12.5.726", "hfs13.0.376", "hfs9.0.100"] {
        fs::create_dir(temp.path().join(name)).unwrap();
    }

    let resolution = scan_install_root(temp.path(), "hfs").unwrap();

    assert_eq!(resolution.install, temp.path().join("hfs13.0.376"));
    assert_eq!(
        resolution.version,
        Version {
            major: 13,
            minor: 0,
            patch: 376
        }
    );
}

#[test]
fn test_scan_ignores_non_matching_names() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("hfs12.5.726")).unwrap();
    fs::create_dir(temp.path().join("blender-4.2.0")).unwrap();
    // Would out-rank the real install if the filter were not anchored
    fs::create_dir(temp.path().join("not-hfs99.0.0")).unwrap();

    let resolution = scan_install_root(temp.path(), "hfs").unwrap();

    assert_eq!(resolution.install, temp.path().join("hfs12.5.726"));
}

#[test]
fn test_scan_ignores_plain_files() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("hfs12.5.726")).unwrap();
    fs::write(temp.path().join("hfs14.0.0"), b"not a directory").unwrap();

    let resolution = scan_install_root(temp.path(), "hfs").unwrap();

    assert_eq!(resolution.install, temp.path().join("hfs12.5.726"));
}

#[test]
fn test_empty_root_returns_sentinel_without_error() {
    let temp = tempdir().unwrap();

    let resolution = scan_install_root(temp.path(), "hfs").unwrap();

    assert_eq!(resolution.install, temp.path().join(FALLBACK_INSTALL_NAME));
    assert_eq!(resolution.version, Version::ZERO);
}

#[test]
fn test_malformed_candidate_aborts_scan() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("hfs13.0.376")).unwrap();
    fs::create_dir(temp.path().join("hfs13")).unwrap();

    let err = scan_install_root(temp.path(), "hfs").unwrap_err();

    assert!(matches!(
        err,
        ResolveError::UnexpectedVersionFormat { name } if name == "hfs13"
    ));
}

#[test]
fn test_missing_root_is_a_scan_error() {
    let root = PathBuf::from("/nonexistent/install/root");

    let err = scan_install_root(&root, "hfs").unwrap_err();

    assert!(matches!(err, ResolveError::ScanFailed { .. }));
}

#[test]
fn test_resolve_scans_platform_root() {
    let temp = tempdir().unwrap();
    for name in ["hfs12.5.726", "hfs13.0.376"] {
        fs::create_dir(temp.path().join(name)).unwrap();
    }
    let locations = linux_locations(temp.path());

    let resolution = resolve(&locations, "Linux-5.15-generic", None).unwrap();

    assert_eq!(resolution.install, temp.path().join("hfs13.0.376"));
}

#[test]
fn test_resolve_override_bypasses_scan() {
    // Default locations point at real system paths; the override must win
    // without the scan ever running
    let locations = InstallLocations::default();

    let resolution = resolve(&locations, "Linux", Some("/custom/Houdini 14.0.1")).unwrap();

    assert_eq!(resolution.install, PathBuf::from("/custom/Houdini 14.0.1"));
    assert_eq!(
        resolution.version,
        Version {
            major: 14,
            minor: 0,
            patch: 1
        }
    );
}

#[test]
fn test_resolve_override_wins_even_on_unknown_platform() {
    let locations = InstallLocations::default();

    let resolution = resolve(&locations, "Plan9", Some("/custom/hfs15.0.2")).unwrap();

    assert_eq!(resolution.install, PathBuf::from("/custom/hfs15.0.2"));
}

#[test]
fn test_resolve_unknown_platform_is_fatal() {
    let locations = InstallLocations::default();

    let err = resolve(&locations, "Plan9", None).unwrap_err();

    assert!(matches!(
        err,
        ResolveError::UnknownPlatform { descriptor } if descriptor == "Plan9"
    ));
}
