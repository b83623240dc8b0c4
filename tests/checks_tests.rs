// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-integrity checks, run the way the test suite consumes them.

use country_names::checks::{self, CheckKind};
use country_names::{data, flags};
use std::fs;

#[test]
fn test_ioc_countries() {
    let anomalies = checks::check_ioc_countries();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_common_names() {
    let anomalies = checks::check_common_names();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_codes_unique_and_well_formed() {
    let anomalies = checks::check_codes();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_catalog_keys_exist() {
    let anomalies = checks::check_catalogs();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_flags_complete_directory() {
    let dir = tempfile::tempdir().unwrap();
    for record in data::all() {
        let path = dir.path().join(flags::flag_path(record.alpha2));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"GIF89a").unwrap();
    }
    fs::write(dir.path().join(flags::FLAGS_DIR).join("README"), b"not a flag").unwrap();

    let anomalies = checks::check_flags(&dir.path().join(flags::FLAGS_DIR)).unwrap();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_flags_reports_missing_assets() {
    let dir = tempfile::tempdir().unwrap();
    for record in data::all().iter().filter(|r| r.alpha2 != "NZ") {
        fs::write(
            dir.path().join(format!("{}.gif", record.alpha2.to_lowercase())),
            b"GIF89a",
        )
        .unwrap();
    }
    // Nested directories are not searched.
    fs::create_dir(dir.path().join("extra")).unwrap();
    fs::write(dir.path().join("extra").join("nz.gif"), b"GIF89a").unwrap();

    let anomalies = checks::check_flags(dir.path()).unwrap();
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].check, CheckKind::Flags);
    assert_eq!(anomalies[0].code, "NZ");
    assert_eq!(anomalies[0].detail, "missing nz.gif");
}

#[test]
fn test_flags_unreadable_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(checks::check_flags(&dir.path().join("missing")).is_err());
}

#[test]
fn test_run_all_without_flags() {
    let anomalies = checks::run_all(None).unwrap();
    assert!(anomalies.is_empty(), "{:?}", anomalies);
}

#[test]
fn test_run_all_with_empty_flags_dir() {
    let dir = tempfile::tempdir().unwrap();
    let anomalies = checks::run_all(Some(dir.path())).unwrap();
    assert_eq!(anomalies.len(), data::all().len());
    assert!(anomalies.iter().all(|a| a.check == CheckKind::Flags));
}
