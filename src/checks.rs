// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-integrity checks over the static tables.
//!
//! Each check returns the anomalies it found; an empty vector means the data
//! is consistent. They run in the test suite and behind `country-names
//! check`, never on the lookup path.

use crate::data::{self, COMMON_NAMES, IOC_CODES};
use crate::flags;
use crate::i18n::{self, Lang};
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static ALPHA2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());
static ALPHA3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Codes,
    Ioc,
    CommonNames,
    Catalogs,
    Flags,
}

impl CheckKind {
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Codes => "ISO codes",
            CheckKind::Ioc => "IOC codes",
            CheckKind::CommonNames => "common names",
            CheckKind::Catalogs => "name catalogs",
            CheckKind::Flags => "flag assets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub check: CheckKind,
    pub code: String,
    pub detail: String,
}

impl Anomaly {
    fn new(check: CheckKind, code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            check,
            code: code.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.check.label(), self.code, self.detail)
    }
}

/// Code formats, numeric range, and uniqueness of all three code columns.
pub fn check_codes() -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    let mut alpha2_seen = HashSet::new();
    let mut alpha3_seen = HashSet::new();
    let mut numeric_seen = HashSet::new();

    for record in data::all() {
        if !ALPHA2_RE.is_match(record.alpha2) {
            anomalies.push(Anomaly::new(CheckKind::Codes, record.alpha2, "malformed alpha-2 code"));
        }
        if !ALPHA3_RE.is_match(record.alpha3) {
            anomalies.push(Anomaly::new(
                CheckKind::Codes,
                record.alpha2,
                format!("malformed alpha-3 code '{}'", record.alpha3),
            ));
        }
        if !(1..=999).contains(&record.numeric) {
            anomalies.push(Anomaly::new(
                CheckKind::Codes,
                record.alpha2,
                format!("numeric code {} out of range", record.numeric),
            ));
        }
        if !alpha2_seen.insert(record.alpha2) {
            anomalies.push(Anomaly::new(CheckKind::Codes, record.alpha2, "duplicate alpha-2 code"));
        }
        if !alpha3_seen.insert(record.alpha3) {
            anomalies.push(Anomaly::new(
                CheckKind::Codes,
                record.alpha2,
                format!("duplicate alpha-3 code '{}'", record.alpha3),
            ));
        }
        if !numeric_seen.insert(record.numeric) {
            anomalies.push(Anomaly::new(
                CheckKind::Codes,
                record.alpha2,
                format!("duplicate numeric code {}", record.numeric_padded()),
            ));
        }
    }
    anomalies
}

/// Every IOC entry must name a real country and carry a unique,
/// well-formed code.
pub fn check_ioc_countries() -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for &(alpha2, ioc) in IOC_CODES {
        if data::by_alpha2(alpha2).is_none() {
            anomalies.push(Anomaly::new(
                CheckKind::Ioc,
                alpha2,
                format!("IOC code {} assigned to unknown country", ioc),
            ));
        }
        if !ALPHA3_RE.is_match(ioc) {
            anomalies.push(Anomaly::new(
                CheckKind::Ioc,
                alpha2,
                format!("malformed IOC code '{}'", ioc),
            ));
        }
        if let Some(previous) = owners.insert(ioc, alpha2) {
            anomalies.push(Anomaly::new(
                CheckKind::Ioc,
                alpha2,
                format!("IOC code {} already assigned to {}", ioc, previous),
            ));
        }
    }
    anomalies
}

/// Countries in the table with no IOC code. Informational: many
/// territories have no National Olympic Committee.
pub fn missing_ioc_codes() -> Vec<&'static str> {
    data::all()
        .iter()
        .map(|record| record.alpha2)
        .filter(|alpha2| data::ioc_code(alpha2).is_empty())
        .collect()
}

/// Every common-name alias must refer to a real code, and should actually
/// differ from the official name.
pub fn check_common_names() -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    for &(alpha2, common) in COMMON_NAMES {
        match data::by_alpha2(alpha2) {
            None => anomalies.push(Anomaly::new(
                CheckKind::CommonNames,
                alpha2,
                format!("alias '{}' for unknown country", common),
            )),
            Some(record) if record.name == common => anomalies.push(Anomaly::new(
                CheckKind::CommonNames,
                alpha2,
                "alias is identical to the official name",
            )),
            Some(_) => {}
        }
    }
    anomalies
}

/// Every localized catalog entry must be keyed by a real code.
pub fn check_catalogs() -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    for &lang in Lang::all() {
        for &(alpha2, _) in i18n::catalog(lang) {
            if data::by_alpha2(alpha2).is_none() {
                anomalies.push(Anomaly::new(
                    CheckKind::Catalogs,
                    alpha2,
                    format!("{} catalog entry for unknown country", lang),
                ));
            }
        }
    }
    anomalies
}

/// Every country needs `<dir>/<code>.gif`.
///
/// Fails only when `dir` cannot be read.
pub fn check_flags(dir: &Path) -> Result<Vec<Anomaly>> {
    if !dir.is_dir() {
        bail!("flag directory {} does not exist", dir.display());
    }
    let mut present = HashSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("reading flag directory {}", dir.display()))?;
        if entry.file_type().is_file() {
            present.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(data::all()
        .iter()
        .filter(|record| !present.contains(&flags::flag_file_name(record.alpha2)))
        .map(|record| {
            Anomaly::new(
                CheckKind::Flags,
                record.alpha2,
                format!("missing {}", flags::flag_file_name(record.alpha2)),
            )
        })
        .collect())
}

/// Every check. Flags are skipped unless a directory is given.
pub fn run_all(flags_dir: Option<&Path>) -> Result<Vec<Anomaly>> {
    let mut anomalies = check_codes();
    anomalies.extend(check_ioc_countries());
    anomalies.extend(check_common_names());
    anomalies.extend(check_catalogs());
    if let Some(dir) = flags_dir {
        anomalies.extend(check_flags(dir)?);
    }
    Ok(anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_data_is_consistent() {
        for anomalies in [
            check_codes(),
            check_ioc_countries(),
            check_common_names(),
            check_catalogs(),
        ] {
            assert!(anomalies.is_empty(), "unexpected anomalies: {:?}", anomalies);
        }
    }

    #[test]
    fn missing_ioc_codes_are_territories() {
        let missing = missing_ioc_codes();
        assert!(missing.contains(&"AQ"));
        assert!(missing.contains(&"GL"));
        assert!(!missing.contains(&"NZ"));
        assert_eq!(missing.len(), data::all().len() - IOC_CODES.len());
    }

    #[test]
    fn anomaly_display() {
        let anomaly = Anomaly::new(CheckKind::Flags, "NZ", "missing nz.gif");
        assert_eq!(anomaly.to_string(), "[flag assets] NZ: missing nz.gif");
    }
}
