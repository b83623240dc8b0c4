// SPDX-License-Identifier: PMPL-1.0-or-later

//! `country-names check`: run the data-integrity checks and print a
//! diagnostic line per check.

use crate::checks::{self, Anomaly, CheckKind};
use crate::data;
use anyhow::{anyhow, Result};
use colored::*;
use std::path::Path;

pub fn run_checks(flags_dir: Option<&Path>, verbose: bool) -> Result<()> {
    println!("country-names data checks");

    let mut diagnostics = vec![
        Diagnostic::ok(
            "version",
            format!("country-names {}", env!("CARGO_PKG_VERSION")),
        ),
        Diagnostic::ok("country table", format!("{} records", data::all().len())),
        from_anomalies(CheckKind::Codes, checks::check_codes(), verbose),
        from_anomalies(CheckKind::Ioc, checks::check_ioc_countries(), verbose),
        from_anomalies(CheckKind::CommonNames, checks::check_common_names(), verbose),
        from_anomalies(CheckKind::Catalogs, checks::check_catalogs(), verbose),
    ];

    let missing = checks::missing_ioc_codes();
    if verbose && !missing.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "IOC coverage",
            format!("no IOC code for {}", missing.join(", ")),
        ));
    }

    diagnostics.push(match flags_dir {
        Some(dir) => match checks::check_flags(dir) {
            Ok(anomalies) => from_anomalies(CheckKind::Flags, anomalies, verbose),
            Err(err) => Diagnostic::error(CheckKind::Flags.label(), format!("{:#}", err)),
        },
        None => Diagnostic::warning(
            CheckKind::Flags.label(),
            "skipped (pass --flags-dir to check)".to_string(),
        ),
    });

    println!();
    for entry in &diagnostics {
        entry.print();
    }

    if diagnostics
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("data checks reported issues"))
    } else {
        Ok(())
    }
}

fn from_anomalies(kind: CheckKind, anomalies: Vec<Anomaly>, verbose: bool) -> Diagnostic {
    if anomalies.is_empty() {
        return Diagnostic::ok(kind.label(), "consistent".to_string());
    }
    let mut detail = format!("{} anomalies", anomalies.len());
    if verbose {
        for anomaly in &anomalies {
            detail.push_str(&format!("\n{:27}{}", "", anomaly));
        }
    }
    Diagnostic::error(kind.label(), detail)
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}
