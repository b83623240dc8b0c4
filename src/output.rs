// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of country listings

use crate::types::Country;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn serialize(&self, countries: &[Country]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(format_as_text(countries)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(countries)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(countries)?),
        }
    }
}

fn format_as_text(countries: &[Country]) -> String {
    let mut lines: Vec<String> = countries.iter().map(ToString::to_string).collect();
    lines.push(String::new());
    lines.join("\n")
}
