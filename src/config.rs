// SPDX-License-Identifier: PMPL-1.0-or-later

//! View configuration.
//!
//! `CountriesConfig` carries the `COUNTRIES_*` settings. It can be built in
//! code, loaded from a JSON or YAML file whose top-level keys are the setting
//! names, and overlaid with process environment variables of the same names.

use crate::name::CountryName;
use anyhow::{anyhow, bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const OVERRIDE_KEY: &str = "COUNTRIES_OVERRIDE";
pub const ONLY_KEY: &str = "COUNTRIES_ONLY";
pub const FIRST_KEY: &str = "COUNTRIES_FIRST";
pub const FIRST_BREAK_KEY: &str = "COUNTRIES_FIRST_BREAK";
pub const FIRST_REPEAT_KEY: &str = "COUNTRIES_FIRST_REPEAT";
pub const COMMON_NAMES_KEY: &str = "COUNTRIES_COMMON_NAMES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountriesConfig {
    /// Per-code additions and renames; `None` removes the code.
    #[serde(rename = "COUNTRIES_OVERRIDE", alias = "override")]
    pub overrides: BTreeMap<String, Option<CountryName>>,

    /// Exclusive allow-list. When set, the base table and `overrides` are
    /// ignored.
    #[serde(rename = "COUNTRIES_ONLY", alias = "only")]
    pub only: Option<Restriction>,

    #[serde(rename = "COUNTRIES_FIRST", alias = "first")]
    pub first: Vec<String>,

    #[serde(rename = "COUNTRIES_FIRST_BREAK", alias = "first_break")]
    pub first_break: Option<String>,

    #[serde(rename = "COUNTRIES_FIRST_REPEAT", alias = "first_repeat")]
    pub first_repeat: bool,

    #[serde(rename = "COUNTRIES_COMMON_NAMES", alias = "common_names")]
    pub common_names: bool,
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            only: None,
            first: Vec::new(),
            first_break: None,
            first_repeat: false,
            common_names: true,
        }
    }
}

/// The `COUNTRIES_ONLY` setting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Restriction {
    /// Codes whose names come from the country table.
    Codes(Vec<String>),
    /// Codes with their own names; need not exist in the table.
    Names(BTreeMap<String, CountryName>),
}

impl Restriction {
    /// An empty restriction leaves the table unrestricted.
    pub fn is_empty(&self) -> bool {
        match self {
            Restriction::Codes(codes) => codes.is_empty(),
            Restriction::Names(names) => names.is_empty(),
        }
    }
}

impl CountriesConfig {
    /// Load settings from a `.json`, `.yaml` or `.yml` file. Missing keys
    /// keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_yaml(path)
    }

    /// Defaults overlaid with `COUNTRIES_*` process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().merge_vars(std::env::vars())
    }

    /// Overlay `COUNTRIES_*` variables onto this configuration.
    ///
    /// `COUNTRIES_OVERRIDE` and `COUNTRIES_ONLY` hold JSON. `COUNTRIES_FIRST`
    /// is a JSON array or a comma-separated list. Booleans accept
    /// `true/false`, `1/0`, `yes/no` and `on/off`. Unrelated variables are
    /// ignored.
    pub fn merge_vars<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                OVERRIDE_KEY => self.overrides = parse_json_var(key, value)?,
                ONLY_KEY => self.only = Some(parse_json_var(key, value)?),
                FIRST_KEY => self.first = parse_list_var(key, value)?,
                FIRST_BREAK_KEY => {
                    self.first_break = Some(value.to_string()).filter(|label| !label.is_empty())
                }
                FIRST_REPEAT_KEY => self.first_repeat = parse_bool_var(key, value)?,
                COMMON_NAMES_KEY => self.common_names = parse_bool_var(key, value)?,
                _ => continue,
            }
            tracing::debug!(key, "applied setting from environment");
        }
        Ok(self)
    }

    pub fn with_override(mut self, code: impl Into<String>, name: impl Into<CountryName>) -> Self {
        self.overrides.insert(code.into(), Some(name.into()));
        self
    }

    pub fn without(mut self, code: impl Into<String>) -> Self {
        self.overrides.insert(code.into(), None);
        self
    }

    pub fn with_only(mut self, only: Restriction) -> Self {
        self.only = Some(only);
        self
    }

    pub fn with_only_names<I, K, N>(self, names: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<CountryName>,
    {
        self.with_only(Restriction::Names(
            names
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        ))
    }

    pub fn with_only_codes<I, S>(self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_only(Restriction::Codes(codes.into_iter().map(Into::into).collect()))
    }

    pub fn with_first<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_first_break(mut self, label: impl Into<String>) -> Self {
        self.first_break = Some(label.into());
        self
    }

    pub fn with_first_repeat(mut self, repeat: bool) -> Self {
        self.first_repeat = repeat;
        self
    }

    pub fn with_common_names(mut self, enabled: bool) -> Self {
        self.common_names = enabled;
        self
    }
}

fn load_json_or_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        _ => serde_json::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display())),
    }
}

fn parse_json_var<T: DeserializeOwned>(key: &str, value: &str) -> Result<T> {
    serde_json::from_str(value).with_context(|| format!("parsing {} as JSON", key))
}

fn parse_list_var(key: &str, value: &str) -> Result<Vec<String>> {
    let value = value.trim();
    if value.starts_with('[') {
        return parse_json_var(key, value);
    }
    Ok(value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect())
}

fn parse_bool_var(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{} must be a boolean, got '{}'", key, other),
    }
}

/// Parse a bare comma-separated code list, as given on the command line.
pub fn parse_code_list(value: &str) -> Result<Vec<String>> {
    let codes = parse_list_var(FIRST_KEY, value)?;
    if codes.is_empty() && !value.trim().is_empty() {
        return Err(anyhow!("no codes in '{}'", value));
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn defaults_enable_common_names_only() {
        let config = CountriesConfig::default();
        assert!(config.common_names);
        assert!(!config.first_repeat);
        assert!(config.only.is_none());
        assert!(config.first.is_empty());
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn yaml_keys_use_setting_names() {
        let config: CountriesConfig = serde_yaml::from_str(
            r#"
COUNTRIES_OVERRIDE:
  AU: null
  XX: Neverland
  YY:
    en: Atlantis
    es: Atlántida
COUNTRIES_FIRST: [NZ, AU]
COUNTRIES_FIRST_BREAK: "------"
COUNTRIES_FIRST_REPEAT: true
"#,
        )
        .unwrap();
        assert_eq!(config.overrides.get("AU"), Some(&None));
        assert_eq!(
            config.overrides.get("XX"),
            Some(&Some(CountryName::text("Neverland")))
        );
        let atlantis = config.overrides["YY"].as_ref().unwrap();
        assert_eq!(atlantis.resolve(Lang::Es), "Atlántida");
        assert_eq!(config.first, vec!["NZ", "AU"]);
        assert_eq!(config.first_break.as_deref(), Some("------"));
        assert!(config.first_repeat);
        assert!(config.common_names);
    }

    #[test]
    fn only_accepts_map_or_list() {
        let names: CountriesConfig =
            serde_json::from_str(r#"{"COUNTRIES_ONLY": {"NZ": "New Zealand"}}"#).unwrap();
        assert!(matches!(names.only, Some(Restriction::Names(_))));

        let codes: CountriesConfig =
            serde_json::from_str(r#"{"only": ["NZ", "AUS"]}"#).unwrap();
        assert_eq!(
            codes.only,
            Some(Restriction::Codes(vec!["NZ".into(), "AUS".into()]))
        );
    }

    #[test]
    fn env_vars_overlay_defaults() {
        let config = CountriesConfig::default()
            .merge_vars([
                ("COUNTRIES_FIRST", "NZ, AU,"),
                ("COUNTRIES_FIRST_BREAK", "---"),
                ("COUNTRIES_FIRST_REPEAT", "yes"),
                ("COUNTRIES_COMMON_NAMES", "0"),
                ("COUNTRIES_OVERRIDE", r#"{"AU": null}"#),
                ("PATH", "/usr/bin"),
            ])
            .unwrap();
        assert_eq!(config.first, vec!["NZ", "AU"]);
        assert_eq!(config.first_break.as_deref(), Some("---"));
        assert!(config.first_repeat);
        assert!(!config.common_names);
        assert_eq!(config.overrides.get("AU"), Some(&None));
    }

    #[test]
    fn env_first_accepts_json_array() {
        let config = CountriesConfig::default()
            .merge_vars([("COUNTRIES_FIRST", r#"["NZ", "AU"]"#)])
            .unwrap();
        assert_eq!(config.first, vec!["NZ", "AU"]);
    }

    #[test]
    fn malformed_env_values_fail() {
        let err = CountriesConfig::default()
            .merge_vars([("COUNTRIES_FIRST_REPEAT", "maybe")])
            .unwrap_err();
        assert!(err.to_string().contains("COUNTRIES_FIRST_REPEAT"));

        assert!(CountriesConfig::default()
            .merge_vars([("COUNTRIES_ONLY", "{not json")])
            .is_err());
    }

    #[test]
    fn empty_first_break_is_unset() {
        let config = CountriesConfig::default()
            .with_first_break("---")
            .merge_vars([("COUNTRIES_FIRST_BREAK", "")])
            .unwrap();
        assert_eq!(config.first_break, None);
    }

    #[test]
    fn code_list_parsing() {
        assert_eq!(parse_code_list("NZ,AU").unwrap(), vec!["NZ", "AU"]);
        assert!(parse_code_list(" , ").is_err());
        assert!(parse_code_list("").unwrap().is_empty());
    }
}
