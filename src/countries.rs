// SPDX-License-Identifier: PMPL-1.0-or-later

//! The configurable countries view.
//!
//! A [`Countries`] derives an ordered list of `(code, name)` entries from the
//! static table in three steps:
//!
//! 1. **Table**: `COUNTRIES_ONLY` if set, otherwise the base table with
//!    common names applied and `COUNTRIES_OVERRIDE` merged on top.
//! 2. **Promotion**: `COUNTRIES_FIRST` codes go to the front, followed by
//!    the `COUNTRIES_FIRST_BREAK` marker when at least one of them resolved.
//! 3. **Natural order**: the rest of the table sorted by collated name,
//!    keeping promoted codes only when `COUNTRIES_FIRST_REPEAT` is set.
//!
//! Both the table and the ordered sequence are memoized. They are rebuilt
//! after [`Countries::invalidate`] or when the configuration or language is
//! replaced.

use crate::config::{CountriesConfig, Restriction};
use crate::data;
use crate::i18n::Lang;
use crate::name::CountryName;
use crate::types::{Country, CountryRecord, Identifier};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::ops::Index;
use std::slice::{self, SliceIndex};
use std::sync::{LazyLock, OnceLock};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The default view: built-in table, default settings, English names.
pub static COUNTRIES: LazyLock<Countries> = LazyLock::new(Countries::default);

#[derive(Debug, Default)]
pub struct Countries {
    config: CountriesConfig,
    lang: Lang,
    table: OnceLock<BTreeMap<String, CountryName>>,
    sequence: OnceLock<Vec<Country>>,
}

impl Countries {
    pub fn new(config: CountriesConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Render names in `lang` instead of English.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.set_lang(lang);
        self
    }

    pub fn config(&self) -> &CountriesConfig {
        &self.config
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn set_config(&mut self, config: CountriesConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.invalidate();
    }

    /// Drop the memoized table and sequence.
    pub fn invalidate(&mut self) {
        self.table.take();
        self.sequence.take();
    }

    /// The visible `code -> name` mapping, before ordering.
    ///
    /// Building it never resolves a name.
    pub fn table(&self) -> &BTreeMap<String, CountryName> {
        self.table.get_or_init(|| build_table(&self.config))
    }

    /// The ordered entries.
    pub fn as_slice(&self) -> &[Country] {
        self.sequence.get_or_init(|| self.build_sequence())
    }

    pub fn iter(&self) -> slice::Iter<'_, Country> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.as_slice().get(index)
    }

    /// Whether the identifier resolves to a code in this view.
    pub fn contains<'a>(&self, id: impl Into<Identifier<'a>>) -> bool {
        !self.alpha2(id).is_empty()
    }

    /// Normalise an alpha-2, alpha-3 or numeric identifier to the alpha-2
    /// code used by this view.
    ///
    /// Returns `""` when the identifier is unknown or the code is not
    /// visible (removed by `COUNTRIES_OVERRIDE`, outside `COUNTRIES_ONLY`).
    /// Codes added through configuration resolve in their alpha-2 form only.
    pub fn alpha2<'a>(&self, id: impl Into<Identifier<'a>>) -> &str {
        let id = id.into();
        let candidate: Option<Cow<'_, str>> = match data::lookup(id) {
            Some(record) => Some(record.alpha2.into()),
            None => match id {
                Identifier::Text(text) => Some(text.to_uppercase().into()),
                Identifier::Numeric(_) => None,
            },
        };
        candidate
            .and_then(|code| self.table().get_key_value(code.as_ref()))
            .map(|(code, _)| code.as_str())
            .unwrap_or("")
    }

    /// ISO alpha-3 code of a visible country; `""` for codes outside the
    /// ISO table.
    pub fn alpha3<'a>(&self, id: impl Into<Identifier<'a>>) -> &'static str {
        data::by_alpha2(self.alpha2(id))
            .map(|record| record.alpha3)
            .unwrap_or("")
    }

    /// ISO numeric code of a visible country.
    pub fn numeric<'a>(&self, id: impl Into<Identifier<'a>>) -> Option<u16> {
        data::by_alpha2(self.alpha2(id)).map(|record| record.numeric)
    }

    /// Display name of a visible country in this view's language.
    pub fn name<'a>(&self, id: impl Into<Identifier<'a>>) -> Cow<'_, str> {
        let code = self.alpha2(id);
        self.table()
            .get(code)
            .map(|name| name.resolve(self.lang))
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Code of the country whose English name is exactly `name`, or `""`.
    pub fn by_name(&self, name: &str) -> &str {
        self.by_name_in(name, Lang::En)
    }

    /// Code of the country whose name in `lang` is exactly `name`, or `""`.
    ///
    /// Matching is case-sensitive.
    pub fn by_name_in(&self, name: &str, lang: Lang) -> &str {
        self.table()
            .iter()
            .find(|(_, candidate)| candidate.resolve(lang) == name)
            .map(|(code, _)| code.as_str())
            .unwrap_or("")
    }

    fn build_sequence(&self) -> Vec<Country> {
        let table = self.table();
        let mut promoted: Vec<&str> = Vec::new();
        for requested in &self.config.first {
            let code = self.alpha2(requested);
            if code.is_empty() {
                debug!(code = %requested, "skipping unknown COUNTRIES_FIRST code");
            } else if !promoted.contains(&code) {
                promoted.push(code);
            }
        }

        let entry = |code: &str, name: &CountryName| Country::new(code, name.resolve(self.lang));

        let mut sequence: Vec<Country> = promoted
            .iter()
            .map(|&code| entry(code, &table[code]))
            .collect();
        let label = self.config.first_break.as_deref().filter(|label| !label.is_empty());
        if let (false, Some(label)) = (promoted.is_empty(), label) {
            sequence.push(Country::separator(label));
        }

        let skip: HashSet<&str> = if self.config.first_repeat {
            HashSet::new()
        } else {
            promoted.iter().copied().collect()
        };
        let mut natural: Vec<Country> = table
            .iter()
            .filter(|(code, _)| !skip.contains(code.as_str()))
            .map(|(code, name)| entry(code.as_str(), name))
            .collect();
        natural.sort_by_cached_key(|country| {
            (collation_key(&country.name), country.name.clone(), country.code.clone())
        });
        sequence.extend(natural);

        debug!(
            lang = %self.lang,
            entries = sequence.len(),
            promoted = promoted.len(),
            "built countries sequence"
        );
        sequence
    }
}

impl<'a> IntoIterator for &'a Countries {
    type Item = &'a Country;
    type IntoIter = slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: SliceIndex<[Country]>> Index<I> for Countries {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

fn build_table(config: &CountriesConfig) -> BTreeMap<String, CountryName> {
    if let Some(only) = config.only.as_ref().filter(|only| !only.is_empty()) {
        return match only {
            Restriction::Names(names) => names.clone(),
            Restriction::Codes(codes) => codes
                .iter()
                .filter_map(|code| match data::lookup(code) {
                    Some(record) => Some((record.alpha2.to_string(), base_name(record, config))),
                    None => {
                        debug!(code = %code, "skipping unknown COUNTRIES_ONLY code");
                        None
                    }
                })
                .collect(),
        };
    }

    let mut table: BTreeMap<String, CountryName> = data::all()
        .iter()
        .map(|record| (record.alpha2.to_string(), base_name(record, config)))
        .collect();
    for (code, name) in &config.overrides {
        match name {
            Some(name) => {
                table.insert(code.clone(), name.clone());
            }
            None => {
                table.remove(code);
            }
        }
    }
    table
}

fn base_name(record: &'static CountryRecord, config: &CountriesConfig) -> CountryName {
    let english = if config.common_names {
        data::common_name(record.alpha2).unwrap_or(record.name)
    } else {
        record.name
    };
    CountryName::catalog(record.alpha2, english)
}

/// Sort key approximating locale collation: compatibility decomposition,
/// combining marks dropped, case folded. `Åland` sorts with `Aland`.
pub fn collation_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collation_ignores_accents_and_case() {
        assert_eq!(collation_key("Åland Islands"), "aland islands");
        assert_eq!(collation_key("Côte d'Ivoire"), "cote d'ivoire");
        assert!(collation_key("Åland Islands") < collation_key("Albania"));
        assert!(collation_key("Afghanistan") < collation_key("Åland Islands"));
    }

    #[test]
    fn table_is_memoized_until_invalidated() {
        let mut countries = Countries::default();
        let first = countries.table() as *const _;
        assert_eq!(first, countries.table() as *const _);
        countries.invalidate();
        assert!(countries.table.get().is_none());
        assert!(countries.sequence.get().is_none());
        assert_eq!(countries.len(), 249);
    }

    #[test]
    fn set_config_rebuilds() {
        let mut countries = Countries::default();
        assert_eq!(countries.len(), 249);
        countries.set_config(CountriesConfig::default().without("AU"));
        assert_eq!(countries.len(), 248);
        assert_eq!(countries.alpha2("AU"), "");
    }

    #[test]
    fn building_the_table_resolves_nothing() {
        let config = CountriesConfig::default().with_override(
            "AU",
            CountryName::translations([(Lang::Es, "Australia (es)")]),
        );
        let countries = Countries::new(config);
        // Still deferred: only a render picks the language.
        assert!(matches!(
            countries.table().get("AU"),
            Some(CountryName::Translations(_))
        ));
        assert!(countries.sequence.get().is_none());
    }

    #[test]
    fn common_names_toggle() {
        let common = Countries::default();
        assert_eq!(common.name("GB"), "United Kingdom");

        let official = Countries::new(CountriesConfig::default().with_common_names(false));
        assert_eq!(
            official.name("GB"),
            "United Kingdom of Great Britain and Northern Ireland"
        );
    }
}
