// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deferred country names.
//!
//! A [`CountryName`] is not a string yet. Base-table entries point at the
//! i18n catalogs and only become text once a view knows which language to
//! render, so building a view's table never resolves anything. Presence is
//! expressed with `Option<CountryName>` (`None` removes an entry in
//! `COUNTRIES_OVERRIDE`); nothing inspects a name to decide whether it is
//! set.

use crate::i18n::{self, Lang};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryName {
    /// The same text in every language.
    Text(Cow<'static, str>),
    /// Explicit per-language names, typically from configuration.
    Translations(BTreeMap<Lang, String>),
    /// A catalog entry with the English name to use when the language has
    /// no translation.
    Catalog {
        alpha2: &'static str,
        fallback: &'static str,
    },
}

impl CountryName {
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        CountryName::Text(text.into())
    }

    pub fn catalog(alpha2: &'static str, fallback: &'static str) -> Self {
        CountryName::Catalog { alpha2, fallback }
    }

    pub fn translations<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Lang, S)>,
        S: Into<String>,
    {
        CountryName::Translations(
            entries
                .into_iter()
                .map(|(lang, name)| (lang, name.into()))
                .collect(),
        )
    }

    /// Render the name in `lang`.
    ///
    /// Translation maps fall back to English, then to whichever entry sorts
    /// first; an empty map renders as `""`.
    pub fn resolve(&self, lang: Lang) -> Cow<'_, str> {
        match self {
            CountryName::Text(text) => Cow::Borrowed(text.as_ref()),
            CountryName::Translations(names) => names
                .get(&lang)
                .or_else(|| names.get(&Lang::En))
                .or_else(|| names.values().next())
                .map(|name| Cow::Borrowed(name.as_str()))
                .unwrap_or(Cow::Borrowed("")),
            CountryName::Catalog { alpha2, fallback } => {
                Cow::Borrowed(i18n::t_or(lang, alpha2, fallback))
            }
        }
    }
}

impl From<&'static str> for CountryName {
    fn from(text: &'static str) -> Self {
        CountryName::text(text)
    }
}

impl From<String> for CountryName {
    fn from(text: String) -> Self {
        CountryName::text(text)
    }
}

/// Wire form of a name in settings files: a plain string or a
/// `{lang: name}` map.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawName {
    Text(String),
    Translations(BTreeMap<Lang, String>),
}

impl<'de> Deserialize<'de> for CountryName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawName::deserialize(deserializer).map(Into::into)
    }
}

impl From<RawName> for CountryName {
    fn from(raw: RawName) -> Self {
        match raw {
            RawName::Text(text) => CountryName::text(text),
            RawName::Translations(names) => CountryName::Translations(names),
        }
    }
}
