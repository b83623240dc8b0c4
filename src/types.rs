// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for country-names

use serde::Serialize;
use std::fmt;

/// One row of the ISO 3166-1 table.
///
/// Localized names are not stored on the record; they live in the
/// [`crate::i18n`] catalogs keyed by `alpha2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
    pub name: &'static str,
}

impl CountryRecord {
    pub const fn new(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: u16,
        name: &'static str,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name,
        }
    }

    /// Zero-padded three digit form, as printed in the ISO tables (`"036"`).
    pub fn numeric_padded(&self) -> String {
        format!("{:03}", self.numeric)
    }
}

/// A resolved `(code, name)` entry of a [`crate::Countries`] view.
///
/// The separator inserted by `COUNTRIES_FIRST_BREAK` is an entry with an
/// empty code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn separator(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_separator(&self) -> bool {
        self.code.is_empty()
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.code, &self.name)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_separator() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}  {}", self.code, self.name)
        }
    }
}

impl From<Country> for (String, String) {
    fn from(country: Country) -> Self {
        (country.code, country.name)
    }
}

/// Anything a lookup accepts as a country identifier.
///
/// Text may be an alpha-2 code, an alpha-3 code or a string of digits;
/// integers are treated as ISO numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Text(&'a str),
    Numeric(i64),
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(text: &'a str) -> Self {
        Identifier::Text(text)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(text: &'a String) -> Self {
        Identifier::Text(text.as_str())
    }
}

macro_rules! numeric_identifier {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Identifier<'_> {
                fn from(value: $ty) -> Self {
                    Identifier::Numeric(i64::from(value))
                }
            }
        )*
    };
}

numeric_identifier!(u8, u16, u32, i16, i32, i64);
