// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized country-name catalogs.
//!
//! Each language is a compile-time static table of `(alpha2, name)` pairs.
//! Lookup is O(n) on the table, which is fine for the few dozen entries per
//! language; views resolve each name once and memoize the result.
//!
//! Catalogs are partial. Codes without a translation fall back to the
//! English name carried by the caller (see [`crate::CountryName`]).
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`

use serde::{Deserialize, Serialize};

/// Languages country names can be displayed in.
///
/// Each variant maps to an ISO 639-1 two-letter code. English is the source
/// language: its names come from the country table itself, not a catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
    Fr,
    De,
    Ja,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Ja => "ja",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Accepts either case and a region suffix (`es-MX`, `fr_CA`), which is
    /// ignored.
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            "ja" => Some(Lang::Ja),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es, Lang::Fr, Lang::De, Lang::Ja]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| anyhow::anyhow!("unsupported language '{}'", s))
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up the localized name of a country.
///
/// Returns `""` when the language has no entry for the code, including for
/// English, whose names live in the country table. Callers pick their own
/// fallback.
///
/// # Examples
///
/// ```
/// use country_names::i18n::{t, Lang};
/// assert_eq!(t(Lang::Es, "US"), "Estados Unidos");
/// assert_eq!(t(Lang::De, "AT"), "Österreich");
/// assert_eq!(t(Lang::Es, "XX"), "");
/// ```
pub fn t(lang: Lang, alpha2: &str) -> &'static str {
    lookup(catalog_for(lang), alpha2).unwrap_or("")
}

/// Same as [`t`] but falls back to `fallback` instead of `""`.
pub fn t_or<'a>(lang: Lang, alpha2: &str, fallback: &'a str) -> &'a str {
    match t(lang, alpha2) {
        "" => fallback,
        name => name,
    }
}

/// The raw catalog for a language. Empty for English.
pub fn catalog(lang: Lang) -> &'static [(&'static str, &'static str)] {
    catalog_for(lang)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|&&(code, _)| code == key)
        .map(|&(_, name)| name)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => &[],
        Lang::Es => ES,
        Lang::Fr => FR,
        Lang::De => DE,
        Lang::Ja => JA,
    }
}

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "Emiratos Árabes Unidos"),
    ("AF", "Afganistán"),
    ("AL", "Albania"),
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BE", "Bélgica"),
    ("BG", "Bulgaria"),
    ("BO", "Bolivia"),
    ("BR", "Brasil"),
    ("CA", "Canadá"),
    ("CH", "Suiza"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CZ", "República Checa"),
    ("DE", "Alemania"),
    ("DK", "Dinamarca"),
    ("DO", "República Dominicana"),
    ("EC", "Ecuador"),
    ("EG", "Egipto"),
    ("ES", "España"),
    ("FI", "Finlandia"),
    ("FR", "Francia"),
    ("GB", "Reino Unido"),
    ("GR", "Grecia"),
    ("GT", "Guatemala"),
    ("HN", "Honduras"),
    ("HU", "Hungría"),
    ("ID", "Indonesia"),
    ("IE", "Irlanda"),
    ("IN", "India"),
    ("IS", "Islandia"),
    ("IT", "Italia"),
    ("JP", "Japón"),
    ("KR", "Corea del Sur"),
    ("MA", "Marruecos"),
    ("MX", "México"),
    ("NI", "Nicaragua"),
    ("NL", "Países Bajos"),
    ("NO", "Noruega"),
    ("NZ", "Nueva Zelanda"),
    ("PA", "Panamá"),
    ("PE", "Perú"),
    ("PL", "Polonia"),
    ("PR", "Puerto Rico"),
    ("PT", "Portugal"),
    ("PY", "Paraguay"),
    ("RU", "Rusia"),
    ("SE", "Suecia"),
    ("SV", "El Salvador"),
    ("TR", "Turquía"),
    ("UA", "Ucrania"),
    ("US", "Estados Unidos"),
    ("UY", "Uruguay"),
    ("VE", "Venezuela"),
    ("ZA", "Sudáfrica"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("AR", "Argentine"),
    ("AT", "Autriche"),
    ("AU", "Australie"),
    ("BE", "Belgique"),
    ("BR", "Brésil"),
    ("CA", "Canada"),
    ("CH", "Suisse"),
    ("CI", "Côte d'Ivoire"),
    ("CM", "Cameroun"),
    ("CN", "Chine"),
    ("DE", "Allemagne"),
    ("DK", "Danemark"),
    ("DZ", "Algérie"),
    ("EG", "Égypte"),
    ("ES", "Espagne"),
    ("FI", "Finlande"),
    ("FR", "France"),
    ("GB", "Royaume-Uni"),
    ("GR", "Grèce"),
    ("HT", "Haïti"),
    ("IE", "Irlande"),
    ("IN", "Inde"),
    ("IT", "Italie"),
    ("JP", "Japon"),
    ("KR", "Corée du Sud"),
    ("LU", "Luxembourg"),
    ("MA", "Maroc"),
    ("MC", "Monaco"),
    ("MX", "Mexique"),
    ("NL", "Pays-Bas"),
    ("NO", "Norvège"),
    ("NZ", "Nouvelle-Zélande"),
    ("PL", "Pologne"),
    ("PT", "Portugal"),
    ("RE", "La Réunion"),
    ("RU", "Russie"),
    ("SE", "Suède"),
    ("SN", "Sénégal"),
    ("TN", "Tunisie"),
    ("TR", "Turquie"),
    ("US", "États-Unis"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("AT", "Österreich"),
    ("AU", "Australien"),
    ("BE", "Belgien"),
    ("BR", "Brasilien"),
    ("CA", "Kanada"),
    ("CH", "Schweiz"),
    ("CN", "China"),
    ("CZ", "Tschechische Republik"),
    ("DE", "Deutschland"),
    ("DK", "Dänemark"),
    ("EG", "Ägypten"),
    ("ES", "Spanien"),
    ("FI", "Finnland"),
    ("FR", "Frankreich"),
    ("GB", "Vereinigtes Königreich"),
    ("GR", "Griechenland"),
    ("HU", "Ungarn"),
    ("IE", "Irland"),
    ("IN", "Indien"),
    ("IT", "Italien"),
    ("JP", "Japan"),
    ("KR", "Südkorea"),
    ("LI", "Liechtenstein"),
    ("LU", "Luxemburg"),
    ("MX", "Mexiko"),
    ("NL", "Niederlande"),
    ("NO", "Norwegen"),
    ("NZ", "Neuseeland"),
    ("PL", "Polen"),
    ("PT", "Portugal"),
    ("RU", "Russland"),
    ("SE", "Schweden"),
    ("TR", "Türkei"),
    ("US", "Vereinigte Staaten"),
    ("ZA", "Südafrika"),
];

// ─── Japanese ───────────────────────────────────────────────────────

const JA: &[(&str, &str)] = &[
    ("AU", "オーストラリア"),
    ("BR", "ブラジル"),
    ("CA", "カナダ"),
    ("CN", "中国"),
    ("DE", "ドイツ"),
    ("ES", "スペイン"),
    ("FR", "フランス"),
    ("GB", "イギリス"),
    ("IN", "インド"),
    ("IT", "イタリア"),
    ("JP", "日本"),
    ("KR", "韓国"),
    ("MX", "メキシコ"),
    ("NZ", "ニュージーランド"),
    ("RU", "ロシア"),
    ("US", "アメリカ合衆国"),
];
