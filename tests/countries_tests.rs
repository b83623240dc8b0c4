// SPDX-License-Identifier: PMPL-1.0-or-later

//! Behaviour of the countries view: table contents, overrides, restriction
//! and lookups.

use country_names::{Countries, CountriesConfig, CountryName, Lang, COUNTRIES};
use std::collections::HashMap;

const EXPECTED_COUNTRY_COUNT: usize = 249;
const FIRST_THREE_COUNTRIES: [(&str, &str); 3] = [
    ("AF", "Afghanistan"),
    ("AX", "Åland Islands"),
    ("AL", "Albania"),
];

fn pairs(countries: &Countries) -> Vec<(&str, &str)> {
    countries.iter().map(|country| country.as_pair()).collect()
}

#[test]
fn test_countries_len() {
    assert_eq!(Countries::default().len(), EXPECTED_COUNTRY_COUNT);
    assert_eq!(COUNTRIES.len(), EXPECTED_COUNTRY_COUNT);
}

#[test]
fn test_countries_sorted() {
    let countries = Countries::default();
    assert_eq!(pairs(&countries)[..3], FIRST_THREE_COUNTRIES);
}

#[test]
fn test_countries_sorted_by_collated_name() {
    let countries = Countries::default();
    let keys: Vec<String> = countries
        .iter()
        .map(|country| country_names::countries::collation_key(&country.name))
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_countries_limit() {
    let countries = Countries::new(
        CountriesConfig::default().with_only_names([("NZ", "New Zealand"), ("NV", "Neverland")]),
    );
    assert_eq!(
        pairs(&countries),
        vec![("NV", "Neverland"), ("NZ", "New Zealand")]
    );
    assert_eq!(countries.len(), 2);
}

#[test]
fn test_countries_limit_ignores_override() {
    let countries = Countries::new(
        CountriesConfig::default()
            .with_only_names([("NZ", "New Zealand")])
            .without("NZ")
            .with_override("XX", "Neverland"),
    );
    assert_eq!(pairs(&countries), vec![("NZ", "New Zealand")]);
    assert_eq!(countries.alpha2("XX"), "");
}

#[test]
fn test_countries_limit_by_codes_uses_table_names() {
    let countries = Countries::new(CountriesConfig::default().with_only_codes(["NZ", "aus", "XX"]));
    assert_eq!(
        pairs(&countries),
        vec![("AU", "Australia"), ("NZ", "New Zealand")]
    );
    assert_eq!(countries.alpha2("FR"), "");
}

#[test]
fn test_countries_custom_removed_len() {
    let countries = Countries::new(CountriesConfig::default().without("AU"));
    assert_eq!(countries.len(), EXPECTED_COUNTRY_COUNT - 1);
}

#[test]
fn test_countries_custom_added_len() {
    let countries = Countries::new(CountriesConfig::default().with_override("XX", "Neverland"));
    assert_eq!(countries.len(), EXPECTED_COUNTRY_COUNT + 1);
}

#[test]
fn test_countries_custom_renamed() {
    let countries = Countries::new(CountriesConfig::default().with_override("AU", "Oz"));
    assert_eq!(countries.len(), EXPECTED_COUNTRY_COUNT);
    assert_eq!(countries.name("AU"), "Oz");

    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    let oz = codes.iter().position(|&code| code == "AU").unwrap();
    assert_eq!(codes[oz - 1], "OM");
    assert_eq!(codes[oz + 1], "PK");
}

#[test]
fn test_countries_getitem() {
    let countries = Countries::default();
    assert_eq!(countries[0].as_pair(), ("AF", "Afghanistan"));
    assert!(countries.get(EXPECTED_COUNTRY_COUNT).is_none());
}

#[test]
fn test_countries_slice() {
    let countries = Countries::default();
    let sliced: Vec<_> = countries[10..20].iter().step_by(2).collect();
    assert_eq!(sliced.len(), 5);
    assert_eq!(sliced[0], &countries[10]);
}

#[test]
fn test_countries_custom_deferred_name() {
    let config = CountriesConfig::default().with_override(
        "AU",
        CountryName::translations([(Lang::En, "Oz"), (Lang::Es, "Australia (es)")]),
    );
    let countries = Countries::new(config);
    assert!(countries.table().contains_key("AU"));
    assert_eq!(countries.name("AU"), "Oz");

    let spanish = Countries::new(countries.config().clone()).with_lang(Lang::Es);
    assert_eq!(spanish.name("AU"), "Australia (es)");
}

#[test]
fn test_initial_iter() {
    // A new instance, so nothing is cached.
    let map: HashMap<String, String> = Countries::default()
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    assert_eq!(map.len(), EXPECTED_COUNTRY_COUNT);
    assert_eq!(map["NZ"], "New Zealand");
}

#[test]
fn test_alpha2() {
    let countries = Countries::default();
    assert_eq!(countries.alpha2("NZ"), "NZ");
    assert_eq!(countries.alpha2("nZ"), "NZ");
    assert_eq!(countries.alpha2("Nzl"), "NZ");
    assert_eq!(countries.alpha2(554), "NZ");
    assert_eq!(countries.alpha2("554"), "NZ");
    assert_eq!(countries.alpha2("036"), "AU");
    assert_eq!(countries.alpha2(36u16), "AU");
}

#[test]
fn test_alpha2_invalid() {
    let countries = Countries::default();
    assert_eq!(countries.alpha2("XX"), "");
    assert_eq!(countries.alpha2("XXX"), "");
    assert_eq!(countries.alpha2(""), "");
    assert_eq!(countries.alpha2(-554), "");
    assert_eq!(countries.alpha2(999), "");
}

#[test]
fn test_alpha2_override() {
    let countries = Countries::new(CountriesConfig::default().without("AU"));
    assert_eq!(countries.alpha2("AU"), "");
    assert_eq!(countries.alpha2("AUS"), "");
    assert_eq!(countries.alpha2(36), "");
}

#[test]
fn test_alpha2_override_new() {
    let countries = Countries::new(CountriesConfig::default().with_override("XX", "Neverland"));
    assert_eq!(countries.alpha2("XX"), "XX");
    assert!(countries.contains("xx"));
    assert_eq!(countries.alpha2("xXx"), "");
}

#[test]
fn test_alpha2_override_new_three_letter_code() {
    let countries = Countries::new(
        CountriesConfig::default()
            .with_override("XKX", "Kosovo")
            .with_override("NV", "Neverland"),
    );
    assert_eq!(countries.alpha2("xkx"), "XKX");
    assert_eq!(countries.alpha2("nv"), "NV");
    assert_eq!(countries.alpha2("nzl"), "NZ");
    assert_eq!(countries.alpha3("XKX"), "");
}

#[test]
fn test_countries_empty_limit_is_unrestricted() {
    let names = Countries::new(
        CountriesConfig::default().with_only_names(Vec::<(&str, &str)>::new()),
    );
    assert_eq!(names.len(), EXPECTED_COUNTRY_COUNT);

    let codes = Countries::new(CountriesConfig::default().with_only_codes(Vec::<&str>::new()));
    assert_eq!(pairs(&codes)[..3], FIRST_THREE_COUNTRIES);
}

#[test]
fn test_alpha3_and_numeric() {
    let countries = Countries::default();
    assert_eq!(countries.alpha3("nz"), "NZL");
    assert_eq!(countries.numeric("NZL"), Some(554));
    assert_eq!(countries.alpha3("XX"), "");
    assert_eq!(countries.numeric("XX"), None);

    let custom = Countries::new(CountriesConfig::default().with_override("XX", "Neverland"));
    assert_eq!(custom.alpha3("XX"), "");
    assert_eq!(custom.numeric("XX"), None);
}

#[test]
fn test_fetch_by_name() {
    assert_eq!(Countries::default().by_name("United States"), "US");
}

#[test]
fn test_fetch_by_name_i18n() {
    assert_eq!(
        Countries::default().by_name_in("Estados Unidos", Lang::Es),
        "US"
    );
}

#[test]
fn test_fetch_by_name_no_match() {
    let countries = Countries::default();
    assert_eq!(countries.by_name("Neverland"), "");
    assert_eq!(countries.by_name("united states"), "");
    assert_eq!(countries.by_name("Estados Unidos"), "");
}

#[test]
fn test_fetch_by_name_sees_overrides() {
    let countries = Countries::new(CountriesConfig::default().with_override("XX", "Neverland"));
    assert_eq!(countries.by_name("Neverland"), "XX");
}

#[test]
fn test_common_names() {
    let countries = Countries::default();
    assert_eq!(countries.by_name("United Kingdom"), "GB");
    assert_eq!(countries.by_name("Russia"), "RU");

    let official = Countries::new(CountriesConfig::default().with_common_names(false));
    assert_eq!(official.by_name("Russian Federation"), "RU");
    assert_eq!(official.by_name("Russia"), "");
}

#[test]
fn test_localized_view_sorts_by_translation() {
    let countries = Countries::default().with_lang(Lang::Es);
    assert_eq!(
        pairs(&countries)[..4],
        [
            ("AF", "Afganistán"),
            ("AX", "Åland Islands"),
            ("AL", "Albania"),
            ("DE", "Alemania"),
        ]
    );
    assert_eq!(countries.len(), EXPECTED_COUNTRY_COUNT);
}

#[test]
fn test_set_lang_invalidates() {
    let mut countries = Countries::default();
    assert_eq!(countries[0].name, "Afghanistan");
    countries.set_lang(Lang::Es);
    assert_eq!(countries[0].name, "Afganistán");
    assert_eq!(countries.lang(), Lang::Es);
}
