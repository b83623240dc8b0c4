// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-names: ISO 3166-1 country codes and localized names.
//!
//! The crate wraps a static table of 249 countries in a configurable view
//! meant for choice lists in forms and templates.
//!
//! BUILDING BLOCKS:
//! 1. **Data**: the ISO table, common-name aliases and IOC codes.
//! 2. **i18n**: partial catalogs of localized names with English fallback.
//! 3. **Countries**: a memoized view applying `COUNTRIES_ONLY`,
//!    `COUNTRIES_OVERRIDE` and the `COUNTRIES_FIRST*` ordering settings.
//! 4. **Checks**: consistency checks over the static data.
//!
//! ```
//! use country_names::{Countries, CountriesConfig, COUNTRIES};
//!
//! assert_eq!(COUNTRIES.len(), 249);
//! assert_eq!(COUNTRIES.alpha2("nzl"), "NZ");
//!
//! let countries = Countries::new(
//!     CountriesConfig::default()
//!         .with_first(["NZ", "AU"])
//!         .with_first_break("------"),
//! );
//! assert_eq!(countries[0].as_pair(), ("NZ", "New Zealand"));
//! assert_eq!(countries[2].as_pair(), ("", "------"));
//! ```

pub mod checks;
pub mod config;
pub mod countries;
pub mod data;
pub mod diagnostics;
pub mod flags;
pub mod i18n;
pub mod name;
pub mod output;
pub mod types;

pub use config::{CountriesConfig, Restriction};
pub use countries::{Countries, COUNTRIES};
pub use i18n::Lang;
pub use name::CountryName;
pub use types::{Country, CountryRecord, Identifier};
