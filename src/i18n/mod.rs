// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation of country names.
//!
//! ## Supported languages
//!
//! | Code | Language | Catalog          |
//! |------|----------|------------------|
//! | en   | English  | country table    |
//! | es   | Spanish  | partial          |
//! | fr   | French   | partial          |
//! | de   | German   | partial          |
//! | ja   | Japanese | partial          |
//!
//! ## Design
//!
//! Catalogs are keyed by ISO alpha-2 code, not by English name, so renaming
//! an entry through `COUNTRIES_COMMON_NAMES` does not orphan its
//! translations. Lookups that miss return `""` and the caller falls back to
//! the English name.
//!
//! Everything is embedded at compile time as static data. No file I/O.

mod catalog;

pub use catalog::{catalog, t, t_or, Lang};
