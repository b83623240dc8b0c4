// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flag assets and emoji.

/// Directory flag images are served from, relative to the static root.
pub const FLAGS_DIR: &str = "flags";
pub const FLAG_EXTENSION: &str = "gif";

/// Relative path of the flag image for a code (`flags/nz.gif`); `""` for
/// the empty code.
pub fn flag_path(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    format!("{}/{}", FLAGS_DIR, flag_file_name(code))
}

pub(crate) fn flag_file_name(code: &str) -> String {
    format!("{}.{}", code.to_ascii_lowercase(), FLAG_EXTENSION)
}

/// Regional-indicator emoji for a two-letter ASCII code; `""` otherwise.
///
/// ```
/// assert_eq!(country_names::flags::unicode_flag("nz"), "🇳🇿");
/// assert_eq!(country_names::flags::unicode_flag("NZL"), "");
/// ```
pub fn unicode_flag(code: &str) -> String {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }
    code.chars()
        .map(|c| c.to_ascii_uppercase() as u32 - 'A' as u32 + REGIONAL_INDICATOR_A)
        .filter_map(char::from_u32)
        .collect()
}
