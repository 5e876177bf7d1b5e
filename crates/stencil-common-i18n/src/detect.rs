//! Automatic locale detection.

use super::Locale;
use std::env;

/// Environment variables consulted, highest priority first.
pub const LOCALE_VARS: [&str; 4] = ["STENCIL_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the process locale with optional user override.
pub fn detect_locale_with_override(user_locale: Option<&str>) -> Locale {
    // User preference has highest priority
    if let Some(locale) = user_locale.and_then(Locale::parse) {
        return locale;
    }

    detect_locale()
}

/// Detect the process locale from the environment.
pub fn detect_locale() -> Locale {
    detect_locale_from(|var| env::var(var).ok())
}

/// Detect the locale using `lookup` to read variables.
///
/// Variables holding an unparseable value (including `C` and `POSIX`) are
/// skipped. Falls back to [`Locale::default`].
pub fn detect_locale_from<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find_map(|value| Locale::parse(&value))
        .unwrap_or_default()
}
