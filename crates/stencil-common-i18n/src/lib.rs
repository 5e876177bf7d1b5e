//! Locale support for Stencil.
//!
//! Localized resources (template descriptions) are looked up by file name:
//! `{base}_{language}_{country}{suffix}`, then `{base}_{language}{suffix}`,
//! then `{base}{suffix}`. [`Locale::fallback_names`] builds that chain.

pub mod detect;

use std::fmt;
use std::str::FromStr;

/// A language plus optional country, e.g. `en_US` or `ja`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    /// Create a locale from already-normalized parts.
    ///
    /// The language is lowercased and the country uppercased.
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: country.into().to_uppercase(),
        }
    }

    /// Parse from a locale string (e.g., "en-US", "ja_JP", "de_DE.UTF-8@euro").
    ///
    /// `C` and `POSIX` carry no language and parse to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        // Drop encoding and modifier
        let s = s.split(['.', '@']).next()?.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("c") || s.eq_ignore_ascii_case("posix") {
            return None;
        }

        let mut parts = s.split(['_', '-']);
        let language = parts.next()?;
        let country = parts.next().unwrap_or("");

        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if !country.is_empty() && !country.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(Self::new(language, country))
    }

    /// Get the language code (lowercase).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the country code (uppercase, may be empty).
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Localized file names for `base`, most specific first.
    ///
    /// The full-locale form is skipped when the locale has no country.
    pub fn fallback_names(&self, base: &str, suffix: &str) -> Vec<String> {
        let mut names = Vec::with_capacity(3);
        if !self.country.is_empty() {
            names.push(format!("{base}_{}_{}{suffix}", self.language, self.country));
        }
        names.push(format!("{base}_{}{suffix}", self.language));
        names.push(format!("{base}{suffix}"));
        names
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", "US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            f.write_str(&self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}

/// i18n errors.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

pub use detect::{detect_locale, detect_locale_from, detect_locale_with_override};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::new("en", "US")));
        assert_eq!(Locale::parse("en_us"), Some(Locale::new("en", "US")));
        assert_eq!(Locale::parse("EN"), Some(Locale::new("en", "")));
        assert_eq!(Locale::parse("ja_JP.UTF-8"), Some(Locale::new("ja", "JP")));
        assert_eq!(Locale::parse("de_DE@euro"), Some(Locale::new("de", "DE")));
        assert_eq!(Locale::parse("es_419"), Some(Locale::new("es", "419")));

        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("C"), None);
        assert_eq!(Locale::parse("POSIX"), None);
        assert_eq!(Locale::parse("C.UTF-8"), None);
        assert_eq!(Locale::parse("x"), None);
        assert_eq!(Locale::parse("e1_US"), None);
        assert_eq!(Locale::parse("en_U S"), None);
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::new("en", "us").to_string(), "en_US");
        assert_eq!(Locale::new("FR", "").to_string(), "fr");
    }

    #[test]
    fn test_from_str() {
        let locale: Locale = "pt-BR".parse().unwrap();
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.country(), "BR");

        let err = "???".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "invalid locale: ???");
    }

    #[test]
    fn test_locale_default() {
        assert_eq!(Locale::default(), Locale::new("en", "US"));
    }

    #[test]
    fn test_fallback_names_full_locale() {
        let names = Locale::new("en", "US").fallback_names("NewClass.java", ".html");
        assert_eq!(
            names,
            vec![
                "NewClass.java_en_US.html".to_string(),
                "NewClass.java_en.html".to_string(),
                "NewClass.java.html".to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_names_language_only() {
        let names = Locale::new("ja", "").fallback_names("x.kt", ".html");
        assert_eq!(names, vec!["x.kt_ja.html".to_string(), "x.kt.html".to_string()]);
    }

    proptest! {
        #[test]
        fn fallback_chain_ends_with_unlocalized_name(
            base in "[A-Za-z][A-Za-z0-9]{0,12}\\.[a-z]{1,4}",
            language in "[a-z]{2,3}",
            country in "([A-Z]{2})?",
        ) {
            let names = Locale::new(&language, &country).fallback_names(&base, ".html");
            prop_assert_eq!(names.last().unwrap(), &format!("{base}.html"));
            prop_assert!(names.iter().all(|n| n.starts_with(&base) && n.ends_with(".html")));
        }
    }
}
