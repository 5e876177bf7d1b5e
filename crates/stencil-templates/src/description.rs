//! Localized description lookup.

use std::collections::HashSet;

use stencil_common_i18n::Locale;

use crate::classify::DESCRIPTION_EXTENSION_SUFFIX;

/// Find the description for `{name}.{extension}` among `candidates`.
///
/// Tries `{prefix}{name}.{extension}_{language}_{country}.html`, then
/// `{prefix}{name}.{extension}_{language}.html`, then
/// `{prefix}{name}.{extension}.html`, returning the first present. Matching
/// is exact and case-sensitive.
pub fn resolve_description(
    prefix: &str,
    name: &str,
    extension: &str,
    candidates: &HashSet<&str>,
    locale: &Locale,
) -> Option<String> {
    locale
        .fallback_names(&format!("{name}.{extension}"), DESCRIPTION_EXTENSION_SUFFIX)
        .into_iter()
        .map(|file_name| format!("{prefix}{file_name}"))
        .find(|path| candidates.contains(path.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn en_us() -> Locale {
        Locale::new("en", "US")
    }

    #[test_case(&["x.java.html", "x.java_en.html", "x.java_en_US.html"], Some("x.java_en_US.html") ; "full locale first")]
    #[test_case(&["x.java.html", "x.java_en.html"], Some("x.java_en.html") ; "language only second")]
    #[test_case(&["x.java.html"], Some("x.java.html") ; "unlocalized last")]
    #[test_case(&[], None ; "nothing")]
    fn test_fallback_order(candidates: &[&str], expected: Option<&str>) {
        let candidates: HashSet<&str> = candidates.iter().copied().collect();
        assert_eq!(
            resolve_description("", "x", "java", &candidates, &en_us()).as_deref(),
            expected
        );
    }

    #[test]
    fn test_prefix_is_applied() {
        let candidates: HashSet<&str> = ["code/Test.java_en.html", "Test.java_en_US.html"]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_description("code/", "Test", "java", &candidates, &en_us()).as_deref(),
            Some("code/Test.java_en.html")
        );
    }

    #[test]
    fn test_no_case_folding_or_partial_match() {
        let candidates: HashSet<&str> = ["x.java_EN_us.html", "x.JAVA.html", "x.java_en_US.htm"]
            .into_iter()
            .collect();
        assert_eq!(resolve_description("", "x", "java", &candidates, &en_us()), None);
    }

    #[test]
    fn test_other_language_is_ignored() {
        let candidates: HashSet<&str> = ["x.java_de.html", "x.java.html"].into_iter().collect();
        assert_eq!(
            resolve_description("", "x", "java", &candidates, &en_us()).as_deref(),
            Some("x.java.html")
        );
    }

    #[test]
    fn test_locale_without_country() {
        let candidates: HashSet<&str> = ["x.java_ja.html", "x.java.html"].into_iter().collect();
        assert_eq!(
            resolve_description("", "x", "java", &candidates, &Locale::new("ja", "")).as_deref(),
            Some("x.java_ja.html")
        );
    }
}
