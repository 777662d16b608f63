//! Text folding applied to guesses and county names before comparison.
use crate::constants::{DERRY_ALIASES, DERRY_CANONICAL};
use crate::locale::Locale;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Trim and lowercase.
#[must_use]
pub fn fold_case(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Remove combining marks after canonical decomposition, so `Lú` folds to `Lu`.
#[must_use]
pub fn strip_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Collapse the accepted Derry spellings to the dataset's comparison string.
#[must_use]
pub fn resolve_alias(folded: String) -> String {
    if DERRY_ALIASES.contains(&folded.as_str()) {
        DERRY_CANONICAL.to_string()
    } else {
        folded
    }
}

/// Normalize a county name for comparison in `locale`.
#[must_use]
pub fn normalize_name(name: &str, locale: Locale) -> String {
    let folded = fold_case(name);
    if locale.is_irish() {
        strip_diacritics(&folded)
    } else {
        folded
    }
}

/// Normalize a raw guess: fold, strip accents under the Irish locale, then
/// apply the alias table (which is locale-independent).
#[must_use]
pub fn normalize_guess(guess: &str, locale: Locale) -> String {
    resolve_alias(normalize_name(guess, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_trims_and_lowercases() {
        assert_eq!(fold_case("  DuBLiN \n"), "dublin");
        assert_eq!(fold_case("   "), "");
    }

    #[test]
    fn strip_diacritics_handles_precomposed_and_combining_forms() {
        assert_eq!(strip_diacritics("baile átha cliath"), "baile atha cliath");
        assert_eq!(strip_diacritics("lu\u{0301}"), "lu");
        assert_eq!(strip_diacritics("uíbh fhailí"), "uibh fhaili");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn aliases_collapse_in_both_locales() {
        for alias in DERRY_ALIASES {
            assert_eq!(normalize_guess(alias, Locale::En), DERRY_CANONICAL);
            assert_eq!(normalize_guess(alias, Locale::Ga), DERRY_CANONICAL);
        }
        assert_eq!(normalize_guess("  Slash City ", Locale::En), DERRY_CANONICAL);
        assert_eq!(normalize_guess("derryy", Locale::En), "derryy");
    }

    #[test]
    fn english_locale_keeps_accents() {
        assert_eq!(normalize_guess("Lú", Locale::En), "lú");
        assert_eq!(normalize_guess("Lú", Locale::Ga), "lu");
        assert_eq!(normalize_name("An Mhí", Locale::Ga), "an mhi");
    }
}
