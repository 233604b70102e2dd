//! Lexical shape predicate for acronym candidates
//!
//! A token qualifies as an acronym candidate purely by its surface form; the
//! surrounding parentheses are checked separately during classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest surface form still considered an acronym candidate.
pub const MAX_ACRONYM_LENGTH: usize = 10;

/// Optional 1-2 lowercase letters, an uppercase letter, any mix of letters,
/// an optional single hyphen or slash plus trailing letters, ending in an
/// uppercase letter optionally followed by one lowercase letter and an
/// optional plural `s`.
static ACRONYM_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]?[a-z]?[A-Z][a-zA-Z]*[-/]?[a-zA-Z]*[A-Z][a-z]?s?$").unwrap()
});

/// Whether a word is shaped like an acronym.
///
/// Captures forms like `EGFR`, `AP/BP`, `qRT-PCR`, `GoF`, `ccRCC` and `AEs`
/// while rejecting all-lowercase words, single letters, words containing
/// digits, and anything longer than [`MAX_ACRONYM_LENGTH`].
pub fn looks_like_acronym(word: &str) -> bool {
    if word.chars().count() > MAX_ACRONYM_LENGTH {
        return false;
    }
    ACRONYM_SHAPE.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_uppercase_acronyms() {
        assert!(looks_like_acronym("EGFR"));
        assert!(looks_like_acronym("DNA"));
        assert!(looks_like_acronym("WT"));
        assert!(looks_like_acronym("RECIST"));
    }

    #[test]
    fn test_mixed_case_acronyms() {
        assert!(looks_like_acronym("GoF"));
        assert!(looks_like_acronym("ccRCC"));
        assert!(looks_like_acronym("iCCA"));
        assert!(looks_like_acronym("PCa"));
    }

    #[test]
    fn test_plural_acronyms() {
        assert!(looks_like_acronym("AEs"));
        assert!(looks_like_acronym("IMAs"));
    }

    #[test]
    fn test_internal_separator_acronyms() {
        assert!(looks_like_acronym("AP/BP"));
        assert!(looks_like_acronym("qRT-PCR"));
        assert!(looks_like_acronym("LPF-NT"));
    }

    #[test]
    fn test_rejects_ordinary_words() {
        assert!(!looks_like_acronym("epidermal"));
        assert!(!looks_like_acronym("Iressa"));
        assert!(!looks_like_acronym("Tarceva"));
    }

    #[test]
    fn test_rejects_single_letters_and_digits() {
        assert!(!looks_like_acronym("B"));
        assert!(!looks_like_acronym("I"));
        assert!(!looks_like_acronym("Ki67"));
        assert!(!looks_like_acronym("PD-L1"));
    }

    #[test]
    fn test_rejects_overlong_words() {
        assert!(!looks_like_acronym("ABCDEFGHIJK"));
        assert!(looks_like_acronym("ABCDEFGHIJ"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!looks_like_acronym(""));
    }
}
