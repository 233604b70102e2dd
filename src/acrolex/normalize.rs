//! Definition normalization for comparing long forms
//!
//! Two definitions of the same acronym rarely agree byte for byte across
//! articles: "colorectal carcinoma" and "Colorectal cancers" name the same
//! long form. [`normalize_definition`] reduces a definition to a compact
//! comparison key by lowercasing, splitting on separator punctuation,
//! rewriting known variant spellings, reducing words to a singular base form
//! and dropping stop words. The surviving words are concatenated without
//! separators, so keys are only meaningful for equality checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::acrolex::lexicon::{STOP_WORDS, SUBS};

/// Suffix rewrite rules applied in order to reduce a word to a singular base
/// form. Each pattern is anchored to the end of the word and the rules run
/// sequentially on the evolving word, so one rule's output can feed the next
/// ("analyses" loses "ses" and then the trailing "s" of "analys").
static SINGULAR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"'s$", ""),
        (r"exes$", "ex"),
        (r"ses$", "s"),
        (r"ies$", "y"),
        (r"([^ios])s$", "$1"),
        (r"ated$", "ating"),
        (r"iency$", "ient"),
        (r"ced$", "cing"),
        (r"ally$", "al"),
        (r"tation$", "tating"),
        (r"ence$", "ent"),
        (r"ios$", "io"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Characters that separate words inside a definition but carry no meaning
/// for comparison purposes.
static SEPARATOR_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-=/,]").unwrap());

/// Reduce a single word to a singular base form.
///
/// This is not a stemmer: the rules cover the handful of inflections that
/// actually show up in definition strings (plurals, possessives and a few
/// tense variants) and deliberately nothing more.
pub fn convert_to_singular(word: &str) -> String {
    let mut word = word.to_string();
    for (pattern, replacement) in SINGULAR_RULES.iter() {
        word = pattern.replace(&word, *replacement).into_owned();
    }
    word
}

/// Reduce a definition to a compact key for equality comparison.
pub fn normalize_definition(definition: &str) -> String {
    let lowered = definition.trim().to_lowercase();
    let spaced = SEPARATOR_CHARS.replace_all(&lowered, " ");
    spaced
        .split_whitespace()
        .map(|word| SUBS.get(word).copied().unwrap_or(word))
        .map(convert_to_singular)
        .filter(|word| !STOP_WORDS.contains(word.as_str()))
        .collect()
}
