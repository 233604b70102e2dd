//! Inline annotation of acronyms in running text
//!
//! Once an acronym's definition is known, later passages can be rewritten so
//! the definition appears next to the first mention, e.g. "59 IMAs" becomes
//! "59 IMAs (invasive mucinous adenocarcinoma)". Matching is word-bounded
//! and tolerates a plural "s", mirroring how acronyms are pluralized in
//! article prose.

use regex::Regex;

fn acronym_pattern(acronym: &str) -> Option<Regex> {
    Regex::new(&format!(r"(\b{}s?\b)", regex::escape(acronym))).ok()
}

/// Check whether the acronym occurs in the text as a standalone word,
/// optionally pluralized.
pub fn contains_acronym(text: &str, acronym: &str) -> bool {
    acronym_pattern(acronym).is_some_and(|pattern| pattern.is_match(text))
}

/// Append the definition in parentheses after the first occurrence of the
/// acronym. If the definition already appears anywhere in the text, the text
/// is returned unchanged so repeated annotation stays stable.
pub fn annotate_first_occurrence(text: &str, acronym: &str, definition: &str) -> String {
    if text.contains(definition) {
        return text.to_string();
    }
    let Some(pattern) = acronym_pattern(acronym) else {
        return text.to_string();
    };
    pattern
        .replace(text, |caps: &regex::Captures| {
            format!("{} ({})", &caps[1], definition)
        })
        .into_owned()
}
