//! Alignment engine
//!
//! Drives the path search for every acronym candidate in a text: collect
//! per-letter candidates, enumerate and filter paths, pick the best one,
//! interpolate letters hiding inside already-matched words, and emit the
//! definition span when every letter is accounted for.
//!
//! A candidate with no complete path is not an error; it is silently
//! skipped. All failure modes of this module are non-matches.

use crate::acrolex::align::paths::{
    collect_letter_candidates, enumerate_paths, filter_paths, first_match, missing_letters,
    select_best_path, AlignmentPath,
};
use crate::acrolex::lexer::{lex, Token};
use crate::acrolex::lexicon::STOP_WORDS;
use std::collections::{BTreeMap, BTreeSet};

/// Acronym text mapped to every definition found for it. Ordered containers
/// keep extraction output deterministic.
pub type AcronymMap = BTreeMap<String, BTreeSet<String>>;

/// Default bound on how many acronym letters may fail to match any word.
pub const DEFAULT_MAX_INTRA_WORD_LETTERS: usize = 2;

/// Find every parenthetical acronym definition in a text, using the default
/// skip budget.
pub fn find_acronym_definitions(text: &str) -> AcronymMap {
    find_acronym_definitions_with_budget(text, DEFAULT_MAX_INTRA_WORD_LETTERS)
}

/// Find every parenthetical acronym definition in a text.
///
/// Returns a map from acronym surface form to the set of distinct raw
/// definition strings observed for it. Surface variants of the same long
/// form are not unified here; [`crate::acrolex::normalize`] exists for that
/// comparison.
pub fn find_acronym_definitions_with_budget(
    text: &str,
    max_intra_word_letters: usize,
) -> AcronymMap {
    let tokens = lex(text);
    let mut acronyms = AcronymMap::new();

    for (acronym_pos, acronym) in tokens.iter().enumerate() {
        if !acronym.acronym_like {
            continue;
        }

        let candidates = collect_letter_candidates(&tokens, acronym_pos, max_intra_word_letters);
        let paths = enumerate_paths(&tokens, &candidates);
        let paths = filter_paths(&tokens, paths, max_intra_word_letters);
        let Some(mut best) = select_best_path(paths) else {
            continue;
        };

        interpolate_missing_letters(&tokens, &acronym.text, &mut best);
        if missing_letters(&best) > 0 {
            continue;
        }
        let Some(start) = first_match(&best) else {
            continue;
        };

        // Join everything up to just before the acronym's opening parenthesis.
        let definition: String = tokens[start..acronym_pos - 1]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let definition = definition.trim().to_string();

        acronyms
            .entry(acronym.text.clone())
            .or_default()
            .insert(definition);
    }

    acronyms
}

/// Resolve missing letters against the previous matched word.
///
/// Letter 0 is matched by construction. For each later missing letter, if
/// the previous path entry is itself missing, interpolation stops entirely;
/// if the previous word is a stop word (case-insensitive), the letter stays
/// missing; otherwise a letter occurring anywhere after the first character
/// of the previous word resolves to that word's index. Resolved entries feed
/// the following step, so one word can absorb a run of letters (`ccRCC`
/// taking `c` and `R` from "renal" is the canonical cascade).
pub fn interpolate_missing_letters(
    tokens: &[Token],
    acronym_text: &str,
    path: &mut AlignmentPath,
) {
    let letters: Vec<char> = acronym_text.chars().collect();

    for i in 1..path.len().min(letters.len()) {
        if path[i].is_some() {
            continue;
        }
        let Some(prev_index) = path[i - 1] else {
            // cannot interpolate from a missing predecessor
            break;
        };
        let prev_text = &tokens[prev_index].text;
        if STOP_WORDS.contains(prev_text.to_lowercase().as_str()) {
            // never look inside a stop word
            continue;
        }
        let tail: String = prev_text.chars().skip(1).collect();
        let letter = letters[i].to_lowercase().to_string();
        if !tail.is_empty() && tail.contains(&letter) {
            path[i] = Some(prev_index);
        }
    }
}
