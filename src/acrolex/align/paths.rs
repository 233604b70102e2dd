//! Alignment-path search primitives
//!
//! An alignment path explains one acronym occurrence: entry `i` is the index
//! of the token matching letter `i`, or `None` for a letter no word accounts
//! for. This module collects the per-letter candidate sets, enumerates the
//! monotone paths over them, filters out implausible ones, and selects the
//! best survivor. Enumeration order is part of the contract: scoring ties
//! resolve to the first-enumerated path, and extensions are generated
//! "missing" first, then candidate indices in ascending order.

use crate::acrolex::align::brackets::brackets_balanced;
use crate::acrolex::lexer::Token;
use crate::acrolex::lexicon::STOP_WORDS;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// One candidate letter-to-token correspondence for an acronym.
pub type AlignmentPath = Vec<Option<usize>>;

/// Number of letters no token accounts for.
pub fn missing_letters(path: &AlignmentPath) -> usize {
    path.iter().filter(|entry| entry.is_none()).count()
}

/// Smallest matched token index, if any letter matched.
pub fn first_match(path: &AlignmentPath) -> Option<usize> {
    path.iter().flatten().copied().min()
}

/// Largest matched token index, if any letter matched.
pub fn last_match(path: &AlignmentPath) -> Option<usize> {
    path.iter().flatten().copied().max()
}

/// Collect, for each letter of the acronym at `acronym_pos`, the indices of
/// preceding tokens whose first character case-insensitively equals that
/// letter.
///
/// The walk runs backward from the token just before the acronym's opening
/// parenthesis, stays within the acronym's sentence, and stops once the
/// covered words (word-like tokens that are not stop words; membership is
/// case-sensitive, so `The` counts) exceed the acronym length plus the skip
/// budget. Any non-empty token qualifies as a candidate: separators match
/// literal letters like the `-` in `qRT-PCR`, and suffix fragments and stop
/// words match normally.
pub fn collect_letter_candidates(
    tokens: &[Token],
    acronym_pos: usize,
    max_intra_word_letters: usize,
) -> Vec<BTreeSet<usize>> {
    let acronym = &tokens[acronym_pos];
    let letters: Vec<char> = acronym.text.chars().collect();
    let mut candidates = vec![BTreeSet::new(); letters.len()];

    for words_pos in (0..acronym_pos.saturating_sub(1)).rev() {
        if tokens[words_pos].sentence_number != acronym.sentence_number {
            // only use words from the same sentence
            break;
        }
        let words_covered = tokens[words_pos..acronym_pos]
            .iter()
            .filter(|t| t.word_like && !STOP_WORDS.contains(t.text.as_str()))
            .count();
        if words_covered > letters.len() + max_intra_word_letters {
            break;
        }

        for (letter_pos, letter) in letters.iter().enumerate() {
            if tokens[words_pos].starts_with_letter(*letter) {
                candidates[letter_pos].insert(words_pos);
            }
        }
    }

    candidates
}

/// Enumerate every monotone path over the candidate sets.
///
/// Paths are seeded from the first letter's word-like candidates only (no
/// path starts on "missing", a separator, or a suffix fragment). Each
/// partial path then extends letter by letter with "missing" or with any
/// candidate index strictly greater than the running maximum of the entries
/// chosen so far.
pub fn enumerate_paths(tokens: &[Token], candidates: &[BTreeSet<usize>]) -> Vec<AlignmentPath> {
    let Some(first_letter) = candidates.first() else {
        return Vec::new();
    };

    let mut paths: Vec<AlignmentPath> = first_letter
        .iter()
        .filter(|&&index| tokens[index].word_like)
        .map(|&index| vec![Some(index)])
        .collect();

    for choices in &candidates[1..] {
        let mut extended = Vec::new();
        for path in &paths {
            let running_max = last_match(path);

            let mut with_missing = path.clone();
            with_missing.push(None);
            extended.push(with_missing);

            for &choice in choices {
                if running_max.map_or(true, |max| choice > max) {
                    let mut with_choice = path.clone();
                    with_choice.push(Some(choice));
                    extended.push(with_choice);
                }
            }
        }
        paths = extended;
    }

    paths
}

/// Keep only plausible paths: missing letters within the budget, a
/// bracket-balanced first-to-last token span, and a span no wider (counting
/// all word-like tokens, stop words and empty segments included) than the
/// matched letters plus the budget.
pub fn filter_paths(
    tokens: &[Token],
    paths: Vec<AlignmentPath>,
    max_intra_word_letters: usize,
) -> Vec<AlignmentPath> {
    paths
        .into_iter()
        .filter(|path| {
            let missing = missing_letters(path);
            if missing > max_intra_word_letters {
                return false;
            }
            let (Some(start), Some(end)) = (first_match(path), last_match(path)) else {
                return false;
            };
            let span_text: String = tokens[start..=end]
                .iter()
                .map(|t| t.text.as_str())
                .collect();
            if !brackets_balanced(&span_text) {
                return false;
            }
            let total_words = tokens[start..=end].iter().filter(|t| t.word_like).count();
            total_words <= path.len() - missing + max_intra_word_letters
        })
        .collect()
}

type ScoreKey = (usize, Reverse<usize>, usize);

/// Select the best surviving path by the lexicographic key (fewest missing
/// letters, last match closest to the acronym, shortest span).
///
/// Equal keys resolve to the first-enumerated path, so selection scans with
/// a strictly-less comparison rather than `min_by_key`, which would keep the
/// last minimum.
pub fn select_best_path(paths: Vec<AlignmentPath>) -> Option<AlignmentPath> {
    let mut best: Option<(ScoreKey, AlignmentPath)> = None;

    for path in paths {
        let (Some(start), Some(end)) = (first_match(&path), last_match(&path)) else {
            continue;
        };
        let key = (missing_letters(&path), Reverse(end), end - start);
        match &best {
            Some((best_key, _)) if *best_key <= key => {}
            _ => best = Some((key, path)),
        }
    }

    best.map(|(_, path)| path)
}
