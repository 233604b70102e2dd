//! Definition alignment for parenthetical acronyms
//!
//! Given a token stream, this module walks backwards from each parenthesised
//! acronym and searches for a sequence of preceding words whose first letters
//! line up with the acronym's letters. Alignment is a small search problem:
//!
//! 1. collect, per acronym letter, the candidate tokens that could supply it
//!    ([`paths::collect_letter_candidates`]),
//! 2. enumerate every position-monotonic assignment of letters to candidates
//!    ([`paths::enumerate_paths`]),
//! 3. discard assignments that leave too many letters unmatched, span an
//!    unbalanced bracket region, or cover far more words than letters
//!    ([`paths::filter_paths`]),
//! 4. keep the best-scoring survivor ([`paths::select_best_path`]) and try to
//!    justify its remaining gaps from the interior letters of neighbouring
//!    words ([`engine::interpolate_missing_letters`]).
//!
//! Only fully justified alignments produce a definition. The whole procedure
//! stays inside the sentence holding the acronym and never consults anything
//! beyond token text, so results are deterministic for a given input.

pub mod brackets;
pub mod engine;
pub mod paths;

pub use brackets::brackets_balanced;
pub use engine::{
    find_acronym_definitions, find_acronym_definitions_with_budget, AcronymMap,
    DEFAULT_MAX_INTRA_WORD_LETTERS,
};
pub use paths::{
    collect_letter_candidates, enumerate_paths, filter_paths, first_match, last_match,
    missing_letters, select_best_path, AlignmentPath,
};
