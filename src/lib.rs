//! # acrolex
//!
//! Lexical recognition of parenthetical acronym definitions in scientific
//! prose: given text like "epidermal growth factor receptor (EGFR)", the
//! engine aligns the acronym's letters against the words preceding it and
//! recovers the long form.
//!
//! The pipeline is purely lexical (no grammar, no language model): classify
//! tokens, merge hyphen-split acronyms, then search for the best
//! letter-to-word alignment path within the same sentence.

pub mod acrolex;
