//! Lexer module for acronym recognition
//!
//! This module contains the tokenization logic: raw splitting on separator
//! patterns, per-token classification, and the complex-acronym merge pass.
//!
//! Splitting keeps every separator as its own token and materializes empty
//! segments between adjacent separators, so that concatenating the token
//! texts always reproduces the input. The alignment engine depends on that
//! shape in two ways: separator tokens can match literal acronym letters
//! (the `-` in `qRT-PCR`), and empty segments count as zero-width words when
//! span widths are measured.
//!
//! Hyphen splitting breaks compound acronyms apart, so a second pass re-fuses
//! the parenthesized `(` WORD `-` WORD `)` windows that look like a single
//! acronym. Keeping the merge separate from classification means the raw
//! classified stream remains available for callers that want the unmerged
//! view of the text.

pub mod acronym_merge_transform;
pub mod acronym_shape;
pub mod lexer_impl;
pub mod tokens;

pub use acronym_merge_transform::merge_complex_acronyms;
pub use acronym_shape::{looks_like_acronym, MAX_ACRONYM_LENGTH};
pub use lexer_impl::{classify_tokens, split_segments, RawPiece, RawToken};
pub use tokens::Token;

/// Main lexer function returning fully processed tokens (classification plus
/// the complex-acronym merge). This is the sequence the alignment engine
/// consumes.
pub fn lex(source: &str) -> Vec<Token> {
    merge_complex_acronyms(classify_tokens(source))
}
