//! Token definitions for classified text
//!
//! This module defines the classified text unit produced by the lexer.
//! Unlike a plain lexeme, a token carries the positional metadata the
//! alignment engine needs: sentence membership, whether it counts as a free
//! word, and whether it is a parenthesized acronym candidate.

use serde::Serialize;
use std::fmt;

/// One classified unit of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The literal substring. May be empty: adjacent separators produce a
    /// zero-width segment between them.
    pub text: String,
    /// True when this token sits between a literal `(` and `)` and its text
    /// is shaped like an acronym.
    pub acronym_like: bool,
    /// True when the token is not a separator form and not a bound suffix
    /// fragment. Empty segments and stop words are word-like.
    pub word_like: bool,
    /// 0-based sentence index; sentences are delimited by `.` tokens, and
    /// the `.` itself belongs to the sentence it terminates.
    pub sentence_number: usize,
    /// True when the token immediately follows a standalone hyphen, i.e. it
    /// is the tail half of a hyphenated compound.
    pub is_suffix: bool,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        acronym_like: bool,
        word_like: bool,
        sentence_number: usize,
        is_suffix: bool,
    ) -> Self {
        Token {
            text: text.into(),
            acronym_like,
            word_like,
            sentence_number,
            is_suffix,
        }
    }

    /// Synthesized acronym token produced by the merge transform.
    pub fn merged_acronym(text: String, sentence_number: usize) -> Self {
        Token {
            text,
            acronym_like: true,
            word_like: true,
            sentence_number,
            is_suffix: false,
        }
    }

    /// First character of the token text, if any.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Whether the first character case-insensitively equals `letter`.
    /// Empty tokens never match.
    pub fn starts_with_letter(&self, letter: char) -> bool {
        match self.first_char() {
            Some(first) => first.to_lowercase().eq(letter.to_lowercase()),
            None => false,
        }
    }
}

impl fmt::Display for Token {
    /// Compact single-line form used by the text token dump:
    /// sentence number, flag column (`w` word-like, `a` acronym-like,
    /// `x` suffix), then the quoted text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = if self.word_like { 'w' } else { '-' };
        let a = if self.acronym_like { 'a' } else { '-' };
        let x = if self.is_suffix { 'x' } else { '-' };
        write!(
            f,
            "s{} {}{}{} {:?}",
            self.sentence_number, w, a, x, self.text
        )
    }
}
