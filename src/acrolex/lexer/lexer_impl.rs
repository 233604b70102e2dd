//! Implementation of the acrolex lexer
//!
//! Raw splitting is handled entirely by logos. A thin pass then rebuilds the
//! split-with-captured-separators sequence the classifier works on: the
//! pieces strictly alternate segment, separator, segment, ..., segment, with
//! an empty segment materialized between adjacent separators and at the ends
//! of the input. Empty segments are real tokens downstream; they count as
//! zero-width words when the alignment engine measures span widths.

use crate::acrolex::lexer::acronym_shape::looks_like_acronym;
use crate::acrolex::lexer::tokens::Token;
use logos::Logos;

/// Raw lexemes: every separator form is one token, everything else
/// accumulates into segments. Note `/` is not a separator, so compounds like
/// `AP/BP` survive as a single segment.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    // Whitespace runs collapse into one separator token
    #[regex(r"\s+")]
    Whitespace,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Period,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(":")]
    Colon,
    #[token("-")]
    Hyphen,

    // Segment content (catch-all for non-separator characters)
    #[regex(r"[^\s,;.(){}:-]+")]
    Segment,
}

impl RawToken {
    /// Check if this lexeme is one of the separator forms
    pub fn is_separator(&self) -> bool {
        !matches!(self, RawToken::Segment)
    }
}

/// A raw piece of the input: either one captured separator or the (possibly
/// empty) segment between two separators.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPiece {
    pub text: String,
    pub is_separator: bool,
}

impl RawPiece {
    fn segment(text: impl Into<String>) -> Self {
        RawPiece {
            text: text.into(),
            is_separator: false,
        }
    }

    fn separator(text: impl Into<String>) -> Self {
        RawPiece {
            text: text.into(),
            is_separator: true,
        }
    }
}

/// Split text into the alternating segment/separator sequence, retaining
/// separators as their own pieces. Concatenating all pieces reproduces the
/// input exactly.
pub fn split_segments(source: &str) -> Vec<RawPiece> {
    let mut pieces = Vec::new();
    // The alternation must begin with a segment and a segment must follow
    // every separator, so an empty segment is inserted wherever the raw
    // lexemes leave a gap.
    let mut expect_segment = true;

    for (result, span) in RawToken::lexer(source).spanned() {
        let Ok(raw) = result else { continue };
        let text = &source[span];
        if raw.is_separator() {
            if expect_segment {
                pieces.push(RawPiece::segment(""));
            }
            pieces.push(RawPiece::separator(text));
            expect_segment = true;
        } else {
            pieces.push(RawPiece::segment(text));
            expect_segment = false;
        }
    }
    if expect_segment {
        pieces.push(RawPiece::segment(""));
    }

    pieces
}

/// Split text and classify every piece, producing the full token sequence.
///
/// Classification of piece `p` looks at its neighbors: a suffix fragment
/// follows a standalone hyphen, and an acronym candidate is bounded by a
/// literal `(` and `)`. The sentence counter advances after each `.` token,
/// including the decimal point of a number; that over-segmentation only
/// narrows alignment windows.
pub fn classify_tokens(source: &str) -> Vec<Token> {
    let pieces = split_segments(source);
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut sentence_number = 0;

    for (pos, piece) in pieces.iter().enumerate() {
        let is_suffix = pos > 0 && pieces[pos - 1].text == "-";
        let word_like = !piece.is_separator && !is_suffix;

        let acronym_like = pos > 0
            && pos + 1 < pieces.len()
            && pieces[pos - 1].text == "("
            && pieces[pos + 1].text == ")"
            && looks_like_acronym(&piece.text);

        tokens.push(Token::new(
            piece.text.clone(),
            acronym_like,
            word_like,
            sentence_number,
            is_suffix,
        ));

        if piece.text == "." {
            sentence_number += 1;
        }
    }

    tokens
}
