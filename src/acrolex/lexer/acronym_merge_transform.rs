//! Complex-acronym merge transform
//!
//! The splitter breaks hyphenated compounds apart, but some acronyms carry an
//! internal hyphen (`qRT-PCR`). Wherever a parenthesized word-separator-word
//! window re-joins into an acronym shape, this pass fuses the middle three
//! tokens back into one candidate token. It runs once, after classification
//! and before alignment.

use crate::acrolex::lexer::acronym_shape::looks_like_acronym;
use crate::acrolex::lexer::tokens::Token;

/// Re-fuse hyphen/slash-split tokens inside parentheses that together look
/// like one acronym.
///
/// The 5-token window `(` WORD `-`|`/` WORD `)` collapses to `(` MERGED `)`
/// where MERGED is a synthesized acronym token; everything else passes
/// through unchanged. Concatenated text is preserved, so splitting stays
/// reversible. An acronym with two internal separators does not fit the
/// window and is left unmerged.
pub fn merge_complex_acronyms(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        if tokens.len() - index >= 5 {
            let open = &tokens[index];
            let word1 = &tokens[index + 1];
            let sep = &tokens[index + 2];
            let word2 = &tokens[index + 3];
            let close = &tokens[index + 4];

            if open.text == "("
                && close.text == ")"
                && (sep.text == "-" || sep.text == "/")
            {
                let candidate = format!("{}{}{}", word1.text, sep.text, word2.text);
                if looks_like_acronym(&candidate) {
                    merged.push(open.clone());
                    merged.push(Token::merged_acronym(candidate, word1.sentence_number));
                    merged.push(close.clone());
                    index += 5;
                    continue;
                }
            }
        }

        merged.push(tokens[index].clone());
        index += 1;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acrolex::lexer::lexer_impl::classify_tokens;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_merges_hyphen_split_acronym() {
        let tokens = merge_complex_acronyms(classify_tokens("(qRT-PCR)"));
        assert_eq!(texts(&tokens), vec!["", "(", "qRT-PCR", ")", ""]);
        let fused = &tokens[2];
        assert!(fused.acronym_like);
        assert!(fused.word_like);
        assert!(!fused.is_suffix);
    }

    #[test]
    fn test_merge_inherits_sentence_number() {
        let tokens = merge_complex_acronyms(classify_tokens("x. (LPF-NT)"));
        let fused = tokens.iter().find(|t| t.text == "LPF-NT").unwrap();
        assert!(fused.acronym_like);
        assert_eq!(fused.sentence_number, 1);
    }

    #[test]
    fn test_leaves_ordinary_hyphen_compound_alone() {
        let tokens = merge_complex_acronyms(classify_tokens("(wild-type)"));
        assert_eq!(texts(&tokens), vec!["", "(", "wild", "-", "type", ")", ""]);
    }

    #[test]
    fn test_leaves_unparenthesized_compound_alone() {
        let tokens = merge_complex_acronyms(classify_tokens("qRT-PCR assay"));
        assert_eq!(texts(&tokens), vec!["qRT", "-", "PCR", " ", "assay"]);
    }

    #[test]
    fn test_two_internal_separators_do_not_fit_the_window() {
        let before = classify_tokens("(A-B-C)");
        let after = merge_complex_acronyms(before.clone());
        assert_eq!(after, before);
    }

    #[test]
    fn test_merge_preserves_concatenated_text() {
        let source = "phase (qRT-PCR) and (AP/BP) ends";
        let tokens = merge_complex_acronyms(classify_tokens(source));
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, source);
    }
}
