//! Document-level extraction
//!
//! Articles arrive as a list of passages (title, abstract, body sections).
//! Passages are independent units of prose: an acronym in one passage must
//! never pick up definition words from another. Joining the passage texts
//! with ". " puts a sentence boundary between them, which is all the
//! alignment engine needs to keep them apart.

use serde::{Deserialize, Serialize};

use crate::acrolex::align::find_acronym_definitions;

/// A single unit of article text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
}

/// An article as a sequence of passages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub passages: Vec<Passage>,
}

/// Characters that downstream tab-separated output cannot carry inside a
/// definition.
pub const DEFAULT_DELIMITERS: &[char] = &['\t'];

/// Extract all acronym/definition pairs from a document.
///
/// Pairs are returned sorted by acronym and then by definition. Definitions
/// containing a tab are dropped so every pair can be written as one
/// tab-separated line.
pub fn extract_document_acronyms(document: &Document) -> Vec<(String, String)> {
    extract_document_acronyms_with_delimiters(document, DEFAULT_DELIMITERS)
}

/// Extract acronym/definition pairs, dropping definitions that contain any
/// of the given delimiter characters.
pub fn extract_document_acronyms_with_delimiters(
    document: &Document,
    delimiters: &[char],
) -> Vec<(String, String)> {
    let full_text = document
        .passages
        .iter()
        .map(|passage| passage.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");

    let mut pairs = Vec::new();
    for (acronym, definitions) in find_acronym_definitions(&full_text) {
        for definition in definitions {
            if definition.contains(delimiters) {
                continue;
            }
            pairs.push((acronym.clone(), definition));
        }
    }
    pairs
}
