//! File processing API for acronym extraction
//!
//! This module wraps the library pipeline for callers working with files:
//! read a prose or document file, run one of the processing stages (token
//! dump, definition extraction, document pair extraction, annotation) and
//! render the result as text or JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::acrolex::align::{find_acronym_definitions_with_budget, AcronymMap};
use crate::acrolex::annotate::annotate_first_occurrence;
use crate::acrolex::document::{extract_document_acronyms, Document};
use crate::acrolex::lexer::{lex, Token};

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format string like "text" or "json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<&'static str> {
    vec!["text", "json"]
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidDocument(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidDocument(msg) => write!(f, "Invalid document: {}", msg),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Tokenize a prose file and render the token stream
pub fn process_tokens_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    let content = read_file(file_path)?;
    let tokens = lex(&content);
    format_tokens(&tokens, format)
}

/// Extract acronym definitions from a prose file and render them
pub fn process_definitions_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
    max_intra_word_letters: usize,
) -> Result<String, ProcessingError> {
    let content = read_file(file_path)?;
    let acronyms = find_acronym_definitions_with_budget(&content, max_intra_word_letters);
    format_definitions(&acronyms, format)
}

/// Extract acronym/definition pairs from a JSON document file and render them
pub fn process_document_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    let document = load_document(file_path)?;
    let pairs = extract_document_acronyms(&document);
    format_document_pairs(&pairs, format)
}

/// Annotate the first occurrence of an acronym in a prose file
pub fn process_annotation_file<P: AsRef<Path>>(
    file_path: P,
    acronym: &str,
    definition: &str,
) -> Result<String, ProcessingError> {
    let content = read_file(file_path)?;
    Ok(annotate_first_occurrence(&content, acronym, definition))
}

/// Load a document from a JSON file with a top-level "passages" array
pub fn load_document<P: AsRef<Path>>(file_path: P) -> Result<Document, ProcessingError> {
    let content = read_file(file_path)?;
    serde_json::from_str(&content).map_err(|e| ProcessingError::InvalidDocument(e.to_string()))
}

fn read_file<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    fs::read_to_string(file_path.as_ref()).map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}

/// Format an acronym map according to the specified format
fn format_definitions(acronyms: &AcronymMap, format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for (acronym, definitions) in acronyms {
                for definition in definitions {
                    lines.push(format!("{}\t{}", acronym, definition));
                }
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(acronyms)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}

/// Format document pairs according to the specified format
fn format_document_pairs(
    pairs: &[(String, String)],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = pairs
                .iter()
                .map(|(acronym, definition)| format!("{}\t{}", acronym, definition))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(pairs)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
    }
}
