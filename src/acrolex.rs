//! Main module for acrolex library functionality

pub mod align;
pub mod annotate;
pub mod document;
pub mod lexer;
pub mod lexicon;
pub mod normalize;
pub mod processor;
