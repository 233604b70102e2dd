//! Shared lexical constant tables
//!
//! Process-wide read-only tables used by both the alignment engine and the
//! definition normalizer. Membership checks against `STOP_WORDS` are
//! case-sensitive or not depending on the caller; the tables themselves hold
//! lowercase forms only.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Function words: ignored by the backward-walk budget when counting covered
/// words, never used to interpolate missing letters, and dropped by the
/// normalizer. They remain word-like tokens.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["and", "or", "a", "the", "to", "of", "for", "not", "nor"]
        .into_iter()
        .collect()
});

/// Words used interchangeably in articles for the same long form, plus a few
/// recurring misspellings, mapped to one canonical spelling for comparison.
pub static SUBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("carcinoma", "cancer"),
        ("carcinomas", "cancer"),
        ("florescence", "fluorescent"), // misspelling in articles
        ("florescent", "fluorescent"),
        ("stranded", "strand"),
        ("indices", "index"),
        ("polimerase", "polymerase"), // misspelling in articles
        ("remission", "response"),
        ("microarray", "micro array"),
        ("gammapathies", "gammopathies"),
        ("gammopaties", "gammopathies"), // misspelling in articles
        ("gammapathy", "gammopathy"),
        ("progress", "progression"),
        ("linda", "lindau"),
    ]
    .into_iter()
    .collect()
});
