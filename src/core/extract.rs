//! Banner comment extraction.
//!
//! A banner comment starts with `/*!` and ends at the first following `*/`.
//! Matching is lexical only, so a banner inside a string literal is still
//! picked up.

use std::sync::LazyLock;

use regex::Regex;

use super::source::SourceKind;

// (?s) lets the body span lines; the lazy quantifier stops at the first `*/`.
static BANNER_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*!(.*?)\*/").unwrap());

/// Outcome of running the extractor over one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The file kind is neither style nor script.
    NotApplicable,
    /// Comment bodies in file order. May be empty.
    Comments(Vec<String>),
}

pub fn extract_comments(content: &str, kind: SourceKind) -> Extraction {
    if !kind.is_recognized() {
        return Extraction::NotApplicable;
    }

    let comments = BANNER_COMMENT_REGEX
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect();

    Extraction::Comments(comments)
}
