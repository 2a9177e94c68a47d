//! Purpose: Provide the internal payload decode entrypoints.
//! Exports: `from_str`, `from_slice`, `ParseError`, `ParseFailureCategory`, `categorize_error`,
//! `hint_for_error`.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Input buffers are copied once to satisfy simd-json mutable-slice API.
//! Invariants: Nesting deeper than `MAX_DEPTH` is rejected before simd-json sees the input.
//! Invariants: Hints name a stable category label and the caller context, never payload text.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use std::fmt;

/// Same ceiling serde_json applies to its own recursive descent.
pub(crate) const MAX_DEPTH: usize = 128;

#[derive(Debug)]
pub(crate) enum ParseError {
    Decode(simd_json::Error),
    DepthLimit { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Decode(err) => write!(f, "{err}"),
            ParseError::DepthLimit { limit } => write!(f, "nesting depth exceeds {limit}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Decode(err) => Some(err),
            ParseError::DepthLimit { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Utf8,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, ParseError> {
    from_slice(input.as_bytes())
}

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, ParseError> {
    check_depth(input, MAX_DEPTH)?;
    let mut bytes = input.to_vec();
    simd_json::serde::from_slice(&mut bytes).map_err(ParseError::Decode)
}

/// Byte scan for container nesting; brackets inside string literals do not count.
fn check_depth(input: &[u8], limit: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in input {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return Err(ParseError::DepthLimit { limit });
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn categorize_error(err: &ParseError) -> ParseFailureCategory {
    match err {
        ParseError::Decode(err) => categorize_message(&err.to_string()),
        ParseError::DepthLimit { .. } => ParseFailureCategory::DepthLimit,
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("utf8") || lowered.contains("utf-8") {
        return ParseFailureCategory::Utf8;
    }
    if lowered.contains("number") || lowered.contains("overflow") {
        return ParseFailureCategory::NumericRange;
    }
    if lowered.contains("recursion") || lowered.contains("depth") {
        return ParseFailureCategory::DepthLimit;
    }
    let syntax_markers = ["syntax", "expected", "unexpected", "eof", "character"];
    if syntax_markers.iter().any(|marker| lowered.contains(marker)) {
        return ParseFailureCategory::Syntax;
    }
    ParseFailureCategory::Unknown
}

pub(crate) fn hint_for_error(err: &ParseError, context: &str) -> String {
    let category = categorize_error(err);
    format!("parse category: {}; context: {context}", category.label())
}
