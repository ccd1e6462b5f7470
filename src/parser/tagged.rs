//! Tagged-field convention: `Ref: X  Client Name: Y.pdf`.
//!
//! Tried in order, first match wins:
//! 1. anchored `Ref: ... Client Name: ...` match
//! 2. split once on the `Client Name:` marker
//! 3. split on the first double space of the raw stem
//!
//! The lender never comes from the filename; the reporter fills it in.

use super::strip_pdf_extension;
use crate::constants::markers;
use crate::models::{ParsedRecord, non_empty};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static REF_THEN_CLIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:Ref:)\s*(.*?)\s*Client Name:\s*(.*)$")
        .expect("tagged field pattern is valid")
});

pub fn parse(filename: &str) -> ParsedRecord {
    let stem = strip_pdf_extension(filename);
    let text = collapse_whitespace(stem);

    let (reference, client) = anchored_match(&text)
        .or_else(|| client_marker_split(&text))
        .or_else(|| double_space_split(stem))
        .unwrap_or((None, None));

    let parsed = reference.is_some() && client.is_some();
    ParsedRecord {
        reference,
        client,
        lender: None,
        parsed,
    }
}

type Fields = (Option<String>, Option<String>);

fn anchored_match(text: &str) -> Option<Fields> {
    let captures = REF_THEN_CLIENT.captures(text)?;
    Some((non_empty(&captures[1]), non_empty(&captures[2])))
}

fn client_marker_split(text: &str) -> Option<Fields> {
    let (left, right) = text.split_once(markers::CLIENT_NAME)?;
    Some((
        non_empty(&left.replace(markers::REFERENCE, "")),
        non_empty(right),
    ))
}

/// Runs on the uncollapsed stem, since collapsing removes every double space
fn double_space_split(stem: &str) -> Option<Fields> {
    let (left, right) = stem.trim().split_once(markers::DOUBLE_SPACE)?;
    let left = left.replace(markers::REFERENCE, "");
    let right = right.replace(markers::CLIENT_NAME, "");
    Some((
        non_empty(&collapse_whitespace(&left)),
        non_empty(&collapse_whitespace(&right)),
    ))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
