//! Hyphen-delimited convention: `REF-Client Name-Lender.pdf`.
//!
//! Spacing around hyphens is not significant, so `A - B - C.pdf` and
//! `A-B-C.pdf` parse identically. The first segment is the reference, the
//! last is the lender, and everything between is the client. Hyphens inside
//! a client name split it into parts that are rejoined with single spaces.

use super::strip_pdf_extension;
use crate::models::ParsedRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace on either side of a hyphen
static HYPHEN_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*-\s*").expect("hyphen spacing pattern is valid"));

/// Fewest segments that still give a reference, client and lender
const MIN_SEGMENTS: usize = 3;

pub fn parse(filename: &str) -> ParsedRecord {
    let stem = strip_pdf_extension(filename);
    let normalized = HYPHEN_SPACING.replace_all(stem, "-");

    let segments: Vec<&str> = normalized
        .split('-')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() < MIN_SEGMENTS {
        return ParsedRecord::unparsed();
    }

    let last = segments.len() - 1;
    ParsedRecord {
        reference: Some(segments[0].to_string()),
        client: Some(segments[1..last].join(" ")),
        lender: Some(segments[last].to_string()),
        parsed: true,
    }
}
