//! Filename-to-record parsing.
//!
//! Each naming convention has its own strategy with a fixed fallback chain.
//! Strategies are pure: they never fail and never touch the filesystem. A
//! filename nothing can be recovered from yields [`ParsedRecord::unparsed`].

pub mod delimited;
pub mod tagged;

#[cfg(test)]
mod tests;

use crate::constants::PDF_EXTENSION;
use crate::models::{Convention, ParsedRecord};

/// Parse a filename under the given convention
pub fn parse_filename(filename: &str, convention: Convention) -> ParsedRecord {
    match convention {
        Convention::Delimited => delimited::parse(filename),
        Convention::Tagged => tagged::parse(filename),
    }
}

/// Remove one trailing `.pdf` suffix, ignoring ASCII case
pub fn strip_pdf_extension(filename: &str) -> &str {
    match split_suffix(filename, PDF_EXTENSION.len()) {
        Some((stem, suffix)) if suffix.eq_ignore_ascii_case(PDF_EXTENSION) => stem,
        _ => filename,
    }
}

/// True if the name ends with `.pdf` in any ASCII case
pub fn has_pdf_extension(filename: &str) -> bool {
    split_suffix(filename, PDF_EXTENSION.len())
        .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case(PDF_EXTENSION))
}

fn split_suffix(s: &str, len: usize) -> Option<(&str, &str)> {
    let at = s.len().checked_sub(len)?;
    if s.is_char_boundary(at) {
        Some(s.split_at(at))
    } else {
        None
    }
}
