//! Core data structures for filename indexing.
//!
//! Defines naming conventions, parsed records, per-file output rows and
//! the batch summary returned by a run.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Filename layouts a batch can be parsed under
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `REF-Client Name-Lender.pdf`
    #[default]
    Delimited,
    /// `Ref: X  Client Name: Y.pdf`, lender fixed per batch
    Tagged,
}

impl Convention {
    /// Whether the lender comes from the filename rather than configuration
    pub fn derives_lender(&self) -> bool {
        matches!(self, Convention::Delimited)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Delimited => write!(f, "delimited"),
            Convention::Tagged => write!(f, "tagged"),
        }
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delimited" | "hyphen" => Ok(Convention::Delimited),
            "tagged" => Ok(Convention::Tagged),
            other => Err(format!(
                "unknown convention '{}', expected 'delimited' or 'tagged'",
                other
            )),
        }
    }
}

/// Row ordering for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOrder {
    /// Whatever order the host directory listing returns
    #[default]
    Listing,
    /// Sorted by filename
    Name,
}

/// Structured fields recovered from one filename
///
/// Each field is either a non-empty trimmed string or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub reference: Option<String>,
    pub client: Option<String>,
    pub lender: Option<String>,
    /// True iff every field required by the active convention was recovered
    pub parsed: bool,
}

impl ParsedRecord {
    /// Record with every field absent
    pub fn unparsed() -> Self {
        Self::default()
    }

    /// True when no field at all could be recovered
    pub fn is_unparsed(&self) -> bool {
        self.reference.is_none() && self.client.is_none() && self.lender.is_none()
    }
}

/// Keep a field only if something remains after trimming
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One output row, created once per eligible input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub reference_number: Option<String>,
    pub client_name: Option<String>,
    pub lender: Option<String>,
    pub original_filename: String,
}

impl FileRecord {
    /// Build a row from a parse result, substituting the batch lender when given
    pub fn from_parsed(
        original_filename: impl Into<String>,
        record: ParsedRecord,
        batch_lender: Option<&str>,
    ) -> Self {
        let lender = match batch_lender {
            Some(lender) => non_empty(lender),
            None => record.lender,
        };

        Self {
            reference_number: record.reference,
            client_name: record.client,
            lender,
            original_filename: original_filename.into(),
        }
    }

    /// Cells in column order, with absent fields rendered as empty strings
    pub fn export_row(&self) -> [&str; 4] {
        [
            self.reference_number.as_deref().unwrap_or(""),
            self.client_name.as_deref().unwrap_or(""),
            self.lender.as_deref().unwrap_or(""),
            &self.original_filename,
        ]
    }
}

/// Outcome of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub directory: PathBuf,
    /// `None` on a dry run
    pub output_path: Option<PathBuf>,
    pub convention: Convention,
    pub files_total: usize,
    pub files_parsed: usize,
    pub files_partial: usize,
    pub files_unparsable: usize,
    pub unparsable: Vec<String>,
    pub processing_time_ms: u128,
    pub completed_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn new(directory: PathBuf, convention: Convention) -> Self {
        Self {
            directory,
            output_path: None,
            convention,
            files_total: 0,
            files_parsed: 0,
            files_partial: 0,
            files_unparsable: 0,
            unparsable: Vec::new(),
            processing_time_ms: 0,
            completed_at: Utc::now(),
        }
    }

    /// Tally one parse result
    pub fn record(&mut self, filename: &str, record: &ParsedRecord) {
        self.files_total += 1;
        if record.parsed {
            self.files_parsed += 1;
        } else if record.is_unparsed() {
            self.files_unparsable += 1;
            self.unparsable.push(filename.to_string());
        } else {
            self.files_partial += 1;
        }
    }
}
