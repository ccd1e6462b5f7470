//! Case Indexer Library
//!
//! Builds a spreadsheet index of client case files from their PDF filenames.
//!
//! This library provides tools for:
//! - Parsing filenames under the hyphen-delimited convention
//!   (`REF-Client Name-Lender.pdf`) or the tagged convention
//!   (`Ref: X  Client Name: Y.pdf`)
//! - Discovering eligible PDF files in a directory
//! - Collecting one row per file, including files whose names cannot be parsed
//! - Writing the rows to an xlsx workbook atomically
//!
//! The parser is a pure function library; see [`parser::parse_filename`].

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;

// Re-export commonly used types
pub use config::Config;
pub use error::{IndexerError, Result};
pub use models::{BatchSummary, Convention, FileOrder, FileRecord, ParsedRecord};
pub use parser::parse_filename;
pub use processor::BatchReporter;
