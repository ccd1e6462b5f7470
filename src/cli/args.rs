//! Command-line argument definitions for the case indexer
//!
//! Single-command interface using the clap derive API. Every flag that
//! mirrors a config setting overrides the config file and environment.

use crate::error::{IndexerError, Result};
use crate::models::Convention;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the case file indexer
///
/// Reads the PDF file names in a folder, extracts reference number, client
/// name and lender from each, and writes them to a spreadsheet in that folder.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "case-indexer",
    version,
    about = "Index client case PDFs by filename into a spreadsheet",
    long_about = "Reads the names of the PDF files in a folder, extracts the reference number, \
                  client name and lender from each name, and writes one row per file to \
                  client_data.xlsx in the same folder. File contents are never read."
)]
pub struct Args {
    /// Folder containing the case PDFs
    ///
    /// If omitted, the folder is asked for interactively.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Naming convention the file names follow
    #[arg(
        long = "convention",
        value_enum,
        help = "Naming convention: delimited (REF-Client-Lender) or tagged (Ref: X  Client Name: Y)"
    )]
    pub convention: Option<Convention>,

    /// Lender written on every row for the tagged convention
    #[arg(long = "lender", value_name = "NAME")]
    pub lender: Option<String>,

    /// Name of the spreadsheet created in the folder
    #[arg(short = 'o', long = "output-name", value_name = "FILE")]
    pub output_name: Option<String>,

    /// Sort rows by file name instead of directory listing order
    #[arg(long = "sort")]
    pub sort: bool,

    /// Show what would be written without creating the spreadsheet
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/case-indexer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate arguments that can be checked before any I/O on the batch
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(IndexerError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(lender) = &self.lender {
            if lender.trim().is_empty() {
                return Err(IndexerError::configuration("--lender cannot be empty"));
            }
        }

        Ok(())
    }

    /// Determine the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are drawn unless quiet or emitting machine output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}
