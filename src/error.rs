//! Error handling for batch indexing operations.
//!
//! Directory and export failures abort a run. Unparsable filenames are not
//! errors: they are recovered per file and reported through the batch summary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("No PDF files found in the folder: {path}")]
    EmptyBatch { path: PathBuf },

    #[error("Failed to write {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("Directory listing failed for {path}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Input error: {message}")]
    Prompt { message: String },
}

impl IndexerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an export error for the given target path
    pub fn export(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Process exit status used by the binary for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IndexerError::DirectoryNotFound { .. } => 2,
            IndexerError::EmptyBatch { .. } => 3,
            IndexerError::Export { .. } => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexerError>;
