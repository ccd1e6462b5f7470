//! Batch reporter tests
//!
//! Exercises the full discover-parse-export pipeline against temporary
//! directories, with in-memory exporters standing in for the xlsx writer.

pub mod error_handling;

use crate::error::{IndexerError, Result};
use crate::models::FileRecord;
use crate::processor::writer::TableExporter;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Exporter that keeps every exported table in memory
#[derive(Debug, Default)]
pub struct RecordingExporter {
    pub exports: RefCell<Vec<(PathBuf, Vec<FileRecord>)>>,
}

impl TableExporter for RecordingExporter {
    fn export(&self, rows: &[FileRecord], target: &Path) -> Result<()> {
        self.exports
            .borrow_mut()
            .push((target.to_path_buf(), rows.to_vec()));
        Ok(())
    }
}

/// Exporter that always fails, as if the target were locked
#[derive(Debug, Default)]
pub struct LockedExporter;

impl TableExporter for LockedExporter {
    fn export(&self, _rows: &[FileRecord], target: &Path) -> Result<()> {
        Err(IndexerError::export(
            target,
            "The process cannot access the file because it is being used by another process",
        ))
    }
}

/// Create empty files with the given names
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"%PDF-1.4").unwrap();
    }
}

/// File names in the order the host lists them, PDFs only
pub fn listed_pdfs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.to_lowercase().ends_with(".pdf"))
        .collect()
}
