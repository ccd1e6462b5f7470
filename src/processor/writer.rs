//! Table export for a finished batch
//!
//! The reporter hands its ordered rows to a [`TableExporter`]. The xlsx
//! exporter writes into a temporary file next to the target and renames it
//! into place, so a failed export never leaves a partial workbook behind.

use crate::constants::{COLUMN_HEADERS, MAX_WORKSHEET_ROWS, WORKSHEET_NAME};
use crate::error::{IndexerError, Result};
use crate::models::FileRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::debug;

/// Serializes a row collection to a target path
///
/// Implementations must keep row and column order exactly as supplied and
/// overwrite any existing file at `target`.
pub trait TableExporter {
    fn export(&self, rows: &[FileRecord], target: &Path) -> Result<()>;
}

/// Writes a single-sheet xlsx workbook with a header row and no index column
#[derive(Debug, Default, Clone)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(rows: &[FileRecord], target: &Path) -> Result<Workbook> {
        if rows.len() > MAX_WORKSHEET_ROWS {
            return Err(IndexerError::export(
                target,
                format!(
                    "{} rows exceed the worksheet limit of {}",
                    rows.len(),
                    MAX_WORKSHEET_ROWS
                ),
            ));
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(WORKSHEET_NAME)
            .map_err(|e| IndexerError::export(target, e))?;

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| IndexerError::export(target, e))?;
        }

        for (index, row) in rows.iter().enumerate() {
            let row_num = (index + 1) as u32;
            for (col, value) in row.export_row().iter().enumerate() {
                // Absent fields stay blank
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(row_num, col as u16, *value)
                    .map_err(|e| IndexerError::export(target, e))?;
            }
        }

        worksheet.autofit();
        Ok(workbook)
    }
}

impl TableExporter for XlsxExporter {
    fn export(&self, rows: &[FileRecord], target: &Path) -> Result<()> {
        let mut workbook = Self::build_workbook(rows, target)?;

        let directory = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let staging = tempfile::Builder::new()
            .prefix(".case-indexer-")
            .suffix(".xlsx")
            .tempfile_in(directory)
            .map_err(|e| IndexerError::export(target, e))?
            .into_temp_path();

        workbook
            .save(&staging)
            .map_err(|e| IndexerError::export(target, e))?;

        staging
            .persist(target)
            .map_err(|e| IndexerError::export(target, e.error))?;

        debug!("Wrote {} rows to {}", rows.len(), target.display());
        Ok(())
    }
}
