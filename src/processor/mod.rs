//! Batch reporting over a directory of case files.
//!
//! Orchestrates one run: discover eligible files, parse each filename under
//! the configured convention, collect one row per file and hand the rows to
//! a table exporter. A filename that cannot be parsed is logged and still
//! gets a row; only directory and export failures abort the run.

pub mod discovery;
pub mod writer;

#[cfg(test)]
mod tests;

use self::discovery::FileDiscovery;
use self::writer::{TableExporter, XlsxExporter};

use crate::config::Config;
use crate::error::{IndexerError, Result};
use crate::models::{BatchSummary, FileRecord};
use crate::parser::parse_filename;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rows and tallies for one directory, before export
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub rows: Vec<FileRecord>,
    pub summary: BatchSummary,
}

/// Runs batches under one configuration
#[derive(Debug)]
pub struct BatchReporter<E = XlsxExporter> {
    config: Config,
    exporter: E,
    show_progress: bool,
}

impl BatchReporter<XlsxExporter> {
    /// Reporter writing xlsx workbooks
    pub fn new(config: Config) -> Self {
        Self::with_exporter(config, XlsxExporter::new())
    }
}

impl<E: TableExporter> BatchReporter<E> {
    pub fn with_exporter(config: Config, exporter: E) -> Self {
        Self {
            config,
            exporter,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while parsing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover and parse every eligible file without writing anything
    pub fn collect(&self, directory: &Path) -> Result<BatchOutput> {
        let start_time = Instant::now();
        let convention = self.config.parsing.convention;
        let batch_lender = self.config.batch_lender();

        let mut discovery = FileDiscovery::new(directory, self.config.output.file_order)?;
        let files = discovery.discover_pdf_files()?;

        if files.is_empty() {
            return Err(IndexerError::EmptyBatch {
                path: directory.to_path_buf(),
            });
        }

        info!(
            "Parsing {} files in {} as {}",
            files.len(),
            directory.display(),
            convention
        );

        let progress = self.progress_bar(files.len());
        let mut summary = BatchSummary::new(directory.to_path_buf(), convention);
        let mut rows = Vec::with_capacity(files.len());

        for filename in files {
            let record = parse_filename(&filename, convention);

            if record.is_unparsed() {
                warn!("Could not parse file name: {}", filename);
            } else if !record.parsed {
                debug!("Partially parsed file name: {} -> {:?}", filename, record);
            }

            summary.record(&filename, &record);
            rows.push(FileRecord::from_parsed(filename, record, batch_lender));
            progress.inc(1);
        }

        progress.finish_and_clear();
        summary.processing_time_ms = start_time.elapsed().as_millis();
        summary.completed_at = Utc::now();

        Ok(BatchOutput { rows, summary })
    }

    /// Full batch: collect rows and export them into the directory
    pub fn run(&self, directory: &Path) -> Result<BatchSummary> {
        let start_time = Instant::now();
        let BatchOutput { rows, mut summary } = self.collect(directory)?;

        let output_path = self.config.output_path(directory);
        self.exporter.export(&rows, &output_path)?;

        info!("Excel created: {}", output_path.display());

        summary.output_path = Some(output_path);
        summary.processing_time_ms = start_time.elapsed().as_millis();
        summary.completed_at = Utc::now();
        Ok(summary)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Parsing filenames");
        pb
    }
}
