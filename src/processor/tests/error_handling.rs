//! Fatal batch errors: missing directory, empty batch, export failure

use super::{LockedExporter, RecordingExporter, touch_all};
use crate::config::Config;
use crate::error::IndexerError;
use crate::processor::BatchReporter;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nonexistent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nonexistent");

    let reporter = BatchReporter::with_exporter(Config::default(), RecordingExporter::default());
    match reporter.run(&missing) {
        Err(IndexerError::DirectoryNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected DirectoryNotFound error, got {:?}", other),
    }
    assert!(reporter.exporter.exports.borrow().is_empty());
}

#[test]
fn test_empty_batch_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch_all(dir, &["readme.txt", "photo.jpg"]);
    fs::create_dir(dir.join("old.pdf")).unwrap();

    let reporter = BatchReporter::new(Config::default());
    match reporter.run(dir) {
        Err(IndexerError::EmptyBatch { path }) => assert_eq!(path, dir),
        other => panic!("Expected EmptyBatch error, got {:?}", other),
    }

    assert!(!dir.join("client_data.xlsx").exists());
}

#[test]
fn test_export_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    touch_all(temp_dir.path(), &["R-C-L.pdf"]);

    let reporter = BatchReporter::with_exporter(Config::default(), LockedExporter);
    match reporter.run(temp_dir.path()) {
        Err(err @ IndexerError::Export { .. }) => {
            assert!(err.to_string().contains("being used by another process"));
            assert_eq!(err.exit_code(), 4);
        }
        other => panic!("Expected Export error, got {:?}", other),
    }
}

#[test]
fn test_all_unparsable_still_exports() {
    let temp_dir = TempDir::new().unwrap();
    touch_all(temp_dir.path(), &["one.pdf", "two.pdf"]);

    let reporter = BatchReporter::with_exporter(Config::default(), RecordingExporter::default());
    let summary = reporter.run(temp_dir.path()).unwrap();

    assert_eq!(summary.files_unparsable, 2);
    assert_eq!(reporter.exporter.exports.borrow()[0].1.len(), 2);
}
