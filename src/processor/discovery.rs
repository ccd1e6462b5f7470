//! Eligible file discovery for a batch directory
//!
//! Lists the top level of the input directory and keeps every non-directory
//! entry whose name ends in `.pdf` (any case), including dangling symlinks.
//! Subdirectories are not descended into.

use crate::error::{IndexerError, Result};
use crate::models::FileOrder;
use crate::parser::has_pdf_extension;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File discovery component for one batch directory
#[derive(Debug)]
pub struct FileDiscovery {
    directory: PathBuf,
    order: FileOrder,
    skipped: usize,
}

impl FileDiscovery {
    /// Create a discovery for `directory`, failing if it is not a directory
    pub fn new(directory: impl Into<PathBuf>, order: FileOrder) -> Result<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(IndexerError::DirectoryNotFound { path: directory });
        }

        Ok(Self {
            directory,
            order,
            skipped: 0,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Entries ignored during the last discovery (wrong extension, directory or non UTF-8 name)
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Names of eligible files, in listing order unless sorting is configured
    pub fn discover_pdf_files(&mut self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        self.skipped = 0;

        let walker = WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    warn!("Skipping unreadable entry: {}", e);
                    self.skipped += 1;
                    continue;
                }
                Err(source) => {
                    return Err(IndexerError::Listing {
                        path: self.directory.clone(),
                        source,
                    });
                }
            };

            if !is_candidate(&entry) {
                self.skipped += 1;
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                warn!(
                    "Skipping file with non UTF-8 name: {}",
                    entry.file_name().to_string_lossy()
                );
                self.skipped += 1;
                continue;
            };

            if has_pdf_extension(name) {
                files.push(name.to_string());
            } else {
                self.skipped += 1;
            }
        }

        if self.order == FileOrder::Name {
            files.sort();
        }

        debug!(
            "Found {} PDF files in {} ({} other entries ignored)",
            files.len(),
            self.directory.display(),
            self.skipped
        );

        Ok(files)
    }
}

/// Regular files, and symlinks unless they resolve to a directory
///
/// A dangling link still names a case file; its target is never read.
fn is_candidate(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_batch_dir(temp_dir: &TempDir) -> PathBuf {
        let dir = temp_dir.path().join("batch");
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("B-Client-Lender.pdf"), "").unwrap();
        fs::write(dir.join("A-Client-Lender.PDF"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(dir.join("scan.pdf.bak"), "").unwrap();

        // Directory with a matching name is not a file
        fs::create_dir(dir.join("archive.pdf")).unwrap();
        fs::write(dir.join("archive.pdf").join("C-Nested-Lender.pdf"), "").unwrap();

        dir
    }

    #[test]
    fn test_discover_pdf_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = create_batch_dir(&temp_dir);

        let mut discovery = FileDiscovery::new(&dir, FileOrder::Listing).unwrap();
        let mut files = discovery.discover_pdf_files().unwrap();
        files.sort();

        assert_eq!(files, vec!["A-Client-Lender.PDF", "B-Client-Lender.pdf"]);
        assert_eq!(discovery.skipped(), 3);
    }

    #[test]
    fn test_name_order_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let dir = create_batch_dir(&temp_dir);

        let mut discovery = FileDiscovery::new(&dir, FileOrder::Name).unwrap();
        let files = discovery.discover_pdf_files().unwrap();

        assert_eq!(files, vec!["A-Client-Lender.PDF", "B-Client-Lender.pdf"]);
    }

    #[test]
    fn test_listing_order_matches_read_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["z.pdf", "m.pdf", "a.pdf", "q.pdf"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let expected: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();

        let mut discovery = FileDiscovery::new(dir, FileOrder::Listing).unwrap();
        assert_eq!(discovery.discover_pdf_files().unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_still_listed() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("R-C-L.pdf"), "").unwrap();
        symlink(dir.join("gone"), dir.join("X-Y-Z.pdf")).unwrap();
        fs::create_dir(dir.join("real")).unwrap();
        symlink(dir.join("real"), dir.join("linked-dir.pdf")).unwrap();

        let mut discovery = FileDiscovery::new(dir, FileOrder::Name).unwrap();
        let files = discovery.discover_pdf_files().unwrap();

        assert_eq!(files, vec!["R-C-L.pdf", "X-Y-Z.pdf"]);
        assert_eq!(discovery.skipped(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("R-C-L.pdf"), "").unwrap();

        let raw = OsStr::from_bytes(b"R-Cl\xffient-L.pdf");
        if fs::write(dir.join(raw), "").is_err() {
            // Filesystem refuses non UTF-8 names
            return;
        }

        let mut discovery = FileDiscovery::new(dir, FileOrder::Listing).unwrap();
        let files = discovery.discover_pdf_files().unwrap();

        assert_eq!(files, vec!["R-C-L.pdf"]);
        assert_eq!(discovery.skipped(), 1);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut discovery = FileDiscovery::new(temp_dir.path(), FileOrder::Listing).unwrap();

        assert!(discovery.discover_pdf_files().unwrap().is_empty());
        assert_eq!(discovery.skipped(), 0);
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        match FileDiscovery::new(&missing, FileOrder::Listing) {
            Err(IndexerError::DirectoryNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("A-B-C.pdf");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            FileDiscovery::new(&file, FileOrder::Listing),
            Err(IndexerError::DirectoryNotFound { .. })
        ));
    }
}
