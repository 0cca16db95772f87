//! Directory scanning for question documents

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Document formats handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Docx,
    Doc,
    Pdf,
}

impl DocFormat {
    /// Suffix enumeration order for the scan. An entry matching an
    /// earlier suffix is not re-tested against later ones.
    pub const SCAN_ORDER: [DocFormat; 3] = [DocFormat::Docx, DocFormat::Doc, DocFormat::Pdf];

    /// File-name suffix for this format, including the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            DocFormat::Docx => ".docx",
            DocFormat::Doc => ".doc",
            DocFormat::Pdf => ".pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocFormat::Docx => "docx",
            DocFormat::Doc => "doc",
            DocFormat::Pdf => "pdf",
        }
    }
}

/// Paths found by a scan, bucketed by format.
///
/// Overlapping input directories produce duplicate entries; the caller
/// deduplicates the directory list, not the buckets.
#[derive(Debug, Default)]
pub struct DocumentSet {
    pub docx: Vec<PathBuf>,
    pub doc: Vec<PathBuf>,
    pub pdf: Vec<PathBuf>,
}

impl DocumentSet {
    pub fn bucket(&self, format: DocFormat) -> &[PathBuf] {
        match format {
            DocFormat::Docx => &self.docx,
            DocFormat::Doc => &self.doc,
            DocFormat::Pdf => &self.pdf,
        }
    }

    fn bucket_mut(&mut self, format: DocFormat) -> &mut Vec<PathBuf> {
        match format {
            DocFormat::Docx => &mut self.docx,
            DocFormat::Doc => &mut self.doc,
            DocFormat::Pdf => &mut self.pdf,
        }
    }

    pub fn total(&self) -> usize {
        self.docx.len() + self.doc.len() + self.pdf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A directory that could not be listed during the scan.
#[derive(Debug)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Outcome of a scan: the bucketed documents plus any directories that
/// had to be skipped.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub documents: DocumentSet,
    pub skipped: Vec<SkippedDir>,
}

/// Scan `dirs` for question documents, bucketing entries by file-name
/// suffix.
///
/// An unlistable directory (missing or otherwise) contributes zero
/// files and is recorded in [`ScanReport::skipped`]; the scan always
/// continues with the remaining directories.
pub fn scan_directories(dirs: &[PathBuf]) -> ScanReport {
    let mut report = ScanReport::default();

    for dir in dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::debug!("skipping {}: {error}", dir.display());
                report.skipped.push(SkippedDir {
                    path: dir.clone(),
                    error,
                });
                continue;
            }
        };

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let matched = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|name| {
                    DocFormat::SCAN_ORDER
                        .into_iter()
                        .find(|format| name.ends_with(format.suffix()))
                });
            if let Some(format) = matched {
                report.documents.bucket_mut(format).push(path);
            }
        }
    }

    report
}
