//! qbtally-core - answer-line extraction and tallying
//!
//! Quiz bowl packets store each question's expected response on a line
//! beginning with the literal marker `ANSWER:`. This crate scans packet
//! directories for question documents, pulls the answer lines out of
//! each supported format and counts how often each distinct answer
//! string appears.
//!
//! Pipeline, leaves first:
//! - [`locator`]: bucket directory entries by format (docx, doc, pdf)
//! - [`docx`] / [`doc`] / [`pdf`]: per-format answer extraction
//! - [`tally`]: fold per-file answers into a frequency mapping
//! - [`report`]: frequency-sorted output plus summary statistics
//!
//! Everything runs sequentially in one pass; a file that fails to
//! extract is reported through [`ExtractError`] and never aborts the
//! batch.

pub(crate) mod convert;
pub mod doc;
pub mod docx;
pub mod error;
pub mod extract;
pub mod locator;
pub mod pdf;
pub mod report;
pub mod tally;

pub use error::{ExtractError, Result};
pub use extract::ANSWER_MARKER;
pub use locator::{scan_directories, DocFormat, DocumentSet, ScanReport, SkippedDir};
pub use tally::Frequencies;

use std::path::Path;

/// Extract the answer strings from a single document of known format.
pub fn extract_file(format: DocFormat, path: &Path) -> Result<Vec<String>> {
    match format {
        DocFormat::Docx => docx::extract_answers(path),
        DocFormat::Doc => doc::extract_answers(path),
        DocFormat::Pdf => pdf::extract_answers(path),
    }
}
