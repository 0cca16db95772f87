//! PDF answer extraction via the external `pdftotext` converter
//!
//! `pdftotext <file.pdf>` writes its text to a sibling `.txt` file next
//! to the input. The sibling is read, filtered with the strict prefix
//! rule and then removed best-effort on both success and failure paths.

use crate::convert;
use crate::error::{ExtractError, Result};
use crate::extract;
use std::fs;
use std::path::Path;

const PDF_TO_TEXT: &str = "pdftotext";

/// Extract the answer strings from one pdf file.
pub fn extract_answers(path: &Path) -> Result<Vec<String>> {
    extract_answers_with(PDF_TO_TEXT, path)
}

fn extract_answers_with(tool: &str, path: &Path) -> Result<Vec<String>> {
    let txt_path = path.with_extension("txt");

    let text = convert::run_tool(tool, path)
        .and_then(|_| fs::read_to_string(&txt_path).map_err(ExtractError::from));

    // The sibling may exist even when conversion reported failure.
    if txt_path.exists() {
        if let Err(e) = fs::remove_file(&txt_path) {
            tracing::debug!("could not remove {}: {e}", txt_path.display());
        }
    }

    Ok(extract::prefix_answers(&text?))
}
