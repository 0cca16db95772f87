//! Legacy .doc answer extraction via the external `antiword` converter
//!
//! `antiword` prints the document text on stdout; the capture is UTF-8
//! decoded and filtered with the same strict prefix rule as pdf text.

use crate::convert;
use crate::error::Result;
use crate::extract;
use std::path::Path;

const DOC_TO_TEXT: &str = "antiword";

/// Extract the answer strings from one legacy doc file.
pub fn extract_answers(path: &Path) -> Result<Vec<String>> {
    extract_answers_with(DOC_TO_TEXT, path)
}

fn extract_answers_with(tool: &str, path: &Path) -> Result<Vec<String>> {
    let output = convert::run_tool(tool, path)?;
    let text = String::from_utf8(output.stdout)?;
    Ok(extract::prefix_answers(&text))
}
