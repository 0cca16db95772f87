//! Shared invocation of external converter binaries
//!
//! Both converters are opaque collaborators: their absence or failure
//! is a per-file error, never a batch abort. No timeout is applied, so
//! a hung converter blocks the batch.

use crate::error::{ExtractError, Result};
use std::io;
use std::path::Path;
use std::process::{Command, Output};

/// Run `tool <path>` and return its captured output, mapping a missing
/// binary and a non-zero exit to their typed failure reasons.
pub(crate) fn run_tool(tool: &str, path: &Path) -> Result<Output> {
    let output = Command::new(tool)
        .arg(path)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::ToolNotFound(tool.to_string()),
            _ => ExtractError::Io(e),
        })?;

    if !output.status.success() {
        return Err(ExtractError::ToolFailed {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}
