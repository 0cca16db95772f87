//! Error types for per-file extraction failures

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Why extracting one document failed.
///
/// Every variant is recoverable at the batch level: the caller reports
/// it and moves on to the next file.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("converter '{0}' not found on PATH")]
    ToolNotFound(String),

    #[error("converter '{tool}' failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("converter output was not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("not a valid docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
