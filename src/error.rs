//! Centralized error types for mhtml2html.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mhtml2html library.
///
/// Per-part decode failures are not represented here: they are recovered
/// inside the part decoder (see [`crate::parser::decode::DecodeOutcome`]).
#[derive(Error, Debug)]
pub enum MhtmlError {
    /// I/O error with the associated file path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified input file does not exist.
    #[error("MHTML file not found: {0}")]
    FileNotFound(PathBuf),

    /// The document has no blank line separating top-level headers from the body.
    #[error("Invalid MHTML structure: document has no header/body separation")]
    MissingHeaderSeparator,

    /// The top-level headers carry no `boundary="..."` parameter.
    #[error("No boundary found in MHTML headers: not a valid multipart document")]
    MissingBoundary,

    /// No `text/html` part was found in the archive.
    #[error("Main HTML part not found")]
    MissingPrimaryHtml,
}

impl MhtmlError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors that mean the input is not a multipart document at all.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MissingHeaderSeparator | Self::MissingBoundary)
    }
}

/// Convenience alias for `Result<T, MhtmlError>`.
pub type Result<T> = std::result::Result<T, MhtmlError>;
