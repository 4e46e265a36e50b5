//! Error types for PHP extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting stubs from PHP source.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax error in source code
    #[error("Syntax error in {0}:{1}:{2}")]
    Syntax(PathBuf, usize, usize),

    /// Generic parsing error
    #[error("Parse error in {0}: {1}")]
    Parse(PathBuf, String),
}

/// Result type for extraction operations.
pub type ParseResult<T> = Result<T, ParseError>;
