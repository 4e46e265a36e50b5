//! # stubgen-cli
//!
//! Orchestration for the stub generator: scans a PHP application tree,
//! extracts first-party declarations and writes one declaration-only stub
//! file per entity.

use std::path::PathBuf;

use thiserror::Error;

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{GenerateSummary, StubGenerator};

/// Errors that can abort a generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while scanning or writing
    #[error("IO error on {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// A source file failed to parse
    #[error(transparent)]
    Parse(#[from] stubgen_php::ParseError),

    /// A stub spec could not be rendered
    #[error(transparent)]
    Render(#[from] stubgen::Error),

    /// Unreadable configuration file
    #[error("invalid config file {0}: {1}")]
    Config(PathBuf, String),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
