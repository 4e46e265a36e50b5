//! # stubgen-php
//!
//! PHP source extraction for stubgen - populates declaration stubs from
//! parsed PHP files.
//!
//! ## Features
//!
//! - Parse PHP source files with tree-sitter
//! - Extract functions, classes, interfaces, traits and enums as stub specs
//! - Resolve names against namespace and `use` imports
//! - Capture modifiers, types, defaults, doc comments and trait aliasing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), stubgen_php::ParseError> {
//! let stub_file = stubgen_php::extract_file(Path::new("Invoice.php"))?;
//! println!(
//!     "Parsed {} containers and {} functions",
//!     stub_file.containers.len(),
//!     stub_file.functions.len()
//! );
//! # Ok(())
//! # }
//! ```

mod errors;
mod extractor;
mod visitor;

pub use errors::{ParseError, ParseResult};
pub use extractor::{extract, extract_file, StubFile};
