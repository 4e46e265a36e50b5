//! Stub extraction from PHP source code.

use std::fs;
use std::path::{Path, PathBuf};

use stubgen::{ContainerSpec, FunctionSpec, StubItem};
use tree_sitter::Parser;

use crate::errors::{ParseError, ParseResult};
use crate::visitor::StubVisitor;

/// All stub entities extracted from one PHP source file.
#[derive(Debug, Clone, Default)]
pub struct StubFile {
    /// Source file path
    pub path: PathBuf,

    /// Extracted global functions
    pub functions: Vec<FunctionSpec>,

    /// Extracted classes, interfaces and traits
    pub containers: Vec<ContainerSpec>,
}

impl StubFile {
    /// Total number of extracted entities.
    pub fn entity_count(&self) -> usize {
        self.functions.len() + self.containers.len()
    }

    /// All entities as uniform stub items, in extraction order.
    pub fn items(&self) -> Vec<StubItem> {
        let mut items: Vec<StubItem> = Vec::with_capacity(self.entity_count());
        items.extend(self.functions.iter().cloned().map(StubItem::Function));
        items.extend(self.containers.iter().cloned().map(StubItem::Container));
        items
    }
}

/// Extract declaration stubs from PHP source code.
pub fn extract(source: &str, file_path: &Path) -> ParseResult<StubFile> {
    let mut parser = Parser::new();
    let language = tree_sitter_php::language_php();
    parser
        .set_language(&language)
        .map_err(|e| ParseError::Parse(file_path.to_path_buf(), e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        ParseError::Parse(file_path.to_path_buf(), "Failed to parse".to_string())
    })?;

    let root_node = tree.root_node();

    if root_node.has_error() {
        return Err(ParseError::Syntax(file_path.to_path_buf(), 0, 0));
    }

    let mut visitor = StubVisitor::new(source.as_bytes());
    visitor.visit_node(root_node);

    Ok(StubFile {
        path: file_path.to_path_buf(),
        functions: visitor.functions,
        containers: visitor.containers,
    })
}

/// Read a file and extract its declaration stubs.
pub fn extract_file(path: &Path) -> ParseResult<StubFile> {
    log::debug!("extracting stubs from {}", path.display());
    let source = fs::read_to_string(path).map_err(|e| ParseError::Io(path.to_path_buf(), e))?;
    extract(&source, path)
}
