//! Global function specs and body text handling.

use serde::{Deserialize, Serialize};

use crate::docblock::render_doc_block;
use crate::error::{Error, Result};
use crate::parameter::{insert_parameter, ParameterSpec};
use crate::types::TypeHint;
use crate::INDENT;

/// One global function signature, with optional body text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Short function name
    pub name: String,

    /// Enclosing namespace (if any)
    pub namespace: Option<String>,

    /// Parameters in positional order
    pub parameters: Vec<ParameterSpec>,

    /// Declared return type (if any)
    pub return_type: Option<TypeHint>,

    /// Returns by reference (`function &f()`)
    pub by_ref: bool,

    /// Body text, already stripped of its common indentation
    pub body: Option<String>,

    /// Leading doc comment, verbatim
    pub doc_comment: Option<String>,
}

impl FunctionSpec {
    /// Create a function spec.
    ///
    /// A backslash-qualified name is split on its last separator into
    /// namespace and short name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut spec = Self::default();
        match name.rfind('\\') {
            Some(pos) => {
                spec.namespace = Some(name[..pos].trim_start_matches('\\').to_string());
                spec.name = name[pos + 1..].to_string();
            }
            None => spec.name = name,
        }
        spec
    }

    /// Insert a parameter, replacing any existing parameter of the same name
    /// while preserving positional order.
    pub fn set_parameter(&mut self, parameter: ParameterSpec) {
        insert_parameter(&mut self.parameters, parameter);
    }

    /// The fully-qualified name, namespace separators included.
    pub fn fully_qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}\\{}", ns, self.name),
            _ => self.name.clone(),
        }
    }

    /// Render this function as a complete declaration block.
    pub fn render(&self) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }

        let mut out = String::new();
        if let Some(ns) = &self.namespace {
            if !ns.is_empty() {
                out.push_str("namespace ");
                out.push_str(ns);
                out.push_str(";\n\n");
            }
        }
        if let Some(doc) = &self.doc_comment {
            out.push_str(&render_doc_block(doc, ""));
        }
        out.push_str("function ");
        if self.by_ref {
            out.push_str("& ");
        }
        out.push_str(&self.name);
        out.push('(');
        let params: Vec<String> = self.parameters.iter().map(ParameterSpec::render).collect();
        out.push_str(&params.join(", "));
        out.push(')');
        if let Some(ret) = &self.return_type {
            out.push_str(" : ");
            out.push_str(ret.as_str());
        }
        out.push_str("\n{\n");
        if let Some(body) = &self.body {
            if !body.trim().is_empty() {
                out.push_str(&reindent_body(body, INDENT));
                out.push('\n');
            }
        }
        out.push_str("}\n");
        Ok(out)
    }
}

/// Strip the common leading indentation from a function body.
///
/// The indentation run is measured from the line at index 1 of the body (the
/// first content line of a brace-delimited body, whose line 0 is the empty
/// remainder of the opening-brace line) and that exact run is removed from
/// every line that starts with it. No other line is examined to extend or
/// shrink the cut, so bodies whose second line is blank or indented unlike
/// the rest produce incorrectly stripped output.
pub fn strip_body_indention(body: &str) -> String {
    if body.is_empty() {
        return body.to_string();
    }

    let lines: Vec<&str> = body.split('\n').collect();
    let probe = lines.get(1).copied().unwrap_or("");
    let trimmed = probe.trim();
    let indention = if trimmed.is_empty() {
        probe.to_string()
    } else {
        probe.replace(trimmed, "")
    };
    if indention.is_empty() {
        return body.to_string();
    }

    lines
        .iter()
        .map(|line| line.strip_prefix(indention.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-indent a stripped body to the target depth.
///
/// Every non-empty line is prefixed with the indent unless it is a bare
/// label (an identifier run immediately followed by `;`, e.g. a goto
/// target), which stays at column zero.
fn reindent_body(body: &str, indent: &str) -> String {
    body.trim()
        .split('\n')
        .map(|line| {
            if line.is_empty() || is_bare_label(line) {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_bare_label(line: &str) -> bool {
    let run = line
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .count();
    run > 0 && line[run..].starts_with(';')
}
