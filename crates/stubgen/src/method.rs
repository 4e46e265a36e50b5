//! Method specs.

use serde::{Deserialize, Serialize};

use crate::docblock::render_doc_block;
use crate::error::{Error, Result};
use crate::parameter::{insert_parameter, ParameterSpec};
use crate::types::{TypeHint, Visibility};
use crate::INDENT;

/// One class, interface or trait method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name
    pub name: String,

    /// Member visibility
    pub visibility: Visibility,

    /// `static` method
    pub is_static: bool,

    /// `final` method
    pub is_final: bool,

    /// `abstract` method.
    ///
    /// Never set for interface methods: they are implicitly abstract and must
    /// not repeat the keyword.
    pub is_abstract: bool,

    /// Parameters in positional order
    pub parameters: Vec<ParameterSpec>,

    /// Declared return type (if any)
    pub return_type: Option<TypeHint>,

    /// Leading doc comment, verbatim
    pub doc_comment: Option<String>,
}

impl MethodSpec {
    /// Create a public concrete method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_abstract: false,
            parameters: Vec::new(),
            return_type: None,
            doc_comment: None,
        }
    }

    /// Insert a parameter, replacing any existing parameter of the same name
    /// while preserving positional order.
    pub fn set_parameter(&mut self, parameter: ParameterSpec) {
        insert_parameter(&mut self.parameters, parameter);
    }

    /// Render this method at the given indentation depth.
    ///
    /// `in_interface` suppresses the `abstract` keyword and the empty body:
    /// interface methods end in `;`.
    pub fn render(&self, indent: &str, in_interface: bool) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }

        let mut out = String::new();
        if let Some(doc) = &self.doc_comment {
            out.push_str(&render_doc_block(doc, indent));
        }
        out.push_str(indent);
        if self.is_abstract && !in_interface {
            out.push_str("abstract ");
        } else if self.is_final {
            out.push_str("final ");
        }
        out.push_str(self.visibility.keyword());
        if self.is_static {
            out.push_str(" static");
        }
        out.push_str(" function ");
        out.push_str(&self.name);
        out.push('(');
        let params: Vec<String> = self.parameters.iter().map(ParameterSpec::render).collect();
        out.push_str(&params.join(", "));
        out.push(')');
        if let Some(ret) = &self.return_type {
            out.push_str(" : ");
            out.push_str(ret.as_str());
        }
        if self.is_abstract || in_interface {
            out.push_str(";\n");
        } else {
            out.push('\n');
            out.push_str(indent);
            out.push_str("{\n");
            out.push_str(indent);
            out.push_str("}\n");
        }
        Ok(out)
    }
}
