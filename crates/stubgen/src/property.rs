//! Property and class-constant specs.

use serde::{Deserialize, Serialize};

use crate::docblock::render_doc_block;
use crate::error::{Error, Result};
use crate::types::{TypeHint, Visibility};
use crate::value::Value;

/// One class property or class constant.
///
/// Constants are folded into the property list: `is_const` switches the
/// rendered form, and a constant always carries its value (there is no
/// "optional value" state for constants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Member name, without the `$` sigil
    pub name: String,

    /// Member visibility
    pub visibility: Visibility,

    /// `static` property
    pub is_static: bool,

    /// `readonly` property
    pub is_readonly: bool,

    /// Class constant rather than property
    pub is_const: bool,

    /// Declared property type (if any)
    pub type_hint: Option<TypeHint>,

    /// Default value, or the constant's value
    pub default: Option<Value>,

    /// Leading doc comment, verbatim
    pub doc_comment: Option<String>,

    /// Raw modifier bitmask, carried through unchanged for round-trip
    /// fidelity with the original declaration
    pub flags: u32,
}

impl PropertySpec {
    /// Create a property spec with the given visibility.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
            is_readonly: false,
            is_const: false,
            type_hint: None,
            default: None,
            doc_comment: None,
            flags: visibility.to_flag(),
        }
    }

    /// Create a class constant spec. Constants always carry their value.
    pub fn constant(name: impl Into<String>, visibility: Visibility, value: Value) -> Self {
        let mut spec = Self::new(name, visibility);
        spec.is_const = true;
        spec.default = Some(value);
        spec
    }

    /// Render this member at the given indentation depth.
    pub fn render(&self, indent: &str) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }

        let mut out = String::new();
        if let Some(doc) = &self.doc_comment {
            out.push_str(&render_doc_block(doc, indent));
        }
        out.push_str(indent);
        out.push_str(self.visibility.keyword());

        if self.is_const {
            let value = self.default.as_ref().ok_or_else(|| Error::ConstantWithoutValue {
                name: self.name.clone(),
            })?;
            out.push_str(" const ");
            out.push_str(&self.name);
            out.push_str(" = ");
            out.push_str(&value.render());
        } else {
            if self.is_static {
                out.push_str(" static");
            }
            if self.is_readonly {
                out.push_str(" readonly");
            }
            if let Some(hint) = &self.type_hint {
                out.push(' ');
                out.push_str(hint.as_str());
            }
            out.push_str(" $");
            out.push_str(&self.name);
            if let Some(value) = &self.default {
                out.push_str(" = ");
                out.push_str(&value.render());
            }
        }
        out.push_str(";\n");
        Ok(out)
    }
}
