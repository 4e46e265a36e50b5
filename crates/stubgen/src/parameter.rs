//! Parameter specs and the default-value synthesis policy.

use serde::{Deserialize, Serialize};

use crate::types::{TypeHint, Visibility};
use crate::value::Value;

/// One callable parameter.
///
/// Parameters are order-significant: `position` records the declaration's
/// positional order and survives re-insertion by name (see
/// [`insert_parameter`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, without the `$` sigil
    pub name: String,

    /// Ordinal position in the declaration
    pub position: usize,

    /// Declared type (if any)
    pub type_hint: Option<TypeHint>,

    /// Default value recovered from the declaration (if any)
    pub default: Option<Value>,

    /// Whether the parameter may be omitted at the call site.
    ///
    /// Set even when the original default expression could not be recovered;
    /// the synthesis policy then supplies a call-compatible placeholder.
    pub is_optional: bool,

    /// Passed by reference (`&$x`)
    pub by_ref: bool,

    /// Variadic (`...$x`)
    pub variadic: bool,

    /// Promoted constructor parameter visibility (`public int $x`)
    pub promoted: Option<Visibility>,
}

impl ParameterSpec {
    /// Create a parameter at the given position.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            type_hint: None,
            default: None,
            is_optional: false,
            by_ref: false,
            variadic: false,
            promoted: None,
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }

    /// Set the recovered default value. Implies optional.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self.is_optional = true;
        self
    }

    /// Mark the parameter optional without a recovered default.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Mark the parameter as passed by reference.
    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }

    /// Mark the parameter variadic.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark the parameter as a promoted constructor property.
    pub fn promoted(mut self, visibility: Visibility) -> Self {
        self.promoted = Some(visibility);
        self
    }

    /// Synthesize a default for an optional parameter whose original default
    /// could not be recovered.
    ///
    /// Policy: untyped or nullable parameters default to `null`; a single
    /// named built-in type gets a type-appropriate empty value (`array` →
    /// `[]`, `string` → `''`, `int`/`float` → `0`, `bool` → `true`); anything
    /// else defaults to `null`. Variadic parameters never receive a default
    /// (syntactically invalid).
    pub fn synthesized_default(&self) -> Option<Value> {
        if !self.is_optional || self.variadic || self.default.is_some() {
            return None;
        }
        let hint = match &self.type_hint {
            None => return Some(Value::Null),
            Some(hint) if hint.allows_null() => return Some(Value::Null),
            Some(hint) => hint,
        };
        let value = match hint.single_name() {
            Some(name) => match name.to_ascii_lowercase().as_str() {
                "array" => Value::Array(Vec::new()),
                "string" => Value::String(String::new()),
                "int" => Value::Int(0),
                "float" => Value::Int(0),
                "bool" => Value::Bool(true),
                _ => Value::Null,
            },
            None => Value::Null,
        };
        Some(value)
    }

    /// The default that will actually be rendered: the recovered one when
    /// present, otherwise the synthesized placeholder.
    pub fn effective_default(&self) -> Option<Value> {
        self.default.clone().or_else(|| self.synthesized_default())
    }

    /// Render this parameter as declaration syntax.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(visibility) = &self.promoted {
            out.push_str(visibility.keyword());
            out.push(' ');
        }
        if let Some(hint) = &self.type_hint {
            out.push_str(hint.as_str());
            out.push(' ');
        }
        if self.by_ref {
            out.push('&');
        }
        if self.variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(&self.name);
        if let Some(value) = self.effective_default() {
            out.push_str(" = ");
            out.push_str(&value.render());
        }
        out
    }
}

/// Insert a parameter into a list keyed by name, preserving positional order.
///
/// Re-inserting a parameter with an existing name replaces it in place; the
/// list is then re-sorted by position so declaration order always wins over
/// insertion order.
pub fn insert_parameter(parameters: &mut Vec<ParameterSpec>, parameter: ParameterSpec) {
    if let Some(existing) = parameters.iter_mut().find(|p| p.name == parameter.name) {
        *existing = parameter;
    } else {
        parameters.push(parameter);
    }
    parameters.sort_by_key(|p| p.position);
}
