//! Literal values for default-value expressions.

use serde::{Deserialize, Serialize};

/// A primitive literal used as a parameter, property or constant default.
///
/// Values either come from a literal default expression in the parsed source
/// or are synthesized by the parameter default policy. Expressions the model
/// does not interpret are carried through verbatim as [`Value::Expr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// Single-quoted string literal (unescaped content)
    String(String),
    /// Array literal
    Array(Vec<Value>),
    /// Raw source expression carried through unchanged
    Expr(String),
}

impl Value {
    /// Render this value as PHP source syntax.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    format!("{f}")
                }
            }
            Value::String(s) => {
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            Value::Array(items) => {
                let inner: Vec<String> = items.iter().map(Value::render).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Expr(raw) => raw.clone(),
        }
    }
}
