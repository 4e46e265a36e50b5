//! # stubgen
//!
//! Declaration-only PHP stub model and source renderer.
//!
//! Each kind of PHP declaration (function, class, interface, trait, method,
//! property, parameter) is represented by a plain data holder that can be
//! populated from any source of declaration data and rendered back to PHP
//! declaration syntax. Rendered stubs carry signatures, types, modifiers and
//! doc comments but no executable bodies, and are intended for consumption by
//! static-analysis tooling.
//!
//! ## Example
//!
//! ```rust
//! use stubgen::{ContainerKind, ContainerSpec, MethodSpec, TypeHint, Visibility};
//!
//! let mut class = ContainerSpec::new(ContainerKind::Class, "Invoice");
//! class.namespace = Some("WHMCS\\Billing".to_string());
//!
//! let mut total = MethodSpec::new("total");
//! total.return_type = Some(TypeHint::new("float"));
//! total.visibility = Visibility::Public;
//! class.add_method(total);
//!
//! let code = class.render().unwrap();
//! assert!(code.contains("class Invoice"));
//! ```

pub mod container;
pub mod docblock;
pub mod error;
pub mod function;
pub mod method;
pub mod parameter;
pub mod property;
pub mod types;
pub mod value;

// Re-export main types
pub use container::{ContainerKind, ContainerSpec, StubItem, TraitAlias};
pub use error::{Error, Result};
pub use function::{strip_body_indention, FunctionSpec};
pub use method::MethodSpec;
pub use parameter::ParameterSpec;
pub use property::PropertySpec;
pub use types::{flags, TypeHint, Visibility};
pub use value::Value;

/// Indentation unit used for all nested declaration output.
pub const INDENT: &str = "    ";
