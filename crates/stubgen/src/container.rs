//! Class, interface and trait specs.

use serde::{Deserialize, Serialize};

use crate::docblock::render_doc_block;
use crate::error::{Error, Result};
use crate::function::FunctionSpec;
use crate::method::MethodSpec;
use crate::property::PropertySpec;
use crate::INDENT;

/// Which kind of top-level type declaration a container is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `trait`
    Trait,
}

impl ContainerKind {
    /// The declaration keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            ContainerKind::Class => "class",
            ContainerKind::Interface => "interface",
            ContainerKind::Trait => "trait",
        }
    }
}

/// A rename applied when a type pulls a method in from a trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitAlias {
    /// Original method, qualified as `Trait::method` where known
    pub method: String,

    /// Name the method is exposed under
    pub alias: String,
}

/// One type declaration: class, interface or trait.
///
/// Member lists hold only members declared directly on this type; inherited
/// and trait-provided members are represented by the extends clause and the
/// trait-use block instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Declaration kind
    pub kind: ContainerKind,

    /// Short name, without namespace
    pub name: String,

    /// Enclosing namespace (if any)
    pub namespace: Option<String>,

    /// Leading doc comment, verbatim
    pub doc_comment: Option<String>,

    /// `abstract` class
    pub is_abstract: bool,

    /// `final` class
    pub is_final: bool,

    /// Parent class, fully qualified (classes only)
    pub extends: Option<String>,

    /// Implemented interface names, ordered and deduplicated.
    ///
    /// For interfaces this is the parent-interface list, rendered as
    /// `extends`.
    pub implements: Vec<String>,

    /// Used trait names, fully qualified
    pub uses: Vec<String>,

    /// Alias directives on the trait-use clause
    pub trait_aliases: Vec<TraitAlias>,

    /// Properties and constants, in declaration order
    pub properties: Vec<PropertySpec>,

    /// Methods, in declaration order
    pub methods: Vec<MethodSpec>,
}

impl ContainerSpec {
    /// Create an empty container of the given kind.
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: None,
            doc_comment: None,
            is_abstract: false,
            is_final: false,
            extends: None,
            implements: Vec::new(),
            uses: Vec::new(),
            trait_aliases: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// The fully-qualified name, namespace separators included.
    pub fn fully_qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}\\{}", ns, self.name),
            _ => self.name.clone(),
        }
    }

    /// Add an implemented interface, keeping the list ordered and
    /// deduplicated.
    pub fn add_implements(&mut self, interface: impl Into<String>) {
        let interface = interface.into();
        if !self.implements.contains(&interface) {
            self.implements.push(interface);
        }
    }

    /// Add a used trait.
    pub fn add_trait_use(&mut self, trait_name: impl Into<String>) {
        let trait_name = trait_name.into();
        if !self.uses.contains(&trait_name) {
            self.uses.push(trait_name);
        }
    }

    /// Add a member property or constant.
    pub fn add_property(&mut self, property: PropertySpec) {
        self.properties.push(property);
    }

    /// Add a member method.
    pub fn add_method(&mut self, method: MethodSpec) {
        self.methods.push(method);
    }

    /// Remove a method by name. Returns whether a method was removed.
    pub fn remove_method(&mut self, name: &str) -> bool {
        let before = self.methods.len();
        self.methods.retain(|m| m.name != name);
        self.methods.len() != before
    }

    /// Record a trait-method rename.
    ///
    /// The renamed method is dropped from the method list under both its
    /// original and aliased name, and an alias directive is recorded on the
    /// trait-use clause instead.
    pub fn add_trait_alias(&mut self, method: impl Into<String>, alias: impl Into<String>) {
        let method = method.into();
        let alias = alias.into();
        self.remove_method(&alias);
        let original = method.rsplit("::").next().unwrap_or(&method).to_string();
        self.remove_method(&original);
        self.trait_aliases.push(TraitAlias { method, alias });
    }

    /// Render this container as a complete declaration block.
    ///
    /// Output order is fixed: namespace, doc comment, modifiers + keyword +
    /// name, extends/implements clauses, opening brace, trait-use block,
    /// constant/property blocks, method blocks, closing brace.
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

        if self.kind == ContainerKind::Class {
            if self.is_abstract {
                out.push_str("abstract ");
            } else if self.is_final {
                out.push_str("final ");
            }
        }
        out.push_str(self.kind.keyword());
        out.push(' ');
        out.push_str(&self.name);

        match self.kind {
            ContainerKind::Class => {
                if let Some(parent) = &self.extends {
                    out.push_str(" extends ");
                    out.push_str(&absolute(parent));
                }
                if !self.implements.is_empty() {
                    out.push_str(" implements ");
                    out.push_str(&join_absolute(&self.implements));
                }
            }
            ContainerKind::Interface => {
                // Parent interfaces render as extends; interfaces have no
                // implements clause of their own.
                if !self.implements.is_empty() {
                    out.push_str(" extends ");
                    out.push_str(&join_absolute(&self.implements));
                }
            }
            // Traits cannot extend or implement.
            ContainerKind::Trait => {}
        }

        out.push_str("\n{\n");

        let mut blocks: Vec<String> = Vec::new();
        if self.kind != ContainerKind::Interface && !self.uses.is_empty() {
            blocks.push(self.render_trait_uses());
        }
        for property in &self.properties {
            blocks.push(property.render(INDENT)?);
        }
        let in_interface = self.kind == ContainerKind::Interface;
        for method in &self.methods {
            blocks.push(method.render(INDENT, in_interface)?);
        }
        out.push_str(&blocks.join("\n"));

        out.push_str("}\n");
        Ok(out)
    }

    fn render_trait_uses(&self) -> String {
        let mut out = String::new();
        out.push_str(INDENT);
        out.push_str("use ");
        out.push_str(&join_absolute(&self.uses));
        if self.trait_aliases.is_empty() {
            out.push_str(";\n");
        } else {
            out.push_str(" {\n");
            for alias in &self.trait_aliases {
                out.push_str(INDENT);
                out.push_str(INDENT);
                out.push_str(&absolute(&alias.method));
                out.push_str(" as ");
                out.push_str(&alias.alias);
                out.push_str(";\n");
            }
            out.push_str(INDENT);
            out.push_str("}\n");
        }
        out
    }
}

/// A top-level stub entity, for uniform orchestrator dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StubItem {
    /// A global function
    Function(FunctionSpec),
    /// A class, interface or trait
    Container(ContainerSpec),
}

impl StubItem {
    /// The fully-qualified name of the wrapped entity.
    pub fn fully_qualified_name(&self) -> String {
        match self {
            StubItem::Function(f) => f.fully_qualified_name(),
            StubItem::Container(c) => c.fully_qualified_name(),
        }
    }

    /// Render the wrapped entity.
    pub fn render(&self) -> Result<String> {
        match self {
            StubItem::Function(f) => f.render(),
            StubItem::Container(c) => c.render(),
        }
    }
}

/// Qualify a name with a leading backslash for global resolution.
fn absolute(name: &str) -> String {
    if name.starts_with('\\') {
        name.to_string()
    } else {
        format!("\\{name}")
    }
}

fn join_absolute(names: &[String]) -> String {
    names.iter().map(|n| absolute(n)).collect::<Vec<_>>().join(", ")
}
