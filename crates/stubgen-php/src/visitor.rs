//! AST visitor that turns PHP declarations into stub specs.

use std::collections::HashMap;

use stubgen::{
    ContainerKind, ContainerSpec, FunctionSpec, MethodSpec, ParameterSpec, PropertySpec, TypeHint,
    Value, Visibility,
};
use tree_sitter::Node;

pub struct StubVisitor<'a> {
    pub source: &'a [u8],
    pub functions: Vec<FunctionSpec>,
    pub containers: Vec<ContainerSpec>,
    current_namespace: Option<String>,
    uses: HashMap<String, String>,
}

impl<'a> StubVisitor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            functions: Vec::new(),
            containers: Vec::new(),
            current_namespace: None,
            uses: HashMap::new(),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    pub fn visit_node(&mut self, node: Node) {
        // Track whether we should recurse into children
        let should_recurse = match node.kind() {
            "function_definition" => {
                self.visit_function(node);
                false // Don't recurse into function body
            }
            "class_declaration" => {
                self.visit_class(node);
                false // visit_class handles body itself
            }
            "interface_declaration" => {
                self.visit_interface(node);
                false
            }
            "trait_declaration" => {
                self.visit_trait(node);
                false
            }
            "enum_declaration" => {
                self.visit_enum(node);
                false
            }
            "namespace_definition" => {
                self.visit_namespace(node);
                true // Recurse to find declarations inside namespace
            }
            "namespace_use_declaration" => {
                self.visit_use(node);
                false
            }
            "anonymous_function_creation_expression" | "arrow_function" => {
                false // Skip anonymous functions
            }
            _ => true, // Recurse into other nodes
        };

        if should_recurse {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.visit_node(child);
            }
        }
    }

    fn visit_namespace(&mut self, node: Node) {
        self.current_namespace = node.child_by_field_name("name").map(|n| self.node_text(n));
    }

    fn visit_use(&mut self, node: Node) {
        let mut cursor = node.walk();
        let mut group_prefix: Option<String> = None;
        for child in node.children(&mut cursor) {
            match child.kind() {
                "namespace_use_clause" => self.extract_use_clause(child, None),
                // The prefix of a group import precedes the braced group.
                "namespace_name" | "qualified_name" | "name" => {
                    group_prefix = Some(self.node_text(child));
                }
                "namespace_use_group" => {
                    let mut group_cursor = child.walk();
                    for clause in child.children(&mut group_cursor) {
                        if clause.kind() == "namespace_use_group_clause" {
                            self.extract_use_clause(clause, group_prefix.as_deref());
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn extract_use_clause(&mut self, node: Node, group_prefix: Option<&str>) {
        let mut cursor = node.walk();
        let mut imported = String::new();
        let mut alias = None;

        for child in node.children(&mut cursor) {
            match child.kind() {
                "qualified_name" | "name" | "namespace_name" => {
                    imported = self.node_text(child);
                }
                "namespace_aliasing_clause" => {
                    let mut alias_cursor = child.walk();
                    for alias_child in child.children(&mut alias_cursor) {
                        if alias_child.kind() == "name" {
                            alias = Some(self.node_text(alias_child));
                        }
                    }
                }
                _ => {}
            }
        }

        if imported.is_empty() {
            return;
        }
        let imported = match group_prefix {
            Some(prefix) => format!(
                "{}\\{}",
                prefix.trim_start_matches('\\'),
                imported.trim_start_matches('\\')
            ),
            None => imported.trim_start_matches('\\').to_string(),
        };
        let key = alias.unwrap_or_else(|| {
            imported
                .rsplit('\\')
                .next()
                .unwrap_or(imported.as_str())
                .to_string()
        });
        self.uses.insert(key, imported);
    }

    /// Resolve a source-level type or trait name against the current
    /// namespace and `use` imports.
    ///
    /// Fully-qualified names keep their spelling minus the leading backslash.
    /// Otherwise the first segment is looked up in the import map; unimported
    /// names are prefixed with the current namespace, matching how PHP itself
    /// resolves unqualified class references.
    fn resolve_name(&self, name: &str) -> String {
        if let Some(stripped) = name.strip_prefix('\\') {
            return stripped.to_string();
        }
        let (head, rest) = match name.split_once('\\') {
            Some((head, rest)) => (head, Some(rest)),
            None => (name, None),
        };
        if let Some(target) = self.uses.get(head) {
            return match rest {
                Some(rest) => format!("{}\\{}", target, rest),
                None => target.clone(),
            };
        }
        match &self.current_namespace {
            Some(ns) => format!("{}\\{}", ns, name),
            None => name.to_string(),
        }
    }

    fn visit_function(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n),
            None => return,
        };

        let mut spec = FunctionSpec::new(name);
        spec.namespace = self.current_namespace.clone();
        spec.by_ref = is_by_ref(node);
        spec.return_type = self.extract_return_type(node);
        spec.doc_comment = self.extract_doc_comment(node);
        spec.parameters = self.extract_parameters(node);
        spec.body = node
            .child_by_field_name("body")
            .map(|body| self.extract_body(body));

        self.functions.push(spec);
    }

    fn visit_class(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n),
            None => return,
        };

        let mut container = ContainerSpec::new(ContainerKind::Class, name);
        container.namespace = self.current_namespace.clone();
        container.doc_comment = self.extract_doc_comment(node);
        container.is_abstract = has_child_of_kind(node, "abstract_modifier");
        container.is_final = has_child_of_kind(node, "final_modifier");

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "base_clause" => {
                    if let Some(parent) = self.first_type_name(child) {
                        container.extends = Some(self.resolve_name(&parent));
                    }
                }
                "class_interface_clause" => {
                    for interface in self.type_names(child) {
                        container.add_implements(self.resolve_name(&interface));
                    }
                }
                _ => {}
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_container_body(body, &mut container, false);
        }

        self.containers.push(container);
    }

    fn visit_interface(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n),
            None => return,
        };

        let mut container = ContainerSpec::new(ContainerKind::Interface, name);
        container.namespace = self.current_namespace.clone();
        container.doc_comment = self.extract_doc_comment(node);

        // Parent interfaces land in the implements list; ContainerSpec
        // renders them back as extends.
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "base_clause" {
                for parent in self.type_names(child) {
                    container.add_implements(self.resolve_name(&parent));
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_container_body(body, &mut container, true);
        }

        self.containers.push(container);
    }

    fn visit_trait(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n),
            None => return,
        };

        let mut container = ContainerSpec::new(ContainerKind::Trait, name);
        container.namespace = self.current_namespace.clone();
        container.doc_comment = self.extract_doc_comment(node);

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_container_body(body, &mut container, false);
        }

        self.containers.push(container);
    }

    /// PHP 8.1 enums are folded into classes: backed cases become class
    /// constants, pure cases carry no recoverable value and are dropped.
    fn visit_enum(&mut self, node: Node) {
        let name = match node.child_by_field_name("name") {
            Some(n) => self.node_text(n),
            None => return,
        };

        let mut container = ContainerSpec::new(ContainerKind::Class, name);
        container.namespace = self.current_namespace.clone();
        container.doc_comment = self.extract_doc_comment(node);

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "class_interface_clause" {
                for interface in self.type_names(child) {
                    container.add_implements(self.resolve_name(&interface));
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_container_body(body, &mut container, false);
        }

        self.containers.push(container);
    }

    fn visit_container_body(&mut self, body: Node, container: &mut ContainerSpec, in_interface: bool) {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "method_declaration" => {
                    if let Some(method) = self.extract_method(child, in_interface) {
                        container.add_method(method);
                    }
                }
                "property_declaration" => {
                    self.extract_properties(child, container);
                }
                "const_declaration" => {
                    self.extract_constants(child, container);
                }
                "use_declaration" => {
                    self.extract_trait_use(child, container);
                }
                "enum_case" => {
                    self.extract_enum_case(child, container);
                }
                _ => {}
            }
        }
    }

    fn extract_method(&self, node: Node, in_interface: bool) -> Option<MethodSpec> {
        let name = self.node_text(node.child_by_field_name("name")?);

        let mut method = MethodSpec::new(name);
        method.doc_comment = self.extract_doc_comment(node);
        method.return_type = self.extract_return_type(node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "visibility_modifier" => {
                    method.visibility = parse_visibility(&self.node_text(child));
                }
                "static_modifier" => method.is_static = true,
                "final_modifier" => method.is_final = true,
                // Interface methods are implicitly abstract; the flag must
                // not survive extraction or the keyword would be rendered.
                "abstract_modifier" => method.is_abstract = !in_interface,
                _ => {}
            }
        }

        for parameter in self.extract_parameters(node) {
            method.set_parameter(parameter);
        }
        Some(method)
    }

    fn extract_properties(&self, node: Node, container: &mut ContainerSpec) {
        let doc_comment = self.extract_doc_comment(node);
        let mut visibility = Visibility::Public;
        let mut is_static = false;
        let mut is_readonly = false;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "visibility_modifier" => visibility = parse_visibility(&self.node_text(child)),
                "static_modifier" => is_static = true,
                "readonly_modifier" => is_readonly = true,
                _ => {}
            }
        }

        let type_hint = node
            .child_by_field_name("type")
            .map(|n| TypeHint::new(self.node_text(n)));

        let mut element_cursor = node.walk();
        for child in node.named_children(&mut element_cursor) {
            if child.kind() != "property_element" {
                continue;
            }
            let mut name = None;
            let mut default = None;
            let mut inner = child.walk();
            for part in child.named_children(&mut inner) {
                match part.kind() {
                    "variable_name" => {
                        name = Some(self.node_text(part).trim_start_matches('$').to_string());
                    }
                    _ => {
                        default = Some(
                            self.classify_value(part)
                                .unwrap_or_else(|| Value::Expr(self.node_text(part))),
                        );
                    }
                }
            }
            let Some(name) = name else { continue };

            let mut property = PropertySpec::new(name, visibility);
            property.is_static = is_static;
            property.is_readonly = is_readonly;
            property.type_hint = type_hint.clone();
            property.default = default;
            property.doc_comment = doc_comment.clone();
            if is_static {
                property.flags |= stubgen::flags::IS_STATIC;
            }
            if is_readonly {
                property.flags |= stubgen::flags::IS_READONLY;
            }
            container.add_property(property);
        }
    }

    fn extract_constants(&self, node: Node, container: &mut ContainerSpec) {
        let doc_comment = self.extract_doc_comment(node);
        let mut visibility = Visibility::Public;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "visibility_modifier" {
                visibility = parse_visibility(&self.node_text(child));
            }
        }

        let mut element_cursor = node.walk();
        for child in node.named_children(&mut element_cursor) {
            if child.kind() != "const_element" {
                continue;
            }
            let mut name = None;
            let mut value = None;
            let mut inner = child.walk();
            for part in child.named_children(&mut inner) {
                if part.kind() == "name" && name.is_none() {
                    name = Some(self.node_text(part));
                } else {
                    value = Some(
                        self.classify_value(part)
                            .unwrap_or_else(|| Value::Expr(self.node_text(part))),
                    );
                }
            }
            if let (Some(name), Some(value)) = (name, value) {
                let mut constant = PropertySpec::constant(name, visibility, value);
                constant.doc_comment = doc_comment.clone();
                container.add_property(constant);
            }
        }
    }

    /// A backed enum case becomes a public constant; a pure case has no
    /// expressible value and is skipped.
    fn extract_enum_case(&self, node: Node, container: &mut ContainerSpec) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let Some(value) = node.child_by_field_name("value") else {
            return;
        };
        let value = self
            .classify_value(value)
            .unwrap_or_else(|| Value::Expr(self.node_text(value)));
        container.add_property(PropertySpec::constant(
            self.node_text(name),
            Visibility::Public,
            value,
        ));
    }

    fn extract_trait_use(&mut self, node: Node, container: &mut ContainerSpec) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "name" | "qualified_name" => {
                    let trait_name = self.resolve_name(&self.node_text(child));
                    container.add_trait_use(trait_name);
                }
                "use_list" => {
                    let mut list_cursor = child.walk();
                    for clause in child.named_children(&mut list_cursor) {
                        if clause.kind() == "use_as_clause" {
                            self.extract_trait_alias(clause, container);
                        }
                        // insteadof clauses pick a winner among colliding
                        // trait methods; the stub keeps the plain use.
                    }
                }
                _ => {}
            }
        }
    }

    fn extract_trait_alias(&self, node: Node, container: &mut ContainerSpec) {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        let Some(target) = children.first() else {
            return;
        };
        let target = self.node_text(*target);
        // Visibility-only aliasing has no rename to record.
        let alias = children[1..]
            .iter()
            .rev()
            .find(|n| n.kind() == "name")
            .map(|n| self.node_text(*n));
        let Some(alias) = alias else { return };

        let method = match target.split_once("::") {
            Some((trait_name, method)) => {
                format!("{}::{}", self.resolve_name(trait_name), method)
            }
            None => target,
        };
        container.add_trait_alias(method, alias);
    }

    /// Type names listed in a base or interface clause, in source order.
    fn type_names(&self, clause: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = clause.walk();
        for child in clause.children(&mut cursor) {
            if child.kind() == "name" || child.kind() == "qualified_name" {
                names.push(self.node_text(child));
            }
        }
        names
    }

    fn first_type_name(&self, clause: Node) -> Option<String> {
        self.type_names(clause).into_iter().next()
    }

    fn extract_return_type(&self, node: Node) -> Option<TypeHint> {
        node.child_by_field_name("return_type")
            .map(|n| TypeHint::new(self.node_text(n)))
    }

    fn extract_parameters(&self, node: Node) -> Vec<ParameterSpec> {
        let mut params = Vec::new();
        let Some(params_node) = node.child_by_field_name("parameters") else {
            return params;
        };
        let mut cursor = params_node.walk();
        let mut position = 0;
        for child in params_node.children(&mut cursor) {
            let is_variadic = child.kind() == "variadic_parameter";
            let is_promoted = child.kind() == "property_promotion_parameter";
            if child.kind() != "simple_parameter" && !is_variadic && !is_promoted {
                continue;
            }
            let Some(name_node) = child.child_by_field_name("name") else {
                continue;
            };
            let name = self.node_text(name_node).trim_start_matches('$').to_string();

            let mut param = ParameterSpec::new(name, position);
            position += 1;

            if let Some(type_node) = child.child_by_field_name("type") {
                param = param.with_type(TypeHint::new(self.node_text(type_node)));
            }
            if is_by_ref(child) {
                param = param.by_ref();
            }
            if is_variadic {
                param = param.variadic();
            }
            if is_promoted {
                let visibility = self
                    .visibility_modifier_text(child)
                    .map(|text| parse_visibility(&text))
                    .unwrap_or_default();
                param = param.promoted(visibility);
            }
            if let Some(default_node) = child.child_by_field_name("default_value") {
                // A default that is not a self-contained literal cannot be
                // carried into a standalone stub; the parameter stays
                // optional and the render-time synthesis policy supplies a
                // call-compatible placeholder.
                param = match self.classify_value(default_node) {
                    Some(value) => param.with_default(value),
                    None => param.optional(),
                };
            }
            params.push(param);
        }
        params
    }

    fn visibility_modifier_text(&self, node: Node) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "visibility_modifier" {
                return Some(self.node_text(child));
            }
        }
        None
    }

    /// Classify a default-value expression into a literal, or `None` when the
    /// expression depends on context outside the declaration.
    fn classify_value(&self, node: Node) -> Option<Value> {
        match node.kind() {
            "null" => Some(Value::Null),
            "boolean" => {
                let text = self.node_text(node);
                Some(Value::Bool(text.eq_ignore_ascii_case("true")))
            }
            "integer" => {
                let text = self.node_text(node).replace('_', "");
                text.parse::<i64>().ok().map(Value::Int)
            }
            "float" => {
                let text = self.node_text(node).replace('_', "");
                text.parse::<f64>().ok().map(Value::Float)
            }
            "string" => Some(Value::String(self.string_content(node))),
            // Double-quoted strings may interpolate; carried through verbatim.
            "encapsed_string" => Some(Value::Expr(self.node_text(node))),
            "unary_op_expression" => {
                let text = self.node_text(node).replace('_', "");
                if let Ok(i) = text.parse::<i64>() {
                    return Some(Value::Int(i));
                }
                text.parse::<f64>().ok().map(Value::Float)
            }
            "array_creation_expression" => {
                let mut items = Vec::new();
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() != "array_element_initializer" {
                        continue;
                    }
                    let mut inner = child.walk();
                    let parts: Vec<Node> = child.named_children(&mut inner).collect();
                    // Keyed entries fall outside the literal model.
                    if parts.len() != 1 {
                        return None;
                    }
                    items.push(self.classify_value(parts[0])?);
                }
                Some(Value::Array(items))
            }
            _ => None,
        }
    }

    /// The unescaped content of a single-quoted string literal.
    fn string_content(&self, node: Node) -> String {
        let text = self.node_text(node);
        let inner = text
            .strip_prefix('\'')
            .and_then(|t| t.strip_suffix('\''))
            .unwrap_or(&text);
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next @ ('\\' | '\'')) => out.push(next),
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Capture a brace-delimited body's text, braces excluded, with its
    /// common indentation stripped.
    fn extract_body(&self, body: Node) -> String {
        let text = self.node_text(body);
        let inner = text
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or("");
        stubgen::strip_body_indention(inner)
    }

    fn extract_doc_comment(&self, node: Node) -> Option<String> {
        // Look for preceding comment node
        if let Some(prev) = node.prev_sibling() {
            if prev.kind() == "comment" {
                let comment = self.node_text(prev);
                if comment.starts_with("/**") {
                    return Some(comment);
                }
            }
        }
        None
    }
}

fn parse_visibility(text: &str) -> Visibility {
    match text {
        "protected" => Visibility::Protected,
        "private" => Visibility::Private,
        _ => Visibility::Public,
    }
}

fn has_child_of_kind(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == kind {
            return true;
        }
    }
    false
}

/// The grammar spells by-reference as a `reference_modifier` node on
/// parameters but a bare `&` token on function headers.
fn is_by_ref(node: Node) -> bool {
    has_child_of_kind(node, "reference_modifier") || has_child_of_kind(node, "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_and_visit(source: &[u8]) -> StubVisitor<'_> {
        use tree_sitter::Parser;

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_php::language_php())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();

        let mut visitor = StubVisitor::new(source);
        visitor.visit_node(tree.root_node());
        visitor
    }

    #[test]
    fn test_visitor_basics() {
        let visitor = StubVisitor::new(b"<?php");
        assert_eq!(visitor.functions.len(), 0);
        assert_eq!(visitor.containers.len(), 0);
    }

    #[test]
    fn test_function_extraction() {
        let source = b"<?php\nfunction greet(string $name): string { return \"Hello\"; }";
        let visitor = parse_and_visit(source);

        assert_eq!(visitor.functions.len(), 1);
        let func = &visitor.functions[0];
        assert_eq!(func.name, "greet");
        assert_eq!(func.return_type, Some(TypeHint::new("string")));
        assert_eq!(func.parameters.len(), 1);
        assert_eq!(func.parameters[0].name, "name");
        assert_eq!(func.parameters[0].type_hint, Some(TypeHint::new("string")));
    }

    #[test]
    fn test_function_in_namespace() {
        let source = b"<?php\nnamespace App\\Helpers;\nfunction formatCurrency() {}";
        let visitor = parse_and_visit(source);

        assert_eq!(visitor.functions.len(), 1);
        assert_eq!(
            visitor.functions[0].fully_qualified_name(),
            "App\\Helpers\\formatCurrency"
        );
    }

    #[test]
    fn test_function_by_ref_and_body() {
        let source = b"<?php\nfunction &counter() {\n    static $n = 0;\n    return $n;\n}";
        let visitor = parse_and_visit(source);

        let func = &visitor.functions[0];
        assert!(func.by_ref);
        let body = func.body.as_deref().unwrap();
        assert!(body.contains("static $n = 0;"));
        assert!(!body.contains('{'));
        assert!(!body.contains("    static"));
    }

    #[test]
    fn test_parameter_literal_defaults() {
        let source = b"<?php\nfunction f($a = 1, $b = -2.5, $c = 'x', $d = true, $e = null, $f = []) {}";
        let visitor = parse_and_visit(source);

        let params = &visitor.functions[0].parameters;
        assert_eq!(params[0].default, Some(Value::Int(1)));
        assert_eq!(params[1].default, Some(Value::Float(-2.5)));
        assert_eq!(params[2].default, Some(Value::String("x".to_string())));
        assert_eq!(params[3].default, Some(Value::Bool(true)));
        assert_eq!(params[4].default, Some(Value::Null));
        assert_eq!(params[5].default, Some(Value::Array(Vec::new())));
    }

    #[test]
    fn test_parameter_array_default_with_literals() {
        let source = b"<?php\nfunction f($a = [1, 'two', false]) {}";
        let visitor = parse_and_visit(source);

        assert_eq!(
            visitor.functions[0].parameters[0].default,
            Some(Value::Array(vec![
                Value::Int(1),
                Value::String("two".to_string()),
                Value::Bool(false),
            ]))
        );
    }

    #[test]
    fn test_non_literal_default_leaves_parameter_optional() {
        let source = b"<?php\nfunction f(int $a = PHP_INT_MAX, $b = new DateTime()) {}";
        let visitor = parse_and_visit(source);

        let params = &visitor.functions[0].parameters;
        assert_eq!(params[0].default, None);
        assert!(params[0].is_optional);
        // Synthesis fills in a call-compatible placeholder
        assert_eq!(params[0].effective_default(), Some(Value::Int(0)));
        assert_eq!(params[1].default, None);
        assert!(params[1].is_optional);
    }

    #[test]
    fn test_variadic_and_by_ref_parameters() {
        let source = b"<?php\nfunction f(int &$out, string ...$rest) {}";
        let visitor = parse_and_visit(source);

        let params = &visitor.functions[0].parameters;
        assert!(params[0].by_ref);
        assert!(!params[0].variadic);
        assert!(params[1].variadic);
        assert_eq!(params[1].name, "rest");
    }

    #[test]
    fn test_class_extraction_with_inheritance() {
        let source = b"<?php
namespace App;

use Countable;
use Traits\\Loggable as Log;

final class Basket extends BaseModel implements Countable, \\JsonSerializable {
}
";
        let visitor = parse_and_visit(source);

        assert_eq!(visitor.containers.len(), 1);
        let class = &visitor.containers[0];
        assert_eq!(class.kind, ContainerKind::Class);
        assert!(class.is_final);
        assert_eq!(class.extends.as_deref(), Some("App\\BaseModel"));
        assert_eq!(
            class.implements,
            vec!["Countable".to_string(), "JsonSerializable".to_string()]
        );
    }

    #[test]
    fn test_abstract_class_modifier() {
        let source = b"<?php\nabstract class Base {}";
        let visitor = parse_and_visit(source);
        assert!(visitor.containers[0].is_abstract);
    }

    #[test]
    fn test_use_alias_resolution() {
        let source = b"<?php
namespace App;
use Vendor\\Pkg\\Widget as W;
class Panel extends W {}
class Grid extends W\\Inner {}
";
        let visitor = parse_and_visit(source);

        assert_eq!(
            visitor.containers[0].extends.as_deref(),
            Some("Vendor\\Pkg\\Widget")
        );
        assert_eq!(
            visitor.containers[1].extends.as_deref(),
            Some("Vendor\\Pkg\\Widget\\Inner")
        );
    }

    #[test]
    fn test_group_use_resolution() {
        let source = b"<?php
namespace App;
use Vendor\\Pkg\\{Base, Marker};
class Panel extends Base implements Marker {}
";
        let visitor = parse_and_visit(source);

        let class = &visitor.containers[0];
        assert_eq!(class.extends.as_deref(), Some("Vendor\\Pkg\\Base"));
        assert_eq!(class.implements, vec!["Vendor\\Pkg\\Marker".to_string()]);
    }

    #[test]
    fn test_group_use_with_alias_and_nested_segment() {
        let source = b"<?php
namespace App;
use Vendor\\Pkg\\{Sub\\Widget, Base as Root};
class Panel extends Root {}
class Grid extends Widget {}
";
        let visitor = parse_and_visit(source);

        assert_eq!(
            visitor.containers[0].extends.as_deref(),
            Some("Vendor\\Pkg\\Base")
        );
        assert_eq!(
            visitor.containers[1].extends.as_deref(),
            Some("Vendor\\Pkg\\Sub\\Widget")
        );
    }

    #[test]
    fn test_method_modifiers() {
        let source = b"<?php
abstract class Job {
    abstract protected function handle(): void;
    final public static function dispatch(): self { return new static(); }
    private function cleanup() {}
}
";
        let visitor = parse_and_visit(source);

        let methods = &visitor.containers[0].methods;
        assert_eq!(methods.len(), 3);
        assert!(methods[0].is_abstract);
        assert_eq!(methods[0].visibility, Visibility::Protected);
        assert!(methods[1].is_final);
        assert!(methods[1].is_static);
        assert_eq!(methods[2].visibility, Visibility::Private);
    }

    #[test]
    fn test_interface_methods_are_not_marked_abstract() {
        let source = b"<?php\ninterface Reader { public function read(): string; }";
        let visitor = parse_and_visit(source);

        let iface = &visitor.containers[0];
        assert_eq!(iface.kind, ContainerKind::Interface);
        assert!(!iface.methods[0].is_abstract);
    }

    #[test]
    fn test_interface_parent_list() {
        let source = b"<?php\ninterface Repo extends Countable, IteratorAggregate {}";
        let visitor = parse_and_visit(source);

        assert_eq!(
            visitor.containers[0].implements,
            vec!["Countable".to_string(), "IteratorAggregate".to_string()]
        );
    }

    #[test]
    fn test_property_extraction() {
        let source = b"<?php
class Invoice {
    /** @var string */
    public static string $table = 'tblinvoices';
    protected readonly int $id;
    private $notes, $memo;
}
";
        let visitor = parse_and_visit(source);

        let props = &visitor.containers[0].properties;
        assert_eq!(props.len(), 4);
        assert!(props[0].is_static);
        assert_eq!(props[0].type_hint, Some(TypeHint::new("string")));
        assert_eq!(props[0].default, Some(Value::String("tblinvoices".to_string())));
        assert_eq!(props[0].doc_comment.as_deref(), Some("/** @var string */"));
        assert_eq!(
            props[0].flags,
            stubgen::flags::IS_PUBLIC | stubgen::flags::IS_STATIC
        );
        assert!(props[1].is_readonly);
        assert_eq!(props[1].visibility, Visibility::Protected);
        assert_eq!(props[2].name, "notes");
        assert_eq!(props[3].name, "memo");
        assert_eq!(props[3].visibility, Visibility::Private);
    }

    #[test]
    fn test_constant_extraction() {
        let source = b"<?php
class Status {
    const ACTIVE = 'Active';
    protected const LIMIT = 25;
    const EXPR = PHP_INT_MAX;
}
";
        let visitor = parse_and_visit(source);

        let props = &visitor.containers[0].properties;
        assert_eq!(props.len(), 3);
        assert!(props[0].is_const);
        assert_eq!(props[0].default, Some(Value::String("Active".to_string())));
        assert_eq!(props[1].visibility, Visibility::Protected);
        assert_eq!(props[1].default, Some(Value::Int(25)));
        // Non-literal constant values are carried through verbatim
        assert_eq!(props[2].default, Some(Value::Expr("PHP_INT_MAX".to_string())));
    }

    #[test]
    fn test_trait_extraction() {
        let source = b"<?php\ntrait Loggable { public function log(string $msg): void {} }";
        let visitor = parse_and_visit(source);

        let t = &visitor.containers[0];
        assert_eq!(t.kind, ContainerKind::Trait);
        assert_eq!(t.name, "Loggable");
        assert_eq!(t.methods.len(), 1);
    }

    #[test]
    fn test_trait_use_and_alias() {
        let source = b"<?php
namespace App;
class Logger {
    use Loggable {
        Loggable::log as writeLog;
    }
}
";
        let visitor = parse_and_visit(source);

        let class = &visitor.containers[0];
        assert_eq!(class.uses, vec!["App\\Loggable".to_string()]);
        assert_eq!(class.trait_aliases.len(), 1);
        assert_eq!(class.trait_aliases[0].method, "App\\Loggable::log");
        assert_eq!(class.trait_aliases[0].alias, "writeLog");
    }

    #[test]
    fn test_trait_use_visibility_only_records_no_alias() {
        let source = b"<?php
class C {
    use T {
        helper as protected;
    }
}
";
        let visitor = parse_and_visit(source);

        let class = &visitor.containers[0];
        assert_eq!(class.uses.len(), 1);
        assert!(class.trait_aliases.is_empty());
    }

    #[test]
    fn test_insteadof_keeps_plain_use() {
        let source = b"<?php
class C {
    use A, B {
        A::hello insteadof B;
    }
}
";
        let visitor = parse_and_visit(source);

        let class = &visitor.containers[0];
        assert_eq!(class.uses, vec!["A".to_string(), "B".to_string()]);
        assert!(class.trait_aliases.is_empty());
    }

    #[test]
    fn test_backed_enum_becomes_class_with_constants() {
        let source = b"<?php
enum Status: string implements HasLabel {
    case Pending = 'pending';
    case Paid = 'paid';

    public function label(): string { return $this->value; }
}
";
        let visitor = parse_and_visit(source);

        let e = &visitor.containers[0];
        assert_eq!(e.kind, ContainerKind::Class);
        assert_eq!(e.implements, vec!["HasLabel".to_string()]);
        assert_eq!(e.properties.len(), 2);
        assert!(e.properties[0].is_const);
        assert_eq!(e.properties[0].name, "Pending");
        assert_eq!(e.properties[0].default, Some(Value::String("pending".to_string())));
        assert_eq!(e.methods.len(), 1);
    }

    #[test]
    fn test_pure_enum_cases_are_skipped() {
        let source = b"<?php\nenum Suit { case Hearts; case Spades; }";
        let visitor = parse_and_visit(source);

        assert!(visitor.containers[0].properties.is_empty());
    }

    #[test]
    fn test_promoted_constructor_parameters() {
        let source = b"<?php
class Point {
    public function __construct(private float $x, protected float $y = 0.0) {}
}
";
        let visitor = parse_and_visit(source);

        let ctor = &visitor.containers[0].methods[0];
        assert_eq!(ctor.parameters[0].promoted, Some(Visibility::Private));
        assert_eq!(ctor.parameters[1].promoted, Some(Visibility::Protected));
        assert_eq!(ctor.parameters[1].default, Some(Value::Float(0.0)));
    }

    #[test]
    fn test_anonymous_functions_are_skipped() {
        let source = b"<?php\n$f = function () { return 1; };\n$g = fn() => 2;";
        let visitor = parse_and_visit(source);
        assert!(visitor.functions.is_empty());
    }

    #[test]
    fn test_doc_comments_attach_to_declarations() {
        let source = b"<?php
/**
 * Logs a message.
 */
function logActivity($message) {}

/** Invoice model. */
class Invoice {}
";
        let visitor = parse_and_visit(source);

        assert!(visitor.functions[0]
            .doc_comment
            .as_deref()
            .unwrap()
            .contains("Logs a message."));
        assert_eq!(
            visitor.containers[0].doc_comment.as_deref(),
            Some("/** Invoice model. */")
        );
    }

    #[test]
    fn test_string_escapes_unwrapped() {
        let source = b"<?php\nfunction f($a = 'it\\'s', $b = 'a\\\\b') {}";
        let visitor = parse_and_visit(source);

        let params = &visitor.functions[0].parameters;
        assert_eq!(params[0].default, Some(Value::String("it's".to_string())));
        assert_eq!(params[1].default, Some(Value::String("a\\b".to_string())));
    }

    #[test]
    fn test_fully_qualified_reference_keeps_spelling() {
        let source = b"<?php\nnamespace App;\nclass C extends \\Vendor\\Base {}";
        let visitor = parse_and_visit(source);
        assert_eq!(
            visitor.containers[0].extends.as_deref(),
            Some("Vendor\\Base")
        );
    }
}
