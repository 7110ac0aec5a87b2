//! Lexical scopes, computed on demand from the tree.
//!
//! Nothing is cached: a scope is just the nearest ancestor that can own
//! declarations, and a lookup walks outward scanning each one. `var` is
//! hoisted to the enclosing function body or program; everything else is
//! block scoped.

use super::kinds::{is_class, is_function};
use super::NodePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Var,
    Let,
    Const,
    Param,
    Function,
    Class,
    Import,
    Type,
    CatchParam,
}

/// A name's declaration site.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    /// The identifier that introduces the name.
    pub identifier: NodePath<'a>,
    /// The declaring construct: a `variable_declarator`, a function or class
    /// declaration, an `import_statement`, a parameter list entry, ...
    pub declaration: NodePath<'a>,
    pub kind: BindingKind,
    /// Node owning the binding.
    pub scope: NodePath<'a>,
}

pub fn is_scope(path: &NodePath) -> bool {
    path.is_any(&[
        "program",
        "statement_block",
        "for_statement",
        "for_in_statement",
        "catch_clause",
    ]) || is_function(path)
        || is_class(path)
}

/// Nearest scope-owning ancestor of `path` (excluding `path` itself).
pub fn enclosing_scope<'a>(path: &NodePath<'a>) -> NodePath<'a> {
    path.ancestors()
        .find(is_scope)
        .unwrap_or_else(|| path.program())
}

/// The function body or program `var` declarations of `scope` hoist to.
pub fn function_scope<'a>(path: &NodePath<'a>) -> NodePath<'a> {
    path.ancestors()
        .find(|p| p.is("program") || is_function(p))
        .unwrap_or_else(|| path.program())
}

/// Resolve `name` as seen from `from`, walking outward through every scope.
pub fn lookup<'a>(from: &NodePath<'a>, name: &str) -> Option<Binding<'a>> {
    from.ancestors()
        .filter(is_scope)
        .find_map(|scope| declared_in(&scope, name))
}

/// Look up the binding for an identifier node by its own text.
pub fn binding_of<'a>(identifier: &NodePath<'a>) -> Option<Binding<'a>> {
    lookup(identifier, identifier.text())
}

/// Declaration of `name` owned directly by `scope`, if any.
pub fn declared_in<'a>(scope: &NodePath<'a>, name: &str) -> Option<Binding<'a>> {
    match scope.kind() {
        "program" | "statement_block" => {
            let hoists = scope.is("program")
                || scope.parent().is_some_and(|parent| is_function(&parent));
            for statement in scope.children() {
                if let Some(binding) = declared_by_statement(&statement, scope, name) {
                    return Some(binding);
                }
            }
            if hoists {
                return hoisted_var(scope, scope, name);
            }
            None
        }
        "for_statement" => scope
            .get("initializer")
            .and_then(|init| declared_by_statement(&init, scope, name)),
        "for_in_statement" => {
            let left = scope.get("left")?;
            let identifier = find_in_pattern(&left, name)?;
            let kind = if scope.has_token("const") {
                BindingKind::Const
            } else if scope.has_token("let") {
                BindingKind::Let
            } else {
                BindingKind::Var
            };
            Some(Binding {
                identifier,
                declaration: *scope,
                kind,
                scope: *scope,
            })
        }
        "catch_clause" => {
            let param = scope.get("parameter")?;
            let identifier = find_in_pattern(&param, name)?;
            Some(Binding {
                identifier,
                declaration: param,
                kind: BindingKind::CatchParam,
                scope: *scope,
            })
        }
        _ if is_function(scope) => declared_by_function(scope, name),
        _ if is_class(scope) => {
            let id = scope.get("name")?;
            (id.text() == name).then_some(Binding {
                identifier: id,
                declaration: *scope,
                kind: BindingKind::Class,
                scope: *scope,
            })
        }
        _ => None,
    }
}

fn declared_by_function<'a>(function: &NodePath<'a>, name: &str) -> Option<Binding<'a>> {
    let params: Vec<NodePath<'a>> = if let Some(list) = function.get("parameters") {
        list.children()
    } else {
        function.get("parameter").into_iter().collect()
    };
    for param in params {
        if let Some(identifier) = find_in_pattern(&param, name) {
            return Some(Binding {
                identifier,
                declaration: param,
                kind: BindingKind::Param,
                scope: *function,
            });
        }
    }

    // A named function expression can refer to itself.
    if !function.is("function_declaration") && !function.is("method_definition") {
        if let Some(id) = function.get("name") {
            if id.text() == name {
                return Some(Binding {
                    identifier: id,
                    declaration: *function,
                    kind: BindingKind::Function,
                    scope: *function,
                });
            }
        }
    }
    None
}

fn declared_by_statement<'a>(
    statement: &NodePath<'a>,
    scope: &NodePath<'a>,
    name: &str,
) -> Option<Binding<'a>> {
    let named = |kind: BindingKind| -> Option<Binding<'a>> {
        let id = statement.get("name")?;
        (id.text() == name).then_some(Binding {
            identifier: id,
            declaration: *statement,
            kind,
            scope: *scope,
        })
    };

    match statement.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let kind = declaration_kind(statement);
            statement
                .children()
                .into_iter()
                .filter(|child| child.is("variable_declarator"))
                .find_map(|declarator| {
                    let pattern = declarator.get("name")?;
                    let identifier = find_in_pattern(&pattern, name)?;
                    Some(Binding {
                        identifier,
                        declaration: declarator,
                        kind,
                        scope: *scope,
                    })
                })
        }
        "function_declaration" | "generator_function_declaration" => named(BindingKind::Function),
        "class_declaration" | "abstract_class_declaration" => named(BindingKind::Class),
        "type_alias_declaration" | "interface_declaration" | "enum_declaration" => {
            named(BindingKind::Type)
        }
        "import_statement" => import_binding(statement, scope, name),
        "export_statement" => statement
            .get("declaration")
            .and_then(|decl| declared_by_statement(&decl, scope, name)),
        _ => None,
    }
}

fn declaration_kind(declaration: &NodePath) -> BindingKind {
    if declaration.is("variable_declaration") {
        BindingKind::Var
    } else if declaration.has_token("const") {
        BindingKind::Const
    } else {
        BindingKind::Let
    }
}

fn import_binding<'a>(
    statement: &NodePath<'a>,
    scope: &NodePath<'a>,
    name: &str,
) -> Option<Binding<'a>> {
    let clause = statement.child_of_kind("import_clause")?;
    let make = |identifier: NodePath<'a>| Binding {
        identifier,
        declaration: *statement,
        kind: BindingKind::Import,
        scope: *scope,
    };

    for part in clause.children() {
        match part.kind() {
            "identifier" if part.text() == name => return Some(make(part)),
            "namespace_import" => {
                if let Some(id) = part.child_of_kind("identifier") {
                    if id.text() == name {
                        return Some(make(id));
                    }
                }
            }
            "named_imports" => {
                for specifier in part.children() {
                    let local = specifier.get("alias").or_else(|| specifier.get("name"));
                    if let Some(local) = local {
                        if local.text() == name {
                            return Some(make(local));
                        }
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// `var` declarations nested in blocks below `node`, not crossing functions
/// or classes.
fn hoisted_var<'a>(node: &NodePath<'a>, scope: &NodePath<'a>, name: &str) -> Option<Binding<'a>> {
    for child in node.children() {
        if is_function(&child) || is_class(&child) {
            continue;
        }
        if child.is("variable_declaration") {
            if let Some(binding) = declared_by_statement(&child, scope, name) {
                return Some(binding);
            }
        }
        if let Some(binding) = hoisted_var(&child, scope, name) {
            return Some(binding);
        }
    }
    None
}

/// The identifier inside a binding pattern that introduces `name`.
pub fn find_in_pattern<'a>(pattern: &NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
    match pattern.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            (pattern.text() == name).then_some(*pattern)
        }
        "pair_pattern" => pattern.get("value").and_then(|v| find_in_pattern(&v, name)),
        "assignment_pattern" | "object_assignment_pattern" => pattern
            .get("left")
            .and_then(|left| find_in_pattern(&left, name)),
        "required_parameter" | "optional_parameter" => pattern
            .get("pattern")
            .and_then(|inner| find_in_pattern(&inner, name)),
        "object_pattern" | "array_pattern" | "rest_pattern" => pattern
            .children()
            .iter()
            .find_map(|child| find_in_pattern(child, name)),
        _ => None,
    }
}
