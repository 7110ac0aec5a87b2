//! Exports, higher-order wrappers and function return values.

use super::resolve_to_value;
use crate::ast::kinds::{is_class, is_function};
use crate::ast::names::string_value;
use crate::ast::NodePath;
use crate::classify::builtin::is_react_create_class_call;
use crate::importer::Importer;

/// Every value an `export` statement makes visible, resolved.
pub fn resolve_export_declaration<'a>(
    statement: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Vec<NodePath<'a>> {
    if statement.has_token("default") {
        return statement
            .get("declaration")
            .or_else(|| statement.get("value"))
            .map(|value| vec![resolve_to_value(value, importer)])
            .unwrap_or_default();
    }

    if let Some(declaration) = statement.get("declaration") {
        return match declaration.kind() {
            "lexical_declaration" | "variable_declaration" => declaration
                .children()
                .into_iter()
                .filter(|d| d.is("variable_declarator"))
                .map(|d| resolve_to_value(d, importer))
                .collect(),
            _ => vec![declaration],
        };
    }

    let reexport = statement.get("source").is_some();
    let Some(clause) = statement.child_of_kind("export_clause") else {
        return Vec::new();
    };
    clause
        .children()
        .into_iter()
        .filter_map(|specifier| {
            let local = specifier.get("name")?;
            if reexport {
                let name = string_value(&local).unwrap_or_else(|| local.text().to_string());
                importer.import(statement, &name)
            } else {
                Some(resolve_to_value(local, importer))
            }
        })
        .collect()
}

/// Look through higher-order component calls (`withStyles(styles)(Foo)`,
/// `memo(Foo)`, `connect(a, b)(Foo)`) to the wrapped component.
///
/// When the first argument is configuration (a literal, object, array or
/// spread) the component is assumed to be the last argument instead.
pub fn resolve_hoc<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> NodePath<'a> {
    let path = path.unwrap_parens();
    if !path.is("call_expression") || is_react_create_class_call(path, importer) {
        return path;
    }
    let arguments = path
        .get("arguments")
        .map(|args| args.children())
        .unwrap_or_default();
    let (Some(first), Some(last)) = (arguments.first(), arguments.last()) else {
        return path;
    };

    let configuration = first.is_any(&[
        "string",
        "number",
        "true",
        "false",
        "null",
        "template_string",
        "object",
        "array",
        "spread_element",
    ]);
    let inner = if configuration { *last } else { *first };
    let resolved = resolve_to_value(inner, importer);
    if resolved == path {
        return path;
    }
    resolve_hoc(resolved, importer)
}

/// The first `return` statement's value of a function body, not looking into
/// nested functions; for expression-bodied arrows, the body itself.
pub fn resolve_function_definition_to_return_value<'a>(
    function: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let body = function.get("body")?;
    if !body.is("statement_block") {
        return Some(resolve_to_value(body, importer));
    }
    first_return(body).map(|value| resolve_to_value(value, importer))
}

fn first_return<'a>(node: NodePath<'a>) -> Option<NodePath<'a>> {
    for child in node.children() {
        if is_function(&child) || is_class(&child) {
            continue;
        }
        if child.is("return_statement") {
            if let Some(value) = child.children().into_iter().next() {
                return Some(value);
            }
            continue;
        }
        if let Some(found) = first_return(child) {
            return Some(found);
        }
    }
    None
}
