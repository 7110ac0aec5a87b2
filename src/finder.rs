//! Locating component definitions in a parsed file.

use crate::ast::kinds::{is_class, is_function};
use crate::ast::members::is_module_exports;
use crate::ast::{NodePath, PathKey};
use crate::classify::{is_react_component_class, is_react_create_class_call, is_stateless_component};
use crate::importer::Importer;
use crate::resolve::{resolve_export_declaration, resolve_hoc, resolve_to_value};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Which definitions in a file get documented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolver {
    /// Only definitions reachable from `export` / `module.exports`.
    #[default]
    Exported,
    /// Every component definition in the file.
    All,
}

impl Resolver {
    pub fn find<'a>(self, root: NodePath<'a>, importer: &'a dyn Importer) -> Vec<NodePath<'a>> {
        match self {
            Resolver::Exported => find_exported_definitions(root, importer),
            Resolver::All => find_all_definitions(root, importer),
        }
    }
}

/// Every component class, `createClass` object and function component in
/// the file, outermost first. Functions nested in a definition already found
/// (render callbacks and the like) are not reported separately.
pub fn find_all_definitions<'a>(root: NodePath<'a>, importer: &'a dyn Importer) -> Vec<NodePath<'a>> {
    let mut found: Vec<NodePath<'a>> = Vec::new();
    let mut seen = HashSet::new();
    collect_definitions(root, importer, &mut found, &mut seen);
    found
}

fn collect_definitions<'a>(
    node: NodePath<'a>,
    importer: &'a dyn Importer,
    found: &mut Vec<NodePath<'a>>,
    seen: &mut HashSet<PathKey>,
) {
    if let Some(definition) = definition_at(node, importer) {
        if seen.insert(definition.key()) {
            debug!(?definition, "component definition");
            found.push(definition);
        }
        return;
    }
    for child in node.children() {
        collect_definitions(child, importer, found, seen);
    }
}

/// The component definition `node` itself introduces, if any.
fn definition_at<'a>(node: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    if is_class(&node) {
        return is_react_component_class(node, importer).then_some(node);
    }
    if node.is("call_expression") && is_react_create_class_call(node, importer) {
        return create_class_object(node, importer);
    }
    if is_function(&node) && !node.is("method_definition") {
        return is_stateless_component(node, importer).then_some(node);
    }
    None
}

fn create_class_object<'a>(call: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    let argument = call.get("arguments")?.children().into_iter().next()?;
    let object = resolve_to_value(argument, importer);
    object.is("object").then_some(object)
}

/// Definitions made visible by `export` statements and `module.exports`
/// assignments, looking through higher-order component wrappers.
pub fn find_exported_definitions<'a>(root: NodePath<'a>, importer: &'a dyn Importer) -> Vec<NodePath<'a>> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for statement in root.children() {
        let exported = match statement.kind() {
            "export_statement" => resolve_export_declaration(statement, importer),
            "expression_statement" => statement
                .children()
                .into_iter()
                .filter(|e| e.is("assignment_expression"))
                .filter(|e| e.get("left").is_some_and(|left| is_module_exports(left, importer)))
                .filter_map(|e| e.get("right"))
                .map(|right| resolve_to_value(right, importer))
                .collect(),
            _ => continue,
        };
        for value in exported {
            if let Some(definition) = resolve_definition(value, importer) {
                if seen.insert(definition.key()) {
                    found.push(definition);
                }
            }
        }
    }
    found
}

fn resolve_definition<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    let value = resolve_to_value(path, importer);
    if let Some(definition) = definition_at(value, importer) {
        return Some(definition);
    }
    if !value.is("call_expression") {
        return None;
    }
    let inner = resolve_hoc(value, importer);
    if inner == value {
        return None;
    }
    definition_at(resolve_to_value(inner, importer), importer)
}
