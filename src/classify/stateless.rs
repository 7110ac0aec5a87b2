//! Stateless (function) component detection.
//!
//! A function is a component when at least one of its own `return`s (or its
//! concise arrow body) produces an element: JSX, `createElement`,
//! `cloneElement` or `Children.only`. Returned expressions are followed
//! through both ternary branches, both logical operands, aliases, and into
//! the return values of called helper functions.

use super::builtin::{is_react_children_element_call, is_react_clone_element_call, is_react_create_element_call};
use crate::ast::kinds::{is_class, is_function, is_jsx};
use crate::ast::{NodePath, PathKey};
use crate::importer::Importer;
use crate::resolve::resolve_to_value;
use std::collections::HashSet;

/// Whether `path` (a function, arrow, method, object property or declarator
/// holding one) is a stateless component.
pub fn is_stateless_component<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    let function = match path.kind() {
        "pair" | "variable_declarator" => match path.get("value") {
            Some(value) => value.unwrap_parens(),
            None => return false,
        },
        _ => path,
    };
    if !is_function(&function) {
        return false;
    }
    let mut seen = HashSet::new();
    returns_element(function, importer, &mut seen)
}

/// Does any of `function`'s own return statements produce an element?
fn returns_element<'a>(function: NodePath<'a>, importer: &'a dyn Importer, seen: &mut HashSet<PathKey>) -> bool {
    let Some(body) = function.get("body") else {
        return false;
    };
    if !body.is("statement_block") {
        return is_element(Some(body), importer, seen);
    }
    any_return(body, importer, seen)
}

fn any_return<'a>(node: NodePath<'a>, importer: &'a dyn Importer, seen: &mut HashSet<PathKey>) -> bool {
    for child in node.children() {
        if is_function(&child) || is_class(&child) {
            continue;
        }
        if child.is("return_statement") {
            if is_element(child.children().into_iter().next(), importer, seen) {
                return true;
            }
            continue;
        }
        if any_return(child, importer, seen) {
            return true;
        }
    }
    false
}

/// Does the expression evaluate to an element? Every expression is examined
/// at most once; re-entering one means recursion without an independent
/// element-producing branch and counts as "no".
fn is_element<'a>(path: Option<NodePath<'a>>, importer: &'a dyn Importer, seen: &mut HashSet<PathKey>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let path = path.unwrap_parens();
    if !seen.insert(path.key()) {
        return false;
    }

    if is_jsx(&path) {
        return true;
    }

    match path.kind() {
        "call_expression" => {
            if is_react_create_element_call(path, importer)
                || is_react_clone_element_call(path, importer)
                || is_react_children_element_call(path, importer)
            {
                return true;
            }
            let Some(callee) = path.get("function") else {
                return false;
            };
            let target = resolve_to_value(callee, importer);
            is_function(&target) && returns_element(target, importer, seen)
        }
        "ternary_expression" => {
            let consequence = is_element(path.get("consequence"), importer, seen);
            consequence || is_element(path.get("alternative"), importer, seen)
        }
        "binary_expression" if is_logical(&path) => {
            let left = is_element(path.get("left"), importer, seen);
            left || is_element(path.get("right"), importer, seen)
        }
        _ => {
            let resolved = resolve_to_value(path, importer);
            resolved != path && is_element(Some(resolved), importer, seen)
        }
    }
}

fn is_logical(path: &NodePath) -> bool {
    path.get("operator")
        .is_some_and(|op| matches!(op.text(), "&&" | "||" | "??"))
}
