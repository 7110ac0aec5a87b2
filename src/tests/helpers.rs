//! Shared helpers for locating nodes in small test programs.

use crate::ast::NodePath;
use crate::parser::{SourceFile, Syntax};

pub fn parse(source: &str) -> SourceFile {
    SourceFile::parse("test.tsx", source, Syntax::Auto).expect("source should parse")
}

/// Expression of the last expression statement at program level.
pub fn last_expression(file: &SourceFile) -> NodePath<'_> {
    file.root()
        .children()
        .into_iter()
        .filter(|statement| statement.is("expression_statement"))
        .last()
        .and_then(|statement| statement.children().into_iter().next())
        .expect("program should end with an expression statement")
}

/// All nodes of `kind`, in document order.
pub fn find_all<'a>(root: NodePath<'a>, kind: &str) -> Vec<NodePath<'a>> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is(kind) {
            found.push(node);
        }
        let mut children = node.children();
        children.reverse();
        stack.extend(children);
    }
    found
}

pub fn find_first<'a>(root: NodePath<'a>, kind: &str) -> NodePath<'a> {
    find_all(root, kind)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no {kind} node in test source"))
}

/// The `variable_declarator` declaring `name`.
pub fn declarator<'a>(file: &'a SourceFile, name: &str) -> NodePath<'a> {
    find_all(file.root(), "variable_declarator")
        .into_iter()
        .find(|d| d.get("name").is_some_and(|n| n.text() == name))
        .unwrap_or_else(|| panic!("no declarator for {name}"))
}

/// The function or class declaration named `name`.
pub fn declaration<'a>(file: &'a SourceFile, name: &str) -> NodePath<'a> {
    let mut candidates = find_all(file.root(), "function_declaration");
    candidates.extend(find_all(file.root(), "class_declaration"));
    candidates
        .into_iter()
        .find(|d| d.get("name").is_some_and(|n| n.text() == name))
        .unwrap_or_else(|| panic!("no declaration named {name}"))
}
