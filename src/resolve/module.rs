//! Which module a value originates from.

use super::{resolve_destructured, resolve_to_value};
use crate::ast::members::get_member_expression_root;
use crate::ast::names::string_value;
use crate::ast::NodePath;
use crate::importer::Importer;

const REACT_MODULES: &[&str] = &[
    "react",
    "react/addons",
    "react-native",
    "proptypes",
    "prop-types",
];

pub fn is_react_module_name(name: &str) -> bool {
    REACT_MODULES.iter().any(|m| m.eq_ignore_ascii_case(name))
}

/// Module specifier `path` was loaded from, via `import ... from 'x'` or
/// `require('x')`, looking through member accesses and aliases.
pub fn resolve_to_module<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Option<String> {
    let path = path.unwrap_parens();
    match path.kind() {
        "variable_declarator" => path
            .get("value")
            .and_then(|value| resolve_to_module(value, importer)),
        "call_expression" => {
            let callee = path.get("function")?;
            if callee.is("identifier") && callee.text() == "require" {
                let argument = path.get("arguments")?.children().into_iter().next()?;
                return string_value(&argument);
            }
            resolve_to_module(callee, importer)
        }
        "identifier" | "jsx_identifier" => {
            let value = resolve_to_value(path, importer);
            if value != path {
                return resolve_to_module(value, importer);
            }
            // `const {Component} = require('react')`
            let (root, _) = resolve_destructured(path, importer)?;
            resolve_to_module(root, importer)
        }
        "member_expression" | "subscript_expression" => {
            resolve_to_module(get_member_expression_root(path), importer)
        }
        "import_statement" => path.get("source").and_then(|source| string_value(&source)),
        "string" => string_value(&path),
        _ => None,
    }
}

/// Whether `path` resolves to the framework's module object (`React`).
pub fn is_react_module<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    resolve_to_module(path, importer).is_some_and(|name| is_react_module_name(&name))
}
