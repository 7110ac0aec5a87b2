//! Cross-module resolution capability.
//!
//! The resolvers never load files themselves. Whenever a value comes from an
//! `import`, they hand the import statement and the exported name to an
//! [`Importer`] and continue with whatever declaration it returns.

use crate::ast::members::is_module_exports;
use crate::ast::names::string_value;
use crate::ast::NodePath;
use crate::error::Result;
use crate::parser::{SourceFile, Syntax};
use crate::resolve::resolve_to_value;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Exported name used for `export default` / `import x from`.
pub const DEFAULT_EXPORT: &str = "default";

pub trait Importer {
    /// Resolve `name` as exported by the module `path` imports from.
    ///
    /// `path` is an `import_statement` (or an `export_statement` with a
    /// `from` clause). Returns `None` when the module is unknown or does not
    /// export `name`.
    fn import<'a>(&'a self, path: NodePath<'a>, name: &str) -> Option<NodePath<'a>>;
}

/// Never resolves anything; every import stays an import.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreImporter;

impl Importer for IgnoreImporter {
    fn import<'a>(&'a self, _path: NodePath<'a>, _name: &str) -> Option<NodePath<'a>> {
        None
    }
}

/// Module specifier of an import/export-from statement.
pub fn module_source(statement: &NodePath) -> Option<String> {
    statement.get("source").and_then(|s| string_value(&s))
}

/// Resolves imports against a fixed set of in-memory modules, keyed by the
/// specifier exactly as written in the import (`"./Button"`, `"shared"`).
#[derive(Debug, Default)]
pub struct MapImporter {
    modules: HashMap<String, SourceFile>,
    in_progress: RefCell<HashSet<(String, String)>>,
}

impl MapImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register `source` under `specifier`.
    pub fn add_module(&mut self, specifier: impl Into<String>, source: impl Into<String>) -> Result<()> {
        let specifier = specifier.into();
        let file = SourceFile::parse(specifier.clone(), source, Syntax::Auto)?;
        self.modules.insert(specifier, file);
        Ok(())
    }

    pub fn with_module(mut self, specifier: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        self.add_module(specifier, source)?;
        Ok(self)
    }

    pub fn module(&self, specifier: &str) -> Option<&SourceFile> {
        self.modules.get(specifier)
    }

    fn find_export<'a>(&'a self, root: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
        for statement in root.children() {
            match statement.kind() {
                "export_statement" => {
                    if let Some(found) = self.export_from_statement(statement, name) {
                        return Some(found);
                    }
                }
                "expression_statement" if name == DEFAULT_EXPORT => {
                    // CommonJS: module.exports = ...
                    let Some(assignment) = statement.child_of_kind("assignment_expression") else {
                        continue;
                    };
                    let assigns_exports = assignment
                        .get("left")
                        .is_some_and(|left| is_module_exports(left, self));
                    if assigns_exports {
                        return assignment.get("right");
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn export_from_statement<'a>(&'a self, statement: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
        if statement.has_token("default") {
            if name != DEFAULT_EXPORT {
                return None;
            }
            return statement.get("declaration").or_else(|| statement.get("value"));
        }

        if let Some(declaration) = statement.get("declaration") {
            return declaration_named(declaration, name);
        }

        let reexport = statement.get("source").is_some();
        if let Some(clause) = statement.child_of_kind("export_clause") {
            for specifier in clause.children() {
                let Some(local) = specifier.get("name") else { continue };
                let exported = specifier.get("alias").unwrap_or(local);
                if get_export_name(&exported) != name {
                    continue;
                }
                if reexport {
                    return self.import(statement, &get_export_name(&local));
                }
                return Some(local);
            }
            return None;
        }

        // export * from '...'
        if reexport && name != DEFAULT_EXPORT {
            return self.import(statement, name);
        }
        None
    }
}

fn get_export_name(node: &NodePath) -> String {
    string_value(node).unwrap_or_else(|| node.text().to_string())
}

fn declaration_named<'a>(declaration: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
    match declaration.kind() {
        "lexical_declaration" | "variable_declaration" => declaration
            .children()
            .into_iter()
            .filter(|d| d.is("variable_declarator"))
            .find(|d| d.get("name").is_some_and(|n| n.text() == name)),
        _ => declaration
            .get("name")
            .is_some_and(|n| n.text() == name)
            .then_some(declaration),
    }
}

impl Importer for MapImporter {
    fn import<'a>(&'a self, path: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
        let specifier = module_source(&path)?;
        let Some(file) = self.modules.get(&specifier) else {
            debug!(module = %specifier, "importer has no module registered");
            return None;
        };

        let key = (specifier.clone(), name.to_string());
        if !self.in_progress.borrow_mut().insert(key.clone()) {
            debug!(module = %specifier, name, "circular re-export");
            return None;
        }
        let resolved = self
            .find_export(file.root(), name)
            .map(|export| resolve_to_value(export, self));
        self.in_progress.borrow_mut().remove(&key);
        resolved
    }
}
