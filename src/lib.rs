//! Compdoc - static documentation of UI components.
//!
//! Parses a JavaScript/TypeScript/Flow module with tree-sitter, finds the
//! component definitions in it, and extracts their props (runtime validators
//! and static type annotations), defaults, methods and descriptions without
//! executing anything. Values are followed across bindings, destructuring,
//! member accesses and (through an [`Importer`]) other modules.

pub mod ast;
pub mod classify;
pub mod config;
pub mod docs;
pub mod error;
pub mod finder;
pub mod handlers;
pub mod importer;
pub mod logging;
pub mod members;
pub mod parser;
pub mod resolve;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use ast::NodePath;
pub use config::DocgenConfig;
pub use docs::{Documentation, PropDescriptor, PropTypeDescriptor};
pub use error::{DocgenError, Result};
pub use finder::{find_all_definitions, find_exported_definitions, Resolver};
pub use importer::{IgnoreImporter, Importer, MapImporter};
pub use parser::{SourceFile, Syntax};
pub use resolve::{resolve_to_value, with_max_depth};
pub use types::{get_type, TypeDescriptor};

use tracing::{debug, warn};

/// Document every component definition `config.resolver` selects in
/// `source`.
///
/// A definition that fails with a structural error is skipped (and logged);
/// finding no definitions at all is an error.
pub fn parse(source: &str, config: &DocgenConfig, importer: &dyn Importer) -> Result<Vec<Documentation>> {
    let file = SourceFile::parse("<input>", source, config.syntax)?;
    document_file(&file, config, importer)
}

/// Like [`parse`], for an already parsed file.
pub fn document_file(file: &SourceFile, config: &DocgenConfig, importer: &dyn Importer) -> Result<Vec<Documentation>> {
    with_max_depth(config.max_resolution_depth, || {
        let definitions = config.resolver.find(file.root(), importer);
        debug!(file = %file.name, count = definitions.len(), "component definitions");
        if definitions.is_empty() {
            return Err(DocgenError::NoComponentDefinitions);
        }

        let documentation = definitions
            .into_iter()
            .filter_map(|definition| match handlers::document(definition, &config.handlers, importer) {
                Ok(doc) => Some(doc),
                Err(error) => {
                    warn!(file = %file.name, ?definition, %error, "skipping component definition");
                    None
                }
            })
            .collect();
        Ok(documentation)
    })
}

/// [`parse`] for a named file, with the file name attached to any error.
pub fn parse_with_context(
    name: &str,
    source: &str,
    config: &DocgenConfig,
    importer: &dyn Importer,
) -> anyhow::Result<Vec<Documentation>> {
    use anyhow::Context;

    let file = SourceFile::parse(name, source, config.syntax).with_context(|| format!("parsing {name}"))?;
    document_file(&file, config, importer).with_context(|| format!("documenting components in {name}"))
}
