//! Parsing source text into owned syntax trees.
//!
//! Every file is parsed with the TSX grammar, which covers plain JavaScript,
//! JSX, TypeScript annotations and the Flow constructs the grammar shares with
//! TypeScript. The type resolver used for a file is chosen from its pragma.

use crate::ast::NodePath;
use crate::error::{DocgenError, Result};
use serde::Deserialize;
use tree_sitter::{Parser, Tree};

/// Which type-annotation flavour a file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// Detect from an `@flow` pragma in the leading comments.
    #[default]
    Auto,
    Flow,
    Typescript,
}

/// A parsed source file. Owns both the text and the tree so that
/// [`NodePath`] views can borrow from it for as long as it lives.
pub struct SourceFile {
    pub name: String,
    pub source: String,
    pub tree: Tree,
    pub syntax: Syntax,
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("syntax", &self.syntax)
            .finish()
    }
}

impl SourceFile {
    /// Parse `source`, resolving [`Syntax::Auto`] from the file's pragma.
    pub fn parse(name: impl Into<String>, source: impl Into<String>, syntax: Syntax) -> Result<Self> {
        let name = name.into();
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|_| DocgenError::Parse { file: name.clone() })?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| DocgenError::Parse { file: name.clone() })?;

        let syntax = match syntax {
            Syntax::Auto if has_flow_pragma(&tree, &source) => Syntax::Flow,
            Syntax::Auto => Syntax::Typescript,
            explicit => explicit,
        };

        Ok(Self {
            name,
            source,
            tree,
            syntax,
        })
    }

    /// The `program` node of this file.
    pub fn root(&self) -> NodePath<'_> {
        NodePath::new(self.tree.root_node(), self)
    }

    pub fn is_flow(&self) -> bool {
        self.syntax == Syntax::Flow
    }
}

/// `@flow` in any comment preceding the first statement.
fn has_flow_pragma(tree: &Tree, source: &str) -> bool {
    let root = tree.root_node();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() != "comment" {
            break;
        }
        let text = &source[child.byte_range()];
        if text.contains("@flow") {
            return true;
        }
    }
    false
}
