//! Tree utilities: node views, scopes, docblocks, member chains and
//! name extraction over tree-sitter trees.

pub mod docblock;
pub mod kinds;
pub mod members;
pub mod names;
mod path;
pub mod scope;

pub use path::{Ancestors, NodePath, PathKey};
