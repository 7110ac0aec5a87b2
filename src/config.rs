//! Run configuration, loadable from TOML.
//!
//! ```toml
//! resolver = "all"
//! handlers = ["prop_types", "code_type_props", "display_name"]
//! max_resolution_depth = 256
//! syntax = "auto"
//! ```

use crate::error::Result;
use crate::finder::Resolver;
use crate::handlers::HandlerKind;
use crate::parser::Syntax;
use crate::resolve::DEFAULT_MAX_DEPTH;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocgenConfig {
    pub resolver: Resolver,
    pub handlers: Vec<HandlerKind>,
    pub max_resolution_depth: usize,
    pub syntax: Syntax,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self {
            resolver: Resolver::default(),
            handlers: HandlerKind::ALL.to_vec(),
            max_resolution_depth: DEFAULT_MAX_DEPTH,
            syntax: Syntax::default(),
        }
    }
}

impl DocgenConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
