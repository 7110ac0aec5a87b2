use thiserror::Error;

/// Failures that abort documentation of a single component definition.
///
/// Anything that merely cannot be resolved statically is not an error: it
/// comes back as the unresolved path or an `unknown` descriptor instead.
#[derive(Debug, Error)]
pub enum DocgenError {
    #[error("unsupported component definition kind: {kind}")]
    UnsupportedDefinition { kind: String },

    #[error("unrecognized parameter node kind: {kind}")]
    UnknownParameter { kind: String },

    #[error("failed to parse {file}")]
    Parse { file: String },

    #[error("no suitable component definition found")]
    NoComponentDefinitions,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocgenError>;
