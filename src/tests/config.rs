//! Tests for run configuration.

#[cfg(test)]
mod tests {
    use crate::config::DocgenConfig;
    use crate::error::DocgenError;
    use crate::finder::Resolver;
    use crate::handlers::HandlerKind;
    use crate::parser::Syntax;
    use crate::resolve::DEFAULT_MAX_DEPTH;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DocgenConfig::default();
        assert_eq!(config.resolver, Resolver::Exported);
        assert_eq!(config.handlers, HandlerKind::ALL.to_vec());
        assert_eq!(config.max_resolution_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.syntax, Syntax::Auto);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DocgenConfig::from_toml("").unwrap(), DocgenConfig::default());
    }

    #[test]
    fn test_from_toml() {
        let config = DocgenConfig::from_toml(
            r#"
resolver = "all"
handlers = ["prop_types", "code_type_props", "display_name"]
max_resolution_depth = 64
syntax = "flow"
"#,
        )
        .unwrap();
        assert_eq!(config.resolver, Resolver::All);
        assert_eq!(
            config.handlers,
            vec![HandlerKind::PropTypes, HandlerKind::CodeTypeProps, HandlerKind::DisplayName]
        );
        assert_eq!(config.max_resolution_depth, 64);
        assert_eq!(config.syntax, Syntax::Flow);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let error = DocgenConfig::from_toml("resolvers = \"all\"").unwrap_err();
        assert!(matches!(error, DocgenError::Config(_)));
    }

    #[test]
    fn test_unknown_handler_is_rejected() {
        assert!(DocgenConfig::from_toml("handlers = [\"magic\"]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "resolver = \"all\"").unwrap();
        let config = DocgenConfig::load(file.path()).unwrap();
        assert_eq!(config.resolver, Resolver::All);
        assert_eq!(config.handlers, HandlerKind::ALL.to_vec());
    }

    #[test]
    fn test_load_missing_file() {
        let error = DocgenConfig::load("/nonexistent/compdoc.toml").unwrap_err();
        assert!(matches!(error, DocgenError::Io(_)));
    }

    #[test]
    fn test_logging_installs_once() {
        crate::logging::init();
        assert!(!crate::logging::init());
    }
}
