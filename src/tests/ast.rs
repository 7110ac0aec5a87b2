//! Tests for the tree utilities: syntax detection, scopes, docblocks, names.

#[cfg(test)]
mod tests {
    use crate::ast::docblock::{get_docblock, get_doclets, parse_docblock};
    use crate::ast::members::{expression_to_array, get_members, is_module_exports};
    use crate::ast::names::{get_name, get_parameter_name};
    use crate::ast::scope::{binding_of, BindingKind};
    use crate::error::DocgenError;
    use crate::importer::IgnoreImporter;
    use crate::parser::{SourceFile, Syntax};
    use crate::tests::helpers::{declaration, declarator, find_all, find_first, last_expression, parse};

    #[test]
    fn test_flow_pragma_selects_flow_syntax() {
        let flow = parse("// @flow\ntype A = string;");
        let plain = parse("type A = string;");
        let noflow = parse("// @noflow\ntype A = string;");

        assert!(flow.is_flow());
        assert!(!plain.is_flow());
        assert!(!noflow.is_flow());
    }

    #[test]
    fn test_explicit_syntax_overrides_pragma() {
        let file = SourceFile::parse("a.js", "// @flow\nconst a = 1;", Syntax::Typescript).unwrap();
        assert!(!file.is_flow());

        let file = SourceFile::parse("b.js", "const b = 1;", Syntax::Flow).unwrap();
        assert!(file.is_flow());
    }

    #[test]
    fn test_var_is_hoisted_to_function_scope() {
        let file = parse("function f() { if (x) { var a = 1; } a; }");
        let usage = find_all(file.root(), "identifier")
            .into_iter()
            .filter(|i| i.text() == "a")
            .last()
            .unwrap();

        let binding = binding_of(&usage).expect("a should be bound");
        assert_eq!(binding.kind, BindingKind::Var);
        assert_eq!(binding.declaration.kind(), "variable_declarator");
    }

    #[test]
    fn test_block_scoped_let_is_not_visible_outside() {
        let file = parse("{ let a = 1; }\na;");
        let usage = last_expression(&file);
        assert!(binding_of(&usage).is_none());
    }

    #[test]
    fn test_import_bindings() {
        let file = parse("import React, {Component as C} from 'react';\nC;");
        let usage = last_expression(&file);
        let binding = binding_of(&usage).unwrap();
        assert_eq!(binding.kind, BindingKind::Import);
        assert_eq!(binding.declaration.kind(), "import_statement");
    }

    #[test]
    fn test_type_alias_binding() {
        let file = parse("type Props = {a: string};\nlet p: Props;");
        let reference = find_all(file.root(), "type_identifier")
            .into_iter()
            .filter(|t| t.text() == "Props")
            .last()
            .unwrap();
        let binding = binding_of(&reference).unwrap();
        assert_eq!(binding.kind, BindingKind::Type);
        assert_eq!(binding.declaration.kind(), "type_alias_declaration");
    }

    #[test]
    fn test_parse_docblock_strips_gutter() {
        let parsed = parse_docblock("/**\n * First line.\n *\n * Second line.\n */");
        assert_eq!(parsed, "First line.\n\nSecond line.");
    }

    #[test]
    fn test_docblock_through_export_wrapper() {
        let file = parse("/**\n * Documented.\n */\nexport const Foo = () => null;");
        let arrow = find_first(file.root(), "arrow_function");
        assert_eq!(get_docblock(&arrow, false).as_deref(), Some("Documented."));
    }

    #[test]
    fn test_plain_comment_is_not_a_docblock() {
        let file = parse("/* not docs */\nfunction Foo() {}");
        let function = declaration(&file, "Foo");
        assert_eq!(get_docblock(&function, false), None);
    }

    #[test]
    fn test_doclets() {
        let doclets = get_doclets("Some text\n@extends React.Component\n@param a first");
        assert_eq!(doclets.get("extends").map(String::as_str), Some("React.Component"));
        assert_eq!(doclets.get("param").map(String::as_str), Some("a first"));
    }

    #[test]
    fn test_get_parameter_name() {
        let file = parse("function f(a, {b}, c = 1, ...rest) {}");
        let names: Vec<String> = find_first(file.root(), "formal_parameters")
            .children()
            .iter()
            .map(|p| get_parameter_name(p).unwrap())
            .collect();
        assert_eq!(names, vec!["a", "{b}", "c", "...rest"]);
    }

    #[test]
    fn test_get_parameter_name_rejects_non_parameters() {
        let file = parse("f(42);");
        let number = find_first(file.root(), "number");
        let error = get_parameter_name(&number).unwrap_err();
        assert!(matches!(error, DocgenError::UnknownParameter { ref kind } if kind == "number"));
    }

    #[test]
    fn test_get_name_from_declarator() {
        let file = parse("const Foo = function () {};");
        let function = declarator(&file, "Foo").get("value").unwrap();
        assert_eq!(get_name(&function).as_deref(), Some("Foo"));
    }

    #[test]
    fn test_get_members_of_call_chain() {
        let file = parse("foo.bar(1)[baz](2);");
        let chain = last_expression(&file);

        let members = get_members(chain, false);
        let summary: Vec<(&str, bool, Option<Vec<&str>>)> = members
            .iter()
            .map(|m| {
                let arguments: Option<Vec<&str>> = m.argument_paths.as_ref().map(|args| args.iter().map(|a| a.text()).collect());
                (m.path.text(), m.computed, arguments)
            })
            .collect();
        assert_eq!(
            summary,
            vec![("bar", false, Some(vec!["1"])), ("baz", true, Some(vec!["2"]))]
        );

        let with_root = get_members(chain, true);
        assert_eq!(with_root.len(), 3);
        assert_eq!(with_root[0].path.text(), "foo");
        assert!(with_root[0].argument_paths.is_none());
    }

    #[test]
    fn test_get_members_of_plain_identifier_is_empty() {
        let file = parse("foo;");
        assert!(get_members(last_expression(&file), true).is_empty());
    }

    #[test]
    fn test_expression_to_array() {
        let tokens = |source: &str| {
            let file = parse(source);
            expression_to_array(last_expression(&file), &IgnoreImporter)
        };

        assert_eq!(tokens("module.exports;"), vec!["module", "exports"]);
        assert_eq!(tokens("this.props.onClick();"), vec!["this", "props", "onClick"]);
        assert_eq!(tokens("const key = 'bar';\nfoo[key];"), vec!["foo", "'bar'"]);
        assert_eq!(tokens("foo[missing].bar;"), vec!["foo", "<computed>", "bar"]);
        assert_eq!(tokens("foo[{a: 1}];"), vec!["foo", "{a: 1}"]);
        assert_eq!(tokens("foo[[1, x]];"), vec!["foo", "[1, x]"]);
    }

    #[test]
    fn test_is_module_exports() {
        let file = parse("module.exports = Foo;\nexports.Foo = Foo;\nmodule.exports.Foo = Foo;");
        let targets: Vec<bool> = find_all(file.root(), "assignment_expression")
            .into_iter()
            .map(|a| is_module_exports(a.get("left").unwrap(), &IgnoreImporter))
            .collect();
        assert_eq!(targets, vec![true, false, false]);
    }
}
