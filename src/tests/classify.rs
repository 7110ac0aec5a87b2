//! Tests for component and framework-call detection.

#[cfg(test)]
mod tests {
    use crate::classify::{
        is_react_component_class, is_react_create_class_call, is_react_forward_ref_call,
        is_react_memo_call, is_stateless_component,
    };
    use crate::importer::{IgnoreImporter, MapImporter};
    use crate::members::get_member_value_path;
    use crate::tests::helpers::{declaration, declarator, find_first, parse};

    fn stateless(source: &str, name: &str) -> bool {
        let file = parse(source);
        is_stateless_component(declaration(&file, name), &IgnoreImporter)
    }

    #[test]
    fn test_jsx_return() {
        assert!(stateless("function Foo() { return <div />; }", "Foo"));
    }

    #[test]
    fn test_plain_function_is_not_a_component() {
        assert!(!stateless("function add(a, b) { return a + b; }", "add"));
    }

    #[test]
    fn test_return_inside_if_statement() {
        let source = "function Foo(props) {\n  if (props.x) {\n    return <div />;\n  }\n  return null;\n}";
        assert!(stateless(source, "Foo"));
    }

    #[test]
    fn test_nested_function_returns_do_not_count() {
        let source = "function Foo() {\n  const render = () => <div />;\n  return null;\n}";
        assert!(!stateless(source, "Foo"));
    }

    #[test]
    fn test_self_recursion_is_not_an_element() {
        assert!(!stateless("function Foo() { return Foo(); }", "Foo"));
    }

    #[test]
    fn test_recursion_with_element_branch() {
        let source = "function Foo(n) { return n ? Foo(n - 1) : <span />; }";
        assert!(stateless(source, "Foo"));
    }

    #[test]
    fn test_helper_call_returning_element() {
        let source = "function helper() { return <b />; }\nfunction Foo() { return helper(); }";
        assert!(stateless(source, "Foo"));
    }

    #[test]
    fn test_concise_arrow_with_logical() {
        let file = parse("const Foo = (props) => props.show && <i />;");
        assert!(is_stateless_component(declarator(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_aliased_create_element() {
        let source = "import {createElement as h} from 'react';\nfunction Foo() { return h('div'); }";
        assert!(stateless(source, "Foo"));
    }

    #[test]
    fn test_create_element_through_namespace() {
        let source = "import React from 'react';\nfunction Foo() { return React.createElement('div'); }";
        assert!(stateless(source, "Foo"));
    }

    #[test]
    fn test_create_element_from_other_module() {
        let source = "import {createElement} from 'preact';\nfunction Foo() { return createElement('div'); }";
        assert!(!stateless(source, "Foo"));
    }

    #[test]
    fn test_imported_element() {
        let importer = MapImporter::new()
            .with_module("foo", "export default <div />;")
            .unwrap();
        let file = parse("import Bar from 'foo';\nfunction Foo() { return Bar; }");
        assert!(is_stateless_component(declaration(&file, "Foo"), &importer));
        assert!(!is_stateless_component(declaration(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_class_extending_component() {
        let file = parse(
            "import React from 'react';\nclass Foo extends React.Component {\n  render() { return null; }\n}",
        );
        let class = declaration(&file, "Foo");
        assert!(is_react_component_class(class, &IgnoreImporter));
        let prop_types = get_member_value_path(class, "propTypes", &IgnoreImporter).unwrap();
        assert!(prop_types.is_none());
    }

    #[test]
    fn test_class_with_imported_pure_component() {
        let file = parse("import {PureComponent} from 'react';\nclass Foo extends PureComponent {}");
        assert!(is_react_component_class(declaration(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_class_with_render_only() {
        let file = parse("class Foo {\n  render() { return null; }\n}");
        assert!(is_react_component_class(declaration(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_static_render_does_not_count() {
        let file = parse("class Foo {\n  static render() { return null; }\n}");
        assert!(!is_react_component_class(declaration(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_class_documented_as_component() {
        let file = parse("/**\n * @extends React.Component\n */\nclass Foo extends Base {}");
        assert!(is_react_component_class(declaration(&file, "Foo"), &IgnoreImporter));
    }

    #[test]
    fn test_create_class_calls() {
        let file = parse("import React from 'react';\nReact.createClass({});");
        let call = find_first(file.root(), "call_expression");
        assert!(is_react_create_class_call(call, &IgnoreImporter));

        let file = parse("var createReactClass = require('create-react-class');\ncreateReactClass({});");
        let call = crate::tests::helpers::last_expression(&file);
        assert!(is_react_create_class_call(call, &IgnoreImporter));
    }

    #[test]
    fn test_wrapper_calls() {
        let file = parse("import React, {forwardRef} from 'react';\nReact.memo(A);\nforwardRef(B);");
        let calls = crate::tests::helpers::find_all(file.root(), "call_expression");
        assert!(is_react_memo_call(calls[0], &IgnoreImporter));
        assert!(!is_react_forward_ref_call(calls[0], &IgnoreImporter));
        assert!(is_react_forward_ref_call(calls[1], &IgnoreImporter));
    }
}
