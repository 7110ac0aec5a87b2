//! Tests for member lookup on component definitions.

#[cfg(test)]
mod tests {
    use crate::error::DocgenError;
    use crate::importer::IgnoreImporter;
    use crate::members::get_member_value_path;
    use crate::tests::helpers::{declaration, declarator, find_first, parse};

    #[test]
    fn test_class_static_field() {
        let file = parse(
            "class Foo extends React.Component {\n  static propTypes = {a: 1};\n  render() { return null; }\n}",
        );
        let class = declaration(&file, "Foo");
        let value = get_member_value_path(class, "propTypes", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.text(), "{a: 1}");
    }

    #[test]
    fn test_class_static_getter() {
        let file = parse(
            "class Foo extends React.Component {\n  static get displayName() { return 'Bar'; }\n}",
        );
        let class = declaration(&file, "Foo");
        let value = get_member_value_path(class, "displayName", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.kind(), "method_definition");
    }

    #[test]
    fn test_class_setter_is_ignored() {
        let file = parse("class Foo {\n  static set propTypes(value) {}\n}");
        let class = declaration(&file, "Foo");
        let value = get_member_value_path(class, "propTypes", &IgnoreImporter).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_assignment_next_to_function() {
        let file = parse("function Foo() { return null; }\nFoo.propTypes = {b: 2};");
        let function = declaration(&file, "Foo");
        let value = get_member_value_path(function, "propTypes", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.text(), "{b: 2}");
    }

    #[test]
    fn test_string_subscript_assignment() {
        let file = parse("const Foo = () => null;\nFoo['defaultProps'] = {c: 3};");
        let arrow = declarator(&file, "Foo").get("value").unwrap();
        let value = get_member_value_path(arrow, "defaultProps", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.text(), "{c: 3}");
    }

    #[test]
    fn test_default_props_synonym() {
        let file = parse("var spec = {\n  getDefaultProps() { return {d: 4}; }\n};");
        let object = declarator(&file, "spec").get("value").unwrap();
        let value = get_member_value_path(object, "defaultProps", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.kind(), "method_definition");
    }

    #[test]
    fn test_prop_types_function_returns_object() {
        let file = parse("var spec = {\n  propTypes: function() { return {e: 5}; }\n};");
        let object = declarator(&file, "spec").get("value").unwrap();
        let value = get_member_value_path(object, "propTypes", &IgnoreImporter)
            .unwrap()
            .unwrap();
        assert_eq!(value.text(), "{e: 5}");
    }

    #[test]
    fn test_missing_member() {
        let file = parse("function Foo() { return null; }");
        let function = declaration(&file, "Foo");
        let value = get_member_value_path(function, "propTypes", &IgnoreImporter).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_unsupported_definition_kind() {
        let file = parse("'not a component';");
        let string = find_first(file.root(), "string");
        let error = get_member_value_path(string, "propTypes", &IgnoreImporter).unwrap_err();
        assert!(matches!(error, DocgenError::UnsupportedDefinition { ref kind } if kind == "string"));
    }
}
