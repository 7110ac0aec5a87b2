//! Tests for Flow type descriptions.

#[cfg(test)]
mod tests {
    use crate::importer::IgnoreImporter;
    use crate::tests::helpers::{declarator, parse};
    use crate::types::{get_flow_type, get_type};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn type_of(body: &str, name: &str) -> Value {
        let file = parse(&format!("// @flow\n{body}"));
        assert!(file.is_flow());
        let annotation = declarator(&file, name).get("type").unwrap();
        serde_json::to_value(get_flow_type(annotation, &IgnoreImporter)).unwrap()
    }

    #[test]
    fn test_maybe_type_is_nullable() {
        assert_eq!(type_of("let x: ?string;", "x"), json!({"name": "string", "nullable": true}));
    }

    #[test]
    fn test_bool_keyword() {
        assert_eq!(type_of("let x: bool;", "x"), json!({"name": "boolean"}));
    }

    #[test]
    fn test_keys_utility() {
        let body = "type Props = {a: string, 'b': number};\nlet k: $Keys<Props>;";
        assert_eq!(
            type_of(body, "k"),
            json!({
                "name": "union",
                "elements": [
                    {"name": "literal", "value": "'a'"},
                    {"name": "literal", "value": "'b'"}
                ],
                "raw": "$Keys<Props>"
            })
        );
    }

    #[test]
    fn test_keys_of_unknown_type_keeps_generic() {
        assert_eq!(
            type_of("let k: $Keys<Missing>;", "k"),
            json!({"name": "$Keys", "elements": [{"name": "Missing"}], "raw": "$Keys<Missing>"})
        );
    }

    #[test]
    fn test_exact_is_transparent() {
        let body = "type Props = {a: string};\nlet p: $Exact<Props>;";
        let value = type_of(body, "p");
        assert_eq!(value["name"], json!("signature"));
        assert_eq!(value["raw"], json!("{a: string}"));
    }

    #[test]
    fn test_class_generic() {
        let body = "class Foo {}\nlet c: Class<Foo>;";
        assert_eq!(
            type_of(body, "c"),
            json!({"name": "Class", "elements": [{"name": "Foo"}], "raw": "Class<Foo>"})
        );
    }

    #[test]
    fn test_read_only_array() {
        assert_eq!(
            type_of("let a: $ReadOnlyArray<string>;", "a"),
            json!({"name": "Array", "elements": [{"name": "string"}], "raw": "$ReadOnlyArray<string>"})
        );
    }

    #[test]
    fn test_framework_type_uses_flow_names() {
        assert_eq!(
            type_of("let n: React.Node;", "n"),
            json!({"name": "ReactNode", "raw": "React.Node"})
        );
        // TypeScript-only member names are not on the Flow list.
        assert_eq!(
            type_of("let n: React.ReactNode;", "n"),
            json!({"name": "ReactReactNode", "raw": "React.ReactNode"})
        );
    }

    #[test]
    fn test_dispatch_by_file_syntax() {
        let flow = parse("// @flow\nlet x: ?number;");
        let annotation = declarator(&flow, "x").get("type").unwrap();
        assert_eq!(get_type(annotation, &IgnoreImporter).nullable, Some(true));

        let ts = parse("let x: bool;");
        let annotation = declarator(&ts, "x").get("type").unwrap();
        assert_eq!(get_type(annotation, &IgnoreImporter).name, "bool");
    }

    #[test]
    fn test_object_spread_merges_properties() {
        let body = "type Base = {a: string};\ntype Props = {...Base, b: number};\nlet p: Props;";
        assert_eq!(
            type_of(body, "p")["signature"]["properties"],
            json!([
                {"key": "a", "value": {"name": "string", "required": true}},
                {"key": "b", "value": {"name": "number", "required": true}}
            ])
        );
    }

    #[test]
    fn test_later_property_overrides_spread() {
        let body = "type Base = {a: string, c: string};\ntype Props = {...Base, a: number};\nlet p: Props;";
        let properties = type_of(body, "p")["signature"]["properties"].clone();
        assert_eq!(
            properties,
            json!([
                {"key": "a", "value": {"name": "number", "required": true}},
                {"key": "c", "value": {"name": "string", "required": true}}
            ])
        );
    }

    #[test]
    fn test_unnamed_function_parameters() {
        assert_eq!(
            type_of("let f: (string, bool) => void;", "f"),
            json!({
                "name": "signature",
                "type": "function",
                "signature": {
                    "arguments": [
                        {"name": "", "type": {"name": "string"}},
                        {"name": "", "type": {"name": "boolean"}}
                    ],
                    "return": {"name": "void"}
                },
                "raw": "(string, bool) => void"
            })
        );
    }

    #[test]
    fn test_named_function_parameters() {
        let value = type_of("let f: (value: string) => void;", "f");
        assert_eq!(
            value["signature"]["arguments"],
            json!([{"name": "value", "type": {"name": "string"}}])
        );
    }
}
