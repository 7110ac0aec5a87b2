//! Tests for runtime prop validator descriptions.

#[cfg(test)]
mod tests {
    use crate::docs::{get_prop_type, is_required_prop_type};
    use crate::importer::IgnoreImporter;
    use crate::tests::helpers::{declarator, parse};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    /// Describe the initializer of `var x = ...` as JSON.
    fn describe(source: &str) -> Value {
        let file = parse(source);
        let value = declarator(&file, "x").get("value").unwrap();
        serde_json::to_value(get_prop_type(value, &IgnoreImporter)).unwrap()
    }

    fn required(source: &str) -> bool {
        let file = parse(source);
        is_required_prop_type(declarator(&file, "x").get("value").unwrap())
    }

    #[test]
    fn test_simple_validators() {
        for name in ["array", "bool", "func", "number", "object", "string", "any", "element", "node", "symbol", "elementType"] {
            assert_eq!(describe(&format!("var x = PropTypes.{name};")), json!({"name": name}));
        }
    }

    #[test]
    fn test_required_chain() {
        assert_eq!(describe("var x = PropTypes.string.isRequired;"), json!({"name": "string"}));
        assert!(required("var x = PropTypes.string.isRequired;"));
        assert!(!required("var x = PropTypes.string;"));
        assert!(required("var x = PropTypes.string['isRequired'];"));
    }

    #[test]
    fn test_destructured_validator() {
        assert_eq!(describe("var x = bool;"), json!({"name": "bool"}));
    }

    #[test]
    fn test_array_of() {
        assert_eq!(
            describe("var x = PropTypes.arrayOf(PropTypes.number);"),
            json!({"name": "arrayOf", "value": {"name": "number"}})
        );
    }

    #[test]
    fn test_instance_of() {
        assert_eq!(
            describe("var x = PropTypes.instanceOf(Date);"),
            json!({"name": "instanceOf", "value": "Date"})
        );
    }

    #[test]
    fn test_one_of_literals_and_computed() {
        assert_eq!(
            describe("var x = PropTypes.oneOf(['a', 1, SIZES.big]);"),
            json!({
                "name": "enum",
                "value": [
                    {"value": "'a'", "computed": false},
                    {"value": "1", "computed": false},
                    {"value": "SIZES.big", "computed": true}
                ]
            })
        );
    }

    #[test]
    fn test_one_of_resolves_variable() {
        let source = "var options = ['x', 'y'];\nvar x = PropTypes.oneOf(options);";
        assert_eq!(
            describe(source),
            json!({
                "name": "enum",
                "value": [
                    {"value": "'x'", "computed": false},
                    {"value": "'y'", "computed": false}
                ]
            })
        );
    }

    #[test]
    fn test_one_of_object_keys() {
        let source = "var sizes = {small: 1, large: 2};\nvar x = PropTypes.oneOf(Object.keys(sizes));";
        assert_eq!(
            describe(source),
            json!({
                "name": "enum",
                "value": [
                    {"value": "\"small\"", "computed": false},
                    {"value": "\"large\"", "computed": false}
                ]
            })
        );
    }

    #[test]
    fn test_one_of_unresolvable() {
        assert_eq!(
            describe("var x = PropTypes.oneOf(getOptions());"),
            json!({"name": "enum", "value": "getOptions()", "computed": true})
        );
    }

    #[test]
    fn test_one_of_type() {
        assert_eq!(
            describe("var x = PropTypes.oneOfType([PropTypes.string, PropTypes.number]);"),
            json!({"name": "union", "value": [{"name": "string"}, {"name": "number"}]})
        );
    }

    #[test]
    fn test_shape_fields() {
        let source = "var x = PropTypes.shape({\n  /** The id. */\n  id: PropTypes.number.isRequired,\n  label: PropTypes.string,\n});";
        assert_eq!(
            describe(source),
            json!({
                "name": "shape",
                "value": {
                    "id": {"name": "number", "required": true, "description": "The id."},
                    "label": {"name": "string", "required": false, "description": ""}
                }
            })
        );
    }

    #[test]
    fn test_shape_of_unresolvable_argument() {
        assert_eq!(
            describe("var x = PropTypes.exact(fields);"),
            json!({"name": "exact", "value": "fields"})
        );
    }

    #[test]
    fn test_custom_validator() {
        assert_eq!(
            describe("var x = function(props) { return null; };"),
            json!({"name": "custom", "raw": "function(props) { return null; }"})
        );
        assert_eq!(
            describe("var x = PropTypes.nonexistent;"),
            json!({"name": "custom", "raw": "PropTypes.nonexistent"})
        );
    }
}
