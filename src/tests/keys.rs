//! Tests for static key and value enumeration.

#[cfg(test)]
mod tests {
    use crate::importer::IgnoreImporter;
    use crate::resolve::{resolve_object_to_name_array, resolve_object_values_to_array};
    use crate::tests::helpers::{declarator, parse};

    fn keys(source: &str, raw: bool) -> Option<Vec<String>> {
        let file = parse(source);
        let object = declarator(&file, "obj").get("value").unwrap();
        resolve_object_to_name_array(object, &IgnoreImporter, raw)
    }

    fn values(source: &str) -> Option<Vec<String>> {
        let file = parse(source);
        let object = declarator(&file, "obj").get("value").unwrap();
        resolve_object_values_to_array(object, &IgnoreImporter)
    }

    #[test]
    fn test_keys_in_source_order() {
        let names = keys("var obj = {boo: 1, foo: 2, get bar() {}};", false).unwrap();
        assert_eq!(names, vec!["boo", "foo", "bar"]);
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let names = keys("var obj = {a: 1, b: 2, a: 3};", false).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_spread_keys_are_inlined() {
        let source = "var base = {x: 1, y: 2};\nvar obj = {...base, z: 3, x: 4};";
        assert_eq!(keys(source, false).unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_resolved_computed_key() {
        let source = "var k = 'dynamic';\nvar obj = {[k]: 1, 'quoted': 2, 3: 3};";
        assert_eq!(keys(source, false).unwrap(), vec!["dynamic", "quoted", "3"]);
    }

    #[test]
    fn test_raw_keys_are_literal_type_text() {
        let source = "var obj = {plain: 1, \"double\": 2};";
        assert_eq!(keys(source, true).unwrap(), vec!["'plain'", "\"double\""]);
    }

    #[test]
    fn test_unknown_computed_key_fails() {
        assert_eq!(keys("var obj = {[unknown()]: 1, a: 2};", false), None);
    }

    #[test]
    fn test_opaque_spread_fails() {
        assert_eq!(keys("var obj = {...props, a: 1};", false), None);
    }

    #[test]
    fn test_values_with_undefined_as_null() {
        let source = "var obj = {a: 'x', b: 2, c: undefined, d: null};";
        assert_eq!(values(source).unwrap(), vec!["'x'", "2", "null", "null"]);
    }

    #[test]
    fn test_values_follow_references() {
        let source = "var two = 2;\nvar obj = {one: 1, two};";
        assert_eq!(values(source).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_duplicate_value_overwrites_in_place() {
        let source = "var obj = {a: 1, b: 2, a: 3};";
        assert_eq!(values(source).unwrap(), vec!["3", "2"]);
    }

    #[test]
    fn test_non_literal_value_fails() {
        assert_eq!(values("var obj = {a: () => 1};"), None);
    }
}
