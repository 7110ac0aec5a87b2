//! Decomposition of `a.b(1)[c](2)` style member/call chains.

use super::names::print_value;
use super::NodePath;
use crate::importer::Importer;
use crate::resolve::resolve_to_value;

/// One step in a member chain.
#[derive(Debug, Clone)]
pub struct MemberDescriptor<'a> {
    /// The property node (or the root, when requested).
    pub path: NodePath<'a>,
    /// Bracket access.
    pub computed: bool,
    /// Arguments if this member was immediately invoked.
    pub argument_paths: Option<Vec<NodePath<'a>>>,
}

/// Unroll nested calls and member accesses into a left-to-right list of
/// accessed members. `foo.bar(1)[baz](2)` yields `bar(1)`, `[baz](2)`; with
/// `include_root` the root `foo` comes first.
pub fn get_members<'a>(path: NodePath<'a>, include_root: bool) -> Vec<MemberDescriptor<'a>> {
    let mut result = Vec::new();
    let mut arguments: Option<Vec<NodePath<'a>>> = None;
    let mut current = path.unwrap_parens();

    loop {
        match current.kind() {
            "call_expression" => {
                arguments = Some(
                    current
                        .get("arguments")
                        .map(|args| args.children())
                        .unwrap_or_default(),
                );
                match current.get("function") {
                    Some(callee) => current = callee.unwrap_parens(),
                    None => break,
                }
            }
            "member_expression" | "subscript_expression" => {
                let computed = current.is("subscript_expression");
                let property = if computed {
                    current.get("index")
                } else {
                    current.get("property")
                };
                let Some(property) = property else { break };
                result.push(MemberDescriptor {
                    path: property,
                    computed,
                    argument_paths: arguments.take(),
                });
                match current.get("object") {
                    Some(object) => current = object.unwrap_parens(),
                    None => break,
                }
            }
            _ => break,
        }
    }

    if include_root && !result.is_empty() {
        result.push(MemberDescriptor {
            path: current,
            computed: false,
            argument_paths: arguments,
        });
    }
    result.reverse();
    result
}

/// The innermost object of a member expression chain (`a` in `a.b.c`).
pub fn get_member_expression_root<'a>(path: NodePath<'a>) -> NodePath<'a> {
    let mut current = path.unwrap_parens();
    while current.is("member_expression") || current.is("subscript_expression") {
        match current.get("object") {
            Some(object) => current = object.unwrap_parens(),
            None => break,
        }
    }
    current
}

/// Flatten a member/call chain into string tokens, e.g. `module.exports`
/// into `["module", "exports"]`. Computed keys are resolved when possible
/// and become `<computed>` otherwise.
pub fn expression_to_array<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Vec<String> {
    let mut parts = vec![path];
    let mut result: Vec<String> = Vec::new();

    while let Some(part) = parts.pop() {
        let part = part.unwrap_parens();
        match part.kind() {
            "call_expression" => parts.extend(part.get("function")),
            "member_expression" => {
                if let Some(object) = part.get("object") {
                    parts.push(object);
                }
                if let Some(property) = part.get("property") {
                    result.push(property.text().to_string());
                }
            }
            "subscript_expression" => {
                if let Some(object) = part.get("object") {
                    parts.push(object);
                }
                match part.get("index") {
                    Some(index) => {
                        let resolved = resolve_to_value(index, importer);
                        // a name that does not lead to a value
                        let opaque = resolved.is("identifier");
                        let mut tokens = if opaque { Vec::new() } else { expression_to_array(resolved, importer) };
                        if tokens.is_empty() {
                            result.push("<computed>".to_string());
                        } else {
                            // tokens are left-to-right; `result` is built right-to-left
                            tokens.reverse();
                            result.extend(tokens);
                        }
                    }
                    None => result.push("<computed>".to_string()),
                }
            }
            "identifier" | "property_identifier" | "shorthand_property_identifier" => {
                result.push(part.text().to_string())
            }
            "this" => result.push("this".to_string()),
            "super" => result.push("super".to_string()),
            "string" | "number" | "true" | "false" | "null" | "undefined" | "regex"
            | "template_string" => result.push(part.text().to_string()),
            "as_expression" | "satisfies_expression" | "non_null_expression" => {
                parts.extend(part.children().into_iter().next())
            }
            "object" => result.push(object_to_string(part, importer)),
            "array" => {
                let elements: Vec<String> = part
                    .children()
                    .into_iter()
                    .map(|element| expression_to_array(element, importer).join("."))
                    .collect();
                result.push(format!("[{}]", elements.join(", ")));
            }
            _ => result.push(print_value(&part)),
        }
    }

    result.reverse();
    result
}

/// `module.exports`, however its members are written.
pub fn is_module_exports<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    path.is_any(&["member_expression", "subscript_expression"])
        && expression_to_array(path, importer) == ["module", "exports"]
}

fn object_to_string<'a>(object: NodePath<'a>, importer: &'a dyn Importer) -> String {
    let entries: Vec<String> = object
        .children()
        .into_iter()
        .map(|property| match property.kind() {
            "pair" => {
                let key = property.get("key").map(|k| k.text().to_string()).unwrap_or_default();
                let value = property
                    .get("value")
                    .map(|v| expression_to_array(v, importer).join("."))
                    .unwrap_or_default();
                format!("{key}: {value}")
            }
            "spread_element" => {
                let inner = property
                    .children()
                    .into_iter()
                    .next()
                    .map(|v| expression_to_array(v, importer).join("."))
                    .unwrap_or_default();
                format!("...{inner}")
            }
            _ => print_value(&property),
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}
