use crate::ast::kinds::{is_class, is_function, CONTROL_FLOW_KINDS};
use crate::ast::names::{get_name, string_value};
use crate::ast::scope::enclosing_scope;
use crate::ast::NodePath;
use crate::importer::Importer;

/// Right-hand side of the first `Name.member = value` (or
/// `Name['member'] = value`) assignment in the scope the definition lives in.
/// Nested functions, classes, conditionals and loops are not searched.
pub fn get_member_expression_value_path<'a>(
    definition: NodePath<'a>,
    member_name: &str,
    _importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let local_name = local_name(&definition)?;
    let scope = enclosing_scope(&definition);

    scope
        .children()
        .into_iter()
        .find_map(|child| find_assignment(child, &local_name, member_name))
}

/// The name the definition is reachable under, looking through wrapping
/// calls such as `const Foo = forwardRef((props, ref) => ...)`.
fn local_name(definition: &NodePath) -> Option<String> {
    if definition.is("variable_declarator") {
        return definition.get("name").map(|n| n.text().to_string());
    }
    if let Some(name) = get_name(definition) {
        return Some(name);
    }
    definition
        .ancestors()
        .take_while(|ancestor| ancestor.is_any(&["arguments", "call_expression", "parenthesized_expression"]))
        .filter(|ancestor| ancestor.is("call_expression"))
        .last()
        .and_then(|call| get_name(&call))
}

fn find_assignment<'a>(node: NodePath<'a>, local_name: &str, member_name: &str) -> Option<NodePath<'a>> {
    if is_function(&node) || is_class(&node) || node.is_any(CONTROL_FLOW_KINDS) {
        return None;
    }

    if node.is("assignment_expression") {
        let matches = node
            .get("left")
            .is_some_and(|left| is_static_member(&left, local_name, member_name));
        if matches {
            return node.get("right");
        }
    }

    node.children()
        .into_iter()
        .find_map(|child| find_assignment(child, local_name, member_name))
}

fn is_static_member(left: &NodePath, object_name: &str, member_name: &str) -> bool {
    let object_matches = left
        .get("object")
        .is_some_and(|object| object.is("identifier") && object.text() == object_name);
    if !object_matches {
        return false;
    }
    match left.kind() {
        "member_expression" => left.get("property").is_some_and(|p| p.text() == member_name),
        "subscript_expression" => left
            .get("index")
            .and_then(|index| string_value(&index))
            .is_some_and(|value| value == member_name),
        _ => false,
    }
}
