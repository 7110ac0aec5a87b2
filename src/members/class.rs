use crate::ast::names::get_property_name;
use crate::ast::NodePath;
use crate::importer::Importer;

/// A method, getter or field named `member_name` in a class body. Setters
/// and `#private` members never match; computed keys match only when they
/// resolve to the literal name. Methods are returned as the method node,
/// fields as their initializer.
pub fn get_class_member_value_path<'a>(
    class: NodePath<'a>,
    member_name: &str,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let body = class.get("body")?;
    body.children().into_iter().find_map(|member| {
        let is_candidate = match member.kind() {
            "method_definition" => !member.has_token("set"),
            "public_field_definition" | "field_definition" => true,
            _ => false,
        };
        if !is_candidate {
            return None;
        }
        let key = member.get("name").or_else(|| member.get("property"))?;
        if key.is("private_property_identifier") {
            return None;
        }
        if get_property_name(&member, importer).as_deref() != Some(member_name) {
            return None;
        }
        if member.is("method_definition") {
            Some(member)
        } else {
            member.get("value")
        }
    })
}
