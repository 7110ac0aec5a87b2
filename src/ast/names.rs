//! Name and value extraction from simple nodes.

use super::NodePath;
use crate::error::{DocgenError, Result};
use crate::importer::Importer;
use crate::resolve::resolve_to_value;

/// Prefix used for computed keys that resolve to an identifier rather than a
/// literal, so they never collide with a plain key of the same name.
pub const COMPUTED_PREFIX: &str = "@computed#";

/// Source text of a node, exactly as written.
pub fn print_value(path: &NodePath) -> String {
    path.text().trim().to_string()
}

/// Cooked value of a string literal (or a template without substitutions).
pub fn string_value(path: &NodePath) -> Option<String> {
    match path.kind() {
        "string" => {
            let mut value = String::new();
            for part in path.children() {
                match part.kind() {
                    "string_fragment" => value.push_str(part.text()),
                    "escape_sequence" => value.push_str(&unescape(part.text())),
                    _ => {}
                }
            }
            Some(value)
        }
        "template_string" => {
            if path.children().iter().any(|c| c.is("template_substitution")) {
                return None;
            }
            let text = path.text();
            Some(text[1..text.len().saturating_sub(1)].to_string())
        }
        _ => None,
    }
}

fn unescape(sequence: &str) -> String {
    match sequence {
        "\\n" => "\n".into(),
        "\\t" => "\t".into(),
        "\\r" => "\r".into(),
        "\\0" => "\0".into(),
        other => other.strip_prefix('\\').unwrap_or(other).to_string(),
    }
}

/// Identifier text, string value, or the printed source for anything else.
pub fn get_name_or_value(path: &NodePath) -> String {
    match path.kind() {
        "string" | "template_string" => string_value(path).unwrap_or_else(|| print_value(path)),
        _ => print_value(path),
    }
}

/// The key node of an object property, class member or type member.
pub fn property_key<'a>(property: &NodePath<'a>) -> Option<NodePath<'a>> {
    match property.kind() {
        "pair" | "pair_pattern" => property.get("key"),
        "shorthand_property_identifier" | "shorthand_property_identifier_pattern" => {
            Some(*property)
        }
        "object_assignment_pattern" => property.get("left"),
        "method_definition"
        | "public_field_definition"
        | "field_definition"
        | "property_signature"
        | "method_signature"
        | "abstract_method_signature" => property.get("name").or_else(|| property.get("property")),
        _ => None,
    }
}

/// Name of an object property or class member. Computed keys are resolved
/// statically; keys that resolve to neither a literal nor an identifier
/// yield `None`.
pub fn get_property_name<'a>(property: &NodePath<'a>, importer: &'a dyn Importer) -> Option<String> {
    let key = property_key(property)?;
    key_name(&key, importer)
}

/// Name of a key node as it appears in a property.
pub fn key_name<'a>(key: &NodePath<'a>, importer: &'a dyn Importer) -> Option<String> {
    match key.kind() {
        "property_identifier"
        | "identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern"
        | "private_property_identifier"
        | "number" => Some(key.text().to_string()),
        "string" => string_value(key),
        "computed_property_name" => {
            let expression = key.children().into_iter().next()?;
            let value = resolve_to_value(expression, importer);
            match value.kind() {
                "string" | "template_string" => string_value(&value),
                "number" => Some(value.text().to_string()),
                _ if expression.is("identifier") => {
                    Some(format!("{COMPUTED_PREFIX}{}", expression.text()))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Whether a key is written in brackets.
pub fn is_computed_key(property: &NodePath) -> bool {
    property_key(property).is_some_and(|key| key.is("computed_property_name"))
}

/// Printed name of a function parameter.
///
/// Fails for node kinds that cannot appear in a parameter list; that means the
/// tree and this crate disagree about the grammar.
pub fn get_parameter_name(parameter: &NodePath) -> Result<String> {
    match parameter.kind() {
        "identifier" | "this" => Ok(parameter.text().to_string()),
        "required_parameter" | "optional_parameter" => {
            let pattern = parameter
                .get("pattern")
                .ok_or_else(|| DocgenError::UnknownParameter {
                    kind: parameter.kind().to_string(),
                })?;
            get_parameter_name(&pattern)
        }
        "assignment_pattern" => match parameter.get("left") {
            Some(left) => get_parameter_name(&left),
            None => Err(DocgenError::UnknownParameter {
                kind: parameter.kind().to_string(),
            }),
        },
        "object_pattern" | "array_pattern" => Ok(print_value(parameter)),
        "rest_pattern" => {
            let inner = parameter
                .children()
                .into_iter()
                .next()
                .ok_or_else(|| DocgenError::UnknownParameter {
                    kind: parameter.kind().to_string(),
                })?;
            Ok(format!("...{}", get_parameter_name(&inner)?))
        }
        other => Err(DocgenError::UnknownParameter {
            kind: other.to_string(),
        }),
    }
}

/// `static` members of classes.
pub fn is_static(member: &NodePath) -> bool {
    member.has_token("static")
}

/// Name of a class, function, or the variable it is assigned to.
pub fn get_name<'a>(definition: &NodePath<'a>) -> Option<String> {
    if let Some(id) = definition.get("name") {
        if id.is("identifier") || id.is("type_identifier") {
            return Some(id.text().to_string());
        }
    }
    let parent = definition.parent()?;
    match parent.kind() {
        "variable_declarator" if definition.is_field_of_parent("value") => parent
            .get("name")
            .filter(|n| n.is("identifier"))
            .map(|n| n.text().to_string()),
        "assignment_expression" if definition.is_field_of_parent("right") => {
            let left = parent.get("left")?;
            match left.kind() {
                "identifier" => Some(left.text().to_string()),
                "member_expression" => left.get("property").map(|p| p.text().to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}
