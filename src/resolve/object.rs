//! Static enumeration of object keys and values.
//!
//! Both helpers succeed only when every property is statically known: plain
//! or literal keys, and spreads of objects that are themselves fully known.
//! Any computed non-literal key or opaque spread makes the whole result
//! `None`.

use super::resolve_to_value;
use crate::ast::names::{print_value, string_value};
use crate::ast::NodePath;
use crate::importer::Importer;

/// Object-like nodes whose members can be enumerated.
pub fn is_object_like(path: &NodePath) -> bool {
    path.is_any(&["object", "object_type", "interface_body"])
}

/// Names of every property of `object`, in first-occurrence order. With
/// `raw` set, names are rendered as they would be written as literal types:
/// identifiers quoted, string keys as their exact source text.
pub fn resolve_object_to_name_array<'a>(
    object: NodePath<'a>,
    importer: &'a dyn Importer,
    raw: bool,
) -> Option<Vec<String>> {
    let names = collect_keys(object, importer, raw, Vec::new())?;
    Some(names)
}

fn push_unique(mut names: Vec<String>, name: String) -> Vec<String> {
    if !names.contains(&name) {
        names.push(name);
    }
    names
}

fn collect_keys<'a>(
    object: NodePath<'a>,
    importer: &'a dyn Importer,
    raw: bool,
    names: Vec<String>,
) -> Option<Vec<String>> {
    if !is_object_like(&object) {
        return None;
    }

    object
        .children()
        .into_iter()
        .try_fold(names, |names, property| match property.kind() {
            "spread_element" => {
                let argument = property.children().into_iter().next()?;
                let target = resolve_to_value(argument, importer);
                collect_keys(target, importer, raw, names)
            }
            "shorthand_property_identifier" => Some(push_unique(names, identifier_key(&property, raw))),
            "pair" | "method_definition" | "property_signature" | "method_signature" => {
                let key = property.get("key").or_else(|| property.get("name"))?;
                let name = literal_key(key, importer, raw)?;
                Some(push_unique(names, name))
            }
            _ => None,
        })
}

fn identifier_key(key: &NodePath, raw: bool) -> String {
    if raw {
        format!("'{}'", key.text())
    } else {
        key.text().to_string()
    }
}

fn literal_key<'a>(key: NodePath<'a>, importer: &'a dyn Importer, raw: bool) -> Option<String> {
    match key.kind() {
        "property_identifier" | "identifier" => Some(identifier_key(&key, raw)),
        "string" => {
            if raw {
                Some(key.text().to_string())
            } else {
                string_value(&key)
            }
        }
        "number" => Some(key.text().to_string()),
        "computed_property_name" => {
            let inner = key.children().into_iter().next()?;
            let value = resolve_to_value(inner, importer);
            match value.kind() {
                "string" | "number" => literal_key(value, importer, raw),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Values of every property of an object literal, as source text. `null`
/// and `undefined` both come back as `null`. Later duplicates overwrite the
/// value of the first occurrence without moving it.
pub fn resolve_object_values_to_array<'a>(
    object: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Option<Vec<String>> {
    let entries = collect_values(object, importer, Vec::new())?;
    Some(entries.into_iter().map(|(_, value)| value).collect())
}

fn collect_values<'a>(
    object: NodePath<'a>,
    importer: &'a dyn Importer,
    entries: Vec<(String, String)>,
) -> Option<Vec<(String, String)>> {
    if !object.is("object") {
        return None;
    }

    object
        .children()
        .into_iter()
        .try_fold(entries, |mut entries, property| {
            let (key, value) = match property.kind() {
                "spread_element" => {
                    let argument = property.children().into_iter().next()?;
                    let target = resolve_to_value(argument, importer);
                    return collect_values(target, importer, entries);
                }
                "pair" => {
                    let key = literal_key(property.get("key")?, importer, false)?;
                    let value = resolve_to_value(property.get("value")?, importer);
                    (key, literal_value(&value)?)
                }
                "shorthand_property_identifier" => {
                    let value = resolve_to_value(property, importer);
                    (property.text().to_string(), literal_value(&value)?)
                }
                _ => return None,
            };
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
            Some(entries)
        })
}

fn literal_value(value: &NodePath) -> Option<String> {
    match value.kind() {
        "null" | "undefined" => Some("null".to_string()),
        "string" | "number" | "true" | "false" | "template_string" => Some(print_value(value)),
        "identifier" if value.text() == "undefined" => Some("null".to_string()),
        _ => None,
    }
}
