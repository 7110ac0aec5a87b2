//! Descriptions of runtime prop validators (`PropTypes.string.isRequired`,
//! `PropTypes.shape({...})`, ...).

use super::documentation::{EnumValue, PropTypeDescriptor, PropTypeValue};
use crate::ast::docblock::get_docblock;
use crate::ast::kinds::is_literal;
use crate::ast::members::get_members;
use crate::ast::names::{get_property_name, print_value, string_value};
use crate::ast::NodePath;
use crate::importer::Importer;
use crate::resolve::{resolve_object_to_name_array, resolve_object_values_to_array, resolve_to_value};
use indexmap::IndexMap;

/// Validators that take no arguments.
const SIMPLE_PROP_TYPES: &[&str] = &[
    "array",
    "bool",
    "func",
    "number",
    "object",
    "string",
    "any",
    "element",
    "node",
    "symbol",
    "elementType",
];

/// Validators that take one argument describing the accepted values.
const COMPOSITE_PROP_TYPES: &[&str] = &["arrayOf", "objectOf", "instanceOf", "oneOf", "oneOfType", "shape", "exact"];

/// Name carried by one step of a validator chain.
fn member_name(member: &NodePath) -> Option<String> {
    match member.kind() {
        "property_identifier" | "identifier" => Some(member.text().to_string()),
        "string" => string_value(member),
        _ => None,
    }
}

/// Describe the validator expression `path`. Anything unrecognized is a
/// `custom` validator carrying its source text.
pub fn get_prop_type<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> PropTypeDescriptor {
    let path = path.unwrap_parens();

    for member in get_members(path, true) {
        let Some(name) = member_name(&member.path) else {
            continue;
        };
        if SIMPLE_PROP_TYPES.contains(&name.as_str()) {
            return PropTypeDescriptor::named(name);
        }
        if COMPOSITE_PROP_TYPES.contains(&name.as_str()) {
            if let Some(argument) = member.argument_paths.as_ref().and_then(|args| args.first()) {
                return composite(&name, *argument, importer);
            }
        }
    }

    match path.kind() {
        "identifier" if SIMPLE_PROP_TYPES.contains(&path.text()) => PropTypeDescriptor::named(path.text()),
        "call_expression" => {
            let callee = path.get("function").filter(|c| c.is("identifier"));
            let argument = path
                .get("arguments")
                .and_then(|args| args.children().into_iter().next());
            match (callee, argument) {
                (Some(callee), Some(argument)) if COMPOSITE_PROP_TYPES.contains(&callee.text()) => {
                    composite(callee.text(), argument, importer)
                }
                _ => PropTypeDescriptor::custom(print_value(&path)),
            }
        }
        _ => PropTypeDescriptor::custom(print_value(&path)),
    }
}

fn composite<'a>(name: &str, argument: NodePath<'a>, importer: &'a dyn Importer) -> PropTypeDescriptor {
    match name {
        "arrayOf" | "objectOf" => {
            let inner = get_prop_type(resolve_to_value(argument, importer), importer);
            PropTypeDescriptor::named(name).with_value(PropTypeValue::Single(Box::new(inner)))
        }
        "instanceOf" => PropTypeDescriptor::named(name).with_value(PropTypeValue::Raw(print_value(&argument))),
        "oneOf" => one_of(argument, importer),
        "oneOfType" => one_of_type(argument, importer),
        _ => shape(name, argument, importer),
    }
}

/// `oneOf([...])`: literal members are listed by value; anything whose
/// values cannot be listed statically is kept as source text.
fn one_of<'a>(argument: NodePath<'a>, importer: &'a dyn Importer) -> PropTypeDescriptor {
    let descriptor = PropTypeDescriptor::named("enum");
    let value = resolve_to_value(argument, importer);

    if value.is("array") {
        let values = value
            .children()
            .into_iter()
            .map(|element| {
                let resolved = resolve_to_value(element, importer);
                if is_literal(&resolved) {
                    EnumValue {
                        value: print_value(&resolved),
                        computed: false,
                    }
                } else {
                    EnumValue {
                        value: print_value(&element),
                        computed: true,
                    }
                }
            })
            .collect();
        return descriptor.with_value(PropTypeValue::Enum(values));
    }

    match object_enum_values(value, importer) {
        Some(values) => {
            let values = values
                .into_iter()
                .map(|value| EnumValue { value, computed: false })
                .collect();
            descriptor.with_value(PropTypeValue::Enum(values))
        }
        None => descriptor.with_computed(print_value(&argument)),
    }
}

/// `Object.keys(obj)` and `Object.values(obj)` over statically known objects.
fn object_enum_values<'a>(call: NodePath<'a>, importer: &'a dyn Importer) -> Option<Vec<String>> {
    if !call.is("call_expression") {
        return None;
    }
    let callee = call.get("function")?;
    if !callee.is("member_expression") || callee.get("object")?.text() != "Object" {
        return None;
    }
    let target = call.get("arguments")?.children().into_iter().next()?;
    let object = resolve_to_value(target, importer);
    match callee.get("property")?.text() {
        "keys" => {
            let keys = resolve_object_to_name_array(object, importer, false)?;
            Some(keys.into_iter().map(|key| format!("\"{key}\"")).collect())
        }
        "values" => resolve_object_values_to_array(object, importer),
        _ => None,
    }
}

fn one_of_type<'a>(argument: NodePath<'a>, importer: &'a dyn Importer) -> PropTypeDescriptor {
    let descriptor = PropTypeDescriptor::named("union");
    let value = resolve_to_value(argument, importer);
    if !value.is("array") {
        return descriptor.with_computed(print_value(&argument));
    }
    let members = value
        .children()
        .into_iter()
        .map(|element| get_prop_type(resolve_to_value(element, importer), importer))
        .collect();
    descriptor.with_value(PropTypeValue::Union(members))
}

/// `shape({...})` / `exact({...})`: one descriptor per property, each with
/// its own docblock and required flag.
fn shape<'a>(name: &str, argument: NodePath<'a>, importer: &'a dyn Importer) -> PropTypeDescriptor {
    let descriptor = PropTypeDescriptor::named(name);
    let object = resolve_to_value(argument, importer);
    if !object.is("object") {
        return descriptor.with_value(PropTypeValue::Raw(print_value(&argument)));
    }

    let mut fields = IndexMap::new();
    for property in object.children() {
        if !property.is("pair") {
            continue;
        }
        let (Some(key), Some(value)) = (get_property_name(&property, importer), property.get("value")) else {
            continue;
        };
        let mut field = get_prop_type(resolve_to_value(value, importer), importer);
        field.description = Some(get_docblock(&property, false).unwrap_or_default());
        field.required = Some(is_required_prop_type(value));
        fields.insert(key, field);
    }
    descriptor.with_value(PropTypeValue::Shape(fields))
}

/// Does the validator chain end in (or contain) `.isRequired`?
pub fn is_required_prop_type(path: NodePath) -> bool {
    get_members(path, false).iter().any(|member| {
        if member.computed {
            string_value(&member.path).is_some_and(|name| name == "isRequired")
        } else {
            member.path.text() == "isRequired"
        }
    })
}
