use crate::ast::kinds::{is_function, is_literal};
use crate::ast::names::{get_property_name, print_value};
use crate::ast::NodePath;
use crate::docs::{DefaultValue, Documentation};
use crate::error::Result;
use crate::importer::Importer;
use crate::members::get_member_value_path;
use crate::resolve::{resolve_function_definition_to_return_value, resolve_to_value};

/// Default values from `defaultProps` / `getDefaultProps()`, and from
/// defaults in the destructured props parameter of function components.
pub fn default_props_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    if let Some(value) = get_member_value_path(definition, "defaultProps", importer)? {
        let value = resolve_to_value(value, importer);
        let object = if is_function(&value) {
            resolve_function_definition_to_return_value(value, importer)
        } else {
            Some(value)
        };
        if let Some(object) = object.filter(|o| o.is("object")) {
            object_defaults(documentation, object, importer);
        }
    }

    if is_function(&definition) {
        parameter_defaults(documentation, definition, importer);
    }
    Ok(())
}

fn object_defaults<'a>(documentation: &mut Documentation, object: NodePath<'a>, importer: &'a dyn Importer) {
    for property in object.children() {
        match property.kind() {
            "pair" | "shorthand_property_identifier" => {
                let Some(name) = get_property_name(&property, importer) else {
                    continue;
                };
                let value = property.get("value").unwrap_or(property);
                documentation.get_prop_descriptor(&name).default_value = Some(get_default_value(value, importer));
            }
            "spread_element" => {
                let Some(argument) = property.children().into_iter().next() else {
                    continue;
                };
                let target = resolve_to_value(argument, importer);
                if target.is("object") {
                    object_defaults(documentation, target, importer);
                }
            }
            _ => {}
        }
    }
}

/// `function Foo({size = 'md', label: text = ''})`.
fn parameter_defaults<'a>(documentation: &mut Documentation, function: NodePath<'a>, importer: &'a dyn Importer) {
    let Some(first) = function
        .get("parameters")
        .and_then(|params| params.children().into_iter().next())
    else {
        return;
    };
    let pattern = match first.kind() {
        "required_parameter" | "optional_parameter" => first.get("pattern"),
        _ => Some(first),
    };
    let Some(pattern) = pattern.filter(|p| p.is("object_pattern")) else {
        return;
    };

    for entry in pattern.children() {
        let (name, default) = match entry.kind() {
            "object_assignment_pattern" => {
                let name = entry.get("left").map(|left| left.text().to_string());
                (name, entry.get("right"))
            }
            "pair_pattern" => {
                let name = get_property_name(&entry, importer);
                let default = entry
                    .get("value")
                    .filter(|value| value.is("assignment_pattern"))
                    .and_then(|value| value.get("right"));
                (name, default)
            }
            _ => continue,
        };
        let (Some(name), Some(default)) = (name, default) else {
            continue;
        };
        documentation.get_prop_descriptor(&name).default_value = Some(get_default_value(default, importer));
    }
}

/// Literals are kept as written; anything else is printed after resolution
/// and flagged as computed when it is a reference or a call.
fn get_default_value<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> DefaultValue {
    let path = path.unwrap_parens();
    if is_literal(&path) {
        return DefaultValue {
            value: print_value(&path),
            computed: false,
        };
    }

    let resolved = resolve_to_value(path, importer);
    let shown = if resolved.is("import_statement") { path } else { resolved };
    let computed = shown.is_any(&["call_expression", "member_expression", "subscript_expression", "identifier"]);
    DefaultValue {
        value: print_value(&shown),
        computed,
    }
}
