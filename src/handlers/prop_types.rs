use super::prop_types_object;
use crate::ast::names::get_property_name;
use crate::ast::NodePath;
use crate::docs::prop_types::{get_prop_type, is_required_prop_type};
use crate::docs::Documentation;
use crate::error::Result;
use crate::importer::Importer;
use crate::resolve::{resolve_to_module, resolve_to_value};

/// Runtime validators declared in `propTypes`.
pub fn prop_types_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    if let Some(object) = prop_types_object(definition, importer)? {
        amend_prop_types(documentation, object, importer);
    }
    Ok(())
}

fn amend_prop_types<'a>(documentation: &mut Documentation, object: NodePath<'a>, importer: &'a dyn Importer) {
    for property in object.children() {
        match property.kind() {
            "pair" | "shorthand_property_identifier" => {
                let Some(name) = get_property_name(&property, importer) else {
                    continue;
                };
                let value = property.get("value").unwrap_or(property);
                let prop_type = get_prop_type(resolve_to_value(value, importer), importer);
                let required = prop_type.name != "custom" && is_required_prop_type(value);
                let prop = documentation.get_prop_descriptor(&name);
                prop.prop_type = Some(prop_type);
                prop.required = Some(required);
            }
            "spread_element" => {
                let Some(argument) = property.children().into_iter().next() else {
                    continue;
                };
                let target = resolve_to_value(argument, importer);
                if target.is("object") {
                    amend_prop_types(documentation, target, importer);
                }
            }
            _ => {}
        }
    }
}

/// Spreads of prop types that live in modules we cannot see into are
/// recorded as composed from those modules.
pub fn prop_type_composition_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    let Some(object) = prop_types_object(definition, importer)? else {
        return Ok(());
    };
    for spread in object.children().into_iter().filter(|p| p.is("spread_element")) {
        let Some(argument) = spread.children().into_iter().next() else {
            continue;
        };
        if resolve_to_value(argument, importer).is("object") {
            continue;
        }
        if let Some(module) = resolve_to_module(argument, importer) {
            documentation.add_composes(module);
        }
    }
    Ok(())
}
