use super::prop_types_object;
use crate::ast::docblock::get_docblock;
use crate::ast::names::get_property_name;
use crate::ast::NodePath;
use crate::docs::Documentation;
use crate::error::Result;
use crate::importer::Importer;
use crate::resolve::resolve_to_value;

/// The component description: the docblock above the definition or above
/// the call or declaration that wraps it (`createClass({...})`, `memo(...)`,
/// `const Foo = ...`).
pub fn component_docblock_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    _importer: &'a dyn Importer,
) -> Result<()> {
    let mut current = Some(definition);
    let mut description = None;
    while let Some(path) = current {
        description = get_docblock(&path, false);
        if description.is_some() {
            break;
        }
        current = path.parent().filter(|parent| {
            parent.is_any(&["arguments", "call_expression", "parenthesized_expression"])
        });
    }
    documentation.description = Some(description.unwrap_or_default());
    Ok(())
}

/// Descriptions of runtime-validated props from the docblock above each
/// `propTypes` entry, following spreads of local objects.
pub fn prop_docblock_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    if let Some(object) = prop_types_object(definition, importer)? {
        describe_properties(documentation, object, importer);
    }
    Ok(())
}

fn describe_properties<'a>(documentation: &mut Documentation, object: NodePath<'a>, importer: &'a dyn Importer) {
    for property in object.children() {
        match property.kind() {
            "pair" | "shorthand_property_identifier" | "method_definition" => {
                let Some(name) = get_property_name(&property, importer) else {
                    continue;
                };
                let description = get_docblock(&property, false).unwrap_or_default();
                let prop = documentation.get_prop_descriptor(&name);
                if prop.description.as_deref().is_none_or(str::is_empty) {
                    prop.description = Some(description);
                }
            }
            "spread_element" => {
                let Some(argument) = property.children().into_iter().next() else {
                    continue;
                };
                let target = resolve_to_value(argument, importer);
                if target.is("object") {
                    describe_properties(documentation, target, importer);
                }
            }
            _ => {}
        }
    }
}
