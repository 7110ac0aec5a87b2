use crate::ast::names::{get_name, string_value};
use crate::ast::NodePath;
use crate::docs::Documentation;
use crate::error::Result;
use crate::importer::Importer;
use crate::members::get_member_value_path;
use crate::resolve::{resolve_function_definition_to_return_value, resolve_to_value};

/// `displayName` as declared on the component, falling back to the name of
/// the class, function or variable that defines it.
pub fn display_name_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    if let Some(value) = get_member_value_path(definition, "displayName", importer)? {
        let value = resolve_to_value(value, importer);
        let declared = match value.kind() {
            // `static get displayName() { return 'Foo'; }`
            "method_definition" => {
                resolve_function_definition_to_return_value(value, importer).and_then(|returned| string_value(&returned))
            }
            _ => string_value(&value),
        };
        if let Some(name) = declared {
            documentation.display_name = Some(name);
            return Ok(());
        }
    }

    documentation.display_name = inferred_name(definition);
    Ok(())
}

fn inferred_name(definition: NodePath) -> Option<String> {
    if let Some(name) = get_name(&definition) {
        return Some(name);
    }
    // `createClass({...})`, `memo(() => ...)` assigned to a variable
    definition
        .ancestors()
        .take_while(|ancestor| ancestor.is_any(&["arguments", "call_expression", "parenthesized_expression"]))
        .filter(|ancestor| ancestor.is("call_expression"))
        .last()
        .and_then(|call| get_name(&call))
}
