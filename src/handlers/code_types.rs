use crate::ast::docblock::get_docblock;
use crate::ast::names::get_property_name;
use crate::ast::NodePath;
use crate::docs::Documentation;
use crate::error::Result;
use crate::importer::Importer;
use crate::types::{apply_to_type_properties, get_type_from_react_component, get_type_with_params};

/// Props described by a Flow or TypeScript annotation: the component base
/// class's type argument, a `props` field, or the props parameter's type.
pub fn code_type_props_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    let Some((props_type, params)) = get_type_from_react_component(definition) else {
        return Ok(());
    };
    let flow = definition.file().is_flow();

    apply_to_type_properties(props_type, importer, &mut |property| {
        let Some(name) = get_property_name(&property, importer) else {
            return;
        };
        let annotated = if property.is("method_signature") {
            Some(property)
        } else {
            property.get("type")
        };
        let ty = annotated.map(|annotation| get_type_with_params(annotation, &params, importer));
        let description = get_docblock(&property, false).unwrap_or_default();

        let prop = documentation.get_prop_descriptor(&name);
        if flow {
            prop.flow_type = ty;
        } else {
            prop.ts_type = ty;
        }
        prop.required = Some(!property.has_token("?"));
        if prop.description.as_deref().is_none_or(str::is_empty) {
            prop.description = Some(description);
        }
    });
    Ok(())
}
