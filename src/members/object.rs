use crate::ast::NodePath;
use crate::importer::Importer;
use crate::resolve::find_object_property;

/// Value of the property `name` in an object literal.
pub fn get_property_value_path<'a>(
    object: NodePath<'a>,
    name: &str,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    if !object.is("object") {
        return None;
    }
    find_object_property(object, name, importer)
}
