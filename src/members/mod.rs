//! Member lookup on component definitions.
//!
//! A component's `propTypes`, `defaultProps` and friends can live in an object
//! literal (`createClass({...})`), a class body (`static propTypes = ...`) or
//! an assignment next to the definition (`Foo.propTypes = ...`). The
//! definition's node kind picks the lookup strategy.

mod class;
mod expression;
mod object;

pub use class::get_class_member_value_path;
pub use expression::get_member_expression_value_path;
pub use object::get_property_value_path;

use crate::ast::kinds::{is_class, is_function};
use crate::ast::NodePath;
use crate::error::{DocgenError, Result};
use crate::importer::Importer;
use crate::resolve::resolve_function_definition_to_return_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Property,
    ClassMember,
    MemberExpression,
}

fn lookup_for(definition: &NodePath) -> Option<Lookup> {
    if definition.is("object") {
        Some(Lookup::Property)
    } else if is_class(definition) {
        Some(Lookup::ClassMember)
    } else if is_function(definition)
        || definition.is_any(&["call_expression", "variable_declarator"])
    {
        Some(Lookup::MemberExpression)
    } else {
        None
    }
}

/// Names that mean the same member in the two component styles.
fn synonym(member_name: &str) -> Option<&'static str> {
    match member_name {
        "defaultProps" => Some("getDefaultProps"),
        "getDefaultProps" => Some("defaultProps"),
        _ => None,
    }
}

fn run<'a>(
    lookup: Lookup,
    definition: NodePath<'a>,
    member_name: &str,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    match lookup {
        Lookup::Property => get_property_value_path(definition, member_name, importer),
        // `class Foo {}` followed by `Foo.propTypes = ...`
        Lookup::ClassMember => get_class_member_value_path(definition, member_name, importer)
            .or_else(|| get_member_expression_value_path(definition, member_name, importer)),
        Lookup::MemberExpression => {
            get_member_expression_value_path(definition, member_name, importer)
        }
    }
}

/// Find the value of `member_name` on a component definition.
///
/// `Ok(None)` when neither the name nor its synonym is present. Errors only
/// for definition kinds that cannot carry members at all.
pub fn get_member_value_path<'a>(
    definition: NodePath<'a>,
    member_name: &str,
    importer: &'a dyn Importer,
) -> Result<Option<NodePath<'a>>> {
    let lookup = lookup_for(&definition).ok_or_else(|| DocgenError::UnsupportedDefinition {
        kind: definition.kind().to_string(),
    })?;

    let found = run(lookup, definition, member_name, importer).or_else(|| {
        synonym(member_name).and_then(|alias| run(lookup, definition, alias, importer))
    });

    Ok(found.map(|value| postprocess(member_name, value, importer)))
}

/// `propTypes` written as a function returns the actual object.
fn postprocess<'a>(member_name: &str, value: NodePath<'a>, importer: &'a dyn Importer) -> NodePath<'a> {
    if member_name == "propTypes" && is_function(&value) {
        return resolve_function_definition_to_return_value(value, importer).unwrap_or(value);
    }
    value
}
