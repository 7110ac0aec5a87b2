//! Flow annotation vocabulary.

use super::descriptor::TypeDescriptor;
use super::engine::{Dialect, TypeResolver};
use super::params::TypeParameters;
use crate::ast::NodePath;
use crate::importer::Importer;
use std::rc::Rc;

const ARRAY_GENERICS: &[&str] = &["Array", "$ReadOnlyArray"];
const TRANSPARENT_UTILITIES: &[&str] = &["$Exact", "$ReadOnly"];
const ELEMENT_GENERICS: &[&str] = &["Class", "$Shape", "$Diff", "$PropertyType", "$ElementType", "Promise"];

const REACT_TYPES: &[&str] = &[
    "AbstractComponent",
    "ChildrenArray",
    "ComponentType",
    "Config",
    "Context",
    "Element",
    "ElementConfig",
    "ElementProps",
    "ElementRef",
    "ElementType",
    "Key",
    "MixedElement",
    "Node",
    "Portal",
    "Ref",
    "StatelessFunctionalComponent",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct FlowDialect;

impl Dialect for FlowDialect {
    fn label(&self) -> &'static str {
        "flow"
    }

    fn is_array_generic(&self, name: &str) -> bool {
        ARRAY_GENERICS.contains(&name)
    }

    fn is_transparent_utility(&self, name: &str) -> bool {
        TRANSPARENT_UTILITIES.contains(&name)
    }

    fn is_keys_utility(&self, name: &str) -> bool {
        name == "$Keys"
    }

    fn is_element_generic(&self, name: &str) -> bool {
        ELEMENT_GENERICS.contains(&name)
    }

    fn framework_types(&self) -> &'static [&'static str] {
        REACT_TYPES
    }

    fn supports_maybe(&self) -> bool {
        true
    }

    fn allows_unnamed_parameters(&self) -> bool {
        true
    }

    fn builtin_name(&self, name: &str) -> Option<&'static str> {
        match name {
            "bool" => Some("boolean"),
            _ => None,
        }
    }
}

/// Describe a Flow annotation (or annotated node's type).
pub fn get_flow_type<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> TypeDescriptor {
    get_flow_type_with_params(path, &TypeParameters::empty(), importer)
}

pub fn get_flow_type_with_params<'a>(
    path: NodePath<'a>,
    params: &Rc<TypeParameters<'a>>,
    importer: &'a dyn Importer,
) -> TypeDescriptor {
    TypeResolver::new(FlowDialect, importer).resolve(path, params)
}
