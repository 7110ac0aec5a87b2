//! TypeScript annotation vocabulary.

use super::descriptor::TypeDescriptor;
use super::engine::{Dialect, TypeResolver};
use super::params::TypeParameters;
use crate::ast::NodePath;
use crate::importer::Importer;
use std::rc::Rc;

const ARRAY_GENERICS: &[&str] = &["Array", "ReadonlyArray"];
const TRANSPARENT_UTILITIES: &[&str] = &["Readonly"];
const ELEMENT_GENERICS: &[&str] = &[
    "Partial",
    "Required",
    "Pick",
    "Omit",
    "Record",
    "Exclude",
    "Extract",
    "NonNullable",
    "ReturnType",
    "Parameters",
    "Promise",
];

const REACT_TYPES: &[&str] = &[
    "ChangeEvent",
    "ComponentProps",
    "ComponentPropsWithoutRef",
    "ComponentType",
    "CSSProperties",
    "ElementType",
    "FC",
    "FocusEvent",
    "FunctionComponent",
    "Key",
    "KeyboardEvent",
    "MouseEvent",
    "PropsWithChildren",
    "ReactChild",
    "ReactElement",
    "ReactFragment",
    "ReactNode",
    "ReactPortal",
    "Ref",
    "RefObject",
    "SyntheticEvent",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptDialect;

impl Dialect for TypeScriptDialect {
    fn label(&self) -> &'static str {
        "typescript"
    }

    fn is_array_generic(&self, name: &str) -> bool {
        ARRAY_GENERICS.contains(&name)
    }

    fn is_transparent_utility(&self, name: &str) -> bool {
        TRANSPARENT_UTILITIES.contains(&name)
    }

    // `keyof` is an operator here, handled by the shared engine.
    fn is_keys_utility(&self, _name: &str) -> bool {
        false
    }

    fn is_element_generic(&self, name: &str) -> bool {
        ELEMENT_GENERICS.contains(&name)
    }

    fn framework_types(&self) -> &'static [&'static str] {
        REACT_TYPES
    }

    fn supports_maybe(&self) -> bool {
        false
    }
}

/// Describe a TypeScript annotation (or annotated node's type).
pub fn get_ts_type<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> TypeDescriptor {
    get_ts_type_with_params(path, &TypeParameters::empty(), importer)
}

pub fn get_ts_type_with_params<'a>(
    path: NodePath<'a>,
    params: &Rc<TypeParameters<'a>>,
    importer: &'a dyn Importer,
) -> TypeDescriptor {
    TypeResolver::new(TypeScriptDialect, importer).resolve(path, params)
}
