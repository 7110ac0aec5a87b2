//! Static type descriptions from Flow and TypeScript annotations.

pub mod annotation;
pub mod cache;
pub mod descriptor;
pub mod engine;
pub mod flow;
pub mod params;
pub mod typescript;

pub use annotation::{apply_to_type_properties, get_type_annotation, get_type_from_react_component, unwrap_utility_type};
pub use descriptor::{
    FunctionArgument, FunctionSignature, ObjectSignature, PropertyEntry, PropertyKey, Signature, SignatureKind,
    TypeDescriptor, TypeShape,
};
pub use flow::{get_flow_type, get_flow_type_with_params};
pub use params::TypeParameters;
pub use typescript::{get_ts_type, get_ts_type_with_params};

use crate::ast::NodePath;
use crate::importer::Importer;
use std::rc::Rc;

/// Describe the type at `path` with the resolver matching its file's syntax.
pub fn get_type<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> TypeDescriptor {
    get_type_with_params(path, &TypeParameters::empty(), importer)
}

pub fn get_type_with_params<'a>(
    path: NodePath<'a>,
    params: &Rc<TypeParameters<'a>>,
    importer: &'a dyn Importer,
) -> TypeDescriptor {
    if path.file().is_flow() {
        get_flow_type_with_params(path, params, importer)
    } else {
        get_ts_type_with_params(path, params, importer)
    }
}
