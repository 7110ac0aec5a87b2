//! Value resolution engine.
//!
//! - **value**: follow bindings, assignments, destructuring, member chains and
//!   imports to the node producing a value
//! - **module**: module-of-origin lookup (`import`/`require`)
//! - **object**: static key/value enumeration of object literals and types
//! - **export**: export statements, higher-order wrappers, return values

pub mod export;
pub mod module;
pub mod object;
mod value;

pub use export::{resolve_export_declaration, resolve_function_definition_to_return_value, resolve_hoc};
pub use module::{is_react_module, is_react_module_name, resolve_to_module};
pub use object::{resolve_object_to_name_array, resolve_object_values_to_array};
pub use value::{
    find_last_assigned_value, find_object_property, pattern_member_chain, resolve_destructured,
    resolve_member_chain, resolve_to_value, with_max_depth, MemberKey, DEFAULT_MAX_DEPTH,
};
