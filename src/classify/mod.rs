//! Component and framework-call classifiers built on the value resolver.

pub mod builtin;
pub mod component_class;
pub mod stateless;

pub use builtin::{
    is_react_builtin_call, is_react_children_element_call, is_react_clone_element_call,
    is_react_create_class_call, is_react_create_element_call, is_react_forward_ref_call,
    is_react_memo_call, refers_to_react_export,
};
pub use component_class::{is_react_component_class, superclass};
pub use stateless::is_stateless_component;
