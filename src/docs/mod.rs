//! The documentation record and the runtime prop-type descriptions that go
//! into it.

pub mod documentation;
pub mod prop_types;

pub use documentation::{
    DefaultValue, Documentation, EnumValue, MethodDescriptor, MethodParameter, MethodReturn, PropDescriptor,
    PropTypeDescriptor, PropTypeValue,
};
pub use prop_types::{get_prop_type, is_required_prop_type};
