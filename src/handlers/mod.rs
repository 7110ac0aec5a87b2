//! Documentation handlers.
//!
//! Each handler inspects one component definition and fills in part of its
//! [`Documentation`]. Handlers are independent and run in the configured
//! order; a structural error from any of them aborts the definition.

mod code_types;
mod default_props;
mod display_name;
mod docblock;
mod methods;
mod prop_types;

pub use code_types::code_type_props_handler;
pub use default_props::default_props_handler;
pub use display_name::display_name_handler;
pub use docblock::{component_docblock_handler, prop_docblock_handler};
pub use methods::component_methods_handler;
pub use prop_types::{prop_type_composition_handler, prop_types_handler};

use crate::ast::NodePath;
use crate::docs::Documentation;
use crate::error::Result;
use crate::importer::Importer;
use serde::Deserialize;

pub type Handler = for<'a> fn(&mut Documentation, NodePath<'a>, &'a dyn Importer) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    ComponentDocblock,
    DisplayName,
    PropTypes,
    PropTypeComposition,
    PropDocblock,
    CodeTypeProps,
    DefaultProps,
    ComponentMethods,
}

impl HandlerKind {
    /// Every handler, in the order they run by default.
    pub const ALL: &'static [HandlerKind] = &[
        HandlerKind::PropTypes,
        HandlerKind::PropTypeComposition,
        HandlerKind::CodeTypeProps,
        HandlerKind::PropDocblock,
        HandlerKind::DefaultProps,
        HandlerKind::ComponentDocblock,
        HandlerKind::DisplayName,
        HandlerKind::ComponentMethods,
    ];

    pub fn handler(self) -> Handler {
        match self {
            HandlerKind::ComponentDocblock => component_docblock_handler,
            HandlerKind::DisplayName => display_name_handler,
            HandlerKind::PropTypes => prop_types_handler,
            HandlerKind::PropTypeComposition => prop_type_composition_handler,
            HandlerKind::PropDocblock => prop_docblock_handler,
            HandlerKind::CodeTypeProps => code_type_props_handler,
            HandlerKind::DefaultProps => default_props_handler,
            HandlerKind::ComponentMethods => component_methods_handler,
        }
    }
}

/// Run `kinds` over one definition and return what they collected.
pub fn document<'a>(definition: NodePath<'a>, kinds: &[HandlerKind], importer: &'a dyn Importer) -> Result<Documentation> {
    let mut documentation = Documentation::new();
    for kind in kinds {
        kind.handler()(&mut documentation, definition, importer)?;
    }
    Ok(documentation.postprocess())
}

/// The `propTypes` object of `definition`, if it has a statically visible one.
pub(crate) fn prop_types_object<'a>(definition: NodePath<'a>, importer: &'a dyn Importer) -> Result<Option<NodePath<'a>>> {
    let Some(value) = crate::members::get_member_value_path(definition, "propTypes", importer)? else {
        return Ok(None);
    };
    let object = crate::resolve::resolve_to_value(value, importer);
    Ok(object.is("object").then_some(object))
}
