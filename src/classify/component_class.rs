use super::builtin::is_react_component_superclass;
use crate::ast::docblock::{get_docblock, get_doclets};
use crate::ast::kinds::is_class;
use crate::ast::names::{is_computed_key, is_static};
use crate::ast::NodePath;
use crate::importer::Importer;

/// The expression after `extends`, if the class has one.
pub fn superclass<'a>(class: &NodePath<'a>) -> Option<NodePath<'a>> {
    let heritage = class.child_of_kind("class_heritage")?;
    match heritage.child_of_kind("extends_clause") {
        Some(clause) => clause
            .get("value")
            .or_else(|| clause.children().into_iter().next()),
        None => heritage.children().into_iter().next(),
    }
}

/// A non-static, non-computed `render` method.
pub fn has_render_method(class: &NodePath) -> bool {
    let Some(body) = class.get("body") else {
        return false;
    };
    body.children().iter().any(|member| {
        member.is("method_definition")
            && !is_static(member)
            && !is_computed_key(member)
            && member.get("name").is_some_and(|n| n.text() == "render")
    })
}

/// Whether a class declaration or expression is a framework component: it
/// extends `Component`/`PureComponent`, declares `render()`, or is documented
/// with `@extends React.Component`.
pub fn is_react_component_class<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    if !is_class(&path) {
        return false;
    }

    if superclass(&path).is_some_and(|base| is_react_component_superclass(base, importer)) {
        return true;
    }

    if has_render_method(&path) {
        return true;
    }

    get_docblock(&path, false)
        .map(|docblock| get_doclets(&docblock))
        .and_then(|doclets| doclets.get("extends").cloned())
        .is_some_and(|extends| extends.contains("React.Component"))
}
