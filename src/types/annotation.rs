//! Locating the annotations that describe a component's props.

use super::params::TypeParameters;
use crate::ast::kinds::{is_class, is_function};
use crate::ast::scope::binding_of;
use crate::ast::{NodePath, PathKey};
use crate::classify::superclass;
use crate::importer::Importer;
use crate::resolve::resolve_to_value;
use std::collections::HashSet;
use std::rc::Rc;

/// Wrappers that only mark exactness or mutability.
const UTILITY_WRAPPERS: &[&str] = &["$Exact", "$ReadOnly", "Readonly"];

/// Generic function-component annotations whose first argument is the props type.
const COMPONENT_ANNOTATIONS: &[&str] = &[
    "FC",
    "FunctionComponent",
    "SFC",
    "StatelessComponent",
    "StatelessFunctionalComponent",
    "AbstractComponent",
    "ComponentType",
    "VFC",
];

/// The type written in `path`'s annotation (`x: T`), without the colon wrapper.
pub fn get_type_annotation<'a>(path: &NodePath<'a>) -> Option<NodePath<'a>> {
    let annotation = path.get("type").or_else(|| path.get("return_type"))?;
    if annotation.is("type_annotation") {
        annotation.children().into_iter().next()
    } else {
        Some(annotation)
    }
}

/// Strip `$Exact<T>`, `$ReadOnly<T>` and `Readonly<T>`, however deeply nested.
pub fn unwrap_utility_type(path: NodePath<'_>) -> NodePath<'_> {
    let mut current = path;
    loop {
        if current.is("parenthesized_type") {
            match current.children().into_iter().next() {
                Some(inner) => {
                    current = inner;
                    continue;
                }
                None => return current,
            }
        }
        if !current.is("generic_type") {
            return current;
        }
        let wrapper = current
            .get("name")
            .is_some_and(|name| UTILITY_WRAPPERS.contains(&name.text()));
        let arguments = current
            .get("type_arguments")
            .map(|a| a.children())
            .unwrap_or_default();
        match arguments.as_slice() {
            [inner] if wrapper => current = *inner,
            _ => return current,
        }
    }
}

/// The props type of a component definition: the first type argument of
/// the component base class, a `props` class field, the annotation of a
/// function component's first parameter, or the first argument of an
/// `FC<Props>`-style annotation on the variable holding it.
pub fn get_type_from_react_component<'a>(path: NodePath<'a>) -> Option<(NodePath<'a>, Rc<TypeParameters<'a>>)> {
    let params = TypeParameters::empty();

    if is_class(&path) {
        let from_superclass = superclass(&path)
            .and_then(|base| base.parent())
            .and_then(|clause| clause.get("type_arguments"))
            .and_then(|args| args.children().into_iter().next());
        if let Some(props) = from_superclass {
            return Some((unwrap_utility_type(props), params));
        }
        let field = path.get("body")?.children().into_iter().find(|member| {
            member.is("public_field_definition") && member.get("name").is_some_and(|n| n.text() == "props")
        });
        return field
            .and_then(|field| get_type_annotation(&field))
            .map(|props| (unwrap_utility_type(props), params));
    }

    if !is_function(&path) {
        return None;
    }

    let parameter = path
        .get("parameters")
        .and_then(|p| p.children().into_iter().find(|c| c.is_any(&["required_parameter", "optional_parameter"])))
        .or_else(|| path.get("parameter"));
    if let Some(props) = parameter.as_ref().and_then(get_type_annotation) {
        return Some((unwrap_utility_type(props), params));
    }

    let declarator = path
        .parent()
        .filter(|parent| parent.is("variable_declarator") && path.is_field_of_parent("value"))?;
    let annotation = get_type_annotation(&declarator)?;
    if !annotation.is("generic_type") {
        return None;
    }
    let name = annotation.get("name")?;
    let short = name.get("name").unwrap_or(name);
    if !COMPONENT_ANNOTATIONS.contains(&short.text()) {
        return None;
    }
    let props = annotation.get("type_arguments")?.children().into_iter().next()?;
    Some((unwrap_utility_type(props), params))
}

/// Call `visit` with every member signature (`property_signature` or
/// `method_signature`) that contributes to the object type `path`, following
/// aliases, interfaces and their `extends` lists, intersections and unions.
pub fn apply_to_type_properties<'a>(
    path: NodePath<'a>,
    importer: &'a dyn Importer,
    visit: &mut dyn FnMut(NodePath<'a>),
) {
    let mut seen = HashSet::new();
    walk_type_properties(path, importer, visit, &mut seen);
}

fn walk_type_properties<'a>(
    path: NodePath<'a>,
    importer: &'a dyn Importer,
    visit: &mut dyn FnMut(NodePath<'a>),
    seen: &mut HashSet<PathKey>,
) {
    if !seen.insert(path.key()) {
        return;
    }
    let path = unwrap_utility_type(path);
    match path.kind() {
        "object_type" | "interface_body" => {
            for member in path.children() {
                if let Some(name) = object_type_spread(&member) {
                    if let Some(declaration) = spread_declaration(name, importer) {
                        walk_type_properties(declaration, importer, visit, seen);
                    }
                } else if member.is_any(&["property_signature", "method_signature"]) {
                    visit(member);
                }
            }
        }
        "intersection_type" | "union_type" => {
            for member in path.children() {
                walk_type_properties(member, importer, visit, seen);
            }
        }
        "type_identifier" => {
            let declaration = resolve_to_value(path, importer);
            if declaration != path {
                walk_type_properties(declaration, importer, visit, seen);
            }
        }
        "generic_type" => {
            if let Some(name) = path.get("name") {
                walk_type_properties(name, importer, visit, seen);
            }
        }
        "type_alias_declaration" => {
            if let Some(value) = path.get("value") {
                walk_type_properties(value, importer, visit, seen);
            }
        }
        "interface_declaration" => {
            for clause in path.children().into_iter().filter(|c| c.is("extends_type_clause")) {
                for parent in clause.children() {
                    walk_type_properties(parent, importer, visit, seen);
                }
            }
            if let Some(body) = path.get("body") {
                walk_type_properties(body, importer, visit, seen);
            }
        }
        _ => {}
    }
}

/// Name of the type spread into an object type by `{...Base, extra: T}`.
///
/// The TSX grammar has no object-type spread; it recovers `...` as an
/// `ERROR` node followed by a property signature without a type.
pub fn object_type_spread<'a>(member: &NodePath<'a>) -> Option<NodePath<'a>> {
    if !member.is("property_signature") || member.get("type").is_some() {
        return None;
    }
    let after_ellipsis = member
        .prev_sibling()
        .is_some_and(|previous| previous.is("ERROR") && previous.text().trim_end().ends_with("..."));
    if !after_ellipsis && !member.text().starts_with("...") {
        return None;
    }
    member.get("name")
}

/// Declaration a spread type name refers to, following imports.
pub fn spread_declaration<'a>(name: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    let binding = binding_of(&name)?;
    let declaration = resolve_to_value(binding.identifier, importer);
    declaration
        .is_any(&["type_alias_declaration", "interface_declaration", "object_type"])
        .then_some(declaration)
}
