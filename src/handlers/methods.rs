//! Public methods of class and `createClass` components.

use crate::ast::docblock::get_docblock;
use crate::ast::kinds::{is_class, is_function};
use crate::ast::names::{get_parameter_name, get_property_name, is_static};
use crate::ast::NodePath;
use crate::docs::{Documentation, MethodDescriptor, MethodParameter, MethodReturn};
use crate::error::Result;
use crate::importer::Importer;
use crate::types::{get_type, get_type_annotation, TypeDescriptor};
use regex::Regex;
use std::sync::OnceLock;

/// Lifecycle and framework-reserved names that are not part of a
/// component's own API.
const LIFECYCLE_METHODS: &[&str] = &[
    "constructor",
    "render",
    "getInitialState",
    "getDefaultProps",
    "getChildContext",
    "componentWillMount",
    "UNSAFE_componentWillMount",
    "componentDidMount",
    "componentWillReceiveProps",
    "UNSAFE_componentWillReceiveProps",
    "shouldComponentUpdate",
    "componentWillUpdate",
    "UNSAFE_componentWillUpdate",
    "componentDidUpdate",
    "componentWillUnmount",
    "componentDidCatch",
    "getDerivedStateFromProps",
    "getDerivedStateFromError",
    "getSnapshotBeforeUpdate",
    "statics",
];

fn param_doclet() -> &'static Regex {
    static PARAM: OnceLock<Regex> = OnceLock::new();
    PARAM.get_or_init(|| {
        Regex::new(r"(?m)^@param\s+(?:\{([^}]*)\}\s+)?\[?([\w$]+)[^\s]*\s*(?:-\s*)?(.*)$").expect("static regex")
    })
}

fn returns_doclet() -> &'static Regex {
    static RETURNS: OnceLock<Regex> = OnceLock::new();
    RETURNS.get_or_init(|| Regex::new(r"(?m)^@returns?\s*(?:\{([^}]*)\})?\s*(.*)$").expect("static regex"))
}

pub fn component_methods_handler<'a>(
    documentation: &mut Documentation,
    definition: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<()> {
    let members = if is_class(&definition) {
        definition.get("body").map(|body| body.children()).unwrap_or_default()
    } else if definition.is("object") {
        definition.children()
    } else {
        return Ok(());
    };

    for member in members {
        let Some(function) = method_function(&member) else {
            continue;
        };
        let Some(name) = get_property_name(&member, importer) else {
            continue;
        };
        if LIFECYCLE_METHODS.contains(&name.as_str()) {
            continue;
        }
        documentation.add_method(method_documentation(name, member, function, importer)?);
    }
    Ok(())
}

/// The function implementing a class or object member, if it is a method.
fn method_function<'a>(member: &NodePath<'a>) -> Option<NodePath<'a>> {
    match member.kind() {
        "method_definition" => Some(*member),
        "pair" | "public_field_definition" => member.get("value").filter(is_function),
        _ => None,
    }
}

fn modifiers(member: &NodePath, function: &NodePath) -> Vec<String> {
    let mut modifiers = Vec::new();
    if is_static(member) {
        modifiers.push("static".to_string());
    }
    if function.has_token("async") {
        modifiers.push("async".to_string());
    }
    if function.has_token("*") {
        modifiers.push("generator".to_string());
    }
    for accessor in ["get", "set"] {
        if member.has_token(accessor) {
            modifiers.push(accessor.to_string());
        }
    }
    modifiers
}

fn method_documentation<'a>(
    name: String,
    member: NodePath<'a>,
    function: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Result<MethodDescriptor> {
    let docblock = get_docblock(&member, false);

    let parameters = match function.get("parameters") {
        Some(list) => list.children(),
        None => function.get("parameter").into_iter().collect(),
    };
    let mut params = Vec::new();
    for parameter in parameters {
        let name = get_parameter_name(&parameter)?;
        let optional = parameter.is("optional_parameter")
            || parameter.get("value").is_some()
            || parameter.is("assignment_pattern");
        let ty = get_type_annotation(&parameter).map(|annotation| get_type(annotation, importer));
        params.push(MethodParameter {
            name,
            optional,
            ty,
            description: None,
        });
    }

    let returns = function
        .get("return_type")
        .map(|annotation| get_type(annotation, importer))
        .map(|ty| MethodReturn {
            ty: Some(ty),
            description: None,
        });

    let mut method = MethodDescriptor {
        name,
        docblock: docblock.clone(),
        modifiers: modifiers(&member, &function),
        params,
        returns,
        description: None,
    };
    if let Some(docblock) = docblock {
        apply_jsdoc(&mut method, &docblock);
    }
    Ok(method)
}

/// Fill descriptions (and missing types) from `@param` / `@returns` tags.
fn apply_jsdoc(method: &mut MethodDescriptor, docblock: &str) {
    let description: Vec<&str> = docblock
        .lines()
        .take_while(|line| !line.trim_start().starts_with('@'))
        .collect();
    method.description = Some(description.join("\n").trim().to_string());

    for caps in param_doclet().captures_iter(docblock) {
        let Some(param) = method.params.iter_mut().find(|p| p.name == caps[2]) else {
            continue;
        };
        let text = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
        if !text.is_empty() {
            param.description = Some(text.to_string());
        }
        if param.ty.is_none() {
            param.ty = caps.get(1).map(|ty| TypeDescriptor::simple(ty.as_str().trim()));
        }
    }

    if let Some(caps) = returns_doclet().captures(docblock) {
        let returns = method.returns.get_or_insert(MethodReturn {
            ty: None,
            description: None,
        });
        let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        if !text.is_empty() {
            returns.description = Some(text.to_string());
        }
        if returns.ty.is_none() {
            returns.ty = caps.get(1).map(|ty| TypeDescriptor::simple(ty.as_str().trim()));
        }
    }
}
