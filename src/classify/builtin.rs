//! Detection of calls to well-known framework APIs, however they were
//! imported, aliased or destructured at the call site.

use crate::ast::scope::{binding_of, BindingKind};
use crate::ast::names::string_value;
use crate::ast::NodePath;
use crate::importer::{module_source, Importer};
use crate::resolve::{is_react_module, is_react_module_name, resolve_destructured, resolve_to_module, resolve_to_value, MemberKey};

/// Does `expression` refer to one of `names` exported by the framework
/// module? Covers `React.name`, `import {name as x} from 'react'` and
/// `const {name: x} = require('react')`, plus any alias chain to those.
pub fn refers_to_react_export<'a>(expression: NodePath<'a>, names: &[&str], importer: &'a dyn Importer) -> bool {
    let expression = expression.unwrap_parens();
    match expression.kind() {
        "member_expression" => {
            let property_matches = expression
                .get("property")
                .is_some_and(|p| names.contains(&p.text()));
            property_matches
                && expression
                    .get("object")
                    .is_some_and(|object| is_react_module(object, importer))
        }
        "identifier" => {
            if let Some(binding) = binding_of(&expression) {
                match binding.kind {
                    BindingKind::Import => {
                        let Some(specifier) = binding.identifier.parent() else {
                            return false;
                        };
                        if !specifier.is("import_specifier") {
                            return false;
                        }
                        let imported = specifier
                            .get("name")
                            .map(|n| string_value(&n).unwrap_or_else(|| n.text().to_string()));
                        let from_react = module_source(&binding.declaration)
                            .is_some_and(|m| is_react_module_name(&m));
                        return from_react && imported.is_some_and(|n| names.contains(&n.as_str()));
                    }
                    BindingKind::Var | BindingKind::Let | BindingKind::Const => {
                        if let Some((root, chain)) = resolve_destructured(expression, importer) {
                            return match chain.as_slice() {
                                [MemberKey::Name(name)] => {
                                    names.contains(&name.as_str()) && is_react_module(root, importer)
                                }
                                _ => false,
                            };
                        }
                    }
                    _ => {}
                }
            }
            let resolved = resolve_to_value(expression, importer);
            resolved != expression
                && resolved.is("member_expression")
                && refers_to_react_export(resolved, names, importer)
        }
        _ => false,
    }
}

/// `<framework>.<name>(...)` in any of its aliased forms.
pub fn is_react_builtin_call<'a>(path: NodePath<'a>, name: &str, importer: &'a dyn Importer) -> bool {
    let path = path.unwrap_parens();
    if !path.is("call_expression") {
        return false;
    }
    path.get("function")
        .is_some_and(|callee| refers_to_react_export(callee, &[name], importer))
}

/// `React.createClass(...)` or any call into the `create-react-class` package.
pub fn is_react_create_class_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    let path = path.unwrap_parens();
    if !path.is("call_expression") {
        return false;
    }
    if is_react_builtin_call(path, "createClass", importer) {
        return true;
    }
    path.get("function")
        .and_then(|callee| resolve_to_module(callee, importer))
        .is_some_and(|module| module == "create-react-class")
}

pub fn is_react_create_element_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "createElement", importer)
}

pub fn is_react_clone_element_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "cloneElement", importer)
}

pub fn is_react_forward_ref_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "forwardRef", importer)
}

pub fn is_react_memo_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "memo", importer)
}

/// `React.Children.only(...)` / `Children.only(...)`.
pub fn is_react_children_element_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    let path = path.unwrap_parens();
    if !path.is("call_expression") {
        return false;
    }
    let Some(callee) = path.get("function") else {
        return false;
    };
    if !callee.is("member_expression") || callee.get("property").is_none_or(|p| p.text() != "only") {
        return false;
    }
    callee
        .get("object")
        .is_some_and(|object| refers_to_react_export(object, &["Children"], importer))
}

/// `Component` / `PureComponent` from the framework module.
pub fn is_react_component_superclass<'a>(superclass: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    refers_to_react_export(superclass, &["Component", "PureComponent"], importer)
}
