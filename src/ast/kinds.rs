//! Grouping of TSX grammar node kinds into the categories the resolvers
//! dispatch on.

use super::NodePath;

pub const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "arrow_function",
    "generator_function",
    "generator_function_declaration",
    "method_definition",
];

pub const CLASS_KINDS: &[&str] = &["class_declaration", "class", "abstract_class_declaration"];

pub const JSX_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

/// Wrappers that only change the static type of an expression.
pub const TYPE_CAST_KINDS: &[&str] = &[
    "as_expression",
    "satisfies_expression",
    "non_null_expression",
    "type_assertion",
];

pub const LITERAL_KINDS: &[&str] = &[
    "string",
    "number",
    "true",
    "false",
    "null",
    "undefined",
    "template_string",
    "regex",
];

pub fn is_function(path: &NodePath) -> bool {
    path.is_any(FUNCTION_KINDS)
}

pub fn is_class(path: &NodePath) -> bool {
    path.is_any(CLASS_KINDS)
}

pub fn is_jsx(path: &NodePath) -> bool {
    path.is_any(JSX_KINDS)
}

pub fn is_literal(path: &NodePath) -> bool {
    path.is_any(LITERAL_KINDS)
}

pub fn is_identifier(path: &NodePath) -> bool {
    path.is_any(&[
        "identifier",
        "property_identifier",
        "shorthand_property_identifier",
        "shorthand_property_identifier_pattern",
        "type_identifier",
    ])
}

pub fn is_member_expression(path: &NodePath) -> bool {
    path.is_any(&["member_expression", "subscript_expression"])
}

/// Nodes that declare something worth documenting members on.
pub fn is_supported_definition(path: &NodePath) -> bool {
    path.is("object") || path.is("call_expression") || is_class(path) || is_function(path)
}

/// Statements and expressions that introduce branching or repetition. Shallow
/// walks stop at these.
pub const CONTROL_FLOW_KINDS: &[&str] = &[
    "if_statement",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
    "try_statement",
    "ternary_expression",
];

/// Type-level declarations that live in the same namespace lookup as values.
pub const TYPE_DECLARATION_KINDS: &[&str] = &[
    "type_alias_declaration",
    "interface_declaration",
    "enum_declaration",
];
