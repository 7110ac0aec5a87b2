//! Static value resolution: from any reference to the node that produced it.

use crate::ast::kinds::{is_class, is_function, is_supported_definition, CONTROL_FLOW_KINDS, TYPE_CAST_KINDS};
use crate::ast::names::{get_property_name, string_value};
use crate::ast::scope::{binding_of, Binding, BindingKind};
use crate::ast::NodePath;
use crate::importer::{Importer, DEFAULT_EXPORT};
use crate::members::get_member_value_path;
use std::cell::Cell;
use tracing::{debug, trace};

/// Default cap on nested resolution steps.
pub const DEFAULT_MAX_DEPTH: usize = 512;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_DEPTH) };
}

/// Run `f` with a different resolution depth cap on this thread.
pub fn with_max_depth<T>(max_depth: usize, f: impl FnOnce() -> T) -> T {
    let previous = MAX_DEPTH.with(|cell| cell.replace(max_depth));
    let result = f();
    MAX_DEPTH.with(|cell| cell.set(previous));
    result
}

struct DepthGuard;

impl DepthGuard {
    fn enter() -> Option<Self> {
        let depth = DEPTH.with(|cell| cell.get());
        if depth >= MAX_DEPTH.with(|cell| cell.get()) {
            return None;
        }
        DEPTH.with(|cell| cell.set(depth + 1));
        Some(DepthGuard)
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|cell| cell.set(cell.get().saturating_sub(1)));
    }
}

/// One step of a static member access: `.name` or `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKey {
    Name(String),
    Index(usize),
}

impl MemberKey {
    fn as_name(&self) -> String {
        match self {
            MemberKey::Name(name) => name.clone(),
            MemberKey::Index(index) => index.to_string(),
        }
    }
}

/// Follow `path` to the node that actually produces its value.
///
/// Never fails: whatever cannot be followed further is returned as-is, so
/// the result is always a fixed point (`resolve(resolve(p)) == resolve(p)`).
pub fn resolve_to_value<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> NodePath<'a> {
    let Some(_guard) = DepthGuard::enter() else {
        debug!(?path, "resolution depth exceeded");
        return path;
    };
    let path = path.unwrap_parens();
    trace!(?path, "resolve");

    match path.kind() {
        "variable_declarator" => match path.get("value") {
            Some(value) => resolve_to_value(value, importer),
            None => path,
        },
        "member_expression" | "subscript_expression" => {
            resolve_member_expression(path, importer).unwrap_or(path)
        }
        "import_specifier" | "namespace_import" | "import_clause" => path
            .ancestors()
            .find(|a| a.is("import_statement"))
            .unwrap_or(path),
        "assignment_expression" => match path.get("right") {
            Some(right) => resolve_to_value(right, importer),
            None => path,
        },
        kind if TYPE_CAST_KINDS.contains(&kind) => match path.children().into_iter().next() {
            Some(inner) => resolve_to_value(inner, importer),
            None => path,
        },
        "identifier" | "shorthand_property_identifier" | "type_identifier" => {
            resolve_identifier(path, importer)
        }
        _ => path,
    }
}

fn resolve_identifier<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> NodePath<'a> {
    // The name of a class or function resolves to the declaration itself.
    if let Some(parent) = path.parent() {
        if (is_class(&parent) || is_function(&parent)) && path.is_field_of_parent("name") {
            return parent;
        }
    }

    let Some(binding) = binding_of(&path) else {
        return path;
    };

    if matches!(
        binding.kind,
        BindingKind::Var | BindingKind::Let | BindingKind::Param | BindingKind::CatchParam
    ) {
        if let Some(assigned) = find_last_assigned_value(binding.scope, path.text(), &path) {
            return resolve_to_value(assigned, importer);
        }
    }

    match binding.kind {
        BindingKind::Import => resolve_import(&binding, importer),
        BindingKind::Function | BindingKind::Class | BindingKind::Type => binding.declaration,
        BindingKind::Var | BindingKind::Let | BindingKind::Const => {
            resolve_declarator(&binding, path, importer)
        }
        BindingKind::Param | BindingKind::CatchParam => binding.identifier,
    }
}

fn resolve_import<'a>(binding: &Binding<'a>, importer: &'a dyn Importer) -> NodePath<'a> {
    let statement = binding.declaration;
    let Some(parent) = binding.identifier.parent() else {
        return statement;
    };

    let imported = match parent.kind() {
        "import_specifier" => parent
            .get("name")
            .map(|name| string_value(&name).unwrap_or_else(|| name.text().to_string())),
        "import_clause" => Some(DEFAULT_EXPORT.to_string()),
        // namespace imports are resolved member by member
        _ => None,
    };

    match imported.and_then(|name| importer.import(statement, &name)) {
        Some(resolved) => resolve_to_value(resolved, importer),
        None => statement,
    }
}

fn resolve_declarator<'a>(
    binding: &Binding<'a>,
    path: NodePath<'a>,
    importer: &'a dyn Importer,
) -> NodePath<'a> {
    let declarator = binding.declaration;
    if !declarator.is("variable_declarator") {
        return binding.identifier;
    }
    let Some(pattern) = declarator.get("name") else {
        return path;
    };

    if pattern == binding.identifier {
        return match declarator.get("value") {
            Some(value) => resolve_to_value(value, importer),
            None => binding.identifier,
        };
    }

    // `{a: {b}} = x` is `x.a.b`
    let Some(value) = declarator.get("value") else {
        return path;
    };
    match pattern_member_chain(&pattern, &binding.identifier) {
        Some(chain) => resolve_member_chain(value, &chain, importer).unwrap_or(path),
        None => path,
    }
}

/// The expression a destructured name reads from, and the keys leading to
/// it: `var {foo: {bar: baz}} = bar; baz` gives `bar` and `[foo, bar]`.
///
/// Used when the source cannot be resolved to a literal, so the name is
/// still known to be `bar.foo.bar`. Nested destructurings of such values
/// are joined into one chain.
pub fn resolve_destructured<'a>(
    path: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Option<(NodePath<'a>, Vec<MemberKey>)> {
    let _guard = DepthGuard::enter()?;
    if !path.is_any(&["identifier", "shorthand_property_identifier", "jsx_identifier"]) {
        return None;
    }
    let binding = binding_of(&path)?;
    if !matches!(binding.kind, BindingKind::Var | BindingKind::Let | BindingKind::Const) {
        return None;
    }
    let declarator = binding.declaration;
    if !declarator.is("variable_declarator") {
        return None;
    }
    let pattern = declarator.get("name")?;
    if pattern == binding.identifier {
        return None;
    }
    let chain = pattern_member_chain(&pattern, &binding.identifier)?;
    let root = resolve_to_value(declarator.get("value")?, importer);

    match resolve_destructured(root, importer) {
        Some((outer_root, mut outer_chain)) => {
            outer_chain.extend(chain);
            Some((outer_root, outer_chain))
        }
        None => Some((root, chain)),
    }
}

/// Keys leading from a destructuring pattern's root to `identifier`.
/// `None` for rest elements, which have no single source member.
pub fn pattern_member_chain(pattern: &NodePath, identifier: &NodePath) -> Option<Vec<MemberKey>> {
    let mut chain = Vec::new();
    let mut current = *identifier;

    while current != *pattern {
        let parent = current.parent()?;
        match parent.kind() {
            "pair_pattern" => {
                if current.is_field_of_parent("value") {
                    let key = parent.get("key")?;
                    let name = match key.kind() {
                        "property_identifier" | "number" => key.text().to_string(),
                        "string" => string_value(&key)?,
                        _ => return None,
                    };
                    chain.push(MemberKey::Name(name));
                }
            }
            "object_pattern" => {
                if current.is("shorthand_property_identifier_pattern") {
                    chain.push(MemberKey::Name(current.text().to_string()));
                }
            }
            "object_assignment_pattern" => {
                if current.is_field_of_parent("left") {
                    chain.push(MemberKey::Name(current.text().to_string()));
                }
            }
            "array_pattern" => {
                chain.push(MemberKey::Index(element_index(&parent, &current)?));
            }
            "assignment_pattern" => {}
            _ => return None,
        }
        current = parent;
    }

    chain.reverse();
    Some(chain)
}

/// Position of `element` in an array literal or pattern, counting holes.
fn element_index(array: &NodePath, element: &NodePath) -> Option<usize> {
    let mut index = 0;
    for child in array.all_children() {
        if child == *element {
            return Some(index);
        }
        if child.is(",") {
            index += 1;
        }
    }
    None
}

fn element_at<'a>(array: &NodePath<'a>, index: usize) -> Option<NodePath<'a>> {
    let mut position = 0;
    for child in array.all_children() {
        match child.kind() {
            "," => position += 1,
            "[" | "]" | "comment" => {}
            _ if position == index => return Some(child),
            _ => {}
        }
    }
    None
}

/// Resolve `root`, then walk `chain` through object literals, arrays, class
/// or function statics and namespace imports.
pub fn resolve_member_chain<'a>(
    root: NodePath<'a>,
    chain: &[MemberKey],
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let mut current = resolve_to_value(root, importer);

    for key in chain {
        let next = match (current.kind(), key) {
            ("object", _) => find_object_property(current, &key.as_name(), importer)?,
            ("array", MemberKey::Index(index)) => element_at(&current, *index)?,
            ("import_statement", _) if has_namespace_import(&current) => {
                importer.import(current, &key.as_name())?
            }
            _ if is_supported_definition(&current) => {
                get_member_value_path(current, &key.as_name(), importer).ok().flatten()?
            }
            _ => return None,
        };
        current = resolve_to_value(next, importer);
    }
    Some(current)
}

/// `import * as ns from '...'`: members of `ns` are the module's exports.
fn has_namespace_import(statement: &NodePath) -> bool {
    statement
        .child_of_kind("import_clause")
        .is_some_and(|clause| clause.child_of_kind("namespace_import").is_some())
}

/// The value stored under `name` in an object literal: the value of a pair,
/// the method itself, or the identifier of a shorthand property. The last
/// matching property wins, as at runtime.
pub fn find_object_property<'a>(
    object: NodePath<'a>,
    name: &str,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    object
        .children()
        .into_iter()
        .filter(|property| {
            property.is_any(&["pair", "method_definition", "shorthand_property_identifier"])
        })
        .filter(|property| get_property_name(property, importer).as_deref() == Some(name))
        .last()
        .map(|property| match property.kind() {
            "pair" => property.get("value").unwrap_or(property),
            _ => property,
        })
}

fn resolve_member_expression<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    let mut chain = Vec::new();
    let mut current = path;

    loop {
        match current.kind() {
            "member_expression" => {
                let property = current.get("property")?;
                chain.push(MemberKey::Name(property.text().to_string()));
            }
            "subscript_expression" => {
                let index = resolve_to_value(current.get("index")?, importer);
                let key = match index.kind() {
                    "string" | "template_string" => MemberKey::Name(string_value(&index)?),
                    "number" => match index.text().parse::<usize>() {
                        Ok(position) => MemberKey::Index(position),
                        Err(_) => MemberKey::Name(index.text().to_string()),
                    },
                    _ => return None,
                };
                chain.push(key);
            }
            _ => break,
        }
        current = current.get("object")?.unwrap_parens();
    }

    chain.reverse();
    resolve_member_chain(current, &chain, importer)
}

/// Last plain `name = value` assignment in `scope`, not looking inside nested
/// functions, classes, conditionals or loops. Assignments whose right-hand
/// side contains `target` are skipped, so `foo = wrap(foo)` never resolves
/// `foo` to itself.
pub fn find_last_assigned_value<'a>(
    scope: NodePath<'a>,
    name: &str,
    target: &NodePath<'a>,
) -> Option<NodePath<'a>> {
    let mut last = None;
    for child in scope.children() {
        collect_assignments(child, name, target, &mut last);
    }
    last
}

fn collect_assignments<'a>(
    node: NodePath<'a>,
    name: &str,
    target: &NodePath<'a>,
    last: &mut Option<NodePath<'a>>,
) {
    if is_function(&node) || is_class(&node) || node.is_any(CONTROL_FLOW_KINDS) {
        return;
    }

    for child in node.children() {
        collect_assignments(child, name, target, last);
    }

    if node.is("assignment_expression") {
        let assigns_name = node
            .get("left")
            .is_some_and(|left| left.is("identifier") && left.text() == name);
        if let (true, Some(right)) = (assigns_name, node.get("right")) {
            if !right.contains(target) {
                *last = Some(right);
            }
        }
    }
}
