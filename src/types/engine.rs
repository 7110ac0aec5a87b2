//! Type-annotation resolution shared by both annotation syntaxes.
//!
//! The algorithm is the same for Flow and TypeScript; what differs is which
//! generic names are built in (array aliases, transparent wrappers, key
//! operators, framework types). Those differences live behind [`Dialect`].

use super::cache::TypeCache;
use super::descriptor::{FunctionArgument, FunctionSignature, ObjectSignature, PropertyEntry, PropertyKey, TypeDescriptor};
use super::annotation::{object_type_spread, spread_declaration};
use super::params::TypeParameters;
use crate::ast::kinds::{is_class, is_function};
use crate::ast::names::{get_name, get_parameter_name, key_name, string_value};
use crate::ast::scope::binding_of;
use crate::ast::{NodePath, PathKey};
use crate::importer::Importer;
use crate::resolve::{resolve_object_to_name_array, resolve_to_value};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, trace};

/// What one annotation syntax treats as built in.
pub trait Dialect {
    /// Short name used in log events.
    fn label(&self) -> &'static str;

    /// Generic names meaning "array of T".
    fn is_array_generic(&self, name: &str) -> bool;

    /// Wrappers that only change exactness or mutability: `Wrapper<T>` is `T`.
    fn is_transparent_utility(&self, name: &str) -> bool;

    /// Generic form of the key-union operator (`$Keys<T>`).
    fn is_keys_utility(&self, name: &str) -> bool;

    /// Other generics kept by name with their arguments as elements.
    fn is_element_generic(&self, name: &str) -> bool;

    /// Members of the framework namespace (`React.X`) kept by name.
    fn framework_types(&self) -> &'static [&'static str];

    /// Whether `?T` marks a nullable type.
    fn supports_maybe(&self) -> bool;

    /// Whether a function type parameter without an annotation is itself
    /// the type (`(string, number) => void`).
    fn allows_unnamed_parameters(&self) -> bool {
        false
    }

    /// Spelling of a bare keyword-like identifier, if it is one.
    fn builtin_name(&self, _name: &str) -> Option<&'static str> {
        None
    }
}

/// Namespace whose members may be recorded without resolution.
const FRAMEWORK_NAMESPACE: &str = "React";

/// One top-level type resolution. Owns the alias cache, so nothing is shared
/// between independent calls.
pub struct TypeResolver<'a, D> {
    dialect: D,
    importer: &'a dyn Importer,
    cache: TypeCache,
}

impl<'a, D: Dialect> TypeResolver<'a, D> {
    pub fn new(dialect: D, importer: &'a dyn Importer) -> Self {
        Self {
            dialect,
            importer,
            cache: TypeCache::new(),
        }
    }

    pub fn resolve(&mut self, path: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> TypeDescriptor {
        trace!(dialect = self.dialect.label(), ?path, "resolve type");
        match path.kind() {
            "type_annotation"
            | "opting_type_annotation"
            | "omitting_type_annotation"
            | "parenthesized_type"
            | "readonly_type" => match first_child(&path) {
                Some(inner) => self.resolve(inner, params),
                None => TypeDescriptor::unknown(),
            },
            "predefined_type" => TypeDescriptor::simple(path.text()),
            "literal_type" => literal(&path),
            "template_literal_type" => TypeDescriptor::literal(path.text()),
            "this_type" => TypeDescriptor::simple("this"),
            "existential_type" => TypeDescriptor::simple("*"),
            "type_identifier" | "nested_type_identifier" => self.reference(path, path, &[], params),
            "generic_type" => {
                let Some(name) = path.get("name") else {
                    return TypeDescriptor::unknown();
                };
                let arguments = path
                    .get("type_arguments")
                    .map(|args| args.children())
                    .unwrap_or_default();
                self.reference(path, name, &arguments, params)
            }
            "array_type" => {
                let element = match first_child(&path) {
                    Some(inner) => self.resolve(inner, params),
                    None => TypeDescriptor::unknown(),
                };
                TypeDescriptor::elements("Array", vec![element], path.text())
            }
            "tuple_type" => {
                let elements = path
                    .children()
                    .into_iter()
                    .map(|member| self.tuple_member(member, params))
                    .collect();
                TypeDescriptor::elements("tuple", elements, path.text())
            }
            "union_type" => {
                let elements = self.flattened(path, "union_type", params);
                TypeDescriptor::elements("union", elements, path.text())
            }
            "intersection_type" => {
                let elements = self.flattened(path, "intersection_type", params);
                TypeDescriptor::elements("intersection", elements, path.text())
            }
            "function_type" | "constructor_type" | "method_signature" => {
                let signature = self.function_signature(path, params);
                TypeDescriptor::function(signature, path.text())
            }
            "object_type" | "interface_body" => {
                let signature = self.object_signature(path, params);
                TypeDescriptor::object(signature, path.text())
            }
            "flow_maybe_type" if self.dialect.supports_maybe() => match first_child(&path) {
                Some(inner) => self.resolve(inner, params).with_nullable(true),
                None => TypeDescriptor::unknown(),
            },
            "index_type_query" => {
                let keys = first_child(&path).and_then(|target| self.keys(target, path.text(), params));
                keys.unwrap_or_else(|| TypeDescriptor::simple(path.text()))
            }
            "lookup_type" => self.indexed_access(path, params),
            "type_query" => self.type_of(path, params),
            _ => {
                debug!(dialect = self.dialect.label(), kind = path.kind(), "unsupported type node");
                TypeDescriptor::unknown()
            }
        }
    }

    /// A named type, with optional type arguments.
    fn reference(
        &mut self,
        path: NodePath<'a>,
        name_node: NodePath<'a>,
        arguments: &[NodePath<'a>],
        params: &Rc<TypeParameters<'a>>,
    ) -> TypeDescriptor {
        let name = name_node.text();
        let raw = path.text();

        if name_node.is_any(&["type_identifier", "identifier"]) {
            if let Some(bound) = params.get(name).cloned() {
                return self.resolve(bound.node, &bound.scope);
            }
        }

        if self.dialect.is_array_generic(name) {
            return match arguments {
                [] => TypeDescriptor::simple("Array"),
                _ => TypeDescriptor::elements("Array", self.resolve_all(arguments, params), raw),
            };
        }
        if self.dialect.is_transparent_utility(name) {
            if let [inner] = arguments {
                return self.resolve(*inner, params);
            }
        }
        if self.dialect.is_keys_utility(name) {
            if let [target] = arguments {
                if let Some(keys) = self.keys(*target, raw, params) {
                    return keys;
                }
            }
            return self.named(name, arguments, raw, params);
        }
        if self.dialect.is_element_generic(name) {
            return self.named(name, arguments, raw, params);
        }

        if name_node.is("nested_type_identifier") {
            let (Some(module), Some(member)) = (name_node.get("module"), name_node.get("name")) else {
                return TypeDescriptor::unknown();
            };
            let display = format!("{}{}", module.text(), member.text());
            if module.text() == FRAMEWORK_NAMESPACE && self.dialect.framework_types().contains(&member.text()) {
                return self.qualified(&display, arguments, raw, params);
            }
            return match self.namespace_member(module, member.text()) {
                Some(declaration) if is_type_declaration(&declaration) => {
                    self.declaration(declaration, arguments, raw, params)
                }
                _ => self.qualified(&display, arguments, raw, params),
            };
        }

        let declaration = resolve_to_value(name_node, self.importer);
        if is_type_declaration(&declaration) {
            return self.declaration(declaration, arguments, raw, params);
        }
        if declaration == name_node && arguments.is_empty() {
            if let Some(builtin) = self.dialect.builtin_name(name) {
                return TypeDescriptor::simple(builtin);
            }
        }
        self.named(name, arguments, raw, params)
    }

    /// Resolve an alias or interface declaration, cutting off cycles.
    fn declaration(
        &mut self,
        declaration: NodePath<'a>,
        arguments: &[NodePath<'a>],
        raw: &str,
        params: &Rc<TypeParameters<'a>>,
    ) -> TypeDescriptor {
        let Some(name) = declaration.get("name").map(|n| n.text()) else {
            return TypeDescriptor::unknown();
        };
        if self.cache.is_in_progress(name) {
            debug!(dialect = self.dialect.label(), alias = name, "recursive type alias");
            return TypeDescriptor::simple(name);
        }

        let declared = declaration.get("type_parameters");
        let generic = declared.is_some() || !arguments.is_empty();
        if !generic {
            if let Some(done) = self.cache.resolved(name) {
                return done.clone();
            }
        }

        self.cache.start(name);
        let scope = TypeParameters::bind(declared, arguments, params);
        let descriptor = match declaration.kind() {
            "type_alias_declaration" => match declaration.get("value") {
                Some(value) => self.resolve(value, &scope),
                None => TypeDescriptor::unknown(),
            },
            "interface_declaration" => self.interface(declaration, &scope),
            _ => self.named(name, arguments, raw, params),
        };

        if generic {
            self.cache.release(name);
        } else {
            self.cache.finish(name, descriptor.clone());
        }
        descriptor
    }

    fn interface(&mut self, declaration: NodePath<'a>, scope: &Rc<TypeParameters<'a>>) -> TypeDescriptor {
        let Some(body) = declaration.get("body") else {
            return TypeDescriptor::unknown();
        };
        let own = self.object_signature(body, scope);

        // members of extended interfaces come first
        let mut signature = ObjectSignature::default();
        for clause in declaration.children().into_iter().filter(|c| c.is("extends_type_clause")) {
            for parent in clause.children() {
                let inherited = self.resolve(parent, scope);
                if let Some(object) = inherited.object_signature() {
                    signature.properties.extend(object.properties.iter().cloned());
                    if signature.constructor.is_none() {
                        signature.constructor = object.constructor.clone();
                    }
                }
            }
        }
        for property in own.properties {
            merge_property(&mut signature, property);
        }
        if own.constructor.is_some() {
            signature.constructor = own.constructor;
        }
        TypeDescriptor::object(signature, body.text())
    }

    fn object_signature(&mut self, body: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> ObjectSignature {
        let mut signature = ObjectSignature::default();
        for member in body.children() {
            if let Some(name) = object_type_spread(&member) {
                self.spread_into(&mut signature, name, params);
                continue;
            }
            match member.kind() {
                "property_signature" => {
                    let Some(key) = member.get("name").and_then(|k| key_name(&k, self.importer)) else {
                        continue;
                    };
                    let value = match member.get("type") {
                        Some(annotation) => self.resolve(annotation, params),
                        None => TypeDescriptor::unknown(),
                    };
                    let required = !member.has_token("?");
                    signature.properties.push(PropertyEntry::named(key, value.with_required(required)));
                }
                "method_signature" => {
                    let Some(key) = member.get("name").and_then(|k| key_name(&k, self.importer)) else {
                        continue;
                    };
                    let function = self.function_signature(member, params);
                    let value = TypeDescriptor::function(function, member.text()).with_required(!member.has_token("?"));
                    signature.properties.push(PropertyEntry::named(key, value));
                }
                "index_signature" => {
                    let key = match member.get("index_type") {
                        Some(index) => self.resolve(index, params),
                        None => TypeDescriptor::unknown(),
                    };
                    let value = match member.get("type") {
                        Some(value) => self.resolve(value, params),
                        None => TypeDescriptor::unknown(),
                    };
                    signature.properties.push(PropertyEntry {
                        key: PropertyKey::Type(Box::new(key)),
                        value: value.with_required(true),
                    });
                }
                "call_signature" | "construct_signature" => {
                    signature.constructor = Some(self.function_signature(member, params));
                }
                _ => {}
            }
        }
        signature
    }

    /// Merge the properties of the object type named by a spread.
    fn spread_into(&mut self, signature: &mut ObjectSignature, name: NodePath<'a>, params: &Rc<TypeParameters<'a>>) {
        let spread = match params.get(name.text()).cloned() {
            Some(bound) => self.resolve(bound.node, &bound.scope),
            None => match spread_declaration(name, self.importer) {
                Some(declaration) => self.resolve_spread_declaration(declaration, name.text(), params),
                None => TypeDescriptor::unknown(),
            },
        };
        match spread.object_signature() {
            Some(object) => {
                for property in object.properties.iter().cloned() {
                    merge_property(signature, property);
                }
            }
            None => debug!(dialect = self.dialect.label(), spread = name.text(), "spread of a non-object type"),
        }
    }

    fn resolve_spread_declaration(
        &mut self,
        declaration: NodePath<'a>,
        raw: &str,
        params: &Rc<TypeParameters<'a>>,
    ) -> TypeDescriptor {
        if declaration.is("object_type") {
            return self.resolve(declaration, params);
        }
        self.declaration(declaration, &[], raw, params)
    }

    fn function_signature(&mut self, node: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> FunctionSignature {
        let mut arguments = Vec::new();
        let mut this = None;

        let parameters = node.get("parameters").map(|p| p.children()).unwrap_or_default();
        for parameter in parameters {
            if !parameter.is_any(&["required_parameter", "optional_parameter"]) {
                continue;
            }
            let Some(pattern) = parameter.get("pattern") else {
                continue;
            };
            let ty = parameter.get("type").map(|t| self.resolve(t, params));
            if ty.is_none() && pattern.is("identifier") && self.dialect.allows_unnamed_parameters() {
                let ty = self.reference(pattern, pattern, &[], params);
                arguments.push(FunctionArgument {
                    name: String::new(),
                    ty: Some(ty),
                    rest: None,
                });
                continue;
            }
            if pattern.is("this") {
                this = ty.map(Box::new);
                continue;
            }
            let name = get_parameter_name(&pattern).unwrap_or_else(|_| pattern.text().to_string());
            let (name, rest) = match name.strip_prefix("...") {
                Some(stripped) => (stripped.to_string(), Some(true)),
                None => (name, None),
            };
            arguments.push(FunctionArgument { name, ty, rest });
        }

        let return_type = match node.get("return_type").or_else(|| node.get("type")) {
            Some(ret) => self.resolve(ret, params),
            None => TypeDescriptor::unknown(),
        };
        FunctionSignature {
            arguments,
            return_type: Box::new(return_type),
            this,
        }
    }

    fn tuple_member(&mut self, member: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> TypeDescriptor {
        match member.kind() {
            "required_parameter" | "optional_parameter" | "tuple_parameter" | "optional_tuple_parameter" => {
                match member.get("type") {
                    Some(ty) => self.resolve(ty, params),
                    None => TypeDescriptor::unknown(),
                }
            }
            "optional_type" | "rest_type" => match first_child(&member) {
                Some(inner) => self.resolve(inner, params),
                None => TypeDescriptor::unknown(),
            },
            _ => self.resolve(member, params),
        }
    }

    /// Members of a left-nested `A | B | C` chain, in source order.
    fn flattened(&mut self, path: NodePath<'a>, kind: &str, params: &Rc<TypeParameters<'a>>) -> Vec<TypeDescriptor> {
        let mut members = Vec::new();
        collect_chain(path, kind, &mut members);
        self.resolve_all(&members, params)
    }

    fn resolve_all(&mut self, paths: &[NodePath<'a>], params: &Rc<TypeParameters<'a>>) -> Vec<TypeDescriptor> {
        paths.iter().map(|p| self.resolve(*p, params)).collect()
    }

    fn named(
        &mut self,
        name: &str,
        arguments: &[NodePath<'a>],
        raw: &str,
        params: &Rc<TypeParameters<'a>>,
    ) -> TypeDescriptor {
        if arguments.is_empty() {
            TypeDescriptor::simple(name)
        } else {
            TypeDescriptor::elements(name, self.resolve_all(arguments, params), raw)
        }
    }

    fn qualified(
        &mut self,
        display: &str,
        arguments: &[NodePath<'a>],
        raw: &str,
        params: &Rc<TypeParameters<'a>>,
    ) -> TypeDescriptor {
        self.named(display, arguments, raw, params).with_raw(raw)
    }

    /// `ns.Member` where `ns` is a namespace import.
    fn namespace_member(&self, module: NodePath<'a>, member: &str) -> Option<NodePath<'a>> {
        let statement = resolve_to_value(module, self.importer);
        if !statement.is("import_statement") {
            return None;
        }
        let exported = self.importer.import(statement, member)?;
        Some(resolve_to_value(exported, self.importer))
    }

    /// Union of the literal key names of `target`, or `None` when its keys
    /// cannot be enumerated statically.
    fn keys(&mut self, target: NodePath<'a>, raw: &str, params: &Rc<TypeParameters<'a>>) -> Option<TypeDescriptor> {
        let object = self.object_node(target, params)?;
        let names = resolve_object_to_name_array(object, self.importer, true)?;
        let elements = names.into_iter().map(TypeDescriptor::literal).collect();
        Some(TypeDescriptor::elements("union", elements, raw))
    }

    /// Follow a type or `typeof` target to the object literal, object type
    /// or interface body that defines its members.
    fn object_node(&self, target: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> Option<NodePath<'a>> {
        let mut seen: HashSet<PathKey> = HashSet::new();
        let mut current = target;
        loop {
            if !seen.insert(current.key()) {
                return None;
            }
            current = match current.kind() {
                "object" | "object_type" | "interface_body" => return Some(current),
                "type_annotation" | "parenthesized_type" | "readonly_type" | "type_query" => first_child(&current)?,
                "type_alias_declaration" => current.get("value")?,
                "interface_declaration" => current.get("body")?,
                "variable_declarator" => current.get("value")?,
                "type_identifier" => match params.get(current.text()) {
                    Some(bound) => bound.node,
                    None => resolve_to_value(current, self.importer),
                },
                "generic_type" => {
                    let name = current.get("name")?;
                    let arguments = current.get("type_arguments").map(|a| a.children()).unwrap_or_default();
                    match arguments.as_slice() {
                        [inner] if self.dialect.is_transparent_utility(name.text()) => *inner,
                        _ => resolve_to_value(name, self.importer),
                    }
                }
                _ => {
                    let resolved = resolve_to_value(current, self.importer);
                    if resolved == current {
                        return None;
                    }
                    resolved
                }
            };
        }
    }

    /// `T["key"]`, and `(typeof list)[number]` over array literals.
    fn indexed_access(&mut self, path: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> TypeDescriptor {
        let fallback = || TypeDescriptor::simple(path.text());
        let children = path.children();
        let [object, index] = children[..] else {
            return fallback();
        };

        if let Some(elements) = self.array_elements(object, index) {
            return elements;
        }

        let key = match index.kind() {
            "literal_type" => first_child(&index).and_then(|literal| string_value(&literal)),
            _ => None,
        };
        let Some(key) = key else {
            return fallback();
        };
        let Some(body) = self.object_node(object, params) else {
            return fallback();
        };
        let property = body.children().into_iter().find(|member| {
            member.is("property_signature")
                && member
                    .get("name")
                    .and_then(|name| key_name(&name, self.importer))
                    .is_some_and(|name| name == key)
        });
        match property.and_then(|p| p.get("type")) {
            Some(ty) => self.resolve(ty, params),
            None => fallback(),
        }
    }

    /// Element types of an array literal reached through `typeof`, indexed
    /// by `number` (all elements) or by a numeric literal (one element).
    fn array_elements(&mut self, object: NodePath<'a>, index: NodePath<'a>) -> Option<TypeDescriptor> {
        let mut target = object;
        while target.is("parenthesized_type") {
            target = first_child(&target)?;
        }
        if !target.is("type_query") {
            return None;
        }
        let array = resolve_to_value(first_child(&target)?, self.importer);
        self.index_array(array, index, object.parent().map(|p| p.text()).unwrap_or_default())
    }

    fn index_array(&mut self, array: NodePath<'a>, index: NodePath<'a>, raw: &str) -> Option<TypeDescriptor> {
        if !array.is("array") {
            return None;
        }
        let elements: Vec<TypeDescriptor> = array.children().iter().map(value_type).collect();
        match index.kind() {
            "predefined_type" if index.text() == "number" => Some(TypeDescriptor::elements("union", elements, raw)),
            "number" | "literal_type" => {
                let position: usize = index.text().parse().ok()?;
                elements.into_iter().nth(position)
            }
            _ => None,
        }
    }

    /// `typeof x`: the declared type of `x` when it has one, otherwise the
    /// type of the value it resolves to.
    fn type_of(&mut self, path: NodePath<'a>, params: &Rc<TypeParameters<'a>>) -> TypeDescriptor {
        let Some(expression) = first_child(&path) else {
            return TypeDescriptor::unknown();
        };

        if expression.is("subscript_expression") {
            if let (Some(object), Some(index)) = (expression.get("object"), expression.get("index")) {
                let array = resolve_to_value(object, self.importer);
                if let Some(elements) = self.index_array(array, index, path.text()) {
                    return elements;
                }
            }
        }

        if expression.is("identifier") {
            let annotation = binding_of(&expression)
                .filter(|binding| binding.declaration.is("variable_declarator"))
                .and_then(|binding| binding.declaration.get("type"));
            if let Some(annotation) = annotation {
                return self.resolve(annotation, params);
            }
        }

        let value = resolve_to_value(expression, self.importer);
        if is_class(&value) || is_function(&value) {
            let name = get_name(&value).unwrap_or_else(|| expression.text().to_string());
            return TypeDescriptor::simple(name);
        }
        match value.kind() {
            "string" | "number" | "true" | "false" | "template_string" => value_type(&value),
            _ => TypeDescriptor::simple(expression.text()),
        }
    }
}

fn first_child<'a>(path: &NodePath<'a>) -> Option<NodePath<'a>> {
    path.children().into_iter().next()
}

fn is_type_declaration(path: &NodePath) -> bool {
    path.is_any(&["type_alias_declaration", "interface_declaration"])
}

fn collect_chain<'a>(path: NodePath<'a>, kind: &str, members: &mut Vec<NodePath<'a>>) {
    for child in path.children() {
        if child.is(kind) {
            collect_chain(child, kind, members);
        } else {
            members.push(child);
        }
    }
}

/// Literal text is kept verbatim; `null` and `undefined` are plain names.
fn literal(path: &NodePath) -> TypeDescriptor {
    match first_child(path).map(|inner| inner.kind()) {
        Some("null") => TypeDescriptor::simple("null"),
        Some("undefined") => TypeDescriptor::simple("undefined"),
        _ => TypeDescriptor::literal(path.text()),
    }
}

/// Type of an expression appearing as an array element.
fn value_type(value: &NodePath) -> TypeDescriptor {
    match value.kind() {
        "string" | "number" | "true" | "false" | "template_string" => TypeDescriptor::literal(value.text()),
        "null" => TypeDescriptor::simple("null"),
        "undefined" => TypeDescriptor::simple("undefined"),
        _ => TypeDescriptor::unknown(),
    }
}

/// Add `property`, replacing an earlier property with the same name in place.
fn merge_property(signature: &mut ObjectSignature, property: PropertyEntry) {
    let existing = signature
        .properties
        .iter()
        .position(|p| p.key_name().is_some() && p.key_name() == property.key_name());
    match existing {
        Some(index) => signature.properties[index] = property,
        None => signature.properties.push(property),
    }
}
