//! Generic type parameter bindings.

use crate::ast::NodePath;
use std::collections::HashMap;
use std::rc::Rc;

/// The type a parameter is bound to, together with the bindings that were in
/// effect where that type was written.
#[derive(Debug, Clone)]
pub struct BoundType<'a> {
    pub node: NodePath<'a>,
    pub scope: Rc<TypeParameters<'a>>,
}

/// Parameter name to bound type, for one generic instantiation.
#[derive(Debug, Clone, Default)]
pub struct TypeParameters<'a> {
    bindings: HashMap<String, BoundType<'a>>,
}

impl<'a> TypeParameters<'a> {
    pub fn empty() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn get(&self, name: &str) -> Option<&BoundType<'a>> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind the parameters declared by `declared` (a `type_parameters` node)
    /// positionally to `arguments`. A missing argument falls back to the
    /// parameter's default, if any; otherwise the parameter stays unbound.
    pub fn bind(
        declared: Option<NodePath<'a>>,
        arguments: &[NodePath<'a>],
        outer: &Rc<TypeParameters<'a>>,
    ) -> Rc<Self> {
        let Some(declared) = declared else {
            return outer.clone();
        };

        let mut bindings = HashMap::new();
        let parameters = declared
            .children()
            .into_iter()
            .filter(|p| p.is("type_parameter"));
        for (index, parameter) in parameters.enumerate() {
            let Some(name) = parameter.get("name") else {
                continue;
            };
            let bound = match arguments.get(index) {
                Some(argument) => Some(substitute(*argument, outer)),
                None => parameter
                    .get("value")
                    .and_then(|default| default.children().into_iter().next())
                    .map(|default| substitute(default, outer)),
            };
            if let Some(bound) = bound {
                bindings.insert(name.text().to_string(), bound);
            }
        }
        Rc::new(Self { bindings })
    }
}

/// An argument that is itself an outer parameter is replaced by that
/// parameter's binding, so chains of generics collapse to concrete types.
fn substitute<'a>(argument: NodePath<'a>, outer: &Rc<TypeParameters<'a>>) -> BoundType<'a> {
    if argument.is("type_identifier") {
        if let Some(bound) = outer.get(argument.text()) {
            return bound.clone();
        }
    }
    BoundType {
        node: argument,
        scope: outer.clone(),
    }
}
