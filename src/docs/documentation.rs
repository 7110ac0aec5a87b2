//! The per-component documentation record handlers write into.

use crate::types::TypeDescriptor;
use indexmap::IndexMap;
use serde::Serialize;

/// Everything extracted for one component definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub props: IndexMap<String, PropDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub composes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<PropTypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_type: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultValue {
    pub value: String,
    pub computed: bool,
}

/// A runtime prop validator (`PropTypes.*`) description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropTypeDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PropTypeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropTypeValue {
    /// Source text: `instanceOf` targets and unresolvable arguments.
    Raw(String),
    Single(Box<PropTypeDescriptor>),
    Union(Vec<PropTypeDescriptor>),
    Enum(Vec<EnumValue>),
    Shape(IndexMap<String, PropTypeDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub value: String,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docblock: Option<String>,
    pub modifiers: Vec<String>,
    pub params: Vec<MethodParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<MethodReturn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodParameter {
    pub name: String,
    pub optional: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodReturn {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropTypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            raw: None,
            computed: None,
            required: None,
            description: None,
        }
    }

    pub fn custom(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::named("custom")
        }
    }

    pub fn with_value(mut self, value: PropTypeValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Argument kept as source text because it could not be resolved.
    pub fn with_computed(mut self, raw: impl Into<String>) -> Self {
        self.value = Some(PropTypeValue::Raw(raw.into()));
        self.computed = Some(true);
        self
    }
}

impl Documentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptor for prop `name`, created empty on first access.
    pub fn get_prop_descriptor(&mut self, name: &str) -> &mut PropDescriptor {
        self.props.entry(name.to_string()).or_default()
    }

    pub fn add_composes(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.composes.contains(&name) {
            self.composes.push(name);
        }
    }

    pub fn add_method(&mut self, method: MethodDescriptor) {
        self.methods.push(method);
    }

    /// Final adjustments before the record is handed out: a prop that has a
    /// default value and a static type annotation is not required.
    pub fn postprocess(mut self) -> Self {
        for prop in self.props.values_mut() {
            if prop.default_value.is_some() && (prop.flow_type.is_some() || prop.ts_type.is_some()) {
                prop.required = Some(false);
            }
        }
        self
    }

    /// Post-processed JSON form of the record.
    pub fn to_object(&self) -> serde_json::Value {
        serde_json::to_value(self.clone().postprocess()).unwrap_or(serde_json::Value::Null)
    }
}
