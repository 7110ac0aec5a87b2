//! Serializable descriptions of resolved types.

use serde::Serialize;

/// A resolved type. Always finite: recursive aliases appear by name at the
/// point where they recur.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub shape: TypeShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeShape {
    /// `{name}` only: keywords and unresolved names.
    Simple {},
    /// `{name: "literal", value}` with the literal's exact source text.
    Literal { value: String },
    /// Arrays, generics, unions, intersections and tuples.
    Elements { elements: Vec<TypeDescriptor> },
    Signature {
        #[serde(rename = "type")]
        kind: SignatureKind,
        signature: Signature,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    Object,
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Signature {
    Object(ObjectSignature),
    Function(FunctionSignature),
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ObjectSignature {
    pub properties: Vec<PropertyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<FunctionSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyEntry {
    pub key: PropertyKey,
    pub value: TypeDescriptor,
}

/// Plain names for ordinary members, a type for index signatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
    Name(String),
    Type(Box<TypeDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSignature {
    pub arguments: Vec<FunctionArgument>,
    #[serde(rename = "return")]
    pub return_type: Box<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub this: Option<Box<TypeDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionArgument {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<bool>,
}

impl TypeDescriptor {
    fn with_shape(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            raw: None,
            nullable: None,
            required: None,
        }
    }

    pub fn simple(name: impl Into<String>) -> Self {
        Self::with_shape(name, TypeShape::Simple {})
    }

    pub fn unknown() -> Self {
        Self::simple("unknown")
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::with_shape("literal", TypeShape::Literal { value: value.into() })
    }

    pub fn elements(name: impl Into<String>, elements: Vec<TypeDescriptor>, raw: impl Into<String>) -> Self {
        Self::with_shape(name, TypeShape::Elements { elements }).with_raw(raw)
    }

    pub fn object(signature: ObjectSignature, raw: impl Into<String>) -> Self {
        Self::with_shape(
            "signature",
            TypeShape::Signature {
                kind: SignatureKind::Object,
                signature: Signature::Object(signature),
            },
        )
        .with_raw(raw)
    }

    pub fn function(signature: FunctionSignature, raw: impl Into<String>) -> Self {
        Self::with_shape(
            "signature",
            TypeShape::Signature {
                kind: SignatureKind::Function,
                signature: Signature::Function(signature),
            },
        )
        .with_raw(raw)
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.name == "unknown" && matches!(self.shape, TypeShape::Simple {})
    }

    pub fn elements_of(&self) -> &[TypeDescriptor] {
        match &self.shape {
            TypeShape::Elements { elements } => elements,
            _ => &[],
        }
    }

    pub fn object_signature(&self) -> Option<&ObjectSignature> {
        match &self.shape {
            TypeShape::Signature {
                signature: Signature::Object(object),
                ..
            } => Some(object),
            _ => None,
        }
    }

    pub fn function_signature(&self) -> Option<&FunctionSignature> {
        match &self.shape {
            TypeShape::Signature {
                signature: Signature::Function(function),
                ..
            } => Some(function),
            _ => None,
        }
    }

    pub fn literal_value(&self) -> Option<&str> {
        match &self.shape {
            TypeShape::Literal { value } => Some(value),
            _ => None,
        }
    }
}

impl PropertyEntry {
    pub fn named(key: impl Into<String>, value: TypeDescriptor) -> Self {
        Self {
            key: PropertyKey::Name(key.into()),
            value,
        }
    }

    pub fn key_name(&self) -> Option<&str> {
        match &self.key {
            PropertyKey::Name(name) => Some(name),
            PropertyKey::Type(_) => None,
        }
    }
}
