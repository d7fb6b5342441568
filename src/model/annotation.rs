//! Annotations and their constant values.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::element::Element;
use super::types::Type;

/// A resolved annotation usage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    pub annotation_type: Type,
    pub simple_name: SmolStr,
    pub qualified_name: Option<SmolStr>,
    /// Keyed by parameter name; iteration follows declaration order,
    /// equality does not.
    pub arguments: IndexMap<SmolStr, AnnotationValue>,
}

impl Annotation {
    /// Match against a qualified name, or a simple name when no dot is given.
    pub fn matches(&self, name: &str) -> bool {
        if name.contains('.') {
            self.qualified_name.as_deref() == Some(name)
        } else {
            self.simple_name == name
        }
    }

    pub fn argument(&self, name: &str) -> Option<&AnnotationValue> {
        self.arguments.get(name)
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn argument_or<'a>(&'a self, name: &str, default: &'a AnnotationValue) -> &'a AnnotationValue {
        self.argument(name).unwrap_or(default)
    }

    /// Arguments in declaration order.
    pub fn argument_list(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn string_argument(&self, name: &str) -> Option<&str> {
        self.argument(name).and_then(AnnotationValue::as_str)
    }
}

/// A primitive literal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PrimitiveValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
}

/// A constant annotation argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AnnotationValue {
    String(String),
    Primitive(PrimitiveValue),
    Enum {
        enum_type: Type,
        /// Stub of the enum constant.
        constant: Box<Element>,
    },
    /// A class literal; the referenced class is named, never converted.
    Class {
        qualified_name: SmolStr,
        simple_name: SmolStr,
    },
    /// Empty when produced below the top conversion tier.
    Array(Vec<AnnotationValue>),
    Annotation(Box<Annotation>),
    /// Null literals and references that failed to resolve.
    Unknown(String),
}

impl AnnotationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Primitive(PrimitiveValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnnotationValue::Primitive(PrimitiveValue::Byte(v)) => Some(i64::from(*v)),
            AnnotationValue::Primitive(PrimitiveValue::Short(v)) => Some(i64::from(*v)),
            AnnotationValue::Primitive(PrimitiveValue::Int(v)) => Some(i64::from(*v)),
            AnnotationValue::Primitive(PrimitiveValue::Long(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Simple name of the referenced enum constant.
    pub fn enum_constant_name(&self) -> Option<&str> {
        match self {
            AnnotationValue::Enum { constant, .. } => Some(constant.simple_name()),
            _ => None,
        }
    }
}
