use smol_str::SmolStr;

use super::types::TypeRef;
use crate::base::constants::simple_name_of;

/// An annotation applied at a use site.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationUsage {
    pub short_name: SmolStr,
    pub annotation_type: TypeRef,
    /// Arguments in declaration order.
    pub arguments: Vec<(SmolStr, ArgValue)>,
}

impl AnnotationUsage {
    /// An annotation whose class is referenced by qualified name.
    pub fn new(qualified_name: &str) -> Self {
        Self {
            short_name: simple_name_of(qualified_name).into(),
            annotation_type: TypeRef::named(qualified_name),
            arguments: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<SmolStr>, value: ArgValue) -> Self {
        self.arguments.push((name.into(), value));
        self
    }
}

/// A constant annotation argument or constant initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
    /// Reference to an enum entry declaration.
    EnumEntry(TypeRef),
    /// A class literal (`Foo::class`).
    Class(TypeRef),
    Array(Vec<ArgValue>),
    Annotation(Box<AnnotationUsage>),
    Null,
}

impl ArgValue {
    pub fn string(value: impl Into<String>) -> Self {
        ArgValue::String(value.into())
    }
}
