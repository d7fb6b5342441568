//! Annotation and constant value conversion.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{Adapter, Depth};
use crate::base::constants::simple_name_of;
use crate::host::{AnnotationUsage, ArgValue, TypeRef};
use crate::model::{Annotation, AnnotationValue, Element, PrimitiveValue, Type};

impl Adapter<'_> {
    /// Convert an annotation usage with its arguments.
    ///
    /// The annotation type is identity only; see [`Adapter::header_type`].
    pub fn annotation(&self, usage: &AnnotationUsage, depth: Depth) -> Annotation {
        let mut annotation = self.annotation_header(usage);
        annotation.arguments = usage
            .arguments
            .iter()
            .map(|(name, value)| (name.clone(), self.annotation_value(value, depth)))
            .collect();
        annotation
    }

    fn annotation_header(&self, usage: &AnnotationUsage) -> Annotation {
        Annotation {
            annotation_type: self
                .table
                .resolve(&usage.annotation_type)
                .map(|resolved| self.header_type(resolved.declaration))
                .unwrap_or_else(Type::unknown),
            simple_name: usage.short_name.clone(),
            qualified_name: self
                .table
                .annotation_qualified_name(&usage.annotation_type)
                .map(SmolStr::from),
            arguments: IndexMap::new(),
        }
    }

    /// Convert a constant value.
    ///
    /// Arrays are populated only at [`Depth::Full`], with their elements
    /// converted at [`Depth::Bounded`]; below that they are empty. Nested
    /// annotations are converted one tier lower, and keep only their header
    /// at [`Depth::Flat`].
    pub fn annotation_value(&self, value: &ArgValue, depth: Depth) -> AnnotationValue {
        match value {
            ArgValue::String(s) => AnnotationValue::String(s.clone()),
            ArgValue::Bool(v) => AnnotationValue::Primitive(PrimitiveValue::Boolean(*v)),
            ArgValue::Byte(v) => AnnotationValue::Primitive(PrimitiveValue::Byte(*v)),
            ArgValue::Short(v) => AnnotationValue::Primitive(PrimitiveValue::Short(*v)),
            ArgValue::Int(v) => AnnotationValue::Primitive(PrimitiveValue::Int(*v)),
            ArgValue::Long(v) => AnnotationValue::Primitive(PrimitiveValue::Long(*v)),
            ArgValue::Char(v) => AnnotationValue::Primitive(PrimitiveValue::Char(*v)),
            ArgValue::Float(v) => AnnotationValue::Primitive(PrimitiveValue::Float(*v)),
            ArgValue::Double(v) => AnnotationValue::Primitive(PrimitiveValue::Double(*v)),
            ArgValue::EnumEntry(entry) => self.enum_value(entry),
            ArgValue::Class(class) => self.class_value(class),
            ArgValue::Array(values) => {
                if depth.includes_array_values() {
                    AnnotationValue::Array(
                        values
                            .iter()
                            .map(|v| self.annotation_value(v, depth.descend()))
                            .collect(),
                    )
                } else {
                    AnnotationValue::Array(Vec::new())
                }
            }
            ArgValue::Annotation(nested) => {
                let converted = if depth == Depth::Flat {
                    self.annotation_header(nested)
                } else {
                    self.annotation(nested, depth.descend())
                };
                AnnotationValue::Annotation(Box::new(converted))
            }
            ArgValue::Null => AnnotationValue::Unknown("null".into()),
        }
    }

    fn enum_value(&self, entry: &TypeRef) -> AnnotationValue {
        let Some(resolved) = self.table.resolve(entry) else {
            return AnnotationValue::Unknown(entry.written_name().unwrap_or_default().into());
        };
        let enum_type = match self.table.parent(resolved.declaration) {
            Some(parent) => self.header_type(parent),
            None => Type::unknown(),
        };
        AnnotationValue::Enum {
            enum_type,
            constant: Box::new(Element::Stub(self.stub(resolved.declaration))),
        }
    }

    /// Class literals carry names only; the class is never converted.
    fn class_value(&self, class: &TypeRef) -> AnnotationValue {
        let qualified_name = match self.table.resolve(class) {
            Some(resolved) => self.table.get(resolved.declaration).qualified_name.clone(),
            None => class.written_name().map(SmolStr::from),
        };
        match qualified_name {
            Some(qualified_name) => AnnotationValue::Class {
                simple_name: simple_name_of(&qualified_name).into(),
                qualified_name,
            },
            None => AnnotationValue::Unknown(String::new()),
        }
    }
}
