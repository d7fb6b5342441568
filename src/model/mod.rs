//! # Neutral Element Model
//!
//! The target-independent symbol representation the [`adapter`](crate::adapter)
//! produces. Nothing in here refers to host types, so any symbol source
//! (compiler plugin, bytecode reader, IDE index) can populate it.
//!
//! ```text
//! Element
//! ├── Type(TypeElement)            classes, interfaces, objects, enums
//! ├── Executable(ExecutableElement) methods, constructors, accessors
//! ├── Variable(VariableElement)     fields, parameters
//! ├── Property(PropertyElement)
//! ├── TypeParameter(TypeParameter)
//! └── Stub(StubElement)             identity only; ends back references
//!
//! Type { kind, names, nullability, args, bounds, variant }
//! └── Primitive | Array | Declared | TypeVariable | Wildcard | NoType | Unknown
//! ```
//!
//! Nodes are built once and never mutated. Two conversions of the same host
//! symbol compare equal (`PartialEq`) without sharing any allocation.

mod annotation;
mod element;
mod executable;
mod modifier;
mod type_element;
mod type_parameter;
mod types;
mod variable;

pub use annotation::{Annotation, AnnotationValue, PrimitiveValue};
pub use element::{Element, ElementInfo, ElementKind, SourceFileRef, StubElement};
pub use executable::ExecutableElement;
pub use modifier::{Modifier, ModifierSet};
pub use type_element::{TypeElement, TypeElementKind};
pub use type_parameter::{TypeParameter, Variance};
pub use types::{Type, TypeKind, TypeVariant, UNKNOWN_TYPE_NAME};
pub use variable::{PropertyElement, VariableElement, VariableKind};

/// Serialize an element tree as pretty-printed JSON.
#[cfg(feature = "serde")]
pub fn to_json(element: &Element) -> crate::KldResult<String> {
    Ok(serde_json::to_string_pretty(element)?)
}
