use super::annotation::AnnotationValue;
use super::element::ElementInfo;
use super::executable::ExecutableElement;
use super::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VariableKind {
    Field,
    Parameter,
    LocalVariable,
}

/// A field, parameter or local variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariableElement {
    pub info: ElementInfo,
    pub ty: Type,
    pub variable_kind: VariableKind,
    pub constant_value: Option<AnnotationValue>,
    pub is_mutable: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    /// Parameters only: the declaration supplies a default.
    pub has_default_value: bool,
}

/// A property with its accessors and optional backing field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyElement {
    pub info: ElementInfo,
    pub ty: Type,
    pub constant_value: Option<AnnotationValue>,
    pub is_mutable: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub getter: Option<Box<ExecutableElement>>,
    pub setter: Option<Box<ExecutableElement>>,
    pub backing_field: Option<Box<VariableElement>>,
    pub has_custom_getter: bool,
    pub has_custom_setter: bool,
    /// Source text of the `by` expression.
    pub delegate: Option<String>,
    pub receiver_type: Option<Type>,
}

impl PropertyElement {
    pub fn is_delegated(&self) -> bool {
        self.delegate.is_some()
    }

    pub fn is_extension(&self) -> bool {
        self.receiver_type.is_some()
    }
}
