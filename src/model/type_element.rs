//! Class-like elements and their member lookups.

use smol_str::SmolStr;

use super::element::{Element, ElementInfo, ElementKind};
use super::executable::ExecutableElement;
use super::type_parameter::TypeParameter;
use super::types::Type;
use super::variable::{PropertyElement, VariableElement};
use crate::base::constants::{package_of, simple_name_of};

/// The shape of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeElementKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
    Object,
    EnumEntry,
}

impl TypeElementKind {
    pub fn element_kind(self) -> ElementKind {
        match self {
            TypeElementKind::Class | TypeElementKind::Object => ElementKind::Class,
            TypeElementKind::Interface => ElementKind::Interface,
            TypeElementKind::Enum => ElementKind::Enum,
            TypeElementKind::AnnotationType => ElementKind::AnnotationType,
            TypeElementKind::EnumEntry => ElementKind::EnumConstant,
        }
    }
}

/// A class, interface, object, enum or annotation class.
///
/// Members (properties, methods, constructors, nested types) live once in
/// `info.enclosed_elements`; the typed accessors below filter that list.
/// The companion object is held apart so that it survives conversions that
/// drop nested types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeElement {
    pub info: ElementInfo,
    pub type_kind: TypeElementKind,
    pub superclass: Option<Type>,
    pub interfaces: Vec<Type>,
    pub type_parameters: Vec<TypeParameter>,
    pub companion_object: Option<Box<TypeElement>>,
    /// Qualified names of every transitive supertype, nearest first.
    pub all_supertypes: Vec<SmolStr>,
    pub is_inner: bool,
    pub is_local: bool,
    pub is_anonymous: bool,
    pub is_companion: bool,
}

impl TypeElement {
    /// A memberless element for a qualified name.
    pub fn named(qualified_name: &str, type_kind: TypeElementKind) -> Self {
        let mut info = ElementInfo::new(simple_name_of(qualified_name), type_kind.element_kind());
        info.qualified_name = Some(qualified_name.into());
        let package = package_of(qualified_name);
        info.package_name = (!package.is_empty()).then(|| package.into());
        Self {
            info,
            type_kind,
            superclass: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            companion_object: None,
            all_supertypes: Vec::new(),
            is_inner: false,
            is_local: false,
            is_anonymous: false,
            is_companion: false,
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.info.simple_name
    }

    pub fn qualified_name(&self) -> Option<&str> {
        self.info.qualified_name.as_deref()
    }

    /// Nested classes, excluding enum entries and the companion object.
    pub fn nested_types(&self) -> impl Iterator<Item = &TypeElement> {
        self.info
            .enclosed_elements
            .iter()
            .filter_map(Element::as_type_element)
            .filter(|t| t.type_kind != TypeElementKind::EnumEntry)
    }

    pub fn enum_constants(&self) -> impl Iterator<Item = &TypeElement> {
        self.info
            .enclosed_elements
            .iter()
            .filter_map(Element::as_type_element)
            .filter(|t| t.type_kind == TypeElementKind::EnumEntry)
    }

    pub fn methods(&self) -> impl Iterator<Item = &ExecutableElement> {
        self.info
            .enclosed_elements
            .iter()
            .filter_map(Element::as_executable)
            .filter(|e| !e.is_constructor())
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ExecutableElement> {
        self.info
            .enclosed_elements
            .iter()
            .filter_map(Element::as_executable)
            .filter(|e| e.is_constructor())
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyElement> {
        self.info
            .enclosed_elements
            .iter()
            .filter_map(Element::as_property)
    }

    /// Backing fields of the properties that have one.
    pub fn fields(&self) -> impl Iterator<Item = &VariableElement> {
        self.properties().filter_map(|p| p.backing_field.as_deref())
    }

    // ── Lookups ──────────────────────────────────────────────────────

    /// Find a method by name and erased parameter type names.
    pub fn find_method(&self, name: &str, parameter_types: &[&str]) -> Option<&ExecutableElement> {
        self.methods().find(|m| {
            m.info.simple_name == name
                && m.parameters.len() == parameter_types.len()
                && m.parameters
                    .iter()
                    .zip(parameter_types)
                    .all(|(p, expected)| p.ty.erased_name() == *expected)
        })
    }

    pub fn find_methods(&self, name: &str) -> Vec<&ExecutableElement> {
        self.methods()
            .filter(|m| m.info.simple_name == name)
            .collect()
    }

    pub fn find_field(&self, name: &str) -> Option<&VariableElement> {
        self.fields().find(|f| f.info.simple_name == name)
    }

    pub fn find_property(&self, name: &str) -> Option<&PropertyElement> {
        self.properties().find(|p| p.info.simple_name == name)
    }

    /// A constructor callable without arguments (every parameter defaulted).
    pub fn default_constructor(&self) -> Option<&ExecutableElement> {
        self.constructors()
            .find(|c| c.parameters.iter().all(|p| p.has_default_value))
    }

    /// Whether `qualified_name` is this type or one of its supertypes.
    pub fn is_subtype_of(&self, qualified_name: &str) -> bool {
        self.qualified_name() == Some(qualified_name)
            || self.all_supertypes.iter().any(|s| s == qualified_name)
    }
}
