//! Neutral types and the operations generators need on them.
//!
//! Every [`Type`] carries the same header (names, nullability, arguments,
//! bounds, annotations) and a [`TypeVariant`] payload. `TypeVariant::Unknown`
//! is the sentinel the adapter substitutes wherever resolution failed or
//! descent was cut short.

use std::collections::HashMap;
use std::hash::BuildHasher;

use smol_str::SmolStr;

use super::annotation::Annotation;
use super::element::Element;
use super::type_element::{TypeElement, TypeElementKind};
use super::type_parameter::TypeParameter;
use crate::base::constants::{self, primitive_of, wrapper_of};

/// Canonical name rendered for the unknown sentinel.
pub const UNKNOWN_TYPE_NAME: &str = "<unknown>";

/// Classification tag of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Unit,
    /// `Nothing`, the bottom type.
    None,
    Array,
    Declared,
    TypeVariable,
    Wildcard,
    Other,
}

impl TypeKind {
    pub fn is_primitive(self) -> bool {
        self.primitive_name().is_some()
    }

    /// Qualified name of the primitive class for a primitive kind.
    pub fn primitive_name(self) -> Option<&'static str> {
        match self {
            TypeKind::Boolean => Some(constants::BOOLEAN),
            TypeKind::Byte => Some(constants::BYTE),
            TypeKind::Short => Some(constants::SHORT),
            TypeKind::Int => Some(constants::INT),
            TypeKind::Long => Some(constants::LONG),
            TypeKind::Char => Some(constants::CHAR),
            TypeKind::Float => Some(constants::FLOAT),
            TypeKind::Double => Some(constants::DOUBLE),
            _ => None,
        }
    }

    /// Kind for a primitive qualified name.
    pub fn from_primitive_name(qualified_name: &str) -> Option<TypeKind> {
        match qualified_name {
            constants::BOOLEAN => Some(TypeKind::Boolean),
            constants::BYTE => Some(TypeKind::Byte),
            constants::SHORT => Some(TypeKind::Short),
            constants::INT => Some(TypeKind::Int),
            constants::LONG => Some(TypeKind::Long),
            constants::CHAR => Some(TypeKind::Char),
            constants::FLOAT => Some(TypeKind::Float),
            constants::DOUBLE => Some(TypeKind::Double),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeVariant {
    Primitive,
    Array {
        component: Box<Type>,
    },
    Declared {
        element: Box<TypeElement>,
        /// One level only; its own enclosing type is always `None`.
        enclosing_type: Option<Box<Type>>,
    },
    TypeVariable {
        parameter: Box<TypeParameter>,
    },
    /// A use-site projection (`out T`, `in T`, `*`); see the bounds.
    Wildcard,
    /// `Unit` and `Nothing`.
    NoType,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Type {
    pub kind: TypeKind,
    pub canonical_name: SmolStr,
    pub qualified_name: Option<SmolStr>,
    pub nullable: bool,
    pub type_arguments: Vec<Type>,
    pub upper_bounds: Vec<Type>,
    pub lower_bounds: Vec<Type>,
    /// Stub of the declaring element.
    pub declaration: Option<Box<Element>>,
    pub annotations: Vec<Annotation>,
    pub variant: TypeVariant,
}

impl Type {
    fn bare(kind: TypeKind, qualified_name: Option<SmolStr>, variant: TypeVariant) -> Self {
        Self {
            kind,
            canonical_name: SmolStr::default(),
            qualified_name,
            nullable: false,
            type_arguments: Vec::new(),
            upper_bounds: Vec::new(),
            lower_bounds: Vec::new(),
            declaration: None,
            annotations: Vec::new(),
            variant,
        }
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// The sentinel for unresolved or truncated types.
    pub fn unknown() -> Self {
        Self::bare(TypeKind::Other, None, TypeVariant::Unknown).rendered()
    }

    /// `Unit` (`TypeKind::Unit`) or `Nothing` (`TypeKind::None`).
    pub fn no_type(kind: TypeKind) -> Self {
        let (kind, name) = if kind == TypeKind::None {
            (TypeKind::None, constants::NOTHING)
        } else {
            (TypeKind::Unit, constants::UNIT)
        };
        Self::bare(kind, Some(name.into()), TypeVariant::NoType).rendered()
    }

    /// A primitive type; non-primitive kinds yield the unknown sentinel.
    pub fn primitive(kind: TypeKind) -> Self {
        match kind.primitive_name() {
            Some(name) => Self::bare(kind, Some(name.into()), TypeVariant::Primitive).rendered(),
            None => Self::unknown(),
        }
    }

    pub fn declared(element: TypeElement, type_arguments: Vec<Type>) -> Self {
        let qualified_name = element.info.qualified_name.clone();
        let mut ty = Self::bare(
            TypeKind::Declared,
            qualified_name,
            TypeVariant::Declared {
                element: Box::new(element),
                enclosing_type: None,
            },
        );
        ty.type_arguments = type_arguments;
        ty.rendered()
    }

    pub fn array(component: Type) -> Self {
        let mut ty = Self::bare(
            TypeKind::Array,
            Some(constants::ARRAY.into()),
            TypeVariant::Array {
                component: Box::new(component.clone()),
            },
        );
        ty.type_arguments = vec![component];
        ty.rendered()
    }

    pub fn type_variable(parameter: TypeParameter) -> Self {
        let mut ty = Self::bare(
            TypeKind::TypeVariable,
            None,
            TypeVariant::TypeVariable {
                parameter: Box::new(parameter.clone()),
            },
        );
        ty.upper_bounds = parameter.bounds;
        ty.rendered()
    }

    /// A projection; both bounds empty means a star projection.
    pub fn wildcard(upper: Option<Type>, lower: Option<Type>) -> Self {
        let mut ty = Self::bare(TypeKind::Wildcard, None, TypeVariant::Wildcard);
        ty.upper_bounds = upper.into_iter().collect();
        ty.lower_bounds = lower.into_iter().collect();
        ty.rendered()
    }

    /// `kotlin.Any`, the top type.
    pub fn any() -> Self {
        Self::declared(
            TypeElement::named(constants::ANY, TypeElementKind::Class),
            Vec::new(),
        )
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self.rendered()
    }

    pub(crate) fn rendered(mut self) -> Self {
        self.canonical_name = self.render().into();
        self
    }

    fn render(&self) -> String {
        let suffix = if self.nullable { "?" } else { "" };
        let args = if self.type_arguments.is_empty() {
            String::new()
        } else {
            let joined = self
                .type_arguments
                .iter()
                .map(|a| a.canonical_name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("<{joined}>")
        };
        match &self.variant {
            TypeVariant::Unknown => UNKNOWN_TYPE_NAME.to_string(),
            TypeVariant::Wildcard => match (self.upper_bounds.first(), self.lower_bounds.first()) {
                (_, Some(lower)) => format!("in {}", lower.canonical_name),
                (Some(upper), None) => format!("out {}", upper.canonical_name),
                (None, None) => "*".to_string(),
            },
            TypeVariant::TypeVariable { parameter } => format!("{}{suffix}", parameter.name()),
            TypeVariant::Declared { element, .. } => {
                let name = self
                    .qualified_name
                    .as_deref()
                    .unwrap_or(element.simple_name());
                format!("{name}{args}{suffix}")
            }
            TypeVariant::Primitive | TypeVariant::Array { .. } | TypeVariant::NoType => {
                let name = self.qualified_name.as_deref().unwrap_or(UNKNOWN_TYPE_NAME);
                format!("{name}{args}{suffix}")
            }
        }
    }

    // ========================================================================
    // FLAGS
    // ========================================================================

    pub fn is_primitive(&self) -> bool {
        self.kind.is_primitive()
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }

    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        self.kind == TypeKind::Wildcard
    }

    pub fn is_type_variable(&self) -> bool {
        self.kind == TypeKind::TypeVariable
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.variant, TypeVariant::Unknown)
    }

    /// The declared class, for declared types.
    pub fn type_element(&self) -> Option<&TypeElement> {
        match &self.variant {
            TypeVariant::Declared { element, .. } => Some(element),
            _ => None,
        }
    }

    pub fn enclosing_type(&self) -> Option<&Type> {
        match &self.variant {
            TypeVariant::Declared { enclosing_type, .. } => enclosing_type.as_deref(),
            _ => None,
        }
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Qualified name after erasure.
    pub fn erased_name(&self) -> &str {
        match &self.variant {
            TypeVariant::TypeVariable { .. } | TypeVariant::Wildcard => self
                .upper_bounds
                .first()
                .map_or(constants::ANY, |b| b.erased_name()),
            TypeVariant::Unknown => UNKNOWN_TYPE_NAME,
            _ => self
                .qualified_name
                .as_deref()
                .unwrap_or(self.canonical_name.as_str()),
        }
    }

    /// Drop type arguments and nullability; variables erase to their first bound.
    pub fn erasure(&self) -> Type {
        match &self.variant {
            TypeVariant::TypeVariable { .. } | TypeVariant::Wildcard => self
                .upper_bounds
                .first()
                .map_or_else(Type::any, Type::erasure),
            TypeVariant::Array { component } => Type::array(component.erasure()),
            _ => {
                let mut erased = self.clone();
                erased.type_arguments.clear();
                erased.nullable = false;
                erased.rendered()
            }
        }
    }

    fn supertype_names(&self) -> Vec<&str> {
        match &self.variant {
            TypeVariant::Declared { element, .. } => {
                element.all_supertypes.iter().map(SmolStr::as_str).collect()
            }
            TypeVariant::TypeVariable { .. } | TypeVariant::Wildcard => self
                .upper_bounds
                .iter()
                .flat_map(|b| {
                    let mut names = vec![b.erased_name()];
                    names.extend(b.supertype_names());
                    names
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether a value of `other` can be stored where `self` is expected.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        if self.is_unknown() || other.is_unknown() {
            return false;
        }
        if other.nullable && !self.nullable {
            return false;
        }
        if other.kind == TypeKind::None {
            return true;
        }
        let target = unwrap_primitive(self.erased_name());
        if target == constants::ANY {
            return true;
        }
        let source = unwrap_primitive(other.erased_name());
        source == target
            || other
                .supertype_names()
                .into_iter()
                .any(|s| unwrap_primitive(s) == target)
    }

    pub fn is_assignable_to(&self, other: &Type) -> bool {
        other.is_assignable_from(self)
    }

    /// The platform wrapper of a primitive type.
    pub fn boxed(&self) -> Option<Type> {
        let wrapper = wrapper_of(self.kind.primitive_name()?)?;
        Some(
            Type::declared(
                TypeElement::named(wrapper, TypeElementKind::Class),
                Vec::new(),
            )
            .with_nullable(self.nullable),
        )
    }

    /// The primitive behind a platform wrapper type.
    pub fn unboxed(&self) -> Option<Type> {
        let primitive = primitive_of(self.qualified_name.as_deref()?)?;
        let kind = TypeKind::from_primitive_name(primitive)?;
        Some(Type::primitive(kind))
    }

    pub fn array_component(&self) -> Option<&Type> {
        match &self.variant {
            TypeVariant::Array { component } => Some(component),
            _ => None,
        }
    }

    /// Replace type variables by name, keeping the variable's nullability.
    pub fn substitute<S: BuildHasher>(&self, bindings: &HashMap<SmolStr, Type, S>) -> Type {
        match &self.variant {
            TypeVariant::TypeVariable { parameter } => match bindings.get(parameter.name()) {
                Some(bound) => {
                    let nullable = bound.nullable || self.nullable;
                    bound.clone().with_nullable(nullable)
                }
                None => self.clone(),
            },
            TypeVariant::Array { component } => {
                Type::array(component.substitute(bindings)).with_nullable(self.nullable)
            }
            _ => {
                let mut out = self.clone();
                for arg in &mut out.type_arguments {
                    *arg = arg.substitute(bindings);
                }
                for bound in out.upper_bounds.iter_mut().chain(out.lower_bounds.iter_mut()) {
                    *bound = bound.substitute(bindings);
                }
                out.rendered()
            }
        }
    }
}

fn unwrap_primitive(name: &str) -> &str {
    primitive_of(name).unwrap_or(name)
}
