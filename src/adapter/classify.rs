//! Flat lookup tables: modifiers, type kinds, element kinds.

use crate::base::constants;
use crate::host::{ClassKind, DeclKind, Declaration, FunctionKind, HostModifier};
use crate::model::{ElementKind, Modifier, ModifierSet, TypeElementKind, TypeKind};

/// The neutral modifier for a host modifier, when one exists.
pub fn mapped_modifier(modifier: HostModifier) -> Option<Modifier> {
    let mapped = match modifier {
        HostModifier::Public => Modifier::Public,
        HostModifier::Private => Modifier::Private,
        HostModifier::Protected => Modifier::Protected,
        HostModifier::Internal => Modifier::Internal,
        HostModifier::Final => Modifier::Final,
        HostModifier::Open => Modifier::Open,
        HostModifier::Abstract => Modifier::Abstract,
        HostModifier::Sealed => Modifier::Sealed,
        HostModifier::Override => Modifier::Override,
        HostModifier::Lateinit => Modifier::Lateinit,
        HostModifier::Data => Modifier::Data,
        HostModifier::Inline => Modifier::Inline,
        HostModifier::Suspend => Modifier::Suspend,
        HostModifier::Infix => Modifier::Infix,
        HostModifier::Operator => Modifier::Operator,
        HostModifier::Inner => Modifier::Inner,
        HostModifier::Const => Modifier::Const,
        HostModifier::Crossinline => Modifier::Crossinline,
        HostModifier::Noinline => Modifier::Noinline,
        HostModifier::Reified => Modifier::Reified,
        HostModifier::External => Modifier::External,
        HostModifier::Tailrec => Modifier::Tailrec,
        HostModifier::Vararg => Modifier::Vararg,
        HostModifier::In => Modifier::In,
        HostModifier::Out => Modifier::Out,
        _ => return None,
    };
    Some(mapped)
}

/// Convert a host modifier. Modifiers without a neutral counterpart become
/// `Public`; this is a silent default, not a claim about visibility.
pub fn convert_modifier(modifier: HostModifier) -> Modifier {
    mapped_modifier(modifier).unwrap_or(Modifier::Public)
}

pub fn convert_modifiers(modifiers: &[HostModifier]) -> ModifierSet {
    modifiers.iter().copied().map(convert_modifier).collect()
}

/// Classify the declaration a type resolved to, by qualified name.
pub fn classify_type_kind(decl: &Declaration) -> TypeKind {
    match &decl.kind {
        DeclKind::TypeParameter(_) => TypeKind::TypeVariable,
        DeclKind::Class(_) => match decl.qualified_name.as_deref() {
            Some(constants::UNIT) => TypeKind::Unit,
            Some(constants::NOTHING) => TypeKind::None,
            Some(constants::ARRAY) => TypeKind::Array,
            Some(name) => TypeKind::from_primitive_name(name).unwrap_or(TypeKind::Declared),
            None => TypeKind::Declared,
        },
        DeclKind::Function(_) | DeclKind::Property(_) => TypeKind::Other,
    }
}

pub fn type_element_kind(kind: ClassKind) -> TypeElementKind {
    match kind {
        ClassKind::Class => TypeElementKind::Class,
        ClassKind::Interface => TypeElementKind::Interface,
        ClassKind::EnumClass => TypeElementKind::Enum,
        ClassKind::EnumEntry => TypeElementKind::EnumEntry,
        ClassKind::Object => TypeElementKind::Object,
        ClassKind::AnnotationClass => TypeElementKind::AnnotationType,
    }
}

pub fn element_kind_of(decl: &Declaration) -> ElementKind {
    match &decl.kind {
        DeclKind::Class(c) => type_element_kind(c.class_kind).element_kind(),
        DeclKind::Function(f) if f.function_kind == FunctionKind::Constructor => {
            ElementKind::Constructor
        }
        DeclKind::Function(_) => ElementKind::Method,
        DeclKind::Property(_) => ElementKind::Property,
        DeclKind::TypeParameter(_) => ElementKind::TypeParameter,
    }
}
