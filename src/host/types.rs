//! Unresolved type references and their resolved form.

use smol_str::SmolStr;

use super::annotation::AnnotationUsage;
use crate::base::DeclId;

/// What a type reference points at before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTarget {
    /// A qualified class name, looked up in the symbol table on resolve.
    Named(SmolStr),
    /// A declaration handle (type parameters, self references).
    Decl(DeclId),
}

/// Use-site variance of a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variance {
    Invariant,
    Covariant,
    Contravariant,
    Star,
}

/// A type argument at a use site (`out T`, `*`, `String`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeArgument {
    pub variance: Variance,
    /// `None` for star projections.
    pub ty: Option<TypeRef>,
}

impl TypeArgument {
    pub fn invariant(ty: TypeRef) -> Self {
        Self {
            variance: Variance::Invariant,
            ty: Some(ty),
        }
    }

    pub fn covariant(ty: TypeRef) -> Self {
        Self {
            variance: Variance::Covariant,
            ty: Some(ty),
        }
    }

    pub fn contravariant(ty: TypeRef) -> Self {
        Self {
            variance: Variance::Contravariant,
            ty: Some(ty),
        }
    }

    pub fn star() -> Self {
        Self {
            variance: Variance::Star,
            ty: None,
        }
    }
}

/// A type as written in source; resolve it through the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub target: TypeTarget,
    pub arguments: Vec<TypeArgument>,
    pub nullable: bool,
    pub annotations: Vec<AnnotationUsage>,
}

impl TypeRef {
    /// Reference a class by qualified name.
    pub fn named(qualified_name: impl Into<SmolStr>) -> Self {
        Self::with_target(TypeTarget::Named(qualified_name.into()))
    }

    /// Reference a declaration directly.
    pub fn to(decl: DeclId) -> Self {
        Self::with_target(TypeTarget::Decl(decl))
    }

    fn with_target(target: TypeTarget) -> Self {
        Self {
            target,
            arguments: Vec::new(),
            nullable: false,
            annotations: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_arg(mut self, argument: TypeArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The name this reference was written with, when it is name-based.
    pub fn written_name(&self) -> Option<&str> {
        match &self.target {
            TypeTarget::Named(name) => Some(name),
            TypeTarget::Decl(_) => None,
        }
    }
}

/// A successfully resolved type reference.
#[derive(Debug, Clone, Copy)]
pub struct HostType<'r> {
    pub declaration: DeclId,
    pub reference: &'r TypeRef,
}

impl<'r> HostType<'r> {
    pub fn arguments(&self) -> &'r [TypeArgument] {
        &self.reference.arguments
    }

    pub fn is_nullable(&self) -> bool {
        self.reference.nullable
    }

    pub fn annotations(&self) -> &'r [AnnotationUsage] {
        &self.reference.annotations
    }
}
