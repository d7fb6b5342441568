//! Host declarations.
//!
//! A [`Declaration`] is built detached (no parent, no file, no qualified
//! name) and then handed to [`SymbolTable::declare`](super::SymbolTable::declare),
//! which fills in everything that depends on where it lives.

use smol_str::SmolStr;

use super::annotation::{AnnotationUsage, ArgValue};
use super::modifier::HostModifier;
use super::types::{TypeRef, Variance};
use crate::base::{DeclId, FileId};

/// Name the host gives to constructors.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// A declaration in the host symbol graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: SmolStr,
    /// `None` for local and type-parameter declarations.
    pub qualified_name: Option<SmolStr>,
    pub package_name: SmolStr,
    pub parent: Option<DeclId>,
    pub file: Option<FileId>,
    pub modifiers: Vec<HostModifier>,
    pub annotations: Vec<AnnotationUsage>,
    pub docstring: Option<String>,
    pub kind: DeclKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    Class(ClassDecl),
    Function(FunctionDecl),
    Property(PropertyDecl),
    TypeParameter(TypeParamDecl),
}

/// Shape of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    Object,
    AnnotationClass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub class_kind: ClassKind,
    pub super_types: Vec<TypeRef>,
    pub type_parameters: Vec<DeclId>,
    pub members: Vec<DeclId>,
    pub is_companion: bool,
    pub is_local: bool,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    TopLevel,
    Member,
    Constructor,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub function_kind: FunctionKind,
    pub parameters: Vec<ValueParameter>,
    /// `None` when the host could not infer or parse a return type.
    pub return_type: Option<TypeRef>,
    pub type_parameters: Vec<DeclId>,
    pub extension_receiver: Option<TypeRef>,
    pub throws: Vec<TypeRef>,
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueParameter {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub is_vararg: bool,
    pub has_default: bool,
    pub annotations: Vec<AnnotationUsage>,
}

impl ValueParameter {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_vararg: false,
            has_default: false,
            annotations: Vec::new(),
        }
    }

    pub fn vararg(mut self) -> Self {
        self.is_vararg = true;
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A property getter or setter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accessor {
    pub modifiers: Vec<HostModifier>,
    pub annotations: Vec<AnnotationUsage>,
    /// The accessor has a body in source rather than being synthesized.
    pub is_custom: bool,
}

impl Accessor {
    pub fn default_accessor() -> Self {
        Self::default()
    }

    pub fn custom() -> Self {
        Self {
            is_custom: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub ty: TypeRef,
    pub is_mutable: bool,
    pub getter: Option<Accessor>,
    pub setter: Option<Accessor>,
    pub has_backing_field: bool,
    pub delegate: Option<String>,
    pub extension_receiver: Option<TypeRef>,
    pub constant: Option<ArgValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamDecl {
    pub bounds: Vec<TypeRef>,
    pub variance: Variance,
}

impl Declaration {
    fn detached(name: impl Into<SmolStr>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            qualified_name: None,
            package_name: SmolStr::default(),
            parent: None,
            file: None,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            docstring: None,
            kind,
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    pub fn class(name: impl Into<SmolStr>, class_kind: ClassKind) -> Self {
        Self::detached(
            name,
            DeclKind::Class(ClassDecl {
                class_kind,
                super_types: Vec::new(),
                type_parameters: Vec::new(),
                members: Vec::new(),
                is_companion: false,
                is_local: false,
                is_anonymous: false,
            }),
        )
    }

    pub fn function(
        name: impl Into<SmolStr>,
        parameters: Vec<ValueParameter>,
        return_type: Option<TypeRef>,
    ) -> Self {
        Self::detached(
            name,
            DeclKind::Function(FunctionDecl {
                function_kind: FunctionKind::Member,
                parameters,
                return_type,
                type_parameters: Vec::new(),
                extension_receiver: None,
                throws: Vec::new(),
                is_abstract: false,
            }),
        )
    }

    /// A constructor; the return type is filled in when declared on a class.
    pub fn constructor(parameters: Vec<ValueParameter>) -> Self {
        let mut decl = Self::function(CONSTRUCTOR_NAME, parameters, None);
        if let DeclKind::Function(f) = &mut decl.kind {
            f.function_kind = FunctionKind::Constructor;
        }
        decl
    }

    pub fn property(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self::detached(
            name,
            DeclKind::Property(PropertyDecl {
                ty,
                is_mutable: false,
                getter: Some(Accessor::default_accessor()),
                setter: None,
                has_backing_field: true,
                delegate: None,
                extension_receiver: None,
                constant: None,
            }),
        )
    }

    pub fn type_parameter(name: impl Into<SmolStr>) -> Self {
        Self::detached(
            name,
            DeclKind::TypeParameter(TypeParamDecl {
                bounds: Vec::new(),
                variance: Variance::Invariant,
            }),
        )
    }

    // ── Common builders ──────────────────────────────────────────────

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = HostModifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    // ── Kind-specific builders (no-ops on other kinds) ───────────────

    pub fn with_super_type(mut self, ty: TypeRef) -> Self {
        if let DeclKind::Class(c) = &mut self.kind {
            c.super_types.push(ty);
        }
        self
    }

    pub fn companion(mut self) -> Self {
        if let DeclKind::Class(c) = &mut self.kind {
            c.is_companion = true;
        }
        self.modifiers.push(HostModifier::Companion);
        self
    }

    pub fn anonymous(mut self) -> Self {
        if let DeclKind::Class(c) = &mut self.kind {
            c.is_anonymous = true;
        }
        self
    }

    pub fn with_receiver(mut self, receiver: TypeRef) -> Self {
        match &mut self.kind {
            DeclKind::Function(f) => f.extension_receiver = Some(receiver),
            DeclKind::Property(p) => p.extension_receiver = Some(receiver),
            _ => {}
        }
        self
    }

    pub fn with_throws(mut self, ty: TypeRef) -> Self {
        if let DeclKind::Function(f) = &mut self.kind {
            f.throws.push(ty);
        }
        self
    }

    pub fn abstract_member(mut self) -> Self {
        if let DeclKind::Function(f) = &mut self.kind {
            f.is_abstract = true;
        }
        self.modifiers.push(HostModifier::Abstract);
        self
    }

    pub fn mutable(mut self) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.is_mutable = true;
            p.setter.get_or_insert_with(Accessor::default_accessor);
        }
        self
    }

    pub fn with_getter(mut self, getter: Accessor) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.getter = Some(getter);
        }
        self
    }

    pub fn with_setter(mut self, setter: Accessor) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.setter = Some(setter);
        }
        self
    }

    pub fn without_backing_field(mut self) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.has_backing_field = false;
        }
        self
    }

    pub fn delegated_by(mut self, expression: impl Into<String>) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.delegate = Some(expression.into());
            p.has_backing_field = false;
        }
        self
    }

    pub fn with_constant(mut self, value: ArgValue) -> Self {
        if let DeclKind::Property(p) = &mut self.kind {
            p.constant = Some(value);
        }
        self
    }

    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        if let DeclKind::TypeParameter(t) = &mut self.kind {
            t.bounds.push(bound);
        }
        self
    }

    pub fn with_variance(mut self, variance: Variance) -> Self {
        if let DeclKind::TypeParameter(t) = &mut self.kind {
            t.variance = variance;
        }
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn has_modifier(&self, modifier: HostModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match &self.kind {
            DeclKind::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match &self.kind {
            DeclKind::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyDecl> {
        match &self.kind {
            DeclKind::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_type_parameter(&self) -> Option<&TypeParamDecl> {
        match &self.kind {
            DeclKind::TypeParameter(t) => Some(t),
            _ => None,
        }
    }
}
