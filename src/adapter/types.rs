//! Type reference conversion.

use super::classify::{classify_type_kind, convert_modifiers, type_element_kind};
use super::{Adapter, Depth, non_empty};
use crate::base::DeclId;
use crate::host::{TypeArgument, TypeRef, Variance as HostVariance};
use crate::model::{Element, Type, TypeElement, TypeKind, TypeVariant};

impl Adapter<'_> {
    /// Convert a type reference.
    ///
    /// Element and argument content is converted at `depth.descend()`, so a
    /// type never carries more structure than the element that owns it.
    /// Unresolvable references become [`Type::unknown`].
    pub fn type_of(&self, reference: &TypeRef, depth: Depth) -> Type {
        let Some(resolved) = self.table.resolve(reference) else {
            tracing::trace!("[ADAPT] unresolved type {:?}", reference.written_name());
            return Type::unknown();
        };
        let id = resolved.declaration;
        let decl = self.table.get(id);
        let child = depth.descend();

        let ty = match classify_type_kind(decl) {
            kind if kind.is_primitive() => Type::primitive(kind),
            kind @ (TypeKind::Unit | TypeKind::None) => Type::no_type(kind),
            TypeKind::Array => {
                let component = reference
                    .arguments
                    .first()
                    .map(|a| self.type_argument(a, child))
                    .unwrap_or_else(Type::unknown);
                Type::array(component)
            }
            TypeKind::TypeVariable => match self.type_parameter(id, child) {
                Some(parameter) => Type::type_variable(parameter),
                None => Type::unknown(),
            },
            TypeKind::Declared => self.declared(id, &reference.arguments, child),
            _ => Type::unknown(),
        };
        if ty.is_unknown() {
            return ty;
        }

        let mut ty = ty.with_nullable(reference.nullable);
        ty.annotations = reference
            .annotations
            .iter()
            .map(|a| self.annotation(a, child))
            .collect();
        ty.declaration = Some(Box::new(Element::Stub(self.stub(id))));
        ty
    }

    fn declared(&self, id: DeclId, arguments: &[TypeArgument], depth: Depth) -> Type {
        let Some(element) = self.type_element(id, depth) else {
            return Type::unknown();
        };
        let arguments = arguments
            .iter()
            .map(|a| self.type_argument(a, depth))
            .collect();
        let mut ty = Type::declared(element, arguments);
        if let TypeVariant::Declared { enclosing_type, .. } = &mut ty.variant {
            *enclosing_type = self.enclosing_type(id).map(Box::new);
        }
        ty
    }

    /// The enclosing class as a flat declared type, one level only.
    fn enclosing_type(&self, id: DeclId) -> Option<Type> {
        let parent = self.table.parent(id)?;
        let element = self.type_element(parent, Depth::Flat)?;
        let mut ty = Type::declared(element, Vec::new());
        ty.declaration = Some(Box::new(Element::Stub(self.stub(parent))));
        Some(ty)
    }

    /// A declared type carrying only the identity of class `id`.
    ///
    /// Used for annotation types and the enum type of constant values. The
    /// class's own annotations are never read, so a class annotated with
    /// itself (directly, through another annotation, or through one of its
    /// enum entries) does not loop.
    pub fn header_type(&self, id: DeclId) -> Type {
        let decl = self.table.get(id);
        let Some(class) = decl.as_class() else {
            return Type::unknown();
        };
        let qualified = decl.qualified_name.as_deref().unwrap_or(decl.name.as_str());
        let mut element = TypeElement::named(qualified, type_element_kind(class.class_kind));
        element.info.simple_name = decl.name.clone();
        element.info.qualified_name = decl.qualified_name.clone();
        element.info.package_name = non_empty(&decl.package_name);
        element.info.enclosing_element = decl
            .parent
            .map(|parent| Box::new(Element::Stub(self.stub(parent))));
        element.info.modifiers = convert_modifiers(&decl.modifiers);
        element.info.source_file = self.table.file_of(id).map(Self::source_file_ref);

        let mut ty = Type::declared(element, Vec::new());
        ty.declaration = Some(Box::new(Element::Stub(self.stub(id))));
        ty
    }

    /// `out T` and `in T` become bounded wildcards, `*` a bare one.
    pub fn type_argument(&self, argument: &TypeArgument, depth: Depth) -> Type {
        let Some(reference) = &argument.ty else {
            return Type::wildcard(None, None);
        };
        let ty = self.type_of(reference, depth);
        match argument.variance {
            HostVariance::Invariant => ty,
            HostVariance::Covariant => Type::wildcard(Some(ty), None),
            HostVariance::Contravariant => Type::wildcard(None, Some(ty)),
            HostVariance::Star => Type::wildcard(None, None),
        }
    }
}
