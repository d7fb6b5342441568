//! Declaration conversions: classes, functions, properties, parameters.

use rustc_hash::FxHashSet;
use smol_str::{SmolStr, format_smolstr};

use super::classify::type_element_kind;
use super::{Adapter, Depth};
use crate::base::DeclId;
use crate::host::{
    Accessor, ClassDecl, ClassKind, DeclKind, HostModifier, ValueParameter,
    Variance as HostVariance,
};
use crate::model::{
    Element, ElementInfo, ElementKind, ExecutableElement, Modifier, PropertyElement, Type,
    TypeElement, TypeKind, TypeParameter, Variance, VariableElement, VariableKind,
};

impl Adapter<'_> {
    // ========================================================================
    // CLASSES
    // ========================================================================

    /// Convert a class-like declaration. `None` for any other kind.
    pub fn type_element(&self, id: DeclId, depth: Depth) -> Option<TypeElement> {
        let decl = self.table.get(id);
        let class = decl.as_class()?;
        let type_kind = type_element_kind(class.class_kind);
        let mut info = self.info(id, type_kind.element_kind(), depth);
        let child = depth.descend();

        let mut superclass = None;
        let mut interfaces = Vec::new();
        let mut type_parameters = Vec::new();
        let mut companion_object = None;
        if depth.includes_members() {
            (superclass, interfaces) = self.split_supertypes(class, child);
            type_parameters = class
                .type_parameters
                .iter()
                .filter_map(|t| self.type_parameter(*t, child))
                .collect();
            info.enclosed_elements = self.members(class, depth);
            companion_object = class
                .members
                .iter()
                .find(|m| self.is_companion(**m))
                .and_then(|m| self.type_element(*m, child))
                .map(Box::new);
        }

        Some(TypeElement {
            info,
            type_kind,
            superclass,
            interfaces,
            type_parameters,
            companion_object,
            all_supertypes: self.supertype_closure(id),
            is_inner: decl.has_modifier(HostModifier::Inner),
            is_local: class.is_local,
            is_anonymous: class.is_anonymous,
            is_companion: class.is_companion,
        })
    }

    fn members(&self, class: &ClassDecl, depth: Depth) -> Vec<Element> {
        let child = depth.descend();
        let mut out = Vec::with_capacity(class.members.len());
        for member in &class.members {
            match &self.table.get(*member).kind {
                DeclKind::Class(c) if c.is_companion => {}
                DeclKind::Class(c) if c.class_kind == ClassKind::EnumEntry => {
                    out.extend(self.type_element(*member, Depth::Flat).map(Element::from));
                }
                DeclKind::Class(_) => {
                    if depth.includes_nested_types() {
                        out.extend(self.type_element(*member, child).map(Element::from));
                    }
                }
                DeclKind::Function(_) => {
                    out.extend(self.executable(*member, child).map(Element::from));
                }
                DeclKind::Property(_) => {
                    out.extend(self.property(*member, child).map(Element::from));
                }
                DeclKind::TypeParameter(_) => {}
            }
        }
        out
    }

    fn is_companion(&self, id: DeclId) -> bool {
        self.table
            .get(id)
            .as_class()
            .is_some_and(|c| c.is_companion)
    }

    /// The first non-interface supertype is the superclass; unresolved
    /// supertypes are dropped.
    fn split_supertypes(&self, class: &ClassDecl, depth: Depth) -> (Option<Type>, Vec<Type>) {
        let mut superclass = None;
        let mut interfaces = Vec::new();
        for reference in &class.super_types {
            let Some(resolved) = self.table.resolve(reference) else {
                tracing::trace!("[ADAPT] unresolved supertype {:?}", reference.written_name());
                continue;
            };
            let is_interface = self
                .table
                .get(resolved.declaration)
                .as_class()
                .is_some_and(|c| c.class_kind == ClassKind::Interface);
            let ty = self.type_of(reference, depth);
            if is_interface || superclass.is_some() {
                interfaces.push(ty);
            } else {
                superclass = Some(ty);
            }
        }
        (superclass, interfaces)
    }

    /// Qualified names of every transitive supertype, breadth-first.
    ///
    /// Computed once per declaration for the lifetime of the adapter.
    pub fn supertype_closure(&self, id: DeclId) -> Vec<SmolStr> {
        if let Some(cached) = self.supertypes.borrow().get(&id) {
            return cached.clone();
        }
        let names = self.walk_supertypes(id);
        self.supertypes.borrow_mut().insert(id, names.clone());
        names
    }

    fn walk_supertypes(&self, id: DeclId) -> Vec<SmolStr> {
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut queue = vec![id];
        let mut names = Vec::new();
        let mut next = 0;
        while next < queue.len() {
            let current = queue[next];
            next += 1;
            let Some(class) = self.table.get(current).as_class() else {
                continue;
            };
            for reference in &class.super_types {
                let Some(resolved) = self.table.resolve(reference) else {
                    continue;
                };
                if !visited.insert(resolved.declaration) {
                    continue;
                }
                if let Some(name) = &self.table.get(resolved.declaration).qualified_name {
                    names.push(name.clone());
                }
                queue.push(resolved.declaration);
            }
        }
        names
    }

    // ========================================================================
    // FUNCTIONS
    // ========================================================================

    /// Convert a function or constructor. `None` for any other kind.
    pub fn executable(&self, id: DeclId, depth: Depth) -> Option<ExecutableElement> {
        let decl = self.table.get(id);
        let function = decl.as_function()?;
        let kind = super::element_kind_of(decl);
        let mut info = self.info(id, kind, depth);
        let child = depth.descend();

        let return_type = match &function.return_type {
            Some(reference) => self.type_of(reference, child),
            None => Type::unknown(),
        };
        let parameters: Vec<VariableElement> = function
            .parameters
            .iter()
            .map(|p| self.parameter(id, p, child))
            .collect();
        info.valid = !return_type.is_unknown() && parameters.iter().all(|p| p.info.valid);

        let is_abstract = function.is_abstract || decl.has_modifier(HostModifier::Abstract);
        let in_interface = decl
            .parent
            .and_then(|p| self.table.get(p).as_class())
            .is_some_and(|c| c.class_kind == ClassKind::Interface);

        Some(ExecutableElement {
            return_type,
            is_varargs: function.parameters.iter().any(|p| p.is_vararg),
            parameters,
            type_parameters: function
                .type_parameters
                .iter()
                .filter_map(|t| self.type_parameter(*t, child))
                .collect(),
            thrown_types: function
                .throws
                .iter()
                .map(|t| self.type_of(t, child))
                .collect(),
            receiver_type: function
                .extension_receiver
                .as_ref()
                .map(|r| self.type_of(r, child)),
            is_abstract,
            is_default: in_interface && !is_abstract,
            is_suspend: decl.has_modifier(HostModifier::Suspend),
            is_inline: decl.has_modifier(HostModifier::Inline),
            is_operator: decl.has_modifier(HostModifier::Operator),
            is_infix: decl.has_modifier(HostModifier::Infix),
            info,
        })
    }

    /// A value parameter of `owner`.
    pub fn parameter(&self, owner: DeclId, parameter: &ValueParameter, depth: Depth) -> VariableElement {
        let decl = self.table.get(owner);
        let mut info = ElementInfo::new(parameter.name.clone(), ElementKind::Parameter);
        info.package_name = super::non_empty(&decl.package_name);
        info.enclosing_element = Some(Box::new(Element::Stub(self.stub(owner))));
        info.annotations = parameter
            .annotations
            .iter()
            .map(|a| self.annotation(a, depth))
            .collect();
        if parameter.is_vararg {
            info.modifiers.insert(Modifier::Vararg);
        }
        info.source_file = self.table.file_of(owner).map(Self::source_file_ref);

        let ty = self.type_of(&parameter.ty, depth.descend());
        info.valid = !ty.is_unknown();
        VariableElement {
            info,
            ty,
            variable_kind: VariableKind::Parameter,
            constant_value: None,
            is_mutable: false,
            is_const: false,
            is_lateinit: false,
            has_default_value: parameter.has_default,
        }
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Convert a property with its accessors and backing field.
    pub fn property(&self, id: DeclId, depth: Depth) -> Option<PropertyElement> {
        let decl = self.table.get(id);
        let property = decl.as_property()?;
        let mut info = self.info(id, ElementKind::Property, depth);
        let child = depth.descend();

        let ty = self.type_of(&property.ty, child);
        info.valid = !ty.is_unknown();
        let constant_value = property
            .constant
            .as_ref()
            .map(|c| self.annotation_value(c, child));
        let is_const = decl.has_modifier(HostModifier::Const);
        let is_lateinit = decl.has_modifier(HostModifier::Lateinit);

        let getter = property
            .getter
            .as_ref()
            .map(|g| Box::new(self.getter(id, g, &ty, depth)));
        let setter = property
            .setter
            .as_ref()
            .map(|s| Box::new(self.setter(id, s, &ty, depth)));
        let backing_field = property.has_backing_field.then(|| {
            let mut field_info = self.info(id, ElementKind::Field, depth);
            field_info.valid = info.valid;
            Box::new(VariableElement {
                info: field_info,
                ty: ty.clone(),
                variable_kind: VariableKind::Field,
                constant_value: constant_value.clone(),
                is_mutable: property.is_mutable,
                is_const,
                is_lateinit,
                has_default_value: false,
            })
        });

        Some(PropertyElement {
            info,
            ty,
            constant_value,
            is_mutable: property.is_mutable,
            is_const,
            is_lateinit,
            has_custom_getter: property.getter.as_ref().is_some_and(|g| g.is_custom),
            has_custom_setter: property.setter.as_ref().is_some_and(|s| s.is_custom),
            getter,
            setter,
            backing_field,
            delegate: property.delegate.clone(),
            receiver_type: property
                .extension_receiver
                .as_ref()
                .map(|r| self.type_of(r, child)),
        })
    }

    fn getter(&self, property: DeclId, accessor: &Accessor, ty: &Type, depth: Depth) -> ExecutableElement {
        let name = format_smolstr!("<get-{}>", self.table.get(property).name);
        let info = self.accessor_info(property, name, accessor, depth);
        self.accessor(property, info, Vec::new(), ty.clone())
    }

    fn setter(&self, property: DeclId, accessor: &Accessor, ty: &Type, depth: Depth) -> ExecutableElement {
        let name = format_smolstr!("<set-{}>", self.table.get(property).name);
        let info = self.accessor_info(property, name, accessor, depth);
        let mut value = ElementInfo::new("value", ElementKind::Parameter);
        value.enclosing_element = Some(Box::new(Element::Stub(self.stub(property))));
        value.valid = !ty.is_unknown();
        let parameter = VariableElement {
            info: value,
            ty: ty.clone(),
            variable_kind: VariableKind::Parameter,
            constant_value: None,
            is_mutable: false,
            is_const: false,
            is_lateinit: false,
            has_default_value: false,
        };
        self.accessor(property, info, vec![parameter], Type::no_type(TypeKind::Unit))
    }

    fn accessor_info(&self, property: DeclId, name: SmolStr, accessor: &Accessor, depth: Depth) -> ElementInfo {
        let decl = self.table.get(property);
        let mut info = ElementInfo::new(name, ElementKind::Method);
        info.package_name = super::non_empty(&decl.package_name);
        info.enclosing_element = Some(Box::new(Element::Stub(self.stub(property))));
        info.annotations = accessor
            .annotations
            .iter()
            .map(|a| self.annotation(a, depth))
            .collect();
        info.modifiers = super::convert_modifiers(&accessor.modifiers);
        info.source_file = self.table.file_of(property).map(Self::source_file_ref);
        info
    }

    fn accessor(
        &self,
        property: DeclId,
        mut info: ElementInfo,
        parameters: Vec<VariableElement>,
        return_type: Type,
    ) -> ExecutableElement {
        let decl = self.table.get(property);
        info.valid = parameters.iter().all(|p| p.info.valid) && !return_type.is_unknown();
        ExecutableElement {
            info,
            return_type,
            parameters,
            type_parameters: Vec::new(),
            thrown_types: Vec::new(),
            receiver_type: None,
            is_varargs: false,
            is_abstract: decl.has_modifier(HostModifier::Abstract),
            is_default: false,
            is_suspend: false,
            is_inline: decl.has_modifier(HostModifier::Inline),
            is_operator: false,
            is_infix: false,
        }
    }

    // ========================================================================
    // TYPE PARAMETERS
    // ========================================================================

    /// Convert a type parameter; bounds are empty at [`Depth::Flat`].
    pub fn type_parameter(&self, id: DeclId, depth: Depth) -> Option<TypeParameter> {
        let decl = self.table.get(id);
        let parameter = decl.as_type_parameter()?;
        let info = self.info(id, ElementKind::TypeParameter, depth);
        let bounds = if depth.includes_members() {
            parameter
                .bounds
                .iter()
                .map(|b| self.type_of(b, depth.descend()))
                .collect()
        } else {
            Vec::new()
        };
        let variance = match parameter.variance {
            HostVariance::Covariant => Variance::Covariant,
            HostVariance::Contravariant => Variance::Contravariant,
            HostVariance::Invariant | HostVariance::Star => Variance::Invariant,
        };
        Some(TypeParameter {
            info,
            bounds,
            variance,
            is_reified: decl.has_modifier(HostModifier::Reified),
        })
    }
}
