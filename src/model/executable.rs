use super::element::{ElementInfo, ElementKind};
use super::type_parameter::TypeParameter;
use super::types::Type;
use super::variable::VariableElement;

/// A function, method, constructor or property accessor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExecutableElement {
    pub info: ElementInfo,
    pub return_type: Type,
    pub parameters: Vec<VariableElement>,
    pub type_parameters: Vec<TypeParameter>,
    pub thrown_types: Vec<Type>,
    /// Receiver of an extension function.
    pub receiver_type: Option<Type>,
    pub is_varargs: bool,
    pub is_abstract: bool,
    /// Interface member with a body.
    pub is_default: bool,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub is_operator: bool,
    pub is_infix: bool,
}

impl ExecutableElement {
    pub fn is_constructor(&self) -> bool {
        self.info.kind == ElementKind::Constructor
    }

    pub fn is_extension(&self) -> bool {
        self.receiver_type.is_some()
    }

    /// Human-readable signature: `name(param: Type, ...): ReturnType`.
    ///
    /// Only meaningful when the element is valid; unresolved types render
    /// with their sentinel name.
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.info.simple_name, p.ty.canonical_name))
            .collect::<Vec<_>>()
            .join(", ");
        let receiver = self
            .receiver_type
            .as_ref()
            .map(|r| format!("{}.", r.canonical_name))
            .unwrap_or_default();
        format!(
            "{receiver}{}({params}): {}",
            self.info.simple_name, self.return_type.canonical_name
        )
    }
}
