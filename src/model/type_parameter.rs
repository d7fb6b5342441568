use super::element::{Element, ElementInfo};
use super::types::Type;

/// Declaration-site variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Variance {
    Invariant,
    Covariant,
    Contravariant,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeParameter {
    pub info: ElementInfo,
    pub bounds: Vec<Type>,
    pub variance: Variance,
    pub is_reified: bool,
}

impl TypeParameter {
    pub fn name(&self) -> &str {
        &self.info.simple_name
    }

    /// The class or function declaring this parameter (a stub).
    pub fn generic_element(&self) -> Option<&Element> {
        self.info.enclosing_element.as_deref()
    }
}
