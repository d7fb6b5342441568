//! The element node and its common header.

use smol_str::SmolStr;

use super::annotation::Annotation;
use super::executable::ExecutableElement;
use super::modifier::{Modifier, ModifierSet};
use super::type_element::TypeElement;
use super::type_parameter::TypeParameter;
use super::variable::{PropertyElement, VariableElement};

/// What kind of declaration an element models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Constructor,
    Property,
    Field,
    Parameter,
    TypeParameter,
    EnumConstant,
    Other,
}

impl ElementKind {
    pub fn is_type(self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::Interface
                | ElementKind::Enum
                | ElementKind::AnnotationType
        )
    }
}

/// Reference to the source file an element was declared in.
///
/// Carries no declarations, so it can never lead back into the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceFileRef {
    pub file_name: SmolStr,
    pub file_path: String,
    pub package_name: SmolStr,
}

/// Fields every full element carries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementInfo {
    pub simple_name: SmolStr,
    pub qualified_name: Option<SmolStr>,
    pub kind: ElementKind,
    pub package_name: Option<SmolStr>,
    /// Always an [`Element::Stub`]; the parent chain is one hop long.
    pub enclosing_element: Option<Box<Element>>,
    pub enclosed_elements: Vec<Element>,
    pub annotations: Vec<Annotation>,
    pub modifiers: ModifierSet,
    pub documentation: Option<String>,
    pub source_file: Option<SourceFileRef>,
    /// Cleared when a signature-bearing type failed to resolve.
    pub valid: bool,
}

impl ElementInfo {
    pub fn new(simple_name: impl Into<SmolStr>, kind: ElementKind) -> Self {
        Self {
            simple_name: simple_name.into(),
            qualified_name: None,
            kind,
            package_name: None,
            enclosing_element: None,
            enclosed_elements: Vec::new(),
            annotations: Vec::new(),
            modifiers: ModifierSet::new(),
            documentation: None,
            source_file: None,
            valid: true,
        }
    }
}

/// Identity-only stand-in for an element.
///
/// Used for back references (enclosing element, declaring element of a type,
/// enum constants inside annotation values) where a full element would mean
/// walking the parent's subtree again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StubElement {
    pub simple_name: SmolStr,
    pub qualified_name: Option<SmolStr>,
    pub kind: ElementKind,
    pub package_name: Option<SmolStr>,
    pub modifiers: ModifierSet,
}

/// A node in the neutral symbol graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    Type(Box<TypeElement>),
    Executable(Box<ExecutableElement>),
    Variable(Box<VariableElement>),
    Property(Box<PropertyElement>),
    TypeParameter(Box<TypeParameter>),
    Stub(StubElement),
}

impl Element {
    /// The common header, absent only for stubs.
    pub fn info(&self) -> Option<&ElementInfo> {
        match self {
            Element::Type(e) => Some(&e.info),
            Element::Executable(e) => Some(&e.info),
            Element::Variable(e) => Some(&e.info),
            Element::Property(e) => Some(&e.info),
            Element::TypeParameter(e) => Some(&e.info),
            Element::Stub(_) => None,
        }
    }

    pub fn simple_name(&self) -> &str {
        match self {
            Element::Stub(s) => &s.simple_name,
            _ => self.info().map_or("", |i| i.simple_name.as_str()),
        }
    }

    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            Element::Stub(s) => s.qualified_name.as_deref(),
            _ => self.info().and_then(|i| i.qualified_name.as_deref()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Stub(s) => s.kind,
            _ => self.info().map_or(ElementKind::Other, |i| i.kind),
        }
    }

    pub fn package_name(&self) -> Option<&str> {
        match self {
            Element::Stub(s) => s.package_name.as_deref(),
            _ => self.info().and_then(|i| i.package_name.as_deref()),
        }
    }

    pub fn modifiers(&self) -> &ModifierSet {
        match self {
            Element::Stub(s) => &s.modifiers,
            Element::Type(e) => &e.info.modifiers,
            Element::Executable(e) => &e.info.modifiers,
            Element::Variable(e) => &e.info.modifiers,
            Element::Property(e) => &e.info.modifiers,
            Element::TypeParameter(e) => &e.info.modifiers,
        }
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers().contains(&modifier)
    }

    pub fn enclosing_element(&self) -> Option<&Element> {
        self.info().and_then(|i| i.enclosing_element.as_deref())
    }

    pub fn enclosed_elements(&self) -> &[Element] {
        self.info()
            .map(|i| i.enclosed_elements.as_slice())
            .unwrap_or(&[])
    }

    pub fn annotations(&self) -> &[Annotation] {
        self.info()
            .map(|i| i.annotations.as_slice())
            .unwrap_or(&[])
    }

    pub fn documentation(&self) -> Option<&str> {
        self.info().and_then(|i| i.documentation.as_deref())
    }

    pub fn source_file(&self) -> Option<&SourceFileRef> {
        self.info().and_then(|i| i.source_file.as_ref())
    }

    /// Stubs are always valid; they claim nothing beyond identity.
    pub fn is_valid(&self) -> bool {
        self.info().is_none_or(|i| i.valid)
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, Element::Stub(_))
    }

    /// Find an annotation by qualified name, falling back to simple name.
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.matches(name))
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }

    pub fn as_type_element(&self) -> Option<&TypeElement> {
        match self {
            Element::Type(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_executable(&self) -> Option<&ExecutableElement> {
        match self {
            Element::Executable(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableElement> {
        match self {
            Element::Variable(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyElement> {
        match self {
            Element::Property(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_type_parameter(&self) -> Option<&TypeParameter> {
        match self {
            Element::TypeParameter(e) => Some(e),
            _ => None,
        }
    }

    /// Reduce any element to its identity.
    pub fn to_stub(&self) -> StubElement {
        StubElement {
            simple_name: self.simple_name().into(),
            qualified_name: self.qualified_name().map(SmolStr::from),
            kind: self.kind(),
            package_name: self.package_name().map(SmolStr::from),
            modifiers: self.modifiers().clone(),
        }
    }
}

impl From<TypeElement> for Element {
    fn from(e: TypeElement) -> Self {
        Element::Type(Box::new(e))
    }
}

impl From<ExecutableElement> for Element {
    fn from(e: ExecutableElement) -> Self {
        Element::Executable(Box::new(e))
    }
}

impl From<VariableElement> for Element {
    fn from(e: VariableElement) -> Self {
        Element::Variable(Box::new(e))
    }
}

impl From<PropertyElement> for Element {
    fn from(e: PropertyElement) -> Self {
        Element::Property(Box::new(e))
    }
}

impl From<TypeParameter> for Element {
    fn from(e: TypeParameter) -> Self {
        Element::TypeParameter(Box::new(e))
    }
}

impl From<StubElement> for Element {
    fn from(s: StubElement) -> Self {
        Element::Stub(s)
    }
}
