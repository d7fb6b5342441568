//! # Adapter
//!
//! Translates host declarations from a [`SymbolTable`] into the neutral
//! [`model`](crate::model). Every node kind has exactly one conversion,
//! parameterized by a [`Depth`]:
//!
//! ```text
//! Full     requested node: members, supertypes, nested types, companion
//!   ↓
//! Bounded  its children: members and supertypes, no nested types
//!   ↓
//! Flat     everything further: identity and signature types only
//! ```
//!
//! Enclosing elements are always [`StubElement`]s, so back references end
//! after one hop. Supertype closures are computed by name with a visited
//! set. Together these make the conversion total on cyclic graphs
//! (self-referential nesting, recursive bounds, mutually recursive
//! annotations).
//!
//! Resolution misses never fail: they produce [`Type::unknown`], an empty
//! list or `None`, and clear `valid` on the element whose signature needed
//! the type.

mod annotations;
mod classify;
mod depth;
mod elements;
mod types;

pub use classify::{
    classify_type_kind, convert_modifier, convert_modifiers, element_kind_of, mapped_modifier,
    type_element_kind,
};
pub use depth::Depth;

use std::cell::RefCell;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::DeclId;
use crate::host::{DeclKind, SourceFile, SymbolTable};
use crate::model::{Element, ElementInfo, ElementKind, SourceFileRef, StubElement};

/// Converts host declarations to neutral elements.
///
/// The only state besides the table borrow is a cache of supertype
/// closures, which depend on the table alone; converting the same
/// declaration twice yields equal trees.
#[derive(Debug, Clone)]
pub struct Adapter<'a> {
    table: &'a SymbolTable,
    supertypes: RefCell<FxHashMap<DeclId, Vec<SmolStr>>>,
}

impl<'a> Adapter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            supertypes: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Convert a declaration at [`Depth::Full`].
    pub fn element(&self, id: DeclId) -> Element {
        self.element_at(id, Depth::Full)
    }

    /// Convert a declaration at the given depth, dispatching on its kind.
    pub fn element_at(&self, id: DeclId, depth: Depth) -> Element {
        let decl = self.table.get(id);
        tracing::trace!("[ADAPT] {} {:?} at {:?}", decl.name, element_kind_of(decl), depth);
        let converted = match &decl.kind {
            DeclKind::Class(_) => self.type_element(id, depth).map(Element::from),
            DeclKind::Function(_) => self.executable(id, depth).map(Element::from),
            DeclKind::Property(_) => self.property(id, depth).map(Element::from),
            DeclKind::TypeParameter(_) => self.type_parameter(id, depth).map(Element::from),
        };
        converted.unwrap_or_else(|| Element::Stub(self.stub(id)))
    }

    /// The identity of a declaration, with nothing below it.
    pub fn stub(&self, id: DeclId) -> StubElement {
        let decl = self.table.get(id);
        StubElement {
            simple_name: decl.name.clone(),
            qualified_name: decl.qualified_name.clone(),
            kind: element_kind_of(decl),
            package_name: non_empty(&decl.package_name),
            modifiers: convert_modifiers(&decl.modifiers),
        }
    }

    pub fn source_file_ref(file: &SourceFile) -> SourceFileRef {
        SourceFileRef {
            file_name: file.file_name.clone(),
            file_path: file.file_path.clone(),
            package_name: file.package_name.clone(),
        }
    }

    /// Fields shared by every full element: identity, enclosing stub,
    /// annotations, modifiers, documentation and file.
    fn info(&self, id: DeclId, kind: ElementKind, depth: Depth) -> ElementInfo {
        let decl = self.table.get(id);
        let mut info = ElementInfo::new(decl.name.clone(), kind);
        info.qualified_name = decl.qualified_name.clone();
        info.package_name = non_empty(&decl.package_name);
        info.enclosing_element = decl
            .parent
            .map(|parent| Box::new(Element::Stub(self.stub(parent))));
        info.annotations = decl
            .annotations
            .iter()
            .map(|a| self.annotation(a, depth))
            .collect();
        info.modifiers = convert_modifiers(&decl.modifiers);
        info.documentation = decl.docstring.clone();
        info.source_file = self.table.file_of(id).map(Self::source_file_ref);
        info
    }
}

fn non_empty(name: &SmolStr) -> Option<SmolStr> {
    (!name.is_empty()).then(|| name.clone())
}
