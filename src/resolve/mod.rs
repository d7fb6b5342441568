//! # Resolver Facade
//!
//! Symbol lookup, file enumeration and diagnostics for processors,
//! independent of the host compiler. [`HostResolver`] answers every query
//! from a [`SymbolTable`] through the [`Adapter`]; elements it returns are
//! converted at [`Depth::Full`].

use crate::adapter::{Adapter, Depth};
use crate::diagnostics::{Diagnostic, Location, Messager, Severity};
use crate::error::{KldError, KldResult};
use crate::host::SymbolTable;
use crate::model::{Element, SourceFileRef, TypeElement};
use crate::processing::ProcessorOptions;

/// What a processor can ask of the host.
pub trait Resolver {
    /// Elements annotated with the annotation class `qualified_name`.
    ///
    /// Lazy, single pass over the whole symbol table.
    fn symbols_with_annotation<'s>(
        &'s self,
        qualified_name: &'s str,
    ) -> Box<dyn Iterator<Item = Element> + 's>;

    /// Elements carrying an annotation whose simple name is `simple_name`,
    /// for when the qualified name is unknown. Scans the same declarations
    /// as [`Resolver::symbols_with_annotation`].
    fn symbols_with_annotation_simple_name(&self, simple_name: &str) -> Vec<Element>;

    /// A class-like declaration by qualified name.
    fn class_by_name(&self, qualified_name: &str) -> Option<TypeElement>;

    /// Any declaration by qualified name.
    fn element_by_qualified_name(&self, qualified_name: &str) -> Option<Element>;

    fn all_files(&self) -> Box<dyn Iterator<Item = SourceFileRef> + '_>;

    /// Files added or changed in this round.
    fn new_files(&self) -> Box<dyn Iterator<Item = SourceFileRef> + '_>;

    /// Every declaration of every file, depth-first through class members.
    fn root_elements(&self) -> Vec<Element>;

    /// The file a converted element was declared in.
    fn containing_file(&self, element: &Element) -> Option<SourceFileRef>;

    fn options(&self) -> &ProcessorOptions;

    /// Whether the host has signaled the last round.
    fn is_processing_over(&self) -> bool;

    /// Packages are not elements in the host model; derive package
    /// information from [`Element::package_name`] instead.
    fn package_declaration(&self, name: &str) -> KldResult<Element>;

    /// Report a message, anchored to `element` when it can be located.
    fn log(&self, severity: Severity, message: &str, element: Option<&Element>);

    fn info(&self, message: &str, element: Option<&Element>) {
        self.log(Severity::Info, message, element);
    }

    fn warn(&self, message: &str, element: Option<&Element>) {
        self.log(Severity::Warning, message, element);
    }

    fn error(&self, message: &str, element: Option<&Element>) {
        self.log(Severity::Error, message, element);
    }
}

// ============================================================================
// HOST RESOLVER
// ============================================================================

/// [`Resolver`] over a host [`SymbolTable`].
pub struct HostResolver<'a> {
    adapter: Adapter<'a>,
    options: &'a ProcessorOptions,
    messager: &'a dyn Messager,
}

impl<'a> HostResolver<'a> {
    pub fn new(table: &'a SymbolTable, options: &'a ProcessorOptions, messager: &'a dyn Messager) -> Self {
        Self {
            adapter: Adapter::new(table),
            options,
            messager,
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.adapter.table()
    }

    pub fn adapter(&self) -> &Adapter<'a> {
        &self.adapter
    }

    /// Map an element back to the declaration it was converted from.
    fn locate(&self, element: &Element) -> Option<Location> {
        let table = self.table();
        let symbol = element.qualified_name()?;
        let id = table.lookup(symbol)?;
        Some(Location {
            file: table.file_of(id).map(|f| f.file_path.clone()),
            symbol: symbol.into(),
        })
    }
}

impl Resolver for HostResolver<'_> {
    fn symbols_with_annotation<'s>(
        &'s self,
        qualified_name: &'s str,
    ) -> Box<dyn Iterator<Item = Element> + 's> {
        tracing::debug!("[RESOLVE] symbols annotated with {qualified_name}");
        Box::new(
            self.table()
                .annotated_with(qualified_name)
                .map(|id| self.adapter.element(id)),
        )
    }

    fn symbols_with_annotation_simple_name(&self, simple_name: &str) -> Vec<Element> {
        let out: Vec<Element> = self
            .table()
            .annotated_with_simple_name(simple_name)
            .map(|id| self.adapter.element(id))
            .collect();
        tracing::debug!("[RESOLVE] {} symbol(s) annotated with @{simple_name}", out.len());
        out
    }

    fn class_by_name(&self, qualified_name: &str) -> Option<TypeElement> {
        let id = self.table().class_by_name(qualified_name)?;
        self.adapter.type_element(id, Depth::Full)
    }

    fn element_by_qualified_name(&self, qualified_name: &str) -> Option<Element> {
        let id = self.table().lookup(qualified_name)?;
        Some(self.adapter.element(id))
    }

    fn all_files(&self) -> Box<dyn Iterator<Item = SourceFileRef> + '_> {
        Box::new(self.table().files().map(Adapter::source_file_ref))
    }

    /// The host model has no incremental state: every file is new.
    fn new_files(&self) -> Box<dyn Iterator<Item = SourceFileRef> + '_> {
        self.all_files()
    }

    fn root_elements(&self) -> Vec<Element> {
        let table = self.table();
        table
            .files()
            .flat_map(|f| table.all_declarations(f.id))
            .map(|id| self.adapter.element(id))
            .collect()
    }

    fn containing_file(&self, element: &Element) -> Option<SourceFileRef> {
        if let Some(file) = element.source_file() {
            return Some(file.clone());
        }
        let id = self.table().lookup(element.qualified_name()?)?;
        self.table().file_of(id).map(Adapter::source_file_ref)
    }

    fn options(&self) -> &ProcessorOptions {
        self.options
    }

    fn is_processing_over(&self) -> bool {
        false
    }

    fn package_declaration(&self, name: &str) -> KldResult<Element> {
        Err(KldError::unsupported(format!(
            "package declaration '{name}': read package_name from a declaration instead"
        )))
    }

    fn log(&self, severity: Severity, message: &str, element: Option<&Element>) {
        let location = element.and_then(|e| self.locate(e));
        if element.is_some() && location.is_none() {
            tracing::trace!("[RESOLVE] element not locatable, reporting plain message");
        }
        self.messager
            .report(Diagnostic::new(severity, message).with_location(location));
    }
}
