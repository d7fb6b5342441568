//! Arena-backed host symbol table.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::annotation::AnnotationUsage;
use super::decl::{ClassKind, DeclKind, Declaration, FunctionKind};
use super::modifier::HostModifier;
use super::types::{HostType, TypeRef, TypeTarget};
use crate::base::constants::{self, BUILTIN_CLASSES, BUILTIN_PACKAGE};
use crate::base::{DeclId, FileId};

/// A source file known to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub id: FileId,
    pub file_name: SmolStr,
    pub file_path: String,
    pub package_name: SmolStr,
    /// Top-level declarations, in source order.
    pub declarations: Vec<DeclId>,
}

/// Where a new declaration is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    File(FileId),
    Decl(DeclId),
}

/// The whole-program symbol index for one processing round.
#[derive(Debug)]
pub struct SymbolTable {
    /// Arena storage for all declarations - single source of truth
    decls: Vec<Declaration>,
    files: Vec<SourceFile>,
    /// Index for O(1) qualified name lookups: qname -> DeclId (first wins)
    by_qname: FxHashMap<SmolStr, DeclId>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table pre-populated with the builtin classes.
    pub fn new() -> Self {
        let mut table = Self {
            decls: Vec::new(),
            files: Vec::new(),
            by_qname: FxHashMap::default(),
        };
        for qualified in BUILTIN_CLASSES {
            table.declare_builtin(qualified);
        }
        table
    }

    fn declare_builtin(&mut self, qualified: &'static str) {
        let name = constants::simple_name_of(qualified);
        let (kind, modifiers) = match qualified {
            constants::UNIT => (ClassKind::Object, vec![HostModifier::Public]),
            constants::ANY => (
                ClassKind::Class,
                vec![HostModifier::Public, HostModifier::Open],
            ),
            _ => (
                ClassKind::Class,
                vec![HostModifier::Public, HostModifier::Final],
            ),
        };
        let mut decl = Declaration::class(name, kind).with_modifiers(modifiers);
        decl.package_name = BUILTIN_PACKAGE.into();
        decl.qualified_name = Some(qualified.into());
        let id = self.push(decl);
        self.by_qname.insert(qualified.into(), id);

        if qualified == constants::ARRAY {
            self.declare(Parent::Decl(id), Declaration::type_parameter("T"));
        }
    }

    fn push(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId::new(self.decls.len());
        self.decls.push(decl);
        id
    }

    // ========================================================================
    // POPULATION
    // ========================================================================

    /// Register a source file.
    pub fn add_file(&mut self, path: impl Into<String>, package: impl Into<SmolStr>) -> FileId {
        let file_path = path.into();
        let file_name = file_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_path.as_str())
            .into();
        let id = FileId::new(self.files.len());
        self.files.push(SourceFile {
            id,
            file_name,
            file_path,
            package_name: package.into(),
            declarations: Vec::new(),
        });
        id
    }

    /// Place a detached declaration under `parent` and index it.
    ///
    /// Package, file, qualified name and the parent's child lists are
    /// derived here; the caller only describes the declaration itself.
    pub fn declare(&mut self, parent: Parent, mut decl: Declaration) -> DeclId {
        let id = DeclId::new(self.decls.len());
        let is_type_parameter = matches!(decl.kind, DeclKind::TypeParameter(_));

        match parent {
            Parent::File(file_id) => {
                let file = &self.files[file_id.index()];
                decl.file = Some(file_id);
                decl.package_name = file.package_name.clone();
                decl.qualified_name = Some(qualify(&file.package_name, &decl.name));
                if let DeclKind::Function(f) = &mut decl.kind {
                    if f.function_kind != FunctionKind::Constructor {
                        f.function_kind = FunctionKind::TopLevel;
                    }
                }
            }
            Parent::Decl(parent_id) => {
                let owner = &self.decls[parent_id.index()];
                decl.parent = Some(parent_id);
                decl.file = owner.file;
                decl.package_name = owner.package_name.clone();
                let owner_is_function = matches!(owner.kind, DeclKind::Function(_));
                decl.qualified_name = match (&owner.qualified_name, is_type_parameter) {
                    (Some(owner_qname), false) if !owner_is_function => {
                        Some(qualify(owner_qname, &decl.name))
                    }
                    _ => None,
                };
                match &mut decl.kind {
                    DeclKind::Class(c) if owner_is_function => c.is_local = true,
                    DeclKind::Function(f) => {
                        if f.function_kind == FunctionKind::Constructor {
                            f.return_type.get_or_insert_with(|| TypeRef::to(parent_id));
                        } else if owner_is_function {
                            f.function_kind = FunctionKind::Local;
                        } else {
                            f.function_kind = FunctionKind::Member;
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(qualified) = &decl.qualified_name {
            self.by_qname.entry(qualified.clone()).or_insert(id);
        }
        self.decls.push(decl);

        match parent {
            Parent::File(file_id) => self.files[file_id.index()].declarations.push(id),
            Parent::Decl(parent_id) => match &mut self.decls[parent_id.index()].kind {
                DeclKind::Class(c) if is_type_parameter => c.type_parameters.push(id),
                DeclKind::Class(c) => c.members.push(id),
                DeclKind::Function(f) if is_type_parameter => f.type_parameters.push(id),
                _ => {}
            },
        }

        tracing::trace!(
            "[HOST] declared {} ({:?})",
            id,
            self.decls[id.index()].qualified_name
        );
        id
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Get a declaration by id. Ids are only valid for the table that issued them.
    pub fn get(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    pub fn try_get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    pub fn parent(&self, id: DeclId) -> Option<DeclId> {
        self.try_get(id).and_then(|d| d.parent)
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// The file containing a declaration (builtins have none).
    pub fn file_of(&self, id: DeclId) -> Option<&SourceFile> {
        self.try_get(id)
            .and_then(|d| d.file)
            .and_then(|f| self.file(f))
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Look up any declaration by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_qname.get(qualified_name).copied()
    }

    /// Look up a class-like declaration by qualified name.
    pub fn class_by_name(&self, qualified_name: &str) -> Option<DeclId> {
        self.lookup(qualified_name)
            .filter(|id| self.get(*id).as_class().is_some())
    }

    /// Top-level declarations of a file.
    pub fn declarations_in(&self, file: FileId) -> &[DeclId] {
        self.file(file)
            .map(|f| f.declarations.as_slice())
            .unwrap_or(&[])
    }

    /// Every declaration of a file, depth-first through class members.
    pub fn all_declarations(&self, file: FileId) -> Vec<DeclId> {
        let mut out = Vec::new();
        let mut stack: Vec<DeclId> = self.declarations_in(file).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(class) = self.get(id).as_class() {
                stack.extend(class.members.iter().rev().copied());
            }
        }
        out
    }

    /// Declarations carrying an annotation whose class has `qualified_name`.
    ///
    /// One pass over the arena; the iterator borrows the table.
    pub fn annotated_with<'a>(
        &'a self,
        qualified_name: &'a str,
    ) -> impl Iterator<Item = DeclId> + 'a {
        self.annotated_where(move |usage: &AnnotationUsage| {
            self.annotation_qualified_name(&usage.annotation_type) == Some(qualified_name)
        })
    }

    /// Declarations carrying an annotation with the given simple name.
    ///
    /// Scans the same declarations as [`SymbolTable::annotated_with`].
    pub fn annotated_with_simple_name<'a>(
        &'a self,
        simple_name: &'a str,
    ) -> impl Iterator<Item = DeclId> + 'a {
        self.annotated_where(move |usage: &AnnotationUsage| {
            self.annotation_qualified_name(&usage.annotation_type)
                .map(constants::simple_name_of)
                .unwrap_or(usage.short_name.as_str())
                == simple_name
        })
    }

    fn annotated_where<'a>(
        &'a self,
        matches: impl Fn(&AnnotationUsage) -> bool + 'a,
    ) -> impl Iterator<Item = DeclId> + 'a {
        self.decls.iter().enumerate().filter_map(move |(index, decl)| {
            decl.annotations
                .iter()
                .any(&matches)
                .then(|| DeclId::new(index))
        })
    }

    /// The qualified name an annotation type refers to.
    ///
    /// Falls back to the written name when the annotation class itself is not
    /// part of the table (library annotations).
    pub fn annotation_qualified_name<'a>(&'a self, annotation_type: &'a TypeRef) -> Option<&'a str> {
        match self.resolve(annotation_type) {
            Some(resolved) => self.get(resolved.declaration).qualified_name.as_deref(),
            None => annotation_type.written_name(),
        }
    }

    /// Resolve a type reference. A miss yields `None`, never an error.
    pub fn resolve<'r>(&self, reference: &'r TypeRef) -> Option<HostType<'r>> {
        let declaration = match &reference.target {
            TypeTarget::Named(name) => self.lookup(name)?,
            TypeTarget::Decl(id) => self.try_get(*id).map(|_| *id)?,
        };
        Some(HostType {
            declaration,
            reference,
        })
    }

    /// Number of declarations, builtins included.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

fn qualify(prefix: &str, name: &str) -> SmolStr {
    if prefix.is_empty() {
        name.into()
    } else {
        smol_str::format_smolstr!("{prefix}.{name}")
    }
}
