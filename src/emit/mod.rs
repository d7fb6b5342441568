//! # Source Emission
//!
//! Output streams for generated source files. A processor asks the
//! [`CodeGenerator`] for a new file under a package; the generator maps the
//! package onto directories, records which input files the output was
//! derived from, and hands back an exclusively owned writer.
//!
//! ```text
//! create_new_file(deps, "com.example", "UserDao", "kt")
//!   → <root>/com/example/UserDao.kt
//! ```

mod fs;
mod memory;

pub use fs::{FsCodeGenerator, write_code_to_file};
pub use memory::MemoryCodeGenerator;

use std::io::Write;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::{KldError, KldResult};
use crate::model::Element;
use crate::resolve::Resolver;

// ============================================================================
// DEPENDENCIES
// ============================================================================

/// The inputs a generated file was derived from.
///
/// An aggregating output depends on every input of the round; an isolating
/// one only on `originating_files`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub aggregating: bool,
    /// Paths of the originating source files, deduplicated, in order.
    pub originating_files: Vec<String>,
}

impl Dependencies {
    pub fn new(aggregating: bool, originating_files: impl IntoIterator<Item = String>) -> Self {
        let mut deps = Self {
            aggregating,
            originating_files: Vec::new(),
        };
        for file in originating_files {
            deps.push(file);
        }
        deps
    }

    /// An aggregating output with no specific originating files.
    pub fn aggregating() -> Self {
        Self::new(true, Vec::new())
    }

    /// Derive originating files from elements. Elements whose containing
    /// file cannot be determined are skipped.
    pub fn from_elements<'e>(
        resolver: &dyn Resolver,
        aggregating: bool,
        elements: impl IntoIterator<Item = &'e Element>,
    ) -> Self {
        let files = elements
            .into_iter()
            .filter_map(|e| resolver.containing_file(e))
            .map(|f| f.file_path);
        Self::new(aggregating, files)
    }

    fn push(&mut self, file: String) {
        if !self.originating_files.contains(&file) {
            self.originating_files.push(file);
        }
    }
}

// ============================================================================
// CODE GENERATOR
// ============================================================================

/// Creates output files for generated code.
///
/// Methods take `&self` so that a generator can be shared by the
/// processing environment while processors hold resolver borrows.
pub trait CodeGenerator {
    /// Open `<package path>/<file_name>.<extension>` for writing.
    ///
    /// Fails with [`KldError::FileAlreadyExists`] when the same output was
    /// already created this round.
    fn create_new_file(
        &self,
        dependencies: &Dependencies,
        package_name: &str,
        file_name: &str,
        extension: &str,
    ) -> KldResult<Box<dyn Write>>;

    /// Every output created so far, in creation order.
    fn generated_files(&self) -> Vec<PathBuf>;

    /// Output path → originating source files.
    fn associations(&self) -> IndexMap<PathBuf, Vec<String>>;
}

/// The output path of a generated file, relative to the generator root.
pub fn relative_output_path(package_name: &str, file_name: &str, extension: &str) -> KldResult<PathBuf> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) {
        return Err(KldError::InvalidFileName(file_name.to_string()));
    }
    let mut path = PathBuf::new();
    if !package_name.is_empty() {
        for segment in package_name.split('.') {
            if !is_identifier(segment) {
                return Err(KldError::invalid_package(package_name));
            }
            path.push(segment);
        }
    }
    if extension.is_empty() {
        path.push(file_name);
    } else {
        path.push(format!("{file_name}.{extension}"));
    }
    Ok(path)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
