use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::{CodeGenerator, Dependencies, relative_output_path};
use crate::error::{KldError, KldResult};

/// Writes generated files below a root directory.
///
/// Writers are unbuffered files; dropping one closes it.
#[derive(Debug)]
pub struct FsCodeGenerator {
    root: PathBuf,
    files: RefCell<IndexMap<PathBuf, Vec<String>>>,
}

impl FsCodeGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: RefCell::new(IndexMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CodeGenerator for FsCodeGenerator {
    fn create_new_file(
        &self,
        dependencies: &Dependencies,
        package_name: &str,
        file_name: &str,
        extension: &str,
    ) -> KldResult<Box<dyn Write>> {
        let path = self
            .root
            .join(relative_output_path(package_name, file_name, extension)?);
        if self.files.borrow().contains_key(&path) {
            return Err(KldError::FileAlreadyExists(path.display().to_string()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        tracing::debug!(
            "[EMIT] {} (from {} file(s))",
            path.display(),
            dependencies.originating_files.len()
        );
        self.files
            .borrow_mut()
            .insert(path, dependencies.originating_files.clone());
        Ok(Box::new(file))
    }

    fn generated_files(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn associations(&self) -> IndexMap<PathBuf, Vec<String>> {
        self.files.borrow().clone()
    }
}

/// Write `code` to `path`, creating parent directories first.
pub fn write_code_to_file(path: impl AsRef<Path>, code: &str) -> KldResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, code)?;
    tracing::debug!("[EMIT] wrote {} bytes to {}", code.len(), path.display());
    Ok(())
}
