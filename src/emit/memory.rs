use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;

use super::{CodeGenerator, Dependencies, relative_output_path};
use crate::error::{KldError, KldResult};

type Sink = Rc<RefCell<Vec<u8>>>;

/// Keeps generated files in memory, keyed by their relative output path.
#[derive(Debug, Default)]
pub struct MemoryCodeGenerator {
    files: RefCell<IndexMap<PathBuf, (Vec<String>, Sink)>>,
}

impl MemoryCodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text written so far to `path`, lossily decoded.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|(_, sink)| String::from_utf8_lossy(&sink.borrow()).into_owned())
    }
}

impl CodeGenerator for MemoryCodeGenerator {
    fn create_new_file(
        &self,
        dependencies: &Dependencies,
        package_name: &str,
        file_name: &str,
        extension: &str,
    ) -> KldResult<Box<dyn Write>> {
        let path = relative_output_path(package_name, file_name, extension)?;
        let mut files = self.files.borrow_mut();
        if files.contains_key(&path) {
            return Err(KldError::FileAlreadyExists(path.display().to_string()));
        }
        let sink = Sink::default();
        files.insert(path, (dependencies.originating_files.clone(), Rc::clone(&sink)));
        Ok(Box::new(SharedWriter(sink)))
    }

    fn generated_files(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    fn associations(&self) -> IndexMap<PathBuf, Vec<String>> {
        self.files
            .borrow()
            .iter()
            .map(|(path, (origins, _))| (path.clone(), origins.clone()))
            .collect()
    }
}

struct SharedWriter(Sink);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
