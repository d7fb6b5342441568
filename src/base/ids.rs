//! Arena identifiers.
//!
//! Both ids use `u32` for compact storage and are only meaningful for the
//! [`SymbolTable`](crate::host::SymbolTable) that produced them.

/// Handle to a source file registered with the host symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the file arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a declaration in the host symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the declaration arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DeclId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "decl#{}", self.0)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
