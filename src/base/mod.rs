//! Foundation types for the Kaleidoscope adapter layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`], [`DeclId`] - Arena handles into the host symbol table
//! - Builtin class names and primitive tables ([`constants`])
//!
//! This module has NO dependencies on other kaleidoscope modules.

pub mod constants;
mod ids;

pub use ids::{DeclId, FileId};
