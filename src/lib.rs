//! # kaleidoscope-base
//!
//! Adapter layer between a host compiler's symbol model and a neutral,
//! target-independent element model for annotation processors, plus the
//! source emission they write through.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! processing  → Processor trait, options, round driver
//!   ↓
//! resolve     → Resolver facade: lookups, files, logging
//!   ↓
//! emit        → CodeGenerator, output paths, write_code_to_file
//!   ↓
//! adapter     → Depth-bounded host → neutral conversion
//!   ↓
//! model       → Neutral elements, types, annotations
//! host        → Host symbol table (declarations, type references)
//!   ↓
//! base        → Primitives (DeclId, FileId, builtin names)
//! ```

// ============================================================================
// MODULES (dependency order: base → host/model → adapter → emit → resolve → processing)
// ============================================================================

/// Foundation types: DeclId, FileId, builtin names
pub mod base;

/// Host symbol model: declarations, type references, annotations
pub mod host;

/// Neutral element model
pub mod model;

/// Host → neutral conversion
pub mod adapter;

/// Source emission: code generators and output paths
pub mod emit;

/// Resolver facade over the host symbol table
pub mod resolve;

/// Processor trait, options and the round driver
pub mod processing;

/// Diagnostic reporting
pub mod diagnostics;

mod error;

pub use error::{KldError, KldResult};

// Re-export the types most processors touch
pub use adapter::{Adapter, Depth};
pub use base::{DeclId, FileId};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Messager, Severity, TracingMessager};
pub use emit::{CodeGenerator, Dependencies, FsCodeGenerator, MemoryCodeGenerator, write_code_to_file};
pub use host::SymbolTable;
pub use model::{Annotation, AnnotationValue, Element, Type, TypeElement, TypeKind};
pub use processing::{ProcessingEnvironment, Processor, ProcessorOptions, run_round};
pub use resolve::{HostResolver, Resolver};
