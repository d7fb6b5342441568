//! # Host Symbol Model
//!
//! The symbol graph the host compiler hands to a processing round. Everything
//! the [`adapter`](crate::adapter) reads comes from here; nothing here knows
//! about the neutral model.
//!
//! The graph is cyclic by nature (a class lists its members, a member points
//! back at its parent; a type parameter's bound may name the declaration that
//! owns it), so declarations live in an arena and refer to each other through
//! [`DeclId`](crate::base::DeclId) handles.
//!
//! ```text
//! SymbolTable
//! ├── files: Vec<SourceFile>          (top-level DeclIds per file)
//! ├── decls: Vec<Declaration>         (arena, builtins first)
//! └── by_qname: FxHashMap<qname, DeclId>
//! ```

mod annotation;
mod decl;
mod modifier;
mod table;
mod types;

pub use annotation::{AnnotationUsage, ArgValue};
pub use decl::{
    Accessor, CONSTRUCTOR_NAME, ClassDecl, ClassKind, DeclKind, Declaration, FunctionDecl,
    FunctionKind, PropertyDecl, TypeParamDecl, ValueParameter,
};
pub use modifier::HostModifier;
pub use table::{Parent, SourceFile, SymbolTable};
pub use types::{HostType, TypeArgument, TypeRef, TypeTarget, Variance};

#[cfg(test)]
mod tests;
