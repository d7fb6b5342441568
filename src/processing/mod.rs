//! # Processing
//!
//! The round driver: processors receive a [`Resolver`] and a
//! [`ProcessingEnvironment`] (options, messager, code generator) and return
//! the elements they could not handle yet.

mod options;

pub use options::ProcessorOptions;

use crate::diagnostics::{Diagnostic, Messager, codes};
use crate::emit::CodeGenerator;
use crate::error::{KldError, KldResult};
use crate::host::SymbolTable;
use crate::model::Element;
use crate::resolve::{HostResolver, Resolver};

/// Everything a processor gets from the host besides symbols.
pub struct ProcessingEnvironment<'e> {
    pub options: ProcessorOptions,
    pub messager: &'e dyn Messager,
    pub code_generator: &'e dyn CodeGenerator,
}

impl<'e> ProcessingEnvironment<'e> {
    pub fn new(
        options: ProcessorOptions,
        messager: &'e dyn Messager,
        code_generator: &'e dyn CodeGenerator,
    ) -> Self {
        Self {
            options,
            messager,
            code_generator,
        }
    }
}

/// An annotation processor.
pub trait Processor {
    /// Run one round. Returns the elements to defer to a later round.
    fn process(
        &mut self,
        resolver: &dyn Resolver,
        env: &ProcessingEnvironment<'_>,
    ) -> Result<Vec<Element>, KldError>;

    /// Called after a successful round.
    fn finish(&mut self, _env: &ProcessingEnvironment<'_>) {}

    /// Called when `process` failed, before the error propagates.
    fn on_error(&mut self, _env: &ProcessingEnvironment<'_>) {}
}

/// Run a single processing round over `table`.
///
/// A failing processor gets `on_error`, the failure is reported as an error
/// diagnostic, and the error is returned to the host.
pub fn run_round<P: Processor + ?Sized>(
    table: &SymbolTable,
    processor: &mut P,
    env: &ProcessingEnvironment<'_>,
) -> KldResult<Vec<Element>> {
    let resolver = HostResolver::new(table, &env.options, env.messager);
    tracing::debug!(
        "[ROUND] start: {} file(s), {} option(s)",
        table.files().count(),
        env.options.len()
    );

    match processor.process(&resolver, env) {
        Ok(deferred) => {
            processor.finish(env);
            tracing::debug!(
                "[ROUND] done: {} generated file(s), {} deferred",
                env.code_generator.generated_files().len(),
                deferred.len()
            );
            Ok(deferred)
        }
        Err(err) => {
            tracing::debug!("[ROUND] failed: {err}");
            processor.on_error(env);
            env.messager.report(
                Diagnostic::error(err.to_string()).with_code(codes::PROCESSING_FAILED),
            );
            Err(err)
        }
    }
}
