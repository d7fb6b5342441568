//! Diagnostics: processor message reporting.
//!
//! Processors report info/warning/error messages through a [`Messager`],
//! optionally anchored to the host declaration an element came from. The
//! host toolchain decides how they are surfaced; this module only carries
//! them.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Logging,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Logging => "logging",
        };
        f.write_str(label)
    }
}

/// Where a diagnostic points: a source file and the declaration in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Path of the containing file; `None` for builtins.
    pub file: Option<String>,
    /// Qualified (or simple, for locals) name of the declaration.
    pub symbol: SmolStr,
}

/// A diagnostic message with optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            location: None,
        }
    }

    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        match &self.location {
            Some(Location {
                file: Some(file),
                symbol,
            }) => write!(f, " ({symbol} in {file})"),
            Some(Location { file: None, symbol }) => write!(f, " ({symbol})"),
            None => Ok(()),
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes reported by the processing driver.
pub mod codes {
    /// A processor round failed.
    pub const PROCESSING_FAILED: &str = "E0001";
}

// ============================================================================
// MESSAGERS
// ============================================================================

/// Sink for processor diagnostics.
///
/// Reporting takes `&self`: processors log while iterating resolver
/// queries that borrow the same environment.
pub trait Messager {
    fn report(&self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// A snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Messager for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` events at the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMessager;

impl Messager for TracingMessager {
    fn report(&self, diagnostic: Diagnostic) {
        let symbol = diagnostic.location.as_ref().map(|l| l.symbol.as_str());
        let file = diagnostic.location.as_ref().and_then(|l| l.file.as_deref());
        let code = diagnostic.code.as_deref();
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(code, symbol, file, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(code, symbol, file, "{}", diagnostic.message)
            }
            Severity::Info => {
                tracing::info!(code, symbol, file, "{}", diagnostic.message)
            }
            Severity::Logging => {
                tracing::debug!(code, symbol, file, "{}", diagnostic.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_counts() {
        let collector = DiagnosticCollector::new();
        collector.report(Diagnostic::error("broken"));
        collector.report(Diagnostic::warning("odd"));
        collector.report(Diagnostic::info("fine"));

        assert_eq!(collector.len(), 3);
        assert_eq!(collector.error_count(), 1);
        assert_eq!(collector.warning_count(), 1);
        assert!(collector.has_errors());

        let taken = collector.take();
        assert_eq!(taken.len(), 3);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_display() {
        let located = Diagnostic::error("missing nameColumn")
            .with_code(codes::PROCESSING_FAILED)
            .with_location(Some(Location {
                file: Some("src/Status.kt".into()),
                symbol: "app.Status".into(),
            }));
        assert_eq!(
            located.to_string(),
            "error[E0001]: missing nameColumn (app.Status in src/Status.kt)"
        );
        assert_eq!(Diagnostic::info("done").to_string(), "info: done");
    }

    #[test]
    fn test_tracing_messager_accepts_every_severity() {
        let messager = TracingMessager;
        for severity in [
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Logging,
        ] {
            messager.report(Diagnostic::new(severity, "message"));
        }
    }
}
