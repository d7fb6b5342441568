//! Error types for resolver, emission and processing operations.
//!
//! Resolution misses inside the adapter are never errors; they degrade to
//! sentinel values. Only capability gaps and I/O reach this type.

use thiserror::Error;

/// Errors surfaced to the host toolchain as round failures.
#[derive(Debug, Error)]
pub enum KldError {
    /// The host model has no counterpart for the requested operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// IO error while creating or writing generated output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A generated file was requested twice in the same round.
    #[error("Generated file already exists: {0}")]
    FileAlreadyExists(String),

    /// A package name that cannot be mapped onto an output directory.
    #[error("Invalid package name: {0}")]
    InvalidPackage(String),

    /// A generated file name that is empty or contains a path separator.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// A processor option that is not a `key=value` pair.
    #[error("Invalid processor option: {0}")]
    InvalidOption(String),

    /// A processor reported a failure.
    #[error("Processing failed: {0}")]
    Processing(String),

    /// Neutral model serialization error.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KldError {
    /// Create an unsupported-operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Create a processing error.
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing(message.into())
    }

    /// Create an invalid package error.
    pub fn invalid_package(name: impl Into<String>) -> Self {
        Self::InvalidPackage(name.into())
    }
}

pub type KldResult<T> = Result<T, KldError>;
