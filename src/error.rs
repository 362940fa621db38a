//! Error types for bountiful.
//!
//! Content problems (a malformed layer, an invalid entry) are never errors at this
//! level: they become [`Diagnostic`](crate::diagnostic::Diagnostic)s and the pass
//! continues. The types here cover the few things that can actually stop a command.

use thiserror::Error;

use crate::core::ValueKind;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum BountifulError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("content source error: {0}")]
    Source(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// `--strict` was given and the pass produced diagnostics
    #[error("{0} diagnostic(s) reported in strict mode")]
    StrictFailure(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BountifulError>;

/// Failure to turn one layer's raw bytes into a typed value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("content is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("unsupported format '{0}'")]
    UnsupportedFormat(String),

    #[error("malformed {format} content: {reason}")]
    Malformed { format: &'static str, reason: String },
}

/// Two layers of the same file decoded to different value shapes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot merge a {incoming} layer into a {accumulated} value")]
pub struct KindMismatch {
    pub accumulated: ValueKind,
    pub incoming: ValueKind,
}
