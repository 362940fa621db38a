//! Diagnostics produced during a resolution pass, and the sinks that receive them.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// What stage produced a diagnostic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A layer's raw content could not be decoded; the layer was skipped
    Decode,
    /// A layer decoded to the wrong shape for the accumulated value
    Merge,
    /// A pool entry failed a rule and was dropped
    Validation,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => write!(f, "decode"),
            Self::Merge => write!(f, "merge"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A human-readable report about one skipped layer or rejected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Category the pass was resolving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Namespace of the offending layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Pool the rejected entry belonged to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// Rule that rejected an entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            category: None,
            namespace: None,
            file_name: None,
            pool: None,
            rule_id: None,
            message: message.into(),
        }
    }

    /// A layer that failed to decode and was skipped.
    pub fn skipped_layer(
        namespace: impl Into<String>,
        file_name: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::new(DiagnosticKind::Decode, Severity::Warning, reason.to_string())
            .with_namespace(namespace)
            .with_file(file_name)
    }

    /// An entry dropped by a validation rule.
    pub fn rejected_entry(
        pool: impl Into<String>,
        rule_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let mut diag = Self::new(DiagnosticKind::Validation, Severity::Warning, reason);
        diag.pool = Some(pool.into());
        diag.rule_id = Some(rule_id.into());
        diag
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.severity)?;
        match self.kind {
            DiagnosticKind::Decode | DiagnosticKind::Merge => {
                write!(f, "skipping layer")?;
                if let Some(namespace) = &self.namespace {
                    write!(f, " {namespace}")?;
                }
                if let Some(file) = &self.file_name {
                    write!(f, ":{file}")?;
                }
                write!(f, ". Reason: {}", self.message)
            }
            DiagnosticKind::Validation => {
                write!(f, "dropping entry")?;
                if let Some(pool) = &self.pool {
                    write!(f, " from pool '{pool}'")?;
                }
                if let Some(rule) = &self.rule_id {
                    write!(f, " ({rule})")?;
                }
                write!(f, ": {}", self.message)
            }
        }
    }
}

/// Receives diagnostics as a pass produces them.
///
/// Attaching a sink never changes what a pass resolves.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.lock().push(diagnostic.clone());
    }
}

/// Sink that forwards every diagnostic to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            target: "bountiful::diagnostic",
            kind = %diagnostic.kind,
            "{diagnostic}"
        );
    }
}
