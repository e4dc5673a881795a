//! Error handling for Katax conversions
//!
//! This module provides a unified error type and result type for all
//! conversion operations. Structural surprises in the render tree are not
//! errors: they degrade to fallback fragments and are reported as warnings.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Formula index out of range
    FormulaNotFound { index: usize, available: usize },
    /// Unexpected fault while converting a single formula
    InternalError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::FormulaNotFound { index, available } => {
                write!(
                    f,
                    "Formula {} not found ({} formula(s) in input)",
                    index, available
                )
            }
            ConversionError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Kind of non-fatal issue found while converting a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The formula root has no `.katex-html` sub-root
    MissingFormulaRoot,
    /// An expected sub-node was absent and a fallback fragment was used
    MissingStructure,
    /// Nesting exceeded the configured depth
    RecursionLimit,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MissingFormulaRoot => write!(f, "missing formula root"),
            WarningKind::MissingStructure => write!(f, "missing structure"),
            WarningKind::RecursionLimit => write!(f, "recursion limit"),
        }
    }
}

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Construct being reconstructed when the warning was raised
    pub construct: Option<&'static str>,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            construct: None,
        }
    }

    pub fn in_construct(
        kind: WarningKind,
        construct: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            construct: Some(construct),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(construct) = self.construct {
            write!(f, "[{}] {}: {}", self.kind, construct, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The recovered LaTeX
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Empty output means there is nothing to deliver
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get warnings as formatted strings.
    pub fn format_warnings(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn internal(message: impl Into<String>) -> Self {
        ConversionError::InternalError {
            message: message.into(),
        }
    }

    pub fn not_found(index: usize, available: usize) -> Self {
        ConversionError::FormulaNotFound { index, available }
    }
}
