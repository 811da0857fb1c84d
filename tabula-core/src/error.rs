//! Matrix errors and their structured reports
//!
//! `MatrixError` is what every fallible operation returns. `ErrorReport` is the
//! serializable, machine-readable view of the same failure for callers that
//! forward errors somewhere other than a terminal.

use crate::shape::Shape;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
    pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
    pub const MALFORMED_ROW: &str = "MALFORMED_ROW";
    pub const COLUMN_MISMATCH: &str = "COLUMN_MISMATCH";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Error type for matrix construction, arithmetic, comparison and parsing
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Dimensions are zero, overflow, or disagree with the entry count.
    #[error("invalid matrix size: {size} entries for {rows}×{cols}")]
    InvalidShape { size: usize, rows: usize, cols: usize },

    /// Operand shapes are incompatible for `op`.
    #[error("{op}: incompatible dimensions {left} and {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    /// A row token does not match the numeric-row grammar, or the parsed
    /// rows do not form a valid matrix.
    #[error("malformed row {row}: {text:?}")]
    MalformedRow { row: usize, text: String },

    /// Rows disagree on their element count.
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The line source or sink failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::InvalidShape { .. } => codes::INVALID_SHAPE,
            MatrixError::ShapeMismatch { .. } => codes::SHAPE_MISMATCH,
            MatrixError::MalformedRow { .. } => codes::MALFORMED_ROW,
            MatrixError::ColumnMismatch { .. } => codes::COLUMN_MISMATCH,
            MatrixError::Io(_) => codes::IO_ERROR,
        }
    }
}

/// Convenience alias used throughout Tabula.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Operation that rejected its operands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Row index (0-based) in parsed input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,

    /// Operand shapes involved, in operand order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub shapes: Vec<Shape>,
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ErrorReport {
    /// Create a new report
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set operation context
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.operation = Some(operation.into());
        self
    }

    /// Builder: set row context
    pub fn at_row(mut self, row: usize) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.row = Some(row);
        self
    }

    /// Builder: record an operand shape
    pub fn with_shape(mut self, shape: Shape) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.shapes.push(shape);
        self
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl From<&MatrixError> for ErrorReport {
    fn from(err: &MatrixError) -> Self {
        let report = ErrorReport::new(err.code(), err.to_string());
        match err {
            MatrixError::InvalidShape { rows, cols, .. } => report
                .with_suggestion(format!(
                    "Supply exactly rows × cols entries with rows, cols ≥ 1 ({} × {} given)",
                    rows, cols
                )),
            MatrixError::ShapeMismatch { op, left, right } => report
                .with_suggestion(if *op == "mul" {
                    "Left operand columns must equal right operand rows"
                } else {
                    "Operands must have identical dimensions"
                })
                .in_operation(*op)
                .with_shape(*left)
                .with_shape(*right),
            MatrixError::MalformedRow { row, .. } => report
                .with_suggestion("Write rows as [n n ...] with single spaces, separated by \", \"")
                .at_row(*row),
            MatrixError::ColumnMismatch { row, .. } => report
                .with_suggestion("Give every row the same number of entries")
                .at_row(*row),
            MatrixError::Io(_) => report,
        }
    }
}

impl From<MatrixError> for ErrorReport {
    fn from(err: MatrixError) -> Self {
        ErrorReport::from(&err)
    }
}
