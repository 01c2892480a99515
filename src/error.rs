//! Error type for algebra and multivector construction and arithmetic.

use thiserror::Error;

/// Errors raised by the geometric product engine.
///
/// Every failure is local and deterministic: retrying the same call
/// with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// Operands live in algebras of different dimension.
    #[error("dimension mismatch: G_{left} vs G_{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Requested dimension exceeds what the chosen algebra supports.
    #[error("dimension {requested} is too large (maximum is {max})")]
    DimensionTooLarge { requested: usize, max: usize },

    /// An algebra needs at least one basis vector.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// A raw coefficient vector does not have 2ⁿ entries.
    #[error("expected {expected} coefficients, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A blade label or index is not valid for the algebra.
    #[error("invalid blade '{label}': {reason}")]
    Format { label: String, reason: String },

    /// Construction path with no backing algorithm.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl GaError {
    pub(crate) fn format(label: impl Into<String>, reason: impl Into<String>) -> Self {
        GaError::Format {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GaError>;
