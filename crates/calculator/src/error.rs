//! Error types for expression evaluation.

use thiserror::Error;

/// Result type for evaluation.
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an expression cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing to evaluate.
    #[error("empty expression")]
    Empty,

    /// The expression stops where an operand was expected (e.g. `2+`).
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A character that does not fit the grammar at this position.
    #[error("unexpected '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// Multi-digit literal starting with zero, such as `05`.
    #[error("leading zero in literal '{literal}'")]
    LeadingZero { literal: String },

    #[error("division by zero")]
    DivisionByZero,

    /// A float result that is not finite, or an integer too large for a float.
    #[error("numeric overflow")]
    Overflow,
}
