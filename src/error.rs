use thiserror::Error;

/// Every way evaluating an expression or a unary operation can fail.
///
/// Positions are byte offsets into the input text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unexpected {} at position {position}", describe(.found))]
    UnexpectedCharacter {
        position: usize,
        found: Option<char>,
    },

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("invalid number: {literal:?}")]
    InvalidNumber { literal: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number: {value}")]
    NonFiniteResult { value: f64 },

    #[error("missing ')' for '(' at position {open}")]
    UnclosedParen { open: usize },

    #[error("expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("character '{}'", ch),
        None => "end of input".to_string(),
    }
}

/// Rejects infinite and NaN values.
///
/// The evaluator follows IEEE-754 and happily returns `inf` for `5/0`; anything
/// shown to a user goes through this check first.
pub fn ensure_finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult { value })
    }
}
