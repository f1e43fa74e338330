use crate::error::EvalError;
use log::debug;

/// Single-value operations applied to the number currently on display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Square,
    Sqrt,
    Reciprocal,
    Percent,
}

impl UnaryOp {
    /// Maps a keypad label (`x²`, `√`, `1/x`, `%`) to its operation.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "x²" => Some(UnaryOp::Square),
            "√" => Some(UnaryOp::Sqrt),
            "1/x" => Some(UnaryOp::Reciprocal),
            "%" => Some(UnaryOp::Percent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnaryOp::Square => "x²",
            UnaryOp::Sqrt => "√",
            UnaryOp::Reciprocal => "1/x",
            UnaryOp::Percent => "%",
        }
    }

    /// Applies the operation to an already parsed value.
    ///
    /// Only the reciprocal of zero is an error here. A negative square root
    /// comes back as NaN and is left for [`crate::ensure_finite`] to reject.
    pub fn apply(&self, value: f64) -> Result<f64, EvalError> {
        match self {
            UnaryOp::Square => Ok(value * value),
            UnaryOp::Sqrt => Ok(value.sqrt()),
            UnaryOp::Reciprocal => {
                if value == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(1.0 / value)
                }
            }
            UnaryOp::Percent => Ok(value / 100.0),
        }
    }
}

/// Parses `text` as a single floating-point literal, ignoring surrounding
/// whitespace. No expression syntax is accepted.
pub fn parse_literal(text: &str) -> Result<f64, EvalError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber {
            literal: text.to_string(),
        })
}

/// Parses `text` as a number and applies `op` to it.
pub fn apply_unary(op: UnaryOp, text: &str) -> Result<f64, EvalError> {
    let value = parse_literal(text)?;
    let result = op.apply(value);
    debug!("{:?}({}) = {:?}", op, value, result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ensure_finite;

    #[test]
    fn test_square() {
        assert_eq!(apply_unary(UnaryOp::Square, "3"), Ok(9.0));
        assert_eq!(apply_unary(UnaryOp::Square, "-1.5"), Ok(2.25));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(apply_unary(UnaryOp::Sqrt, "16"), Ok(4.0));
        assert_eq!(apply_unary(UnaryOp::Sqrt, "0"), Ok(0.0));
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        let value = apply_unary(UnaryOp::Sqrt, "-4").unwrap();
        assert!(value.is_nan());
        assert!(matches!(
            ensure_finite(value),
            Err(EvalError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(apply_unary(UnaryOp::Reciprocal, "4"), Ok(0.25));
        assert_eq!(apply_unary(UnaryOp::Reciprocal, "-0.5"), Ok(-2.0));
    }

    #[test]
    fn test_reciprocal_of_zero() {
        assert_eq!(
            apply_unary(UnaryOp::Reciprocal, "0"),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            apply_unary(UnaryOp::Reciprocal, "-0.0"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(apply_unary(UnaryOp::Percent, "50"), Ok(0.5));
        assert_eq!(apply_unary(UnaryOp::Percent, "250"), Ok(2.5));
    }

    #[test]
    fn test_literal_is_not_an_expression() {
        for input in ["2+2", "(4)", "", "Error", "1.2.3", "--4"] {
            assert_eq!(
                apply_unary(UnaryOp::Square, input),
                Err(EvalError::InvalidNumber {
                    literal: input.to_string()
                }),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_literal_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_literal("  12.5 "), Ok(12.5));
        assert_eq!(parse_literal("-.5"), Ok(-0.5));
        assert_eq!(parse_literal("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_labels_round_trip() {
        for op in [
            UnaryOp::Square,
            UnaryOp::Sqrt,
            UnaryOp::Reciprocal,
            UnaryOp::Percent,
        ] {
            assert_eq!(UnaryOp::from_label(op.label()), Some(op));
        }
        assert_eq!(UnaryOp::from_label("="), None);
    }
}
