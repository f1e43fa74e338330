use crate::error::{ensure_finite, EvalError};

/// Text shown in place of a number whenever anything goes wrong.
pub const ERROR_TEXT: &str = "Error";

/// Formats a finite value for the display.
///
/// Uses the shortest decimal that round-trips and never switches to exponent
/// notation, so the text can be typed back into an expression. Integral values
/// carry no fractional part (`14`, not `14.0`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Formats an evaluation result, collapsing every failure (including
/// non-finite values) to [`ERROR_TEXT`].
pub fn format_result(result: &Result<f64, EvalError>) -> String {
    match result.clone().and_then(ensure_finite) {
        Ok(value) => format_value(value),
        Err(_) => ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    #[test]
    fn test_format_integral_values() {
        assert_eq!(format_value(14.0), "14");
        assert_eq!(format_value(-5.0), "-5");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_format_fractional_values() {
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_avoids_exponent_notation() {
        assert_eq!(format_value(1e16), "10000000000000000");
        assert_eq!(format_value(1e-7), "0.0000001");
    }

    #[test]
    fn test_formatted_value_reparses() {
        for input in ["1/3", "2/3*7", "123456789*987654321", "-1/7"] {
            let value = evaluate(input).unwrap();
            let text = format_value(value);
            assert_eq!(evaluate(&text), Ok(value), "{} did not re-parse", text);
        }
    }

    #[test]
    fn test_format_result_collapses_errors() {
        assert_eq!(format_result(&Ok(3.0)), "3");
        assert_eq!(format_result(&Ok(f64::INFINITY)), ERROR_TEXT);
        assert_eq!(format_result(&Ok(f64::NAN)), ERROR_TEXT);
        assert_eq!(format_result(&Err(EvalError::DivisionByZero)), ERROR_TEXT);
        assert_eq!(format_result(&evaluate("2+")), ERROR_TEXT);
    }
}
