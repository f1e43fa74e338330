mod cursor;
mod parser;

pub use parser::ExpressionParser;

use crate::error::EvalError;
use crate::numeric::UnaryOp;
use log::debug;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a `(` group whose closing `)` never appears. Off by default, in
    /// which case `(1+2` evaluates to 3.
    pub strict_parens: bool,
    /// Maximum number of nested factors (parentheses and unary signs).
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_parens: false,
            max_depth: 256,
        }
    }
}

/// Evaluates `text` with the default options.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    evaluate_with(text, &ParseOptions::default())
}

/// Evaluates `text` with the given options.
pub fn evaluate_with(text: &str, options: &ParseOptions) -> Result<f64, EvalError> {
    debug!("Evaluating expression: {:?}", text);
    let result = ExpressionParser::new(text, options).parse();
    debug!("Evaluation result: {:?}", result);
    result
}

/// Holds parse options so callers configure once and evaluate many times.
///
/// The evaluator keeps no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    options: ParseOptions,
}

impl Evaluator {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Evaluates an expression string, e.g. the text on the display when `=` is
    /// pressed.
    pub fn evaluate(&self, text: &str) -> Result<f64, EvalError> {
        evaluate_with(text, &self.options)
    }

    /// Applies a single-value operation to a plain number literal.
    pub fn apply_unary(&self, op: UnaryOp, text: &str) -> Result<f64, EvalError> {
        crate::numeric::apply_unary(op, text)
    }
}
