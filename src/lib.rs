pub mod display;
pub mod error;
pub mod eval;
pub mod keypad;
pub mod numeric;

pub use error::{ensure_finite, EvalError};
pub use eval::{evaluate, evaluate_with, Evaluator, ParseOptions};
pub use numeric::{apply_unary, UnaryOp};

use log::debug;
use rayon::prelude::*;

/// Evaluates independent expressions in parallel. Results are returned in the
/// order of `expressions`.
pub fn evaluate_batch(expressions: &[&str]) -> Vec<Result<f64, EvalError>> {
    debug!("Evaluating batch of {} expressions", expressions.len());
    expressions
        .par_iter()
        .map(|expression| evaluate(expression))
        .collect()
}
