use abacus_rs::display::format_result;
use abacus_rs::{apply_unary, evaluate, UnaryOp};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let expressions = ["2+3*4", "(2+3)*4", "10-2-3", "--5", ".5+.5", "5/0", "2+3)", ""];

    for expression in expressions {
        let result = evaluate(expression);
        debug!("raw result for {:?}: {:?}", expression, result);
        println!("{:>10} = {}", expression, format_result(&result));
    }

    for (op, text) in [
        (UnaryOp::Square, "12"),
        (UnaryOp::Sqrt, "-4"),
        (UnaryOp::Reciprocal, "0"),
        (UnaryOp::Percent, "50"),
    ] {
        let result = apply_unary(op, text);
        println!("{:>4}({}) = {}", op.label(), text, format_result(&result));
    }
}
