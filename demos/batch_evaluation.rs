use abacus_rs::display::format_result;
use abacus_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "(10 + 20) * 3 / (4 - 1) + 5",
        "100/10/2",
        "1/3 + 1/3 + 1/3",
        "-(2 * (3 + 4",
        "7 7",
    ];

    let results = evaluate_batch(&expressions);
    for (i, (expression, result)) in expressions.iter().zip(&results).enumerate() {
        match result {
            Ok(_) => println!("Result {}: {} = {}", i, expression, format_result(result)),
            Err(err) => println!("Result {}: {} failed: {}", i, expression, err),
        }
    }
}
