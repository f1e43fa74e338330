use abacus_rs::keypad::{Key, Keypad};
use abacus_rs::{Evaluator, ParseOptions};
use std::io::{self, BufRead};

/// Reads lines from stdin and types them into a keypad. A line ending counts as
/// `=`, so each line is evaluated. Set `ABACUS_STRICT_PARENS=1` to reject
/// unclosed groups.
fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let options = ParseOptions {
        strict_parens: std::env::var("ABACUS_STRICT_PARENS").is_ok_and(|v| v == "1"),
        ..ParseOptions::default()
    };
    let mut keypad = Keypad::new(Evaluator::new(options));

    for line in io::stdin().lock().lines() {
        let line = line?;
        keypad.press(Key::Clear);
        keypad.type_str(&line);
        keypad.type_str("=");
        match keypad.last_error() {
            Some(err) => println!("{} ({})", keypad.text(), err),
            None => println!("{}", keypad.text()),
        }
    }

    Ok(())
}
