//! Headless model of a calculator keypad and display.
//!
//! Keys are accumulated into a text buffer; `=` and the single-value keys run
//! the buffer through the evaluator and replace it with the formatted result.

use crate::display::{format_value, ERROR_TEXT};
use crate::error::{ensure_finite, EvalError};
use crate::eval::Evaluator;
use crate::numeric::UnaryOp;
use log::{debug, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// Appends a character to the display text.
    Append(char),
    Equals,
    Clear,
    Backspace,
    Unary(UnaryOp),
}

impl Key {
    /// Maps a button label to a key. Any other single-character label appends
    /// itself.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "=" => Some(Key::Equals),
            "C" => Some(Key::Clear),
            "←" => Some(Key::Backspace),
            _ => {
                if let Some(op) = UnaryOp::from_label(label) {
                    return Some(Key::Unary(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Key::Append(ch)),
                    _ => None,
                }
            }
        }
    }

    /// Maps a typed character to a key. Only digits, `.`, parentheses, the four
    /// operators and `=` are accepted.
    pub fn from_keystroke(ch: char) -> Option<Self> {
        match ch {
            '=' | '\n' | '\r' => Some(Key::Equals),
            '\u{8}' | '\u{7f}' => Some(Key::Backspace),
            '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' => Some(Key::Append(ch)),
            _ => None,
        }
    }
}

/// The calculator display plus the evaluator that backs it.
#[derive(Debug, Default, Clone)]
pub struct Keypad {
    evaluator: Evaluator,
    text: String,
    last_error: Option<EvalError>,
}

impl Keypad {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            text: String::new(),
            last_error: None,
        }
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Why the display last switched to `Error`, if it did.
    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Append(ch) => self.text.push(ch),
            Key::Clear => self.text.clear(),
            Key::Backspace => {
                self.text.pop();
            }
            Key::Equals => {
                let result = self.evaluator.evaluate(&self.text);
                self.show(result);
            }
            Key::Unary(op) => {
                let result = self.evaluator.apply_unary(op, &self.text);
                self.show(result);
            }
        }
    }

    /// Presses each key of a label sequence in turn, skipping labels that map
    /// to no key.
    pub fn press_labels<'a, I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            match Key::from_label(label) {
                Some(key) => self.press(key),
                None => debug!("Ignoring unknown key label {:?}", label),
            }
        }
    }

    /// Feeds typed characters, ignoring those that are not calculator keys.
    pub fn type_str(&mut self, input: &str) {
        for key in input.chars().filter_map(Key::from_keystroke) {
            self.press(key);
        }
    }

    fn show(&mut self, result: Result<f64, EvalError>) {
        match result.and_then(ensure_finite) {
            Ok(value) => {
                self.text = format_value(value);
                self.last_error = None;
            }
            Err(err) => {
                warn!("Evaluation of {:?} failed: {}", self.text, err);
                self.text = ERROR_TEXT.to_string();
                self.last_error = Some(err);
            }
        }
    }
}
