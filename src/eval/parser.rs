use crate::error::EvalError;
use crate::eval::cursor::Cursor;
use crate::eval::ParseOptions;
use log::{debug, trace};

/// Single-pass recursive-descent evaluator.
///
/// Each grammar rule computes its value directly while it consumes input, so no
/// tree is ever built.
pub struct ExpressionParser<'a> {
    cursor: Cursor<'a>,
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> ExpressionParser<'a> {
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Parses and evaluates the whole input.
    ///
    /// Fails with [`EvalError::TrailingInput`] when a valid expression is
    /// followed by anything other than whitespace.
    pub fn parse(mut self) -> Result<f64, EvalError> {
        let value = self.parse_expression()?;
        if !self.cursor.at_end() {
            debug!(
                "Trailing input at {}: {:?}",
                self.cursor.position(),
                self.cursor.current()
            );
            return Err(EvalError::TrailingInput {
                position: self.cursor.position(),
            });
        }
        Ok(value)
    }

    fn parse_expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_term()?;
        loop {
            if self.cursor.eat('+') {
                value += self.parse_term()?;
            } else if self.cursor.eat('-') {
                value -= self.parse_term()?;
            } else {
                trace!("Expression value: {}", value);
                return Ok(value);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_factor()?;
        loop {
            if self.cursor.eat('*') {
                value *= self.parse_factor()?;
            } else if self.cursor.eat('/') {
                value /= self.parse_factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<f64, EvalError> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::NestingTooDeep {
                position: self.cursor.position(),
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = self.parse_factor_inner();
        self.depth -= 1;
        result
    }

    fn parse_factor_inner(&mut self) -> Result<f64, EvalError> {
        if self.cursor.eat('+') {
            return self.parse_factor();
        }
        if self.cursor.eat('-') {
            return Ok(-self.parse_factor()?);
        }

        // The failed `eat` calls above already skipped any whitespace.
        let start = self.cursor.position();
        if self.cursor.eat('(') {
            let value = self.parse_expression()?;
            if !self.cursor.eat(')') && self.options.strict_parens {
                return Err(EvalError::UnclosedParen { open: start });
            }
            return Ok(value);
        }

        match self.cursor.current() {
            Some(ch) if is_number_char(ch) => self.parse_number(),
            found => Err(EvalError::UnexpectedCharacter {
                position: self.cursor.position(),
                found,
            }),
        }
    }

    fn parse_number(&mut self) -> Result<f64, EvalError> {
        let literal = self.cursor.take_while(is_number_char);
        trace!("Number literal: {:?}", literal);
        literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber {
                literal: literal.to_string(),
            })
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}
