/// Position-tracking view over an expression string.
///
/// `current` always holds the character at `position`, or `None` once the
/// input is exhausted. The position only ever moves forward.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            current: input.chars().next(),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Moves past the current character.
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.position += ch.len_utf8();
            self.current = self.input[self.position..].chars().next();
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips whitespace, then consumes `expected` if it is next.
    ///
    /// Returns `false` without consuming anything else when it is not.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns the slice read.
    pub(crate) fn take_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while matches!(self.current, Some(ch) if predicate(ch)) {
            self.advance();
        }
        &self.input[start..self.position]
    }
}
