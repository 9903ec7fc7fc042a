//! Input handling for the laxjson parser.

use std::fmt;
use std::str::Chars;

/// A position within the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Default for Location {
    fn default() -> Self {
        // Prefer human-readable locations.
        Self { line: 1, column: 1 }
    }
}

impl Location {
    #[inline]
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    #[inline]
    pub fn next_column(&mut self) {
        self.column += 1;
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A forward-only character cursor over the input text.
///
/// Tracks the location of the next unread character: newlines advance the
/// line counter, carriage returns advance nothing, everything else advances
/// the column.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    peeked: Option<char>,
    location: Location,
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            peeked: None,
            location: Location::default(),
        }
    }
}

impl<'a> Cursor<'a> {
    /// The location of the next character [`Cursor::bump`] would return.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }
        self.peeked
    }

    /// Consume and return the next character, advancing the location.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peeked.take().or_else(|| self.chars.next())?;
        if ch == '\n' {
            self.location.next_line();
        } else if ch != '\r' {
            self.location.next_column();
        }
        Some(ch)
    }

    /// Consume the next character only if it satisfies `pred`.
    pub fn bump_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if pred(ch) => self.bump(),
            _ => None,
        }
    }
}
