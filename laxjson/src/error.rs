//! Errors produced by the laxjson parser.

use thiserror::Error;

use crate::cursor::Location;

/// The kinds of syntax error the parser can detect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),
    #[error("unexpected {0}")]
    UnexpectedToken(String),
    #[error("trailing characters after the top-level value")]
    TrailingCharacters,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("values nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl ErrorKind {
    /// Attach the location at which the error was detected.
    pub fn at(self, location: Location) -> ParseError {
        ParseError {
            location,
            kind: self,
        }
    }
}

/// A syntax error, reported at the location of the offending input.
///
/// No partial value accompanies an error: parsing either yields a complete
/// tree or fails here.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {location}")]
pub struct ParseError {
    pub location: Location,
    pub kind: ErrorKind,
}
