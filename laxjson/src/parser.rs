//! Parsing functionality for the dialect.

use std::mem;

use crate::cursor::Location;
use crate::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Token};
use crate::value::{Map, Value};

/// How deep values may nest before the parser gives up.
///
/// Every array or object between the document root and the value under
/// construction counts as one level. The cap keeps hostile inputs from
/// exhausting the call stack.
pub(crate) const MAX_DEPTH: usize = 128;

/// Parses a complete document into a [`Value`].
///
/// The whole input must be consumed: anything after the top-level value
/// other than whitespace and comments is an error.
pub(crate) fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input)?;
    let value = parser.parse_value()?;
    parser.expect_eof()?;
    Ok(value)
}

/// Recursive descent parser, one token of lookahead.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// Where `current` starts in the input.
    location: Location,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::from(input);
        let (current, location) = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            location,
            depth: 0,
        })
    }

    /// Swaps the next token into view, returning the one it replaces.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let (next, location) = self.lexer.next_token()?;
        self.location = location;
        Ok(mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, token: Token) -> Result<(), ParseError> {
        if self.current == token {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.current == Token::Eof {
            Ok(())
        } else {
            Err(ErrorKind::TrailingCharacters.at(self.location))
        }
    }

    /// Error for the token currently in view, which is left unconsumed.
    fn unexpected(&self) -> ParseError {
        match self.current {
            Token::Eof => ErrorKind::UnexpectedEof.at(self.location),
            ref token => ErrorKind::UnexpectedToken(token.to_string()).at(self.location),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ErrorKind::NestingTooDeep(MAX_DEPTH).at(self.location));
        }
        self.depth += 1;
        Ok(())
    }

    #[inline]
    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.current {
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            _ => {}
        }
        let location = self.location;
        match self.advance()? {
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            Token::Nan => Ok(Value::Number(f64::NAN)),
            Token::Infinity => Ok(Value::Number(f64::INFINITY)),
            Token::MinusInfinity => Ok(Value::Number(f64::NEG_INFINITY)),
            Token::Number(number) => Ok(Value::Number(number)),
            Token::Quoted(raw) => Ok(Value::String(unescape(&raw))),
            Token::Bare(word) => Ok(Value::String(word)),
            Token::Eof => Err(ErrorKind::UnexpectedEof.at(location)),
            token => Err(ErrorKind::UnexpectedToken(token.to_string()).at(location)),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        // Opening bracket.
        self.advance()?;
        let mut items = Vec::new();
        loop {
            // Covers both the empty array and a trailing comma.
            if self.current == Token::RightBracket {
                self.advance()?;
                break;
            }
            items.push(self.parse_value()?);
            match self.current {
                Token::Comma => {
                    self.advance()?;
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        // Opening brace.
        self.advance()?;
        let mut entries = Map::new();
        loop {
            if self.current == Token::RightBrace {
                self.advance()?;
                break;
            }
            let location = self.location;
            let key = match self.advance()? {
                Token::Quoted(raw) => unescape(&raw),
                Token::Bare(word) => word,
                // Keywords never double as keys, so { true: 1 } is an error.
                Token::Eof => return Err(ErrorKind::UnexpectedEof.at(location)),
                token => {
                    return Err(ErrorKind::UnexpectedToken(token.to_string()).at(location))
                }
            };
            self.expect(Token::Colon)?;
            // A repeated key overwrites the earlier value but keeps the slot
            // it first appeared in.
            entries.insert(key, self.parse_value()?);
            match self.current {
                Token::Comma => {
                    self.advance()?;
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.leave();
        Ok(Value::Object(entries))
    }
}

/// Rewrites `\"` sequences to plain quotes. Every other escape sequence
/// passes through untouched, so `\n` stays a backslash followed by an `n`.
fn unescape(raw: &str) -> String {
    raw.replace("\\\"", "\"")
}
