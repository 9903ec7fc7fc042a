//! Tokenizer for the dialect.

use std::fmt;

use crate::cursor::{Cursor, Location};
use crate::error::{ErrorKind, ParseError};

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    True,
    False,
    Null,
    Nan,
    Infinity,
    MinusInfinity,
    /// A numeric literal, already converted to a double.
    Number(f64),
    /// A quoted string literal, carrying the raw text between the quotes
    /// with escape sequences untouched.
    Quoted(String),
    /// A bare `[a-zA-Z_]+` word that is not one of the keywords.
    Bare(String),
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftBrace => write!(f, "'{{'"),
            Self::RightBrace => write!(f, "'}}'"),
            Self::LeftBracket => write!(f, "'['"),
            Self::RightBracket => write!(f, "']'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::True => write!(f, "'true'"),
            Self::False => write!(f, "'false'"),
            Self::Null => write!(f, "'null'"),
            Self::Nan => write!(f, "'NaN'"),
            Self::Infinity => write!(f, "'Infinity'"),
            Self::MinusInfinity => write!(f, "'-Infinity'"),
            Self::Number(_) => write!(f, "number"),
            Self::Quoted(_) | Self::Bare(_) => write!(f, "string"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Splits input text into [`Token`]s, discarding whitespace and `//`
/// comments along the way.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> From<&'a str> for Lexer<'a> {
    fn from(input: &'a str) -> Self {
        Self {
            cursor: Cursor::from(input),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Produces the next token along with the location where it starts.
    ///
    /// Once the input is exhausted this keeps returning [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<(Token, Location), ParseError> {
        self.skip_trivia()?;
        let start = self.cursor.location();
        let token = match self.cursor.peek() {
            None => Token::Eof,
            Some('{') => self.punctuation(Token::LeftBrace),
            Some('}') => self.punctuation(Token::RightBrace),
            Some('[') => self.punctuation(Token::LeftBracket),
            Some(']') => self.punctuation(Token::RightBracket),
            Some(':') => self.punctuation(Token::Colon),
            Some(',') => self.punctuation(Token::Comma),
            Some('"') => self.scan_quoted(start)?,
            Some(ch) if is_word_char(ch) => self.scan_word(),
            Some(ch) if ch.is_ascii_digit() || ch == '.' || ch == '+' || ch == '-' => {
                self.scan_number(start)?
            }
            Some(ch) => return Err(ErrorKind::UnexpectedChar(ch).at(start)),
        };
        Ok((token, start))
    }

    #[inline]
    fn punctuation(&mut self, token: Token) -> Token {
        self.cursor.bump();
        token
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            if self.cursor.bump_if(char::is_whitespace).is_some() {
                continue;
            }
            if self.cursor.peek() == Some('/') {
                let start = self.cursor.location();
                self.cursor.bump();
                if self.cursor.bump_if(|ch| ch == '/').is_none() {
                    // A lone slash starts nothing in this dialect.
                    return Err(ErrorKind::UnexpectedChar('/').at(start));
                }
                // The comment runs to the end of the line. The newline itself
                // is left for the whitespace pass above.
                while self.cursor.bump_if(|ch| ch != '\n').is_some() {}
                continue;
            }
            return Ok(());
        }
    }

    /// Scans a double-quoted string, returning the raw text between the
    /// quotes. A backslash shields the character after it from terminating
    /// the scan; decoding escape sequences is the parser's business.
    fn scan_quoted(&mut self, start: Location) -> Result<Token, ParseError> {
        // Opening quote.
        self.cursor.bump();
        let mut raw = String::new();
        loop {
            match self.cursor.bump() {
                None | Some('\n') => return Err(ErrorKind::UnterminatedString.at(start)),
                Some('"') => return Ok(Token::Quoted(raw)),
                Some('\\') => {
                    raw.push('\\');
                    match self.cursor.bump() {
                        None | Some('\n') => {
                            return Err(ErrorKind::UnterminatedString.at(start))
                        }
                        Some(ch) => raw.push(ch),
                    }
                }
                Some(ch) => raw.push(ch),
            }
        }
    }

    /// Scans a maximal `[a-zA-Z_]+` run and checks it against the keyword
    /// table. Anything else is a bare string, so `truely` stays a word and
    /// never decays into `true`.
    fn scan_word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(ch) = self.cursor.bump_if(is_word_char) {
            word.push(ch);
        }
        match word.as_str() {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            "NaN" => Token::Nan,
            "Infinity" => Token::Infinity,
            _ => Token::Bare(word),
        }
    }

    /// Scans a numeric literal of the shape
    /// `[+-]? ( DIGITS ( "." DIGITS? )? | "." DIGITS ) ( [eE] [+-]? DIGITS )?`.
    ///
    /// The keyword table never feeds this scanner, so the `f64` conversion
    /// cannot pick up `inf` or `nan` spellings by accident.
    fn scan_number(&mut self, start: Location) -> Result<Token, ParseError> {
        let mut text = String::new();
        if let Some(sign) = self.cursor.bump_if(|ch| ch == '+' || ch == '-') {
            text.push(sign);
            if self.cursor.peek().map_or(false, is_word_char) {
                while let Some(ch) = self.cursor.bump_if(is_word_char) {
                    text.push(ch);
                }
                // "-Infinity" is a keyword in its own right. No other word
                // takes a sign.
                if text == "-Infinity" {
                    return Ok(Token::MinusInfinity);
                }
                return Err(ErrorKind::InvalidNumber(text).at(start));
            }
        }
        let mut integer = false;
        while let Some(ch) = self.cursor.bump_if(|ch| ch.is_ascii_digit()) {
            text.push(ch);
            integer = true;
        }
        let mut fraction = false;
        if let Some(dot) = self.cursor.bump_if(|ch| ch == '.') {
            text.push(dot);
            while let Some(ch) = self.cursor.bump_if(|ch| ch.is_ascii_digit()) {
                text.push(ch);
                fraction = true;
            }
        }
        // ".5" and "3." are fine, a lone "." or a bare sign is not.
        if !integer && !fraction {
            return Err(ErrorKind::InvalidNumber(text).at(start));
        }
        if let Some(e) = self.cursor.bump_if(|ch| ch == 'e' || ch == 'E') {
            text.push(e);
            if let Some(sign) = self.cursor.bump_if(|ch| ch == '+' || ch == '-') {
                text.push(sign);
            }
            let mut exponent = false;
            while let Some(ch) = self.cursor.bump_if(|ch| ch.is_ascii_digit()) {
                text.push(ch);
                exponent = true;
            }
            if !exponent {
                return Err(ErrorKind::InvalidNumber(text).at(start));
            }
        }
        match text.parse::<f64>() {
            // Out-of-range literals like 1e999 saturate to the infinities
            // here rather than failing.
            Ok(number) => Ok(Token::Number(number)),
            Err(_) => Err(ErrorKind::InvalidNumber(text).at(start)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::from(input);
        let mut tokens = Vec::new();
        loop {
            let (token, _) = lexer.next_token().unwrap();
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn lex_err(input: &str) -> ParseError {
        let mut lexer = Lexer::from(input);
        loop {
            match lexer.next_token() {
                Ok((Token::Eof, _)) => panic!("expected {:?} to fail to tokenize", input),
                Ok(_) => continue,
                Err(e) => return e,
            }
        }
    }

    #[test]
    fn punctuation_and_keywords() {
        assert_eq!(
            lex("{ } [ ] : , true false null NaN Infinity -Infinity"),
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Colon,
                Token::Comma,
                Token::True,
                Token::False,
                Token::Null,
                Token::Nan,
                Token::Infinity,
                Token::MinusInfinity,
                Token::Eof,
            ],
        );
    }

    #[test]
    fn neighboring_words_stay_words() {
        assert_eq!(
            lex("truely nan infinity False YES_1"),
            vec![
                Token::Bare("truely".to_string()),
                Token::Bare("nan".to_string()),
                Token::Bare("infinity".to_string()),
                Token::Bare("False".to_string()),
                Token::Bare("YES_".to_string()),
                Token::Number(1.0),
                Token::Eof,
            ],
        );
    }

    #[test]
    fn number_shapes() {
        let cases = [
            ("0", 0.0),
            ("-2", -2.0),
            ("+3", 3.0),
            ("3.3", 3.3),
            ("4.4e5", 4.4e5),
            ("6.6e-7", 6.6e-7),
            ("6.6E+7", 6.6e7),
            (".5", 0.5),
            ("3.", 3.0),
            ("-0.0", 0.0),
        ];
        for (input, expected) in cases {
            assert_eq!(
                lex(input),
                vec![Token::Number(expected), Token::Eof],
                "input: {input:?}",
            );
        }
    }

    #[test]
    fn out_of_range_numbers_saturate() {
        assert_eq!(lex("1e999"), vec![Token::Number(f64::INFINITY), Token::Eof]);
        assert_eq!(
            lex("-1e999"),
            vec![Token::Number(f64::NEG_INFINITY), Token::Eof],
        );
        assert_eq!(lex("1e-999"), vec![Token::Number(0.0), Token::Eof]);
    }

    #[test]
    fn malformed_numbers() {
        for input in ["-", "+", ".", "1e", "2.5e+", "-NaN", "+Infinity", "-null"] {
            let e = lex_err(input);
            assert!(
                matches!(e.kind, ErrorKind::InvalidNumber(_)),
                "input {input:?} produced {e:?}",
            );
        }
    }

    #[test]
    fn quoted_strings_keep_raw_text() {
        assert_eq!(
            lex(r#""And a \"b""#),
            vec![Token::Quoted(r#"And a \"b"#.to_string()), Token::Eof],
        );
        assert_eq!(
            lex(r#""tab\there""#),
            vec![Token::Quoted(r"tab\there".to_string()), Token::Eof],
        );
        assert_eq!(lex(r#""""#), vec![Token::Quoted(String::new()), Token::Eof]);
    }

    #[test]
    fn unterminated_strings() {
        for input in [r#""abc"#, r#""abc\"#, r#""ab\""#, "\"ab\ncd\""] {
            let e = lex_err(input);
            assert_eq!(e.kind, ErrorKind::UnterminatedString, "input: {input:?}");
            assert_eq!(e.location, Location { line: 1, column: 1 });
        }
    }

    #[test]
    fn comments_are_trivia() {
        assert_eq!(
            lex("// leading\n1 // trailing\n// closing"),
            vec![Token::Number(1.0), Token::Eof],
        );
        // A comment at the very end of input has no newline to stop at.
        assert_eq!(lex("true // no newline"), vec![Token::True, Token::Eof]);
    }

    #[test]
    fn lone_slash_is_rejected() {
        let e = lex_err("1 / 2");
        assert_eq!(e.kind, ErrorKind::UnexpectedChar('/'));
        assert_eq!(e.location, Location { line: 1, column: 3 });
    }

    #[test]
    fn token_locations() {
        let mut lexer = Lexer::from("{\n  \"a\": 1\n}");
        let mut pairs = Vec::new();
        loop {
            let (token, location) = lexer.next_token().unwrap();
            if token == Token::Eof {
                break;
            }
            pairs.push((token, location));
        }
        assert_eq!(
            pairs,
            vec![
                (Token::LeftBrace, Location { line: 1, column: 1 }),
                (Token::Quoted("a".to_string()), Location { line: 2, column: 3 }),
                (Token::Colon, Location { line: 2, column: 6 }),
                (Token::Number(1.0), Location { line: 2, column: 8 }),
                (Token::RightBrace, Location { line: 3, column: 1 }),
            ],
        );
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::from("  ");
        assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
        assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
    }
}
