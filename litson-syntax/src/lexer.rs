//! Streaming lexer for the annotated object-literal syntax.
//!
//! Recognizes the punctuation of object and array literals, single- and
//! double-quoted strings with the usual escape sequences, decimal
//! numbers, bare identifiers, and the `true` / `false` / `null`
//! keywords. `//` line comments and `/* ... */` block comments are
//! skipped between tokens.
//!
//! Tokens are produced on demand. The parser stops pulling once the
//! literal's closing delimiter arrives, so source text after the literal
//! (statement terminators, further declarations) is never examined and
//! never has to lex cleanly.

use crate::error::{ParseError, Result};
use crate::token::{Span, SpannedToken, Token};

/// Pull-based lexer over a conversion region.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    start_offset: usize,
}

impl Lexer {
    /// Creates a lexer reading from the start of `text`.
    pub fn new(text: &str) -> Self {
        Self::with_origin(text, Span::start())
    }

    /// Creates a lexer whose reported positions begin at `origin`.
    ///
    /// Used when `text` is a region cut out of a larger file: `origin`
    /// is the position of the region's first character within that
    /// file, and every span the lexer produces stays file-absolute.
    pub fn with_origin(text: &str, origin: Span) -> Self {
        Lexer {
            input: text.chars().collect(),
            position: 0,
            line: origin.line,
            column: origin.column,
            start_offset: origin.offset,
        }
    }

    /// Produces the next token, skipping any whitespace and comments
    /// before it. Returns [`Token::Eof`] at the end of input, forever.
    pub fn next_token(&mut self) -> Result<SpannedToken> {
        self.skip_whitespace_and_comments()?;

        let span = self.current_span();
        let Some(ch) = self.peek() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                span,
            });
        };

        match ch {
            '{' => self.single(Token::LBrace, span),
            '}' => self.single(Token::RBrace, span),
            '[' => self.single(Token::LBracket, span),
            ']' => self.single(Token::RBracket, span),
            ':' => self.single(Token::Colon, span),
            ',' => self.single(Token::Comma, span),
            '"' | '\'' => self.read_string(span, ch),
            c if c.is_ascii_digit() || c == '-' => self.read_number(span),
            c if is_identifier_start(c) => Ok(self.read_identifier_or_keyword(span)),
            _ => Err(ParseError::UnexpectedChar { ch, span }),
        }
    }

    fn single(&mut self, token: Token, span: Span) -> Result<SpannedToken> {
        self.advance();
        Ok(SpannedToken { token, span })
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Consumes one character, tracking line and column.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
            offset: self.start_offset + self.position,
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.peek() == Some('/') && self.peek_ahead(1) == Some('/') {
                while let Some(ch) = self.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }
            if self.peek() == Some('/') && self.peek_ahead(1) == Some('*') {
                let span = self.current_span();
                self.advance();
                self.advance();
                loop {
                    if self.is_at_end() {
                        return Err(ParseError::UnterminatedComment { span });
                    }
                    if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                        self.advance();
                        self.advance();
                        break;
                    }
                    self.advance();
                }
                continue;
            }
            return Ok(());
        }
    }

    /// Reads a string literal. `start` is the span of the opening quote,
    /// `quote` the quote character, which also terminates the literal.
    fn read_string(&mut self, start: Span, quote: char) -> Result<SpannedToken> {
        self.advance();
        let mut value = String::new();
        loop {
            let here = self.current_span();
            match self.advance() {
                None => return Err(ParseError::UnterminatedString { span: start }),
                Some(c) if c == quote => break,
                // A raw newline ends the literal without closing it.
                Some('\n') => return Err(ParseError::UnterminatedString { span: start }),
                Some('\\') => value.push(self.read_escape(start, here)?),
                Some(c) => value.push(c),
            }
        }
        Ok(SpannedToken {
            token: Token::String(value),
            span: start,
        })
    }

    fn read_escape(&mut self, string_start: Span, escape_span: Span) -> Result<char> {
        match self.advance() {
            None => Err(ParseError::UnterminatedString { span: string_start }),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('0') => Ok('\0'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('\'') => Ok('\''),
            Some('"') => Ok('"'),
            Some('u') => self.read_unicode_escape(escape_span),
            Some(ch) => Err(ParseError::InvalidEscape {
                ch,
                span: escape_span,
            }),
        }
    }

    /// Reads the `XXXX` of a `\uXXXX` escape, combining UTF-16
    /// surrogate pairs into a single character. Lone surrogate halves
    /// are rejected.
    fn read_unicode_escape(&mut self, span: Span) -> Result<char> {
        let high = self.read_hex4(span)?;
        if (0xD800..=0xDBFF).contains(&high) {
            if self.peek() == Some('\\') && self.peek_ahead(1) == Some('u') {
                self.advance();
                self.advance();
                let low = self.read_hex4(span)?;
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined)
                        .ok_or(ParseError::InvalidUnicodeEscape { span });
                }
            }
            return Err(ParseError::InvalidUnicodeEscape { span });
        }
        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(ParseError::InvalidUnicodeEscape { span });
        }
        char::from_u32(high).ok_or(ParseError::InvalidUnicodeEscape { span })
    }

    fn read_hex4(&mut self, span: Span) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .advance()
                .and_then(|c| c.to_digit(16))
                .ok_or(ParseError::InvalidUnicodeEscape { span })?;
            value = value * 16 + digit;
        }
        Ok(value)
    }

    fn read_number(&mut self, start: Span) -> Result<SpannedToken> {
        let begin = self.position;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let mut is_float = false;
        if self.peek() == Some('.') && matches!(self.peek_ahead(1), Some(c) if c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let text: String = self.input[begin..self.position].iter().collect();
        finish_number(text, is_float, start)
    }

    fn read_identifier_or_keyword(&mut self, start: Span) -> SpannedToken {
        let begin = self.position;
        while matches!(self.peek(), Some(c) if is_identifier_continue(c)) {
            self.advance();
        }
        let text: String = self.input[begin..self.position].iter().collect();
        let token = match text.as_str() {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            _ => Token::Identifier(text),
        };
        SpannedToken { token, span: start }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Validates and parses a scanned numeric literal.
///
/// Integers that fit in `i64` stay integers; anything with a decimal
/// point, an exponent, or a magnitude beyond `i64` becomes a float.
/// Leading zeros and non-finite results are rejected.
fn finish_number(text: String, is_float: bool, span: Span) -> Result<SpannedToken> {
    let digits = text.strip_prefix('-').unwrap_or(&text);
    if digits.len() > 1 && digits.starts_with('0') && digits.as_bytes()[1].is_ascii_digit() {
        return Err(ParseError::InvalidNumber { text, span });
    }

    if is_float {
        let value: f64 = text
            .parse()
            .map_err(|_| ParseError::InvalidNumber {
                text: text.clone(),
                span,
            })?;
        if !value.is_finite() {
            return Err(ParseError::InvalidNumber { text, span });
        }
        return Ok(SpannedToken {
            token: Token::Float(value),
            span,
        });
    }

    match text.parse::<i64>() {
        Ok(value) => Ok(SpannedToken {
            token: Token::Integer(value),
            span,
        }),
        Err(_) => {
            let value: f64 = text
                .parse()
                .map_err(|_| ParseError::InvalidNumber {
                    text: text.clone(),
                    span,
                })?;
            if !value.is_finite() {
                return Err(ParseError::InvalidNumber { text, span });
            }
            Ok(SpannedToken {
                token: Token::Float(value),
                span,
            })
        }
    }
}
