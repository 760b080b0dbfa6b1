//! Recursive-descent parser for annotated object literals.
//!
//! Produces a [`serde_json::Value`] directly, with object members in
//! source order. The TypeScript-flavored type annotations the input
//! syntax allows are grammar rules here, not text to scrub: bracketed
//! suffixes on keys (`topics[]`, `pages[number]`), bare `string` /
//! `Subtopics` tags in value position, and `[key: type]: tag` index
//! signatures are recognized and discarded during the parse. Bracketed
//! *data* in value position is untouched by annotation handling.
//!
//! Members that carry only a type annotation and no value are dropped
//! from the output entirely.

use crate::error::{ParseError, Result};
use crate::lexer::Lexer;
use crate::limits::Limits;
use crate::token::{Span, SpannedToken, Token};
use serde_json::{Map, Number, Value};

/// Type tags that may stand in value position without being data.
const TYPE_TAGS: [&str; 2] = ["string", "Subtopics"];

fn is_type_tag(name: &str) -> bool {
    TYPE_TAGS.contains(&name)
}

/// Counters describing the annotation syntax a parse discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Bracketed suffixes and type tags removed.
    pub annotations_stripped: usize,
    /// Members dropped because they carried a type annotation instead
    /// of a value.
    pub members_dropped: usize,
}

/// Recursive-descent parser over a pull [`Lexer`].
pub struct Parser {
    lexer: Lexer,
    peeked: Option<SpannedToken>,
    limits: Limits,
    stats: ParseStats,
}

impl Parser {
    /// Parser over `text` with default [`Limits`].
    pub fn new(text: &str) -> Self {
        Self::with_limits(text, Limits::default())
    }

    /// Parser over `text` with explicit limits.
    pub fn with_limits(text: &str, limits: Limits) -> Self {
        Self::from_lexer(Lexer::new(text), limits)
    }

    /// Parser over an existing lexer, e.g. one seeded with a span origin
    /// so errors stay file-absolute.
    pub fn from_lexer(lexer: Lexer, limits: Limits) -> Self {
        Parser {
            lexer,
            peeked: None,
            limits,
            stats: ParseStats::default(),
        }
    }

    /// Parses one complete value.
    ///
    /// Stops at the value's closing delimiter: input past it is never
    /// pulled from the lexer, so trailing source text (semicolons,
    /// later declarations) cannot fail the parse.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.parse_value_at_depth(0)
    }

    /// Counters for the annotation syntax discarded so far.
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    fn next(&mut self) -> Result<SpannedToken> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.lexer.next_token(),
        }
    }

    fn peek(&mut self) -> Result<&SpannedToken> {
        let tok = match self.peeked.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };
        Ok(self.peeked.insert(tok))
    }

    fn expect(&mut self, want: Token, expected: &'static str) -> Result<SpannedToken> {
        let tok = self.next()?;
        if tok.token == want {
            return Ok(tok);
        }
        Err(match tok.token {
            Token::Eof => ParseError::UnexpectedEof { span: tok.span },
            other => ParseError::UnexpectedToken {
                found: other.to_string(),
                expected,
                span: tok.span,
            },
        })
    }

    fn parse_value_at_depth(&mut self, depth: usize) -> Result<Value> {
        if depth >= self.limits.max_depth {
            let span = self.peek()?.span;
            return Err(ParseError::DepthLimitExceeded {
                max: self.limits.max_depth,
                span,
            });
        }

        let tok = self.next()?;
        match tok.token {
            Token::LBrace => self.parse_object(depth),
            Token::LBracket => self.parse_array(depth),
            Token::String(s) => Ok(Value::String(s)),
            Token::Integer(n) => Ok(Value::Number(Number::from(n))),
            // The lexer only emits finite floats, which always convert.
            Token::Float(x) => Number::from_f64(x)
                .map(Value::Number)
                .ok_or(ParseError::InvalidNumber {
                    text: x.to_string(),
                    span: tok.span,
                }),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            Token::Identifier(name) => {
                Err(ParseError::UnrecognizedIdentifier {
                    name,
                    span: tok.span,
                })
            }
            Token::Eof => Err(ParseError::UnexpectedEof { span: tok.span }),
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
                expected: "a value",
                span: tok.span,
            }),
        }
    }

    /// Parses an object body. The opening `{` is already consumed and
    /// `depth` is the object's own nesting depth.
    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        let mut map = Map::new();
        loop {
            if matches!(self.peek()?.token, Token::RBrace) {
                self.next()?;
                break;
            }
            if let Some((key, value)) = self.parse_member(depth)? {
                // Duplicate keys: the first occurrence keeps its slot,
                // the last occurrence supplies the value.
                map.insert(key, value);
            }
            match self.peek()?.token {
                Token::Comma => {
                    self.next()?;
                }
                Token::RBrace => {}
                Token::Eof => {
                    let tok = self.next()?;
                    return Err(ParseError::UnexpectedEof { span: tok.span });
                }
                _ => {
                    let tok = self.next()?;
                    return Err(ParseError::UnexpectedToken {
                        found: tok.token.to_string(),
                        expected: "',' or '}'",
                        span: tok.span,
                    });
                }
            }
        }
        Ok(Value::Object(map))
    }

    /// Parses one object member, returning `None` when the member is a
    /// type annotation with nothing to keep.
    fn parse_member(&mut self, depth: usize) -> Result<Option<(String, Value)>> {
        let tok = self.next()?;
        let key = match tok.token {
            Token::String(s) => s,
            Token::Identifier(name) => name,
            // Numeric keys become their canonical decimal rendering.
            Token::Integer(n) => n.to_string(),
            Token::Float(x) => x.to_string(),
            Token::LBracket => {
                // Index signature: `[ident: type]: tag`. Nothing to keep.
                self.skip_bracket_group(tok.span)?;
                self.stats.annotations_stripped += 1;
                self.expect(Token::Colon, "':' after an index signature")?;
                self.expect_type_tag()?;
                self.stats.annotations_stripped += 1;
                self.stats.members_dropped += 1;
                return Ok(None);
            }
            Token::Eof => return Err(ParseError::UnexpectedEof { span: tok.span }),
            other => {
                return Err(ParseError::UnexpectedToken {
                    found: other.to_string(),
                    expected: "an object key",
                    span: tok.span,
                })
            }
        };

        // Optional bracketed type suffix on the key: `topics[]: string`,
        // `pages[number]: string`.
        if matches!(self.peek()?.token, Token::LBracket) {
            let open = self.next()?;
            self.skip_bracket_group(open.span)?;
            self.stats.annotations_stripped += 1;
        }

        self.expect(Token::Colon, "':' after an object key")?;

        // A bare type tag where the value would be means the member is
        // annotation-only: drop it.
        if let Token::Identifier(name) = &self.peek()?.token {
            if is_type_tag(name) {
                self.next()?;
                self.stats.annotations_stripped += 1;
                self.stats.members_dropped += 1;
                return Ok(None);
            }
        }

        let value = self.parse_value_at_depth(depth + 1)?;
        Ok(Some((key, value)))
    }

    /// Consumes a balanced bracket group whose opening `[` was already
    /// read. Content is consumed token-wise, so brackets inside string
    /// literals do not close the group early.
    fn skip_bracket_group(&mut self, open: Span) -> Result<()> {
        let mut depth = 1usize;
        loop {
            let tok = self.next()?;
            match tok.token {
                Token::LBracket => depth += 1,
                Token::RBracket => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Token::Eof => return Err(ParseError::UnterminatedAnnotation { span: open }),
                _ => {}
            }
        }
    }

    fn expect_type_tag(&mut self) -> Result<()> {
        let tok = self.next()?;
        match tok.token {
            Token::Identifier(name) if is_type_tag(&name) => Ok(()),
            Token::Eof => Err(ParseError::UnexpectedEof { span: tok.span }),
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
                expected: "a type tag",
                span: tok.span,
            }),
        }
    }

    /// Parses an array body. The opening `[` is already consumed and
    /// `depth` is the array's own nesting depth.
    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        let mut items = Vec::new();
        loop {
            if matches!(self.peek()?.token, Token::RBracket) {
                self.next()?;
                break;
            }
            items.push(self.parse_value_at_depth(depth + 1)?);
            match self.peek()?.token {
                Token::Comma => {
                    self.next()?;
                }
                Token::RBracket => {}
                Token::Eof => {
                    let tok = self.next()?;
                    return Err(ParseError::UnexpectedEof { span: tok.span });
                }
                _ => {
                    let tok = self.next()?;
                    return Err(ParseError::UnexpectedToken {
                        found: tok.token.to_string(),
                        expected: "',' or ']'",
                        span: tok.span,
                    });
                }
            }
        }
        Ok(Value::Array(items))
    }
}
