//! Token model for the annotated object-literal syntax.

use std::fmt;

/// Position of a token within its source file.
///
/// Lines and columns are 1-based; `offset` is the 0-based character
/// offset from the start of the file. Positions stay file-absolute even
/// when lexing starts partway into a file, so error messages point at
/// the real location rather than a region-relative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
    /// 0-based character offset from the start of the file.
    pub offset: usize,
}

impl Span {
    /// Span pointing at the very start of a file.
    pub fn start() -> Self {
        Span {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Single- or double-quoted string literal with escapes resolved.
    String(String),
    /// Integer literal.
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Bare identifier: an unquoted object key or a type name.
    Identifier(String),
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    /// Renders the token the way error messages refer to it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::Colon => write!(f, "':'"),
            Token::Comma => write!(f, "','"),
            Token::String(_) => write!(f, "string literal"),
            Token::Integer(n) => write!(f, "number {n}"),
            Token::Float(x) => write!(f, "number {x}"),
            Token::True => write!(f, "'true'"),
            Token::False => write!(f, "'false'"),
            Token::Null => write!(f, "'null'"),
            Token::Identifier(name) => write!(f, "identifier '{name}'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with the position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token itself.
    pub token: Token,
    /// Where the token starts in the source file.
    pub span: Span,
}
