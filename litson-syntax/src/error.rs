//! Error types for lexing and parsing annotated object literals.

use crate::token::Span;
use thiserror::Error;

/// Errors produced while lexing or parsing a literal.
///
/// Every variant carries the [`Span`] where the problem was detected, so
/// messages can point at a file-absolute `line:column`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A character the grammar has no use for, outside any string.
    #[error("Unexpected character '{ch}' at {span}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Where it appears.
        span: Span,
    },

    /// A well-formed token in a position where it is not allowed.
    #[error("Unexpected {found} at {span}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token that was found.
        found: String,
        /// What the parser was looking for instead.
        expected: &'static str,
        /// Where the token starts.
        span: Span,
    },

    /// A string literal with no closing quote before a newline or the
    /// end of input.
    #[error("Unterminated string starting at {span}")]
    UnterminatedString {
        /// Position of the opening quote.
        span: Span,
    },

    /// A `/* ... */` comment with no closing `*/`.
    #[error("Unterminated block comment starting at {span}")]
    UnterminatedComment {
        /// Position of the opening `/*`.
        span: Span,
    },

    /// A bracketed type annotation whose `]` never arrives.
    #[error("Unterminated bracketed annotation starting at {span}")]
    UnterminatedAnnotation {
        /// Position of the opening `[`.
        span: Span,
    },

    /// A backslash escape the string grammar does not define.
    #[error("Invalid escape sequence '\\{ch}' at {span}")]
    InvalidEscape {
        /// The character following the backslash.
        ch: char,
        /// Position of the escape.
        span: Span,
    },

    /// A malformed `\uXXXX` escape, or a lone UTF-16 surrogate half.
    #[error("Invalid unicode escape at {span}")]
    InvalidUnicodeEscape {
        /// Position of the escape.
        span: Span,
    },

    /// A numeric literal outside the grammar (bare `-`, leading zeros,
    /// missing exponent digits, or a non-finite result).
    #[error("Invalid number '{text}' at {span}")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// Where it starts.
        span: Span,
    },

    /// A bare identifier in value position that is not one of the
    /// recognized type tags.
    #[error("Unrecognized identifier '{name}' at {span}, expected a value")]
    UnrecognizedIdentifier {
        /// The identifier as written.
        name: String,
        /// Where it starts.
        span: Span,
    },

    /// Containers nested deeper than the configured limit.
    #[error("Nesting depth limit exceeded ({max}) at {span}")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        max: usize,
        /// Where the limit was crossed.
        span: Span,
    },

    /// Input ended in the middle of the literal.
    #[error("Unexpected end of input at {span}")]
    UnexpectedEof {
        /// Position just past the last character.
        span: Span,
    },
}

impl ParseError {
    /// The position the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnterminatedString { span }
            | ParseError::UnterminatedComment { span }
            | ParseError::UnterminatedAnnotation { span }
            | ParseError::InvalidEscape { span, .. }
            | ParseError::InvalidUnicodeEscape { span }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::UnrecognizedIdentifier { span, .. }
            | ParseError::DepthLimitExceeded { span, .. }
            | ParseError::UnexpectedEof { span } => *span,
        }
    }
}

/// Result type alias for syntax operations.
pub type Result<T> = std::result::Result<T, ParseError>;
