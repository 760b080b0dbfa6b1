//! Litson syntax primitives
//!
//! This crate provides lexing and parsing for annotated object literals
//! with no I/O dependencies. It includes:
//!
//! - Token model with file-absolute `line:column` spans
//! - Streaming lexer for the TypeScript-flavored literal syntax
//! - Recursive-descent parser producing ordered [`serde_json::Value`]s
//! - Error types with positions
//! - Security limits for untrusted input
//!
//! Type annotations (bracketed key suffixes, `string` / `Subtopics`
//! tags, index signatures) are part of the grammar and are discarded
//! during the parse, never removed by textual substitution. Members
//! that carry only an annotation are dropped from the output.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod token;

pub use error::{ParseError, Result};
pub use lexer::Lexer;
pub use limits::Limits;
pub use parser::{ParseStats, Parser};
pub use token::{Span, SpannedToken, Token};

/// Parses a complete annotated literal from `text` with default limits.
///
/// Convenience wrapper over [`Parser`] for callers that do not need
/// stats, custom limits, or a span origin.
pub fn parse_literal(text: &str) -> Result<serde_json::Value> {
    Parser::new(text).parse_value()
}
