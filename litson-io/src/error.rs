//! Error types for the conversion pipeline.

use litson_syntax::ParseError;
use thiserror::Error;

/// Errors produced while converting a source file to JSON.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input contains no `{`, so there is nothing to convert.
    #[error("No object literal found in input (no '{{' present)")]
    NoLiteral,

    /// The literal region does not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use litson_syntax::Span;

    #[test]
    fn parse_errors_carry_their_position_through() {
        let inner = ParseError::UnexpectedChar {
            ch: '=',
            span: Span {
                line: 2,
                column: 7,
                offset: 15,
            },
        };
        let err = ConvertError::from(inner);
        assert_eq!(err.to_string(), "Parse error: Unexpected character '=' at 2:7");
    }

    #[test]
    fn io_errors_wrap() {
        let err = ConvertError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
