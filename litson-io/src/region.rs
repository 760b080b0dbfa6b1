//! Locating the conversion region inside a source file.

use crate::error::{ConvertError, Result};
use litson_syntax::Span;

/// The conversion region of a source file.
///
/// Runs from the first `{` to the end of the source. The end of the
/// literal is not part of the region boundary: the parser stops at the
/// literal's own closing delimiter, so braces in trailing code or
/// comments cannot truncate or extend the parse.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    /// Source text from the opening brace to the end of the file.
    pub text: &'a str,
    /// File-absolute position of the opening brace.
    pub origin: Span,
}

/// Finds the literal region in `source`.
///
/// The anchor is the first `{` in the file, which for a module like
/// `export const subjects = { ... }` is the literal's opening brace.
/// Returns [`ConvertError::NoLiteral`] when the source contains no
/// `{` at all.
pub fn locate_region(source: &str) -> Result<Region<'_>> {
    let start = source.find('{').ok_or(ConvertError::NoLiteral)?;
    let prefix = &source[..start];
    let line = prefix.matches('\n').count() + 1;
    let column = match prefix.rfind('\n') {
        Some(newline) => prefix[newline + 1..].chars().count() + 1,
        None => prefix.chars().count() + 1,
    };
    Ok(Region {
        text: &source[start..],
        origin: Span {
            line,
            column,
            offset: prefix.chars().count(),
        },
    })
}
