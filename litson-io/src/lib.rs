//! Litson I/O - File conversion pipeline
//!
//! This crate provides the file-facing layer for litson:
//!
//! - Locating the literal region inside a source file
//! - A high-level conversion function from input path to output path
//! - Pretty JSON output with four-space indentation
//!
//! The output file is created only after the input parses, so a failed
//! conversion never leaves a partial JSON file behind.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod region;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, Result};
pub use litson_syntax::{Limits, ParseError, ParseStats, Span};
pub use region::{locate_region, Region};
pub use writer::write_pretty;

use litson_syntax::{Lexer, Parser};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// High-level conversion options
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Security limits applied to the parse
    pub limits: Limits,
}

/// Summary of a completed conversion
#[derive(Debug, Clone, Copy)]
pub struct ConvertSummary {
    /// Bytes of JSON written to the output file
    pub bytes_written: u64,
    /// Type annotations discarded during the parse
    pub annotations_stripped: usize,
    /// Annotation-only members dropped from the output
    pub members_dropped: usize,
}

/// Parses the literal embedded in `source`.
///
/// Locates the conversion region, then parses one complete value from
/// it. Error positions are reported file-absolute, and text after the
/// literal's closing delimiter is never examined.
pub fn extract_value(source: &str, limits: &Limits) -> Result<(Value, ParseStats)> {
    let region = locate_region(source)?;
    let lexer = Lexer::with_origin(region.text, region.origin);
    let mut parser = Parser::from_lexer(lexer, limits.clone());
    let value = parser.parse_value()?;
    Ok((value, parser.stats()))
}

/// Converts the literal embedded in `input` to a JSON file at `output`.
///
/// Reads the whole input, extracts and parses the embedded literal, and
/// writes the value as four-space-indented JSON with members in source
/// order. Serialization happens in memory first, so `output` is written
/// in one step and only on success.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    let source = fs::read_to_string(input)?;
    let (value, stats) = extract_value(&source, &options.limits)?;

    let mut buf = Vec::with_capacity(source.len());
    write_pretty(&mut buf, &value)?;
    fs::write(output, &buf)?;

    Ok(ConvertSummary {
        bytes_written: buf.len() as u64,
        annotations_stripped: stats.annotations_stripped,
        members_dropped: stats.members_dropped,
    })
}
