//! Pretty JSON output.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::io::Write;

/// Writes `value` as JSON indented with four spaces.
///
/// Object members keep their insertion order, non-ASCII characters pass
/// through unescaped, and no trailing newline is appended.
pub fn write_pretty<W: Write>(writer: W, value: &Value) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_pretty(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn four_space_indentation() {
        let value = json!({"name": "Algebra", "topics": ["a", "b"]});
        assert_eq!(
            render(&value),
            "{\n    \"name\": \"Algebra\",\n    \"topics\": [\n        \"a\",\n        \"b\"\n    ]\n}"
        );
    }

    #[test]
    fn no_trailing_newline() {
        assert!(!render(&json!({"a": 1})).ends_with('\n'));
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(render(&json!({})), "{}");
        assert_eq!(render(&json!([])), "[]");
    }

    #[test]
    fn member_order_is_preserved() {
        let value = json!({"zebra": 1, "apple": 2});
        let rendered = render(&value);
        let zebra = rendered.find("zebra").unwrap();
        let apple = rendered.find("apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn unicode_passes_through_unescaped() {
        let rendered = render(&json!({"city": "Z\u{fc}rich"}));
        assert!(rendered.contains("Z\u{fc}rich"));
        assert!(!rendered.contains("\\u"));
    }
}
