#![no_main]

use libfuzzer_sys::fuzz_target;
use litson_syntax::{Limits, Parser};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let limits = Limits { max_depth: 64 };
        let _ = Parser::with_limits(text, limits).parse_value();
    }
});
