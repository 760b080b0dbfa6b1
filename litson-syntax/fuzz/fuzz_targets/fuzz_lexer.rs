#![no_main]

use libfuzzer_sys::fuzz_target;
use litson_syntax::{Lexer, Token};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut lexer = Lexer::new(text);
        loop {
            match lexer.next_token() {
                Ok(tok) if tok.token == Token::Eof => break,
                Ok(_) => continue,
                Err(_) => break,
            }
        }
    }
});
