#![no_main]

use libfuzzer_sys::fuzz_target;
use skive::{lexer, parser, Emitter};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            if let Ok(program) = parser::parse(&tokens) {
                let _ = Emitter::default().emit_program(&program);
            }
        }
    }
});
