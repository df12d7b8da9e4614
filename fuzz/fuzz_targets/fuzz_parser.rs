#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::parser::Parser;

fuzz_target!(|data: &[u8]| {
    let source = match std::str::from_utf8(data) {
        Ok(source) => source,
        Err(_) => return,
    };

    // Arbitrary input may produce any number of syntax errors, but the
    // parser must neither panic nor fail to terminate.
    let mut parser = Parser::new(source);
    let _ = parser.parse_program();
});
