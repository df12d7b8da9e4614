#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::lexer::{Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    // The lexer operates on &str; skip inputs that are not valid UTF-8.
    let source = match std::str::from_utf8(data) {
        Ok(source) => source,
        Err(_) => return,
    };

    // Every call either consumes input or returns EOF, so the stream must
    // end well within one token per input byte. Illegal tokens are fine;
    // panics and non-termination are not.
    let mut lexer = Lexer::new(source);
    let budget = source.len() + 16;
    for _ in 0..budget {
        if lexer.next_token().kind == TokenKind::Eof {
            return;
        }
    }
    panic!("lexer exceeded the token budget without reaching EOF");
});
