use criterion::{criterion_group, criterion_main, Criterion};
use rotor_core::lexer::{lookup_identifier, Lexer, TokenKind};
use rotor_core::parser::Parser;

const FIXTURE: &str = r#"
function fib(n) {
    if (n < 2) {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

let cache = {values: [0, 1], hits: 0, "max size": 64};

function lookup(table, key) {
    if (key in table.values) {
        table.hits += 1;
        return table.values[key];
    }
    return null;
}

for (let i = 0; i < 16; i++) {
    let previous = lookup(cache, i);
    if (previous === null) {
        cache.values[i] = fib(i);
    }
}

try {
    let handler = new Handler(cache, onHit);
    handler.kind = typeof cache === "object" ? "map" : "plain";
    handler.flush();
} catch (e) {
    report(e.message);
}
"#;

// ---------------------------------------------------------------------------
// Lexing throughput
// ---------------------------------------------------------------------------

fn bench_lexing(c: &mut Criterion) {
    c.bench_function("lex_fixture", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(FIXTURE);
            let mut count = 0usize;
            loop {
                let tok = lexer.next_token();
                if tok.kind == TokenKind::Eof {
                    break;
                }
                count += 1;
            }
            count
        });
    });

    c.bench_function("lex_operator_soup", |b| {
        let src = "a >>>= b >>> c >> d >= e === f !== g && h || i ^= j".repeat(32);
        b.iter(|| {
            let mut lexer = Lexer::new(&src);
            while lexer.next_token().kind != TokenKind::Eof {}
        });
    });
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("parse_fixture", |b| {
        b.iter(|| {
            let mut parser = Parser::new(FIXTURE);
            std::hint::black_box(parser.parse_program())
        });
    });

    c.bench_function("parse_long_binary_chain", |b| {
        let src = format!("x = 1{};", " + 1".repeat(256));
        b.iter(|| {
            let mut parser = Parser::new(&src);
            std::hint::black_box(parser.parse_program())
        });
    });
}

// ---------------------------------------------------------------------------
// Keyword lookup
// ---------------------------------------------------------------------------

fn bench_keyword_lookup(c: &mut Criterion) {
    c.bench_function("lookup_identifier_keywords", |b| {
        b.iter(|| {
            for word in ["function", "return", "instanceof", "let", "while"] {
                std::hint::black_box(lookup_identifier(word));
            }
        });
    });

    c.bench_function("lookup_identifier_plain", |b| {
        b.iter(|| {
            for word in ["value", "callback", "accumulator", "fn_ptr", "i"] {
                std::hint::black_box(lookup_identifier(word));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Group & main
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_lexing, bench_parsing, bench_keyword_lookup);
criterion_main!(benches);
