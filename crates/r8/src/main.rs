//! `r8`: the Rotor JavaScript shell.
//!
//! `r8` is the command-line front end for the Rotor engine, analogous to
//! V8's `d8`. It parses scripts and reports syntax errors; execution and
//! the REPL arrive together with the evaluator.

use std::env;
use std::fs;
use std::process::ExitCode;

use rotor_core::lexer::{Lexer, TokenKind};
use rotor_core::parser::Parser;

const VERSION: &str = concat!("r8 ", env!("CARGO_PKG_VERSION"));

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [flag] if flag == "--version" => {
            println!("{VERSION}");
            ExitCode::SUCCESS
        }
        [flag] if flag == "--repl" => {
            eprintln!("REPL is not implemented yet");
            ExitCode::FAILURE
        }
        [flag, path] if flag == "--tokens" => dump_tokens(path),
        [flag, path] if flag == "--file" => parse_file(path),
        [path] if !path.starts_with('-') => parse_file(path),
        _ => usage(),
    }
}

fn usage() -> ExitCode {
    eprintln!("usage: r8 [--version] [--repl] [--tokens <path>] [--file] <path>");
    ExitCode::from(2)
}

fn read_source(path: &str) -> Result<String, ExitCode> {
    fs::read_to_string(path).map_err(|err| {
        eprintln!("r8: cannot read {path}: {err}");
        ExitCode::FAILURE
    })
}

/// Parse a script and report every collected syntax error.
fn parse_file(path: &str) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut parser = Parser::new(&source);
    match parser.parse_program() {
        Ok(_) => ExitCode::SUCCESS,
        Err(errors) => {
            for error in errors.errors() {
                eprintln!("{path}: {error}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Print the token stream, one `KIND("text") @ span` line per token.
fn dump_tokens(path: &str) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut lexer = Lexer::new(&source);
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        println!("{tok} @ {}", tok.span);
    }
    ExitCode::SUCCESS
}
