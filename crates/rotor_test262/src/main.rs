//! Test262 list filter: reads candidate test paths from stdin, one per
//! line, and prints the async-filtered list to stdout. With `--root` the
//! test262 checkout is validated first; a bad root is reported as a
//! warning but does not stop filtering.

use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use rotor_test262::{filter_async, Runner, TestCase};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let root = match args.as_slice() {
        [] => None,
        [flag, path] if flag == "--root" => Some(path.as_str()),
        _ => {
            eprintln!("usage: rotor_test262 [--root <path>] < test-list");
            return ExitCode::from(2);
        }
    };

    if let Some(root) = root {
        if let Err(err) = Runner::new(Path::new(root), None) {
            eprintln!("warning: unable to validate test262 root: {err}");
        }
    }

    let mut cases = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        let path = line.trim();
        if path.is_empty() {
            continue;
        }
        cases.push(TestCase {
            path: path.to_string(),
            ..TestCase::default()
        });
    }

    for case in filter_async(cases) {
        println!("{}", case.path);
    }
    ExitCode::SUCCESS
}
