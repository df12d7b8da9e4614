//! Error types for the Rotor front end.

use std::fmt;

use thiserror::Error;

use crate::ast::Program;

/// All errors that can be produced by the Rotor front end.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RotorError {
    /// A JavaScript SyntaxError was raised.
    #[error("SyntaxError: {0}")]
    SyntaxError(String),
}

impl RotorError {
    /// The bare human-readable message, without the error-class prefix.
    pub fn message(&self) -> &str {
        match self {
            RotorError::SyntaxError(msg) => msg,
        }
    }
}

/// Convenient `Result` alias for fallible front-end operations.
pub type RotorResult<T> = Result<T, RotorError>;

/// Every syntax error collected during one `parse_program` call, in source
/// order, together with the best-effort program that was still produced.
#[derive(Debug, Clone)]
pub struct ErrorList {
    errors: Vec<RotorError>,
    program: Program,
}

impl ErrorList {
    pub(crate) fn new(errors: Vec<RotorError>, program: Program) -> Self {
        ErrorList { errors, program }
    }

    /// The collected errors, in the order they were reported.
    pub fn errors(&self) -> &[RotorError] {
        &self.errors
    }

    /// The partial program assembled before and around the failures.
    ///
    /// Statements that failed to parse are simply absent from its body.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Discards the errors and yields the partial program.
    pub fn into_program(self) -> Program {
        self.program
    }

    /// Number of collected errors. Never zero.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}
