//! ECMAScript parser.
//!
//! A Pratt parser over the token stream produced by [`Lexer`]. Statement
//! rules live in [`stmt`], expression rules and the precedence ladder in
//! [`expr`], and destructuring-pattern rules in [`pat`]; this module owns
//! the token pump and the program loop.
//!
//! Syntax errors never abort the parse. Each failing rule records an error
//! and returns `None`, and the statement loops skip ahead and keep going, so
//! one call to [`Parser::parse_program`] reports every error it can find
//! along with the best-effort [`Program`] built from the statements that did
//! parse.

mod expr;
mod pat;
mod stmt;

use crate::ast::{Program, SourceLocation, SourceType};
use crate::error::{ErrorList, RotorError};
use crate::lexer::{Lexer, Token, TokenKind};

// ───────────────────────────────────────────────────────────────────────────
// Parser
// ───────────────────────────────────────────────────────────────────────────

/// Parses one source text into a [`Program`].
///
/// The parser owns its [`Lexer`] and keeps a two-token window over the
/// stream: the current token drives rule dispatch, the peek token answers
/// lookahead questions such as "is an infix operator next".
///
/// ```
/// use rotor_core::parser::Parser;
///
/// let mut parser = Parser::new("let answer = 6 * 7;");
/// let program = parser.parse_program().expect("valid program");
/// assert_eq!(program.body.len(), 1);
/// ```
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    cur: Token,
    peek: Token,
    errors: Vec<RotorError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`, constructing the lexer internally.
    pub fn new(source: &'src str) -> Parser<'src> {
        Parser::from_lexer(Lexer::new(source))
    }

    /// Creates a parser over an existing lexer.
    pub fn from_lexer(lexer: Lexer<'src>) -> Parser<'src> {
        let mut parser = Parser {
            lexer,
            cur: Token::new(TokenKind::Eof, "", SourceLocation::default()),
            peek: Token::new(TokenKind::Eof, "", SourceLocation::default()),
            errors: Vec::new(),
        };
        // Fill both slots of the lookahead window.
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses the whole input as a script.
    ///
    /// On success the error list is empty and the complete [`Program`] is
    /// returned. Otherwise the returned [`ErrorList`] carries every recorded
    /// syntax error in source order plus the partial program.
    pub fn parse_program(&mut self) -> Result<Program, ErrorList> {
        let mut body = Vec::new();
        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                body.push(stmt);
            }
            self.next_token();
        }

        let loc = match (body.first(), body.last()) {
            (Some(first), Some(last)) => {
                SourceLocation::new(first.loc().start, last.loc().end)
            }
            _ => SourceLocation::default(),
        };
        let program = Program {
            loc,
            source_type: SourceType::Script,
            body,
        };

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(ErrorList::new(std::mem::take(&mut self.errors), program))
        }
    }

    /// The syntax errors recorded so far.
    pub fn errors(&self) -> &[RotorError] {
        &self.errors
    }

    // ── token pump ──────────────────────────────────────────────────────────

    fn next_token(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances over the peek token when it matches, otherwise records an
    /// expectation error and leaves the window untouched.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, kind: TokenKind) {
        self.error(format!(
            "expected next token to be {}, got {}",
            kind, self.peek.kind
        ));
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(RotorError::SyntaxError(message.into()));
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────────────────
