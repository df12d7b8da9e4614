//! `rotor_core`: the front-end library for the Rotor JavaScript engine.
//!
//! # Crate layout
//!
//! - [`lexer`]: Tokenizer for ECMAScript source text (tokens, positions).
//! - [`ast`]: Syntax tree node types produced by the parser.
//! - [`parser`]: Pratt parser turning a token stream into a [`ast::Program`].
//! - [`error`]: Error types shared across the front end.

/// Error types shared across the front end.
pub mod error;
/// Tokenizer for ECMAScript source text.
pub mod lexer;
/// Syntax tree node types produced by the parser.
pub mod ast;
/// Pratt parser turning a token stream into a syntax tree.
pub mod parser;
