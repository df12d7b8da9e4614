//! ECMAScript lexer.
//!
//! See [`Lexer`] for the main entry point.

/// Token kinds, source positions, and spans.
pub mod token;

use smallvec::SmallVec;

use crate::error::{RotorError, RotorResult};

pub use self::token::{
    is_keyword, keyword_kind, keywords, lookup_identifier, Position, Span, Token, TokenKind,
};

// ─────────────────────────────────────────────────────────────────────────────
// Character classification
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for characters that may start an identifier.
fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Returns `true` for characters that may continue an identifier.
fn is_identifier_part(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphanumeric()
}

// ─────────────────────────────────────────────────────────────────────────────
// Template contexts
// ─────────────────────────────────────────────────────────────────────────────

/// Per-substitution scanning state for template literals.
#[derive(Debug, Clone, Copy, Default)]
struct TemplateContext {
    /// Plain `{` braces currently open inside this substitution's
    /// expression. A `}` seen at depth zero closes the substitution.
    brace_depth: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming ECMAScript lexer.
///
/// Produces a stream of [`Token`]s from a UTF-8 source string. Call
/// [`Lexer::next_token`] repeatedly; after the end of input it keeps
/// returning [`TokenKind::Eof`]. Scan failures are reported in-band as
/// [`TokenKind::Illegal`] tokens whose text is the diagnostic message;
/// scanning then resumes from wherever the failure occurred.
///
/// # Example
///
/// ```
/// use rotor_core::lexer::{Lexer, TokenKind};
///
/// let mut lx = Lexer::new("let x = 42;");
/// loop {
///     let tok = lx.next_token();
///     if tok.kind == TokenKind::Eof { break; }
///     println!("{tok}");
/// }
/// ```
pub struct Lexer<'src> {
    /// The complete source string.
    src: &'src str,
    /// Current character, `None` once all input is consumed.
    ch: Option<char>,
    /// Position of `ch`.
    ch_pos: Position,
    /// Position of the character after `ch`.
    next_pos: Position,
    /// Tokens scanned ahead of the caller; template chunk fragments arrive
    /// in pairs and are handed out one at a time from here.
    pending: SmallVec<[Token; 2]>,
    /// One entry per template substitution currently open, innermost last.
    contexts: SmallVec<[TemplateContext; 4]>,
    /// When set, the next call resumes template-chunk scanning instead of
    /// regular dispatch.
    continue_template: bool,
    /// Whether a `/` at the cursor starts a regular-expression literal.
    /// Recomputed from the kind of every emitted token.
    can_start_regex: bool,
    /// A line terminator was seen since the last emitted token.
    line_terminator_before: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over the given UTF-8 source string.
    pub fn new(src: &'src str) -> Self {
        let mut lexer = Lexer {
            src,
            ch: None,
            ch_pos: Position::default(),
            next_pos: Position {
                offset: 0,
                line: 1,
                column: 0,
            },
            pending: SmallVec::new(),
            contexts: SmallVec::new(),
            continue_template: false,
            can_start_regex: true,
            line_terminator_before: false,
        };
        lexer.advance();
        lexer
    }

    // ── Low-level character helpers ─────────────────────────────────────────

    fn peek_char(&self) -> Option<char> {
        let ch = self.src.get(self.next_pos.offset..)?.chars().next()?;
        Some(if ch == '\r' { '\n' } else { ch })
    }

    fn peek_char2(&self) -> Option<char> {
        let mut chars = self.src.get(self.next_pos.offset..)?.chars();
        chars.next()?;
        chars.next()
    }

    fn slice(&self, start: Position, end: Position) -> &'src str {
        &self.src[start.offset..end.offset]
    }

    /// Advance past the current character and update position tracking.
    ///
    /// `\r` and `\r\n` are both normalized to a single `'\n'`, so callers
    /// never see a stray carriage return. Columns advance by the UTF-16
    /// width of the character.
    fn advance(&mut self) {
        let pos = self.next_pos;
        let Some(mut ch) = self.src.get(pos.offset..).and_then(|rest| rest.chars().next()) else {
            self.ch = None;
            self.ch_pos = pos;
            return;
        };
        let mut width = ch.len_utf8();
        if ch == '\r' {
            ch = '\n';
            if self.src.as_bytes().get(pos.offset + 1) == Some(&b'\n') {
                width += 1;
            }
        }

        self.ch = Some(ch);
        self.ch_pos = pos;
        self.next_pos = if ch == '\n' {
            Position {
                offset: pos.offset + width,
                line: pos.line + 1,
                column: 0,
            }
        } else {
            Position {
                offset: pos.offset + width,
                line: pos.line,
                column: pos.column + ch.len_utf16() as u32,
            }
        };
    }

    // ── Public interface ────────────────────────────────────────────────────

    /// Return the next token from the input stream.
    pub fn next_token(&mut self) -> Token {
        loop {
            if !self.pending.is_empty() {
                let tok = self.pending.remove(0);
                return self.finish_token(tok);
            }

            if self.continue_template {
                match self.lex_template_chunk(false) {
                    Ok(()) => continue,
                    Err(err) => return self.illegal_token(err),
                }
            }

            if let Err(err) = self.skip_whitespace_and_comments() {
                return self.illegal_token(err);
            }

            let start = self.ch_pos;
            let Some(ch) = self.ch else {
                let tok = Token::new(TokenKind::Eof, "", Span::new(start, start));
                return self.finish_token(tok);
            };

            let tok = match ch {
                '`' => match self.lex_template_chunk(true) {
                    Ok(()) => continue,
                    Err(err) => return self.illegal_token(err),
                },
                '/' => {
                    if self.can_start_regex {
                        match self.scan_regexp(start) {
                            Ok(tok) => tok,
                            Err(err) => return self.illegal_token(err),
                        }
                    } else {
                        self.advance();
                        if self.ch == Some('=') {
                            self.advance();
                            self.token(TokenKind::DivideAssign, "/=", start)
                        } else {
                            self.token(TokenKind::Divide, "/", start)
                        }
                    }
                }
                '\'' | '"' => match self.scan_string(start, ch) {
                    Ok(tok) => tok,
                    Err(err) => return self.illegal_token(err),
                },
                '.' => {
                    if self.peek_char() == Some('.') && self.peek_char2() == Some('.') {
                        self.advance();
                        self.advance();
                        self.advance();
                        self.token(TokenKind::Ellipsis, "...", start)
                    } else if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                        match self.scan_number(start) {
                            Ok(tok) => tok,
                            Err(err) => return self.illegal_token(err),
                        }
                    } else {
                        self.advance();
                        self.token(TokenKind::Dot, ".", start)
                    }
                }
                '+' => {
                    self.advance();
                    if self.ch == Some('+') {
                        self.advance();
                        self.token(TokenKind::Increment, "++", start)
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::PlusAssign, "+=", start)
                    } else {
                        self.token(TokenKind::Plus, "+", start)
                    }
                }
                '-' => {
                    self.advance();
                    if self.ch == Some('-') {
                        self.advance();
                        self.token(TokenKind::Decrement, "--", start)
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::MinusAssign, "-=", start)
                    } else {
                        self.token(TokenKind::Minus, "-", start)
                    }
                }
                '*' => {
                    self.advance();
                    if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::MultiplyAssign, "*=", start)
                    } else {
                        self.token(TokenKind::Multiply, "*", start)
                    }
                }
                '%' => {
                    self.advance();
                    if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::ModuloAssign, "%=", start)
                    } else {
                        self.token(TokenKind::Modulo, "%", start)
                    }
                }
                '&' => {
                    self.advance();
                    if self.ch == Some('&') {
                        self.advance();
                        self.token(TokenKind::LogicalAnd, "&&", start)
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::BitwiseAndAssign, "&=", start)
                    } else {
                        self.token(TokenKind::BitwiseAnd, "&", start)
                    }
                }
                '|' => {
                    self.advance();
                    if self.ch == Some('|') {
                        self.advance();
                        self.token(TokenKind::LogicalOr, "||", start)
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::BitwiseOrAssign, "|=", start)
                    } else {
                        self.token(TokenKind::BitwiseOr, "|", start)
                    }
                }
                '^' => {
                    self.advance();
                    if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::BitwiseXorAssign, "^=", start)
                    } else {
                        self.token(TokenKind::BitwiseXor, "^", start)
                    }
                }
                '!' => {
                    self.advance();
                    if self.ch == Some('=') {
                        self.advance();
                        if self.ch == Some('=') {
                            self.advance();
                            self.token(TokenKind::StrictNotEqual, "!==", start)
                        } else {
                            self.token(TokenKind::NotEqual, "!=", start)
                        }
                    } else {
                        self.token(TokenKind::LogicalNot, "!", start)
                    }
                }
                '=' => {
                    self.advance();
                    if self.ch == Some('=') {
                        self.advance();
                        if self.ch == Some('=') {
                            self.advance();
                            self.token(TokenKind::StrictEqual, "===", start)
                        } else {
                            self.token(TokenKind::Equal, "==", start)
                        }
                    } else if self.ch == Some('>') {
                        self.advance();
                        self.token(TokenKind::Arrow, "=>", start)
                    } else {
                        self.token(TokenKind::Assign, "=", start)
                    }
                }
                '<' => {
                    self.advance();
                    if self.ch == Some('<') {
                        self.advance();
                        if self.ch == Some('=') {
                            self.advance();
                            self.token(TokenKind::ShiftLeftAssign, "<<=", start)
                        } else {
                            self.token(TokenKind::ShiftLeft, "<<", start)
                        }
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::LessEqual, "<=", start)
                    } else {
                        self.token(TokenKind::LessThan, "<", start)
                    }
                }
                '>' => {
                    self.advance();
                    if self.ch == Some('>') {
                        self.advance();
                        if self.ch == Some('>') {
                            self.advance();
                            if self.ch == Some('=') {
                                self.advance();
                                self.token(TokenKind::UnsignedShiftAssign, ">>>=", start)
                            } else {
                                self.token(TokenKind::UnsignedShiftRight, ">>>", start)
                            }
                        } else if self.ch == Some('=') {
                            self.advance();
                            self.token(TokenKind::ShiftRightAssign, ">>=", start)
                        } else {
                            self.token(TokenKind::ShiftRight, ">>", start)
                        }
                    } else if self.ch == Some('=') {
                        self.advance();
                        self.token(TokenKind::GreaterEqual, ">=", start)
                    } else {
                        self.token(TokenKind::GreaterThan, ">", start)
                    }
                }
                '?' => {
                    self.advance();
                    self.token(TokenKind::Question, "?", start)
                }
                ':' => {
                    self.advance();
                    self.token(TokenKind::Colon, ":", start)
                }
                '{' => {
                    self.advance();
                    if let Some(ctx) = self.contexts.last_mut() {
                        ctx.brace_depth += 1;
                    }
                    self.token(TokenKind::LBrace, "{", start)
                }
                '}' => {
                    let depth = self.contexts.last().map(|ctx| ctx.brace_depth);
                    self.advance();
                    if depth == Some(0) {
                        self.continue_template = true;
                        self.token(TokenKind::TemplateExprEnd, "}", start)
                    } else {
                        if let Some(ctx) = self.contexts.last_mut() {
                            ctx.brace_depth -= 1;
                        }
                        self.token(TokenKind::RBrace, "}", start)
                    }
                }
                '(' => {
                    self.advance();
                    self.token(TokenKind::LParen, "(", start)
                }
                ')' => {
                    self.advance();
                    self.token(TokenKind::RParen, ")", start)
                }
                '[' => {
                    self.advance();
                    self.token(TokenKind::LBracket, "[", start)
                }
                ']' => {
                    self.advance();
                    self.token(TokenKind::RBracket, "]", start)
                }
                ',' => {
                    self.advance();
                    self.token(TokenKind::Comma, ",", start)
                }
                ';' => {
                    self.advance();
                    self.token(TokenKind::Semicolon, ";", start)
                }
                c if is_identifier_start(c) => self.scan_identifier(start),
                c if c.is_ascii_digit() => match self.scan_number(start) {
                    Ok(tok) => tok,
                    Err(err) => return self.illegal_token(err),
                },
                c => {
                    let literal = c.to_string();
                    self.advance();
                    Token::new(
                        TokenKind::Illegal,
                        format!("unexpected character {literal:?}"),
                        Span::new(start, self.ch_pos),
                    )
                }
            };

            return self.finish_token(tok);
        }
    }

    /// Drain the lexer, collecting every token through the final EOF.
    /// Collection stops directly after an Illegal token.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let done = matches!(tok.kind, TokenKind::Eof | TokenKind::Illegal);
            tokens.push(tok);
            if done {
                return tokens;
            }
        }
    }

    // ── Token emission ──────────────────────────────────────────────────────

    fn token(&self, kind: TokenKind, text: &str, start: Position) -> Token {
        Token::new(kind, text, Span::new(start, self.ch_pos))
    }

    /// Stamp the line-terminator flag, update scan state, and hand out.
    /// Every returned token funnels through here exactly once.
    fn finish_token(&mut self, mut tok: Token) -> Token {
        tok.had_line_terminator_before = self.line_terminator_before;
        self.line_terminator_before = false;
        self.update_after_token(&tok);
        tok
    }

    fn illegal_token(&mut self, err: RotorError) -> Token {
        let pos = self.ch_pos;
        let tok = Token::new(TokenKind::Illegal, err.message(), Span::new(pos, pos));
        self.finish_token(tok)
    }

    /// Recompute the regex-versus-divide flag from the emitted token kind.
    /// Tokens that end a value expression forbid a following regex literal.
    fn update_after_token(&mut self, tok: &Token) {
        match tok.kind {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Regex
            | TokenKind::TrueLiteral
            | TokenKind::FalseLiteral
            | TokenKind::NullLiteral
            | TokenKind::TemplateTail
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Increment
            | TokenKind::Decrement => self.can_start_regex = false,
            _ => self.can_start_regex = true,
        }
    }

    // ── Scan helpers ────────────────────────────────────────────────────────

    fn skip_whitespace_and_comments(&mut self) -> RotorResult<()> {
        loop {
            match self.ch {
                Some('\n') => {
                    self.line_terminator_before = true;
                    self.advance();
                }
                Some(' ') | Some('\t') | Some('\x0c') | Some('\x0b') | Some('\u{00a0}') => {
                    self.advance();
                }
                Some('/') if self.peek_char() == Some('/') => {
                    self.advance();
                    self.advance();
                    while !matches!(self.ch, None | Some('\n')) {
                        self.advance();
                    }
                }
                Some('/') if self.peek_char() == Some('*') => {
                    self.advance();
                    self.advance();
                    self.consume_block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn consume_block_comment(&mut self) -> RotorResult<()> {
        loop {
            match self.ch {
                None => {
                    return Err(RotorError::SyntaxError(
                        "unterminated block comment".to_string(),
                    ))
                }
                Some('*') if self.peek_char() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(c) => {
                    if c == '\n' {
                        self.line_terminator_before = true;
                    }
                    self.advance();
                }
            }
        }
    }

    fn scan_identifier(&mut self, start: Position) -> Token {
        while matches!(self.ch, Some(c) if is_identifier_part(c)) {
            self.advance();
        }
        let text = self.slice(start, self.ch_pos);
        Token::new(
            lookup_identifier(text),
            text,
            Span::new(start, self.ch_pos),
        )
    }

    /// Scan a string literal. The token text keeps the surrounding quotes;
    /// escape sequences are carried through raw (the parser decodes them).
    fn scan_string(&mut self, start: Position, quote: char) -> RotorResult<Token> {
        self.advance();
        loop {
            match self.ch {
                None | Some('\n') => {
                    return Err(RotorError::SyntaxError(
                        "unterminated string literal".to_string(),
                    ))
                }
                Some('\\') => {
                    self.advance();
                    if self.ch.is_none() {
                        return Err(RotorError::SyntaxError(
                            "unterminated escape sequence".to_string(),
                        ));
                    }
                    self.advance();
                }
                Some(c) if c == quote => {
                    self.advance();
                    let text = self.slice(start, self.ch_pos);
                    return Ok(Token::new(
                        TokenKind::String,
                        text,
                        Span::new(start, self.ch_pos),
                    ));
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Scan a regular-expression literal, including its flags. `/` inside a
    /// `[...]` character class does not terminate the literal.
    fn scan_regexp(&mut self, start: Position) -> RotorResult<Token> {
        self.advance();
        let mut in_class = false;
        loop {
            match self.ch {
                None | Some('\n') => {
                    return Err(RotorError::SyntaxError(
                        "unterminated regular expression literal".to_string(),
                    ))
                }
                Some('/') if !in_class => {
                    self.advance();
                    break;
                }
                Some('[') => {
                    in_class = true;
                    self.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.advance();
                }
                Some('\\') => {
                    self.advance();
                    if self.ch.is_none() {
                        return Err(RotorError::SyntaxError(
                            "unterminated regular expression escape".to_string(),
                        ));
                    }
                    self.advance();
                }
                Some(_) => self.advance(),
            }
        }

        while matches!(self.ch, Some(c) if is_identifier_part(c)) {
            self.advance();
        }
        let text = self.slice(start, self.ch_pos);
        Ok(Token::new(
            TokenKind::Regex,
            text,
            Span::new(start, self.ch_pos),
        ))
    }

    fn scan_number(&mut self, start: Position) -> RotorResult<Token> {
        if self.ch == Some('0') {
            match self.peek_char() {
                Some('x') | Some('X') => {
                    self.advance();
                    self.advance();
                    if !self.consume_digits(|c| c.is_ascii_hexdigit()) {
                        return Err(RotorError::SyntaxError(
                            "invalid hexadecimal literal".to_string(),
                        ));
                    }
                    return Ok(self.number_token(start));
                }
                Some('o') | Some('O') => {
                    self.advance();
                    self.advance();
                    if !self.consume_digits(|c| ('0'..='7').contains(&c)) {
                        return Err(RotorError::SyntaxError("invalid octal literal".to_string()));
                    }
                    return Ok(self.number_token(start));
                }
                Some('b') | Some('B') => {
                    self.advance();
                    self.advance();
                    if !self.consume_digits(|c| c == '0' || c == '1') {
                        return Err(RotorError::SyntaxError(
                            "invalid binary literal".to_string(),
                        ));
                    }
                    return Ok(self.number_token(start));
                }
                _ => {}
            }
        }

        self.consume_digits(|c| c.is_ascii_digit());

        if self.ch == Some('.') {
            self.advance();
            if !self.consume_digits(|c| c.is_ascii_digit()) {
                return Err(RotorError::SyntaxError(
                    "invalid floating-point literal".to_string(),
                ));
            }
        }

        if matches!(self.ch, Some('e') | Some('E')) {
            self.advance();
            if matches!(self.ch, Some('+') | Some('-')) {
                self.advance();
            }
            if !self.consume_digits(|c| c.is_ascii_digit()) {
                return Err(RotorError::SyntaxError(
                    "invalid exponent in numeric literal".to_string(),
                ));
            }
        }

        Ok(self.number_token(start))
    }

    fn number_token(&self, start: Position) -> Token {
        Token::new(
            TokenKind::Number,
            self.slice(start, self.ch_pos),
            Span::new(start, self.ch_pos),
        )
    }

    fn consume_digits(&mut self, is_digit: impl Fn(char) -> bool) -> bool {
        let mut seen = false;
        while matches!(self.ch, Some(c) if is_digit(c)) {
            seen = true;
            self.advance();
        }
        seen
    }

    /// Scan one template chunk, queueing its fragment token(s).
    ///
    /// Called with `start_with_backtick` at an opening backtick, or without
    /// it when resuming after the `}` that closed a substitution. Emits
    /// either a lone tail fragment, or a head/middle fragment immediately
    /// followed by a `TemplateExprStart`.
    fn lex_template_chunk(&mut self, start_with_backtick: bool) -> RotorResult<()> {
        // Entering the chunk consumes any pending continuation, even when the
        // scan below fails; otherwise an unterminated template would resume
        // here forever instead of reaching EOF.
        self.continue_template = false;
        if start_with_backtick {
            self.advance();
        }
        let chunk_start = self.ch_pos;

        loop {
            match self.ch {
                None => {
                    return Err(RotorError::SyntaxError(
                        "unterminated template literal".to_string(),
                    ))
                }
                Some('`') => {
                    let text = self.slice(chunk_start, self.ch_pos).to_string();
                    self.advance();
                    let tail = Token::new(
                        TokenKind::TemplateTail,
                        text,
                        Span::new(chunk_start, self.ch_pos),
                    );
                    self.pending.push(tail);
                    self.contexts.pop();
                    return Ok(());
                }
                Some('$') if self.peek_char() == Some('{') => {
                    let kind = if start_with_backtick {
                        TokenKind::TemplateHead
                    } else {
                        TokenKind::TemplateMiddle
                    };
                    let text = self.slice(chunk_start, self.ch_pos).to_string();
                    let dollar_pos = self.ch_pos;
                    let fragment = Token::new(kind, text, Span::new(chunk_start, dollar_pos));
                    self.advance();
                    self.advance();
                    let expr_start = Token::new(
                        TokenKind::TemplateExprStart,
                        "${",
                        Span::new(dollar_pos, self.ch_pos),
                    );
                    self.pending.push(fragment);
                    self.pending.push(expr_start);
                    self.contexts.push(TemplateContext::default());
                    return Ok(());
                }
                Some('\\') => {
                    self.advance();
                    if self.ch.is_none() {
                        return Err(RotorError::SyntaxError(
                            "unterminated escape in template literal".to_string(),
                        ));
                    }
                    self.advance();
                }
                Some('{') => {
                    if let Some(ctx) = self.contexts.last_mut() {
                        ctx.brace_depth += 1;
                    }
                    self.advance();
                }
                Some(_) => self.advance(),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
