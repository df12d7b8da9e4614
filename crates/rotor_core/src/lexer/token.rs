//! Lexical token definitions: kinds, source positions, and spans.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Position / Span
// ─────────────────────────────────────────────────────────────────────────────

/// A byte offset + line/column location in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based byte offset from the beginning of the source string.
    pub offset: usize,
    /// One-based line number (incremented on every line terminator).
    pub line: u32,
    /// Zero-based column, measured in UTF-16 code units per the ECMAScript
    /// string convention.
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

/// A half-open `[start, end)` source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Inclusive start of the span.
    pub start: Position,
    /// Exclusive end of the span.
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────────────

/// The syntactic category of a JavaScript lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ── Sentinels ─────────────────────────────────────────────────────────
    /// A malformed token; its text carries the scan error message.
    Illegal,
    /// End of input.
    Eof,
    /// Comment text. Comments are skipped by the lexer; the kind exists for
    /// tooling that wants to classify trivia.
    Comment,

    // ── Literals and identifiers ──────────────────────────────────────────
    /// An identifier that is not a reserved word.
    Identifier,
    /// Decimal, hex (`0x…`), octal (`0o…`), binary (`0b…`), or floating
    /// numeric literal.
    Number,
    /// String literal enclosed in `"` or `'`; text includes the quotes.
    String,
    /// Regular expression literal `/pattern/flags`.
    Regex,

    // ── Template literal components ───────────────────────────────────────
    /// Opening chunk of a substituted template: the text between `` ` `` and
    /// the first `${`.
    TemplateHead,
    /// Chunk between two substitutions.
    TemplateMiddle,
    /// Final chunk of a template, or the entire text of one with no
    /// substitutions; its span includes the closing backtick.
    TemplateTail,
    /// The `${` opening a template substitution.
    TemplateExprStart,
    /// The `}` closing a template substitution.
    TemplateExprEnd,

    // ── Intrinsic value literals ──────────────────────────────────────────
    /// `null`
    NullLiteral,
    /// `true`
    TrueLiteral,
    /// `false`
    FalseLiteral,

    // ── Punctuation ───────────────────────────────────────────────────────
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `` ` ``; reserved for tooling, template scanning emits the chunk
    /// kinds instead.
    Backtick,

    // ── Operators ─────────────────────────────────────────────────────────
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `~`
    BitwiseNot,
    /// `!`
    LogicalNot,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `>>>`
    UnsignedShiftRight,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `==`
    Equal,
    /// `===`
    StrictEqual,
    /// `!=`
    NotEqual,
    /// `!==`
    StrictNotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModuloAssign,
    /// `<<=`
    ShiftLeftAssign,
    /// `>>=`
    ShiftRightAssign,
    /// `>>>=`
    UnsignedShiftAssign,
    /// `&=`
    BitwiseAndAssign,
    /// `|=`
    BitwiseOrAssign,
    /// `^=`
    BitwiseXorAssign,
    /// `=>`
    Arrow,
    /// `...`
    Ellipsis,

    // ── Reserved words ────────────────────────────────────────────────────
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `debugger`
    Debugger,
    /// `default`
    Default,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `export`
    Export,
    /// `extends`
    Extends,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `instanceof`
    Instanceof,
    /// `let`
    Let,
    /// `new`
    New,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `switch`
    Switch,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `try`
    Try,
    /// `typeof`
    Typeof,
    /// `var`
    Var,
    /// `void`
    Void,
    /// `while`
    While,
    /// `with`
    With,
    /// `yield`
    Yield,

    // ── Future reserved words ─────────────────────────────────────────────
    /// `package`
    Package,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `public`
    Public,
    /// `interface`
    Interface,
    /// `implements`
    Implements,
}

impl TokenKind {
    /// The canonical name of this kind, as used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Regex => "REGEXP",
            TokenKind::TemplateHead => "TEMPLATE_HEAD",
            TokenKind::TemplateMiddle => "TEMPLATE_MIDDLE",
            TokenKind::TemplateTail => "TEMPLATE_TAIL",
            TokenKind::TemplateExprStart => "TEMPLATE_EXPR_START",
            TokenKind::TemplateExprEnd => "TEMPLATE_EXPR_END",
            TokenKind::NullLiteral => "NULL",
            TokenKind::TrueLiteral => "TRUE",
            TokenKind::FalseLiteral => "FALSE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Question => "QUESTION",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::BitwiseNot => "BITWISE_NOT",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::ShiftLeft => "SHIFT_LEFT",
            TokenKind::ShiftRight => "SHIFT_RIGHT",
            TokenKind::UnsignedShiftRight => "UNSIGNED_SHIFT_RIGHT",
            TokenKind::BitwiseAnd => "BITWISE_AND",
            TokenKind::BitwiseOr => "BITWISE_OR",
            TokenKind::BitwiseXor => "BITWISE_XOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::Equal => "EQUAL",
            TokenKind::StrictEqual => "STRICT_EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::StrictNotEqual => "STRICT_NOT_EQUAL",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::MultiplyAssign => "MULTIPLY_ASSIGN",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::ModuloAssign => "MODULO_ASSIGN",
            TokenKind::ShiftLeftAssign => "SHIFT_LEFT_ASSIGN",
            TokenKind::ShiftRightAssign => "SHIFT_RIGHT_ASSIGN",
            TokenKind::UnsignedShiftAssign => "UNSIGNED_SHIFT_ASSIGN",
            TokenKind::BitwiseAndAssign => "BITWISE_AND_ASSIGN",
            TokenKind::BitwiseOrAssign => "BITWISE_OR_ASSIGN",
            TokenKind::BitwiseXorAssign => "BITWISE_XOR_ASSIGN",
            TokenKind::Arrow => "ARROW",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::Break => "BREAK",
            TokenKind::Case => "CASE",
            TokenKind::Catch => "CATCH",
            TokenKind::Class => "CLASS",
            TokenKind::Const => "CONST",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Debugger => "DEBUGGER",
            TokenKind::Default => "DEFAULT",
            TokenKind::Delete => "DELETE",
            TokenKind::Do => "DO",
            TokenKind::Else => "ELSE",
            TokenKind::Enum => "ENUM",
            TokenKind::Export => "EXPORT",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Finally => "FINALLY",
            TokenKind::For => "FOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Import => "IMPORT",
            TokenKind::In => "IN",
            TokenKind::Instanceof => "INSTANCEOF",
            TokenKind::Let => "LET",
            TokenKind::New => "NEW",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::Switch => "SWITCH",
            TokenKind::This => "THIS",
            TokenKind::Throw => "THROW",
            TokenKind::Try => "TRY",
            TokenKind::Typeof => "TYPEOF",
            TokenKind::Var => "VAR",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::With => "WITH",
            TokenKind::Yield => "YIELD",
            TokenKind::Package => "PACKAGE",
            TokenKind::Private => "PRIVATE",
            TokenKind::Protected => "PROTECTED",
            TokenKind::Public => "PUBLIC",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Implements => "IMPLEMENTS",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyword table
// ─────────────────────────────────────────────────────────────────────────────

/// Every reserved word recognised by the lexer, in sorted order. The three
/// value literals `null`/`true`/`false` are included because the scanner
/// resolves them through the same table.
const KEYWORDS: [&str; 44] = [
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Map a reserved word to its [`TokenKind`], or `None` for plain
/// identifiers. Matching is exact; `lookup_identifier` is the usual entry.
pub fn keyword_kind(s: &str) -> Option<TokenKind> {
    match s {
        "break" => Some(TokenKind::Break),
        "case" => Some(TokenKind::Case),
        "catch" => Some(TokenKind::Catch),
        "class" => Some(TokenKind::Class),
        "const" => Some(TokenKind::Const),
        "continue" => Some(TokenKind::Continue),
        "debugger" => Some(TokenKind::Debugger),
        "default" => Some(TokenKind::Default),
        "delete" => Some(TokenKind::Delete),
        "do" => Some(TokenKind::Do),
        "else" => Some(TokenKind::Else),
        "enum" => Some(TokenKind::Enum),
        "export" => Some(TokenKind::Export),
        "extends" => Some(TokenKind::Extends),
        "finally" => Some(TokenKind::Finally),
        "for" => Some(TokenKind::For),
        "function" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "import" => Some(TokenKind::Import),
        "in" => Some(TokenKind::In),
        "instanceof" => Some(TokenKind::Instanceof),
        "let" => Some(TokenKind::Let),
        "new" => Some(TokenKind::New),
        "return" => Some(TokenKind::Return),
        "super" => Some(TokenKind::Super),
        "switch" => Some(TokenKind::Switch),
        "this" => Some(TokenKind::This),
        "throw" => Some(TokenKind::Throw),
        "try" => Some(TokenKind::Try),
        "typeof" => Some(TokenKind::Typeof),
        "var" => Some(TokenKind::Var),
        "void" => Some(TokenKind::Void),
        "while" => Some(TokenKind::While),
        "with" => Some(TokenKind::With),
        "yield" => Some(TokenKind::Yield),
        "package" => Some(TokenKind::Package),
        "private" => Some(TokenKind::Private),
        "protected" => Some(TokenKind::Protected),
        "public" => Some(TokenKind::Public),
        "interface" => Some(TokenKind::Interface),
        "implements" => Some(TokenKind::Implements),
        "null" => Some(TokenKind::NullLiteral),
        "true" => Some(TokenKind::TrueLiteral),
        "false" => Some(TokenKind::FalseLiteral),
        _ => None,
    }
}

/// Resolve a scanned identifier to its token kind: a reserved-word kind when
/// the text is a keyword, [`TokenKind::Identifier`] otherwise.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    keyword_kind(ident).unwrap_or(TokenKind::Identifier)
}

/// The sorted list of reserved words recognised by the lexer.
pub fn keywords() -> &'static [&'static str] {
    &KEYWORDS
}

/// Whether `word` is a reserved keyword. Case-insensitive.
pub fn is_keyword(word: &str) -> bool {
    keyword_kind(&word.to_ascii_lowercase()).is_some()
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// A single lexical token produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The syntactic category.
    pub kind: TokenKind,
    /// The raw source text of the token. For [`TokenKind::Illegal`] this is
    /// the scan error message instead.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
    /// `true` when at least one line terminator appeared between the
    /// previous token and this one.
    pub had_line_terminator_before: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            had_line_terminator_before: false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            f.write_str(self.kind.as_str())
        } else {
            write!(f, "{}({:?})", self.kind.as_str(), self.text)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
