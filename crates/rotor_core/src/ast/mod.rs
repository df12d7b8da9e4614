//! Abstract syntax tree node definitions.
//!
//! Every node struct carries a [`SourceLocation`] field (`loc`) that pinpoints
//! its position in the source text.  [`SourceLocation`] is a type alias for
//! [`crate::lexer::Span`] so it is [`Copy`].
//!
//! # Structure
//!
//! - [`Program`]: root node.
//! - [`Stmt`]: statement nodes.
//! - [`Expr`]: expression nodes.
//! - [`Pat`]: binding-pattern nodes.
//! - Literal types: [`NullLit`], [`BoolLit`], [`NumLit`], [`StringLit`],
//!   [`RegExpLit`], [`TemplateLit`].

use crate::lexer::Span;

// ─────────────────────────────────────────────────────────────────────────────
// Source location
// ─────────────────────────────────────────────────────────────────────────────

/// Source location attached to every AST node: a half-open `[start, end)`
/// span in the source text.
pub type SourceLocation = Span;

// ─────────────────────────────────────────────────────────────────────────────
// Program
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the source file is a classic script or an ES module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// A classic `<script>`; top-level `import`/`export` are not allowed.
    Script,
    /// An ES module. Reserved; the parser only produces [`SourceType::Script`].
    Module,
}

/// The root node of a parsed JavaScript source file.
#[derive(Debug, Clone)]
pub struct Program {
    /// Span from the first statement to the last, or the default span when
    /// the program is empty.
    pub loc: SourceLocation,
    /// Whether the file is a script or a module.
    pub source_type: SourceType,
    /// Top-level statements.
    pub body: Vec<Stmt>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Common helpers
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript identifier (name, label, or binding).
#[derive(Debug, Clone)]
pub struct Ident {
    /// Source location.
    pub loc: SourceLocation,
    /// The raw identifier text.
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Statements
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `{ … }` block statement.
    Block(BlockStmt),
    /// `var / let / const` variable declaration.
    VarDecl(VarDecl),
    /// `function` declaration.
    FnDecl(Box<FnDecl>),
    /// Expression statement (`expr ;`).
    Expr(ExprStmt),
    /// `if (test) consequent else alternate`
    If(IfStmt),
    /// `for (init; test; update) body`
    For(ForStmt),
    /// `for (left in right) body`
    ForIn(ForInStmt),
    /// `for (left of right) body`
    ForOf(ForOfStmt),
    /// `while (test) body`
    While(WhileStmt),
    /// `do body while (test);`
    DoWhile(DoWhileStmt),
    /// `switch (discriminant) { cases }`
    Switch(SwitchStmt),
    /// `try { … } catch (…) { … } finally { … }`
    Try(TryStmt),
    /// `return argument?;`
    Return(ReturnStmt),
    /// `throw argument;`
    Throw(ThrowStmt),
    /// `break label?;`
    Break(BreakStmt),
    /// `continue label?;`
    Continue(ContinueStmt),
    /// `label: body`
    Labeled(LabeledStmt),
    /// `debugger;`
    Debugger(DebuggerStmt),
    /// `with (object) body`
    With(WithStmt),
    /// Empty statement `;`.
    Empty(EmptyStmt),
}

impl Stmt {
    /// Returns the source location of this statement.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Stmt::Block(s) => s.loc,
            Stmt::VarDecl(s) => s.loc,
            Stmt::FnDecl(s) => s.loc,
            Stmt::Expr(s) => s.loc,
            Stmt::If(s) => s.loc,
            Stmt::For(s) => s.loc,
            Stmt::ForIn(s) => s.loc,
            Stmt::ForOf(s) => s.loc,
            Stmt::While(s) => s.loc,
            Stmt::DoWhile(s) => s.loc,
            Stmt::Switch(s) => s.loc,
            Stmt::Try(s) => s.loc,
            Stmt::Return(s) => s.loc,
            Stmt::Throw(s) => s.loc,
            Stmt::Break(s) => s.loc,
            Stmt::Continue(s) => s.loc,
            Stmt::Labeled(s) => s.loc,
            Stmt::Debugger(s) => s.loc,
            Stmt::With(s) => s.loc,
            Stmt::Empty(s) => s.loc,
        }
    }
}

/// `{ statements }` block statement.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Statements in the block.
    pub body: Vec<Stmt>,
}

/// Expression statement: `expr ;`
#[derive(Debug, Clone)]
pub struct ExprStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The expression.
    pub expr: Box<Expr>,
}

/// `if (test) consequent else alternate`
#[derive(Debug, Clone)]
pub struct IfStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Condition expression.
    pub test: Box<Expr>,
    /// Taken branch.
    pub consequent: Box<Stmt>,
    /// Not-taken branch, if present.
    pub alternate: Option<Box<Stmt>>,
}

/// `for (init; test; update) body`
#[derive(Debug, Clone)]
pub struct ForStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional initializer.
    pub init: Option<ForInit>,
    /// Optional loop condition.
    pub test: Option<Box<Expr>>,
    /// Optional update expression.
    pub update: Option<Box<Expr>>,
    /// Loop body.
    pub body: Box<Stmt>,
}

/// The initializer slot in a C-style `for` statement.
#[derive(Debug, Clone)]
pub enum ForInit {
    /// `var / let / const` declaration.
    VarDecl(VarDecl),
    /// Plain expression.
    Expr(Box<Expr>),
}

/// `for (left in right) body`
#[derive(Debug, Clone)]
pub struct ForInStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Left-hand side binding.
    pub left: ForInOfLeft,
    /// The object whose keys are iterated.
    pub right: Box<Expr>,
    /// Loop body.
    pub body: Box<Stmt>,
}

/// `for (left of right) body`
#[derive(Debug, Clone)]
pub struct ForOfStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Left-hand side binding.
    pub left: ForInOfLeft,
    /// The iterable.
    pub right: Box<Expr>,
    /// Loop body.
    pub body: Box<Stmt>,
}

/// The left-hand side of a `for-in` or `for-of` statement.
#[derive(Debug, Clone)]
pub enum ForInOfLeft {
    /// `var / let / const` declaration.
    VarDecl(VarDecl),
    /// An assignment pattern (destructuring target).
    Pat(Pat),
}

/// `while (test) body`
#[derive(Debug, Clone)]
pub struct WhileStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop condition.
    pub test: Box<Expr>,
    /// Loop body.
    pub body: Box<Stmt>,
}

/// `do body while (test);`
#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop body.
    pub body: Box<Stmt>,
    /// Loop condition.
    pub test: Box<Expr>,
}

/// `switch (discriminant) { cases }`
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The value being switched on.
    pub discriminant: Box<Expr>,
    /// The `case` / `default` clauses.
    pub cases: Vec<SwitchCase>,
}

/// A single `case expr:` or `default:` clause in a `switch` statement.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    /// Source location.
    pub loc: SourceLocation,
    /// `None` for the `default:` clause; `Some(expr)` for `case expr:`.
    pub test: Option<Expr>,
    /// Body statements for this clause.
    pub consequent: Vec<Stmt>,
}

/// `try { block } catch (param) { handler } finally { finalizer }`
#[derive(Debug, Clone)]
pub struct TryStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The `try` block.
    pub block: BlockStmt,
    /// Optional `catch` clause. At least one of `handler` and `finalizer`
    /// is present.
    pub handler: Option<CatchClause>,
    /// Optional `finally` block.
    pub finalizer: Option<BlockStmt>,
}

/// `catch (param) body`
#[derive(Debug, Clone)]
pub struct CatchClause {
    /// Source location.
    pub loc: SourceLocation,
    /// The binding for the caught value.
    pub param: Pat,
    /// The catch block.
    pub body: BlockStmt,
}

/// `return argument?;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional return value.
    pub argument: Option<Box<Expr>>,
}

/// `throw argument;`
#[derive(Debug, Clone)]
pub struct ThrowStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The thrown value.
    pub argument: Box<Expr>,
}

/// `break label?;`
#[derive(Debug, Clone)]
pub struct BreakStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional target label.
    pub label: Option<Ident>,
}

/// `continue label?;`
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional target label.
    pub label: Option<Ident>,
}

/// `label: body`
#[derive(Debug, Clone)]
pub struct LabeledStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The label identifier.
    pub label: Ident,
    /// The labeled statement.
    pub body: Box<Stmt>,
}

/// `debugger;`
#[derive(Debug, Clone)]
pub struct DebuggerStmt {
    /// Source location.
    pub loc: SourceLocation,
}

/// `with (object) body`
#[derive(Debug, Clone)]
pub struct WithStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The scope object.
    pub object: Box<Expr>,
    /// The body statement.
    pub body: Box<Stmt>,
}

/// Empty statement `;`.
#[derive(Debug, Clone)]
pub struct EmptyStmt {
    /// Source location.
    pub loc: SourceLocation,
}

// ─────────────────────────────────────────────────────────────────────────────
// Variable declarations
// ─────────────────────────────────────────────────────────────────────────────

/// `var / let / const declarators`
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// Declaration keyword.
    pub kind: VarKind,
    /// One or more declarators.
    pub declarators: Vec<VarDeclarator>,
}

/// Whether a variable declaration uses `var`, `let`, or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `var`: function-scoped.
    Var,
    /// `let`: block-scoped, reassignable.
    Let,
    /// `const`: block-scoped, non-reassignable.
    Const,
}

/// A single `pattern [= initializer]` in a variable declaration.
#[derive(Debug, Clone)]
pub struct VarDeclarator {
    /// Source location.
    pub loc: SourceLocation,
    /// The binding pattern.
    pub id: Pat,
    /// Optional initializer expression.
    pub init: Option<Box<Expr>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Function declarations
// ─────────────────────────────────────────────────────────────────────────────

/// `function [*] id (params) { body }`
#[derive(Debug, Clone)]
pub struct FnDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// The function name.
    pub id: Ident,
    /// `true` for generator functions (`function*`).
    pub is_generator: bool,
    /// Parameter list. Defaults appear as [`Pat::Assign`] and a trailing
    /// rest parameter as [`Pat::Rest`].
    pub params: Vec<Pat>,
    /// Function body.
    pub body: BlockStmt,
}

// ─────────────────────────────────────────────────────────────────────────────
// Literals
// ─────────────────────────────────────────────────────────────────────────────

/// `null` literal.
#[derive(Debug, Clone)]
pub struct NullLit {
    /// Source location.
    pub loc: SourceLocation,
}

/// `true` or `false` literal.
#[derive(Debug, Clone)]
pub struct BoolLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The boolean value.
    pub value: bool,
}

/// Numeric literal (decimal, hex, octal, binary, or floating).
#[derive(Debug, Clone)]
pub struct NumLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The parsed numeric value.
    pub value: f64,
    /// The raw source text.
    pub raw: String,
}

/// String literal.
#[derive(Debug, Clone)]
pub struct StringLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The decoded string value (quotes stripped, escapes processed).
    pub value: String,
}

/// Regular-expression literal `/pattern/flags`.
#[derive(Debug, Clone)]
pub struct RegExpLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The pattern string (between the slashes).
    pub pattern: String,
    /// The flag characters (after the closing slash).
    pub flags: String,
}

/// A template literal: `` `quasis ${expressions} quasis` ``.
#[derive(Debug, Clone)]
pub struct TemplateLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The string parts (one more than `expressions`).
    pub quasis: Vec<TemplateElement>,
    /// The interpolated expressions.
    pub expressions: Vec<Expr>,
}

/// A static string fragment inside a template literal.
#[derive(Debug, Clone)]
pub struct TemplateElement {
    /// Source location.
    pub loc: SourceLocation,
    /// Raw source text of this fragment (backslashes not interpreted).
    pub raw: String,
    /// Cooked (decoded) value; `None` if the fragment has an invalid escape.
    pub cooked: Option<String>,
    /// `true` for the final quasi (at the end of the template).
    pub tail: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Expressions
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript expression.
#[derive(Debug, Clone)]
pub enum Expr {
    // ── Literals ──────────────────────────────────────────────────────────
    /// `null`
    Null(NullLit),
    /// `true` / `false`
    Bool(BoolLit),
    /// Numeric literal.
    Num(NumLit),
    /// String literal.
    Str(StringLit),
    /// Regular-expression literal.
    Regexp(RegExpLit),
    /// Template literal.
    Template(Box<TemplateLit>),

    // ── Primary ───────────────────────────────────────────────────────────
    /// Plain identifier.
    Ident(Ident),
    /// `this`
    This(ThisExpr),
    /// `super`
    Super(SuperExpr),
    /// Array literal `[elements]`.
    Array(Box<ArrayExpr>),
    /// Object literal `{ properties }`.
    Object(Box<ObjectExpr>),

    // ── Operators ─────────────────────────────────────────────────────────
    /// Unary prefix operator.
    Unary(Box<UnaryExpr>),
    /// `++` / `--` update expression.
    Update(Box<UpdateExpr>),
    /// Binary infix operator.
    Binary(Box<BinaryExpr>),
    /// Logical `&&` / `||` operator.
    Logical(Box<LogicalExpr>),
    /// `test ? consequent : alternate`
    Conditional(Box<ConditionalExpr>),
    /// Assignment expression (`=`, `+=`, …).
    Assign(Box<AssignExpr>),
    /// Comma-separated sequence `(a, b, c)`.
    Sequence(Box<SequenceExpr>),

    // ── Member / call ─────────────────────────────────────────────────────
    /// `object.property` / `object[expr]`
    Member(Box<MemberExpr>),
    /// `callee(args)`
    Call(Box<CallExpr>),
    /// `new callee` / `new callee(args)`
    New(Box<NewExpr>),
    /// `new.target`
    MetaProp(MetaPropExpr),

    // ── Template / spread ─────────────────────────────────────────────────
    /// `` tag`template` ``
    TaggedTemplate(Box<TaggedTemplateExpr>),
    /// `...argument` inside an array literal.
    Spread(Box<SpreadElement>),
}

impl Expr {
    /// Returns the source location of this expression.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Expr::Null(e) => e.loc,
            Expr::Bool(e) => e.loc,
            Expr::Num(e) => e.loc,
            Expr::Str(e) => e.loc,
            Expr::Regexp(e) => e.loc,
            Expr::Template(e) => e.loc,
            Expr::Ident(e) => e.loc,
            Expr::This(e) => e.loc,
            Expr::Super(e) => e.loc,
            Expr::Array(e) => e.loc,
            Expr::Object(e) => e.loc,
            Expr::Unary(e) => e.loc,
            Expr::Update(e) => e.loc,
            Expr::Binary(e) => e.loc,
            Expr::Logical(e) => e.loc,
            Expr::Conditional(e) => e.loc,
            Expr::Assign(e) => e.loc,
            Expr::Sequence(e) => e.loc,
            Expr::Member(e) => e.loc,
            Expr::Call(e) => e.loc,
            Expr::New(e) => e.loc,
            Expr::MetaProp(e) => e.loc,
            Expr::TaggedTemplate(e) => e.loc,
            Expr::Spread(e) => e.loc,
        }
    }

    /// Mutable access to the source location, so the parser can re-span a
    /// node (for example to make a parenthesized expression cover its
    /// parens).
    pub(crate) fn loc_mut(&mut self) -> &mut SourceLocation {
        match self {
            Expr::Null(e) => &mut e.loc,
            Expr::Bool(e) => &mut e.loc,
            Expr::Num(e) => &mut e.loc,
            Expr::Str(e) => &mut e.loc,
            Expr::Regexp(e) => &mut e.loc,
            Expr::Template(e) => &mut e.loc,
            Expr::Ident(e) => &mut e.loc,
            Expr::This(e) => &mut e.loc,
            Expr::Super(e) => &mut e.loc,
            Expr::Array(e) => &mut e.loc,
            Expr::Object(e) => &mut e.loc,
            Expr::Unary(e) => &mut e.loc,
            Expr::Update(e) => &mut e.loc,
            Expr::Binary(e) => &mut e.loc,
            Expr::Logical(e) => &mut e.loc,
            Expr::Conditional(e) => &mut e.loc,
            Expr::Assign(e) => &mut e.loc,
            Expr::Sequence(e) => &mut e.loc,
            Expr::Member(e) => &mut e.loc,
            Expr::Call(e) => &mut e.loc,
            Expr::New(e) => &mut e.loc,
            Expr::MetaProp(e) => &mut e.loc,
            Expr::TaggedTemplate(e) => &mut e.loc,
            Expr::Spread(e) => &mut e.loc,
        }
    }
}

/// `this`
#[derive(Debug, Clone)]
pub struct ThisExpr {
    /// Source location.
    pub loc: SourceLocation,
}

/// `super`
#[derive(Debug, Clone)]
pub struct SuperExpr {
    /// Source location.
    pub loc: SourceLocation,
}

/// Array literal: `[elements]`.
#[derive(Debug, Clone)]
pub struct ArrayExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Elements, where `None` represents an elision (`,`). Spread entries
    /// appear as [`Expr::Spread`].
    pub elements: Vec<Option<Expr>>,
}

/// Object literal: `{ properties }`.
#[derive(Debug, Clone)]
pub struct ObjectExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Property list.
    pub properties: Vec<ObjectProp>,
}

/// A single property (or spread) in an object literal.
#[derive(Debug, Clone)]
pub enum ObjectProp {
    /// `key: value` or shorthand property.
    Prop(Box<Prop>),
    /// `...expr` spread property.
    Spread(SpreadElement),
}

/// A concrete property in an object literal.
#[derive(Debug, Clone)]
pub struct Prop {
    /// Source location.
    pub loc: SourceLocation,
    /// The property key.
    pub key: PropKey,
    /// The property value.
    pub value: Box<Expr>,
    /// `init`, getter, or setter.
    pub kind: PropKind,
    /// `true` when the key is a computed expression `[expr]`.
    pub is_computed: bool,
    /// `true` for `{ key }` shorthand (key and value share one name).
    pub shorthand: bool,
    /// `true` for method-shorthand properties.
    pub is_method: bool,
}

/// The key in an object-literal property.
#[derive(Debug, Clone)]
pub enum PropKey {
    /// Identifier key.
    Ident(Ident),
    /// String literal key.
    Str(StringLit),
    /// Numeric literal key.
    Num(NumLit),
    /// Computed key `[expr]`.
    Computed(Box<Expr>),
}

/// The variant of an object-literal property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// A standard `key: value` property.
    Init,
    /// Getter (`get key() { … }`).
    Get,
    /// Setter (`set key(v) { … }`).
    Set,
}

/// A spread element in array literals or argument lists: `...argument`.
#[derive(Debug, Clone)]
pub struct SpreadElement {
    /// Source location.
    pub loc: SourceLocation,
    /// The spread argument.
    pub argument: Box<Expr>,
}

/// Unary prefix expression: `op argument`.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The unary operator.
    pub op: UnaryOp,
    /// Always `true`; kept so consumers can treat unary and update
    /// expressions uniformly.
    pub prefix: bool,
    /// The operand.
    pub argument: Box<Expr>,
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `!`
    Not,
    /// `typeof`
    Typeof,
    /// `void`
    Void,
    /// `delete`
    Delete,
}

/// `++` / `--` update expression.
#[derive(Debug, Clone)]
pub struct UpdateExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// `++` or `--`.
    pub op: UpdateOp,
    /// `true` for prefix, `false` for postfix.
    pub prefix: bool,
    /// The operand (must be an l-value).
    pub argument: Box<Expr>,
}

/// The increment / decrement operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOp {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

/// Binary infix expression: `left op right`.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The binary operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A binary (non-assignment, non-logical) infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `in`
    In,
    /// `instanceof`
    Instanceof,
}

/// Logical short-circuit expression: `left op right`.
#[derive(Debug, Clone)]
pub struct LogicalExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The logical operator.
    pub op: LogicalOp,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A logical (short-circuit) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The condition.
    pub test: Box<Expr>,
    /// Taken branch.
    pub consequent: Box<Expr>,
    /// Not-taken branch.
    pub alternate: Box<Expr>,
}

/// Assignment expression: `left op right`.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The assignment operator.
    pub op: AssignOp,
    /// Left-hand side; restricted to identifiers and member expressions.
    pub left: Box<Expr>,
    /// Right-hand side.
    pub right: Box<Expr>,
}

/// An assignment operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    RemAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `>>>=`
    UShrAssign,
    /// `&=`
    BitAndAssign,
    /// `|=`
    BitOrAssign,
    /// `^=`
    BitXorAssign,
}

/// Comma-separated sequence expression: `(a, b, c)`.
#[derive(Debug, Clone)]
pub struct SequenceExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The expressions in order.
    pub expressions: Vec<Expr>,
}

/// `object.property` or `object[expr]`
#[derive(Debug, Clone)]
pub struct MemberExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The object.
    pub object: Box<Expr>,
    /// The property key.
    pub property: MemberProp,
    /// `true` for computed access `object[expr]`.
    pub is_computed: bool,
}

/// The property part of a member expression.
#[derive(Debug, Clone)]
pub enum MemberProp {
    /// Static identifier (`.name`).
    Ident(Ident),
    /// Computed expression (`[expr]`).
    Computed(Box<Expr>),
}

/// `callee(arguments)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The function being called.
    pub callee: Box<Expr>,
    /// Argument list. Spread arguments appear as [`Expr::Spread`].
    pub arguments: Vec<Expr>,
}

/// `new callee` or `new callee(arguments)`
#[derive(Debug, Clone)]
pub struct NewExpr {
    /// Source location; starts at the `new` keyword.
    pub loc: SourceLocation,
    /// The constructor.
    pub callee: Box<Expr>,
    /// `None` when no argument list is written (`new Foo`), `Some` with the
    /// arguments otherwise (`new Foo()` gives `Some(vec![])`).
    pub arguments: Option<Vec<Expr>>,
}

/// The `new.target` meta property expression.
#[derive(Debug, Clone)]
pub struct MetaPropExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The meta object (`new`).
    pub meta: Ident,
    /// The property name (`target`).
    pub property: Ident,
}

/// A tagged template expression: `` tag`template` ``.
#[derive(Debug, Clone)]
pub struct TaggedTemplateExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The tag function.
    pub tag: Box<Expr>,
    /// The template literal.
    pub quasi: TemplateLit,
}

// ─────────────────────────────────────────────────────────────────────────────
// Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// A binding pattern: the left side of a declaration, a parameter, or a
/// catch binding.
#[derive(Debug, Clone)]
pub enum Pat {
    /// Simple identifier binding.
    Ident(Ident),
    /// Array destructuring `[a, , b]`.
    Array(Box<ArrayPat>),
    /// Object destructuring `{ a, b: c }`.
    Object(Box<ObjectPat>),
    /// Rest parameter `...pattern` (parameter lists only; array and object
    /// patterns carry their rest element in a dedicated field).
    Rest(Box<RestElement>),
    /// Default-value binding `pattern = default`.
    Assign(Box<AssignPat>),
}

impl Pat {
    /// Returns the source location of this pattern.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Pat::Ident(p) => p.loc,
            Pat::Array(p) => p.loc,
            Pat::Object(p) => p.loc,
            Pat::Rest(p) => p.loc,
            Pat::Assign(p) => p.loc,
        }
    }
}

/// Array destructuring pattern: `[a, , b = 1, ...rest]`.
#[derive(Debug, Clone)]
pub struct ArrayPat {
    /// Source location.
    pub loc: SourceLocation,
    /// Positional elements, where `None` represents an elision.
    pub elements: Vec<Option<Pat>>,
    /// Trailing rest element, if present; always syntactically last.
    pub rest: Option<RestElement>,
}

/// Object destructuring pattern: `{ a, b: c, ...rest }`.
#[derive(Debug, Clone)]
pub struct ObjectPat {
    /// Source location.
    pub loc: SourceLocation,
    /// Property patterns.
    pub properties: Vec<ObjectPatProp>,
    /// Trailing rest element, if present; always syntactically last.
    pub rest: Option<RestElement>,
}

/// A single property inside an object destructuring pattern.
#[derive(Debug, Clone)]
pub struct ObjectPatProp {
    /// Source location.
    pub loc: SourceLocation,
    /// The property key.
    pub key: Ident,
    /// The binding target; for shorthand with a default this is a
    /// [`Pat::Assign`] around the key's identifier.
    pub value: Pat,
    /// `true` for `{ id }` / `{ id = default }` shorthand.
    pub shorthand: bool,
}

/// A rest element in patterns and parameter lists: `...pattern`.
#[derive(Debug, Clone)]
pub struct RestElement {
    /// Source location; starts at the `...`.
    pub loc: SourceLocation,
    /// The rest binding target.
    pub argument: Box<Pat>,
}

/// A default-value pattern: `pattern = default`.
#[derive(Debug, Clone)]
pub struct AssignPat {
    /// Source location.
    pub loc: SourceLocation,
    /// The binding pattern.
    pub left: Box<Pat>,
    /// The default expression.
    pub right: Box<Expr>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_loc() -> SourceLocation {
        SourceLocation::default()
    }

    // ── Program ─────────────────────────────────────────────────────────────

    #[test]
    fn test_source_type_variants() {
        assert_ne!(SourceType::Script, SourceType::Module);
        assert_eq!(SourceType::Script, SourceType::Script);
    }

    #[test]
    fn test_program_empty_script() {
        let prog = Program {
            loc: dummy_loc(),
            source_type: SourceType::Script,
            body: vec![],
        };
        assert!(prog.body.is_empty());
        assert_eq!(prog.source_type, SourceType::Script);
    }

    // ── Statements ──────────────────────────────────────────────────────────

    #[test]
    fn test_stmt_loc_all_variants() {
        let loc = dummy_loc();
        let ident = || Ident {
            loc,
            name: "x".into(),
        };
        let expr = || Box::new(Expr::Null(NullLit { loc }));
        let block = || BlockStmt { loc, body: vec![] };
        let empty = || Box::new(Stmt::Empty(EmptyStmt { loc }));
        let var_decl = || VarDecl {
            loc,
            kind: VarKind::Let,
            declarators: vec![],
        };
        let stmts: Vec<Stmt> = vec![
            Stmt::Block(block()),
            Stmt::VarDecl(var_decl()),
            Stmt::FnDecl(Box::new(FnDecl {
                loc,
                id: ident(),
                is_generator: false,
                params: vec![],
                body: block(),
            })),
            Stmt::Expr(ExprStmt { loc, expr: expr() }),
            Stmt::If(IfStmt {
                loc,
                test: expr(),
                consequent: empty(),
                alternate: None,
            }),
            Stmt::For(ForStmt {
                loc,
                init: None,
                test: None,
                update: None,
                body: empty(),
            }),
            Stmt::ForIn(ForInStmt {
                loc,
                left: ForInOfLeft::Pat(Pat::Ident(ident())),
                right: expr(),
                body: empty(),
            }),
            Stmt::ForOf(ForOfStmt {
                loc,
                left: ForInOfLeft::VarDecl(var_decl()),
                right: expr(),
                body: empty(),
            }),
            Stmt::While(WhileStmt {
                loc,
                test: expr(),
                body: empty(),
            }),
            Stmt::DoWhile(DoWhileStmt {
                loc,
                body: empty(),
                test: expr(),
            }),
            Stmt::Switch(SwitchStmt {
                loc,
                discriminant: expr(),
                cases: vec![SwitchCase {
                    loc,
                    test: None,
                    consequent: vec![],
                }],
            }),
            Stmt::Try(TryStmt {
                loc,
                block: block(),
                handler: Some(CatchClause {
                    loc,
                    param: Pat::Ident(ident()),
                    body: block(),
                }),
                finalizer: None,
            }),
            Stmt::Return(ReturnStmt {
                loc,
                argument: None,
            }),
            Stmt::Throw(ThrowStmt {
                loc,
                argument: expr(),
            }),
            Stmt::Break(BreakStmt { loc, label: None }),
            Stmt::Continue(ContinueStmt {
                loc,
                label: Some(ident()),
            }),
            Stmt::Labeled(LabeledStmt {
                loc,
                label: ident(),
                body: empty(),
            }),
            Stmt::Debugger(DebuggerStmt { loc }),
            Stmt::With(WithStmt {
                loc,
                object: expr(),
                body: empty(),
            }),
            Stmt::Empty(EmptyStmt { loc }),
        ];
        for s in &stmts {
            assert_eq!(s.loc(), loc);
        }
    }

    // ── Expressions ─────────────────────────────────────────────────────────

    #[test]
    fn test_expr_loc_all_variants() {
        let loc = dummy_loc();
        let ident = || Ident {
            loc,
            name: "x".into(),
        };
        let expr = || Box::new(Expr::Null(NullLit { loc }));
        let exprs: Vec<Expr> = vec![
            Expr::Null(NullLit { loc }),
            Expr::Bool(BoolLit { loc, value: true }),
            Expr::Num(NumLit {
                loc,
                value: 42.0,
                raw: "42".into(),
            }),
            Expr::Str(StringLit {
                loc,
                value: "s".into(),
            }),
            Expr::Regexp(RegExpLit {
                loc,
                pattern: "a+".into(),
                flags: "g".into(),
            }),
            Expr::Template(Box::new(TemplateLit {
                loc,
                quasis: vec![TemplateElement {
                    loc,
                    raw: "t".into(),
                    cooked: Some("t".into()),
                    tail: true,
                }],
                expressions: vec![],
            })),
            Expr::Ident(ident()),
            Expr::This(ThisExpr { loc }),
            Expr::Super(SuperExpr { loc }),
            Expr::Array(Box::new(ArrayExpr {
                loc,
                elements: vec![None, Some(Expr::Null(NullLit { loc }))],
            })),
            Expr::Object(Box::new(ObjectExpr {
                loc,
                properties: vec![ObjectProp::Prop(Box::new(Prop {
                    loc,
                    key: PropKey::Ident(ident()),
                    value: expr(),
                    kind: PropKind::Init,
                    is_computed: false,
                    shorthand: false,
                    is_method: false,
                }))],
            })),
            Expr::Unary(Box::new(UnaryExpr {
                loc,
                op: UnaryOp::Minus,
                prefix: true,
                argument: expr(),
            })),
            Expr::Update(Box::new(UpdateExpr {
                loc,
                op: UpdateOp::Increment,
                prefix: false,
                argument: expr(),
            })),
            Expr::Binary(Box::new(BinaryExpr {
                loc,
                op: BinaryOp::Add,
                left: expr(),
                right: expr(),
            })),
            Expr::Logical(Box::new(LogicalExpr {
                loc,
                op: LogicalOp::And,
                left: expr(),
                right: expr(),
            })),
            Expr::Conditional(Box::new(ConditionalExpr {
                loc,
                test: expr(),
                consequent: expr(),
                alternate: expr(),
            })),
            Expr::Assign(Box::new(AssignExpr {
                loc,
                op: AssignOp::Assign,
                left: Box::new(Expr::Ident(ident())),
                right: expr(),
            })),
            Expr::Sequence(Box::new(SequenceExpr {
                loc,
                expressions: vec![],
            })),
            Expr::Member(Box::new(MemberExpr {
                loc,
                object: expr(),
                property: MemberProp::Ident(ident()),
                is_computed: false,
            })),
            Expr::Call(Box::new(CallExpr {
                loc,
                callee: expr(),
                arguments: vec![],
            })),
            Expr::New(Box::new(NewExpr {
                loc,
                callee: expr(),
                arguments: None,
            })),
            Expr::MetaProp(MetaPropExpr {
                loc,
                meta: Ident {
                    loc,
                    name: "new".into(),
                },
                property: Ident {
                    loc,
                    name: "target".into(),
                },
            }),
            Expr::TaggedTemplate(Box::new(TaggedTemplateExpr {
                loc,
                tag: expr(),
                quasi: TemplateLit {
                    loc,
                    quasis: vec![],
                    expressions: vec![],
                },
            })),
            Expr::Spread(Box::new(SpreadElement {
                loc,
                argument: expr(),
            })),
        ];
        for e in &exprs {
            assert_eq!(e.loc(), loc);
        }
    }

    #[test]
    fn test_new_expr_distinguishes_absent_arguments() {
        let loc = dummy_loc();
        let callee = || Box::new(Expr::Ident(Ident {
            loc,
            name: "Foo".into(),
        }));
        let bare = NewExpr {
            loc,
            callee: callee(),
            arguments: None,
        };
        let called = NewExpr {
            loc,
            callee: callee(),
            arguments: Some(vec![]),
        };
        assert!(bare.arguments.is_none());
        assert_eq!(called.arguments.map(|args| args.len()), Some(0));
    }

    // ── Patterns ────────────────────────────────────────────────────────────

    #[test]
    fn test_pat_loc_all_variants() {
        let loc = dummy_loc();
        let ident = || Ident {
            loc,
            name: "x".into(),
        };
        let pats: Vec<Pat> = vec![
            Pat::Ident(ident()),
            Pat::Array(Box::new(ArrayPat {
                loc,
                elements: vec![None, Some(Pat::Ident(ident()))],
                rest: None,
            })),
            Pat::Object(Box::new(ObjectPat {
                loc,
                properties: vec![ObjectPatProp {
                    loc,
                    key: ident(),
                    value: Pat::Ident(ident()),
                    shorthand: true,
                }],
                rest: Some(RestElement {
                    loc,
                    argument: Box::new(Pat::Ident(ident())),
                }),
            })),
            Pat::Rest(Box::new(RestElement {
                loc,
                argument: Box::new(Pat::Ident(ident())),
            })),
            Pat::Assign(Box::new(AssignPat {
                loc,
                left: Box::new(Pat::Ident(ident())),
                right: Box::new(Expr::Num(NumLit {
                    loc,
                    value: 2.0,
                    raw: "2".into(),
                })),
            })),
        ];
        for p in &pats {
            assert_eq!(p.loc(), loc);
        }
    }

    #[test]
    fn test_template_quasi_expression_interleave() {
        let loc = dummy_loc();
        let quasi = |tail| TemplateElement {
            loc,
            raw: String::new(),
            cooked: Some(String::new()),
            tail,
        };
        let tpl = TemplateLit {
            loc,
            quasis: vec![quasi(false), quasi(true)],
            expressions: vec![Expr::Null(NullLit { loc })],
        };
        assert_eq!(tpl.quasis.len(), tpl.expressions.len() + 1);
        assert!(tpl.quasis.last().map(|q| q.tail).unwrap_or(false));
    }
}
