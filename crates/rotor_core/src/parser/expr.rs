//! Expression parsing: the precedence ladder plus every prefix and infix
//! rule of the Pratt core.

use crate::ast::{
    ArrayExpr, AssignExpr, AssignOp, BinaryExpr, BinaryOp, BoolLit, CallExpr, ConditionalExpr,
    Expr, Ident, LogicalExpr, LogicalOp, MemberExpr, MemberProp, MetaPropExpr, NewExpr, NullLit,
    NumLit, ObjectExpr, ObjectProp, Prop, PropKey, PropKind, RegExpLit, SequenceExpr,
    SourceLocation, SpreadElement, StringLit, SuperExpr, ThisExpr, UnaryExpr, UnaryOp, UpdateExpr,
    UpdateOp,
};
use crate::lexer::{Position, TokenKind};

use super::Parser;

// ─────────────────────────────────────────────────────────────────────────────
// Precedence ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Binding strength used by [`Parser::parse_expression`]; higher binds
/// tighter.
pub(super) type Precedence = u8;

pub(super) const LOWEST: Precedence = 0;
pub(super) const SEQUENCE: Precedence = 1;
const ASSIGNMENT: Precedence = 2;
const CONDITIONAL: Precedence = 3;
const LOGICAL_OR: Precedence = 4;
const LOGICAL_AND: Precedence = 5;
const BITWISE_OR: Precedence = 6;
const BITWISE_XOR: Precedence = 7;
const BITWISE_AND: Precedence = 8;
const EQUALITY: Precedence = 9;
const RELATIONAL: Precedence = 10;
const SHIFT: Precedence = 11;
const ADDITIVE: Precedence = 12;
const MULTIPLICATIVE: Precedence = 13;
const PREFIX: Precedence = 14;
const POSTFIX: Precedence = 15;
const CALL: Precedence = 16;

/// Precedence of `kind` when it appears in infix position.
///
/// Kinds that cannot continue an expression sit at [`LOWEST`], which the
/// climbing loop never enters. `Modulo` carries a precedence but has no
/// infix rule, so `a % b` stops after `a`.
fn token_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Comma => SEQUENCE,
        TokenKind::Assign
        | TokenKind::PlusAssign
        | TokenKind::MinusAssign
        | TokenKind::MultiplyAssign
        | TokenKind::DivideAssign
        | TokenKind::ModuloAssign
        | TokenKind::ShiftLeftAssign
        | TokenKind::ShiftRightAssign
        | TokenKind::UnsignedShiftAssign
        | TokenKind::BitwiseAndAssign
        | TokenKind::BitwiseOrAssign
        | TokenKind::BitwiseXorAssign => ASSIGNMENT,
        TokenKind::Question => CONDITIONAL,
        TokenKind::LogicalOr => LOGICAL_OR,
        TokenKind::LogicalAnd => LOGICAL_AND,
        TokenKind::BitwiseOr => BITWISE_OR,
        TokenKind::BitwiseXor => BITWISE_XOR,
        TokenKind::BitwiseAnd => BITWISE_AND,
        TokenKind::Equal
        | TokenKind::NotEqual
        | TokenKind::StrictEqual
        | TokenKind::StrictNotEqual => EQUALITY,
        TokenKind::LessThan
        | TokenKind::LessEqual
        | TokenKind::GreaterThan
        | TokenKind::GreaterEqual
        | TokenKind::In
        | TokenKind::Instanceof => RELATIONAL,
        TokenKind::ShiftLeft | TokenKind::ShiftRight | TokenKind::UnsignedShiftRight => SHIFT,
        TokenKind::Plus | TokenKind::Minus => ADDITIVE,
        TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo => MULTIPLICATIVE,
        TokenKind::Increment | TokenKind::Decrement => POSTFIX,
        TokenKind::LParen | TokenKind::LBracket | TokenKind::Dot => CALL,
        _ => LOWEST,
    }
}

/// Maps a token in infix position to its binary operator, if it has one.
fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Multiply => Some(BinaryOp::Mul),
        TokenKind::Divide => Some(BinaryOp::Div),
        TokenKind::Equal => Some(BinaryOp::Eq),
        TokenKind::NotEqual => Some(BinaryOp::NotEq),
        TokenKind::StrictEqual => Some(BinaryOp::StrictEq),
        TokenKind::StrictNotEqual => Some(BinaryOp::StrictNotEq),
        TokenKind::LessThan => Some(BinaryOp::Lt),
        TokenKind::LessEqual => Some(BinaryOp::LtEq),
        TokenKind::GreaterThan => Some(BinaryOp::Gt),
        TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
        TokenKind::ShiftLeft => Some(BinaryOp::Shl),
        TokenKind::ShiftRight => Some(BinaryOp::Shr),
        TokenKind::UnsignedShiftRight => Some(BinaryOp::UShr),
        TokenKind::BitwiseAnd => Some(BinaryOp::BitAnd),
        TokenKind::BitwiseOr => Some(BinaryOp::BitOr),
        TokenKind::BitwiseXor => Some(BinaryOp::BitXor),
        TokenKind::In => Some(BinaryOp::In),
        TokenKind::Instanceof => Some(BinaryOp::Instanceof),
        _ => None,
    }
}

/// Maps an assignment-operator token to its [`AssignOp`].
fn assign_op(kind: TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Assign => Some(AssignOp::Assign),
        TokenKind::PlusAssign => Some(AssignOp::AddAssign),
        TokenKind::MinusAssign => Some(AssignOp::SubAssign),
        TokenKind::MultiplyAssign => Some(AssignOp::MulAssign),
        TokenKind::DivideAssign => Some(AssignOp::DivAssign),
        TokenKind::ModuloAssign => Some(AssignOp::RemAssign),
        TokenKind::ShiftLeftAssign => Some(AssignOp::ShlAssign),
        TokenKind::ShiftRightAssign => Some(AssignOp::ShrAssign),
        TokenKind::UnsignedShiftAssign => Some(AssignOp::UShrAssign),
        TokenKind::BitwiseAndAssign => Some(AssignOp::BitAndAssign),
        TokenKind::BitwiseOrAssign => Some(AssignOp::BitOrAssign),
        TokenKind::BitwiseXorAssign => Some(AssignOp::BitXorAssign),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pratt core
// ─────────────────────────────────────────────────────────────────────────────

impl Parser<'_> {
    /// Parses one expression whose operators all bind tighter than `min`.
    ///
    /// A peeked semicolon always terminates the climb. A peeked token with
    /// no infix rule ends the expression without error; in particular `%`
    /// has a precedence but no rule, so its left operand is returned as-is.
    pub(super) fn parse_expression(&mut self, min: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon) && min < self.peek_precedence() {
            left = if let Some(op) = binary_op(self.peek.kind) {
                self.next_token();
                self.parse_binary_expression(left, op)?
            } else if let Some(op) = assign_op(self.peek.kind) {
                self.next_token();
                self.parse_assignment_expression(left, op)?
            } else {
                match self.peek.kind {
                    TokenKind::LogicalAnd => {
                        self.next_token();
                        self.parse_logical_expression(left, LogicalOp::And)?
                    }
                    TokenKind::LogicalOr => {
                        self.next_token();
                        self.parse_logical_expression(left, LogicalOp::Or)?
                    }
                    TokenKind::Question => {
                        self.next_token();
                        self.parse_conditional_expression(left)?
                    }
                    TokenKind::LParen => {
                        self.next_token();
                        self.parse_call_expression(left)?
                    }
                    TokenKind::Dot => {
                        self.next_token();
                        self.parse_member_expression(left)?
                    }
                    TokenKind::LBracket => {
                        self.next_token();
                        self.parse_computed_member_expression(left)?
                    }
                    TokenKind::Increment => {
                        self.next_token();
                        self.parse_postfix_expression(left, UpdateOp::Increment)?
                    }
                    TokenKind::Decrement => {
                        self.next_token();
                        self.parse_postfix_expression(left, UpdateOp::Decrement)?
                    }
                    TokenKind::Comma => {
                        self.next_token();
                        self.parse_sequence_expression(left)?
                    }
                    _ => return Some(left),
                }
            };
        }

        Some(left)
    }

    fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        token_precedence(self.cur.kind)
    }

    /// Dispatches on the current token's prefix rule.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur.kind {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Number => Some(self.parse_number_literal()),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::TrueLiteral | TokenKind::FalseLiteral => Some(self.parse_boolean_literal()),
            TokenKind::NullLiteral => Some(self.parse_null_literal()),
            TokenKind::Regex => Some(self.parse_regexp_literal()),
            TokenKind::This => Some(self.parse_this_expression()),
            TokenKind::Super => Some(self.parse_super_expression()),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::LogicalNot => self.parse_unary_expression(UnaryOp::Not),
            TokenKind::Minus => self.parse_unary_expression(UnaryOp::Minus),
            TokenKind::Plus => self.parse_unary_expression(UnaryOp::Plus),
            TokenKind::Typeof => self.parse_unary_expression(UnaryOp::Typeof),
            TokenKind::Void => self.parse_unary_expression(UnaryOp::Void),
            TokenKind::Delete => self.parse_unary_expression(UnaryOp::Delete),
            TokenKind::Increment => self.parse_update_prefix(UpdateOp::Increment),
            TokenKind::Decrement => self.parse_update_prefix(UpdateOp::Decrement),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_object_literal(),
            TokenKind::New => self.parse_new_expression(),
            kind => {
                self.error(format!("no prefix parse function for {kind}"));
                None
            }
        }
    }

    // ── prefix rules ─────────────────────────────────────────────────────────

    fn parse_identifier(&self) -> Expr {
        Expr::Ident(Ident {
            loc: self.cur.span,
            name: self.cur.text.clone(),
        })
    }

    fn parse_number_literal(&self) -> Expr {
        let raw = self.cur.text.clone();
        Expr::Num(NumLit {
            loc: self.cur.span,
            value: numeric_value(&raw),
            raw,
        })
    }

    fn parse_string_literal(&self) -> Expr {
        Expr::Str(StringLit {
            loc: self.cur.span,
            value: decode_string_literal(&self.cur.text),
        })
    }

    fn parse_boolean_literal(&self) -> Expr {
        Expr::Bool(BoolLit {
            loc: self.cur.span,
            value: self.cur.kind == TokenKind::TrueLiteral,
        })
    }

    fn parse_null_literal(&self) -> Expr {
        Expr::Null(NullLit { loc: self.cur.span })
    }

    fn parse_this_expression(&self) -> Expr {
        Expr::This(ThisExpr { loc: self.cur.span })
    }

    fn parse_super_expression(&self) -> Expr {
        Expr::Super(SuperExpr { loc: self.cur.span })
    }

    fn parse_regexp_literal(&self) -> Expr {
        let (pattern, flags) = split_regexp_literal(&self.cur.text);
        Expr::Regexp(RegExpLit {
            loc: self.cur.span,
            pattern,
            flags,
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        let start = self.cur.span.start;
        self.next_token();
        let mut expr = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        // The parens become part of the inner expression's extent.
        *expr.loc_mut() = SourceLocation::new(start, self.cur.span.end);
        Some(expr)
    }

    fn parse_unary_expression(&mut self, op: UnaryOp) -> Option<Expr> {
        let start = self.cur.span.start;
        self.next_token();
        let argument = self.parse_expression(PREFIX)?;
        let loc = SourceLocation::new(start, argument.loc().end);
        Some(Expr::Unary(Box::new(UnaryExpr {
            loc,
            op,
            prefix: true,
            argument: Box::new(argument),
        })))
    }

    fn parse_update_prefix(&mut self, op: UpdateOp) -> Option<Expr> {
        let start = self.cur.span.start;
        self.next_token();
        let argument = self.parse_expression(PREFIX)?;
        if !is_assignable(&argument) {
            self.error("invalid update target");
            return None;
        }
        let loc = SourceLocation::new(start, argument.loc().end);
        Some(Expr::Update(Box::new(UpdateExpr {
            loc,
            op,
            prefix: true,
            argument: Box::new(argument),
        })))
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let start = self.cur.span.start;
        let mut elements: Vec<Option<Expr>> = Vec::new();

        if self.peek_token_is(TokenKind::RBracket) {
            self.next_token();
        } else {
            self.next_token();
            while !self.cur_token_is(TokenKind::RBracket) && !self.cur_token_is(TokenKind::Eof) {
                // A bare comma is an elision.
                if self.cur_token_is(TokenKind::Comma) {
                    elements.push(None);
                    self.next_token();
                    continue;
                }

                let element = if self.cur_token_is(TokenKind::Ellipsis) {
                    let spread_start = self.cur.span.start;
                    self.next_token();
                    let argument = self.parse_expression(SEQUENCE)?;
                    let loc = SourceLocation::new(spread_start, self.cur.span.end);
                    Expr::Spread(Box::new(SpreadElement {
                        loc,
                        argument: Box::new(argument),
                    }))
                } else {
                    self.parse_expression(SEQUENCE)?
                };
                elements.push(Some(element));

                if self.peek_token_is(TokenKind::Comma) {
                    self.next_token();
                    if self.peek_token_is(TokenKind::RBracket) {
                        // A trailing comma contributes one more elision.
                        elements.push(None);
                        self.next_token();
                        break;
                    }
                    self.next_token();
                    continue;
                }
                self.next_token();
            }

            if !self.cur_token_is(TokenKind::RBracket) {
                self.error("unterminated array literal");
                return None;
            }
        }

        let loc = SourceLocation::new(start, self.cur.span.end);
        Some(Expr::Array(Box::new(ArrayExpr { loc, elements })))
    }

    fn parse_object_literal(&mut self) -> Option<Expr> {
        let start = self.cur.span.start;
        let mut properties = Vec::new();

        if self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
        } else {
            self.next_token();
            while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
                let prop = if self.cur_token_is(TokenKind::Ellipsis) {
                    let spread_start = self.cur.span.start;
                    self.next_token();
                    let argument = self.parse_expression(SEQUENCE)?;
                    let loc = SourceLocation::new(spread_start, self.cur.span.end);
                    ObjectProp::Spread(SpreadElement {
                        loc,
                        argument: Box::new(argument),
                    })
                } else {
                    ObjectProp::Prop(Box::new(self.parse_object_property()?))
                };
                properties.push(prop);

                if self.peek_token_is(TokenKind::Comma) {
                    self.next_token();
                    if self.peek_token_is(TokenKind::RBrace) {
                        self.next_token();
                        break;
                    }
                    self.next_token();
                    continue;
                }
                self.next_token();
            }

            if !self.cur_token_is(TokenKind::RBrace) {
                self.error("unterminated object literal");
                return None;
            }
        }

        let loc = SourceLocation::new(start, self.cur.span.end);
        Some(Expr::Object(Box::new(ObjectExpr { loc, properties })))
    }

    fn parse_object_property(&mut self) -> Option<Prop> {
        let start = self.cur.span.start;
        let mut computed = false;

        let key = match self.cur.kind {
            TokenKind::Identifier => PropKey::Ident(Ident {
                loc: self.cur.span,
                name: self.cur.text.clone(),
            }),
            TokenKind::String => PropKey::Str(StringLit {
                loc: self.cur.span,
                value: decode_string_literal(&self.cur.text),
            }),
            TokenKind::Number => {
                let raw = self.cur.text.clone();
                PropKey::Num(NumLit {
                    loc: self.cur.span,
                    value: numeric_value(&raw),
                    raw,
                })
            }
            TokenKind::LBracket => {
                computed = true;
                self.next_token();
                let key_expr = self.parse_expression(LOWEST)?;
                if !self.expect_peek(TokenKind::RBracket) {
                    return None;
                }
                PropKey::Computed(Box::new(key_expr))
            }
            kind => {
                self.error(format!("unexpected token {kind} in object literal property"));
                return None;
            }
        };

        // `{ a }` shorthand: the identifier is both key and value.
        if !computed {
            if let PropKey::Ident(id) = &key {
                if self.peek_token_is(TokenKind::Comma) || self.peek_token_is(TokenKind::RBrace) {
                    let value = Expr::Ident(id.clone());
                    let loc = SourceLocation::new(start, self.cur.span.end);
                    return Some(Prop {
                        loc,
                        key,
                        value: Box::new(value),
                        kind: PropKind::Init,
                        is_computed: false,
                        shorthand: true,
                        is_method: false,
                    });
                }
            }
        }

        if !self.expect_peek(TokenKind::Colon) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(SEQUENCE)?;
        let loc = SourceLocation::new(start, self.cur.span.end);
        Some(Prop {
            loc,
            key,
            value: Box::new(value),
            kind: PropKind::Init,
            is_computed: computed,
            shorthand: false,
            is_method: false,
        })
    }

    fn parse_new_expression(&mut self) -> Option<Expr> {
        let new_span = self.cur.span;
        self.next_token();

        // `new.target` is the only meta property.
        if self.cur_token_is(TokenKind::Dot) {
            if !self.expect_peek(TokenKind::Identifier) {
                return None;
            }
            if self.cur.text != "target" {
                self.error("expected target after new");
                return None;
            }
            let property = Ident {
                loc: self.cur.span,
                name: self.cur.text.clone(),
            };
            let loc = SourceLocation::new(new_span.start, property.loc.end);
            return Some(Expr::MetaProp(MetaPropExpr {
                loc,
                meta: Ident {
                    loc: new_span,
                    name: "new".to_string(),
                },
                property,
            }));
        }

        let expr = self.parse_expression(POSTFIX)?;
        Some(wrap_new_expression(expr, new_span.start))
    }

    // ── infix rules ──────────────────────────────────────────────────────────

    fn parse_binary_expression(&mut self, left: Expr, op: BinaryOp) -> Option<Expr> {
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        let loc = SourceLocation::new(left.loc().start, right.loc().end);
        Some(Expr::Binary(Box::new(BinaryExpr {
            loc,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })))
    }

    fn parse_logical_expression(&mut self, left: Expr, op: LogicalOp) -> Option<Expr> {
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        let loc = SourceLocation::new(left.loc().start, right.loc().end);
        Some(Expr::Logical(Box::new(LogicalExpr {
            loc,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })))
    }

    fn parse_assignment_expression(&mut self, left: Expr, op: AssignOp) -> Option<Expr> {
        if !is_assignable(&left) {
            self.error("invalid assignment target");
            return None;
        }
        let precedence = self.cur_precedence();
        self.next_token();
        // Right-associative: descend one level below our own precedence.
        let right = self.parse_expression(precedence - 1)?;
        let loc = SourceLocation::new(left.loc().start, right.loc().end);
        Some(Expr::Assign(Box::new(AssignExpr {
            loc,
            op,
            left: Box::new(left),
            right: Box::new(right),
        })))
    }

    fn parse_conditional_expression(&mut self, test: Expr) -> Option<Expr> {
        self.next_token();
        let consequent = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::Colon) {
            return None;
        }
        self.next_token();
        let alternate = self.parse_expression(CONDITIONAL - 1)?;
        let loc = SourceLocation::new(test.loc().start, alternate.loc().end);
        Some(Expr::Conditional(Box::new(ConditionalExpr {
            loc,
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })))
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let mut arguments = Vec::new();
        self.next_token();
        if !self.cur_token_is(TokenKind::RParen) {
            loop {
                let argument = self.parse_expression(SEQUENCE)?;
                arguments.push(argument);
                if !self.peek_token_is(TokenKind::Comma) {
                    break;
                }
                self.next_token();
                self.next_token();
            }
            if !self.expect_peek(TokenKind::RParen) {
                self.error("unterminated call expression");
                return None;
            }
        }
        let loc = SourceLocation::new(callee.loc().start, self.cur.span.end);
        Some(Expr::Call(Box::new(CallExpr {
            loc,
            callee: Box::new(callee),
            arguments,
        })))
    }

    fn parse_member_expression(&mut self, object: Expr) -> Option<Expr> {
        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let property = Ident {
            loc: self.cur.span,
            name: self.cur.text.clone(),
        };
        let loc = SourceLocation::new(object.loc().start, property.loc.end);
        Some(Expr::Member(Box::new(MemberExpr {
            loc,
            object: Box::new(object),
            property: MemberProp::Ident(property),
            is_computed: false,
        })))
    }

    fn parse_computed_member_expression(&mut self, object: Expr) -> Option<Expr> {
        self.next_token();
        let property = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RBracket) {
            self.error("unterminated computed member expression");
            return None;
        }
        let loc = SourceLocation::new(object.loc().start, self.cur.span.end);
        Some(Expr::Member(Box::new(MemberExpr {
            loc,
            object: Box::new(object),
            property: MemberProp::Computed(Box::new(property)),
            is_computed: true,
        })))
    }

    fn parse_postfix_expression(&mut self, left: Expr, op: UpdateOp) -> Option<Expr> {
        if !is_assignable(&left) {
            self.error("invalid update target");
            return None;
        }
        let loc = SourceLocation::new(left.loc().start, self.cur.span.end);
        Some(Expr::Update(Box::new(UpdateExpr {
            loc,
            op,
            prefix: false,
            argument: Box::new(left),
        })))
    }

    fn parse_sequence_expression(&mut self, first: Expr) -> Option<Expr> {
        let start = first.loc().start;
        let mut end = first.loc().end;
        let mut expressions = vec![first];
        loop {
            self.next_token();
            let expr = self.parse_expression(SEQUENCE - 1)?;
            end = expr.loc().end;
            // A nested sequence on the right is folded into this one.
            match expr {
                Expr::Sequence(seq) => expressions.extend(seq.expressions),
                other => expressions.push(other),
            }
            if !self.peek_token_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }
        Some(Expr::Sequence(Box::new(SequenceExpr {
            loc: SourceLocation::new(start, end),
            expressions,
        })))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// `new` expression rewriting
// ─────────────────────────────────────────────────────────────────────────────

/// Attaches a `new` keyword to the expression parsed after it.
///
/// The operand is parsed at just below call precedence, so it arrives as a
/// full call/member chain. `new` claims the innermost call not already
/// claimed by a deeper call; layers above it are rebuilt around the
/// resulting [`NewExpr`]. A chain without any call becomes an argument-less
/// `new`, and an inner `new` absorbs the keyword by span-widening alone.
fn wrap_new_expression(expr: Expr, new_start: Position) -> Expr {
    match expr {
        Expr::Call(call) => {
            let CallExpr {
                mut loc,
                callee,
                arguments,
            } = *call;
            if contains_call(&callee) {
                let callee = Box::new(wrap_new_expression(*callee, new_start));
                extend_start(&mut loc, new_start);
                Expr::Call(Box::new(CallExpr {
                    loc,
                    callee,
                    arguments,
                }))
            } else {
                let loc = SourceLocation::new(new_start, loc.end);
                Expr::New(Box::new(NewExpr {
                    loc,
                    callee,
                    arguments: Some(arguments),
                }))
            }
        }
        Expr::Member(member) => {
            let MemberExpr {
                mut loc,
                object,
                property,
                is_computed,
            } = *member;
            if contains_call(&object) {
                let object = Box::new(wrap_new_expression(*object, new_start));
                extend_start(&mut loc, new_start);
                Expr::Member(Box::new(MemberExpr {
                    loc,
                    object,
                    property,
                    is_computed,
                }))
            } else {
                let end = loc.end;
                let callee = Expr::Member(Box::new(MemberExpr {
                    loc,
                    object,
                    property,
                    is_computed,
                }));
                Expr::New(Box::new(NewExpr {
                    loc: SourceLocation::new(new_start, end),
                    callee: Box::new(callee),
                    arguments: None,
                }))
            }
        }
        Expr::New(mut inner) => {
            extend_start(&mut inner.loc, new_start);
            Expr::New(inner)
        }
        other => {
            let loc = SourceLocation::new(new_start, other.loc().end);
            Expr::New(Box::new(NewExpr {
                loc,
                callee: Box::new(other),
                arguments: None,
            }))
        }
    }
}

/// True when the callee chain bottoms out in a call expression.
fn contains_call(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) => true,
        Expr::Member(member) => contains_call(&member.object),
        _ => false,
    }
}

fn extend_start(loc: &mut SourceLocation, start: Position) {
    if loc.start.offset > start.offset {
        loc.start = start;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Only identifiers and member expressions may be assignment or update
/// targets.
fn is_assignable(expr: &Expr) -> bool {
    matches!(expr, Expr::Ident(_) | Expr::Member(_))
}

/// Parse the raw text of a numeric literal to an `f64`.
///
/// Returns [`f64::NAN`] if the raw text cannot be parsed (should not happen
/// for well-formed input).
fn numeric_value(raw: &str) -> f64 {
    if raw.starts_with("0x") || raw.starts_with("0X") {
        i64::from_str_radix(&raw[2..], 16)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN)
    } else if raw.starts_with("0o") || raw.starts_with("0O") {
        i64::from_str_radix(&raw[2..], 8)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN)
    } else if raw.starts_with("0b") || raw.starts_with("0B") {
        i64::from_str_radix(&raw[2..], 2)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN)
    } else {
        raw.parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// Decodes a string token's text: strips the quotes and processes escape
/// sequences.
///
/// Recognized escapes are `\n \t \r \b \f \v \0`, two-digit `\xNN`, and
/// four-digit `\uNNNN`; a backslash before a line terminator is a line
/// continuation and produces nothing. Any other escaped character is kept
/// verbatim, which also covers `\\`, `\'`, `` \` `` and `\"`.
fn decode_string_literal(raw: &str) -> String {
    let inner = if raw.len() >= 2 {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('b') => value.push('\u{0008}'),
            Some('f') => value.push('\u{000c}'),
            Some('v') => value.push('\u{000b}'),
            Some('0') => value.push('\0'),
            Some('x') => match take_hex(&mut chars, 2) {
                Some(code) => {
                    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
                }
                None => value.push('x'),
            },
            Some('u') => match take_hex(&mut chars, 4) {
                Some(code) => {
                    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
                }
                None => value.push('u'),
            },
            Some('\n') => {}
            Some(other) => value.push(other),
            None => value.push('\\'),
        }
    }
    value
}

/// Consumes exactly `len` hex digits, or leaves the iterator untouched.
fn take_hex(chars: &mut std::str::Chars<'_>, len: usize) -> Option<u32> {
    let mut probe = chars.clone();
    let mut code = 0u32;
    for _ in 0..len {
        code = code * 16 + probe.next()?.to_digit(16)?;
    }
    *chars = probe;
    Some(code)
}

/// Splits a regex token's text into pattern and flags at the last `/`.
///
/// Malformed text (shorter than `/x/` or missing the closing slash) yields
/// empty pattern and flags.
fn split_regexp_literal(text: &str) -> (String, String) {
    if text.len() >= 2 && text.starts_with('/') {
        if let Some(last) = text.rfind('/') {
            if last > 0 {
                return (text[1..last].to_string(), text[last + 1..].to_string());
            }
        }
    }
    (String::new(), String::new())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
