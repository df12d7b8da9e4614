//! Binding patterns: identifiers, array and object destructuring, default
//! values, and rest elements.

use crate::ast::{
    ArrayPat, AssignPat, Ident, ObjectPat, ObjectPatProp, Pat, RestElement, SourceLocation,
};
use crate::lexer::TokenKind;

use super::expr::SEQUENCE;
use super::Parser;

impl Parser<'_> {
    /// Parses a binding pattern. With `allow_default` set, a following
    /// `= expr` wraps the pattern in a default-value binding.
    pub(super) fn parse_binding_element(&mut self, allow_default: bool) -> Option<Pat> {
        let start = self.cur.span.start;
        let primary = self.parse_binding_primary()?;

        if allow_default && self.peek_token_is(TokenKind::Assign) {
            self.next_token();
            self.next_token();
            let right = self.parse_expression(SEQUENCE)?;
            return Some(Pat::Assign(Box::new(AssignPat {
                loc: SourceLocation::new(start, self.cur.span.end),
                left: Box::new(primary),
                right: Box::new(right),
            })));
        }
        Some(primary)
    }

    fn parse_binding_primary(&mut self) -> Option<Pat> {
        match self.cur.kind {
            TokenKind::Identifier => Some(Pat::Ident(Ident {
                loc: self.cur.span,
                name: self.cur.text.clone(),
            })),
            TokenKind::LBracket => self.parse_array_pattern(),
            TokenKind::LBrace => self.parse_object_pattern(),
            kind => {
                self.error(format!("unsupported binding pattern starting with {kind}"));
                None
            }
        }
    }

    fn parse_array_pattern(&mut self) -> Option<Pat> {
        let start = self.cur.span.start;
        let mut elements: Vec<Option<Pat>> = Vec::new();
        let mut rest = None;

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

                if self.cur_token_is(TokenKind::Ellipsis) {
                    let rest_start = self.cur.span.start;
                    self.next_token();
                    let argument = self.parse_binding_element(false)?;
                    rest = Some(RestElement {
                        loc: SourceLocation::new(rest_start, self.cur.span.end),
                        argument: Box::new(argument),
                    });
                    if !self.peek_token_is(TokenKind::RBracket) {
                        self.error("rest element must be last in array pattern");
                        return None;
                    }
                    self.next_token();
                    break;
                }

                elements.push(Some(self.parse_binding_element(true)?));

                if self.peek_token_is(TokenKind::Comma) {
                    self.next_token();
                    if self.peek_token_is(TokenKind::RBracket) {
                        // A trailing comma contributes one more elision.
                        elements.push(None);
                        self.next_token();
                        break;
                    }
                    self.next_token();
                } else {
                    self.next_token();
                }
            }
        }

        if !self.cur_token_is(TokenKind::RBracket) {
            self.error("unterminated array pattern");
            return None;
        }
        Some(Pat::Array(Box::new(ArrayPat {
            loc: SourceLocation::new(start, self.cur.span.end),
            elements,
            rest,
        })))
    }

    fn parse_object_pattern(&mut self) -> Option<Pat> {
        let start = self.cur.span.start;
        let mut properties = Vec::new();
        let mut rest = None;

        if self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
        } else {
            self.next_token();
            while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
                if self.cur_token_is(TokenKind::Ellipsis) {
                    let rest_start = self.cur.span.start;
                    self.next_token();
                    let argument = self.parse_binding_element(false)?;
                    rest = Some(RestElement {
                        loc: SourceLocation::new(rest_start, self.cur.span.end),
                        argument: Box::new(argument),
                    });
                    if !self.peek_token_is(TokenKind::RBrace) {
                        self.error("rest element must be last in object pattern");
                        return None;
                    }
                    self.next_token();
                    break;
                }

                properties.push(self.parse_object_pattern_property()?);

                if self.peek_token_is(TokenKind::Comma) {
                    self.next_token();
                    if self.peek_token_is(TokenKind::RBrace) {
                        self.next_token();
                        break;
                    }
                    self.next_token();
                } else {
                    self.next_token();
                }
            }
        }

        if !self.cur_token_is(TokenKind::RBrace) {
            self.error("unterminated object pattern");
            return None;
        }
        Some(Pat::Object(Box::new(ObjectPat {
            loc: SourceLocation::new(start, self.cur.span.end),
            properties,
            rest,
        })))
    }

    fn parse_object_pattern_property(&mut self) -> Option<ObjectPatProp> {
        match self.cur.kind {
            TokenKind::Identifier => {
                let start = self.cur.span.start;
                let key = Ident {
                    loc: self.cur.span,
                    name: self.cur.text.clone(),
                };

                let mut shorthand = true;
                let value = if self.peek_token_is(TokenKind::Colon) {
                    shorthand = false;
                    self.next_token();
                    self.next_token();
                    self.parse_binding_element(true)?
                } else if self.peek_token_is(TokenKind::Assign) {
                    self.next_token();
                    self.next_token();
                    let right = self.parse_expression(SEQUENCE)?;
                    Pat::Assign(Box::new(AssignPat {
                        loc: SourceLocation::new(start, self.cur.span.end),
                        left: Box::new(Pat::Ident(key.clone())),
                        right: Box::new(right),
                    }))
                } else {
                    Pat::Ident(key.clone())
                };

                Some(ObjectPatProp {
                    loc: SourceLocation::new(start, self.cur.span.end),
                    key,
                    value,
                    shorthand,
                })
            }
            kind => {
                self.error(format!(
                    "unsupported object pattern property starting with {kind}"
                ));
                None
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
