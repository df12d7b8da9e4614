//! Statement parsing: declarations, control flow, blocks, and functions.

use crate::ast::{
    BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
    ExprStmt, FnDecl, ForInit, ForStmt, Ident, IfStmt, LabeledStmt, Pat, RestElement, ReturnStmt,
    SourceLocation, Stmt, SwitchCase, SwitchStmt, ThrowStmt, TryStmt, VarDecl, VarDeclarator,
    VarKind, WhileStmt, WithStmt,
};
use crate::lexer::TokenKind;

use super::expr::LOWEST;
use super::Parser;

impl Parser<'_> {
    /// Parses the statement starting at the current token.
    ///
    /// Returns `None` when the statement is malformed; the caller decides
    /// whether to recover (the program loop and block bodies skip it, most
    /// nested positions give up on their own node too).
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur.kind {
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.parse_variable_statement().map(Stmt::VarDecl)
            }
            TokenKind::Semicolon => Some(self.parse_empty_statement()),
            TokenKind::LBrace => self.parse_block_statement().map(Stmt::Block),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Do => self.parse_do_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Break => Some(self.parse_break_statement()),
            TokenKind::Continue => Some(self.parse_continue_statement()),
            TokenKind::Throw => self.parse_throw_statement(),
            TokenKind::Debugger => Some(self.parse_debugger_statement()),
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::With => self.parse_with_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::Identifier if self.peek_token_is(TokenKind::Colon) => {
                self.parse_labeled_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_empty_statement(&self) -> Stmt {
        Stmt::Empty(EmptyStmt { loc: self.cur.span })
    }

    pub(super) fn parse_block_statement(&mut self) -> Option<BlockStmt> {
        let start = self.cur.span.start;
        self.next_token();

        let mut body = Vec::new();
        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            // Malformed statements are dropped; the block keeps going.
            if let Some(stmt) = self.parse_statement() {
                body.push(stmt);
            }
            self.next_token();
        }

        if !self.cur_token_is(TokenKind::RBrace) {
            self.error("unterminated block statement");
            return None;
        }
        Some(BlockStmt {
            loc: SourceLocation::new(start, self.cur.span.end),
            body,
        })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        // No argument if the next token is a semicolon, closing brace, or
        // end of input.
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            return Some(Stmt::Return(ReturnStmt {
                loc: SourceLocation::new(start, self.cur.span.end),
                argument: None,
            }));
        }
        if self.peek_token_is(TokenKind::RBrace) || self.peek_token_is(TokenKind::Eof) {
            return Some(Stmt::Return(ReturnStmt {
                loc: SourceLocation::new(start, self.cur.span.end),
                argument: None,
            }));
        }

        self.next_token();
        let argument = self.parse_expression(LOWEST)?;

        let mut end = argument.loc().end;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Some(Stmt::Return(ReturnStmt {
            loc: SourceLocation::new(start, end),
            argument: Some(Box::new(argument)),
        }))
    }

    fn parse_if_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let test = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        self.next_token();
        let consequent = self.parse_statement()?;

        let mut end = consequent.loc().end;
        let mut alternate = None;
        if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.next_token();
            let stmt = self.parse_statement()?;
            end = stmt.loc().end;
            alternate = Some(Box::new(stmt));
        }

        Some(Stmt::If(IfStmt {
            loc: SourceLocation::new(start, end),
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
        }))
    }

    fn parse_while_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let test = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        self.next_token();
        let body = self.parse_statement()?;

        Some(Stmt::While(WhileStmt {
            loc: SourceLocation::new(start, body.loc().end),
            test: Box::new(test),
            body: Box::new(body),
        }))
    }

    fn parse_do_while_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        self.next_token();
        let body = self.parse_statement()?;

        if !self.expect_peek(TokenKind::While) {
            return None;
        }
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let test = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        let mut end = self.cur.span.end;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Some(Stmt::DoWhile(DoWhileStmt {
            loc: SourceLocation::new(start, end),
            body: Box::new(body),
            test: Box::new(test),
        }))
    }

    fn parse_break_statement(&mut self) -> Stmt {
        let start = self.cur.span.start;
        let mut end = self.cur.span.end;

        // The label must sit on the same line as the keyword.
        let mut label = None;
        if self.peek_token_is(TokenKind::Identifier) && !self.peek.had_line_terminator_before {
            self.next_token();
            end = self.cur.span.end;
            label = Some(Ident {
                loc: self.cur.span,
                name: self.cur.text.clone(),
            });
        }

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Stmt::Break(BreakStmt {
            loc: SourceLocation::new(start, end),
            label,
        })
    }

    fn parse_continue_statement(&mut self) -> Stmt {
        let start = self.cur.span.start;
        let mut end = self.cur.span.end;

        let mut label = None;
        if self.peek_token_is(TokenKind::Identifier) && !self.peek.had_line_terminator_before {
            self.next_token();
            end = self.cur.span.end;
            label = Some(Ident {
                loc: self.cur.span,
                name: self.cur.text.clone(),
            });
        }

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Stmt::Continue(ContinueStmt {
            loc: SourceLocation::new(start, end),
            label,
        })
    }

    fn parse_throw_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if self.peek.had_line_terminator_before {
            self.error("illegal newline after throw");
            return None;
        }

        self.next_token();
        let argument = self.parse_expression(LOWEST)?;

        let mut end = argument.loc().end;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Some(Stmt::Throw(ThrowStmt {
            loc: SourceLocation::new(start, end),
            argument: Box::new(argument),
        }))
    }

    fn parse_debugger_statement(&mut self) -> Stmt {
        let start = self.cur.span.start;
        let mut end = self.cur.span.end;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Stmt::Debugger(DebuggerStmt {
            loc: SourceLocation::new(start, end),
        })
    }

    fn parse_switch_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let discriminant = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        self.next_token();

        let mut cases = Vec::new();
        let mut seen_default = false;

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            let case_start = self.cur.span.start;

            let test = match self.cur.kind {
                TokenKind::Case => {
                    self.next_token();
                    let test = self.parse_expression(LOWEST)?;
                    if !self.expect_peek(TokenKind::Colon) {
                        return None;
                    }
                    Some(test)
                }
                TokenKind::Default => {
                    if seen_default {
                        self.error("multiple default clauses in switch");
                        return None;
                    }
                    seen_default = true;
                    if !self.expect_peek(TokenKind::Colon) {
                        return None;
                    }
                    None
                }
                _ => {
                    self.error("expected case or default clause");
                    return None;
                }
            };

            // The clause ends at the colon until statements extend it.
            let mut end = self.cur.span.end;
            self.next_token();

            let mut consequent = Vec::new();
            while !self.cur_token_is(TokenKind::Case)
                && !self.cur_token_is(TokenKind::Default)
                && !self.cur_token_is(TokenKind::RBrace)
                && !self.cur_token_is(TokenKind::Eof)
            {
                let stmt = self.parse_statement()?;
                end = stmt.loc().end;
                consequent.push(stmt);
                self.next_token();
            }

            cases.push(SwitchCase {
                loc: SourceLocation::new(case_start, end),
                test,
                consequent,
            });
        }

        if !self.cur_token_is(TokenKind::RBrace) {
            self.error("unterminated switch statement");
            return None;
        }
        Some(Stmt::Switch(SwitchStmt {
            loc: SourceLocation::new(start, self.cur.span.end),
            discriminant: Box::new(discriminant),
            cases,
        }))
    }

    fn parse_with_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let object = self.parse_expression(LOWEST)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        self.next_token();
        let body = self.parse_statement()?;

        Some(Stmt::With(WithStmt {
            loc: SourceLocation::new(start, body.loc().end),
            object: Box::new(object),
            body: Box::new(body),
        }))
    }

    fn parse_labeled_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;
        let label = Ident {
            loc: self.cur.span,
            name: self.cur.text.clone(),
        };

        if !self.expect_peek(TokenKind::Colon) {
            return None;
        }

        self.next_token();
        let body = self.parse_statement()?;

        Some(Stmt::Labeled(LabeledStmt {
            loc: SourceLocation::new(start, body.loc().end),
            label,
            body: Box::new(body),
        }))
    }

    fn parse_try_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let block = self.parse_block_statement()?;
        let mut end = self.cur.span.end;

        let mut handler = None;
        if self.peek_token_is(TokenKind::Catch) {
            self.next_token();
            handler = Some(self.parse_catch_clause()?);
            end = self.cur.span.end;
        }

        let mut finalizer = None;
        if self.peek_token_is(TokenKind::Finally) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            finalizer = Some(self.parse_block_statement()?);
            end = self.cur.span.end;
        }

        if handler.is_none() && finalizer.is_none() {
            self.error("try statement requires catch or finally");
            return None;
        }

        Some(Stmt::Try(TryStmt {
            loc: SourceLocation::new(start, end),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> Option<CatchClause> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let param = self.parse_binding_element(false)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(CatchClause {
            loc: SourceLocation::new(start, self.cur.span.end),
            param,
            body,
        })
    }

    fn parse_function_declaration(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        let mut is_generator = false;
        if self.peek_token_is(TokenKind::Multiply) {
            self.next_token();
            is_generator = true;
        }

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let id = Ident {
            loc: self.cur.span,
            name: self.cur.text.clone(),
        };

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Stmt::FnDecl(Box::new(FnDecl {
            loc: SourceLocation::new(start, self.cur.span.end),
            id,
            is_generator,
            params,
            body,
        })))
    }

    /// Parses a parenthesized parameter list. The current token is the
    /// opening paren on entry and the closing paren on success.
    fn parse_function_params(&mut self) -> Option<Vec<Pat>> {
        let mut params = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(params);
        }

        self.next_token();
        let mut rest_seen = false;
        while !self.cur_token_is(TokenKind::RParen) && !self.cur_token_is(TokenKind::Eof) {
            if rest_seen {
                self.error("parameters not allowed after rest element");
                return None;
            }

            if self.cur_token_is(TokenKind::Ellipsis) {
                let rest_start = self.cur.span.start;
                self.next_token();
                let argument = self.parse_binding_element(false)?;
                params.push(Pat::Rest(Box::new(RestElement {
                    loc: SourceLocation::new(rest_start, self.cur.span.end),
                    argument: Box::new(argument),
                })));
                rest_seen = true;
                if !self.expect_peek(TokenKind::RParen) {
                    return None;
                }
                break;
            }

            params.push(self.parse_binding_element(true)?);

            if self.peek_token_is(TokenKind::Comma) {
                self.next_token();
                if self.peek_token_is(TokenKind::RParen) {
                    self.error("trailing comma without parameter");
                    return None;
                }
                self.next_token();
                continue;
            }
            if self.peek_token_is(TokenKind::RParen) {
                self.next_token();
                break;
            }
            self.error("unexpected token in parameter list");
            return None;
        }

        Some(params)
    }

    fn parse_for_statement(&mut self) -> Option<Stmt> {
        let start = self.cur.span.start;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();

        let mut init = None;
        if !self.cur_token_is(TokenKind::Semicolon) {
            init = Some(match self.cur.kind {
                TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                    // The declaration consumes its own trailing semicolon.
                    ForInit::VarDecl(self.parse_variable_statement()?)
                }
                _ => {
                    let expr = self.parse_expression(LOWEST)?;
                    if !self.peek_token_is(TokenKind::Semicolon) {
                        self.error("expected semicolon after for-loop initializer");
                        return None;
                    }
                    ForInit::Expr(Box::new(expr))
                }
            });
        }
        if !self.cur_token_is(TokenKind::Semicolon) && !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }
        self.next_token();

        let mut test = None;
        if !self.cur_token_is(TokenKind::Semicolon) {
            test = Some(Box::new(self.parse_expression(LOWEST)?));
        }
        if !self.cur_token_is(TokenKind::Semicolon) && !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }
        self.next_token();

        let mut update = None;
        if !self.cur_token_is(TokenKind::RParen) {
            update = Some(Box::new(self.parse_expression(LOWEST)?));
            if !self.expect_peek(TokenKind::RParen) {
                return None;
            }
        }
        if !self.cur_token_is(TokenKind::RParen) {
            self.error("unterminated for-loop clause");
            return None;
        }

        self.next_token();
        let body = self.parse_statement()?;

        Some(Stmt::For(ForStmt {
            loc: SourceLocation::new(start, body.loc().end),
            init,
            test,
            update,
            body: Box::new(body),
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(LOWEST)?;

        // The statement's extent is the expression's; a trailing semicolon
        // is consumed but not included.
        let stmt = ExprStmt {
            loc: expr.loc(),
            expr: Box::new(expr),
        };
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Stmt::Expr(stmt))
    }

    /// Parses the declarators of a `var`/`let`/`const` statement up to and
    /// including an optional trailing semicolon.
    pub(super) fn parse_variable_statement(&mut self) -> Option<VarDecl> {
        let kind = match self.cur.kind {
            TokenKind::Const => VarKind::Const,
            TokenKind::Let => VarKind::Let,
            _ => VarKind::Var,
        };
        let start = self.cur.span.start;
        self.next_token();

        let mut declarators = Vec::new();
        loop {
            if self.cur_token_is(TokenKind::Semicolon) {
                self.error("missing binding in variable declaration");
                return None;
            }

            declarators.push(self.parse_variable_declarator()?);

            if !self.peek_token_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
            self.next_token();
        }

        let mut end = self.cur.span.end;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            end = self.cur.span.end;
        }
        Some(VarDecl {
            loc: SourceLocation::new(start, end),
            kind,
            declarators,
        })
    }

    fn parse_variable_declarator(&mut self) -> Option<VarDeclarator> {
        let start = self.cur.span.start;

        let id = self.parse_binding_element(false)?;

        let mut init = None;
        if self.peek_token_is(TokenKind::Assign) {
            self.next_token();
            self.next_token();
            init = Some(Box::new(self.parse_expression(LOWEST)?));
        }

        Some(VarDeclarator {
            loc: SourceLocation::new(start, self.cur.span.end),
            id,
            init,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::Parser;
    use crate::ast::{Expr, ForInit, Pat, Program, Stmt, VarKind};
    use crate::error::ErrorList;

    fn parse(src: &str) -> Program {
        let mut parser = Parser::new(src);
        match parser.parse_program() {
            Ok(program) => program,
            Err(errors) => panic!("unexpected parse errors for {src:?}: {errors}"),
        }
    }

    fn parse_err(src: &str) -> ErrorList {
        let mut parser = Parser::new(src);
        match parser.parse_program() {
            Ok(program) => panic!("expected parse errors for {src:?}, got {program:?}"),
            Err(errors) => errors,
        }
    }

    fn messages(errors: &ErrorList) -> Vec<&str> {
        errors.errors().iter().map(|e| e.message()).collect()
    }

    /// Parses a source expected to hold exactly one statement.
    fn stmt(src: &str) -> Stmt {
        let program = parse(src);
        assert_eq!(program.body.len(), 1, "one statement expected for {src:?}");
        program.body.into_iter().next().unwrap()
    }

    #[test]
    fn test_variable_statements() {
        match stmt("let x = 5;") {
            Stmt::VarDecl(decl) => {
                assert_eq!(decl.kind, VarKind::Let);
                assert_eq!(decl.declarators.len(), 1);
                let d = &decl.declarators[0];
                assert!(matches!(d.id, Pat::Ident(ref id) if id.name == "x"));
                assert!(matches!(d.init.as_deref(), Some(Expr::Num(n)) if n.value == 5.0));
                // The statement includes its terminating semicolon.
                assert_eq!(decl.loc.start.offset, 0);
                assert_eq!(decl.loc.end.offset, 10);
            }
            other => panic!("expected variable declaration, got {other:?}"),
        }
        assert!(matches!(
            stmt("const c = true;"),
            Stmt::VarDecl(d) if d.kind == VarKind::Const
        ));
        match stmt("var z;") {
            Stmt::VarDecl(decl) => {
                assert_eq!(decl.kind, VarKind::Var);
                assert!(decl.declarators[0].init.is_none());
            }
            other => panic!("expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_declarators_without_initializers() {
        match stmt("let a, b;") {
            Stmt::VarDecl(decl) => {
                assert_eq!(decl.declarators.len(), 2);
                assert!(decl.declarators.iter().all(|d| d.init.is_none()));
            }
            other => panic!("expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_initializer_swallows_following_declarators() {
        // The initializer is parsed at lowest precedence, so the comma
        // continues it as a sequence rather than starting a declarator.
        match stmt("let x = 1, y = 2;") {
            Stmt::VarDecl(decl) => {
                assert_eq!(decl.declarators.len(), 1);
                match decl.declarators[0].init.as_deref() {
                    Some(Expr::Sequence(seq)) => assert_eq!(seq.expressions.len(), 2),
                    other => panic!("expected sequence initializer, got {other:?}"),
                }
            }
            other => panic!("expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_binding_in_declaration() {
        let errors = parse_err("let ;");
        assert_eq!(
            messages(&errors),
            vec!["missing binding in variable declaration"]
        );
    }

    #[test]
    fn test_empty_statements() {
        let program = parse(";;");
        assert_eq!(program.body.len(), 2);
        assert!(matches!(program.body[0], Stmt::Empty(_)));
        assert_eq!(program.body[1].loc().start.offset, 1);
    }

    #[test]
    fn test_block_statement() {
        let src = "{ let a = 1; a; }";
        match stmt(src) {
            Stmt::Block(block) => {
                assert_eq!(block.body.len(), 2);
                assert_eq!(block.loc.start.offset, 0);
                assert_eq!(block.loc.end.offset, src.len());
            }
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_block() {
        let errors = parse_err("{ a;");
        assert_eq!(messages(&errors), vec!["unterminated block statement"]);
    }

    #[test]
    fn test_return_statements() {
        match stmt("return;") {
            Stmt::Return(ret) => {
                assert!(ret.argument.is_none());
                assert_eq!(ret.loc.end.offset, 7);
            }
            other => panic!("expected return, got {other:?}"),
        }
        match stmt("return a + b;") {
            Stmt::Return(ret) => {
                assert!(matches!(ret.argument.as_deref(), Some(Expr::Binary(_))));
                assert_eq!(ret.loc.end.offset, 13);
            }
            other => panic!("expected return, got {other:?}"),
        }
        // Before a closing brace the keyword alone is the statement.
        match stmt("{ return }") {
            Stmt::Block(block) => match &block.body[0] {
                Stmt::Return(ret) => {
                    assert!(ret.argument.is_none());
                    assert_eq!(ret.loc.end.offset, 8);
                }
                other => panic!("expected return, got {other:?}"),
            },
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_if_statement() {
        match stmt("if (a) b;") {
            Stmt::If(stmt) => {
                assert!(matches!(*stmt.test, Expr::Ident(_)));
                assert!(matches!(*stmt.consequent, Stmt::Expr(_)));
                assert!(stmt.alternate.is_none());
            }
            other => panic!("expected if, got {other:?}"),
        }
        let src = "if (a) { b; } else { c; }";
        match stmt(src) {
            Stmt::If(stmt) => {
                assert!(matches!(stmt.alternate.as_deref(), Some(Stmt::Block(_))));
                assert_eq!(stmt.loc.end.offset, src.len());
            }
            other => panic!("expected if, got {other:?}"),
        }
        // `else if` chains nest through the alternate.
        match stmt("if (a) b; else if (c) d;") {
            Stmt::If(stmt) => {
                assert!(matches!(stmt.alternate.as_deref(), Some(Stmt::If(_))));
            }
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_while_statement() {
        match stmt("while (x) x--;") {
            Stmt::While(stmt) => {
                assert!(matches!(*stmt.test, Expr::Ident(_)));
                assert!(matches!(*stmt.body, Stmt::Expr(_)));
            }
            other => panic!("expected while, got {other:?}"),
        }
    }

    #[test]
    fn test_do_while_statement() {
        let src = "do x++; while (x < 3);";
        match stmt(src) {
            Stmt::DoWhile(stmt) => {
                assert!(matches!(*stmt.body, Stmt::Expr(_)));
                assert!(matches!(*stmt.test, Expr::Binary(_)));
                assert_eq!(stmt.loc.end.offset, src.len());
            }
            other => panic!("expected do-while, got {other:?}"),
        }
        let errors = parse_err("do x; y;");
        assert_eq!(
            messages(&errors)[0],
            "expected next token to be WHILE, got IDENT"
        );
    }

    #[test]
    fn test_break_and_continue() {
        assert!(matches!(stmt("break;"), Stmt::Break(b) if b.label.is_none()));
        match stmt("break out;") {
            Stmt::Break(b) => {
                assert_eq!(b.label.as_ref().map(|l| l.name.as_str()), Some("out"));
            }
            other => panic!("expected break, got {other:?}"),
        }
        assert!(matches!(
            stmt("continue next;"),
            Stmt::Continue(c) if c.label.is_some()
        ));
        // A label on the next line belongs to a new statement.
        let program = parse("break\nout;");
        assert_eq!(program.body.len(), 2);
        assert!(matches!(&program.body[0], Stmt::Break(b) if b.label.is_none()));
        assert!(matches!(&program.body[1], Stmt::Expr(_)));
    }

    #[test]
    fn test_throw_statement() {
        match stmt("throw err;") {
            Stmt::Throw(stmt) => assert!(matches!(*stmt.argument, Expr::Ident(_))),
            other => panic!("expected throw, got {other:?}"),
        }
        let errors = parse_err("throw\nerr;");
        assert_eq!(messages(&errors)[0], "illegal newline after throw");
    }

    #[test]
    fn test_debugger_statement() {
        match stmt("debugger;") {
            Stmt::Debugger(stmt) => assert_eq!(stmt.loc.end.offset, 9),
            other => panic!("expected debugger, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_statement() {
        let src = "switch (x) { case 1: a; break; default: b; }";
        match stmt(src) {
            Stmt::Switch(stmt) => {
                assert!(matches!(*stmt.discriminant, Expr::Ident(_)));
                assert_eq!(stmt.cases.len(), 2);
                assert!(stmt.cases[0].test.is_some());
                assert_eq!(stmt.cases[0].consequent.len(), 2);
                assert!(stmt.cases[1].test.is_none());
                assert_eq!(stmt.cases[1].consequent.len(), 1);
                assert_eq!(stmt.loc.end.offset, src.len());
            }
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_clause_errors() {
        let errors = parse_err("switch (x) { default: a; default: b; }");
        assert_eq!(messages(&errors)[0], "multiple default clauses in switch");

        let errors = parse_err("switch (x) { a; }");
        assert_eq!(messages(&errors)[0], "expected case or default clause");

        let errors = parse_err("switch (x) { case 1: a;");
        assert_eq!(messages(&errors), vec!["unterminated switch statement"]);
    }

    #[test]
    fn test_with_statement() {
        match stmt("with (scope) x;") {
            Stmt::With(stmt) => {
                assert!(matches!(*stmt.object, Expr::Ident(_)));
                assert!(matches!(*stmt.body, Stmt::Expr(_)));
            }
            other => panic!("expected with, got {other:?}"),
        }
    }

    #[test]
    fn test_labeled_statement() {
        match stmt("outer: while (a) b;") {
            Stmt::Labeled(stmt) => {
                assert_eq!(stmt.label.name, "outer");
                assert!(matches!(*stmt.body, Stmt::While(_)));
            }
            other => panic!("expected labeled statement, got {other:?}"),
        }
    }

    #[test]
    fn test_try_statement_forms() {
        match stmt("try { a; } catch (e) { b; }") {
            Stmt::Try(stmt) => {
                assert_eq!(stmt.block.body.len(), 1);
                let handler = stmt.handler.as_ref().unwrap();
                assert!(matches!(handler.param, Pat::Ident(ref id) if id.name == "e"));
                assert!(stmt.finalizer.is_none());
            }
            other => panic!("expected try, got {other:?}"),
        }
        match stmt("try { a; } finally { c; }") {
            Stmt::Try(stmt) => {
                assert!(stmt.handler.is_none());
                assert!(stmt.finalizer.is_some());
            }
            other => panic!("expected try, got {other:?}"),
        }
        let src = "try { a; } catch (e) { b; } finally { c; }";
        match stmt(src) {
            Stmt::Try(stmt) => {
                assert!(stmt.handler.is_some());
                assert!(stmt.finalizer.is_some());
                assert_eq!(stmt.loc.end.offset, src.len());
            }
            other => panic!("expected try, got {other:?}"),
        }
    }

    #[test]
    fn test_try_requires_catch_or_finally() {
        let errors = parse_err("try { a; }");
        assert_eq!(
            messages(&errors),
            vec!["try statement requires catch or finally"]
        );
    }

    #[test]
    fn test_function_declaration() {
        match stmt("function add(a, b) { return a + b; }") {
            Stmt::FnDecl(decl) => {
                assert_eq!(decl.id.name, "add");
                assert!(!decl.is_generator);
                assert_eq!(decl.params.len(), 2);
                assert!(matches!(decl.params[0], Pat::Ident(_)));
                assert_eq!(decl.body.body.len(), 1);
            }
            other => panic!("expected function declaration, got {other:?}"),
        }
        match stmt("function* gen() {}") {
            Stmt::FnDecl(decl) => {
                assert!(decl.is_generator);
                assert!(decl.params.is_empty());
                assert!(decl.body.body.is_empty());
            }
            other => panic!("expected function declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_function_rest_parameter() {
        match stmt("function f(a, ...rest) {}") {
            Stmt::FnDecl(decl) => {
                assert_eq!(decl.params.len(), 2);
                match &decl.params[1] {
                    Pat::Rest(rest) => {
                        assert!(matches!(*rest.argument, Pat::Ident(ref id) if id.name == "rest"));
                    }
                    other => panic!("expected rest parameter, got {other:?}"),
                }
            }
            other => panic!("expected function declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_function_parameter_errors() {
        let errors = parse_err("function f(a,) {}");
        assert_eq!(messages(&errors)[0], "trailing comma without parameter");

        let errors = parse_err("function f(a 1) {}");
        assert_eq!(messages(&errors)[0], "unexpected token in parameter list");
    }

    #[test]
    fn test_for_statement() {
        match stmt("for (let i = 0; i < 3; i++) { a; }") {
            Stmt::For(stmt) => {
                match stmt.init {
                    Some(ForInit::VarDecl(ref decl)) => {
                        assert_eq!(decl.kind, VarKind::Let);
                        assert_eq!(decl.declarators.len(), 1);
                    }
                    ref other => panic!("expected declaration initializer, got {other:?}"),
                }
                assert!(matches!(stmt.test.as_deref(), Some(Expr::Binary(_))));
                assert!(matches!(stmt.update.as_deref(), Some(Expr::Update(_))));
                assert!(matches!(*stmt.body, Stmt::Block(_)));
            }
            other => panic!("expected for, got {other:?}"),
        }
        match stmt("for (;;) x;") {
            Stmt::For(stmt) => {
                assert!(stmt.init.is_none());
                assert!(stmt.test.is_none());
                assert!(stmt.update.is_none());
            }
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_expression_initializer() {
        match stmt("for (i = 0; i < n; i++) x;") {
            Stmt::For(stmt) => {
                assert!(matches!(
                    stmt.init,
                    Some(ForInit::Expr(ref e)) if matches!(**e, Expr::Assign(_))
                ));
            }
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_initializer_requires_semicolon() {
        let errors = parse_err("for (a in b) x;");
        assert_eq!(
            messages(&errors)[0],
            "expected semicolon after for-loop initializer"
        );
    }

    #[test]
    fn test_expression_statement_excludes_semicolon() {
        match stmt("a + b;") {
            Stmt::Expr(stmt) => {
                assert_eq!(stmt.loc.start.offset, 0);
                assert_eq!(stmt.loc.end.offset, 5);
            }
            other => panic!("expected expression statement, got {other:?}"),
        }
    }
}
