//! Blocks, conditionals, loops, `try` and the simple keyword statements.

use tern_ir::{Expr, ExprKind};
use tern_lexer::TokenKind;

use super::is_terminator;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Statements up to (not including) `closer`.
    pub(crate) fn parse_statements_until(
        &mut self,
        closer: TokenKind,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.check(closer) {
                return Ok(items);
            }
            items.push(self.parse_expr()?);
            if !self.cursor.check(closer) {
                self.expect_statement_end()?;
            }
        }
    }

    /// `{ stmt; stmt }`
    pub(crate) fn parse_block(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(TokenKind::LBrace)?;
        let items = self.parse_statements_until(TokenKind::RBrace)?;
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(Expr::new(ExprKind::Block(items), self.span_from(start)))
    }

    /// `if cond { .. } else if cond { .. } else { .. }`
    pub(crate) fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.cursor.check_past_newlines(TokenKind::Else) {
            self.cursor.skip_newlines();
            self.cursor.advance();
            let branch = if self.cursor.check(TokenKind::If) {
                self.parse_if()?
            } else {
                self.parse_block()?
            };
            Some(Box::new(branch))
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch,
            },
            self.span_from(start),
        ))
    }

    pub(crate) fn parse_while(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Expr::new(
            ExprKind::While {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            self.span_from(start),
        ))
    }

    /// `for name in iterable { .. }`
    pub(crate) fn parse_for(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let (binding, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::In)?;
        let iterable = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Expr::new(
            ExprKind::For {
                binding,
                iterable: Box::new(iterable),
                body: Box::new(body),
            },
            self.span_from(start),
        ))
    }

    /// `try { .. } catch name { .. }`
    pub(crate) fn parse_try(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let body = self.parse_block()?;
        self.cursor.skip_newlines();
        self.cursor.expect(TokenKind::Catch).map_err(|e| {
            e.with_help("every `try` block needs a `catch name { .. }` handler")
        })?;
        let (binding, _) = self.cursor.expect_ident()?;
        let handler = self.parse_block()?;
        Ok(Expr::new(
            ExprKind::Try {
                body: Box::new(body),
                binding,
                handler: Box::new(handler),
            },
            self.span_from(start),
        ))
    }

    /// `return` with an optional value.
    pub(crate) fn parse_return(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let value = if is_terminator(self.cursor.current_kind()) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        Ok(Expr::new(ExprKind::Return(value), self.span_from(start)))
    }

    pub(crate) fn parse_throw(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let value = self.parse_expr()?;
        Ok(Expr::new(
            ExprKind::Throw(Box::new(value)),
            self.span_from(start),
        ))
    }

    /// `print a, b, c`
    pub(crate) fn parse_print(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut args = Vec::new();
        if !is_terminator(self.cursor.current_kind()) {
            args.push(self.parse_expr()?);
            while self.cursor.eat(TokenKind::Comma) {
                self.cursor.skip_newlines();
                args.push(self.parse_expr()?);
            }
        }
        Ok(Expr::new(ExprKind::Print(args), self.span_from(start)))
    }

    /// `var name = value`
    pub(crate) fn parse_var(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Eq)?;
        self.cursor.skip_newlines();
        let value = self.parse_expr()?;
        Ok(Expr::new(
            ExprKind::Declare {
                name,
                value: Box::new(value),
            },
            self.span_from(start),
        ))
    }
}
