//! Expression parsing: operators, postfix chains and primaries.

use std::rc::Rc;

use tern_ir::{Arg, BinaryOp, CompareOp, Expr, ExprKind, Name, Param, UnaryOp};
use tern_lexer::TokenKind;
use tern_stack::ensure_sufficient_stack;

use super::function::function_from_call;
use crate::{ParseError, Parser};

fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::EqEq => Some(CompareOp::Eq),
        TokenKind::NotEq => Some(CompareOp::NotEq),
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::LtEq => Some(CompareOp::LtEq),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::GtEq => Some(CompareOp::GtEq),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        _ => None,
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl Parser<'_> {
    /// Parse a full expression, including assignment forms.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_arrow()?;
        if !self.cursor.check(TokenKind::Eq) {
            return Ok(target);
        }
        self.cursor.advance();
        self.cursor.skip_newlines();
        let value = self.parse_expr()?;

        let target_span = target.span;
        let span = target_span.merge(value.span);
        match target.kind {
            ExprKind::Ident(_) | ExprKind::Attr { .. } | ExprKind::Index { .. } => Ok(Expr::new(
                ExprKind::Assign {
                    target: Box::new(target),
                    value: Box::new(value),
                },
                span,
            )),
            ExprKind::Call { callee, args } => function_from_call(*callee, args, value, span),
            other => Err(ParseError::invalid_assignment_target(
                other.describe(),
                target_span,
            )),
        }
    }

    /// `x -> body`, or fall through to the boolean levels.
    fn parse_arrow(&mut self) -> Result<Expr, ParseError> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            if self.cursor.peek_kind(1) == TokenKind::Arrow {
                let start = self.cursor.advance().span;
                self.cursor.advance();
                let param = Param {
                    name,
                    default: None,
                    span: start,
                };
                return self.finish_arrow(vec![param], start);
            }
        }
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.eat(TokenKind::Or) {
            self.cursor.skip_newlines();
            let right = self.parse_and()?;
            let span = left.span.merge(right.span);
            left = Expr::new(ExprKind::Or(Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while self.cursor.eat(TokenKind::And) {
            self.cursor.skip_newlines();
            let right = self.parse_not()?;
            let span = left.span.merge(right.span);
            left = Expr::new(ExprKind::And(Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Not) {
            let start = self.cursor.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            let span = start.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_additive()?;
        let mut rest = Vec::new();
        while let Some(op) = compare_op(self.cursor.current_kind()) {
            self.cursor.advance();
            self.cursor.skip_newlines();
            rest.push((op, self.parse_additive()?));
        }
        let Some((_, last)) = rest.last() else {
            return Ok(first);
        };
        let span = first.span.merge(last.span);
        Ok(Expr::new(
            ExprKind::Compare {
                first: Box::new(first),
                rest,
            },
            span,
        ))
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = additive_op(self.cursor.current_kind()) {
            self.cursor.advance();
            self.cursor.skip_newlines();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = multiplicative_op(self.cursor.current_kind()) {
            self.cursor.advance();
            self.cursor.skip_newlines();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Minus) {
            let start = self.cursor.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.parse_postfix()
    }

    /// Calls, attribute reads and indexing. A call's `(` must be on the
    /// same line as the callee.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.parse_call_args()?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let (name, name_span) = self.cursor.expect_ident()?;
                    let span = expr.span.merge(name_span);
                    expr = Expr::new(
                        ExprKind::Attr {
                            receiver: Box::new(expr),
                            name,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    self.cursor.skip_newlines();
                    let index = self.parse_expr()?;
                    self.cursor.skip_newlines();
                    self.cursor.expect(TokenKind::RBracket)?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Index {
                            receiver: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Arguments after an opening `(`, through the closing `)`.
    fn parse_call_args(&mut self) -> Result<Vec<Arg>, ParseError> {
        let mut args = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RParen) {
                return Ok(args);
            }

            let arg = match self.cursor.current_kind() {
                TokenKind::Ident(name) if self.cursor.peek_kind(1) == TokenKind::Eq => {
                    let start = self.cursor.advance().span;
                    self.cursor.advance();
                    self.cursor.skip_newlines();
                    let value = self.parse_expr()?;
                    Arg {
                        name: Some(name),
                        span: start.merge(value.span),
                        value,
                    }
                }
                _ => {
                    let value = self.parse_expr()?;
                    Arg {
                        name: None,
                        span: value.span,
                        value,
                    }
                }
            };
            args.push(arg);

            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.expect(TokenKind::RParen)?;
                return Ok(args);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        let simple = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Str(name) => ExprKind::Str(Rc::from(self.cursor.interner().lookup(name))),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::None => ExprKind::None,
            TokenKind::Atom(name) => ExprKind::Atom(name),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::This => ExprKind::This,
            TokenKind::Break => ExprKind::Break,
            TokenKind::Continue => ExprKind::Continue,

            TokenKind::LParen => return self.parse_paren(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::HashBrace => return self.parse_dict(),
            TokenKind::LBrace if self.is_record_start() => return self.parse_record(),
            TokenKind::LBrace => return self.parse_block(),
            TokenKind::If => return self.parse_if(),
            TokenKind::While => return self.parse_while(),
            TokenKind::For => return self.parse_for(),
            TokenKind::Try => return self.parse_try(),
            TokenKind::Fn => return self.parse_fn(),
            TokenKind::Class => return self.parse_class(),
            TokenKind::Var => return self.parse_var(),
            TokenKind::Return => return self.parse_return(),
            TokenKind::Throw => return self.parse_throw(),
            TokenKind::Print => return self.parse_print(),

            other => return Err(ParseError::unexpected("expression", other, span)),
        };
        self.cursor.advance();
        Ok(Expr::new(simple, span))
    }

    /// `( .. )`: grouping, a sequence, or a parameter list before `->`.
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.skip_newlines();

        if self.cursor.eat(TokenKind::RParen) {
            self.expect_arrow()?;
            return self.finish_arrow(Vec::new(), start);
        }

        let first = self.parse_expr()?;
        self.cursor.skip_newlines();

        if self.cursor.check(TokenKind::Comma) {
            let mut items = vec![first];
            while self.cursor.eat(TokenKind::Comma) {
                self.cursor.skip_newlines();
                if self.cursor.check(TokenKind::RParen) {
                    break;
                }
                items.push(self.parse_expr()?);
                self.cursor.skip_newlines();
            }
            self.cursor.expect(TokenKind::RParen)?;
            self.expect_arrow()?;
            let params = items
                .into_iter()
                .map(param_from_expr)
                .collect::<Result<Vec<_>, _>>()?;
            return self.finish_arrow(params, start);
        }

        let mut items = vec![first];
        loop {
            self.cursor.skip_separators();
            if self.cursor.eat(TokenKind::RParen) {
                break;
            }
            if self.cursor.previous_kind() != Some(TokenKind::Newline)
                && self.cursor.previous_kind() != Some(TokenKind::Semicolon)
                && self.cursor.previous_kind() != Some(TokenKind::RBrace)
            {
                return Err(ParseError::unexpected(
                    "`)` or `;`",
                    self.cursor.current_kind(),
                    self.cursor.current_span(),
                ));
            }
            items.push(self.parse_expr()?);
        }

        if items.len() == 1 {
            if self.cursor.eat(TokenKind::Arrow) {
                let params = items
                    .into_iter()
                    .map(param_from_expr)
                    .collect::<Result<Vec<_>, _>>()?;
                return self.finish_arrow(params, start);
            }
            if let Some(only) = items.pop() {
                return Ok(only);
            }
        }
        Ok(Expr::new(ExprKind::Seq(items), self.span_from(start)))
    }

    fn expect_arrow(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Arrow) {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                "`->` after parameter list",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ))
        }
    }

    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut items = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RBracket) {
                break;
            }
            items.push(self.parse_expr()?);
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.expect(TokenKind::RBracket)?;
                break;
            }
        }
        Ok(Expr::new(ExprKind::List(items), self.span_from(start)))
    }

    fn parse_dict(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut entries = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RBrace) {
                break;
            }
            let key = self.parse_expr()?;
            self.cursor.expect(TokenKind::Colon)?;
            self.cursor.skip_newlines();
            let value = self.parse_expr()?;
            entries.push((key, value));
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.expect(TokenKind::RBrace)?;
                break;
            }
        }
        Ok(Expr::new(ExprKind::Dict(entries), self.span_from(start)))
    }

    /// `{` followed by `name:` starts a record rather than a block.
    fn is_record_start(&self) -> bool {
        let mut offset = 1;
        while self.cursor.peek_kind(offset) == TokenKind::Newline {
            offset += 1;
        }
        matches!(self.cursor.peek_kind(offset), TokenKind::Ident(_))
            && self.cursor.peek_kind(offset + 1) == TokenKind::Colon
    }

    fn parse_record(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let mut fields: Vec<(Name, Expr)> = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RBrace) {
                break;
            }
            let (name, name_span) = self.cursor.expect_ident()?;
            if fields.iter().any(|(existing, _)| *existing == name) {
                return Err(ParseError::duplicate_record_field(
                    self.cursor.interner().lookup(name),
                    name_span,
                ));
            }
            self.cursor.expect(TokenKind::Colon)?;
            self.cursor.skip_newlines();
            let value = self.parse_expr()?;
            fields.push((name, value));
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.expect(TokenKind::RBrace)?;
                break;
            }
        }
        Ok(Expr::new(ExprKind::Record(fields), self.span_from(start)))
    }
}

/// Reinterpret a parsed expression as a parameter: `x` or `x = default`.
pub(super) fn param_from_expr(expr: Expr) -> Result<Param, ParseError> {
    let span = expr.span;
    match expr.kind {
        ExprKind::Ident(name) => Ok(Param {
            name,
            default: None,
            span,
        }),
        ExprKind::Assign { target, value } => match target.kind {
            ExprKind::Ident(name) => Ok(Param {
                name,
                default: Some(*value),
                span,
            }),
            _ => Err(ParseError::invalid_parameter(span)),
        },
        _ => Err(ParseError::invalid_parameter(span)),
    }
}
