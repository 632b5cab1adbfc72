//! Function literals, function declarations and classes.

use std::rc::Rc;

use tern_ir::{Arg, ClassDef, ClassMember, Expr, ExprKind, FunctionDef, Param, Span};
use tern_lexer::TokenKind;

use super::expr::param_from_expr;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Body of an arrow function, after the `->` has been consumed.
    pub(crate) fn finish_arrow(
        &mut self,
        params: Vec<Param>,
        start: Span,
    ) -> Result<Expr, ParseError> {
        self.cursor.skip_newlines();
        let body = self.parse_expr()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::Lambda(Rc::new(FunctionDef {
                name: None,
                params,
                body,
                span,
            })),
            span,
        ))
    }

    /// `fn name(params) { .. }` or the anonymous `fn(params) { .. }`.
    pub(crate) fn parse_fn(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let name = if self.cursor.check_ident() {
            Some(self.cursor.expect_ident()?.0)
        } else {
            None
        };
        self.cursor.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        let span = self.span_from(start);

        let def = Rc::new(FunctionDef {
            name,
            params,
            body,
            span,
        });
        let kind = if name.is_some() {
            ExprKind::FnDecl(def)
        } else {
            ExprKind::Lambda(def)
        };
        Ok(Expr::new(kind, span))
    }

    /// Parameters after an opening `(`, through the closing `)`.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(TokenKind::RParen) {
                return Ok(params);
            }
            let (name, name_span) = self.cursor.expect_ident()?;
            let default = if self.cursor.eat(TokenKind::Eq) {
                self.cursor.skip_newlines();
                Some(self.parse_expr()?)
            } else {
                None
            };
            params.push(Param {
                name,
                default,
                span: self.span_from(name_span),
            });
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                self.cursor.expect(TokenKind::RParen)?;
                return Ok(params);
            }
        }
    }

    /// `class Name { members }`
    pub(crate) fn parse_class(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::LBrace)?;

        let mut members = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.eat(TokenKind::RBrace) {
                break;
            }
            members.push(self.parse_class_member()?);
            if !self.cursor.check(TokenKind::RBrace) {
                self.expect_statement_end()?;
            }
        }

        let span = self.span_from(start);
        Ok(Expr::new(
            ExprKind::Class(Rc::new(ClassDef {
                name,
                members,
                span,
            })),
            span,
        ))
    }

    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Var => {
                self.cursor.advance();
                let (name, _) = self.cursor.expect_ident()?;
                self.cursor.expect(TokenKind::Eq)?;
                self.cursor.skip_newlines();
                let init = self.parse_expr()?;
                Ok(ClassMember::Field {
                    name,
                    init,
                    span: self.span_from(start),
                })
            }
            TokenKind::Fn if self.cursor.peek_kind(1) == TokenKind::This => {
                self.cursor.advance();
                self.cursor.advance();
                self.cursor.expect(TokenKind::Dot)?;
                let (name, _) = self.cursor.expect_ident()?;

                let params = if self.cursor.eat(TokenKind::Eq) {
                    let (param, param_span) = self.cursor.expect_ident()?;
                    vec![Param {
                        name: param,
                        default: None,
                        span: param_span,
                    }]
                } else {
                    Vec::new()
                };
                let is_setter = !params.is_empty();
                let body = self.parse_block()?;
                let def = Rc::new(FunctionDef {
                    name: Some(name),
                    params,
                    body,
                    span: self.span_from(start),
                });
                Ok(if is_setter {
                    ClassMember::Setter(def)
                } else {
                    ClassMember::Getter(def)
                })
            }
            _ => {
                let expr = self.parse_expr()?;
                match expr.kind {
                    ExprKind::FnDecl(def) => Ok(ClassMember::Method(def)),
                    _ => Err(ParseError::new(
                        "expected a field, method or property in class body",
                        expr.span,
                    )
                    .with_help("fields are `var name = value`, methods are `fn name(..) { .. }`")),
                }
            }
        }
    }
}

/// Turn `name(a, b=1) = body` into a function declaration.
///
/// Positional arguments become parameters and named arguments become
/// parameters with defaults.
pub(super) fn function_from_call(
    callee: Expr,
    args: Vec<Arg>,
    body: Expr,
    span: Span,
) -> Result<Expr, ParseError> {
    let ExprKind::Ident(name) = callee.kind else {
        return Err(ParseError::invalid_assignment_target(
            callee.kind.describe(),
            callee.span,
        )
        .with_help("the short function form is `name(params) = body`"));
    };

    let params = args
        .into_iter()
        .map(|arg| match arg.name {
            Some(param_name) => Ok(Param {
                name: param_name,
                default: Some(arg.value),
                span: arg.span,
            }),
            None => param_from_expr(arg.value),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expr::new(
        ExprKind::FnDecl(Rc::new(FunctionDef {
            name: Some(name),
            params,
            body,
            span,
        })),
        span,
    ))
}
