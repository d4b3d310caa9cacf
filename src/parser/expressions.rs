/*
 * ==========================================================================
 * TIB - TI-BASIC Syntax Analyzer
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the TIB syntax analyzer project.
 *
 * TIB is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire TIB expression grammar**.
 *
 * It is a precedence-climbing parser driven by the operator table:
 *
 *   expression(min) → prefix ( postfix-op | infix-op expression(next) )*
 *
 * where every operator consumed in the loop sits on a level >= `min`,
 * and `next` is `level + 1` for left-associative operators (`level` for
 * right-associative ones). Prefixes are:
 *
 *   literal | variable | "(" expression ")"? | function args ")"?
 *   | prefix-op expression(level)
 *
 * No function here names an operator symbol. Adding an operator is a
 * table registration.
 *
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::error::TibError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{Parser, MAX_DEPTH};
use crate::parser::precedence::Precedence;

impl Parser<'_> {
    /// expression → expression(lowest)
    pub fn expression(&mut self) -> Result<Expr, TibError> {
        self.expression_at(Precedence::lowest().level())
    }

    /// Parses an expression whose operators all bind at `min` or tighter.
    ///
    /// # Errors
    /// Nesting deeper than `MAX_DEPTH` is a syntax error at the token
    /// where the limit was reached.
    pub fn expression_at(&mut self, min: u8) -> Result<Expr, TibError> {
        if self.depth >= MAX_DEPTH {
            return Err(TibError::syntax_error(
                "expression nested too deeply",
                self.peek().span,
            )
            .with_help(format!("at most {} levels of nesting are allowed", MAX_DEPTH)));
        }

        self.depth += 1;
        let result = self.climb(min);
        self.depth -= 1;

        result
    }

    /// The precedence-climbing loop behind `expression_at`.
    fn climb(&mut self, min: u8) -> Result<Expr, TibError> {
        let grammar = self.grammar;
        let operators = &grammar.operators;
        let mut expr = self.prefix()?;

        loop {
            let token = self.peek();
            if token.kind != TokenKind::Operator {
                break;
            }

            // ------------------------------------------------------------
            // POSTFIX APPLICATION
            // ------------------------------------------------------------
            if let Some(op) = operators.postfix(&token.lexeme) {
                if op.precedence.level() < min {
                    break;
                }

                let operator = self.advance().lexeme;
                expr = Expr::Postfix {
                    operator,
                    operand: Box::new(expr),
                };
                continue;
            }

            // ------------------------------------------------------------
            // BINARY OPERATORS
            // ------------------------------------------------------------
            if let Some(op) = operators.infix(&token.lexeme) {
                if op.precedence.level() < min {
                    break;
                }

                let operator = self.advance().lexeme;
                let right = self.expression_at(op.right_binding())?;
                expr = Expr::binary(expr, operator, right);
                continue;
            }

            break;
        }

        Ok(expr)
    }

    /// prefix → literal | variable | grouping | call | prefix-op operand
    fn prefix(&mut self) -> Result<Expr, TibError> {
        let grammar = self.grammar;
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Integer => {
                self.advance();
                Ok(Expr::integer(token.lexeme))
            }

            TokenKind::Float => {
                self.advance();
                Ok(Expr::float(token.lexeme))
            }

            TokenKind::Variable => {
                self.advance();
                Ok(Expr::Variable(token.lexeme))
            }

            TokenKind::LeftParen => self.grouping(),

            TokenKind::Function => self.call(),

            TokenKind::Operator => match grammar.operators.prefix(&token.lexeme) {
                Some(op) => {
                    self.advance();
                    let operand = self.expression_at(op.precedence.level())?;
                    Ok(Expr::unary(token.lexeme, operand))
                }
                None => Err(TibError::unexpected("expression", &token)
                    .with_help(format!("'{}' needs an operand on its left", token.lexeme))),
            },

            _ => Err(TibError::unexpected("expression", &token)),
        }
    }

    /// grouping → "(" expression ")"?
    fn grouping(&mut self) -> Result<Expr, TibError> {
        self.consume(TokenKind::LeftParen, "'('")?;

        if self.check(TokenKind::RightParen) {
            return Err(TibError::unexpected("expression", self.peek())
                .with_help("empty parentheses are not an expression"));
        }

        let inner = self.expression()?;
        self.close_paren()?;

        Ok(Expr::Grouping(Box::new(inner)))
    }

    /// call → function arguments ")"?
    ///
    /// The function token already carries the opening `(`.
    fn call(&mut self) -> Result<Expr, TibError> {
        let grammar = self.grammar;
        let name = self.consume(TokenKind::Function, "function")?;

        let def = match grammar.functions.get(&name.lexeme) {
            Some(def) => def,
            None => {
                return Err(TibError::syntax_error(
                    format!("unknown function '{}'", name.lexeme),
                    name.span,
                ))
            }
        };

        let arguments = self.arguments(true)?;

        if !def.args.accepts(arguments.len()) {
            return Err(TibError::syntax_error(
                format!(
                    "'{}' expects {}, found {}",
                    name.lexeme,
                    def.args.describe(),
                    arguments.len()
                ),
                name.span,
            ));
        }

        Ok(Expr::Call {
            function: name.lexeme,
            arguments,
        })
    }
}
