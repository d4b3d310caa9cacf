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
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::error::TibError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Advances one token forward. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let t = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        t
    }

    /// Returns true if the parser reached the end of the statement.
    pub fn is_at_end(&self) -> bool {
        self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Checks the current token's kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token or fails with `expected <what>`.
    pub fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token, TibError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(TibError::unexpected(expected, self.peek()))
        }
    }

    /// Fails unless every token of the statement has been consumed.
    pub fn expect_end(&self) -> Result<(), TibError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(TibError::unexpected("end of statement", self.peek()))
        }
    }

    /// Closes a parenthesis opened by `(`, a function or a command like
    /// `For(`.
    ///
    /// The calculator lets the closing `)` be left off at the end of a
    /// statement, so end-of-statement also closes.
    pub fn close_paren(&mut self) -> Result<(), TibError> {
        if self.match_kind(TokenKind::RightParen) || self.is_at_end() {
            Ok(())
        } else {
            Err(TibError::unexpected("')'", self.peek()))
        }
    }

    /// Parses a comma separated argument list.
    ///
    /// # Parameters
    /// - `parenthesized`: the list was opened by `(` and may be closed by
    ///   `)` (or end of statement)
    ///
    /// # Grammar
    /// ```text
    /// arguments → ( expression ( "," expression )* )?
    /// ```
    pub fn arguments(&mut self, parenthesized: bool) -> Result<Vec<Expr>, TibError> {
        let mut args = Vec::new();

        if self.is_at_end() || (parenthesized && self.check(TokenKind::RightParen)) {
            if parenthesized {
                self.close_paren()?;
            }
            return Ok(args);
        }

        loop {
            args.push(self.expression()?);

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        if parenthesized {
            if !self.check(TokenKind::RightParen) && !self.is_at_end() {
                return Err(TibError::unexpected("',' or ')'", self.peek()));
            }
            self.close_paren()?;
        }

        Ok(args)
    }
}
