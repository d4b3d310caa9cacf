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

use crate::ast::{Command, StmtKind};
use crate::error::TibError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Parses the single statement held by this parser.
    ///
    /// This is the **dispatcher** for statement forms. It inspects the
    /// leading token and routes to the appropriate rule.
    ///
    /// # Forms
    /// - nothing at all → `StmtKind::Empty`
    /// - registered command keyword → `StmtKind::Command`
    /// - anything else → `StmtKind::Expression`
    ///
    /// # Errors
    /// Any token left over after the statement is a syntax error.
    pub fn statement(&mut self) -> Result<StmtKind, TibError> {
        // ------------------------------------------------------------
        // EMPTY STATEMENT (blank line, `::`)
        // ------------------------------------------------------------
        if self.is_at_end() {
            return Ok(StmtKind::Empty);
        }

        // ------------------------------------------------------------
        // COMMANDS
        // ------------------------------------------------------------
        if self.check(TokenKind::Command) {
            return self.command().map(StmtKind::Command);
        }

        // ------------------------------------------------------------
        // FALLBACK: EXPRESSION STATEMENT
        // ------------------------------------------------------------
        self.expression_statement()
    }

    /// Parses a command invocation.
    ///
    /// # Grammar
    /// ```text
    /// command → keyword ( expression ( "," expression )* )?
    ///         | keyword"(" ( expression ( "," expression )* )? ")"?
    ///         | label-keyword label
    /// ```
    ///
    /// The number of arguments is checked against the command's
    /// registered `ArgShape`.
    ///
    /// # Examples
    /// ```text
    /// Disp
    /// Disp 1,A+2
    /// If A>3
    /// For(I,1,10)
    /// Goto A
    /// ```
    pub fn command(&mut self) -> Result<Command, TibError> {
        let grammar = self.grammar;
        let keyword = self.consume(TokenKind::Command, "command")?;

        let def = match grammar.commands.get(&keyword.lexeme) {
            Some(def) => def,
            None => {
                return Err(TibError::syntax_error(
                    format!("unknown command '{}'", keyword.lexeme),
                    keyword.span,
                ))
            }
        };

        // ------------------------------------------------------------
        // LABEL OPERAND (`Lbl A`, `Goto 12`)
        // ------------------------------------------------------------
        if def.takes_label() {
            let label = self.consume(TokenKind::Label, "label name")?;
            self.expect_end()?;
            return Ok(Command::labeled(keyword.lexeme, label.lexeme));
        }

        let arguments = self.arguments(def.opens_paren())?;
        self.expect_end()?;

        if !def.args.accepts(arguments.len()) {
            return Err(TibError::syntax_error(
                format!(
                    "'{}' expects {}, found {}",
                    keyword.lexeme,
                    def.args.describe(),
                    arguments.len()
                ),
                keyword.span,
            ));
        }

        Ok(Command::new(keyword.lexeme, arguments))
    }

    /// expression_statement → expression
    ///
    /// The expression must use up the whole statement.
    pub fn expression_statement(&mut self) -> Result<StmtKind, TibError> {
        let expr = self.expression()?;
        self.expect_end()?;

        Ok(StmtKind::Expression(expr))
    }
}
