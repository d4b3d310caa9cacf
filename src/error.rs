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

use crate::lexer::token::Token;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The two families of problems the analyzer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A character no token rule accepts.
    Lexical,

    /// An unexpected token, a missing operand or leftover tokens.
    Syntax,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TibError {
    pub kind: ErrorKind,

    /// Stable error code (`E_LEX`, `E_SYNTAX`)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,

    /// The whole statement the error was found in. Filled in by the
    /// program builder; `None` for errors straight from the lexer or a
    /// single-statement parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<Span>,
}

impl TibError {
    /// Generic constructor
    pub fn new(
        kind: ErrorKind,
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            span,
            help: None,
            statement: None,
        }
    }

    /// Lexical error (character matches no token rule)
    pub fn lexical_error(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(ErrorKind::Lexical, "E_LEX", message, span)
    }

    /// Syntax error (token stream does not fit the grammar)
    pub fn syntax_error(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(ErrorKind::Syntax, "E_SYNTAX", message, span)
    }

    /// Lexical error for a single unrecognized character.
    pub fn unrecognized_character(ch: char, span: Span) -> Self {
        Self::lexical_error(format!("unrecognized character '{}'", ch), span)
    }

    /// Syntax error of the form `expected <what>, found <token>`.
    pub fn unexpected(expected: impl fmt::Display, found: &Token) -> Self {
        Self::syntax_error(
            format!("expected {}, found {}", expected, found.describe()),
            found.span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Tag the error with the span of its statement (builder-style).
    pub fn in_statement(mut self, span: Span) -> Self {
        self.statement = Some(span);
        self
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl fmt::Display for TibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}] at {}: {}", self.code, self.span, self.message)
    }
}

impl std::error::Error for TibError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_is_attached_builder_style() {
        let err = TibError::syntax_error("expected expression", Span::point(3, 1, 3))
            .with_help("add an operand after the operator");

        assert_eq!(err.code, "E_SYNTAX");
        assert!(err.is_syntax());
        assert_eq!(err.help.as_deref(), Some("add an operand after the operator"));
    }

    #[test]
    fn statement_span_is_separate_from_the_primary_span() {
        let err = TibError::syntax_error("expected expression", Span::new(4, 5, 1, 4))
            .in_statement(Span::new(2, 6, 1, 2));

        assert_eq!(err.span.start, 4);
        assert_eq!(err.statement, Some(Span::new(2, 6, 1, 2)));
    }

    #[test]
    fn display_names_code_and_position() {
        let err = TibError::unrecognized_character('$', Span::new(0, 1, 1, 0));
        assert_eq!(err.to_string(), "error[E_LEX] at 1:1: unrecognized character '$'");
    }
}
