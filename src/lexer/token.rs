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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in a TIB program.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Segmenter → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A run of decimal digits: `42`, `007`.
    Integer,

    /// A decimal literal with a dot, an exponent, or both.
    ///
    /// Includes:
    /// - `3.`
    /// - `3.00`
    /// - `.5`
    /// - `1e50`, `2.5e-3`
    /// - `e-5` (a bare exponent, 1×10⁻⁵)
    Float,

    /// A symbol or word registered in the operator table.
    ///
    /// Examples: `+`, `<=`, `->`, `and`, `xor`
    Operator,

    /// A command keyword from the command table (`Disp`, `If`, `For(`).
    Command,

    /// A built-in function name; the lexeme includes the opening
    /// parenthesis (`not(`, `abs(`).
    Function,

    /// A calculator variable: `A`..`Z`, `θ` / `Theta`, `Ans`.
    Variable,

    /// The one or two character name after `Lbl` / `Goto` (`A`, `12`, `θ1`).
    Label,

    LeftParen,
    RightParen,
    Comma,

    /// A line break (`\n`, `\r\n`) or the `:` separator.
    ///
    /// Both spellings end a statement and are interchangeable.
    Terminator,

    /// End-of-input marker.
    ///
    /// The lexer yields this exactly once, as the final token.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Operator => "operator",
            TokenKind::Command => "command",
            TokenKind::Function => "function",
            TokenKind::Variable => "variable",
            TokenKind::Label => "label",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Terminator => "terminator",
            TokenKind::Eof => "end of input",
        };

        f.write_str(name)
    }
}

/// Represents a **single lexical token** produced by the TIB lexer.
///
/// Tokens are immutable once produced. Numeric literals keep their exact
/// source text; converting them to numbers is left to later stages.
///
/// # Example Tokens
/// ```text
/// Disp  →  { kind: Command,  lexeme: "Disp" }
/// 3.    →  { kind: Float,    lexeme: "3."   }
/// ->    →  { kind: Operator, lexeme: "->"   }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token sits in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Synthetic end marker placed at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    /// Describes the token for `expected X, found Y` messages.
    ///
    /// ```text
    /// operator '+'
    /// integer literal '42'
    /// end of statement
    /// ```
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of statement".to_string(),
            TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Comma => {
                self.kind.to_string()
            }
            TokenKind::Terminator => "terminator".to_string(),
            _ => format!("{} '{}'", self.kind, self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only its lexeme.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Terminator if self.lexeme != ":" => f.write_str("\\n"),
            _ => f.write_str(&self.lexeme),
        }
    }
}
