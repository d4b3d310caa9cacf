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

use log::{debug, trace};
use serde::Serialize;

use crate::ast::{Program, Stmt, StmtKind};
use crate::error::TibError;
use crate::grammar::Grammar;
use crate::lexer::{Lexer, Token};
use crate::parser::segmenter::{Segment, Segmenter};

/// The TIB statement parser.
///
/// One `Parser` handles exactly one segment (one statement's tokens).
/// The token list always ends with a synthetic `Eof` placed where the
/// statement's terminator was, so "end of statement" is just another
/// token to the grammar rules.
///
/// The grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser<'g> {
    /// Tokens of the statement, `Eof` last.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    /// Command, function and operator tables.
    pub grammar: &'g Grammar,

    /// How many `expression_at` calls are currently open.
    pub depth: usize,
}

/// Deepest expression nesting a statement may use.
///
/// Every `(`, function call, prefix operator or right-associative operand
/// opens one level. Past this the statement is rejected with a syntax
/// error instead of exhausting the stack.
pub const MAX_DEPTH: usize = 128;

impl<'g> Parser<'g> {
    pub fn new(mut tokens: Vec<Token>, end: Token, grammar: &'g Grammar) -> Self {
        tokens.push(end);
        Self {
            tokens,
            current: 0,
            grammar,
            depth: 0,
        }
    }

    /// Builds a parser over one segment.
    pub fn for_segment(segment: Segment, grammar: &'g Grammar) -> Self {
        Self::new(segment.tokens, Token::eof(segment.end), grammar)
    }
}

/// Result of a full parse: a best-effort tree plus every diagnostic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutput {
    pub program: Program,

    /// Lexical and syntax errors, in source order.
    pub diagnostics: Vec<TibError>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Public entry point for the TIB parsing phase, using the calculator
/// grammar.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Segmenter → Parser (per statement) → Program
/// ```
///
/// # Example
/// ```rust
/// let output = tib::parse("5:6\n7");
///
/// assert!(output.is_ok());
/// assert_eq!(output.program.len(), 3);
/// ```
pub fn parse(source: &str) -> ParseOutput {
    let grammar = Grammar::default();
    parse_with(source, &grammar)
}

/// Parses `source` against a caller-supplied grammar.
///
/// This function never aborts on malformed input. A statement that fails
/// to lex or parse is reported once, kept in the program as
/// `StmtKind::Invalid`, and parsing resumes at the next terminator. Each
/// diagnostic carries both the offending token's span and, in
/// `statement`, the span of the statement it belongs to.
pub fn parse_with(source: &str, grammar: &Grammar) -> ParseOutput {
    debug!("parsing {} bytes of source", source.len());

    let mut statements = Vec::new();
    let mut diagnostics = Vec::new();

    for segment in Segmenter::new(Lexer::new(source, grammar)) {
        let span = segment.span;
        let raw = source[span.start..span.end].trim_end().to_string();

        let result = match segment.error.clone() {
            Some(err) => Err(err),
            None => Parser::for_segment(segment, grammar).statement(),
        };

        let kind = match result {
            Ok(kind) => kind,
            Err(err) => {
                trace!("statement at {} rejected: {}", span, err.message);
                diagnostics.push(err.in_statement(span));
                StmtKind::Invalid(raw)
            }
        };

        statements.push(Stmt::new(kind, span));
    }

    debug!(
        "parsed {} statements with {} diagnostics",
        statements.len(),
        diagnostics.len()
    );

    ParseOutput {
        program: Program::new(statements),
        diagnostics,
    }
}
