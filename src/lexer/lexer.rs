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

use std::sync::OnceLock;

use regex::Regex;

use crate::error::TibError;
use crate::grammar::Grammar;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Anchored patterns for the numeric literal forms.
///
/// ```text
/// exponent → ("e" | "ᴇ") "-"? [0-9] [0-9]?
/// float    → ([0-9]+ "." [0-9]* | "." [0-9]+) exponent?
///          | [0-9]+ exponent
///          | exponent
/// integer  → [0-9]+
/// ```
///
/// The float pattern is always tried first, so an integer immediately
/// followed by `.` or an exponent is taken as one float (`3.`, `3.00`,
/// `1e50`, never `3` + `.`). A bare exponent (`e-5`) is the calculator's
/// shorthand for `1e-5`.
struct NumberPatterns {
    float: Regex,
    integer: Regex,
    exponent: Regex,
}

fn number_patterns() -> &'static NumberPatterns {
    static PATTERNS: OnceLock<NumberPatterns> = OnceLock::new();

    PATTERNS.get_or_init(|| NumberPatterns {
        float: Regex::new(
            r"^(?:(?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eᴇ]-?[0-9]{1,2})?|[0-9]+[eᴇ]-?[0-9]{1,2}|[eᴇ]-?[0-9]{1,2})",
        )
        .expect("float literal pattern"),
        integer: Regex::new(r"^[0-9]+").expect("integer literal pattern"),
        exponent: Regex::new(r"^[eᴇ]-?[0-9]").expect("exponent pattern"),
    })
}

/// The TIB lexer.
///
/// A lazy scanner over a borrowed source buffer. Tokens are produced one
/// at a time through [`Iterator`]; nothing is scanned ahead of the caller.
///
/// # Behavior
/// - Skips spaces, tabs, form feeds and lone carriage returns
/// - `\n`, `\r\n` and `:` all become `TokenKind::Terminator`
/// - Keywords, function names, operator symbols and named variables are
///   matched longest-first against the grammar's lexicon
/// - After a label command (`Lbl`, `Goto`) the next one or two characters
///   of `A`-`Z`, `0`-`9` or `θ` form a single `TokenKind::Label`
/// - Yields exactly one `TokenKind::Eof` token, then `None`
///
/// # Errors
/// A character no rule accepts yields `Err(TibError)` of kind Lexical.
/// The offending character is consumed, but the lexer makes no attempt to
/// resynchronize; call [`Lexer::recover`] to skip to the next terminator.
///
/// # Restarting
/// The lexer is `Clone`, and [`Lexer::reset`] rewinds it to the start of
/// the buffer.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    lexicon: Vec<(&'a str, TokenKind)>,
    /// Command keywords whose operand is a label name.
    labels: Vec<&'a str>,
    /// Set right after a label command was scanned.
    label_next: bool,
    current: usize,
    line: usize,
    line_start: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` using the spellings registered in
    /// `grammar`.
    ///
    /// # Parameters
    /// - `source`: the full program text
    /// - `grammar`: command, function and operator tables
    pub fn new(source: &'a str, grammar: &'a Grammar) -> Self {
        Self {
            source,
            lexicon: grammar.lexicon(),
            labels: grammar
                .commands
                .iter()
                .filter(|c| c.takes_label())
                .map(|c| c.keyword.as_str())
                .collect(),
            label_next: false,
            current: 0,
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    /// Rewinds to the beginning of the source.
    pub fn reset(&mut self) {
        self.current = 0;
        self.line = 1;
        self.line_start = 0;
        self.label_next = false;
        self.finished = false;
    }

    /// Skips everything up to (not including) the next terminator.
    ///
    /// Used by the segmenter after a lexical error so scanning resumes at
    /// the start of the next statement.
    pub fn recover(&mut self) {
        self.label_next = false;
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == ':' || (ch == '\r' && self.peek_next() == Some('\n')) {
                return;
            }
            self.advance();
        }
    }

    /// Scans the next token.
    ///
    /// Returns the `Eof` token every time once the input is exhausted;
    /// the [`Iterator`] implementation stops after the first one.
    pub fn next_token(&mut self) -> Result<Token, TibError> {
        let label_next = std::mem::take(&mut self.label_next);
        self.skip_whitespace();

        let start = self.current;
        let line = self.line;
        let column = self.column_of(start);

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::eof(Span::point(start, line, column))),
        };

        // ------------------------------------------------------------
        // TERMINATORS
        // ------------------------------------------------------------
        if ch == '\n' || ch == ':' || (ch == '\r' && self.peek_next() == Some('\n')) {
            return Ok(self.terminator());
        }

        // ------------------------------------------------------------
        // LABEL NAMES (`Lbl A`, `Goto 12`)
        // ------------------------------------------------------------
        if label_next && is_label_char(ch) {
            return Ok(self.label(start, line, column));
        }

        // ------------------------------------------------------------
        // NUMERIC LITERALS
        // ------------------------------------------------------------
        let rest = &self.source[start..];
        if ch.is_ascii_digit() || ch == '.' || number_patterns().exponent.is_match(rest) {
            return self.number();
        }

        // ------------------------------------------------------------
        // KEYWORDS / FUNCTIONS / OPERATORS / NAMED VARIABLES
        // ------------------------------------------------------------
        if let Some((word, kind)) = self
            .lexicon
            .iter()
            .find(|(word, _)| rest.starts_with(*word))
            .copied()
        {
            self.current += word.len();
            if kind == TokenKind::Command && self.labels.contains(&word) {
                self.label_next = true;
            }
            return Ok(self.make_token(kind, start, line, column));
        }

        // ------------------------------------------------------------
        // SINGLE-LETTER VARIABLES
        // ------------------------------------------------------------
        if ch.is_ascii_uppercase() {
            self.advance();
            return Ok(self.make_token(TokenKind::Variable, start, line, column));
        }

        self.advance();
        Err(TibError::unrecognized_character(
            ch,
            Span::new(start, self.current, line, column),
        ))
    }

    /// Emits a terminator token and moves the line counter past newlines.
    fn terminator(&mut self) -> Token {
        let start = self.current;
        let line = self.line;
        let column = self.column_of(start);

        let ch = self.advance();
        if ch == '\r' {
            self.advance();
        }

        let token = self.make_token(TokenKind::Terminator, start, line, column);

        if ch != ':' {
            self.line += 1;
            self.line_start = self.current;
        }

        token
    }

    /// Scans an integer or float literal using the maximal-munch rule.
    ///
    /// # Examples
    /// - `42`   → Integer
    /// - `3.`   → Float
    /// - `3.00` → Float
    /// - `.5`   → Float
    /// - `.`    → lexical error
    fn number(&mut self) -> Result<Token, TibError> {
        let start = self.current;
        let line = self.line;
        let column = self.column_of(start);
        let rest = &self.source[start..];
        let patterns = number_patterns();

        let (kind, len) = if let Some(m) = patterns.float.find(rest) {
            (TokenKind::Float, m.end())
        } else if let Some(m) = patterns.integer.find(rest) {
            (TokenKind::Integer, m.end())
        } else {
            // A lone '.' with no digits on either side.
            self.advance();
            return Err(TibError::unrecognized_character(
                '.',
                Span::new(start, self.current, line, column),
            )
            .with_help("a decimal point needs at least one digit next to it"));
        };

        self.current += len;
        Ok(self.make_token(kind, start, line, column))
    }

    /// Scans a one or two character label name.
    fn label(&mut self, start: usize, line: usize, column: usize) -> Token {
        self.advance();
        if self.peek().map_or(false, is_label_char) {
            self.advance();
        }

        self.make_token(TokenKind::Label, start, line, column)
    }

    fn make_token(&self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token {
        Token::new(
            kind,
            &self.source[start..self.current],
            Span::new(start, self.current, line, column),
        )
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\x0c' => {
                    self.advance();
                }
                '\r' if self.peek_next() != Some('\n') => {
                    self.advance();
                }
                _ => return,
            }
        }
    }

    /// Column of a byte offset on the current line, in characters.
    fn column_of(&self, offset: usize) -> usize {
        self.source[self.line_start..offset].chars().count()
    }

    fn advance(&mut self) -> char {
        match self.peek() {
            Some(ch) => {
                self.current += ch.len_utf8();
                ch
            }
            None => '\0',
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }
}

fn is_label_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == 'θ'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, TibError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if matches!(&result, Ok(token) if token.kind == TokenKind::Eof) {
            self.finished = true;
        }

        Some(result)
    }
}

/// Scans a whole buffer, stopping at the first lexical error.
///
/// The returned vector always ends with the `Eof` token.
///
/// # Example
/// ```rust
/// use tib::Grammar;
/// use tib::lexer::{tokenize, TokenKind};
///
/// let grammar = Grammar::default();
/// let tokens = tokenize("3.+.5", &grammar).unwrap();
///
/// assert_eq!(tokens[0].kind, TokenKind::Float);
/// assert_eq!(tokens[2].lexeme, ".5");
/// ```
pub fn tokenize(source: &str, grammar: &Grammar) -> Result<Vec<Token>, TibError> {
    Lexer::new(source, grammar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let grammar = Grammar::default();
        tokenize(source, &grammar)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        let grammar = Grammar::default();
        tokenize(source, &grammar)
            .unwrap()
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn test_ints() {
        assert_eq!(kinds("12345"), [TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(lexemes("0123456"), ["0123456", ""]);
        assert_eq!(lexemes("     12 34"), ["12", "34", ""]);
    }

    #[test]
    fn test_floats() {
        assert_eq!(kinds("1.4"), [TokenKind::Float, TokenKind::Eof]);
        assert_eq!(lexemes(".4"), [".4", ""]);
        assert_eq!(lexemes("1."), ["1.", ""]);
        assert_eq!(lexemes("\t1.0 0.4"), ["1.0", "0.4", ""]);
    }

    #[test]
    fn second_dot_starts_a_new_float() {
        assert_eq!(lexemes("1.0.1"), ["1.0", ".1", ""]);
        assert_eq!(kinds("1.0.1"), [TokenKind::Float, TokenKind::Float, TokenKind::Eof]);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(lexemes("1e50"), ["1e50", ""]);
        assert_eq!(lexemes("1e-50"), ["1e-50", ""]);
        assert_eq!(lexemes("e-50"), ["e-50", ""]);
        assert_eq!(lexemes("2.5ᴇ3"), ["2.5ᴇ3", ""]);
        assert_eq!(kinds("1e5"), [TokenKind::Float, TokenKind::Eof]);

        // at most two exponent digits
        assert_eq!(lexemes("1e123"), ["1e12", "3", ""]);
    }

    #[test]
    fn dangling_exponent_marker_is_an_error() {
        let grammar = Grammar::default();
        let err = tokenize("3e", &grammar).unwrap_err();

        assert_eq!(err.message, "unrecognized character 'e'");
    }

    #[test]
    fn lone_dot_is_a_lexical_error() {
        let grammar = Grammar::default();
        let err = tokenize(".", &grammar).unwrap_err();

        assert!(err.is_lexical());
        assert_eq!(err.span.start, 0);
        assert_eq!(err.span.end, 1);
    }

    #[test]
    fn test_binary_ops() {
        assert_eq!(lexemes("4+4"), ["4", "+", "4", ""]);
        assert_eq!(lexemes("<<=>>="), ["<", "<=", ">", ">=", ""]);
        assert_eq!(lexemes("5->A"), ["5", "->", "A", ""]);
        assert_eq!(lexemes("orxor"), ["or", "xor", ""]);
        assert_eq!(lexemes("--2"), ["--", "2", ""]);
        assert_eq!(lexemes("- -2"), ["-", "-", "2", ""]);
    }

    #[test]
    fn label_names_are_single_tokens() {
        assert_eq!(
            kinds("Lbl AB:Goto 12"),
            [
                TokenKind::Command,
                TokenKind::Label,
                TokenKind::Terminator,
                TokenKind::Command,
                TokenKind::Label,
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexemes("LblA"), ["Lbl", "A", ""]);
        assert_eq!(lexemes("Goto θ1"), ["Goto", "θ1", ""]);

        // names are at most two characters long
        assert_eq!(lexemes("Lbl ABC"), ["Lbl", "AB", "C", ""]);
    }

    #[test]
    fn label_mode_ends_at_the_terminator() {
        assert_eq!(
            kinds("Lbl\nAB"),
            [
                TokenKind::Command,
                TokenKind::Terminator,
                TokenKind::Variable,
                TokenKind::Variable,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_beats_single_letter_variable() {
        assert_eq!(kinds("Disp"), [TokenKind::Command, TokenKind::Eof]);
        assert_eq!(kinds("D"), [TokenKind::Variable, TokenKind::Eof]);
        assert_eq!(kinds("Then"), [TokenKind::Command, TokenKind::Eof]);
        assert_eq!(kinds("Theta"), [TokenKind::Variable, TokenKind::Eof]);
    }

    #[test]
    fn function_names_include_the_paren() {
        assert_eq!(lexemes("not(1)"), ["not(", "1", ")", ""]);
        assert_eq!(kinds("not(1)")[0], TokenKind::Function);
    }

    #[test]
    fn all_terminator_spellings() {
        let grammar = Grammar::default();
        let tokens = tokenize("1:2\n3\r\n4", &grammar).unwrap();
        let terminators: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Terminator)
            .map(|t| t.lexeme.as_str())
            .collect();

        assert_eq!(terminators, [":", "\n", "\r\n"]);
        assert_eq!(tokens.last().unwrap().span.line, 3);
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let grammar = Grammar::default();
        let tokens = tokenize("1\n  23", &grammar).unwrap();

        assert_eq!(tokens[2].lexeme, "23");
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.column, 2);
        assert_eq!(tokens[2].span.start, 4);
        assert_eq!(tokens[2].span.end, 6);
    }

    #[test]
    fn test_unknown_token() {
        let grammar = Grammar::default();
        let err = tokenize("burrito", &grammar).unwrap_err();

        assert!(err.is_lexical());
        assert!(err.message.contains("'b'"));
    }

    #[test]
    fn recover_skips_to_the_next_terminator() {
        let grammar = Grammar::default();
        let mut lexer = Lexer::new("$ junk : 5", &grammar);

        assert!(lexer.next().unwrap().is_err());
        lexer.recover();

        let next = lexer.next().unwrap().unwrap();
        assert_eq!(next.kind, TokenKind::Terminator);
        assert_eq!(lexer.next().unwrap().unwrap().lexeme, "5");
    }

    #[test]
    fn iteration_ends_after_a_single_eof() {
        let grammar = Grammar::default();
        let mut lexer = Lexer::new("", &grammar);

        assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Eof);
        assert!(lexer.next().is_none());
    }

    #[test]
    fn reset_restarts_the_scan() {
        let grammar = Grammar::default();
        let mut lexer = Lexer::new("1+2", &grammar);

        let first: Vec<_> = lexer.by_ref().collect();
        lexer.reset();
        let second: Vec<_> = lexer.collect();

        assert_eq!(first, second);
    }
}
