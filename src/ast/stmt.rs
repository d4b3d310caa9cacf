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

use serde::Serialize;
use std::fmt;

use crate::ast::Expr;
use crate::span::Span;

/// A calculator built-in invocation: `Disp 1,2`, `If A>3`, `For(I,1,10)`,
/// `Goto A`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    /// The keyword exactly as registered (`For(` keeps its paren).
    pub name: String,
    pub arguments: Vec<Expr>,

    /// Label name for `Lbl` / `Goto`; such commands have no arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            arguments,
            label: None,
        }
    }

    pub fn labeled(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            label: Some(label.into()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if let Some(label) = &self.label {
            return write!(f, " {}", label);
        }

        let opens_paren = self.name.ends_with('(');
        if !opens_paren && !self.arguments.is_empty() {
            f.write_str(" ")?;
        }

        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", arg)?;
        }

        if opens_paren {
            f.write_str(")")?;
        }

        Ok(())
    }
}

/// All statement forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StmtKind {
    Command(Command),

    Expression(Expr),

    /* ----------------------------- */
    /* NO-OP MARKERS                 */
    /* ----------------------------- */

    /// Nothing between two terminators (a blank line, `::`).
    Empty,

    /// A statement that produced a diagnostic. Holds its raw source text
    /// so the program still re-serializes line for line.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, StmtKind::Empty)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, StmtKind::Invalid(_))
    }

    pub fn as_expression(&self) -> Option<&Expr> {
        match &self.kind {
            StmtKind::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_command(&self) -> Option<&Command> {
        match &self.kind {
            StmtKind::Command(command) => Some(command),
            _ => None,
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Command(command) => write!(f, "{}", command),
            StmtKind::Expression(expr) => write!(f, "{}", expr),
            StmtKind::Empty => Ok(()),
            StmtKind::Invalid(text) => f.write_str(text),
        }
    }
}

/// The root of a parsed program: statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    /// Writes the program back out, one statement per line.
    ///
    /// Empty statements come back as blank lines, so the statement count
    /// survives a reparse.
    pub fn to_source(&self) -> String {
        self.statements
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_render_their_argument_lists() {
        let disp = Command::new("Disp", vec![Expr::integer("1"), Expr::float(".5")]);
        assert_eq!(disp.to_string(), "Disp 1,.5");

        let bare = Command::new("Disp", vec![]);
        assert_eq!(bare.to_string(), "Disp");

        let for_loop = Command::new(
            "For(",
            vec![
                Expr::Variable("I".to_string()),
                Expr::integer("1"),
                Expr::integer("10"),
            ],
        );
        assert_eq!(for_loop.to_string(), "For(I,1,10)");

        assert_eq!(Command::labeled("Goto", "AB").to_string(), "Goto AB");
    }

    #[test]
    fn blank_statements_survive_serialization() {
        let span = Span::point(0, 1, 0);
        let program = Program::new(vec![
            Stmt::new(StmtKind::Expression(Expr::integer("5")), span),
            Stmt::new(StmtKind::Empty, span),
            Stmt::new(StmtKind::Expression(Expr::integer("6")), span),
        ]);

        assert_eq!(program.to_source(), "5\n\n6");
    }
}
