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

use std::fmt::Write;

use crate::error::TibError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for TIB errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Underlines the offending token with carets (`^^^`)
/// - Optionally shows a helpful follow-up hint
///
/// Rendering returns a `String`; the caller decides where it goes.
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source code of the program being analyzed.
    source: String,

    /// Name of the source file (e.g. `prgmA.tib`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    ///
    /// # Arguments
    /// - `file_name` → The name of the file being analyzed
    /// - `source` → The full source text of that file
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected expression, found end of statement
    ///   --> prgmA.tib:2:3
    ///    |
    ///  2 | 1+
    ///    |   ^
    /// ```
    pub fn render(&self, error: &TibError) -> String {
        let Span { line, column, .. } = error.span;

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // Tabs in front of the token are copied so the caret lines up.
        let indent: String = src_line
            .chars()
            .take(column)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        // At least one caret, even for zero-width "end of statement" spans.
        let width = self.source[error.span.start..error.span.end]
            .chars()
            .count()
            .max(1);
        let _ = writeln!(out, "   | {}{}", indent, "^".repeat(width));

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Renders every diagnostic, separated by blank lines.
    pub fn render_all(&self, errors: &[TibError]) -> String {
        errors
            .iter()
            .map(|e| self.render(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_sits_under_the_offending_token() {
        let source = "5\n1+*2";
        let printer = DiagnosticPrinter::new("prgmA.tib", source);
        let err = TibError::syntax_error("expected expression, found operator '*'", Span::new(4, 5, 2, 2));

        let rendered = printer.render(&err);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "error[E_SYNTAX]: expected expression, found operator '*'");
        assert_eq!(lines[1], "  --> prgmA.tib:2:3");
        assert_eq!(lines[3], "  2 | 1+*2");
        assert_eq!(lines[4], "   |   ^");
    }

    #[test]
    fn caret_follows_tabs_in_the_source_line() {
        let source = "\t\t1+*2";
        let printer = DiagnosticPrinter::new("tabs.tib", source);
        let err = TibError::syntax_error("expected expression, found operator '*'", Span::new(4, 5, 1, 4));

        let rendered = printer.render(&err);
        let caret_line = rendered.lines().nth(4).unwrap();

        assert_eq!(caret_line, "   | \t\t  ^");
    }

    #[test]
    fn all_diagnostics_are_separated_by_blank_lines() {
        let source = "$\n1+";
        let printer = DiagnosticPrinter::new("x.tib", source);
        let errors = [
            TibError::unrecognized_character('$', Span::new(0, 1, 1, 0)),
            TibError::syntax_error("expected expression, found end of statement", Span::point(4, 2, 2)),
        ];

        let rendered = printer.render_all(&errors);

        assert_eq!(rendered.matches("error[").count(), 2);
        assert!(rendered.contains("^\n\nerror[E_SYNTAX]"));
    }

    #[test]
    fn help_follows_the_snippet() {
        let printer = DiagnosticPrinter::new("x.tib", ".");
        let err = TibError::unrecognized_character('.', Span::new(0, 1, 1, 0))
            .with_help("a decimal point needs at least one digit next to it");

        assert!(printer
            .render(&err)
            .ends_with("help: a decimal point needs at least one digit next to it\n"));
    }
}
