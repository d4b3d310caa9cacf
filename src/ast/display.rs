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

use crate::ast::{Expr, LiteralKind, Program, StmtKind};

/// Renders a program as an indented tree.
///
/// # Output Example
/// ```text
/// Program (2 statements)
///   Expression @ 1:1
///     Binary +
///       Literal Integer 2
///       Binary *
///         Literal Integer 3
///         Literal Integer 4
///   Command Disp @ 2:1
/// ```
pub fn render_tree(program: &Program) -> String {
    let mut out = String::new();

    let noun = if program.len() == 1 { "statement" } else { "statements" };
    let _ = writeln!(out, "Program ({} {})", program.len(), noun);

    for stmt in program {
        match &stmt.kind {
            StmtKind::Command(command) => {
                let _ = writeln!(out, "  Command {} @ {}", command.name, stmt.span);
                if let Some(label) = &command.label {
                    let _ = writeln!(out, "    Label {}", label);
                }
                for arg in &command.arguments {
                    render_expr(&mut out, arg, 2);
                }
            }
            StmtKind::Expression(expr) => {
                let _ = writeln!(out, "  Expression @ {}", stmt.span);
                render_expr(&mut out, expr, 2);
            }
            StmtKind::Empty => {
                let _ = writeln!(out, "  Empty @ {}", stmt.span);
            }
            StmtKind::Invalid(text) => {
                let _ = writeln!(out, "  Invalid {:?} @ {}", text, stmt.span);
            }
        }
    }

    out
}

fn render_expr(out: &mut String, expr: &Expr, depth: usize) {
    let indent = "  ".repeat(depth);

    // writing into a String cannot fail
    let _ = match expr {
        Expr::Literal { kind, lexeme } => {
            let kind = match kind {
                LiteralKind::Integer => "Integer",
                LiteralKind::Float => "Float",
            };
            writeln!(out, "{}Literal {} {}", indent, kind, lexeme)
        }
        Expr::Variable(name) => writeln!(out, "{}Variable {}", indent, name),
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            let _ = writeln!(out, "{}Binary {}", indent, operator);
            render_expr(out, left, depth + 1);
            render_expr(out, right, depth + 1);
            Ok(())
        }
        Expr::Unary { operator, operand } => {
            let _ = writeln!(out, "{}Unary {}", indent, operator);
            render_expr(out, operand, depth + 1);
            Ok(())
        }
        Expr::Postfix { operator, operand } => {
            let _ = writeln!(out, "{}Postfix {}", indent, operator);
            render_expr(out, operand, depth + 1);
            Ok(())
        }
        Expr::Call {
            function,
            arguments,
        } => {
            let _ = writeln!(out, "{}Call {}", indent, function);
            for arg in arguments {
                render_expr(out, arg, depth + 1);
            }
            Ok(())
        }
        Expr::Grouping(inner) => {
            let _ = writeln!(out, "{}Grouping", indent);
            render_expr(out, inner, depth + 1);
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;
    use crate::span::Span;

    #[test]
    fn tree_is_indented_by_depth() {
        let program = Program::new(vec![Stmt::new(
            StmtKind::Expression(Expr::binary(
                Expr::integer("2"),
                "+",
                Expr::integer("3"),
            )),
            Span::new(0, 3, 1, 0),
        )]);

        let expected = "Program (1 statement)\n  Expression @ 1:1\n    Binary +\n      Literal Integer 2\n      Literal Integer 3\n";
        assert_eq!(render_tree(&program), expected);
    }
}
