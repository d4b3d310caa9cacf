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

use crate::parser::precedence::{Associativity, OperatorTable, Precedence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiteralKind {
    Integer,
    Float,
}

/// An expression tree.
///
/// Children are exclusively owned (`Box` / `Vec`), so a tree is acyclic
/// and no node has two parents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Numeric literal, kept as its source text.
    Literal { kind: LiteralKind, lexeme: String },

    Variable(String),

    Binary {
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },

    /// Prefix operator (negation).
    Unary {
        operator: String,
        operand: Box<Expr>,
    },

    Postfix {
        operator: String,
        operand: Box<Expr>,
    },

    /// Built-in function application; `function` includes the `(`.
    Call {
        function: String,
        arguments: Vec<Expr>,
    },

    Grouping(Box<Expr>),
}

impl Expr {
    pub fn integer(lexeme: impl Into<String>) -> Self {
        Expr::Literal {
            kind: LiteralKind::Integer,
            lexeme: lexeme.into(),
        }
    }

    pub fn float(lexeme: impl Into<String>) -> Self {
        Expr::Literal {
            kind: LiteralKind::Float,
            lexeme: lexeme.into(),
        }
    }

    pub fn binary(left: Expr, operator: impl Into<String>, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    /// Binding power of this node as a child of another operator.
    ///
    /// Operators report the level they were registered at; atoms bind as
    /// tightly as the ladder allows. Operators missing from `table` report
    /// the lowest level.
    pub fn binding(&self, table: &OperatorTable) -> u8 {
        match self {
            Expr::Literal { .. } | Expr::Variable(_) => Precedence::Value.level(),
            Expr::Grouping(_) => Precedence::Grouping.level(),
            Expr::Call { .. } => Precedence::Function.level(),
            Expr::Binary { operator, .. } => table
                .infix(operator)
                .map_or(0, |op| op.precedence.level()),
            Expr::Unary { operator, .. } => table
                .prefix(operator)
                .map_or(0, |op| op.precedence.level()),
            Expr::Postfix { operator, .. } => table
                .postfix(operator)
                .map_or(0, |op| op.precedence.level()),
        }
    }

    /// Checks the tree-wide precedence invariant.
    ///
    /// No operator node has an un-grouped child that binds more loosely
    /// than its position allows. For a left-associative infix node the
    /// left child may sit on the same level and the right child must bind
    /// strictly tighter; right-associative nodes mirror that.
    pub fn respects_precedence(&self, table: &OperatorTable) -> bool {
        match self {
            Expr::Literal { .. } | Expr::Variable(_) => true,
            Expr::Grouping(inner) => inner.respects_precedence(table),
            Expr::Call { arguments, .. } => {
                arguments.iter().all(|arg| arg.respects_precedence(table))
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let def = match table.infix(operator) {
                    Some(def) => def,
                    None => return false,
                };
                let level = def.precedence.level();
                let (left_min, right_min) = match def.associativity {
                    Associativity::Left => (level, level + 1),
                    Associativity::Right => (level + 1, level),
                };

                // A prefix operator on the right (`2^-3`) or a postfix
                // operator on the left cannot be regrouped by the parser.
                let left_ok = matches!(**left, Expr::Postfix { .. })
                    || left.binding(table) >= left_min;
                let right_ok = matches!(**right, Expr::Unary { .. })
                    || right.binding(table) >= right_min;

                left_ok
                    && right_ok
                    && left.respects_precedence(table)
                    && right.respects_precedence(table)
            }
            Expr::Unary { operator, operand } => match table.prefix(operator) {
                Some(def) => {
                    operand.binding(table) >= def.precedence.level()
                        && operand.respects_precedence(table)
                }
                None => false,
            },
            Expr::Postfix { operator, operand } => match table.postfix(operator) {
                Some(def) => {
                    operand.binding(table) >= def.precedence.level()
                        && operand.respects_precedence(table)
                }
                None => false,
            },
        }
    }

    /// Fully parenthesized prefix form, handy for checking tree shape.
    ///
    /// ```text
    /// 2 + 3 * 4     →  (+ 2 (* 3 4))
    /// -(1)          →  (- (group 1))
    /// not(A)        →  (call not A)
    /// ```
    pub fn to_sexpr(&self) -> String {
        match self {
            Expr::Literal { lexeme, .. } => lexeme.clone(),
            Expr::Variable(name) => name.clone(),
            Expr::Binary {
                left,
                operator,
                right,
            } => format!("({} {} {})", operator, left.to_sexpr(), right.to_sexpr()),
            Expr::Unary { operator, operand } => format!("({} {})", operator, operand.to_sexpr()),
            Expr::Postfix { operator, operand } => {
                format!("({} {})", operand.to_sexpr(), operator)
            }
            Expr::Call {
                function,
                arguments,
            } => {
                let mut out = format!("(call {}", function.trim_end_matches('('));
                for arg in arguments {
                    out.push(' ');
                    out.push_str(&arg.to_sexpr());
                }
                out.push(')');
                out
            }
            Expr::Grouping(inner) => format!("(group {})", inner.to_sexpr()),
        }
    }
}

impl fmt::Display for Expr {
    /// Writes the expression back as source text.
    ///
    /// Parentheses appear only where the tree holds a `Grouping`, so the
    /// output of a parsed expression reparses to the same tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { lexeme, .. } => f.write_str(lexeme),
            Expr::Variable(name) => f.write_str(name),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "{} {} {}", left, operator, right),
            Expr::Unary { operator, operand } => {
                let operand = operand.to_string();

                // `-` then `-2` must not run together into `--`
                if operator.ends_with('-') && operand.starts_with('-') {
                    write!(f, "{} {}", operator, operand)
                } else {
                    write!(f, "{}{}", operator, operand)
                }
            }
            Expr::Postfix { operator, operand } => write!(f, "{}{}", operand, operator),
            Expr::Call {
                function,
                arguments,
            } => {
                f.write_str(function)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Expr::Grouping(inner) => write!(f, "({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexpr_shows_nesting() {
        let expr = Expr::binary(
            Expr::integer("2"),
            "+",
            Expr::binary(Expr::integer("3"), "*", Expr::integer("4")),
        );

        assert_eq!(expr.to_sexpr(), "(+ 2 (* 3 4))");
        assert_eq!(expr.to_string(), "2 + 3 * 4");
    }

    #[test]
    fn mis_nested_tree_breaks_the_invariant() {
        let table = OperatorTable::calculator();

        // (2 + 3) * 4 without a Grouping node
        let bad = Expr::binary(
            Expr::binary(Expr::integer("2"), "+", Expr::integer("3")),
            "*",
            Expr::integer("4"),
        );
        assert!(!bad.respects_precedence(&table));

        let grouped = Expr::binary(
            Expr::Grouping(Box::new(Expr::binary(
                Expr::integer("2"),
                "+",
                Expr::integer("3"),
            ))),
            "*",
            Expr::integer("4"),
        );
        assert!(grouped.respects_precedence(&table));
    }

    #[test]
    fn right_nested_same_level_breaks_left_associativity() {
        let table = OperatorTable::calculator();

        // 8 - (3 - 2) without a Grouping node
        let right_nested = Expr::binary(
            Expr::integer("8"),
            "-",
            Expr::binary(Expr::integer("3"), "-", Expr::integer("2")),
        );
        assert!(!right_nested.respects_precedence(&table));
    }

    #[test]
    fn stacked_negations_stay_apart() {
        let twice = Expr::unary("-", Expr::unary("-", Expr::integer("2")));
        assert_eq!(twice.to_string(), "- -2");

        let double_dash = Expr::unary("--", Expr::integer("2"));
        assert_eq!(double_dash.to_string(), "--2");
    }

    #[test]
    fn call_renders_with_its_paren() {
        let call = Expr::Call {
            function: "max(".to_string(),
            arguments: vec![Expr::integer("1"), Expr::Variable("A".to_string())],
        };

        assert_eq!(call.to_string(), "max(1,A)");
        assert_eq!(call.to_sexpr(), "(call max 1 A)");
    }
}
