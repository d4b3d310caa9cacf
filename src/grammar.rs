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

use crate::lexer::keywords::{CommandTable, FunctionTable, NAMED_VARIABLES};
use crate::lexer::token::TokenKind;
use crate::parser::precedence::OperatorTable;
use serde::Serialize;

/// Everything the analyzer consults but does not own: the command
/// registry, the function registry and the operator precedence table.
///
/// `Grammar::default()` is the calculator surface. Callers extend it by
/// registering entries on the public tables before parsing:
///
/// ```rust
/// use tib::Grammar;
/// use tib::lexer::keywords::{ArgShape, CommandDef};
///
/// let mut grammar = Grammar::default();
/// grammar.commands.register(CommandDef::new("ClrHome", ArgShape::None));
///
/// let output = tib::parse_with("ClrHome", &grammar);
/// assert!(output.diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Grammar {
    pub commands: CommandTable,
    pub functions: FunctionTable,
    pub operators: OperatorTable,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            commands: CommandTable::calculator(),
            functions: FunctionTable::calculator(),
            operators: OperatorTable::calculator(),
        }
    }
}

impl Grammar {
    /// A grammar with empty tables: only literals, variables and
    /// parentheses are recognized.
    pub fn empty() -> Self {
        Self {
            commands: CommandTable::new(),
            functions: FunctionTable::new(),
            operators: OperatorTable::new(),
        }
    }

    /// Every fixed spelling the lexer can match, longest first.
    ///
    /// Ordering by length is what makes the lexer's scan a longest match:
    /// `Disp` is tried before the variable `D`, `<=` before `<`, `->`
    /// before `-`.
    pub fn lexicon(&self) -> Vec<(&str, TokenKind)> {
        let mut words: Vec<(&str, TokenKind)> = Vec::new();

        words.extend(self.commands.iter().map(|c| (c.keyword.as_str(), TokenKind::Command)));
        words.extend(self.functions.iter().map(|f| (f.name.as_str(), TokenKind::Function)));
        words.extend(self.operators.symbols().map(|s| (s, TokenKind::Operator)));
        words.extend(NAMED_VARIABLES.iter().map(|v| (*v, TokenKind::Variable)));
        words.push(("(", TokenKind::LeftParen));
        words.push((")", TokenKind::RightParen));
        words.push((",", TokenKind::Comma));

        words.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        words.dedup_by(|a, b| a.0 == b.0);

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_longest_first() {
        let grammar = Grammar::default();
        let lexicon = grammar.lexicon();

        for pair in lexicon.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }

    #[test]
    fn shared_operator_symbols_appear_once() {
        let grammar = Grammar::default();
        let minus = grammar
            .lexicon()
            .into_iter()
            .filter(|(word, _)| *word == "-")
            .count();

        assert_eq!(minus, 1);
    }
}
