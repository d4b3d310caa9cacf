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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * The operator precedence ladder, held as data.
 *
 * The calculator defines a flat, fourteen step ladder (highest binds
 * tightest):
 *
 *   values > grouping > functions > postfix > exponentiation > negation
 *   > stats > multiplicative > additive > comparison > and > or
 *   > conversions > store
 *
 * The expression parser never names an operator. It asks this table
 * "is this lexeme an infix/prefix/postfix operator, and at which level?"
 * and climbs accordingly, so new operators slot in by registration.
 *
 * ==========================================================================
 */

use serde::Serialize;

/// One rung of the precedence ladder. Larger binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Precedence {
    Store = 1,
    Conversion = 2,
    Or = 3,
    And = 4,
    Comparison = 5,
    Additive = 6,
    Multiplicative = 7,
    Stats = 8,
    Negation = 9,
    Exponentiation = 10,
    Postfix = 11,
    Function = 12,
    Grouping = 13,
    Value = 14,
}

impl Precedence {
    /// Every level, lowest first.
    pub const LADDER: [Precedence; 14] = [
        Precedence::Store,
        Precedence::Conversion,
        Precedence::Or,
        Precedence::And,
        Precedence::Comparison,
        Precedence::Additive,
        Precedence::Multiplicative,
        Precedence::Stats,
        Precedence::Negation,
        Precedence::Exponentiation,
        Precedence::Postfix,
        Precedence::Function,
        Precedence::Grouping,
        Precedence::Value,
    ];

    /// Numeric binding power of the level.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// The lowest level; parsing a full expression starts here.
    pub fn lowest() -> Self {
        Precedence::Store
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Associativity {
    Left,
    Right,
}

/// Where an operator sits relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorDef {
    pub symbol: String,
    pub fixity: Fixity,
    pub precedence: Precedence,
    pub associativity: Associativity,
}

impl OperatorDef {
    /// Left-associative binary operator.
    pub fn infix(symbol: impl Into<String>, precedence: Precedence) -> Self {
        Self {
            symbol: symbol.into(),
            fixity: Fixity::Infix,
            precedence,
            associativity: Associativity::Left,
        }
    }

    pub fn prefix(symbol: impl Into<String>, precedence: Precedence) -> Self {
        Self {
            symbol: symbol.into(),
            fixity: Fixity::Prefix,
            precedence,
            associativity: Associativity::Right,
        }
    }

    pub fn postfix(symbol: impl Into<String>, precedence: Precedence) -> Self {
        Self {
            symbol: symbol.into(),
            fixity: Fixity::Postfix,
            precedence,
            associativity: Associativity::Left,
        }
    }

    pub fn with_associativity(mut self, associativity: Associativity) -> Self {
        self.associativity = associativity;
        self
    }

    /// Minimum binding power for the right operand of an infix operator.
    ///
    /// Left-associative operators demand a strictly tighter right operand,
    /// which is what folds `a - b - c` into `(a - b) - c`.
    pub fn right_binding(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence.level() + 1,
            Associativity::Right => self.precedence.level(),
        }
    }
}

/// Ordered table of operator definitions.
///
/// The same symbol may appear once per fixity (`-` is both additive infix
/// and prefix negation).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperatorTable {
    operators: Vec<OperatorDef>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The calculator's operators.
    ///
    /// The stats, conversion and postfix levels exist on the ladder but
    /// carry no default symbol; they are reached through `register`.
    pub fn calculator() -> Self {
        let mut table = Self::new();

        table.register(OperatorDef::infix("->", Precedence::Store));
        table.register(OperatorDef::infix("→", Precedence::Store));

        table.register(OperatorDef::infix("or", Precedence::Or));
        table.register(OperatorDef::infix("xor", Precedence::Or));

        table.register(OperatorDef::infix("and", Precedence::And));

        for symbol in ["=", "!=", "<", ">", "<=", ">="] {
            table.register(OperatorDef::infix(symbol, Precedence::Comparison));
        }

        table.register(OperatorDef::infix("+", Precedence::Additive));
        table.register(OperatorDef::infix("-", Precedence::Additive));

        table.register(OperatorDef::infix("*", Precedence::Multiplicative));
        table.register(OperatorDef::infix("/", Precedence::Multiplicative));

        // `--` is the calculator's negative sign typed in ASCII
        table.register(OperatorDef::prefix("-", Precedence::Negation));
        table.register(OperatorDef::prefix("--", Precedence::Negation));

        table.register(OperatorDef::infix("^", Precedence::Exponentiation));

        table
    }

    /// Adds an operator, replacing an entry with the same symbol and fixity.
    pub fn register(&mut self, def: OperatorDef) {
        match self
            .operators
            .iter_mut()
            .find(|op| op.symbol == def.symbol && op.fixity == def.fixity)
        {
            Some(existing) => *existing = def,
            None => self.operators.push(def),
        }
    }

    pub fn lookup(&self, symbol: &str, fixity: Fixity) -> Option<&OperatorDef> {
        self.operators
            .iter()
            .find(|op| op.symbol == symbol && op.fixity == fixity)
    }

    pub fn infix(&self, symbol: &str) -> Option<&OperatorDef> {
        self.lookup(symbol, Fixity::Infix)
    }

    pub fn prefix(&self, symbol: &str) -> Option<&OperatorDef> {
        self.lookup(symbol, Fixity::Prefix)
    }

    pub fn postfix(&self, symbol: &str) -> Option<&OperatorDef> {
        self.lookup(symbol, Fixity::Postfix)
    }

    /// Every distinct symbol, for the lexer's longest-match scan.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.symbol.as_str())
    }

    /// All operators on a level.
    pub fn at_level(&self, precedence: Precedence) -> impl Iterator<Item = &OperatorDef> {
        self.operators
            .iter()
            .filter(move |op| op.precedence == precedence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_strictly_increasing() {
        for pair in Precedence::LADDER.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Precedence::Store.level(), 1);
        assert_eq!(Precedence::Value.level(), 14);
    }

    #[test]
    fn minus_is_both_additive_and_negation() {
        let table = OperatorTable::calculator();

        assert_eq!(table.infix("-").unwrap().precedence, Precedence::Additive);
        assert_eq!(table.prefix("-").unwrap().precedence, Precedence::Negation);
        assert!(table.postfix("-").is_none());
    }

    #[test]
    fn double_dash_is_prefix_only() {
        let table = OperatorTable::calculator();

        assert_eq!(table.prefix("--").unwrap().precedence, Precedence::Negation);
        assert!(table.infix("--").is_none());
    }

    #[test]
    fn left_associative_operators_bind_right_operand_tighter() {
        let table = OperatorTable::calculator();
        let minus = table.infix("-").unwrap();

        assert_eq!(minus.right_binding(), Precedence::Additive.level() + 1);
    }

    #[test]
    fn unresolved_levels_start_empty() {
        let table = OperatorTable::calculator();

        assert_eq!(table.at_level(Precedence::Stats).count(), 0);
        assert_eq!(table.at_level(Precedence::Conversion).count(), 0);
        assert_eq!(table.at_level(Precedence::Postfix).count(), 0);
    }
}
