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

//! Command and function registries.
//!
//! Both tables are plain data consulted by the lexer (to recognize the
//! keyword) and by the statement/expression parser (to check argument
//! shape). A standard-library layer grows the language by registering new
//! entries; neither the lexer nor the parser changes.

use serde::Serialize;

/// Variables spelled with more than one character.
///
/// Single uppercase letters are recognized by the lexer directly.
pub const NAMED_VARIABLES: &[&str] = &["Ans", "Theta", "θ"];

/// How many argument expressions a command or function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArgShape {
    /// No arguments at all (`Then`, `Else`, `End`).
    None,

    /// Exactly `n` arguments (`If cond`).
    Exactly(usize),

    /// Between `min` and `max` arguments, inclusive.
    Between(usize, usize),

    /// `n` or more arguments (`Disp`).
    AtLeast(usize),

    /// A single label name instead of expressions (`Lbl A`, `Goto 12`).
    ///
    /// The lexer reads the name as one `TokenKind::Label` token, so `AB`
    /// is one label and not two variables.
    Label,
}

impl ArgShape {
    /// Returns `true` if `count` arguments satisfy the shape.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            ArgShape::None => count == 0,
            ArgShape::Exactly(n) => count == n,
            ArgShape::Between(min, max) => count >= min && count <= max,
            ArgShape::AtLeast(n) => count >= n,
            ArgShape::Label => false,
        }
    }

    /// Returns `true` if an empty argument list is valid.
    pub fn allows_empty(self) -> bool {
        self.accepts(0)
    }

    /// Human-readable arity for error messages.
    pub fn describe(self) -> String {
        match self {
            ArgShape::None => "no arguments".to_string(),
            ArgShape::Exactly(1) => "1 argument".to_string(),
            ArgShape::Exactly(n) => format!("{} arguments", n),
            ArgShape::Between(min, max) => format!("{} to {} arguments", min, max),
            ArgShape::AtLeast(n) => format!("at least {} arguments", n),
            ArgShape::Label => "a label".to_string(),
        }
    }
}

/// A registered calculator command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDef {
    /// Exact keyword text. A trailing `(` (`For(`) is part of the keyword
    /// and lets the argument list be closed with an optional `)`.
    pub keyword: String,
    pub args: ArgShape,
}

impl CommandDef {
    pub fn new(keyword: impl Into<String>, args: ArgShape) -> Self {
        Self {
            keyword: keyword.into(),
            args,
        }
    }

    /// `true` for `Lbl`-style commands whose operand is a label name.
    pub fn takes_label(&self) -> bool {
        self.args == ArgShape::Label
    }

    /// `true` for keywords like `For(` that open a parenthesis.
    pub fn opens_paren(&self) -> bool {
        self.keyword.ends_with('(')
    }
}

/// Keyword → command descriptor lookup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandTable {
    commands: Vec<CommandDef>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands of the calculator surface.
    ///
    /// `Disp` takes any number of comma separated expressions (none is
    /// fine). The control-flow keywords are registered with their
    /// argument shapes only; matching `If`/`End` pairs is an execution
    /// concern. `Lbl` and `Goto` take a label name.
    pub fn calculator() -> Self {
        let mut table = Self::new();

        table.register(CommandDef::new("Disp", ArgShape::AtLeast(0)));
        table.register(CommandDef::new("If", ArgShape::Exactly(1)));
        table.register(CommandDef::new("Then", ArgShape::None));
        table.register(CommandDef::new("Else", ArgShape::None));
        table.register(CommandDef::new("While", ArgShape::Exactly(1)));
        table.register(CommandDef::new("Repeat", ArgShape::Exactly(1)));
        table.register(CommandDef::new("For(", ArgShape::Between(3, 4)));
        table.register(CommandDef::new("End", ArgShape::None));
        table.register(CommandDef::new("Lbl", ArgShape::Label));
        table.register(CommandDef::new("Goto", ArgShape::Label));

        table
    }

    /// Adds a command, replacing an existing entry with the same keyword.
    pub fn register(&mut self, def: CommandDef) {
        match self.commands.iter_mut().find(|c| c.keyword == def.keyword) {
            Some(existing) => *existing = def,
            None => self.commands.push(def),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.keyword == keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }
}

/// A registered built-in function. The name always ends in `(`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub args: ArgShape,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, args: ArgShape) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionTable {
    functions: Vec<FunctionDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator() -> Self {
        let mut table = Self::new();

        table.register(FunctionDef::new("not(", ArgShape::Exactly(1)));
        table.register(FunctionDef::new("abs(", ArgShape::Exactly(1)));
        table.register(FunctionDef::new("int(", ArgShape::Exactly(1)));
        table.register(FunctionDef::new("sqrt(", ArgShape::Exactly(1)));
        table.register(FunctionDef::new("min(", ArgShape::Exactly(2)));
        table.register(FunctionDef::new("max(", ArgShape::Exactly(2)));

        table
    }

    pub fn register(&mut self, def: FunctionDef) {
        match self.functions.iter_mut().find(|f| f.name == def.name) {
            Some(existing) => *existing = def,
            None => self.functions.push(def),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions.iter()
    }
}
