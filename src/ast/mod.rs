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

/// Expression nodes and the precedence invariant check.
pub mod expr;

/// Statements, commands and the `Program` root.
pub mod stmt;

/// Indented tree rendering for the CLI.
pub mod display;

pub use display::render_tree;
pub use expr::{Expr, LiteralKind};
pub use stmt::{Command, Program, Stmt, StmtKind};
