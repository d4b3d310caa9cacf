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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(source)` / `parse_with(source, grammar)` entry points
/// - Builds the `Program` and collects diagnostics
pub mod parser;

/// Splits the token stream at terminators.
pub mod segmenter;

/// Statement-level parsing:
/// - command invocations
/// - expression statements
/// - empty statements
pub mod statements;

/// Expression-level parsing (precedence climbing).
pub mod expressions;

/// The operator precedence ladder and operator table.
pub mod precedence;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - argument lists and closing parentheses
pub mod helpers;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, parse_with, ParseOutput, Parser};
