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

/// The scanner itself:
/// - `Lexer` (lazy token iterator)
/// - `tokenize(source, grammar)` convenience entry point
pub mod lexer;

/// Token kinds and the immutable `Token` value.
pub mod token;

/// Command and function registries, named variables.
pub mod keywords;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
