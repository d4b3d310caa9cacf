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

//! Syntax analyzer for a TI-BASIC style calculator language.
//!
//! ```rust
//! let output = tib::parse("2+3*4:Disp");
//!
//! assert!(output.is_ok());
//! let first = output.program.statements[0].as_expression().unwrap();
//! assert_eq!(first.to_sexpr(), "(+ 2 (* 3 4))");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::{ErrorKind, TibError};
pub use grammar::Grammar;
pub use parser::{parse, parse_with, ParseOutput};
pub use span::Span;
