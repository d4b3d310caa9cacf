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

/// A region of program source.
///
/// Offsets are **byte** offsets into the source buffer so a span can be
/// sliced straight out of the source (`&source[span.start..span.end]`).
/// `line` and `column` describe where the region *starts* and exist only
/// for human-facing diagnostics.
///
/// # Fields
/// - `start`  → inclusive byte offset
/// - `end`    → exclusive byte offset
/// - `line`   → 1-based line number
/// - `column` → 0-based column, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Zero-width span at a position (used for "end of statement").
    pub fn point(offset: usize, line: usize, column: usize) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns a span running from the start of `self` to the end of `other`.
    ///
    /// Line/column are taken from whichever span starts first.
    pub fn to(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };

        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joining_spans_keeps_the_earliest_position() {
        let a = Span::new(4, 6, 2, 1);
        let b = Span::new(0, 2, 1, 0);

        let joined = a.to(b);
        assert_eq!(joined.start, 0);
        assert_eq!(joined.end, 6);
        assert_eq!(joined.line, 1);
        assert_eq!(joined.column, 0);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Span::new(0, 1, 3, 0).to_string(), "3:1");
    }
}
