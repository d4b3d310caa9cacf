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

use log::trace;

use crate::error::TibError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::Span;

/// The tokens of one statement.
///
/// The terminator that closed the segment is not part of `tokens`; its
/// position is `end`.
#[derive(Debug, Clone)]
pub struct Segment {
    pub tokens: Vec<Token>,

    /// From the first token (or error) up to the terminator.
    pub span: Span,

    /// Zero-width position of the closing terminator, or of end of input.
    pub end: Span,

    /// First lexical error inside the segment, if any.
    pub error: Option<TibError>,
}

impl Segment {
    /// `true` when the segment holds no tokens and no error.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty() && self.error.is_none()
    }
}

/// Splits the token stream into terminator-delimited segments.
///
/// # Rules
/// - Every terminator closes a segment, even an empty one, so `5::6`
///   gives three segments and blank lines are kept
/// - The run after the last terminator is produced only if it holds
///   something
/// - A lexical error is recorded on the current segment and the lexer is
///   moved to the next terminator; the segments after it are unaffected
pub struct Segmenter<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Segmenter<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer, done: false }
    }

    fn close(
        tokens: Vec<Token>,
        start: Option<Span>,
        end: Span,
        error: Option<TibError>,
    ) -> Segment {
        let end = Span::point(end.start, end.line, end.column);
        let span = match start {
            Some(first) => first.to(end),
            None => end,
        };

        Segment {
            tokens,
            span,
            end,
            error,
        }
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.done {
            return None;
        }

        let mut tokens = Vec::new();
        let mut start: Option<Span> = None;
        let mut error: Option<TibError> = None;

        loop {
            let token = match self.lexer.next() {
                Some(Ok(token)) => token,
                Some(Err(err)) => {
                    trace!("lexical error at {}: {}", err.span, err.message);

                    start.get_or_insert(err.span);
                    if error.is_none() {
                        error = Some(err);
                    }

                    self.lexer.recover();
                    continue;
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            match token.kind {
                TokenKind::Terminator => {
                    trace!("segment closed by terminator at {}", token.span);
                    return Some(Self::close(tokens, start, token.span, error));
                }
                TokenKind::Eof => {
                    self.done = true;

                    if tokens.is_empty() && error.is_none() {
                        return None;
                    }
                    return Some(Self::close(tokens, start, token.span, error));
                }
                _ => {
                    start.get_or_insert(token.span);
                    tokens.push(token);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn segments(source: &str) -> Vec<Segment> {
        let grammar = Grammar::default();
        Segmenter::new(Lexer::new(source, &grammar)).collect()
    }

    fn lexemes(segment: &Segment) -> Vec<&str> {
        segment.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    #[test]
    fn colon_and_newline_both_split() {
        let segs = segments("5:6\n7");

        assert_eq!(segs.len(), 3);
        assert_eq!(lexemes(&segs[0]), ["5"]);
        assert_eq!(lexemes(&segs[1]), ["6"]);
        assert_eq!(lexemes(&segs[2]), ["7"]);
    }

    #[test]
    fn empty_runs_are_kept() {
        let segs = segments("5::6");

        assert_eq!(segs.len(), 3);
        assert!(segs[1].is_blank());
    }

    #[test]
    fn leading_terminator_gives_an_empty_segment() {
        let segs = segments(":5");

        assert_eq!(segs.len(), 2);
        assert!(segs[0].is_blank());
        assert_eq!(lexemes(&segs[1]), ["5"]);
    }

    #[test]
    fn trailing_terminator_adds_nothing() {
        assert_eq!(segments("5\n").len(), 1);
        assert_eq!(segments("").len(), 0);
    }

    #[test]
    fn segment_span_ends_at_the_terminator() {
        let segs = segments("12+3 :4");

        assert_eq!(segs[0].span.start, 0);
        assert_eq!(segs[0].span.end, 5);
        assert_eq!(segs[0].end.start, 5);
    }

    #[test]
    fn lexical_error_stays_inside_its_segment() {
        let segs = segments("$ 1 2 : 5");

        assert_eq!(segs.len(), 2);
        assert!(segs[0].error.is_some());
        assert!(segs[1].error.is_none());
        assert_eq!(lexemes(&segs[1]), ["5"]);
    }
}
