// Dweve ZCONF - Monitoring Configuration Expression Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Position-based, restartable recognizers for the configuration micro-languages.
//!
//! Every parser in this module implements [`Parser`]: it is handed a source
//! string and a byte offset and reports what it recognized starting exactly at
//! that offset. Parsers never allocate diagnostics or return `Err` on malformed
//! input; a mismatch is simply [`ParseStatus::Fail`] with the furthest position
//! reached recorded in [`ParseResult::last_pos`].
//!
//! # Module Structure
//!
//! - [`scan`] - character classes and token-start sets
//! - [`ip`] - IPv4, IPv6 and the combined IP parser
//! - [`macros`] - `{MACRO}`, `{$USER.MACRO}` and `{#LLD.MACRO}` references
//! - [`item_key`] - `key[param,...]` with quoting and nested lists
//! - [`function_macro`] - `{host:key.func(args)}` trigger fragments
//! - [`expression`] - token scanning over whole trigger expressions
//!
//! # Examples
//!
//! ```
//! use zconf_core::parser::{ItemKeyParser, ParseStatus, Parser};
//!
//! let result = ItemKeyParser::new().parse("{host:net.tcp.service[ntp].last(0)}", 6);
//! assert_eq!(result.status(), ParseStatus::SuccessContinue);
//! assert_eq!(result.matched(), "net.tcp.service[ntp]");
//! assert_eq!(result.value().map(|k| k.id()), Some("net.tcp.service"));
//! ```

pub mod expression;
pub mod function_macro;
pub mod ip;
pub mod item_key;
pub mod macros;
pub mod scan;

pub use expression::{ExpressionScanner, Token, TokenValue};
pub use function_macro::{FunctionMacro, FunctionMacroOptions, FunctionMacroParser, HostRef, KeyDialect};
pub use ip::{IpConfig, IpParser, Ipv4Parser, Ipv6Parser};
pub use item_key::ItemKeyParser;
pub use macros::{Macro, MacroParser};
pub use scan::TokenSet;

/// Outcome of a single parse attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    /// The source at the given offset does not match the grammar.
    Fail,
    /// The match extends to the end of the source.
    Success,
    /// The match ended before the end of the source; a sibling token may follow.
    SuccessContinue,
}

/// Result of a parse attempt.
///
/// The matched text borrows from the caller's source. The typed value is
/// present exactly when the status is not [`ParseStatus::Fail`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<'a, T> {
    status: ParseStatus,
    start: usize,
    matched: &'a str,
    last_pos: usize,
    value: Option<T>,
}

impl<'a, T> ParseResult<'a, T> {
    /// Builds a failed result that advanced as far as `last_pos`.
    pub(crate) fn fail(start: usize, last_pos: usize) -> Self {
        Self {
            status: ParseStatus::Fail,
            start,
            matched: "",
            last_pos,
            value: None,
        }
    }

    /// Builds a successful result covering `source[start..end]`.
    ///
    /// The status is [`ParseStatus::Success`] when `end` is the end of the
    /// source and [`ParseStatus::SuccessContinue`] otherwise.
    pub(crate) fn matched_span(source: &'a str, start: usize, end: usize, value: T) -> Self {
        let status = if end == source.len() {
            ParseStatus::Success
        } else {
            ParseStatus::SuccessContinue
        };
        Self {
            status,
            start,
            matched: &source[start..end],
            last_pos: end,
            value: Some(value),
        }
    }

    /// Returns the outcome of the attempt.
    #[inline]
    pub fn status(&self) -> ParseStatus {
        self.status
    }

    /// Returns `true` for both [`ParseStatus::Success`] and [`ParseStatus::SuccessContinue`].
    #[inline]
    pub fn is_match(&self) -> bool {
        self.status != ParseStatus::Fail
    }

    /// Returns `true` if the match consumed the rest of the source.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == ParseStatus::Success
    }

    /// Returns `true` if nothing was recognized.
    #[inline]
    pub fn is_fail(&self) -> bool {
        self.status == ParseStatus::Fail
    }

    /// Byte offset the attempt started at.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the matched text in bytes (0 on failure).
    #[inline]
    pub fn length(&self) -> usize {
        self.matched.len()
    }

    /// Byte offset just past the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.matched.len()
    }

    /// The matched text (empty on failure).
    #[inline]
    pub fn matched(&self) -> &'a str {
        self.matched
    }

    /// Furthest byte offset the parser reached.
    ///
    /// On failure this points at the first byte that could not be accepted,
    /// which is what "expected token at column N" diagnostics report.
    #[inline]
    pub fn last_pos(&self) -> usize {
        self.last_pos
    }

    /// The parsed value, if the attempt matched.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the result and returns the parsed value, if any.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Maps the parsed value, keeping status and span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<'a, U> {
        ParseResult {
            status: self.status,
            start: self.start,
            matched: self.matched,
            last_pos: self.last_pos,
            value: self.value.map(f),
        }
    }
}

/// A restartable recognizer.
///
/// Implementations hold only construction-time configuration, so one instance
/// can be shared between threads and reused for any number of calls.
pub trait Parser {
    /// Structured value produced on a match.
    type Output;

    /// Attempts to recognize a token starting exactly at byte offset `pos`.
    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, Self::Output>;
}

/// Returns `true` if `pos` is a position a parser may start from.
#[inline]
pub(crate) fn valid_start(source: &str, pos: usize) -> bool {
    pos <= source.len() && source.is_char_boundary(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_span_status() {
        let full: ParseResult<'_, ()> = ParseResult::matched_span("abc", 0, 3, ());
        assert_eq!(full.status(), ParseStatus::Success);
        assert!(full.is_complete());

        let partial: ParseResult<'_, ()> = ParseResult::matched_span("abc", 0, 2, ());
        assert_eq!(partial.status(), ParseStatus::SuccessContinue);
        assert_eq!(partial.matched(), "ab");
        assert_eq!(partial.end(), 2);
    }

    #[test]
    fn test_fail_carries_last_pos() {
        let result: ParseResult<'_, ()> = ParseResult::fail(2, 7);
        assert!(result.is_fail());
        assert!(!result.is_match());
        assert_eq!(result.start(), 2);
        assert_eq!(result.last_pos(), 7);
        assert_eq!(result.length(), 0);
        assert!(result.value().is_none());
    }

    #[test]
    fn test_map_keeps_span() {
        let result = ParseResult::matched_span("12", 0, 1, 1u8).map(|v| v + 1);
        assert_eq!(result.value(), Some(&2));
        assert_eq!(result.matched(), "1");
    }

    #[test]
    fn test_valid_start() {
        assert!(valid_start("abc", 0));
        assert!(valid_start("abc", 3));
        assert!(!valid_start("abc", 4));
        assert!(!valid_start("é", 1));
    }
}
