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

//! Token scanning over whole trigger expressions.
//!
//! [`ExpressionScanner`] walks an expression left to right and reports every
//! token of the configured kinds. Text between tokens, including quoted
//! string literals, is skipped. A recognized token is never re-scanned, so
//! macros inside a function macro's arguments belong to the function macro.

use super::function_macro::{FunctionMacro, FunctionMacroOptions, FunctionMacroParser};
use super::ip::{IpConfig, IpParser};
use super::item_key::scan_quoted;
use super::macros::{Macro, MacroParser};
use super::scan::{is_key_char, take_while, token_starts, TokenSet};
use super::{ItemKeyParser, Parser};
use crate::key::ItemKey;
use std::net::IpAddr;

/// Parsed payload of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    FunctionMacro(FunctionMacro),
    Macro(Macro),
    ItemKey(ItemKey),
    Ip(IpAddr),
}

/// A token found by [`ExpressionScanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Exactly one kind from [`TokenSet`].
    pub kind: TokenSet,
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    pub value: TokenValue,
}

impl Token {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The token text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end()).unwrap_or("")
    }

    /// Returns `true` if `offset` lies inside the token.
    #[inline]
    pub fn covers(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// Kinds in the order they are tried at one position. Function macros win
/// over plain macros (both start with `{`) and IP literals over item keys
/// (`1.2.3.4` is both).
const PRIORITY: [TokenSet; 6] = [
    TokenSet::FUNCTION_MACRO,
    TokenSet::USER_MACRO,
    TokenSet::LLD_MACRO,
    TokenSet::MACRO,
    TokenSet::IP,
    TokenSet::ITEM_KEY,
];

/// Scans expressions for tokens.
///
/// # Examples
///
/// ```
/// use zconf_core::parser::{ExpressionScanner, FunctionMacroOptions, TokenSet};
///
/// let scanner = ExpressionScanner::new(
///     TokenSet::FUNCTION_MACRO | TokenSet::USER_MACRO,
///     FunctionMacroOptions::default(),
/// );
/// let source = "{host:agent.ping.last(0)}=0 & {$LIMIT}>1";
/// let tokens = scanner.scan(source);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text(source), "{host:agent.ping.last(0)}");
/// assert_eq!(tokens[1].kind, TokenSet::USER_MACRO);
///
/// let at = scanner.token_at(source, 33).unwrap();
/// assert_eq!(at.text(source), "{$LIMIT}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionScanner {
    kinds: TokenSet,
    function_macro: FunctionMacroParser,
    ip: IpParser,
}

impl ExpressionScanner {
    pub fn new(kinds: TokenSet, options: FunctionMacroOptions) -> Self {
        Self {
            kinds,
            function_macro: FunctionMacroParser::new(options),
            ip: IpParser::new(IpConfig::default()),
        }
    }

    /// Replaces the IP parser configuration.
    pub fn with_ip_config(mut self, config: IpConfig) -> Self {
        self.ip = IpParser::new(config);
        self
    }

    pub fn kinds(&self) -> TokenSet {
        self.kinds
    }

    /// Returns all tokens in `source`, in order.
    pub fn scan(&self, source: &str) -> Vec<Token> {
        let bytes = source.as_bytes();
        let mut tokens = Vec::new();
        let mut p = 0;
        let braces_only = !self.kinds.intersects(TokenSet::ITEM_KEY | TokenSet::IP);

        while p < bytes.len() {
            if braces_only {
                match memchr::memchr2(b'{', b'"', &bytes[p..]) {
                    Some(offset) => p += offset,
                    None => break,
                }
            }

            let b = bytes[p];
            if b == b'"' {
                p = match scan_quoted(source, p) {
                    Ok((end, _)) => end,
                    Err(_) => p + 1,
                };
                continue;
            }

            let candidates = token_starts(b).intersection(self.kinds);
            if let Some(token) = self.try_at(source, p, candidates) {
                p = token.end();
                tokens.push(token);
                continue;
            }

            // Never start a key or address in the middle of a word.
            p = if is_key_char(b) {
                take_while(bytes, p, is_key_char)
            } else {
                p + source[p..].chars().next().map_or(1, char::len_utf8)
            };
        }
        tokens
    }

    /// Returns the token covering byte `offset`, if any.
    pub fn token_at(&self, source: &str, offset: usize) -> Option<Token> {
        self.scan(source)
            .into_iter()
            .take_while(|token| token.start <= offset)
            .find(|token| token.covers(offset))
    }

    fn try_at(&self, source: &str, pos: usize, candidates: TokenSet) -> Option<Token> {
        PRIORITY
            .iter()
            .filter(|kind| candidates.contains(**kind))
            .find_map(|kind| self.parse_kind(source, pos, *kind))
    }

    fn parse_kind(&self, source: &str, pos: usize, kind: TokenSet) -> Option<Token> {
        let (len, value) = if kind == TokenSet::FUNCTION_MACRO {
            let result = self.function_macro.parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::FunctionMacro)?)
        } else if kind == TokenSet::USER_MACRO {
            let result = MacroParser::user().with_context(true).parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::Macro)?)
        } else if kind == TokenSet::LLD_MACRO {
            let result = MacroParser::lld().parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::Macro)?)
        } else if kind == TokenSet::MACRO {
            let result = MacroParser::plain().parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::Macro)?)
        } else if kind == TokenSet::IP {
            let result = self.ip.parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::Ip)?)
        } else {
            let result = ItemKeyParser::new().parse(source, pos);
            (result.length(), result.into_value().map(TokenValue::ItemKey)?)
        };

        Some(Token {
            kind,
            start: pos,
            len,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macros_only() -> ExpressionScanner {
        ExpressionScanner::new(
            TokenSet::FUNCTION_MACRO | TokenSet::MACRO | TokenSet::USER_MACRO | TokenSet::LLD_MACRO,
            FunctionMacroOptions::default(),
        )
    }

    fn texts<'a>(source: &'a str, tokens: &[Token]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text(source)).collect()
    }

    #[test]
    fn test_scan_trigger() {
        let source = "{a:k.last(0)}>{$MAX}|{#IF}=1&{TRIGGER.VALUE}=0";
        let tokens = macros_only().scan(source);
        assert_eq!(
            texts(source, &tokens),
            vec!["{a:k.last(0)}", "{$MAX}", "{#IF}", "{TRIGGER.VALUE}"]
        );
        assert_eq!(tokens[0].kind, TokenSet::FUNCTION_MACRO);
        assert_eq!(tokens[1].kind, TokenSet::USER_MACRO);
        assert_eq!(tokens[2].kind, TokenSet::LLD_MACRO);
        assert_eq!(tokens[3].kind, TokenSet::MACRO);
    }

    #[test]
    fn test_function_macro_owns_inner_macros() {
        let source = "{h:k[{#IF}].last({$P})}";
        let tokens = macros_only().scan(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].len, source.len());
    }

    #[test]
    fn test_quoted_literals_skipped() {
        let source = r#"{$A}="{$B}" and {$C}"#;
        let tokens = macros_only().scan(source);
        assert_eq!(texts(source, &tokens), vec!["{$A}", "{$C}"]);
    }

    #[test]
    fn test_unrecognized_braces_skipped() {
        let source = "{bad {$OK}";
        let tokens = macros_only().scan(source);
        assert_eq!(texts(source, &tokens), vec!["{$OK}"]);
    }

    #[test]
    fn test_ip_before_item_key() {
        let scanner = ExpressionScanner::new(TokenSet::IP | TokenSet::ITEM_KEY, FunctionMacroOptions::default());
        let source = "ping 10.0.0.1";
        let tokens = scanner.scan(source);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenSet::ITEM_KEY);
        assert_eq!(tokens[1].kind, TokenSet::IP);
        assert_eq!(tokens[1].text(source), "10.0.0.1");
    }

    #[test]
    fn test_no_mid_word_match() {
        let scanner = ExpressionScanner::new(TokenSet::IP, FunctionMacroOptions::default());
        assert!(scanner.scan("host10.0.0.1").is_empty());
    }

    #[test]
    fn test_simple_checks_option() {
        let source = "{h:ftp,21.last(0)}=0";
        assert!(macros_only().scan(source).is_empty());
        let legacy = ExpressionScanner::new(
            TokenSet::FUNCTION_MACRO,
            FunctionMacroOptions { simple_checks: true },
        );
        assert_eq!(legacy.scan(source).len(), 1);
    }

    #[test]
    fn test_token_at() {
        let source = "{a:k.last(0)}>{$MAX}";
        let scanner = macros_only();
        assert_eq!(scanner.token_at(source, 0).unwrap().kind, TokenSet::FUNCTION_MACRO);
        assert_eq!(scanner.token_at(source, 12).unwrap().kind, TokenSet::FUNCTION_MACRO);
        assert!(scanner.token_at(source, 13).is_none());
        assert_eq!(scanner.token_at(source, 14).unwrap().kind, TokenSet::USER_MACRO);
        assert!(scanner.token_at(source, 99).is_none());
    }

    #[test]
    fn test_unicode_text_between_tokens() {
        let source = "é{$A}ü";
        let tokens = macros_only().scan(source);
        assert_eq!(texts(source, &tokens), vec!["{$A}"]);
    }
}
