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

//! Trigger expression rewrites.

use super::{Converter, LegacyItemKeyConverter};
use crate::parser::function_macro::{FunctionMacroOptions, HostRef};
use crate::parser::item_key::scan_quoted;
use crate::parser::{ExpressionScanner, TokenSet, TokenValue};

/// Migrates 1.x trigger expressions to 2.0.
///
/// Every function macro's key goes through [`LegacyItemKeyConverter`] and
/// the `{HOSTNAME}` host macro becomes `{HOST.HOST}`. Function macros are
/// recognized with the simple-check key dialect enabled. Text outside
/// function macros is left alone.
#[derive(Debug, Clone, Copy)]
pub struct LegacyTriggerConverter {
    scanner: ExpressionScanner,
    keys: LegacyItemKeyConverter,
}

impl LegacyTriggerConverter {
    pub fn new() -> Self {
        Self {
            scanner: ExpressionScanner::new(
                TokenSet::FUNCTION_MACRO,
                FunctionMacroOptions { simple_checks: true },
            ),
            keys: LegacyItemKeyConverter::new(),
        }
    }

    pub fn convert_expression(&self, expression: &str) -> String {
        let mut out = String::with_capacity(expression.len() + 16);
        let mut last = 0;

        for token in self.scanner.scan(expression) {
            let TokenValue::FunctionMacro(fm) = &token.value else {
                continue;
            };
            let host = match fm.host() {
                HostRef::Macro(name) if name == "HOSTNAME" => HostRef::Macro("HOST.HOST".to_string()),
                host => host.clone(),
            };
            out.push_str(&expression[last..token.start]);
            out.push_str(&fm.rewritten(host, self.keys.convert_key(fm.key_text())));
            last = token.end();
        }

        out.push_str(&expression[last..]);
        out
    }
}

impl Default for LegacyTriggerConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<String> for LegacyTriggerConverter {
    fn convert(&self, value: String) -> String {
        let converted = self.convert_expression(&value);
        if converted == value {
            value
        } else {
            converted
        }
    }
}

/// Migrates 2.0 trigger expression operators to 3.0.
///
/// Outside function macros, macros and quoted strings, `&` becomes `and`,
/// `|` becomes `or` and `#` becomes `<>`. `and`/`or` get a separating space
/// where the neighbouring text would otherwise run into them.
#[derive(Debug, Clone, Copy)]
pub struct OperatorConverter {
    scanner: ExpressionScanner,
}

impl OperatorConverter {
    pub fn new() -> Self {
        Self {
            scanner: ExpressionScanner::new(
                TokenSet::FUNCTION_MACRO | TokenSet::MACRO | TokenSet::USER_MACRO | TokenSet::LLD_MACRO,
                FunctionMacroOptions::default(),
            ),
        }
    }

    pub fn convert_expression(&self, expression: &str) -> String {
        if !has_operators(expression) {
            return expression.to_string();
        }

        let bytes = expression.as_bytes();
        let mut tokens = self.scanner.scan(expression).into_iter().peekable();
        let mut out = String::with_capacity(expression.len() + 16);
        let mut p = 0;

        while p < bytes.len() {
            // Drop tokens inside text that was already copied.
            while tokens.next_if(|token| token.start < p).is_some() {}
            if let Some(token) = tokens.next_if(|token| token.start == p) {
                out.push_str(token.text(expression));
                p = token.end();
                continue;
            }

            match bytes[p] {
                b'"' => {
                    let end = scan_quoted(expression, p).map_or(p + 1, |(end, _)| end);
                    out.push_str(&expression[p..end]);
                    p = end;
                }
                b'{' => {
                    // Not a recognized token: copied as is up to its closing brace.
                    let end = unparsed_brace_end(bytes, p);
                    out.push_str(&expression[p..end]);
                    p = end;
                }
                b'&' => {
                    push_word(&mut out, "and", bytes.get(p + 1).copied());
                    p += 1;
                }
                b'|' => {
                    push_word(&mut out, "or", bytes.get(p + 1).copied());
                    p += 1;
                }
                b'#' => {
                    out.push_str("<>");
                    p += 1;
                }
                _ => {
                    let len = expression[p..].chars().next().map_or(1, char::len_utf8);
                    out.push_str(&expression[p..p + len]);
                    p += len;
                }
            }
        }
        out
    }
}

impl Default for OperatorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<String> for OperatorConverter {
    fn convert(&self, value: String) -> String {
        if !has_operators(&value) {
            return value;
        }
        self.convert_expression(&value)
    }
}

fn has_operators(expression: &str) -> bool {
    memchr::memchr3(b'&', b'|', b'#', expression.as_bytes()).is_some()
}

/// End of the brace group opening at `start`, past its matching `}`.
/// Quoted strings and nested groups are skipped; an unclosed group runs to
/// the end of the input.
fn unparsed_brace_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut p = start;
    while p < bytes.len() {
        match bytes[p] {
            b'\\' if quoted => p += 1,
            b'"' => quoted = !quoted,
            b'{' if !quoted => depth += 1,
            b'}' if !quoted => {
                depth -= 1;
                if depth == 0 {
                    return p + 1;
                }
            }
            _ => {}
        }
        p += 1;
    }
    bytes.len()
}

fn push_word(out: &mut String, word: &str, next: Option<u8>) {
    if out.chars().last().is_some_and(|c| !c.is_whitespace() && c != '(') {
        out.push(' ');
    }
    out.push_str(word);
    if next.is_some_and(|b| !b.is_ascii_whitespace() && b != b')') {
        out.push(' ');
    }
}
