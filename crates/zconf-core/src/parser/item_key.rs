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

//! Item key recognition: `id` or `id[param,...]`.
//!
//! Parameters are quoted scalars (`"..."` with `\"` and `\\` escapes), bare
//! scalars (any text up to `,` or `]`) or bracketed sub-lists. Sub-lists nest
//! to any depth; the parser keeps an explicit stack instead of recursing.
//!
//! Whitespace before an opening quote or bracket and after a closing quote
//! or bracket is skipped. Whitespace inside a bare scalar is kept.

use super::scan::{is_key_char, skip_spaces, take_while};
use super::{valid_start, ParseResult, Parser};
use crate::key::{ItemKey, Parameter};

/// Recognizes item keys. Produces an [`ItemKey`].
///
/// # Examples
///
/// ```
/// use zconf_core::parser::{ItemKeyParser, ParseStatus, Parser};
///
/// let parser = ItemKeyParser::new();
/// assert_eq!(parser.parse("key[a,b,]", 0).value().map(|k| k.parameters().len()), Some(3));
/// assert_eq!(parser.parse(r#"key["a,b"]"#, 0).status(), ParseStatus::Success);
///
/// // A stray closing bracket fails the whole key.
/// assert_eq!(parser.parse("key[a]]", 0).status(), ParseStatus::Fail);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemKeyParser;

impl ItemKeyParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ItemKeyParser {
    type Output = ItemKey;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, ItemKey> {
        if !valid_start(source, pos) {
            return ParseResult::fail(pos, pos);
        }
        match scan_item_key(source, pos) {
            Ok((end, _)) if source.as_bytes().get(end) == Some(&b']') => {
                ParseResult::fail(pos, end)
            }
            Ok((end, key)) => ParseResult::matched_span(source, pos, end, key),
            Err(last_pos) => ParseResult::fail(pos, last_pos),
        }
    }
}

/// Scans a key starting at `pos`. On failure returns the offset of the
/// first byte that could not be accepted.
fn scan_item_key(source: &str, pos: usize) -> Result<(usize, ItemKey), usize> {
    let bytes = source.as_bytes();
    let id_end = take_while(bytes, pos, is_key_char);
    if id_end == pos {
        return Err(pos);
    }
    let id = source[pos..id_end].to_string();
    if bytes.get(id_end) != Some(&b'[') {
        return Ok((id_end, ItemKey::from_parts(id, Vec::new())));
    }

    // Open lists, innermost last. The key's own list is the bottom entry.
    let mut stack: Vec<Vec<Parameter>> = vec![Vec::new()];
    let mut p = id_end + 1;

    loop {
        // Start of a parameter.
        let q = skip_spaces(bytes, p);
        match bytes.get(q) {
            Some(b'[') => {
                stack.push(Vec::new());
                p = q + 1;
                continue;
            }
            Some(b'"') => {
                let (end, value) = scan_quoted(source, q)?;
                push_param(&mut stack, Parameter::Scalar(value));
                p = skip_spaces(bytes, end);
            }
            _ => {
                let end = take_while(bytes, p, |b| !matches!(b, b',' | b'[' | b']' | b'"'));
                if !matches!(bytes.get(end), Some(b',') | Some(b']')) {
                    return Err(end);
                }
                push_param(&mut stack, Parameter::Scalar(source[p..end].to_string()));
                p = end;
            }
        }

        // After a parameter: a separator or one or more closing brackets.
        loop {
            match bytes.get(p) {
                Some(b',') => {
                    p += 1;
                    break;
                }
                Some(b']') => {
                    p += 1;
                    let list = stack.pop().unwrap_or_default();
                    if stack.is_empty() {
                        return Ok((p, ItemKey::from_parts(id, list)));
                    }
                    push_param(&mut stack, Parameter::Nested(list));
                    p = skip_spaces(bytes, p);
                }
                _ => return Err(p),
            }
        }
    }
}

fn push_param(stack: &mut [Vec<Parameter>], param: Parameter) {
    if let Some(current) = stack.last_mut() {
        current.push(param);
    }
}

/// Scans a quoted scalar whose opening quote is at `open`.
///
/// Returns the offset just past the closing quote and the unescaped text.
/// Only `\"` and `\\` are escapes; any other backslash is literal.
pub(crate) fn scan_quoted(source: &str, open: usize) -> Result<(usize, String), usize> {
    let bytes = source.as_bytes();
    let mut value = String::new();
    let mut segment = open + 1;
    let mut i = open + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'"') | Some(b'\\')) => {
                value.push_str(&source[segment..i]);
                value.push(bytes[i + 1] as char);
                i += 2;
                segment = i;
            }
            b'"' => {
                value.push_str(&source[segment..i]);
                return Ok((i + 1, value));
            }
            _ => i += 1,
        }
    }
    Err(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseStatus;

    fn parse(s: &str) -> ParseResult<'_, ItemKey> {
        ItemKeyParser.parse(s, 0)
    }

    fn params(s: &str) -> Vec<Parameter> {
        parse(s).into_value().unwrap().into_parts().1
    }

    fn sc(s: &str) -> Parameter {
        Parameter::scalar(s)
    }

    // ==================== Basic keys ====================

    #[test]
    fn test_id_only() {
        let result = parse("agent.ping");
        assert_eq!(result.status(), ParseStatus::Success);
        assert_eq!(result.value().unwrap().id(), "agent.ping");
        assert!(result.value().unwrap().parameters().is_empty());
    }

    #[test]
    fn test_simple_params() {
        assert_eq!(params("net.tcp.service[ntp,,1]"), vec![sc("ntp"), sc(""), sc("1")]);
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(params("key[]"), vec![sc("")]);
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(params("key[a,b,]"), vec![sc("a"), sc("b"), sc("")]);
        assert_eq!(
            params("key[[a,],b]"),
            vec![Parameter::Nested(vec![sc("a"), sc("")]), sc("b")]
        );
    }

    // ==================== Quoting ====================

    #[test]
    fn test_quoted() {
        assert_eq!(params(r#"key["a,b"]"#), vec![sc("a,b")]);
        assert_eq!(params(r#"key["a]b"]"#), vec![sc("a]b")]);
        assert_eq!(params(r#"key["say \"hi\""]"#), vec![sc(r#"say "hi""#)]);
        assert_eq!(params(r#"key["a\\b"]"#), vec![sc(r"a\b")]);
        assert_eq!(params(r#"key["a\nb"]"#), vec![sc(r"a\nb")]);
    }

    #[test]
    fn test_space_around_quotes() {
        assert_eq!(params(r#"key[ "a" , b]"#), vec![sc("a"), sc(" b")]);
    }

    #[test]
    fn test_bare_keeps_spaces() {
        assert_eq!(params("key[ a , b ]"), vec![sc(" a "), sc(" b ")]);
    }

    #[test]
    fn test_unterminated_quote() {
        let result = parse(r#"key["abc"#);
        assert!(result.is_fail());
        assert_eq!(result.last_pos(), 8);
    }

    #[test]
    fn test_quote_inside_bare() {
        let result = parse(r#"key[a"b"]"#);
        assert!(result.is_fail());
        assert_eq!(result.last_pos(), 5);
    }

    #[test]
    fn test_text_after_quote() {
        assert!(parse(r#"key["a"b]"#).is_fail());
    }

    // ==================== Nesting ====================

    #[test]
    fn test_nested() {
        assert_eq!(
            params("key[[a,b],c]"),
            vec![Parameter::Nested(vec![sc("a"), sc("b")]), sc("c")]
        );
    }

    #[test]
    fn test_deep_nesting() {
        let expected = vec![Parameter::Nested(vec![Parameter::Nested(vec![
            Parameter::Nested(vec![sc("a")]),
        ])])];
        assert_eq!(params("key[[[[a]]]]"), expected);
    }

    #[test]
    fn test_very_deep_nesting() {
        let depth = 1_000;
        let source = format!("key{}a{}", "[".repeat(depth), "]".repeat(depth));
        let key = parse(&source).into_value().unwrap();
        assert_eq!(key.depth(), depth);
    }

    #[test]
    fn test_space_after_nested() {
        assert_eq!(
            params("key[[a] ,b]"),
            vec![Parameter::Nested(vec![sc("a")]), sc("b")]
        );
        assert!(parse("key[[a]b]").is_fail());
    }

    #[test]
    fn test_unbalanced() {
        assert!(parse("key[[a]").is_fail());
        assert!(parse("key[a[b]]").is_fail());
    }

    // ==================== Continue and fail ====================

    #[test]
    fn test_continue_mid_string() {
        let source = "{host:net.tcp.service[ntp].last(0)}";
        let result = ItemKeyParser.parse(source, 6);
        assert_eq!(result.status(), ParseStatus::SuccessContinue);
        assert_eq!(result.matched(), "net.tcp.service[ntp]");
        assert_eq!(result.end(), 26);
    }

    #[test]
    fn test_stray_bracket_fails() {
        let result = parse("key[a]]");
        assert_eq!(result.status(), ParseStatus::Fail);
        assert_eq!(result.last_pos(), 6);
        assert!(parse("key]").is_fail());
    }

    #[test]
    fn test_empty_and_bad_start() {
        assert!(parse("").is_fail());
        assert!(parse("[a]").is_fail());
        assert!(ItemKeyParser.parse("key", 4).is_fail());
    }

    #[test]
    fn test_unicode_params() {
        assert_eq!(params("key[héllo,\"wörld\"]"), vec![sc("héllo"), sc("wörld")]);
    }
}
