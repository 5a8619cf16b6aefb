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

//! Macro references: `{NAME}`, `{$NAME}` and `{#NAME}`.
//!
//! The sigil is fixed when the parser is built. The body is one or more of
//! `[A-Z0-9._]`. User macros may carry a context, `{$NAME:ctx}` or
//! `{$NAME:"quoted ctx"}`, when the parser is built `with_context(true)`.

use super::item_key::scan_quoted;
use super::scan::{is_macro_char, skip_spaces, take_while};
use super::{valid_start, ParseResult, Parser};
use std::fmt::{self, Write};

/// A recognized macro reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Macro {
    /// `$`, `#` or `None` for a plain macro.
    pub sigil: Option<char>,
    /// Body between the sigil and the closing brace (or context separator).
    pub name: String,
    /// User macro context, unquoted.
    pub context: Option<String>,
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        if let Some(sigil) = self.sigil {
            f.write_char(sigil)?;
        }
        f.write_str(&self.name)?;
        if let Some(context) = &self.context {
            f.write_char(':')?;
            if context_needs_quoting(context) {
                f.write_char('"')?;
                for c in context.chars() {
                    if c == '"' || c == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')?;
            } else {
                f.write_str(context)?;
            }
        }
        f.write_char('}')
    }
}

fn context_needs_quoting(context: &str) -> bool {
    context.contains(['}', '"']) || context.starts_with([' ', '\t'])
}

/// Recognizes one kind of macro reference. Produces a [`Macro`].
///
/// # Examples
///
/// ```
/// use zconf_core::parser::{MacroParser, ParseStatus, Parser};
///
/// let lld = MacroParser::lld();
/// assert_eq!(lld.parse("{#LLD.MACRO}", 0).status(), ParseStatus::Success);
/// assert!(MacroParser::plain().parse("{#LLD.MACRO}", 0).is_fail());
///
/// let user = MacroParser::user().with_context(true);
/// let m = user.parse(r#"{$TIMEOUT:"db one"}"#, 0).into_value().unwrap();
/// assert_eq!(m.name, "TIMEOUT");
/// assert_eq!(m.context.as_deref(), Some("db one"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroParser {
    sigil: Option<char>,
    context: bool,
}

impl MacroParser {
    /// Creates a parser for macros with the given sigil.
    pub fn new(sigil: Option<char>) -> Self {
        Self {
            sigil,
            context: false,
        }
    }

    /// `{NAME}`.
    pub fn plain() -> Self {
        Self::new(None)
    }

    /// `{$NAME}`.
    pub fn user() -> Self {
        Self::new(Some('$'))
    }

    /// `{#NAME}`.
    pub fn lld() -> Self {
        Self::new(Some('#'))
    }

    /// Accept a `:context` suffix after the macro name.
    pub fn with_context(mut self, enabled: bool) -> Self {
        self.context = enabled;
        self
    }

    pub fn sigil(&self) -> Option<char> {
        self.sigil
    }
}

impl Parser for MacroParser {
    type Output = Macro;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, Macro> {
        if !valid_start(source, pos) {
            return ParseResult::fail(pos, pos);
        }
        match self.scan(source, pos) {
            Ok((end, m)) => ParseResult::matched_span(source, pos, end, m),
            Err(last_pos) => ParseResult::fail(pos, last_pos),
        }
    }
}

impl MacroParser {
    fn scan(&self, source: &str, pos: usize) -> Result<(usize, Macro), usize> {
        let bytes = source.as_bytes();
        if bytes.get(pos) != Some(&b'{') {
            return Err(pos);
        }
        let mut p = pos + 1;

        if let Some(sigil) = self.sigil {
            if !source[p..].starts_with(sigil) {
                return Err(p);
            }
            p += sigil.len_utf8();
        }

        let name_start = p;
        p = take_while(bytes, p, is_macro_char);
        if p == name_start {
            return Err(p);
        }
        let name = source[name_start..p].to_string();

        let mut context = None;
        if self.context && bytes.get(p) == Some(&b':') {
            let q = skip_spaces(bytes, p + 1);
            if bytes.get(q) == Some(&b'"') {
                let (end, value) = scan_quoted(source, q)?;
                context = Some(value);
                p = skip_spaces(bytes, end);
            } else {
                let end = take_while(bytes, q, |b| b != b'}');
                context = Some(source[q..end].to_string());
                p = end;
            }
        }

        if bytes.get(p) != Some(&b'}') {
            return Err(p);
        }
        Ok((
            p + 1,
            Macro {
                sigil: self.sigil,
                name,
                context,
            },
        ))
    }
}
