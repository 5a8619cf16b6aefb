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

//! Function macros: `{host:key.function(args)}`.
//!
//! The host is empty (current host), a host name, or a plain macro such as
//! `{HOST.HOST}`. Key recognition is delegated to [`ItemKeyParser`]. When the
//! key has no parameter list the item key parser also consumes the function
//! name (`agent.ping.last`), so the key is split at its last dot.
//!
//! With [`FunctionMacroOptions::simple_checks`] enabled the parser also
//! accepts the legacy simple-check key form `service[_perf][,port]`, as in
//! `{host:ftp,21.last(0)}`.

use super::item_key::scan_quoted;
use super::macros::MacroParser;
use super::scan::{is_function_char, is_host_char, take_while};
use super::{valid_start, ItemKeyParser, ParseResult, Parser};
use crate::key::{ItemKey, Parameter};
use std::fmt;
use std::ops::Range;

/// Services that have a legacy simple-check key form.
pub const SIMPLE_CHECK_SERVICES: [&str; 10] = [
    "ftp", "http", "imap", "ldap", "nntp", "ntp", "pop", "smtp", "ssh", "tcp",
];

/// Host part of a function macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostRef {
    /// `{:key.func()}`: the host the expression belongs to.
    Current,
    /// A literal host name.
    Name(String),
    /// A plain macro naming the host, stored without braces.
    Macro(String),
}

impl fmt::Display for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostRef::Current => Ok(()),
            HostRef::Name(name) => f.write_str(name),
            HostRef::Macro(name) => write!(f, "{{{}}}", name),
        }
    }
}

/// How the key inside a function macro was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyDialect {
    /// Regular `id[params]` item key.
    ItemKey,
    /// Legacy `service[_perf][,port]` simple check.
    SimpleCheck,
}

/// Construction options for [`FunctionMacroParser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctionMacroOptions {
    /// Accept legacy simple-check keys.
    pub simple_checks: bool,
}

impl FunctionMacroOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simple_checks(mut self, enabled: bool) -> Self {
        self.simple_checks = enabled;
        self
    }
}

/// A recognized function macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMacro {
    host: HostRef,
    key: ItemKey,
    key_span: Range<usize>,
    key_text: String,
    dialect: KeyDialect,
    function: String,
    raw_args: String,
}

impl FunctionMacro {
    pub fn host(&self) -> &HostRef {
        &self.host
    }

    /// The parsed key.
    ///
    /// For [`KeyDialect::SimpleCheck`] the identifier is the service word
    /// (`ftp` or `ftp_perf`) and the port, if any, is the only parameter.
    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    /// Byte range of the key text in the parsed source.
    pub fn key_span(&self) -> Range<usize> {
        self.key_span.clone()
    }

    /// The key exactly as written.
    pub fn key_text(&self) -> &str {
        &self.key_text
    }

    pub fn dialect(&self) -> KeyDialect {
        self.dialect
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Argument text between the parentheses, unparsed.
    pub fn raw_args(&self) -> &str {
        &self.raw_args
    }

    /// Splits the raw argument text at top-level commas.
    ///
    /// Quoted arguments are unquoted and unescaped; unquoted arguments are
    /// trimmed. Empty argument text yields no arguments.
    pub fn args(&self) -> Vec<String> {
        split_args(&self.raw_args)
    }

    /// Formats this macro with a different host and key text.
    pub fn rewritten(&self, host: HostRef, key_text: impl Into<String>) -> String {
        format!(
            "{{{}:{}.{}({})}}",
            host,
            key_text.into(),
            self.function,
            self.raw_args
        )
    }
}

impl fmt::Display for FunctionMacro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}:{}.{}({})}}",
            self.host, self.key_text, self.function, self.raw_args
        )
    }
}

fn split_args(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let bytes = raw.as_bytes();
    let mut args = Vec::new();
    let mut p = 0;
    loop {
        let start = take_while(bytes, p, |b| b == b' ');
        let (value, end) = match scan_quoted_arg(raw, start) {
            Some((end, value)) => (value, take_while(bytes, end, |b| b != b',')),
            None => {
                let end = take_while(bytes, start, |b| b != b',');
                (raw[start..end].trim_end().to_string(), end)
            }
        };
        args.push(value);
        if end >= bytes.len() {
            return args;
        }
        p = end + 1;
    }
}

fn scan_quoted_arg(raw: &str, start: usize) -> Option<(usize, String)> {
    if raw.as_bytes().get(start) != Some(&b'"') {
        return None;
    }
    scan_quoted(raw, start).ok()
}

/// Recognizes function macros. Produces a [`FunctionMacro`].
///
/// # Examples
///
/// ```
/// use zconf_core::parser::{FunctionMacroOptions, FunctionMacroParser, HostRef, KeyDialect, Parser};
///
/// let parser = FunctionMacroParser::new(FunctionMacroOptions::default());
/// let fm = parser.parse("{server:agent.ping.nodata(5m)}=1", 0).into_value().unwrap();
/// assert_eq!(fm.host(), &HostRef::Name("server".to_string()));
/// assert_eq!(fm.key().id(), "agent.ping");
/// assert_eq!(fm.function(), "nodata");
/// assert_eq!(fm.raw_args(), "5m");
///
/// let legacy = FunctionMacroParser::new(FunctionMacroOptions { simple_checks: true });
/// let fm = legacy.parse("{server:ftp,21.last(0)}", 0).into_value().unwrap();
/// assert_eq!(fm.dialect(), KeyDialect::SimpleCheck);
/// assert_eq!(fm.key_text(), "ftp,21");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionMacroParser {
    options: FunctionMacroOptions,
}

impl FunctionMacroParser {
    pub fn new(options: FunctionMacroOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FunctionMacroOptions {
        self.options
    }
}

impl Parser for FunctionMacroParser {
    type Output = FunctionMacro;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, FunctionMacro> {
        if !valid_start(source, pos) {
            return ParseResult::fail(pos, pos);
        }
        match self.scan(source, pos) {
            Ok((end, fm)) => ParseResult::matched_span(source, pos, end, fm),
            Err(last_pos) => ParseResult::fail(pos, last_pos),
        }
    }
}

impl FunctionMacroParser {
    fn scan(&self, source: &str, pos: usize) -> Result<(usize, FunctionMacro), usize> {
        let bytes = source.as_bytes();
        if bytes.get(pos) != Some(&b'{') {
            return Err(pos);
        }

        let (mut p, host) = scan_host(source, pos + 1)?;
        if bytes.get(p) != Some(&b':') {
            return Err(p);
        }
        p += 1;

        // A service word only reads as a simple check when the rest of the
        // macro follows it; otherwise the key is read again as an item key.
        if self.options.simple_checks {
            if let Some((end, check)) = scan_simple_check(source, p) {
                let key = ScannedKey {
                    start: p,
                    end,
                    key: check,
                    dialect: KeyDialect::SimpleCheck,
                };
                if let Ok(found) = scan_tail(source, host.clone(), key) {
                    return Ok(found);
                }
            }
        }

        let key = scan_item_key(source, p)?;
        scan_tail(source, host, key)
    }
}

struct ScannedKey {
    start: usize,
    /// For a parameterless item key this points past the function name
    /// glued to the identifier.
    end: usize,
    key: ItemKey,
    dialect: KeyDialect,
}

impl ScannedKey {
    fn function_glued(&self) -> bool {
        self.dialect == KeyDialect::ItemKey && !self.key.has_parameters()
    }
}

/// Scans the function name, arguments and closing brace after the key.
fn scan_tail(source: &str, host: HostRef, scanned: ScannedKey) -> Result<(usize, FunctionMacro), usize> {
    let bytes = source.as_bytes();
    let mut p = scanned.end;

    let function = if scanned.function_glued() {
        let name_start = scanned.start + scanned.key.id().len() + 1;
        source[name_start..p].to_string()
    } else {
        if bytes.get(p) != Some(&b'.') {
            return Err(p);
        }
        let name_start = p + 1;
        p = scan_function_name(bytes, name_start)?;
        source[name_start..p].to_string()
    };

    if bytes.get(p) != Some(&b'(') {
        return Err(p);
    }
    let args_start = p + 1;
    p = scan_args(bytes, args_start)?;
    let raw_args = source[args_start..p].to_string();
    p += 1;

    if bytes.get(p) != Some(&b'}') {
        return Err(p);
    }

    let key_span_end = if scanned.function_glued() {
        scanned.start + scanned.key.id().len()
    } else {
        scanned.end
    };

    Ok((
        p + 1,
        FunctionMacro {
            host,
            key_span: scanned.start..key_span_end,
            key_text: source[scanned.start..key_span_end].to_string(),
            key: scanned.key,
            dialect: scanned.dialect,
            function,
            raw_args,
        },
    ))
}

/// Scans an item key. A parameterless key carries the function name after
/// its last dot; the returned key has that part split off.
fn scan_item_key(source: &str, pos: usize) -> Result<ScannedKey, usize> {
    let result = ItemKeyParser::new().parse(source, pos);
    if !result.is_match() {
        return Err(result.last_pos());
    }
    let end = result.end();
    let key = match result.into_value() {
        Some(key) => key,
        None => return Err(end),
    };
    if key.has_parameters() {
        return Ok(ScannedKey {
            start: pos,
            end,
            key,
            dialect: KeyDialect::ItemKey,
        });
    }

    let id = key.id();
    let dot = id.rfind('.').ok_or(end)?;
    let name = &id[dot + 1..];
    if scan_function_name(name.as_bytes(), 0) != Ok(name.len()) {
        return Err(pos + dot + 1);
    }
    let key = ItemKey::from_parts(id[..dot].to_string(), Vec::new());
    if key.id().is_empty() {
        return Err(pos);
    }
    Ok(ScannedKey {
        start: pos,
        end,
        key,
        dialect: KeyDialect::ItemKey,
    })
}

fn scan_host(source: &str, pos: usize) -> Result<(usize, HostRef), usize> {
    if source.as_bytes().get(pos) == Some(&b'{') {
        let result = MacroParser::plain().parse(source, pos);
        if !result.is_match() {
            return Err(result.last_pos());
        }
        let end = result.end();
        return match result.into_value() {
            Some(m) => Ok((end, HostRef::Macro(m.name))),
            None => Err(end),
        };
    }

    let end = take_while(source.as_bytes(), pos, is_host_char);
    let host = if end == pos {
        HostRef::Current
    } else {
        HostRef::Name(source[pos..end].to_string())
    };
    Ok((end, host))
}

/// `[a-z][a-z0-9_]*`
fn scan_function_name(bytes: &[u8], pos: usize) -> Result<usize, usize> {
    if !bytes.get(pos).is_some_and(u8::is_ascii_lowercase) {
        return Err(pos);
    }
    Ok(take_while(bytes, pos + 1, is_function_char))
}

/// Returns the offset of the closing parenthesis. Parentheses inside quoted
/// arguments do not count.
fn scan_args(bytes: &[u8], pos: usize) -> Result<usize, usize> {
    let mut p = pos;
    let mut quoted = false;
    while p < bytes.len() {
        match bytes[p] {
            b'\\' if quoted && matches!(bytes.get(p + 1), Some(b'"') | Some(b'\\')) => p += 2,
            b'"' => {
                quoted = !quoted;
                p += 1;
            }
            b')' if !quoted => return Ok(p),
            _ => p += 1,
        }
    }
    Err(bytes.len())
}

/// Scans `service[_perf][,port]` where port is digits or a user macro.
///
/// The key model uses the service word as identifier and the port as the
/// only parameter.
pub(crate) fn scan_simple_check(source: &str, pos: usize) -> Option<(usize, ItemKey)> {
    let bytes = source.as_bytes();
    let word_end = take_while(bytes, pos, |b| b.is_ascii_lowercase() || b == b'_');
    let word = source.get(pos..word_end)?;
    let service = word.strip_suffix("_perf").unwrap_or(word);
    if !SIMPLE_CHECK_SERVICES.contains(&service) {
        return None;
    }

    let mut end = word_end;
    let mut params = Vec::new();
    if bytes.get(end) == Some(&b',') {
        let port_start = end + 1;
        let port_end = if bytes.get(port_start) == Some(&b'{') {
            let result = MacroParser::user().parse(source, port_start);
            if !result.is_match() {
                return None;
            }
            result.end()
        } else {
            take_while(bytes, port_start, |b| b.is_ascii_digit())
        };
        if port_end == port_start {
            return None;
        }
        params.push(Parameter::Scalar(source[port_start..port_end].to_string()));
        end = port_end;
    }

    Some((end, ItemKey::from_parts(word.to_string(), params)))
}
