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

//! IPv4 and IPv6 address literals.
//!
//! The combined [`IpParser`] always tries IPv4 first and only falls back to
//! IPv6 when IPv4 fails and IPv6 support is enabled.
//!
//! # Examples
//!
//! ```
//! use std::net::IpAddr;
//! use zconf_core::parser::{IpConfig, IpParser, ParseStatus, Parser};
//!
//! let parser = IpParser::new(IpConfig::default());
//!
//! let v4 = parser.parse("192.168.1.1", 0);
//! assert_eq!(v4.status(), ParseStatus::Success);
//! assert!(matches!(v4.value(), Some(IpAddr::V4(_))));
//!
//! let v6 = parser.parse("fe80::1 port", 0);
//! assert_eq!(v6.status(), ParseStatus::SuccessContinue);
//! assert_eq!(v6.matched(), "fe80::1");
//!
//! let v4_only = IpParser::new(IpConfig { v6: false });
//! assert!(v4_only.parse("::1", 0).is_fail());
//! ```

use super::scan::{is_hex_digit, take_while};
use super::{valid_start, ParseResult, Parser};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Configuration for [`IpParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpConfig {
    /// Accept IPv6 literals when the IPv4 branch fails.
    pub v6: bool,
}

impl Default for IpConfig {
    fn default() -> Self {
        Self { v6: true }
    }
}

/// Recognizes dotted-quad IPv4 addresses.
///
/// Each octet is `0` or a decimal number from 1 to 255 without leading zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Parser;

impl Ipv4Parser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for Ipv4Parser {
    type Output = Ipv4Addr;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, Ipv4Addr> {
        if !valid_start(source, pos) {
            return ParseResult::fail(pos, pos);
        }
        match scan_ipv4(source.as_bytes(), pos) {
            Ok((end, octets)) => ParseResult::matched_span(source, pos, end, Ipv4Addr::from(octets)),
            Err(last_pos) => ParseResult::fail(pos, last_pos),
        }
    }
}

/// Recognizes IPv6 addresses: up to eight hextets, at most one `::`
/// elision and an optional embedded IPv4 suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6Parser;

impl Ipv6Parser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for Ipv6Parser {
    type Output = Ipv6Addr;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, Ipv6Addr> {
        if !valid_start(source, pos) {
            return ParseResult::fail(pos, pos);
        }
        match scan_ipv6(source, pos) {
            Ok((end, addr)) => ParseResult::matched_span(source, pos, end, addr),
            Err(last_pos) => ParseResult::fail(pos, last_pos),
        }
    }
}

/// IPv4-first address parser with optional IPv6 fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpParser {
    config: IpConfig,
}

impl IpParser {
    pub fn new(config: IpConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> IpConfig {
        self.config
    }
}

impl Parser for IpParser {
    type Output = IpAddr;

    fn parse<'a>(&self, source: &'a str, pos: usize) -> ParseResult<'a, IpAddr> {
        let v4 = Ipv4Parser.parse(source, pos);
        if v4.is_match() || !self.config.v6 {
            return v4.map(IpAddr::V4);
        }

        let v4_last = v4.last_pos();
        let v6 = Ipv6Parser.parse(source, pos);
        if v6.is_match() {
            return v6.map(IpAddr::V6);
        }
        ParseResult::fail(pos, v4_last.max(v6.last_pos()))
    }
}

/// Scans four octets. On failure returns the offset of the offending byte.
fn scan_ipv4(bytes: &[u8], pos: usize) -> Result<(usize, [u8; 4]), usize> {
    let mut octets = [0u8; 4];
    let mut p = pos;

    for (i, octet) in octets.iter_mut().enumerate() {
        if i > 0 {
            if bytes.get(p) != Some(&b'.') {
                return Err(p);
            }
            p += 1;
        }

        let start = p;
        p = take_while(bytes, p, |b| b.is_ascii_digit());
        let digits = &bytes[start..p];
        if digits.is_empty() {
            return Err(p);
        }
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(start + 1);
        }
        if digits.len() > 3 {
            return Err(start + 3);
        }

        let value = digits
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
        if value > 255 {
            return Err(start);
        }
        *octet = value as u8;
    }

    Ok((p, octets))
}

/// Scans an IPv6 literal. On failure returns the furthest offset reached.
fn scan_ipv6(source: &str, pos: usize) -> Result<(usize, Ipv6Addr), usize> {
    let bytes = source.as_bytes();
    let mut head: Vec<u16> = Vec::with_capacity(8);
    let mut tail: Vec<u16> = Vec::with_capacity(8);
    let mut elided = false;
    let mut p = pos;

    if bytes[p..].starts_with(b"::") {
        elided = true;
        p += 2;
    }

    loop {
        let count = head.len() + tail.len();
        let groups = if elided { &mut tail } else { &mut head };

        // An embedded IPv4 suffix occupies the last two hextets.
        if (elided && count <= 5) || (!elided && count == 6) {
            if let Ok((end, o)) = scan_ipv4(bytes, p) {
                groups.push(u16::from_be_bytes([o[0], o[1]]));
                groups.push(u16::from_be_bytes([o[2], o[3]]));
                p = end;
                break;
            }
        }

        let start = p;
        let end = take_while(bytes, p, is_hex_digit);
        if end == start {
            break;
        }
        if end - start > 4 {
            return Err(start + 4);
        }
        let value = u16::from_str_radix(&source[start..end], 16).map_err(|_| start)?;
        groups.push(value);
        p = end;

        if head.len() + tail.len() == 8 {
            break;
        }
        if bytes[p..].starts_with(b"::") {
            if elided {
                return Err(p);
            }
            elided = true;
            p += 2;
            continue;
        }
        if bytes.get(p) == Some(&b':') && bytes.get(p + 1).is_some_and(|b| is_hex_digit(*b)) {
            p += 1;
            continue;
        }
        break;
    }

    let count = head.len() + tail.len();
    if (elided && count > 7) || (!elided && count != 8) {
        return Err(p);
    }

    let mut segments = [0u16; 8];
    segments[..head.len()].copy_from_slice(&head);
    segments[8 - tail.len()..].copy_from_slice(&tail);
    Ok((p, Ipv6Addr::from(segments)))
}
