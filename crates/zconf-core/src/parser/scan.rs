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

//! Character classification and token-start sets.
//!
//! All grammars handled here are ASCII-delimited, so classification works on
//! bytes. Non-ASCII bytes never belong to an identifier class and only appear
//! inside parameter values and quoted strings.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Item key identifier character: `[A-Za-z0-9._]`.
#[inline]
pub const fn is_key_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'_'
}

/// Macro body character: `[A-Z0-9._]`.
#[inline]
pub const fn is_macro_char(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'.' || b == b'_'
}

/// Host name character: `[A-Za-z0-9._ -]`.
#[inline]
pub const fn is_host_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b' ' | b'-')
}

/// Trigger function name character: `[a-z0-9_]`.
#[inline]
pub const fn is_function_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'
}

/// Hexadecimal digit.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Horizontal whitespace skipped around quoted values.
#[inline]
pub const fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Advances `pos` past horizontal whitespace.
#[inline]
pub fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_space(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Advances `pos` while `pred` holds.
#[inline]
pub fn take_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// A set of token kinds.
///
/// # Examples
///
/// ```
/// use zconf_core::parser::scan::{token_starts, TokenSet};
///
/// let at_brace = token_starts(b'{');
/// assert!(at_brace.contains(TokenSet::FUNCTION_MACRO));
/// assert!(at_brace.contains(TokenSet::LLD_MACRO));
/// assert!(!at_brace.contains(TokenSet::IP));
///
/// assert!(token_starts(b'1').contains(TokenSet::IP | TokenSet::ITEM_KEY));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u8);

impl TokenSet {
    /// No token kinds.
    pub const EMPTY: TokenSet = TokenSet(0);
    /// `{host:key.func(args)}`.
    pub const FUNCTION_MACRO: TokenSet = TokenSet(1);
    /// `{MACRO}`.
    pub const MACRO: TokenSet = TokenSet(1 << 1);
    /// `{$MACRO}`.
    pub const USER_MACRO: TokenSet = TokenSet(1 << 2);
    /// `{#MACRO}`.
    pub const LLD_MACRO: TokenSet = TokenSet(1 << 3);
    /// `key[params]`.
    pub const ITEM_KEY: TokenSet = TokenSet(1 << 4);
    /// IPv4 or IPv6 literal.
    pub const IP: TokenSet = TokenSet(1 << 5);
    /// Every token kind.
    pub const ALL: TokenSet = TokenSet(0b11_1111);

    /// Returns `true` if every kind in `other` is in `self`.
    #[inline]
    pub const fn contains(self, other: TokenSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the sets share a kind.
    #[inline]
    pub const fn intersects(self, other: TokenSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the kinds present in both sets.
    #[inline]
    pub const fn intersection(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 & other.0)
    }

    /// Returns the kinds present in either set.
    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenSet) -> TokenSet {
        self.union(rhs)
    }
}

impl BitOrAssign for TokenSet {
    fn bitor_assign(&mut self, rhs: TokenSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(TokenSet, &str); 6] = [
            (TokenSet::FUNCTION_MACRO, "FUNCTION_MACRO"),
            (TokenSet::MACRO, "MACRO"),
            (TokenSet::USER_MACRO, "USER_MACRO"),
            (TokenSet::LLD_MACRO, "LLD_MACRO"),
            (TokenSet::ITEM_KEY, "ITEM_KEY"),
            (TokenSet::IP, "IP"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(kind, _)| self.contains(*kind))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "TokenSet({})", names.join(" | "))
    }
}

/// Token kinds that can start at byte `b`.
pub fn token_starts(b: u8) -> TokenSet {
    let mut set = TokenSet::EMPTY;
    if b == b'{' {
        set |= TokenSet::FUNCTION_MACRO | TokenSet::MACRO | TokenSet::USER_MACRO | TokenSet::LLD_MACRO;
    }
    if is_key_char(b) {
        set |= TokenSet::ITEM_KEY;
    }
    if is_hex_digit(b) || b == b':' {
        set |= TokenSet::IP;
    }
    set
}
