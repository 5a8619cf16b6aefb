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

//! Structured item key model.
//!
//! An [`ItemKey`] is an identifier plus an ordered parameter list, each
//! parameter either a scalar or a nested bracketed list. Formatting a key
//! with [`Display`](std::fmt::Display) produces text that parses back to an
//! equal key.
//!
//! # Examples
//!
//! ```
//! use zconf_core::{ItemKey, Parameter};
//!
//! let key: ItemKey = "net.tcp.service[ntp,,1]".parse().unwrap();
//! assert_eq!(key.id(), "net.tcp.service");
//! assert_eq!(key.scalar(0), Some("ntp"));
//! assert_eq!(key.scalar(1), Some(""));
//! assert_eq!(key.scalar(2), Some("1"));
//!
//! let key: ItemKey = "key[[a,b],c]".parse().unwrap();
//! assert_eq!(
//!     key.param(0),
//!     Some(&Parameter::Nested(vec![
//!         Parameter::Scalar("a".to_string()),
//!         Parameter::Scalar("b".to_string()),
//!     ]))
//! );
//!
//! let key = ItemKey::new("key", vec![Parameter::Scalar("a,b".to_string())]).unwrap();
//! assert_eq!(key.to_string(), r#"key["a,b"]"#);
//! ```

use crate::error::ParseError;
use crate::parser::scan::is_key_char;
use crate::parser::{ItemKeyParser, Parser};
use std::fmt::{self, Write};
use std::str::FromStr;

/// One item key parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Parameter {
    /// Unquoted, unescaped text.
    Scalar(String),
    /// A bracketed sub-list.
    Nested(Vec<Parameter>),
}

impl Parameter {
    /// Creates a scalar parameter.
    pub fn scalar(value: impl Into<String>) -> Self {
        Parameter::Scalar(value.into())
    }

    /// Returns the scalar text, or `None` for a nested list.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Parameter::Scalar(s) => Some(s),
            Parameter::Nested(_) => None,
        }
    }

    /// Returns the nested list, or `None` for a scalar.
    pub fn as_nested(&self) -> Option<&[Parameter]> {
        match self {
            Parameter::Scalar(_) => None,
            Parameter::Nested(items) => Some(items),
        }
    }

    /// Returns `true` if this scalar must be quoted when serialized.
    ///
    /// Scalars containing `,` `[` `]` or `"`, and scalars with leading or
    /// trailing whitespace, are quoted. Nested lists are never quoted.
    pub fn needs_quoting(&self) -> bool {
        match self {
            Parameter::Scalar(s) => scalar_needs_quoting(s),
            Parameter::Nested(_) => false,
        }
    }

    /// Nesting depth: 0 for a scalar, 1 + deepest child for a list.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((param, depth)) = stack.pop() {
            if let Parameter::Nested(items) = param {
                max = max.max(depth + 1);
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
        }
        max
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Parameter::Scalar(value.to_string())
    }
}

impl fmt::Display for Parameter {
    /// Formats the parameter as item key parameter syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Scalar(s) => write_scalar(f, s),
            Parameter::Nested(items) => {
                f.write_char('[')?;
                write_list(f, items)?;
                f.write_char(']')
            }
        }
    }
}

fn scalar_needs_quoting(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b',' | b'[' | b']' | b'"'))
        || s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
}

fn write_scalar(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !scalar_needs_quoting(s) {
        return f.write_str(s);
    }
    f.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Parameter]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// A parsed item key: `id[param,...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemKey {
    id: String,
    parameters: Vec<Parameter>,
}

impl ItemKey {
    /// Creates a key, validating the identifier.
    ///
    /// An empty nested list serializes as `[]`, which parses back as a list
    /// holding one empty scalar.
    pub fn new(id: impl Into<String>, parameters: Vec<Parameter>) -> Result<Self, ParseError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self { id, parameters })
    }

    /// Builds a key from parts the item key parser already validated.
    pub(crate) fn from_parts(id: String, parameters: Vec<Parameter>) -> Self {
        Self { id, parameters }
    }

    /// The key identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All parameters in order.
    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameter at `index`.
    #[inline]
    pub fn param(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    /// Scalar text of the parameter at `index`; `None` if absent or nested.
    pub fn scalar(&self, index: usize) -> Option<&str> {
        self.param(index).and_then(Parameter::as_scalar)
    }

    #[inline]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Returns a copy of this key with a different identifier.
    pub fn with_id(&self, id: impl Into<String>) -> Result<Self, ParseError> {
        ItemKey::new(id, self.parameters.clone())
    }

    /// Returns a copy of this key with different parameters.
    pub fn with_parameters(&self, parameters: Vec<Parameter>) -> Self {
        Self {
            id: self.id.clone(),
            parameters,
        }
    }

    /// Deepest parameter nesting, counting the key's own bracket list as 1.
    pub fn depth(&self) -> usize {
        if self.parameters.is_empty() {
            return 0;
        }
        1 + self.parameters.iter().map(Parameter::depth).max().unwrap_or(0)
    }

    /// Splits into identifier and parameters.
    pub fn into_parts(self) -> (String, Vec<Parameter>) {
        (self.id, self.parameters)
    }
}

fn validate_id(id: &str) -> Result<(), ParseError> {
    if id.is_empty() || !id.bytes().all(is_key_char) {
        return Err(ParseError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

impl fmt::Display for ItemKey {
    /// Formats the key as text accepted by [`ItemKeyParser`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if self.parameters.is_empty() {
            return Ok(());
        }
        f.write_char('[')?;
        write_list(f, &self.parameters)?;
        f.write_char(']')
    }
}

impl FromStr for ItemKey {
    type Err = ParseError;

    /// Parses a complete item key; trailing text is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseError::check(s, ItemKeyParser::new().parse(s, 0), "item key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ItemKey {
        s.parse().unwrap()
    }

    fn scalar(s: &str) -> Parameter {
        Parameter::scalar(s)
    }

    #[test]
    fn test_accessors() {
        let k = key("net.tcp.service[ntp,,1]");
        assert_eq!(k.id(), "net.tcp.service");
        assert_eq!(k.parameters().len(), 3);
        assert_eq!(k.scalar(1), Some(""));
        assert_eq!(k.scalar(3), None);
        assert!(k.has_parameters());
        assert!(!key("agent.ping").has_parameters());
    }

    #[test]
    fn test_new_rejects_bad_id() {
        assert!(ItemKey::new("", vec![]).is_err());
        assert!(ItemKey::new("bad key", vec![]).is_err());
        assert!(ItemKey::new("a.b_c9", vec![]).is_ok());
    }

    #[test]
    fn test_with_id() {
        let k = key("net.tcp.service[ntp]");
        let udp = k.with_id("net.udp.service").unwrap();
        assert_eq!(udp.to_string(), "net.udp.service[ntp]");
        assert!(k.with_id("x y").is_err());
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(key("agent.ping").to_string(), "agent.ping");
        assert_eq!(key("key[]").to_string(), "key[]");
        assert_eq!(key("key[a,b,]").to_string(), "key[a,b,]");
    }

    #[test]
    fn test_display_quotes_when_needed() {
        let k = ItemKey::new(
            "key",
            vec![
                scalar("a,b"),
                scalar("x]"),
                scalar(" lead"),
                scalar("trail "),
                scalar(r#"say "hi""#),
                scalar(r"back\slash"),
            ],
        )
        .unwrap();
        assert_eq!(
            k.to_string(),
            r#"key["a,b","x]"," lead","trail ","say \"hi\"",back\slash]"#
        );
    }

    #[test]
    fn test_display_escapes_backslash_in_quotes() {
        let k = ItemKey::new("key", vec![scalar(r"a,\")]).unwrap();
        assert_eq!(k.to_string(), r#"key["a,\\"]"#);
        assert_eq!(key(&k.to_string()), k);
    }

    #[test]
    fn test_needs_quoting() {
        assert!(!scalar("plain").needs_quoting());
        assert!(!scalar("").needs_quoting());
        assert!(scalar("a[b").needs_quoting());
        assert!(scalar("\ttab").needs_quoting());
        assert!(!Parameter::Nested(vec![scalar("a,b")]).needs_quoting());
    }

    #[test]
    fn test_nested_depth() {
        let k = key("key[[[[a]]]]");
        assert_eq!(k.depth(), 4);
        assert_eq!(k.to_string(), "key[[[[a]]]]");
        assert_eq!(key("agent.ping").depth(), 0);
        assert_eq!(key("key[a]").depth(), 1);
    }

    #[test]
    fn test_nested_roundtrip() {
        let k = key(r#"key[[a,"b,c"],d,[[e]]]"#);
        assert_eq!(key(&k.to_string()), k);
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "key[a".parse::<ItemKey>(),
            Err(ParseError::UnexpectedEnd { position: 5, .. })
        ));
        assert!(matches!(
            "key[a] x".parse::<ItemKey>(),
            Err(ParseError::TrailingInput { position: 6, .. })
        ));
        assert!(matches!(
            "[a]".parse::<ItemKey>(),
            Err(ParseError::UnexpectedChar { found: '[', position: 0, .. })
        ));
    }

    #[test]
    fn test_into_parts() {
        let (id, params) = key("k[a]").into_parts();
        assert_eq!(id, "k");
        assert_eq!(params, vec![scalar("a")]);
    }
}
