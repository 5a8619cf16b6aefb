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

//! Schema-version converters and the converter chain.
//!
//! A [`Converter`] rewrites one value from the syntax of one schema version
//! to the next. Converters are total: input they do not recognize comes back
//! unchanged. A [`ConverterChain`] holds converters under stage names, in
//! order, and applies every stage from a given start stage onward.
//!
//! Stage names are the schema versions a document may declare:
//!
//! | Stage | Migrates | Item keys | Trigger expressions |
//! |-------|----------|-----------|---------------------|
//! | `1.0` | 1.x → 2.0 | [`LegacyItemKeyConverter`] | [`LegacyTriggerConverter`] |
//! | `2.0` | 2.0 → 3.0 | unchanged | [`OperatorConverter`] |
//!
//! Stage `1.0` also rewrites graph element item references with
//! [`LegacyGraphItemConverter`].
//!
//! # Examples
//!
//! ```
//! use zconf_core::convert::{key_chain, Converter, LegacyItemKeyConverter};
//!
//! let converter = LegacyItemKeyConverter::new();
//! assert_eq!(converter.convert("net.tcp.service[ntp]".to_string()), "net.udp.service[ntp]");
//! assert_eq!(converter.convert("myitem".to_string()), "myitem");
//!
//! let chain = key_chain();
//! assert_eq!(chain.convert("ftp,21".to_string(), "1.0").unwrap(), "net.tcp.service[ftp,,21]");
//! assert_eq!(chain.convert("ftp,21".to_string(), "2.0").unwrap(), "ftp,21");
//! ```

mod item_key;
mod trigger;
mod version;

pub use item_key::{LegacyGraphItemConverter, LegacyItemKeyConverter};
pub use trigger::{LegacyTriggerConverter, OperatorConverter};
pub use version::{VersionEntry, VersionTable, CURRENT_VERSION};

use crate::error::ConvertError;
use std::fmt;
use tracing::debug;

/// A pure rewrite from one schema version's syntax to the next.
pub trait Converter<T>: Send + Sync {
    /// Converts `value`, returning it unchanged when the rewrite does not apply.
    fn convert(&self, value: T) -> T;
}

impl<T, F> Converter<T> for F
where
    F: Fn(T) -> T + Send + Sync,
{
    fn convert(&self, value: T) -> T {
        self(value)
    }
}

/// Leaves every value unchanged. Fills stages that do not touch a value kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchanged;

impl<T> Converter<T> for Unchanged {
    fn convert(&self, value: T) -> T {
        value
    }
}

/// Ordered, named conversion stages.
///
/// Built once with [`add`](Self::add) and read-only afterwards; share it
/// between threads by reference.
pub struct ConverterChain<T> {
    stages: Vec<(String, Box<dyn Converter<T>>)>,
}

impl<T> ConverterChain<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn add(mut self, stage: impl Into<String>, converter: impl Converter<T> + 'static) -> Self {
        self.stages.push((stage.into(), Box::new(converter)));
        self
    }

    /// Stage names in application order.
    pub fn stages(&self) -> Vec<&str> {
        self.stages.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn contains(&self, stage: &str) -> bool {
        self.stages.iter().any(|(name, _)| name == stage)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Applies `start` and every later stage, feeding each output into the
    /// next. Stages before `start` are not run.
    pub fn convert(&self, value: T, start: &str) -> Result<T, ConvertError> {
        let first = self
            .stages
            .iter()
            .position(|(name, _)| name == start)
            .ok_or_else(|| ConvertError::UnknownStage {
                stage: start.to_string(),
                known: self.stages().join(", "),
            })?;

        Ok(self.stages[first..]
            .iter()
            .fold(value, |value, (name, converter)| {
                debug!(stage = %name, "applying conversion stage");
                converter.convert(value)
            }))
    }
}

impl<T> Default for ConverterChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ConverterChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterChain")
            .field("stages", &self.stages())
            .finish()
    }
}

/// Item key chain with the fixed schema stages.
pub fn key_chain() -> ConverterChain<String> {
    ConverterChain::new()
        .add("1.0", LegacyItemKeyConverter::new())
        .add("2.0", Unchanged)
}

/// Trigger expression chain with the fixed schema stages.
pub fn expression_chain() -> ConverterChain<String> {
    ConverterChain::new()
        .add("1.0", LegacyTriggerConverter::new())
        .add("2.0", OperatorConverter::new())
}
