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

//! Error types for whole-string validation, conversion and import.
//!
//! Recognition failures inside the parsers are plain
//! [`ParseStatus::Fail`](crate::parser::ParseStatus::Fail) values. The types
//! here appear only at boundaries where a caller asked for a complete value.

use crate::import::ImportFormat;
use crate::parser::ParseResult;
use thiserror::Error;

/// Diagnostic for text that is not a complete, valid token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended while a token was still open.
    #[error("unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    /// A character the grammar does not allow at this position.
    #[error("unexpected character '{found}' at position {position}, expected {expected}")]
    UnexpectedChar {
        found: char,
        position: usize,
        expected: &'static str,
    },

    /// A valid token followed by text that is not part of it.
    #[error("unexpected trailing input at position {position} after {expected}")]
    TrailingInput {
        position: usize,
        expected: &'static str,
    },

    /// Identifier outside the item key character set.
    #[error("invalid item key identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl ParseError {
    /// Builds a diagnostic for a failed parse of `source` that stopped at `last_pos`.
    pub fn at(source: &str, last_pos: usize, expected: &'static str) -> Self {
        match source.get(last_pos..).and_then(|rest| rest.chars().next()) {
            Some(found) => ParseError::UnexpectedChar {
                found,
                position: last_pos,
                expected,
            },
            None => ParseError::UnexpectedEnd {
                position: last_pos.min(source.len()),
                expected,
            },
        }
    }

    /// Converts a parse result into a whole-string outcome.
    ///
    /// `SuccessContinue` is reported as [`ParseError::TrailingInput`].
    pub fn check<T>(
        source: &str,
        result: ParseResult<'_, T>,
        expected: &'static str,
    ) -> Result<T, ParseError> {
        if result.is_fail() {
            return Err(ParseError::at(source, result.last_pos(), expected));
        }
        if !result.is_complete() {
            return Err(ParseError::TrailingInput {
                position: result.end(),
                expected,
            });
        }
        let position = result.end();
        result
            .into_value()
            .ok_or(ParseError::UnexpectedEnd { position, expected })
    }

    /// Byte offset the diagnostic refers to, if it has one.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd { position, .. }
            | ParseError::UnexpectedChar { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
            ParseError::InvalidIdentifier(_) => None,
        }
    }
}

/// Errors raised while running a converter chain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The requested start stage is not registered in the chain.
    #[error("unknown conversion stage '{stage}' (known stages: {known})")]
    UnknownStage { stage: String, known: String },

    /// A single value was declared with a schema version that is not recognized.
    #[error("unsupported version number \"{version}\" (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },
}

/// Fatal import errors. Any of these aborts the whole import.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The declared schema version has no conversion path for this format.
    #[error("Invalid tag \"/zabbix_export/version\": unsupported version number \"{version}\" for {format} import")]
    UnsupportedVersion {
        version: String,
        format: ImportFormat,
    },

    /// The document has no `zabbix_export` root.
    #[error("Invalid tag \"/zabbix_export\": the tag is missing")]
    MissingRoot,

    /// The root carries no version declaration.
    #[error("Invalid tag \"/zabbix_export/version\": the tag is missing")]
    MissingVersion,

    /// The source exceeds the configured size limit.
    #[error("source size {size} bytes exceeds maximum {max} bytes")]
    SourceTooLarge { size: usize, max: usize },

    /// Nesting exceeds the configured depth limit.
    #[error("nesting depth {depth} exceeds maximum {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// A member has an unexpected shape.
    #[error("Invalid tag \"{path}\": {message}")]
    InvalidTag { path: String, message: String },

    /// The conversion chain rejected the start stage.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl ImportError {
    /// Returns `true` if this error comes from an [`ImportLimits`](crate::ImportLimits) check.
    #[inline]
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            ImportError::SourceTooLarge { .. } | ImportError::DepthExceeded { .. }
        )
    }
}
