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

//! Error types for XML import and export

use thiserror::Error;
use zconf_core::ImportError;

/// Errors that can occur while reading or writing XML exports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum XmlImportError {
    /// The input is not well-formed XML.
    ///
    /// ```text
    /// XML parse error at position 42: unexpected end of file
    /// ```
    #[error("XML parse error at position {position}: {message}")]
    Syntax {
        /// Byte offset the reader had reached
        position: usize,
        /// Description of the parsing error
        message: String,
    },

    /// Writing the output failed.
    #[error("failed to write XML {context}: {message}")]
    Write {
        /// What was being written
        context: &'static str,
        /// Underlying error message
        message: String,
    },

    /// The XML is well-formed but not a valid export document.
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl XmlImportError {
    pub(crate) fn syntax(position: usize, err: impl std::fmt::Display) -> Self {
        XmlImportError::Syntax {
            position,
            message: err.to_string(),
        }
    }

    pub(crate) fn write(context: &'static str, err: impl std::fmt::Display) -> Self {
        XmlImportError::Write {
            context,
            message: err.to_string(),
        }
    }

    /// Returns `true` if a configured size or depth limit rejected the input.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, XmlImportError::Import(err) if err.is_resource_limit())
    }
}
