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

//! Structured error types for the zconf CLI.
//!
//! All commands return `Result<T, CliError>`; `main` prints the error and
//! exits with a failure status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zconf_core::{ConvertError, ImportError, ParseError};
use zconf_json::JsonImportError;
use zconf_xml::XmlImportError;

/// The main error type for zconf CLI operations.
///
/// Implements `Clone` so batch results can be collected from worker threads.
///
/// # Examples
///
/// ```rust,no_run
/// use zconf_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Text is not a complete item key, IP address or expression token.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A converter chain rejected its start stage.
    #[error("Conversion error: {0}")]
    Convert(String),

    /// Reading, migrating or writing an export document failed.
    #[error("Import error: {0}")]
    Import(String),

    /// JSON serialization of command output failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// Some files of a batch failed.
    #[error("{failed} of {total} files failed to import")]
    BatchFailed { failed: usize, total: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        Self::Convert(err.to_string())
    }
}

impl From<ImportError> for CliError {
    fn from(err: ImportError) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<JsonImportError> for CliError {
    fn from(err: JsonImportError) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<XmlImportError> for CliError {
    fn from(err: XmlImportError) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_reports_megabytes() {
        let err = CliError::file_too_large("big.xml", 3 * 1024 * 1024, 2 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.xml"));
        assert!(msg.contains("(2 MB)"));
    }

    #[test]
    fn test_import_error_conversion() {
        let err: CliError = ImportError::MissingRoot.into();
        assert!(matches!(err, CliError::Import(_)));
        assert!(err.to_string().contains("/zabbix_export"));
    }

    #[test]
    fn test_convert_error_conversion() {
        let err: CliError = ConvertError::UnknownStage {
            stage: "9.9".to_string(),
            known: "1.0, 2.0".to_string(),
        }
        .into();
        assert!(err.to_string().contains("9.9"));
    }

    #[test]
    fn test_batch_failed_message() {
        let err = CliError::BatchFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 files failed to import");
    }
}
