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

//! CLI command implementations

mod batch_import;
mod completion;
mod convert;
mod import;
mod parse;

pub use batch_import::batch_import;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use convert::{convert_expression, convert_key};
pub use import::{import, import_document, output_path, render};
pub use parse::{parse_ip, parse_key, scan};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum file size (100 MB).
/// Can be overridden via the `ZCONF_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("ZCONF_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before anything is
/// read.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the limit (configurable via `ZCONF_MAX_FILE_SIZE`)
/// - The file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use zconf_cli::commands::read_file;
///
/// # fn main() -> Result<(), zconf_cli::error::CliError> {
/// let content = read_file("export.xml")?;
/// assert!(content.contains("zabbix_export"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write output to a file, or to stdout when no file is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::io_error(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/zconf/export.xml").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(DEFAULT_MAX_FILE_SIZE, 104_857_600);
    }
}
