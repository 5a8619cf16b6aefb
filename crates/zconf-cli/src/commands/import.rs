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

//! Import command - read an export document, migrate it and write it back out

use super::{read_file, write_output};
use crate::error::CliError;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;
use zconf_core::import::{ImportDocument, ImportFormat, Importer};
use zconf_json::{from_json, to_json, FromJsonConfig, ToJsonConfig};
use zconf_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};

/// Read an export document from `path` and migrate it to the current schema.
///
/// The format is taken from `format` or, when absent, from the file extension.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the format cannot be determined,
/// the document is malformed, or its version is not supported.
pub fn import_document(path: &Path, format: Option<ImportFormat>) -> Result<ImportDocument, CliError> {
    let format = match format.or_else(|| ImportFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(CliError::invalid_input(format!(
                "cannot determine the format of '{}'; use --format xml|json",
                path.display()
            )))
        }
    };

    let content = read_file(path)?;
    let doc = match format {
        ImportFormat::Json => from_json(&content, &FromJsonConfig::default())?,
        ImportFormat::Xml => from_xml(&content, &FromXmlConfig::default())?,
    };
    let declared = doc.version.clone();
    let doc = Importer::new().import(doc)?;
    info!(file = %path.display(), %format, from = %declared, to = %doc.version, "imported");
    Ok(doc)
}

/// Serialize a document in the given format.
pub fn render(doc: &ImportDocument, format: ImportFormat) -> Result<String, CliError> {
    Ok(match format {
        ImportFormat::Json => to_json(doc, &ToJsonConfig::default())?,
        ImportFormat::Xml => to_xml(doc, &ToXmlConfig::default())?,
    })
}

/// Where `batch-import` writes the converted copy of `input`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zconf_cli::commands::output_path;
/// use zconf_core::import::ImportFormat;
///
/// let out = output_path(Path::new("exports/hosts.xml"), Path::new("out"), ImportFormat::Json);
/// assert_eq!(out, Path::new("out/hosts.json"));
/// ```
pub fn output_path(input: &Path, out_dir: &Path, format: ImportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    out_dir.join(format!("{}.{}", stem, format.extension()))
}

/// Import one export file and write the migrated document.
///
/// Output goes to `output` or stdout, in format `to` (default: the input format).
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zconf_cli::commands::import;
/// use zconf_core::import::ImportFormat;
///
/// # fn main() -> Result<(), zconf_cli::error::CliError> {
/// // Migrate a 1.0 XML export and write it as current JSON
/// import(Path::new("legacy.xml"), None, Some(ImportFormat::Json), Some(Path::new("current.json")))?;
/// # Ok(())
/// # }
/// ```
pub fn import(
    file: &Path,
    format: Option<ImportFormat>,
    to: Option<ImportFormat>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let doc = match import_document(file, format) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), file.display());
            return Err(e);
        }
    };

    let rendered = render(&doc, to.unwrap_or(doc.format))?;
    write_output(&rendered, output)?;

    if let Some(path) = output {
        println!("{} {} -> {}", "✓".green().bold(), file.display(), path.display());
    }
    Ok(())
}
