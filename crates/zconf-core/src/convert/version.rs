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

//! Declared schema versions and where conversion starts for each.

use crate::error::{ConvertError, ImportError};
use crate::import::ImportFormat;
use tracing::warn;

/// Schema version that needs no conversion.
pub const CURRENT_VERSION: &str = "3.0";

/// One recognized schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: &'static str,
    /// Formats documents of this version were exported in.
    pub formats: &'static [ImportFormat],
}

const VERSIONS: &[VersionEntry] = &[
    VersionEntry {
        version: "1.0",
        formats: &[ImportFormat::Xml],
    },
    VersionEntry {
        version: "2.0",
        formats: &[ImportFormat::Xml, ImportFormat::Json],
    },
    VersionEntry {
        version: CURRENT_VERSION,
        formats: &[ImportFormat::Xml, ImportFormat::Json],
    },
];

/// Lookup table from declared version to conversion start stage.
///
/// # Examples
///
/// ```
/// use zconf_core::convert::VersionTable;
/// use zconf_core::import::ImportFormat;
///
/// let table = VersionTable::new();
/// assert_eq!(table.current(), "3.0");
/// assert_eq!(table.start_stage("1.0", ImportFormat::Xml).unwrap(), Some("1.0"));
/// assert_eq!(table.start_stage("3.0", ImportFormat::Json).unwrap(), None);
/// assert!(table.start_stage("1.0", ImportFormat::Json).is_err());
/// assert!(table.start_stage("4.0", ImportFormat::Xml).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VersionTable {
    entries: &'static [VersionEntry],
}

impl VersionTable {
    pub fn new() -> Self {
        Self { entries: VERSIONS }
    }

    #[inline]
    pub fn current(&self) -> &'static str {
        CURRENT_VERSION
    }

    /// All recognized versions, oldest first.
    pub fn entries(&self) -> &'static [VersionEntry] {
        self.entries
    }

    pub fn get(&self, version: &str) -> Option<&'static VersionEntry> {
        self.entries.iter().find(|entry| entry.version == version)
    }

    /// Returns `true` if `version` is recognized for at least one format.
    pub fn is_supported(&self, version: &str) -> bool {
        self.get(version).is_some()
    }

    /// Returns `true` if documents of `version` can arrive in `format`.
    pub fn supports(&self, version: &str, format: ImportFormat) -> bool {
        self.get(version)
            .is_some_and(|entry| entry.formats.contains(&format))
    }

    /// First conversion stage for a document declaring `version`, or `None`
    /// when the document is already current.
    pub fn start_stage(
        &self,
        version: &str,
        format: ImportFormat,
    ) -> Result<Option<&'static str>, ImportError> {
        let entry = match self.get(version) {
            Some(entry) if entry.formats.contains(&format) => entry,
            _ => {
                warn!(version, %format, "unsupported schema version");
                return Err(ImportError::UnsupportedVersion {
                    version: version.to_string(),
                    format,
                });
            }
        };

        if entry.version == CURRENT_VERSION {
            Ok(None)
        } else {
            Ok(Some(entry.version))
        }
    }

    /// First conversion stage for a single key or expression written for
    /// `version`, in whatever format it came from. `None` when it is current.
    pub fn value_stage(&self, version: &str) -> Result<Option<&'static str>, ConvertError> {
        match self.get(version) {
            Some(entry) if entry.version == CURRENT_VERSION => Ok(None),
            Some(entry) => Ok(Some(entry.version)),
            None => Err(ConvertError::UnsupportedVersion {
                version: version.to_string(),
                supported: self
                    .entries
                    .iter()
                    .map(|entry| entry.version)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl Default for VersionTable {
    fn default() -> Self {
        Self::new()
    }
}
