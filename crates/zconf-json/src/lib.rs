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

//! JSON front end for configuration export documents.
//!
//! Reads a `{"zabbix_export": {"version": ..., ...}}` document into a
//! format-neutral [`ImportDocument`], and writes one back out.
//!
//! # Examples
//!
//! ```
//! use zconf_json::{import_json, export_json};
//! use zconf_core::import::Node;
//!
//! let json = r#"{"zabbix_export": {
//!     "version": "2.0",
//!     "triggers": [{"expression": "{server:agent.ping.nodata(5m)}#0"}]
//! }}"#;
//!
//! let doc = import_json(json).unwrap();
//! assert_eq!(doc.version, "3.0");
//! assert_eq!(
//!     doc.pointer("triggers/0/expression").and_then(Node::as_str),
//!     Some("{server:agent.ping.nodata(5m)}<>0")
//! );
//!
//! let out = export_json(&doc).unwrap();
//! assert!(out.contains("\"3.0\""));
//! ```

mod from_json;
mod to_json;

pub use from_json::{
    from_json, from_json_value, from_json_value_owned, FromJsonConfig, FromJsonConfigBuilder,
    JsonImportError,
};
pub use to_json::{to_json, to_json_value, ToJsonConfig};

use zconf_core::import::{ImportDocument, Importer};

/// Read a JSON export with default limits and migrate it to the current schema.
pub fn import_json(json: &str) -> Result<ImportDocument, JsonImportError> {
    let doc = from_json(json, &FromJsonConfig::default())?;
    Ok(Importer::new().import(doc)?)
}

/// Write a document as pretty-printed JSON.
pub fn export_json(doc: &ImportDocument) -> Result<String, JsonImportError> {
    to_json(doc, &ToJsonConfig::default())
}
