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

//! JSON export document reader

use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;
use zconf_core::import::{ImportConfig, ImportDocument, ImportFormat, Node, ROOT_ELEMENT, VERSION_MEMBER};
use zconf_core::{ImportError, ImportLimits};

/// Errors that can occur while reading or writing JSON exports
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonImportError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Syntax(String),

    /// Top-level value is not an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(&'static str),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Serialize(String),

    /// The document is structurally valid JSON but not a valid export
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<serde_json::Error> for JsonImportError {
    fn from(err: serde_json::Error) -> Self {
        JsonImportError::Syntax(err.to_string())
    }
}

impl JsonImportError {
    /// Returns `true` if a configured size or depth limit rejected the input.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, JsonImportError::Import(err) if err.is_resource_limit())
    }
}

/// Configuration for JSON import
///
/// # Examples
///
/// ```
/// use zconf_json::FromJsonConfig;
///
/// let config = FromJsonConfig::builder()
///     .max_source_size(1024 * 1024)
///     .max_depth(16)
///     .build();
/// assert_eq!(config.limits.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Size and nesting bounds
    pub limits: ImportLimits,
}

impl FromJsonConfig {
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

impl ImportConfig for FromJsonConfig {
    fn limits(&self) -> ImportLimits {
        self.limits
    }
}

/// Builder for [`FromJsonConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FromJsonConfigBuilder {
    limits: ImportLimits,
}

impl FromJsonConfigBuilder {
    /// Set the maximum source size in bytes
    pub fn max_source_size(mut self, limit: usize) -> Self {
        self.limits.max_source_size = limit;
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.limits.max_depth = limit;
        self
    }

    /// Replace all limits at once
    pub fn limits(mut self, limits: ImportLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Disable all limits (trusted input only)
    pub fn unlimited(mut self) -> Self {
        self.limits = ImportLimits::unlimited();
        self
    }

    pub fn build(self) -> FromJsonConfig {
        FromJsonConfig {
            limits: self.limits,
        }
    }
}

/// Read a JSON export document
///
/// The source must be an object with a `zabbix_export` member holding the
/// `version` and the exported entities. Numbers and booleans are read as
/// their text, `null` as an empty value.
///
/// # Examples
///
/// ```
/// use zconf_json::{from_json, FromJsonConfig};
/// use zconf_core::import::Node;
///
/// let json = r#"{"zabbix_export": {"version": "2.0", "items": [{"key": "agent.ping"}]}}"#;
/// let doc = from_json(json, &FromJsonConfig::default()).unwrap();
/// assert_eq!(doc.version, "2.0");
/// assert_eq!(doc.pointer("items/0/key").and_then(Node::as_str), Some("agent.ping"));
/// ```
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<ImportDocument, JsonImportError> {
    config.limits.check_size(json.len())?;
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value_owned(value, config)
}

/// Read an already parsed JSON value
pub fn from_json_value(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<ImportDocument, JsonImportError> {
    from_json_value_owned(value.clone(), config)
}

/// Read an owned JSON value, moving its strings into the document
pub fn from_json_value_owned(
    value: JsonValue,
    config: &FromJsonConfig,
) -> Result<ImportDocument, JsonImportError> {
    let mut top = match value {
        JsonValue::Object(map) => map,
        other => return Err(JsonImportError::InvalidRoot(type_name(&other))),
    };

    let mut export = match top.remove(ROOT_ELEMENT) {
        Some(JsonValue::Object(map)) => map,
        Some(other) => {
            return Err(ImportError::InvalidTag {
                path: format!("/{}", ROOT_ELEMENT),
                message: format!("an object is expected, found {}", type_name(&other)),
            }
            .into())
        }
        None => return Err(ImportError::MissingRoot.into()),
    };

    let version = match export.remove(VERSION_MEMBER) {
        Some(JsonValue::String(s)) => s,
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(ImportError::InvalidTag {
                path: format!("/{}/{}", ROOT_ELEMENT, VERSION_MEMBER),
                message: format!("a character string is expected, found {}", type_name(&other)),
            }
            .into())
        }
        None => return Err(ImportError::MissingVersion.into()),
    };

    let root = object_to_map(export, &config.limits, 1)?;
    debug!(version = %version, members = root.len(), "read JSON export");

    Ok(ImportDocument {
        version,
        format: ImportFormat::Json,
        root,
    })
}

fn object_to_map(
    map: Map<String, JsonValue>,
    limits: &ImportLimits,
    depth: usize,
) -> Result<BTreeMap<String, Node>, JsonImportError> {
    limits.check_depth(depth)?;
    map.into_iter()
        .map(|(name, value)| value_to_node(value, limits, depth).map(|node| (name, node)))
        .collect()
}

fn value_to_node(value: JsonValue, limits: &ImportLimits, depth: usize) -> Result<Node, JsonImportError> {
    Ok(match value {
        JsonValue::String(s) => Node::Value(s),
        JsonValue::Null => Node::Value(String::new()),
        JsonValue::Bool(b) => Node::Value(b.to_string()),
        JsonValue::Number(n) => Node::Value(n.to_string()),
        JsonValue::Object(map) => Node::Map(object_to_map(map, limits, depth + 1)?),
        JsonValue::Array(items) => {
            limits.check_depth(depth + 1)?;
            Node::List(
                items
                    .into_iter()
                    .map(|item| value_to_node(item, limits, depth + 1))
                    .collect::<Result<_, _>>()?,
            )
        }
    })
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
