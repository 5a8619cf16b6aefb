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

//! Export document to JSON conversion

use crate::JsonImportError;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use zconf_core::import::{ExportConfig, ImportDocument, Node, ROOT_ELEMENT, VERSION_MEMBER};

/// Configuration for JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Indent the output (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportConfig for ToJsonConfig {
    fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Convert a document to a JSON string
pub fn to_json(doc: &ImportDocument, config: &ToJsonConfig) -> Result<String, JsonImportError> {
    let value = to_json_value(doc);
    let result = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    result.map_err(|e| JsonImportError::Serialize(e.to_string()))
}

/// Convert a document to a `serde_json::Value` wrapped in the export root
pub fn to_json_value(doc: &ImportDocument) -> JsonValue {
    let mut export = map_to_json(&doc.root);
    export.insert(VERSION_MEMBER.to_string(), JsonValue::String(doc.version.clone()));

    let mut top = Map::with_capacity(1);
    top.insert(ROOT_ELEMENT.to_string(), JsonValue::Object(export));
    JsonValue::Object(top)
}

fn map_to_json(map: &BTreeMap<String, Node>) -> Map<String, JsonValue> {
    let mut out = Map::with_capacity(map.len() + 1);
    for (name, node) in map {
        out.insert(name.clone(), node_to_json(node));
    }
    out
}

fn node_to_json(node: &Node) -> JsonValue {
    match node {
        Node::Value(s) => JsonValue::String(s.clone()),
        Node::Map(map) => JsonValue::Object(map_to_json(map)),
        Node::List(items) => JsonValue::Array(items.iter().map(node_to_json).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_json, FromJsonConfig};
    use serde_json::json;
    use zconf_core::import::ImportFormat;

    fn sample() -> ImportDocument {
        let item: BTreeMap<String, Node> = [("key".to_string(), Node::value("agent.ping"))]
            .into_iter()
            .collect();
        ImportDocument::new("3.0", ImportFormat::Json)
            .with_member("items", Node::List(vec![Node::Map(item)]))
    }

    #[test]
    fn test_to_json_value() {
        assert_eq!(
            to_json_value(&sample()),
            json!({"zabbix_export": {"version": "3.0", "items": [{"key": "agent.ping"}]}})
        );
    }

    #[test]
    fn test_compact_output() {
        let out = to_json(&sample(), &ToJsonConfig { pretty: false }).unwrap();
        assert!(!out.contains('\n'));
        assert!(to_json(&sample(), &ToJsonConfig::default()).unwrap().contains('\n'));
    }

    #[test]
    fn test_written_document_reads_back() {
        let out = to_json(&sample(), &ToJsonConfig::default()).unwrap();
        assert_eq!(from_json(&out, &FromJsonConfig::default()).unwrap(), sample());
    }
}
