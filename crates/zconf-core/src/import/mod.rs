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

//! Import front end: the document model, per-stage document converters and
//! the [`Importer`] that drives a whole migration.
//!
//! Format readers live in `zconf-json` and `zconf-xml`; they produce an
//! [`ImportDocument`] and hand it to [`Importer::import`].
//!
//! # Examples
//!
//! ```
//! use zconf_core::import::{ImportDocument, ImportFormat, Importer, Node};
//! use std::collections::BTreeMap;
//!
//! let mut item = BTreeMap::new();
//! item.insert("key".to_string(), Node::value("ftp,21"));
//! let doc = ImportDocument::new("1.0", ImportFormat::Xml)
//!     .with_member("items", Node::List(vec![Node::Map(item)]));
//!
//! let imported = Importer::new().import(doc).unwrap();
//! assert_eq!(imported.version, "3.0");
//! assert_eq!(
//!     imported.pointer("items/0/key").and_then(Node::as_str),
//!     Some("net.tcp.service[ftp,,21]")
//! );
//! ```

mod document;

pub use document::{ImportDocument, ImportFormat, Node};

use crate::convert::{
    Converter, ConverterChain, LegacyGraphItemConverter, LegacyItemKeyConverter,
    LegacyTriggerConverter, OperatorConverter, Unchanged, VersionTable,
};
use crate::error::ImportError;
use crate::limits::ImportLimits;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Name of the root element/object of every export document.
pub const ROOT_ELEMENT: &str = "zabbix_export";

/// Root member holding the declared schema version.
pub const VERSION_MEMBER: &str = "version";

/// Members holding item keys.
pub const KEY_MEMBERS: [&str; 2] = ["key", "key_"];

/// Members holding trigger expressions.
pub const EXPRESSION_MEMBERS: [&str; 2] = ["expression", "recovery_expression"];

/// Lists of 1.x graph elements. Each element references its item as
/// `host:key` in a member named [`GRAPH_ITEM_MEMBER`].
pub const GRAPH_ELEMENTS_MEMBER: &str = "graph_elements";

/// Graph element member holding a `host:key` item reference.
pub const GRAPH_ITEM_MEMBER: &str = "item";

/// Regular expression bodies also live in `expression` members but are not
/// trigger syntax; subtrees under these members are never converted.
const OPAQUE_MEMBERS: [&str; 1] = ["regexps"];

/// Settings shared by every format reader.
pub trait ImportConfig {
    /// Size and depth bounds applied while reading.
    fn limits(&self) -> ImportLimits;
}

/// Settings shared by every format writer.
pub trait ExportConfig {
    /// Whether to indent the output.
    fn pretty(&self) -> bool;
}

/// Applies one stage's key and expression converters to a whole document.
pub struct DocumentConverter {
    keys: Box<dyn Converter<String>>,
    expressions: Box<dyn Converter<String>>,
    graph_items: Box<dyn Converter<String>>,
}

impl DocumentConverter {
    pub fn new(
        keys: impl Converter<String> + 'static,
        expressions: impl Converter<String> + 'static,
    ) -> Self {
        Self {
            keys: Box::new(keys),
            expressions: Box::new(expressions),
            graph_items: Box::new(Unchanged),
        }
    }

    /// Sets the converter for graph element item references.
    pub fn with_graph_items(mut self, graph_items: impl Converter<String> + 'static) -> Self {
        self.graph_items = Box::new(graph_items);
        self
    }

    fn convert_graph_element(&self, element: &mut BTreeMap<String, Node>) {
        if let Some(Node::Value(reference)) = element.get_mut(GRAPH_ITEM_MEMBER) {
            *reference = self.graph_items.convert(std::mem::take(reference));
        }
    }

    fn convert_map(&self, map: &mut BTreeMap<String, Node>) {
        for (name, node) in map.iter_mut() {
            self.convert_node(name, node);
        }
    }

    fn convert_node(&self, name: &str, node: &mut Node) {
        match node {
            Node::Value(value) => {
                let converter = if KEY_MEMBERS.contains(&name) {
                    &self.keys
                } else if EXPRESSION_MEMBERS.contains(&name) {
                    &self.expressions
                } else {
                    return;
                };
                *value = converter.convert(std::mem::take(value));
            }
            _ if OPAQUE_MEMBERS.contains(&name) => {}
            Node::Map(map) => {
                if name == GRAPH_ELEMENTS_MEMBER {
                    self.convert_graph_element(map);
                }
                self.convert_map(map)
            }
            Node::List(items) => {
                for item in items {
                    self.convert_node(name, item);
                }
            }
        }
    }
}

impl Converter<ImportDocument> for DocumentConverter {
    fn convert(&self, mut doc: ImportDocument) -> ImportDocument {
        self.convert_map(&mut doc.root);
        doc
    }
}

/// Document chain with the fixed schema stages.
pub fn document_chain() -> ConverterChain<ImportDocument> {
    ConverterChain::new()
        .add(
            "1.0",
            DocumentConverter::new(LegacyItemKeyConverter::new(), LegacyTriggerConverter::new())
                .with_graph_items(LegacyGraphItemConverter::new()),
        )
        .add(
            "2.0",
            DocumentConverter::new(Unchanged, OperatorConverter::new()),
        )
}

/// Validates the declared version and migrates a document to the current
/// schema.
///
/// Build one per import session; it is read-only and can be shared.
#[derive(Debug)]
pub struct Importer {
    table: VersionTable,
    chain: ConverterChain<ImportDocument>,
}

impl Importer {
    pub fn new() -> Self {
        Self {
            table: VersionTable::new(),
            chain: document_chain(),
        }
    }

    pub fn version_table(&self) -> &VersionTable {
        &self.table
    }

    /// Converts `doc` from its declared version and stamps the current version.
    ///
    /// An unrecognized version aborts the import.
    pub fn import(&self, mut doc: ImportDocument) -> Result<ImportDocument, ImportError> {
        let start = self.table.start_stage(&doc.version, doc.format)?;
        info!(version = %doc.version, format = %doc.format, "importing document");

        if let Some(stage) = start {
            doc = self.chain.convert(doc, stage)?;
            debug!(from = stage, to = self.table.current(), "document converted");
        }
        doc.version = self.table.current().to_string();
        Ok(doc)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
