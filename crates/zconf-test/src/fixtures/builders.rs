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

//! Builders for customizable document fixtures.

use std::collections::BTreeMap;
use zconf_core::import::{ImportDocument, ImportFormat, Node};

/// Builds a map node from `(name, node)` pairs.
pub fn map(entries: Vec<(&str, Node)>) -> Node {
    Node::Map(
        entries
            .into_iter()
            .map(|(name, node)| (name.to_string(), node))
            .collect(),
    )
}

/// Builder for export documents.
///
/// # Examples
///
/// ```
/// use zconf_test::fixtures::builders::{DocumentBuilder, HostBuilder};
/// use zconf_core::import::{ImportFormat, Node};
///
/// let doc = DocumentBuilder::new("1.0", ImportFormat::Xml)
///     .host(HostBuilder::new("server").item("ftp,21").trigger("{server:ftp,21.last(0)}=0"))
///     .member("date", Node::value("18.10.26"))
///     .build();
///
/// assert_eq!(doc.pointer("hosts/0/host").and_then(Node::as_str), Some("server"));
/// assert_eq!(doc.pointer("hosts/0/items/0/key").and_then(Node::as_str), Some("ftp,21"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    version: String,
    format: ImportFormat,
    root: BTreeMap<String, Node>,
    hosts: Vec<Node>,
    templates: Vec<Node>,
}

impl DocumentBuilder {
    pub fn new(version: impl Into<String>, format: ImportFormat) -> Self {
        Self {
            version: version.into(),
            format,
            root: BTreeMap::new(),
            hosts: Vec::new(),
            templates: Vec::new(),
        }
    }

    /// Adds a host under `hosts`.
    pub fn host(mut self, host: HostBuilder) -> Self {
        self.hosts.push(host.build("host"));
        self
    }

    /// Adds a template under `templates`.
    pub fn template(mut self, template: HostBuilder) -> Self {
        self.templates.push(template.build("template"));
        self
    }

    /// Sets an arbitrary root member.
    pub fn member(mut self, name: &str, node: Node) -> Self {
        self.root.insert(name.to_string(), node);
        self
    }

    pub fn build(self) -> ImportDocument {
        let mut doc = ImportDocument::new(self.version, self.format);
        doc.root = self.root;
        if !self.hosts.is_empty() {
            doc.root.insert("hosts".to_string(), Node::List(self.hosts));
        }
        if !self.templates.is_empty() {
            doc.root.insert("templates".to_string(), Node::List(self.templates));
        }
        doc
    }
}

/// Builder for a host or template with items and triggers.
#[derive(Debug, Clone)]
pub struct HostBuilder {
    name: String,
    items: Vec<Node>,
    triggers: Vec<Node>,
}

impl HostBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Adds an item with the given key.
    pub fn item(mut self, key: &str) -> Self {
        self.items.push(map(vec![("key", Node::value(key))]));
        self
    }

    /// Adds a trigger with the given expression.
    pub fn trigger(mut self, expression: &str) -> Self {
        self.triggers.push(map(vec![("expression", Node::value(expression))]));
        self
    }

    /// Adds a trigger with a problem and a recovery expression.
    pub fn trigger_with_recovery(mut self, expression: &str, recovery: &str) -> Self {
        self.triggers.push(map(vec![
            ("expression", Node::value(expression)),
            ("recovery_expression", Node::value(recovery)),
        ]));
        self
    }

    /// Builds the host node; `name_member` is `host` or `template`.
    fn build(self, name_member: &str) -> Node {
        let mut entries = vec![(name_member, Node::value(self.name))];
        if !self.items.is_empty() {
            entries.push(("items", Node::List(self.items)));
        }
        if !self.triggers.is_empty() {
            entries.push(("triggers", Node::List(self.triggers)));
        }
        map(entries)
    }
}
