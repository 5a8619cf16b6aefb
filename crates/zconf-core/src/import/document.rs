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

//! Format-neutral import document tree.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Container format a document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImportFormat {
    Xml,
    Json,
}

impl ImportFormat {
    /// Detects the format from a file extension (`.xml`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImportFormat::Xml => "xml",
            ImportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(ImportFormat::Xml),
            "json" => Ok(ImportFormat::Json),
            _ => Err(format!("unknown import format '{}' (expected xml or json)", s)),
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node {
    Value(String),
    Map(BTreeMap<String, Node>),
    List(Vec<Node>),
}

impl Node {
    pub fn value(value: impl Into<String>) -> Self {
        Node::Value(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Member `name` of a map node.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.as_map()?.get(name)
    }

    /// Follows a `/`-separated path of member names and list indices.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zconf_core::import::Node;
    ///
    /// let mut item = BTreeMap::new();
    /// item.insert("key".to_string(), Node::value("agent.ping"));
    /// let items = Node::List(vec![Node::Map(item)]);
    /// let mut host = BTreeMap::new();
    /// host.insert("items".to_string(), items);
    /// let host = Node::Map(host);
    ///
    /// assert_eq!(host.pointer("items/0/key").and_then(Node::as_str), Some("agent.ping"));
    /// assert!(host.pointer("items/1/key").is_none());
    /// ```
    pub fn pointer(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| match node {
                Node::Map(m) => m.get(segment),
                Node::List(items) => items.get(segment.parse::<usize>().ok()?),
                Node::Value(_) => None,
            })
    }

    /// Nesting depth: 0 for a value, 1 + deepest child for containers.
    pub fn depth(&self) -> usize {
        match self {
            Node::Value(_) => 0,
            Node::Map(m) => 1 + m.values().map(Node::depth).max().unwrap_or(0),
            Node::List(items) => 1 + items.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
}

/// An export document: declared version, source format and the members of
/// the `zabbix_export` root other than `version`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDocument {
    pub version: String,
    pub format: ImportFormat,
    pub root: BTreeMap<String, Node>,
}

impl ImportDocument {
    pub fn new(version: impl Into<String>, format: ImportFormat) -> Self {
        Self {
            version: version.into(),
            format,
            root: BTreeMap::new(),
        }
    }

    /// Adds a root member.
    pub fn with_member(mut self, name: impl Into<String>, node: Node) -> Self {
        self.root.insert(name.into(), node);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.root.get(name)
    }

    /// Follows a `/`-separated path from the root.
    pub fn pointer(&self, path: &str) -> Option<&Node> {
        let path = path.trim_start_matches('/');
        let (first, rest) = path.split_once('/').unwrap_or((path, ""));
        self.root.get(first)?.pointer(rest)
    }

    /// Collects every value stored under a member named `name`, in document order.
    pub fn values_named(&self, name: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack: Vec<(&str, &Node)> = self.root.iter().rev().map(|(k, v)| (k.as_str(), v)).collect();
        while let Some((member, node)) = stack.pop() {
            match node {
                Node::Value(v) if member == name => out.push(v.as_str()),
                Node::Value(_) => {}
                Node::Map(m) => stack.extend(m.iter().rev().map(|(k, v)| (k.as_str(), v))),
                Node::List(items) => stack.extend(items.iter().rev().map(|item| (member, item))),
            }
        }
        out
    }
}
