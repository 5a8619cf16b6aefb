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

//! XML export document reader

use crate::names::singularize;
use crate::XmlImportError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use tracing::debug;
use zconf_core::import::{ImportConfig, ImportDocument, ImportFormat, Node, ROOT_ELEMENT, VERSION_MEMBER};
use zconf_core::{ImportError, ImportLimits};

/// Configuration for XML import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FromXmlConfig {
    /// Size and nesting bounds
    pub limits: ImportLimits,
}

impl FromXmlConfig {
    pub fn with_limits(mut self, limits: ImportLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl ImportConfig for FromXmlConfig {
    fn limits(&self) -> ImportLimits {
        self.limits
    }
}

/// An element as read, before list inference.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

/// Read an XML export document
///
/// The root element must be `zabbix_export`. The version comes from its
/// `version` attribute or a `version` child element. Below the root:
///
/// - an element with neither attributes nor children is a value
/// - an element whose children are all named after the singular of its own
///   name (`<items><item/>...</items>`) is a list
/// - any other element is a map; attributes become values and a child name
///   that repeats becomes a list
///
/// # Examples
///
/// ```
/// use zconf_xml::{from_xml, FromXmlConfig};
/// use zconf_core::import::Node;
///
/// let xml = r#"<zabbix_export version="1.0">
///     <hosts><host name="server">
///         <items><item key="ftp,21" type="3"/></items>
///     </host></hosts>
/// </zabbix_export>"#;
///
/// let doc = from_xml(xml, &FromXmlConfig::default()).unwrap();
/// assert_eq!(doc.version, "1.0");
/// assert_eq!(doc.pointer("hosts/0/items/0/key").and_then(Node::as_str), Some("ftp,21"));
/// ```
pub fn from_xml(xml: &str, config: &FromXmlConfig) -> Result<ImportDocument, XmlImportError> {
    config.limits.check_size(xml.len())?;
    let root = read_tree(xml, &config.limits)?;
    if root.name != ROOT_ELEMENT {
        return Err(ImportError::MissingRoot.into());
    }

    let Element {
        attributes,
        children,
        ..
    } = root;

    let mut version = None;
    let mut attrs = Vec::with_capacity(attributes.len());
    for (name, value) in attributes {
        if name == VERSION_MEMBER {
            version = Some(value);
        } else {
            attrs.push((name, value));
        }
    }

    let mut members = Vec::with_capacity(children.len());
    for child in children {
        if child.name == VERSION_MEMBER && version.is_none() {
            version = Some(child.text);
        } else {
            members.push(child);
        }
    }

    let version = version.ok_or(ImportError::MissingVersion)?;
    let root = to_map(attrs, members);
    debug!(version = %version, members = root.len(), "read XML export");

    Ok(ImportDocument {
        version,
        format: ImportFormat::Xml,
        root,
    })
}

/// Reads the element tree without recursion.
fn read_tree(xml: &str, limits: &ImportLimits) -> Result<Element, XmlImportError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlImportError::syntax(reader.buffer_position(), e))?;

        let finished = match event {
            Event::Start(start) => {
                limits.check_depth(stack.len() + 1)?;
                stack.push(open_element(&reader, &start)?);
                None
            }
            Event::Empty(start) => {
                limits.check_depth(stack.len() + 1)?;
                Some(open_element(&reader, &start)?)
            }
            Event::End(_) => stack.pop(),
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    let text = text
                        .unescape()
                        .map_err(|e| XmlImportError::syntax(reader.buffer_position(), e))?;
                    current.text.push_str(&text);
                }
                None
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
                None
            }
            Event::Eof => {
                return Err(match stack.last() {
                    None => ImportError::MissingRoot.into(),
                    Some(open) => XmlImportError::syntax(
                        reader.buffer_position(),
                        format!("unclosed element <{}>", open.name),
                    ),
                })
            }
            _ => None,
        };

        if let Some(element) = finished {
            match stack.last_mut() {
                Some(parent) => parent.children.push(element),
                None => return Ok(element),
            }
        }
    }
}

fn open_element(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, XmlImportError> {
    let mut element = Element {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        ..Element::default()
    };
    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlImportError::syntax(reader.buffer_position(), e))?;
        let value = attr
            .unescape_value()
            .map_err(|e| XmlImportError::syntax(reader.buffer_position(), e))?;
        element.attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

fn to_node(element: Element) -> Node {
    if element.children.is_empty() && element.attributes.is_empty() {
        return Node::Value(element.text);
    }
    if element.attributes.is_empty() && is_list(&element) {
        return Node::List(element.children.into_iter().map(to_node).collect());
    }
    Node::Map(to_map(element.attributes, element.children))
}

fn is_list(element: &Element) -> bool {
    match singularize(&element.name) {
        Some(singular) => element.children.iter().all(|child| child.name == singular),
        None => false,
    }
}

fn to_map(attributes: Vec<(String, String)>, children: Vec<Element>) -> BTreeMap<String, Node> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for child in &children {
        *counts.entry(child.name.as_str()).or_default() += 1;
    }
    let repeated: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect();

    let mut map: BTreeMap<String, Node> = attributes
        .into_iter()
        .map(|(name, value)| (name, Node::Value(value)))
        .collect();

    for child in children {
        let name = child.name.clone();
        let node = to_node(child);
        if repeated.contains(&name) {
            let slot = map.entry(name).or_insert_with(|| Node::List(Vec::new()));
            if !matches!(slot, Node::List(_)) {
                *slot = Node::List(Vec::new());
            }
            if let Node::List(items) = slot {
                items.push(node);
            }
        } else {
            map.insert(name, node);
        }
    }
    map
}
