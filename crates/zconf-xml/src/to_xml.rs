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

//! Export document to XML conversion

use crate::names::item_name;
use crate::XmlImportError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::BTreeMap;
use std::io::Cursor;
use zconf_core::import::{ExportConfig, ImportDocument, Node, ROOT_ELEMENT, VERSION_MEMBER};

/// Configuration for XML output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 4,
        }
    }
}

impl ExportConfig for ToXmlConfig {
    fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Convert a document to an XML string
///
/// The version is written as a `<version>` child of `<zabbix_export>`.
/// List members are written as elements named after the singular of the
/// list name, so `hosts` holds `<host>` elements.
pub fn to_xml(doc: &ImportDocument, config: &ToXmlConfig) -> Result<String, XmlImportError> {
    let mut writer = if config.pretty {
        Writer::new_with_indent(Cursor::new(Vec::new()), b' ', config.indent)
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| XmlImportError::write("declaration", e))?;
    writer
        .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))
        .map_err(|e| XmlImportError::write("root element", e))?;

    write_value(&mut writer, VERSION_MEMBER, &doc.version)?;
    write_members(&mut writer, &doc.root)?;

    writer
        .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
        .map_err(|e| XmlImportError::write("root element", e))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| XmlImportError::write("output", e))
}

fn write_members<W: std::io::Write>(
    writer: &mut Writer<W>,
    members: &BTreeMap<String, Node>,
) -> Result<(), XmlImportError> {
    for (name, node) in members {
        write_node(writer, name, node)?;
    }
    Ok(())
}

fn write_node<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    node: &Node,
) -> Result<(), XmlImportError> {
    match node {
        Node::Value(value) => write_value(writer, name, value),
        Node::Map(members) if members.is_empty() => write_empty(writer, name),
        Node::List(items) if items.is_empty() => write_empty(writer, name),
        Node::Map(members) => {
            open(writer, name)?;
            write_members(writer, members)?;
            close(writer, name)
        }
        Node::List(items) => {
            let child = item_name(name);
            open(writer, name)?;
            for item in items {
                write_node(writer, &child, item)?;
            }
            close(writer, name)
        }
    }
}

fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), XmlImportError> {
    if value.is_empty() {
        return write_empty(writer, name);
    }
    open(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(|e| XmlImportError::write("text", e))?;
    close(writer, name)
}

fn write_empty<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> Result<(), XmlImportError> {
    writer
        .write_event(Event::Empty(BytesStart::new(name)))
        .map_err(|e| XmlImportError::write("element", e))
}

fn open<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> Result<(), XmlImportError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| XmlImportError::write("element", e))
}

fn close<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> Result<(), XmlImportError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| XmlImportError::write("element", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_xml, FromXmlConfig};
    use zconf_core::import::ImportFormat;

    fn map(entries: &[(&str, Node)]) -> Node {
        Node::Map(entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect())
    }

    fn sample() -> ImportDocument {
        let item = map(&[
            ("key", Node::value("net.udp.service[ntp]")),
            ("name", Node::value("NTP <udp> & co")),
        ]);
        let host = map(&[
            ("host", Node::value("server")),
            ("items", Node::List(vec![item.clone(), item])),
        ]);
        ImportDocument::new("3.0", ImportFormat::Xml).with_member("hosts", Node::List(vec![host]))
    }

    #[test]
    fn test_layout() {
        let out = to_xml(&sample(), &ToXmlConfig { pretty: false, indent: 0 }).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(out.contains("<zabbix_export><version>3.0</version><hosts><host><host>server</host><items><item>"));
        assert!(out.contains("<name>NTP &lt;udp&gt; &amp; co</name>"));
        assert!(out.ends_with("</zabbix_export>"));
    }

    #[test]
    fn test_empty_values() {
        let doc = ImportDocument::new("3.0", ImportFormat::Xml)
            .with_member("description", Node::value(""))
            .with_member("groups", Node::List(Vec::new()));
        let out = to_xml(&doc, &ToXmlConfig { pretty: false, indent: 0 }).unwrap();
        assert!(out.contains("<description/>"));
        assert!(out.contains("<groups/>"));
    }

    #[test]
    fn test_written_document_reads_back() {
        let out = to_xml(&sample(), &ToXmlConfig::default()).unwrap();
        assert_eq!(from_xml(&out, &FromXmlConfig::default()).unwrap(), sample());
    }
}
