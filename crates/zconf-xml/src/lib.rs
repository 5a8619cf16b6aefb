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

//! XML front end for configuration export documents.
//!
//! Reads `<zabbix_export>` documents of every supported schema version
//! (including 1.x exports, which keep most scalars in attributes) into a
//! format-neutral [`ImportDocument`], and writes current documents back out.
//!
//! # Examples
//!
//! ```
//! use zconf_xml::{export_xml, import_xml};
//! use zconf_core::import::Node;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <zabbix_export version="1.0">
//!   <hosts>
//!     <host name="server">
//!       <items><item type="3" key="ntp"/></items>
//!       <triggers>
//!         <trigger><expression>{{HOSTNAME}:ntp.last(0)}#0</expression></trigger>
//!       </triggers>
//!     </host>
//!   </hosts>
//! </zabbix_export>"#;
//!
//! let doc = import_xml(xml).unwrap();
//! assert_eq!(doc.version, "3.0");
//! assert_eq!(doc.pointer("hosts/0/items/0/key").and_then(Node::as_str), Some("net.udp.service[ntp]"));
//! assert_eq!(
//!     doc.pointer("hosts/0/triggers/0/expression").and_then(Node::as_str),
//!     Some("{{HOST.HOST}:net.udp.service[ntp].last(0)}<>0")
//! );
//!
//! let out = export_xml(&doc).unwrap();
//! assert!(out.contains("<version>3.0</version>"));
//! ```

mod error;
mod from_xml;
mod names;
mod to_xml;

pub use error::XmlImportError;
pub use from_xml::{from_xml, FromXmlConfig};
pub use to_xml::{to_xml, ToXmlConfig};

use zconf_core::import::{ImportDocument, Importer};

/// Read an XML export with default limits and migrate it to the current schema.
pub fn import_xml(xml: &str) -> Result<ImportDocument, XmlImportError> {
    let doc = from_xml(xml, &FromXmlConfig::default())?;
    Ok(Importer::new().import(doc)?)
}

/// Write a document as indented XML.
pub fn export_xml(doc: &ImportDocument) -> Result<String, XmlImportError> {
    to_xml(doc, &ToXmlConfig::default())
}
