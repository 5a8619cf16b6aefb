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

//! Property-based roundtrip tests for XML export documents
//!
//! # Properties Tested
//!
//! 1. **Roundtrip Preservation**: document → XML → document preserves values
//! 2. **Escaping**: markup characters in values survive a round trip
//! 3. **Lists**: plural containers of singular children read back as lists
//!
//! # Known Limitations
//!
//! - **Whitespace**: leading and trailing whitespace of text values is trimmed
//! - **Empty containers**: an empty map or list reads back as an empty value

use proptest::prelude::*;
use zconf_core::import::{ImportDocument, ImportFormat, Importer, Node};
use zconf_test::fixtures::builders::map;
use zconf_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9<>&{}#|.:,\\[\\]\"'=]{1,40}"
}

fn roundtrip(doc: &ImportDocument, pretty: bool) -> Result<ImportDocument, TestCaseError> {
    let config = ToXmlConfig {
        pretty,
        ..ToXmlConfig::default()
    };
    let xml = to_xml(doc, &config).map_err(|e| TestCaseError::fail(e.to_string()))?;
    from_xml(&xml, &FromXmlConfig::default()).map_err(|e| TestCaseError::fail(e.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scalar members survive a round trip, markup characters included.
    #[test]
    fn prop_xml_roundtrip_values(
        name in "[a-z][a-z0-9_]{0,12}",
        value in text(),
        pretty in any::<bool>()
    ) {
        prop_assume!(name != "version");
        let doc = ImportDocument::new("3.0", ImportFormat::Xml).with_member(name, Node::Value(value));
        prop_assert_eq!(roundtrip(&doc, pretty)?, doc);
    }

    /// Item lists keep their order and content.
    #[test]
    fn prop_xml_roundtrip_items(
        keys in prop::collection::vec(text(), 1..8),
        pretty in any::<bool>()
    ) {
        let items = keys
            .iter()
            .map(|key| map(vec![("key", Node::value(key.as_str())), ("type", Node::value("0"))]))
            .collect();
        let doc = ImportDocument::new("3.0", ImportFormat::Xml)
            .with_member("items", Node::List(items));
        prop_assert_eq!(roundtrip(&doc, pretty)?, doc);
    }

    /// Importing a current document read from XML changes nothing.
    #[test]
    fn prop_current_xml_import_unchanged(expressions in prop::collection::vec(text(), 1..5)) {
        let triggers = expressions
            .iter()
            .map(|e| map(vec![("expression", Node::value(e.as_str()))]))
            .collect();
        let doc = ImportDocument::new("3.0", ImportFormat::Xml)
            .with_member("triggers", Node::List(triggers));

        let read = roundtrip(&doc, true)?;
        let imported = Importer::new().import(read.clone()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(imported, read);
    }
}

#[test]
fn test_whitespace_is_trimmed() {
    let doc = ImportDocument::new("3.0", ImportFormat::Xml).with_member("name", Node::value("  padded  "));
    let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
    let back = from_xml(&xml, &FromXmlConfig::default()).unwrap();
    assert_eq!(back.get("name").and_then(Node::as_str), Some("padded"));
}

#[test]
fn test_empty_list_reads_back_as_value() {
    let doc = ImportDocument::new("3.0", ImportFormat::Xml).with_member("hosts", Node::List(vec![]));
    let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
    let back = from_xml(&xml, &FromXmlConfig::default()).unwrap();
    assert_eq!(back.get("hosts"), Some(&Node::value("")));
}
