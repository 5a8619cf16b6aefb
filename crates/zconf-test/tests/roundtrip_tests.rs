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

//! Fixture-driven tests across the format readers, writers and converters.
//!
//! These tests verify:
//! - every sample key and migration behaves as the fixtures state
//! - every fixture document survives JSON and XML round trips
//! - legacy and 2.0 exports migrate to the expected current content
//! - every invalid input is rejected by its reader

use zconf_core::convert::{expression_chain, key_chain};
use zconf_core::import::{ImportDocument, ImportFormat, Importer};
use zconf_core::ItemKey;
use zconf_json::{from_json, to_json, FromJsonConfig, ToJsonConfig};
use zconf_test::fixtures;
use zconf_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};

fn reimport_json(doc: &ImportDocument) -> ImportDocument {
    let json = to_json(doc, &ToJsonConfig::default()).unwrap();
    from_json(&json, &FromJsonConfig::default()).unwrap()
}

fn reimport_xml(doc: &ImportDocument) -> ImportDocument {
    let xml = to_xml(doc, &ToXmlConfig::default()).unwrap();
    from_xml(&xml, &FromXmlConfig::default()).unwrap()
}

// =============================================================================
// Sample Tests
// =============================================================================

#[test]
fn sample_keys_parse() {
    for (text, id, count) in fixtures::item_keys() {
        let key: ItemKey = text
            .parse()
            .unwrap_or_else(|e| panic!("{:?} failed to parse: {}", text, e));
        assert_eq!(key.id(), id, "{}", text);
        assert_eq!(key.parameters().len(), count, "{}", text);
        assert_eq!(key.to_string().parse::<ItemKey>().unwrap(), key, "{}", text);
    }
}

#[test]
fn invalid_keys_rejected() {
    for (name, text) in fixtures::errors::invalid_item_keys() {
        assert!(text.parse::<ItemKey>().is_err(), "{} parsed: {:?}", name, text);
    }
}

#[test]
fn key_migrations() {
    let chain = key_chain();
    for (stage, input, expected) in fixtures::key_migrations() {
        assert_eq!(chain.convert(input.to_string(), stage).unwrap(), expected, "{}", input);
    }
}

#[test]
fn expression_migrations() {
    let chain = expression_chain();
    for (stage, input, expected) in fixtures::expression_migrations() {
        let once = chain.convert(input.to_string(), stage).unwrap();
        assert_eq!(once, expected, "{}", input);
        assert_eq!(chain.convert(once.clone(), stage).unwrap(), once, "not idempotent: {}", input);
    }
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn fixtures_roundtrip_through_json() {
    for (name, fixture) in fixtures::all() {
        let mut doc = fixture();
        doc.format = ImportFormat::Json;
        assert_eq!(reimport_json(&doc), doc, "{}", name);
    }
}

#[test]
fn fixtures_roundtrip_through_xml() {
    for (name, fixture) in fixtures::all() {
        let mut doc = fixture();
        doc.format = ImportFormat::Xml;
        assert_eq!(reimport_xml(&doc), doc, "{}", name);
    }
}

// =============================================================================
// Migration Tests
// =============================================================================

#[test]
fn legacy_xml_migrates() {
    let doc = zconf_xml::import_xml(fixtures::legacy_xml()).unwrap();
    assert_eq!(doc.version, "3.0");
    assert_eq!(doc.values_named("key"), fixtures::legacy_expected_keys());
    assert_eq!(doc.values_named("expression"), fixtures::legacy_expected_expressions());
    assert_eq!(doc.values_named("item"), fixtures::legacy_expected_graph_items());
    assert!(
        doc.values_named("description").contains(&"FTP down on {HOSTNAME}"),
        "only keys and expressions are rewritten"
    );
}

#[test]
fn v2_json_migrates() {
    let doc = zconf_json::import_json(fixtures::v2_json()).unwrap();
    assert_eq!(doc.version, "3.0");
    assert_eq!(doc.values_named("key"), vec!["net.tcp.service[ftp,,21]"]);
    assert_eq!(doc.values_named("expression"), fixtures::v2_expected_expressions());
    assert_eq!(
        doc.values_named("recovery_expression"),
        vec!["{Template App FTP:net.tcp.service[ftp,,21].last(0)}<>0"]
    );
}

#[test]
fn current_json_unchanged() {
    let read = from_json(fixtures::current_json(), &FromJsonConfig::default()).unwrap();
    let imported = Importer::new().import(read.clone()).unwrap();
    assert_eq!(imported, read);
}

#[test]
fn import_then_export_is_stable() {
    let importer = Importer::new();
    let migrated = importer.import(fixtures::legacy_document()).unwrap();

    let again = importer.import(reimport_xml(&migrated)).unwrap();
    assert_eq!(again, migrated);

    let mut as_json = migrated.clone();
    as_json.format = ImportFormat::Json;
    assert_eq!(importer.import(reimport_json(&as_json)).unwrap(), as_json);
}

#[test]
fn builder_documents_migrate() {
    let importer = Importer::new();

    let legacy = importer.import(fixtures::legacy_document()).unwrap();
    assert_eq!(
        legacy.values_named("key"),
        vec![
            "net.tcp.service[ftp,,21]",
            "net.udp.service.perf[ntp]",
            "net.udp.service[ntp,,123]",
            "vfs.fs.size[/,pfree]",
        ]
    );
    assert_eq!(
        legacy.values_named("expression"),
        vec!["{{HOST.HOST}:net.tcp.service[ftp,,21].last(0)}<>0 or {server:vfs.fs.size[/,pfree].last(0)}<10"]
    );

    let v2 = importer.import(fixtures::v2_document()).unwrap();
    assert_eq!(v2.values_named("key"), vec!["ftp,21"]);
    assert_eq!(
        v2.values_named("expression"),
        vec!["a|b#c", "{Template OS:agent.ping.nodata(5m)}=1 and {$ENABLED}=1"]
    );
    assert_eq!(
        v2.values_named("recovery_expression"),
        vec!["{Template OS:agent.ping.nodata(5m)}<>1"]
    );
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn invalid_json_rejected() {
    for (name, text) in fixtures::errors::invalid_json_documents() {
        assert!(from_json(text, &FromJsonConfig::default()).is_err(), "{}", name);
    }
}

#[test]
fn invalid_xml_rejected() {
    for (name, text) in fixtures::errors::invalid_xml_documents() {
        assert!(from_xml(text, &FromXmlConfig::default()).is_err(), "{}", name);
    }
}

#[test]
fn unsupported_versions_rejected() {
    let importer = Importer::new();
    for (version, format) in fixtures::errors::unsupported_versions() {
        let doc = ImportDocument::new(version, format);
        assert!(importer.import(doc).is_err(), "{} {}", version, format);
    }
}
