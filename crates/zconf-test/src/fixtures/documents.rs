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

//! Export documents of every supported schema version.

use super::builders::{map, DocumentBuilder, HostBuilder};
use zconf_core::import::{ImportDocument, ImportFormat, Node};

/// A 1.0 XML export: simple-check keys, an agent NTP check, the
/// `{HOSTNAME}` host macro and 1.x operators.
pub fn legacy_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<zabbix_export version="1.0" date="18.10.26" time="10.00">
  <hosts>
    <host name="server">
      <status>0</status>
      <groups>
        <group>Linux servers</group>
      </groups>
      <items>
        <item type="3" key="ftp,21" value_type="3">
          <description>FTP check</description>
          <delay>30</delay>
        </item>
        <item type="3" key="ntp" value_type="3">
          <description>NTP check</description>
        </item>
        <item type="0" key="net.tcp.service[ntp]" value_type="3">
          <description>NTP via agent</description>
        </item>
        <item type="0" key="system.cpu.load[all,avg1]" value_type="0">
          <description>CPU load</description>
        </item>
      </items>
      <triggers>
        <trigger>
          <description>FTP down on {HOSTNAME}</description>
          <expression>{{HOSTNAME}:ftp,21.last(0)}=0</expression>
          <priority>3</priority>
        </trigger>
        <trigger>
          <description>Load</description>
          <expression>{server:system.cpu.load[all,avg1].last(0)}&gt;5&amp;{server:ntp.last(0)}#1</expression>
        </trigger>
      </triggers>
      <graphs>
        <graph name="Services" width="900" height="200">
          <graph_elements>
            <graph_element item="{HOSTNAME}:ftp,21">
              <color>009900</color>
            </graph_element>
            <graph_element item="server:system.cpu.load[all,avg1]">
              <color>990000</color>
            </graph_element>
          </graph_elements>
        </graph>
      </graphs>
    </host>
  </hosts>
</zabbix_export>
"#
}

/// Item keys of [`legacy_xml`] after migration, in document order.
pub fn legacy_expected_keys() -> Vec<&'static str> {
    vec![
        "net.tcp.service[ftp,,21]",
        "net.udp.service[ntp]",
        "net.udp.service[ntp]",
        "system.cpu.load[all,avg1]",
    ]
}

/// Trigger expressions of [`legacy_xml`] after migration, in document order.
pub fn legacy_expected_expressions() -> Vec<&'static str> {
    vec![
        "{{HOST.HOST}:net.tcp.service[ftp,,21].last(0)}=0",
        "{server:system.cpu.load[all,avg1].last(0)}>5 and {server:net.udp.service[ntp].last(0)}<>1",
    ]
}

/// Graph element item references of [`legacy_xml`] after migration.
pub fn legacy_expected_graph_items() -> Vec<&'static str> {
    vec![
        "{HOST.HOST}:net.tcp.service[ftp,,21]",
        "server:system.cpu.load[all,avg1]",
    ]
}

/// A 2.0 JSON export with a template, 2.x operators and a global regular
/// expression whose body must survive untouched.
pub fn v2_json() -> &'static str {
    r#"{
  "zabbix_export": {
    "version": "2.0",
    "date": "2026-10-18T10:00:00Z",
    "groups": [{"name": "Templates"}],
    "templates": [
      {
        "template": "Template App FTP",
        "items": [
          {"name": "FTP service", "type": "3", "key": "net.tcp.service[ftp,,21]", "delay": 30}
        ],
        "triggers": [
          {
            "name": "FTP is down",
            "expression": "{Template App FTP:net.tcp.service[ftp,,21].max(#3)}=0|{Template App FTP:net.tcp.service[ftp,,21].nodata(5m)}=1",
            "recovery_expression": "{Template App FTP:net.tcp.service[ftp,,21].last(0)}#0"
          }
        ]
      }
    ],
    "regexps": [
      {
        "name": "File systems",
        "expressions": [{"expression": "^(btrfs|ext2|ext3)$", "expression_type": "3"}]
      }
    ]
  }
}"#
}

/// Expressions of [`v2_json`] after migration, in document order.
pub fn v2_expected_expressions() -> Vec<&'static str> {
    vec![
        "^(btrfs|ext2|ext3)$",
        "{Template App FTP:net.tcp.service[ftp,,21].max(#3)}=0 or {Template App FTP:net.tcp.service[ftp,,21].nodata(5m)}=1",
    ]
}

/// A current (3.0) JSON export. Importing it changes nothing.
pub fn current_json() -> &'static str {
    r#"{
  "zabbix_export": {
    "version": "3.0",
    "hosts": [
      {
        "host": "server",
        "items": [{"key": "net.udp.service[ntp]"}, {"key": "agent.ping"}],
        "triggers": [
          {"expression": "{server:agent.ping.nodata(5m)}=1 and {server:net.udp.service[ntp].last(0)}<>1"}
        ]
      }
    ]
  }
}"#
}

/// A 1.0 XML export as a document value.
pub fn legacy_document() -> ImportDocument {
    DocumentBuilder::new("1.0", ImportFormat::Xml)
        .host(
            HostBuilder::new("server")
                .item("ftp,21")
                .item("ntp_perf")
                .item("net.tcp.service[ntp,,123]")
                .item("vfs.fs.size[/,pfree]")
                .trigger("{{HOSTNAME}:ftp,21.last(0)}#0|{server:vfs.fs.size[/,pfree].last(0)}<10"),
        )
        .member("date", Node::value("18.10.26"))
        .build()
}

/// A 2.0 JSON export as a document value.
pub fn v2_document() -> ImportDocument {
    DocumentBuilder::new("2.0", ImportFormat::Json)
        .template(
            HostBuilder::new("Template OS")
                .item("ftp,21")
                .trigger_with_recovery(
                    "{Template OS:agent.ping.nodata(5m)}=1&{$ENABLED}=1",
                    "{Template OS:agent.ping.nodata(5m)}#1",
                ),
        )
        .member(
            "regexps",
            Node::List(vec![map(vec![("expression", Node::value("a|b#c"))])]),
        )
        .build()
}

/// A 3.0 document.
pub fn current_document() -> ImportDocument {
    DocumentBuilder::new("3.0", ImportFormat::Json)
        .host(
            HostBuilder::new("server")
                .item("net.udp.service[ntp]")
                .trigger("{server:net.udp.service[ntp].last(0)}<>1 or {$FORCE}=1"),
        )
        .build()
}

/// A 3.0 document with no members.
pub fn empty_document() -> ImportDocument {
    DocumentBuilder::new("3.0", ImportFormat::Xml).build()
}
