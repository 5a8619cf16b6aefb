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

//! Invalid inputs for error-path testing.

use zconf_core::import::ImportFormat;

/// Strings that are not valid item keys, as `(name, text)`.
pub fn invalid_item_keys() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("no_id", "[a]"),
        ("unclosed_list", "key[a"),
        ("unclosed_quote", r#"key["a]"#),
        ("stray_bracket", "key[a]]"),
        ("trailing_text", "key[a] b"),
        ("bad_char", "key!"),
        ("quote_in_bare", r#"key[a"b]"#),
        ("bracket_in_bare", "key[a[b]]"),
    ]
}

/// JSON sources every reader must reject, as `(name, text)`.
pub fn invalid_json_documents() -> Vec<(&'static str, &'static str)> {
    vec![
        ("not_json", "{"),
        ("array_root", "[]"),
        ("missing_root", r#"{"export": {"version": "2.0"}}"#),
        ("missing_version", r#"{"zabbix_export": {"hosts": []}}"#),
        ("version_array", r#"{"zabbix_export": {"version": ["2.0"]}}"#),
    ]
}

/// XML sources every reader must reject, as `(name, text)`.
pub fn invalid_xml_documents() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("unclosed", r#"<zabbix_export version="2.0">"#),
        ("mismatched", r#"<zabbix_export version="2.0"><a></b></zabbix_export>"#),
        ("missing_root", r#"<export version="2.0"/>"#),
        ("missing_version", "<zabbix_export><hosts/></zabbix_export>"),
    ]
}

/// Declared versions that have no conversion path for the format.
pub fn unsupported_versions() -> Vec<(&'static str, ImportFormat)> {
    vec![
        ("0.9", ImportFormat::Xml),
        ("1.0", ImportFormat::Json),
        ("2.0.1", ImportFormat::Xml),
        ("4.0", ImportFormat::Json),
        ("", ImportFormat::Xml),
    ]
}
