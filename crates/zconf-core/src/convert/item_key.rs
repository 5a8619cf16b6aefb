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

//! Item key rewrites for 1.x exports.

use super::Converter;
use crate::key::{ItemKey, Parameter};
use crate::parser::function_macro::scan_simple_check;

const TCP_SERVICE: &str = "net.tcp.service";
const TCP_SERVICE_PERF: &str = "net.tcp.service.perf";

/// Migrates 1.x item keys to 2.0.
///
/// - Simple checks `svc`, `svc,port`, `svc_perf` and `svc_perf,port` become
///   `net.tcp.service[svc]`, `net.tcp.service[svc,,port]`,
///   `net.tcp.service.perf[svc]` and `net.tcp.service.perf[svc,,port]`.
/// - `net.tcp.service[ntp,...]` and its `.perf` variant move to
///   `net.udp.service`, since NTP runs over UDP.
///
/// Any other text is returned exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyItemKeyConverter;

impl LegacyItemKeyConverter {
    pub fn new() -> Self {
        Self
    }

    /// Converts one key. Keys that need no rewrite come back unchanged.
    pub fn convert_key(&self, key: &str) -> String {
        let (parsed, rewritten) = match scan_simple_check(key, 0) {
            Some((end, check)) if end == key.len() => (expand_simple_check(check), true),
            _ => match key.parse::<ItemKey>() {
                Ok(parsed) => (parsed, false),
                Err(_) => return key.to_string(),
            },
        };

        match move_ntp_to_udp(&parsed) {
            Some(udp) => udp.to_string(),
            None if rewritten => parsed.to_string(),
            None => key.to_string(),
        }
    }
}

impl Converter<String> for LegacyItemKeyConverter {
    fn convert(&self, value: String) -> String {
        let converted = self.convert_key(&value);
        if converted == value {
            value
        } else {
            converted
        }
    }
}

/// Migrates 1.x graph element item references to 2.0.
///
/// A reference is `host:key`. The key part goes through
/// [`LegacyItemKeyConverter`] and the `{HOSTNAME}` host macro becomes
/// `{HOST.HOST}`. The host ends at the first colon; the key may hold more.
/// Text without a colon is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyGraphItemConverter {
    keys: LegacyItemKeyConverter,
}

impl LegacyGraphItemConverter {
    pub fn new() -> Self {
        Self {
            keys: LegacyItemKeyConverter::new(),
        }
    }

    pub fn convert_reference(&self, reference: &str) -> String {
        let Some((host, key)) = reference.split_once(':') else {
            return reference.to_string();
        };
        let host = if host == "{HOSTNAME}" { "{HOST.HOST}" } else { host };
        format!("{}:{}", host, self.keys.convert_key(key))
    }
}

impl Converter<String> for LegacyGraphItemConverter {
    fn convert(&self, value: String) -> String {
        let converted = self.convert_reference(&value);
        if converted == value {
            value
        } else {
            converted
        }
    }
}

/// `ftp_perf,21` (id `ftp_perf`, params `[21]`) to `net.tcp.service.perf[ftp,,21]`.
fn expand_simple_check(check: ItemKey) -> ItemKey {
    let (word, params) = check.into_parts();
    let (service, id) = match word.strip_suffix("_perf") {
        Some(service) => (service.to_string(), TCP_SERVICE_PERF),
        None => (word, TCP_SERVICE),
    };

    let mut parameters = vec![Parameter::Scalar(service)];
    if let Some(port) = params.into_iter().next() {
        parameters.push(Parameter::Scalar(String::new()));
        parameters.push(port);
    }
    ItemKey::from_parts(id.to_string(), parameters)
}

fn move_ntp_to_udp(key: &ItemKey) -> Option<ItemKey> {
    let id = match key.id() {
        TCP_SERVICE => "net.udp.service",
        TCP_SERVICE_PERF => "net.udp.service.perf",
        _ => return None,
    };
    if key.scalar(0) != Some("ntp") {
        return None;
    }
    Some(ItemKey::from_parts(id.to_string(), key.parameters().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(s: &str) -> String {
        LegacyItemKeyConverter::new().convert(s.to_string())
    }

    #[test]
    fn test_ntp_moves_to_udp() {
        assert_eq!(convert("net.tcp.service[ntp]"), "net.udp.service[ntp]");
        assert_eq!(convert("net.tcp.service[ntp,,123]"), "net.udp.service[ntp,,123]");
        assert_eq!(convert("net.tcp.service.perf[ntp]"), "net.udp.service.perf[ntp]");
    }

    #[test]
    fn test_other_services_untouched() {
        assert_eq!(convert("net.tcp.service[ssh]"), "net.tcp.service[ssh]");
        assert_eq!(convert("net.tcp.service[ssh, ,22]"), "net.tcp.service[ssh, ,22]");
    }

    #[test]
    fn test_unrelated_keys_untouched() {
        assert_eq!(convert("myitem"), "myitem");
        assert_eq!(convert("system.cpu.load[all,avg1]"), "system.cpu.load[all,avg1]");
        assert_eq!(convert(r#"vfs.file.regmatch[/etc/passwd, "root" ]"#), r#"vfs.file.regmatch[/etc/passwd, "root" ]"#);
    }

    #[test]
    fn test_unparsable_untouched() {
        assert_eq!(convert("key[a"), "key[a");
        assert_eq!(convert(""), "");
        assert_eq!(convert("not a key"), "not a key");
    }

    #[test]
    fn test_simple_checks() {
        assert_eq!(convert("ftp"), "net.tcp.service[ftp]");
        assert_eq!(convert("ftp,2121"), "net.tcp.service[ftp,,2121]");
        assert_eq!(convert("http_perf"), "net.tcp.service.perf[http]");
        assert_eq!(convert("smtp_perf,25"), "net.tcp.service.perf[smtp,,25]");
        assert_eq!(convert("tcp,{$PORT}"), "net.tcp.service[tcp,,{$PORT}]");
    }

    #[test]
    fn test_simple_check_ntp_goes_straight_to_udp() {
        assert_eq!(convert("ntp"), "net.udp.service[ntp]");
        assert_eq!(convert("ntp_perf,123"), "net.udp.service.perf[ntp,,123]");
    }

    #[test]
    fn test_not_simple_checks() {
        assert_eq!(convert("ftp,"), "ftp,");
        assert_eq!(convert("gopher"), "gopher");
        assert_eq!(convert("ftp,21,x"), "ftp,21,x");
    }

    fn graph_item(s: &str) -> String {
        LegacyGraphItemConverter::new().convert(s.to_string())
    }

    #[test]
    fn test_graph_item_references() {
        assert_eq!(graph_item("{HOSTNAME}:ftp,21"), "{HOST.HOST}:net.tcp.service[ftp,,21]");
        assert_eq!(graph_item("server:ntp"), "server:net.udp.service[ntp]");
        assert_eq!(graph_item("server:system.cpu.load[all,avg1]"), "server:system.cpu.load[all,avg1]");
        assert_eq!(graph_item("{HOSTNAME}:agent.ping"), "{HOST.HOST}:agent.ping");
        assert_eq!(graph_item(r#"server:log[c:\app.log]"#), r#"server:log[c:\app.log]"#);
        assert_eq!(graph_item("ftp,21"), "ftp,21");
        assert_eq!(graph_item(""), "");
    }

    #[test]
    fn test_idempotent() {
        for key in ["ftp,21", "ntp", "net.tcp.service[ntp]", "myitem", "key[a"] {
            let once = convert(key);
            assert_eq!(convert(&once), once, "{}", key);
        }
    }
}
