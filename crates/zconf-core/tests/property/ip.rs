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

//! Property-based tests for the IP parsers.

use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use zconf_core::parser::{IpConfig, IpParser, Ipv6Parser, ParseStatus, Parser};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a dotted quad always comes back as IPv4, even with IPv6 enabled.
    #[test]
    fn prop_ipv4_precedence(octets in any::<[u8; 4]>()) {
        let addr = Ipv4Addr::from(octets);
        let text = addr.to_string();
        let result = IpParser::new(IpConfig { v6: true }).parse(&text, 0);
        prop_assert_eq!(result.status(), ParseStatus::Success);
        prop_assert_eq!(result.into_value(), Some(IpAddr::V4(addr)));
    }

    /// Property: every canonical IPv6 text parses to the same address.
    #[test]
    fn prop_ipv6_canonical(segments in any::<[u16; 8]>()) {
        let addr = Ipv6Addr::from(segments);
        let text = addr.to_string();
        let result = Ipv6Parser::new().parse(&text, 0);
        prop_assert_eq!(result.status(), ParseStatus::Success, "{}", text);
        prop_assert_eq!(result.into_value(), Some(addr));
    }

    /// Property: the fully expanded IPv6 form parses too.
    #[test]
    fn prop_ipv6_expanded(segments in any::<[u16; 8]>()) {
        let text = segments
            .iter()
            .map(|s| format!("{:x}", s))
            .collect::<Vec<_>>()
            .join(":");
        let result = IpParser::new(IpConfig::default()).parse(&text, 0);
        prop_assert_eq!(result.into_value(), Some(IpAddr::V6(Ipv6Addr::from(segments))));
    }

    /// Property: with IPv6 disabled only IPv4 results are produced.
    #[test]
    fn prop_v6_disabled(segments in any::<[u16; 8]>()) {
        let text = Ipv6Addr::from(segments).to_string();
        let result = IpParser::new(IpConfig { v6: false }).parse(&text, 0);
        if let Some(addr) = result.into_value() {
            prop_assert!(addr.is_ipv4());
        }
    }
}
