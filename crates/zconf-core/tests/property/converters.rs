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

//! Property-based tests for converter idempotence and fail-safety.

use proptest::prelude::*;
use zconf_core::convert::{
    expression_chain, key_chain, Converter, LegacyItemKeyConverter, LegacyTriggerConverter,
    OperatorConverter,
};

/// Keys a 1.x or later export may contain.
fn any_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "(ftp|http|imap|ldap|nntp|ntp|pop|smtp|ssh|tcp)(_perf)?(,[0-9]{1,5})?",
        "net\\.(tcp|udp)\\.service(\\.perf)?\\[(ntp|ssh|ftp)(,,[0-9]{1,5})?\\]",
        "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}(\\[[a-z0-9/ ,]{0,12}\\])?",
    ]
}

/// Strings that are neither item keys nor simple checks: an empty
/// identifier or an unclosed parameter list.
fn not_a_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[\\[\\], \"{}()=#&|-][ -~]{0,20}",
        "[a-z.]{1,8}\\[[a-z0-9,\" ]{0,12}",
    ]
}

fn operand() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "{host:agent.ping.last(0)}",
        "{{HOSTNAME}:ftp,21.last(0)}",
        "{h:net.tcp.service[ntp].max(5m)}",
        "{h:log.regexp(\"a|b&c#d\")}",
        "{$LIMIT}",
        "{#IFNAME}",
        "{TRIGGER.VALUE}",
        "\"x&y\"",
        "0",
        "100",
    ])
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["&", "|", "#", "=", "<>", ">", " and ", " or ", "+"])
}

/// Trigger expressions assembled from realistic operands and operators.
fn expression() -> impl Strategy<Value = String> {
    (operand(), prop::collection::vec((operator(), operand()), 0..6)).prop_map(|(first, rest)| {
        let mut out = first.to_string();
        for (op, operand) in rest {
            out.push_str(op);
            out.push_str(operand);
        }
        out
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: converting an already converted key changes nothing.
    #[test]
    fn prop_key_converter_idempotent(key in any_key()) {
        let converter = LegacyItemKeyConverter::new();
        let once = converter.convert(key);
        let twice = converter.convert(once.clone());
        prop_assert_eq!(twice, once);
    }

    /// Property: the full key chain is idempotent from every stage.
    #[test]
    fn prop_key_chain_idempotent(key in any_key(), stage in prop::sample::select(vec!["1.0", "2.0"])) {
        let chain = key_chain();
        let once = chain.convert(key, stage).unwrap();
        let twice = chain.convert(once.clone(), stage).unwrap();
        prop_assert_eq!(twice, once);
    }

    /// Property: text that is not a key passes through every key converter.
    #[test]
    fn prop_key_converter_fail_safe(text in not_a_key()) {
        prop_assert_eq!(LegacyItemKeyConverter::new().convert(text.clone()), text.clone());
        prop_assert_eq!(key_chain().convert(text.clone(), "1.0").unwrap(), text);
    }

    /// Property: both expression converters are idempotent.
    #[test]
    fn prop_expression_converters_idempotent(expr in expression()) {
        let legacy = LegacyTriggerConverter::new();
        let once = legacy.convert(expr.clone());
        prop_assert_eq!(legacy.convert(once.clone()), once);

        let operators = OperatorConverter::new();
        let once = operators.convert(expr);
        prop_assert_eq!(operators.convert(once.clone()), once);
    }

    /// Property: rerunning the last stage on fully converted text is a no-op.
    #[test]
    fn prop_expression_chain_idempotent(expr in expression()) {
        let converted = expression_chain().convert(expr, "1.0").unwrap();
        let converted_again = expression_chain().convert(converted.clone(), "2.0").unwrap();
        prop_assert_eq!(converted_again, converted);
    }

    /// Property: a brace group that is no token is copied as is, while the
    /// operator after it is still converted.
    #[test]
    fn prop_operator_unrecognized_group_verbatim(inner in "[a-z0-9 .&|#]{0,16}") {
        let expr = format!("{{h:{}}}#0", inner);
        prop_assert_eq!(
            OperatorConverter::new().convert(expr),
            format!("{{h:{}}}<>0", inner)
        );
    }

    /// Property: unrelated text survives the expression chain when it holds
    /// no operator characters.
    #[test]
    fn prop_expression_chain_fail_safe(text in "[a-z0-9 =<>+.()]{0,30}") {
        prop_assert_eq!(expression_chain().convert(text.clone(), "1.0").unwrap(), text);
    }
}
