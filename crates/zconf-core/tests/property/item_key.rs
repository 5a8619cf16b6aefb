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

//! Property-based tests for item key parsing and serialization.

use proptest::prelude::*;
use zconf_core::parser::{ItemKeyParser, Parser};
use zconf_core::{ItemKey, Parameter};

fn scalar() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9/._-]{0,10}",
        "[ -~]{0,12}",
        "\\PC{0,6}",
    ]
}

/// Parameter trees. Nested lists are never empty: `[]` reads back as one
/// empty scalar.
fn parameter() -> impl Strategy<Value = Parameter> {
    scalar().prop_map(Parameter::Scalar).prop_recursive(4, 24, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Parameter::Nested)
    })
}

fn item_key() -> impl Strategy<Value = ItemKey> {
    (
        "[A-Za-z0-9._]{1,20}",
        prop::collection::vec(parameter(), 0..5),
    )
        .prop_map(|(id, params)| ItemKey::new(id, params).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: serializing a key and parsing it back yields an equal key.
    #[test]
    fn prop_roundtrip(key in item_key()) {
        let text = key.to_string();
        let parsed = text.parse::<ItemKey>();
        prop_assert!(parsed.is_ok(), "failed to parse {:?}: {:?}", text, parsed.err());
        prop_assert_eq!(parsed.unwrap(), key);
    }

    /// Property: serialization is a fixed point after one parse.
    #[test]
    fn prop_serialize_stable(key in item_key()) {
        let once = key.to_string();
        let twice = once.parse::<ItemKey>().unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    /// Property: any text that parses re-serializes to text that parses equal.
    #[test]
    fn prop_parsed_text_roundtrip(text in "[a-z.]{1,6}(\\[[a-z \",\\[\\]\\\\]{0,16})?") {
        if let Ok(key) = text.parse::<ItemKey>() {
            prop_assert_eq!(key.to_string().parse::<ItemKey>().unwrap(), key);
        }
    }

    /// Property: a key embedded in a larger string matches the same span.
    #[test]
    fn prop_embedded_key(key in item_key(), prefix in "[{(: ]{0,4}", suffix in "[=<>+-][0-9]{1,3}") {
        let text = key.to_string();
        let source = format!("{}{}{}", prefix, text, suffix);
        let result = ItemKeyParser::new().parse(&source, prefix.len());
        prop_assert!(result.is_match());
        prop_assert_eq!(result.matched(), text.as_str());
        prop_assert_eq!(result.into_value().unwrap(), key);
    }

    /// Property: `key[[...[a]...]]` parses to the requested depth and
    /// re-serializes identically.
    #[test]
    fn prop_nesting_depth(depth in 1_usize..64) {
        let text = format!("key{}a{}", "[".repeat(depth), "]".repeat(depth));
        let key = text.parse::<ItemKey>().unwrap();
        prop_assert_eq!(key.depth(), depth);
        prop_assert_eq!(key.to_string(), text);
    }

    /// Property: a trailing comma adds exactly one empty scalar.
    #[test]
    fn prop_trailing_comma(params in prop::collection::vec("[a-z0-9]{1,5}", 1..6)) {
        let text = format!("key[{},]", params.join(","));
        let key = text.parse::<ItemKey>().unwrap();
        prop_assert_eq!(key.parameters().len(), params.len() + 1);
        prop_assert_eq!(key.scalar(params.len()), Some(""));
    }

    /// Property: the parser never panics and failures stay inside the source.
    #[test]
    fn prop_never_panics(text in "\\PC{0,32}", pos in 0_usize..40) {
        let result = ItemKeyParser::new().parse(&text, pos);
        if result.is_fail() {
            prop_assert!(result.last_pos() <= text.len().max(pos));
        } else {
            prop_assert!(result.end() <= text.len());
        }
    }
}
