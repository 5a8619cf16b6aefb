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

//! Element name helpers.

/// Singular form of a plural container name, or `None` if `name` does not
/// look plural.
///
/// Handles the shapes export documents use: `hosts` -> `host`,
/// `dependencies` -> `dependency`, `graph_items` -> `graph_item`,
/// `boxes` -> `box`.
pub(crate) fn singularize(name: &str) -> Option<String> {
    if let Some(base) = name.strip_suffix("ies").filter(|base| !base.is_empty()) {
        return Some(format!("{}y", base));
    }
    if let Some(base) = name.strip_suffix("es") {
        if base.ends_with("ss") || base.ends_with("sh") || base.ends_with("ch") || base.ends_with('x') {
            return Some(base.to_string());
        }
    }
    match name.strip_suffix('s') {
        Some(base) if !base.is_empty() && !base.ends_with('s') => Some(base.to_string()),
        _ => None,
    }
}

/// Element name used for members of a list called `name`.
pub(crate) fn item_name(name: &str) -> String {
    singularize(name).unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("hosts").as_deref(), Some("host"));
        assert_eq!(singularize("dependencies").as_deref(), Some("dependency"));
        assert_eq!(singularize("graph_items").as_deref(), Some("graph_item"));
        assert_eq!(singularize("expressions").as_deref(), Some("expression"));
        assert_eq!(singularize("boxes").as_deref(), Some("box"));
        assert_eq!(singularize("types").as_deref(), Some("type"));
    }

    #[test]
    fn test_not_plural() {
        assert_eq!(singularize("host"), None);
        assert_eq!(singularize("class"), None);
        assert_eq!(singularize("s"), None);
        assert_eq!(item_name("data"), "data");
    }
}
