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

//! Shared test fixtures for the zconf crates.
//!
//! Provides export documents of every supported schema version (as text and
//! as [`ImportDocument`] values), item key and expression samples with their
//! expected migrations, invalid inputs, and builders for custom documents.
//!
//! # Quick Start
//!
//! ```
//! use zconf_test::fixtures;
//!
//! let xml = fixtures::legacy_xml();
//! assert!(xml.contains("version=\"1.0\""));
//!
//! for (stage, input, expected) in fixtures::key_migrations() {
//!     // convert `input` from `stage` and compare with `expected`
//! #   let _ = (stage, input, expected);
//! }
//!
//! use fixtures::builders::{DocumentBuilder, HostBuilder};
//! use zconf_core::import::ImportFormat;
//!
//! let doc = DocumentBuilder::new("2.0", ImportFormat::Json)
//!     .host(HostBuilder::new("server").item("agent.ping"))
//!     .build();
//! assert_eq!(zconf_test::count_values(&doc, "key"), 1);
//! ```

pub mod fixtures;

use zconf_core::import::ImportDocument;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> ImportDocument)>;

/// Number of values stored under members called `name` anywhere in `doc`.
pub fn count_values(doc: &ImportDocument, name: &str) -> usize {
    doc.values_named(name).len()
}
