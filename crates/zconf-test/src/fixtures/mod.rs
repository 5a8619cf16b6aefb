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

//! Canonical fixtures organized by category:
//!
//! - **documents**: export documents per schema version, as text and values
//! - **samples**: item keys and expressions with their expected migrations
//! - **errors**: invalid keys and documents
//! - **builders**: builders for custom documents

pub mod builders;
mod documents;
pub mod errors;
mod samples;

pub use documents::*;
pub use samples::*;

use crate::FixtureList;

/// Returns all document fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("legacy_document", legacy_document),
        ("v2_document", v2_document),
        ("current_document", current_document),
        ("empty_document", empty_document),
    ]
}
