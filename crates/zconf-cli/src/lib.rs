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

//! zconf CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Inspection
//!
//! - **parse-key**: validate an item key and show its parameters (or JSON)
//! - **parse-ip**: validate an IPv4 or IPv6 literal
//! - **scan**: list the tokens of a trigger expression, or the one at an offset
//!
//! ## Migration
//!
//! - **convert-key / convert-expression**: migrate a single value from a schema version
//! - **import**: migrate an XML or JSON export file to the current schema
//! - **batch-import**: migrate many export files in parallel
//!
//! ## Utilities
//!
//! - **completion**: generate shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use zconf_cli::commands::{convert_expression, import};
//!
//! # fn main() -> Result<(), zconf_cli::error::CliError> {
//! convert_expression("{server:ftp,21.last(0)}#0", "1.0")?;
//! import(Path::new("legacy.xml"), None, None, Some(Path::new("current.xml")))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! Input files larger than 100 MB are rejected before reading. The limit is
//! configurable via `ZCONF_MAX_FILE_SIZE` (bytes).
//!
//! # Logging
//!
//! The binary logs import progress to stderr through `tracing`. The default
//! filter is `zconf=info`; set `RUST_LOG` to override it.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
