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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by concern:
//!
//! - [`parse`]: inspection commands (parse-key, parse-ip, scan)
//! - [`convert`]: single-value migration (convert-key, convert-expression)
//! - [`import`]: document migration (import, batch-import)
//! - [`utility`]: shell completion

mod convert;
mod import;
mod parse;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use convert::ConvertCommands;
pub use import::ImportCommands;
pub use parse::ParseCommands;
pub use utility::UtilityCommands;

/// zconf - monitoring configuration expression toolkit
///
/// Parses item keys, IP literals and trigger expressions, and migrates
/// configuration exports from older schema versions to the current one.
///
/// # Examples
///
/// ```bash
/// # Inspect an item key
/// zconf parse-key 'vfs.fs.size[/,pfree]'
///
/// # Migrate a 1.x trigger expression
/// zconf convert-expression '{server:ftp,21.last(0)}#0' --from 1.0
///
/// # Migrate a whole export and write it as JSON
/// zconf import legacy.xml --to json --output current.json
/// ```
#[derive(Parser)]
#[command(name = "zconf")]
#[command(author, version, about = "zconf - monitoring configuration expression toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Parse (parse-key, parse-ip, scan)
/// ├── Convert (convert-key, convert-expression)
/// ├── Import (import, batch-import)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Parse(ParseCommands),

    #[command(flatten)]
    Convert(ConvertCommands),

    #[command(flatten)]
    Import(ImportCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first error the command hit: unreadable files, text that
    /// does not parse, unknown versions, or failed imports.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Parse(cmd) => cmd.execute(),
            Commands::Convert(cmd) => cmd.execute(),
            Commands::Import(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
