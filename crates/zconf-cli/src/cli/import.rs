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

//! Document migration commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;
use zconf_core::import::ImportFormat;

#[derive(Subcommand)]
pub enum ImportCommands {
    /// Migrate an export file to the current schema version
    Import {
        /// Input file (.xml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Input format; detected from the extension when omitted
        #[arg(long, value_name = "xml|json")]
        format: Option<ImportFormat>,

        /// Output format; defaults to the input format
        #[arg(long, value_name = "xml|json")]
        to: Option<ImportFormat>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Migrate many export files in parallel
    BatchImport {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Directory for the migrated files
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Input format; detected per file when omitted
        #[arg(long, value_name = "xml|json")]
        format: Option<ImportFormat>,

        /// Output format; defaults to each input format
        #[arg(long, value_name = "xml|json")]
        to: Option<ImportFormat>,

        /// Show per-file progress
        #[arg(short, long)]
        verbose: bool,
    },
}

impl ImportCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ImportCommands::Import {
                file,
                format,
                to,
                output,
            } => commands::import(&file, format, to, output.as_deref()),
            ImportCommands::BatchImport {
                files,
                out_dir,
                format,
                to,
                verbose,
            } => commands::batch_import(files, out_dir, format, to, verbose),
        }
    }
}
