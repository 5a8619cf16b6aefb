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

//! Inspection commands for item keys, IP literals and expressions.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ParseCommands {
    /// Validate an item key and show its parameters
    ParseKey {
        /// Item key, e.g. 'net.tcp.service[ftp,,21]'
        #[arg(value_name = "KEY")]
        key: String,

        /// Print the parsed key as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an IPv4 or IPv6 address literal
    ParseIp {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Accept IPv4 only
        #[arg(long)]
        no_v6: bool,
    },

    /// List the macros and function macros of a trigger expression
    Scan {
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Show only the token covering this byte offset
        #[arg(long, value_name = "N")]
        at: Option<usize>,

        /// Accept legacy simple-check keys such as 'ftp,21'
        #[arg(long)]
        simple_checks: bool,

        /// Also report bare item keys and IP addresses
        #[arg(long)]
        all: bool,
    },
}

impl ParseCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ParseCommands::ParseKey { key, json } => commands::parse_key(&key, json),
            ParseCommands::ParseIp { text, no_v6 } => commands::parse_ip(&text, !no_v6),
            ParseCommands::Scan {
                expression,
                at,
                simple_checks,
                all,
            } => commands::scan(&expression, at, simple_checks, all),
        }
    }
}
