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

//! Single-value migration commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConvertCommands {
    /// Convert an item key to the current schema
    ConvertKey {
        #[arg(value_name = "KEY")]
        key: String,

        /// Schema version the key was written for (1.0, 2.0, 3.0)
        #[arg(long, value_name = "VERSION")]
        from: String,
    },

    /// Convert a trigger expression to the current schema
    ConvertExpression {
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Schema version the expression was written for (1.0, 2.0, 3.0)
        #[arg(long, value_name = "VERSION")]
        from: String,
    },
}

impl ConvertCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConvertCommands::ConvertKey { key, from } => commands::convert_key(&key, &from),
            ConvertCommands::ConvertExpression { expression, from } => {
                commands::convert_expression(&expression, &from)
            }
        }
    }
}
