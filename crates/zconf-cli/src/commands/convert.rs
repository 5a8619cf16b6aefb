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

//! Convert commands - migrate single item keys and trigger expressions

use crate::error::CliError;
use tracing::debug;
use zconf_core::convert::{expression_chain, key_chain, ConverterChain, VersionTable};

/// Convert an item key written for schema version `from` to the current
/// schema and print the result.
///
/// # Examples
///
/// ```no_run
/// use zconf_cli::commands::convert_key;
///
/// # fn main() -> Result<(), zconf_cli::error::CliError> {
/// // Prints net.tcp.service[ftp,,21]
/// convert_key("ftp,21", "1.0")?;
/// # Ok(())
/// # }
/// ```
pub fn convert_key(key: &str, from: &str) -> Result<(), CliError> {
    let converted = migrate(&key_chain(), key, from)?;
    debug!(from, changed = converted != key, "converted item key");
    println!("{}", converted);
    Ok(())
}

/// Convert a trigger expression written for schema version `from` to the
/// current schema and print the result.
///
/// An expression already in the current version is printed unchanged.
pub fn convert_expression(expression: &str, from: &str) -> Result<(), CliError> {
    let converted = migrate(&expression_chain(), expression, from)?;
    debug!(from, changed = converted != expression, "converted expression");
    println!("{}", converted);
    Ok(())
}

/// Runs `chain` from the stage for version `from`. Current values pass through.
fn migrate(chain: &ConverterChain<String>, value: &str, from: &str) -> Result<String, CliError> {
    match VersionTable::new().value_stage(from)? {
        Some(stage) => Ok(chain.convert(value.to_string(), stage)?),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_from_each_version() {
        let keys = key_chain();
        assert_eq!(migrate(&keys, "ftp,21", "1.0").unwrap(), "net.tcp.service[ftp,,21]");
        assert_eq!(migrate(&keys, "ftp,21", "2.0").unwrap(), "ftp,21");
        assert_eq!(migrate(&keys, "ftp,21", "3.0").unwrap(), "ftp,21");

        let expressions = expression_chain();
        assert_eq!(migrate(&expressions, "{$A}#1", "3.0").unwrap(), "{$A}#1");
        assert_eq!(migrate(&expressions, "{$A}#1", "2.0").unwrap(), "{$A}<>1");
    }

    #[test]
    fn test_migrate_unsupported_version() {
        let err = migrate(&key_chain(), "ftp", "9.9").unwrap_err();
        assert!(matches!(err, CliError::Convert(_)));
        assert!(err.to_string().contains("unsupported version number \"9.9\""));
    }
}
