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

//! Parse commands - item key, IP address and expression token inspection

use crate::error::CliError;
use colored::Colorize;
use zconf_core::parser::{
    ExpressionScanner, FunctionMacroOptions, IpConfig, IpParser, Parser, Token, TokenSet,
    TokenValue,
};
use zconf_core::{ItemKey, ParseError, Parameter};

/// Token kinds reported by `scan` unless `--all` is given.
const EXPRESSION_TOKENS: TokenSet = TokenSet::FUNCTION_MACRO
    .union(TokenSet::MACRO)
    .union(TokenSet::USER_MACRO)
    .union(TokenSet::LLD_MACRO);

/// Validate an item key and print its structure.
///
/// With `json`, prints the key model as JSON instead of the tree view.
///
/// # Examples
///
/// ```no_run
/// use zconf_cli::commands::parse_key;
///
/// # fn main() -> Result<(), zconf_cli::error::CliError> {
/// parse_key("vfs.fs.size[/,pfree]", false)?;
/// assert!(parse_key("key[\"unterminated]", false).is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse_key(text: &str, json: bool) -> Result<(), CliError> {
    let key: ItemKey = match text.parse() {
        Ok(key) => key,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), text);
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&key)?);
        return Ok(());
    }

    println!("{} {}", "✓".green().bold(), key);
    println!("  Id: {}", key.id());
    println!("  Parameters: {}", key.parameters().len());
    for (i, param) in key.parameters().iter().enumerate() {
        print_parameter(&i.to_string(), param, 2);
    }
    Ok(())
}

fn print_parameter(label: &str, param: &Parameter, indent: usize) {
    let pad = " ".repeat(indent * 2);
    match param {
        Parameter::Scalar(value) => println!("{}[{}] {:?}", pad, label, value),
        Parameter::Nested(items) => {
            println!("{}[{}] list ({})", pad, label, items.len());
            for (i, item) in items.iter().enumerate() {
                print_parameter(&format!("{}.{}", label, i), item, indent + 1);
            }
        }
    }
}

/// Validate an IP address literal.
///
/// IPv4 is tried first; IPv6 is accepted only when `v6` is enabled.
pub fn parse_ip(text: &str, v6: bool) -> Result<(), CliError> {
    let parser = IpParser::new(IpConfig { v6 });
    match ParseError::check(text, parser.parse(text, 0), "IP address") {
        Ok(addr) => {
            let version = if addr.is_ipv4() { "IPv4" } else { "IPv6" };
            println!("{} {}", "✓".green().bold(), text);
            println!("  Version: {}", version);
            println!("  Address: {}", addr);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), text);
            Err(e.into())
        }
    }
}

/// List the tokens of a trigger expression.
///
/// With `at`, prints only the token covering that byte offset. `simple_checks`
/// accepts legacy `service[,port]` keys inside function macros; `all` also
/// reports bare item keys and IP literals.
pub fn scan(expression: &str, at: Option<usize>, simple_checks: bool, all: bool) -> Result<(), CliError> {
    let kinds = if all { TokenSet::ALL } else { EXPRESSION_TOKENS };
    let scanner = ExpressionScanner::new(
        kinds,
        FunctionMacroOptions::new().with_simple_checks(simple_checks),
    );

    if let Some(offset) = at {
        if offset > expression.len() {
            return Err(CliError::invalid_input(format!(
                "offset {} is past the end of the expression ({} bytes)",
                offset,
                expression.len()
            )));
        }
        return match scanner.token_at(expression, offset) {
            Some(token) => {
                print_token(expression, &token);
                Ok(())
            }
            None => Err(CliError::invalid_input(format!("no token at offset {}", offset))),
        };
    }

    let tokens = scanner.scan(expression);
    println!("{} {} token(s)", "✓".green().bold(), tokens.len());
    for token in &tokens {
        print_token(expression, token);
    }
    Ok(())
}

fn kind_name(kind: TokenSet) -> &'static str {
    if kind == TokenSet::FUNCTION_MACRO {
        "function macro"
    } else if kind == TokenSet::USER_MACRO {
        "user macro"
    } else if kind == TokenSet::LLD_MACRO {
        "LLD macro"
    } else if kind == TokenSet::MACRO {
        "macro"
    } else if kind == TokenSet::ITEM_KEY {
        "item key"
    } else {
        "IP address"
    }
}

fn print_token(source: &str, token: &Token) {
    println!(
        "  {:>4}..{:<4} {:<15} {}",
        token.start,
        token.end(),
        kind_name(token.kind),
        token.text(source).bright_white()
    );
    if let TokenValue::FunctionMacro(fm) = &token.value {
        println!("             host: {:?}", fm.host().to_string());
        println!("             key: {}", fm.key_text());
        println!("             function: {}({})", fm.function(), fm.raw_args());
    }
}
