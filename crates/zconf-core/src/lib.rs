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

//! Parsing and schema conversion for monitoring configuration expressions.
//!
//! This crate recognizes the configuration micro-languages found in export
//! documents and trigger editors, and migrates them between schema versions.
//!
//! # Parsing
//!
//! The [`parser`] module holds position-based, restartable recognizers:
//!
//! - IPv4 and IPv6 address literals, with IPv4 preferred
//! - macro references (`{MACRO}`, `{$USER.MACRO}`, `{#LLD.MACRO}`)
//! - item keys (`net.tcp.service[ntp,,123]`) with quoting and nested lists
//! - function macros (`{host:key.last(0)}`) inside trigger expressions
//! - token scanning over whole expressions
//!
//! A parser never returns `Err` for malformed input; it reports
//! [`ParseStatus::Fail`](parser::ParseStatus::Fail) together with the
//! furthest position it reached.
//!
//! # Conversion
//!
//! The [`convert`] module holds version-specific converters and the
//! [`ConverterChain`](convert::ConverterChain) that runs them from a start
//! stage onward. The [`import`] module applies the chain to whole documents.
//!
//! # Examples
//!
//! ```
//! use zconf_core::convert::{expression_chain, key_chain};
//! use zconf_core::ItemKey;
//!
//! let key: ItemKey = "net.tcp.service[ntp]".parse().unwrap();
//! assert_eq!(key.id(), "net.tcp.service");
//!
//! let migrated = key_chain().convert(key.to_string(), "1.0").unwrap();
//! assert_eq!(migrated, "net.udp.service[ntp]");
//!
//! let expression = expression_chain()
//!     .convert("{server:ftp.last(0)}#0".to_string(), "1.0")
//!     .unwrap();
//! assert_eq!(expression, "{server:net.tcp.service[ftp].last(0)}<>0");
//! ```

pub mod convert;
mod error;
pub mod import;
mod key;
mod limits;
pub mod parser;

pub use convert::{Converter, ConverterChain, VersionTable, CURRENT_VERSION};
pub use error::{ConvertError, ImportError, ParseError};
pub use import::{ImportDocument, ImportFormat, Importer, Node};
pub use key::{ItemKey, Parameter};
pub use limits::ImportLimits;
pub use parser::{ParseResult, ParseStatus, Parser};
