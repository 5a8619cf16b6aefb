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

//! Resource limits for import readers.

use crate::error::ImportError;

/// Bounds enforced by the XML and JSON readers before a document reaches
/// the converters.
///
/// Parsers themselves have no depth limit; nesting in item key parameters is
/// bounded by the source size accepted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLimits {
    /// Maximum source size in bytes (default: 64MB).
    pub max_source_size: usize,
    /// Maximum element/object nesting depth (default: 128).
    pub max_depth: usize,
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_source_size: 64 * 1024 * 1024, // 64MB
            max_depth: 128,
        }
    }
}

impl ImportLimits {
    /// Tight limits for untrusted uploads.
    pub fn strict() -> Self {
        Self {
            max_source_size: 4 * 1024 * 1024, // 4MB
            max_depth: 32,
        }
    }

    /// No restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_source_size: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    pub fn with_max_source_size(mut self, max: usize) -> Self {
        self.max_source_size = max;
        self
    }

    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Fails if `size` exceeds the source limit.
    pub fn check_size(&self, size: usize) -> Result<(), ImportError> {
        if size > self.max_source_size {
            return Err(ImportError::SourceTooLarge {
                size,
                max: self.max_source_size,
            });
        }
        Ok(())
    }

    /// Fails if `depth` exceeds the depth limit.
    pub fn check_depth(&self, depth: usize) -> Result<(), ImportError> {
        if depth > self.max_depth {
            return Err(ImportError::DepthExceeded {
                depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}
