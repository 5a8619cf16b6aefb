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

//! Batch import of export files.
//!
//! [`BatchProcessor`] applies one per-file operation to a list of files,
//! serially for small batches and on the rayon thread pool for larger ones.
//! Every file gets its own [`FileResult`]; one failure never stops the rest
//! of the batch.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use zconf_cli::batch::{BatchConfig, BatchProcessor, ImportOperation};
//! use zconf_core::import::ImportFormat;
//!
//! # fn main() -> Result<(), zconf_cli::error::CliError> {
//! let files = vec![PathBuf::from("a.xml"), PathBuf::from("b.json")];
//! let operation = ImportOperation {
//!     out_dir: PathBuf::from("migrated"),
//!     format: None,
//!     to: Some(ImportFormat::Json),
//! };
//!
//! let results = BatchProcessor::new(BatchConfig::default())
//!     .process(&files, |path| operation.import_file(path))?;
//! println!("{} of {} imported", results.success_count(), results.total_files());
//! # Ok(())
//! # }
//! ```

use crate::commands::{import_document, output_path, render, write_output};
use crate::error::CliError;
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;
use zconf_core::import::ImportFormat;

/// How a batch is scheduled.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Batches with fewer files run serially. Default: 4
    pub parallel_threshold: usize,

    /// Worker thread cap; `None` uses the global rayon pool.
    pub max_threads: Option<usize>,

    /// Report every file on stderr as it finishes.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4,
            max_threads: None,
            verbose: false,
        }
    }
}

/// Outcome for one input file.
#[derive(Debug, Clone)]
pub struct FileResult<T> {
    pub path: PathBuf,
    pub result: Result<T, CliError>,
}

impl<T> FileResult<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone)]
pub struct BatchResults<T> {
    pub results: Vec<FileResult<T>>,
}

impl<T> BatchResults<T> {
    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn successes(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| r.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult<T>> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Counts finished files; with `verbose`, reports each one on stderr.
struct Progress {
    total: usize,
    done: AtomicUsize,
    verbose: bool,
}

impl Progress {
    fn record<T>(&self, path: &Path, result: &Result<T, CliError>) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if !self.verbose {
            return;
        }
        match result {
            Ok(_) => eprintln!("{} [{}/{}] {}", "✓".green().bold(), done, self.total, path.display()),
            Err(e) => eprintln!("{} [{}/{}] {} - {}", "✗".red().bold(), done, self.total, path.display(), e),
        }
    }
}

/// Runs a per-file operation over a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Applies `operation` to every file of `files`.
    ///
    /// # Errors
    ///
    /// Per-file failures are reported in the results; `Err` is returned only
    /// when a dedicated thread pool cannot be built.
    pub fn process<T, F>(&self, files: &[PathBuf], operation: F) -> Result<BatchResults<T>, CliError>
    where
        T: Send,
        F: Fn(&Path) -> Result<T, CliError> + Sync,
    {
        let progress = Progress {
            total: files.len(),
            done: AtomicUsize::new(0),
            verbose: self.config.verbose,
        };
        let run = |path: &PathBuf| {
            let result = operation(path.as_path());
            progress.record(path, &result);
            FileResult {
                path: path.clone(),
                result,
            }
        };

        let results = if files.len() < self.config.parallel_threshold {
            debug!(files = files.len(), "importing batch serially");
            files.iter().map(run).collect()
        } else if let Some(threads) = self.config.max_threads {
            debug!(files = files.len(), threads, "importing batch in parallel");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::invalid_input(format!("cannot build thread pool: {}", e)))?;
            pool.install(|| files.par_iter().map(run).collect())
        } else {
            debug!(files = files.len(), "importing batch in parallel");
            files.par_iter().map(run).collect()
        };

        Ok(BatchResults { results })
    }
}

/// Imports one file and writes the migrated document into `out_dir`.
///
/// The output name is the input file stem with the extension of the output
/// format.
#[derive(Debug, Clone)]
pub struct ImportOperation {
    pub out_dir: PathBuf,
    /// Input format; `None` detects it from each file extension.
    pub format: Option<ImportFormat>,
    /// Output format; `None` keeps each input format.
    pub to: Option<ImportFormat>,
}

impl ImportOperation {
    /// Returns the path written.
    pub fn import_file(&self, path: &Path) -> Result<PathBuf, CliError> {
        let doc = import_document(path, self.format)?;
        let format = self.to.unwrap_or(doc.format);
        let target = output_path(path, &self.out_dir, format);
        write_output(&render(&doc, format)?, Some(&target))?;
        Ok(target)
    }
}
