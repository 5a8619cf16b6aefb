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

//! Batch import command - migrate many export files in parallel

use crate::batch::{BatchConfig, BatchProcessor, ImportOperation};
use crate::error::CliError;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use zconf_core::import::ImportFormat;

/// Import every file in `files` and write the migrated documents into `out_dir`.
///
/// Files are processed in parallel once there are enough of them. A failing
/// file does not stop the others; all failures are listed at the end.
///
/// # Errors
///
/// Returns `Err` if `out_dir` cannot be created or any file failed.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use zconf_cli::commands::batch_import;
///
/// # fn main() -> Result<(), zconf_cli::error::CliError> {
/// let files = vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")];
/// batch_import(files, PathBuf::from("migrated"), None, None, false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_import(
    files: Vec<PathBuf>,
    out_dir: PathBuf,
    format: Option<ImportFormat>,
    to: Option<ImportFormat>,
    verbose: bool,
) -> Result<(), CliError> {
    fs::create_dir_all(&out_dir).map_err(|e| CliError::io_error(&out_dir, e))?;

    let config = BatchConfig {
        verbose,
        ..Default::default()
    };
    let operation = ImportOperation { out_dir, format, to };
    let started = Instant::now();
    let results = BatchProcessor::new(config).process(&files, |path| operation.import_file(path))?;
    print_summary(results.total_files(), results.failure_count(), started.elapsed());

    for success in results.successes() {
        if let Ok(target) = &success.result {
            println!(
                "  {} {} -> {}",
                "✓".green(),
                success.path.display(),
                target.display()
            );
        }
    }

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Import failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total_files(),
        });
    }

    Ok(())
}

fn print_summary(total: usize, failed: usize, elapsed: Duration) {
    println!();
    println!("{}", "Batch import".bright_blue().bold());
    println!("  {} {}", "Total files:".bright_cyan(), total);
    println!("  {} {}", "Imported:".green().bold(), total - failed);
    println!("  {} {}", "Failed:".red().bold(), failed);
    println!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed.as_secs_f64());
}
