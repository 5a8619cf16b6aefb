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

//! Batch import tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zconf_cli::batch::{BatchConfig, BatchProcessor, ImportOperation};
use zconf_core::import::ImportFormat;
use zconf_test::fixtures;

fn zconf_cmd() -> Command {
    Command::cargo_bin("zconf").expect("Failed to find zconf binary")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn export_dir() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(dir.path(), "legacy.xml", fixtures::legacy_xml()),
        write(dir.path(), "v2.json", fixtures::v2_json()),
        write(dir.path(), "current.json", fixtures::current_json()),
    ];
    (dir, files)
}

#[test]
fn test_batch_import_writes_every_file() {
    let (dir, files) = export_dir();
    let out = dir.path().join("out");

    zconf_cmd()
        .arg("batch-import")
        .args(&files)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files:"))
        .stdout(predicate::str::contains("Imported:"));

    let legacy = fs::read_to_string(out.join("legacy.xml")).unwrap();
    assert!(legacy.contains("<version>3.0</version>"));
    assert!(legacy.contains("net.udp.service[ntp]"));

    let v2 = fs::read_to_string(out.join("v2.json")).unwrap();
    assert!(v2.contains("\"3.0\""));
    assert!(out.join("current.json").exists());
}

#[test]
fn test_batch_import_converts_format() {
    let (dir, files) = export_dir();
    let out = dir.path().join("out");

    zconf_cmd()
        .arg("batch-import")
        .args(&files)
        .arg("--out-dir")
        .arg(&out)
        .args(["--to", "xml"])
        .assert()
        .success();

    for stem in ["legacy", "v2", "current"] {
        let path = out.join(format!("{}.xml", stem));
        let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert!(text.contains("<zabbix_export>"), "{}", stem);
    }
}

#[test]
fn test_batch_import_reports_failures() {
    let (dir, mut files) = export_dir();
    files.push(write(dir.path(), "broken.json", "{"));
    let out = dir.path().join("out");

    zconf_cmd()
        .arg("batch-import")
        .args(&files)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"))
        .stderr(predicate::str::contains("1 of 4 files failed to import"));

    assert!(out.join("legacy.xml").exists(), "good files are still written");
    assert!(!out.join("broken.json").exists());
}

#[test]
fn test_batch_import_requires_files() {
    let dir = TempDir::new().unwrap();
    zconf_cmd()
        .arg("batch-import")
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn test_processor_parallel_import() {
    let dir = TempDir::new().unwrap();
    let mut files = Vec::new();
    for i in 0..12 {
        files.push(write(dir.path(), &format!("export{}.xml", i), fixtures::legacy_xml()));
    }
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let processor = BatchProcessor::new(BatchConfig {
        parallel_threshold: 2,
        ..Default::default()
    });
    let operation = ImportOperation {
        out_dir: out.clone(),
        format: None,
        to: Some(ImportFormat::Json),
    };
    let results = processor.process(&files, |path| operation.import_file(path)).unwrap();

    assert_eq!(results.total_files(), 12);
    assert_eq!(results.success_count(), 12);
    for (i, result) in results.results.iter().enumerate() {
        assert_eq!(result.path, files[i], "results keep input order");
        let written = result.result.as_ref().unwrap();
        assert_eq!(*written, out.join(format!("export{}.json", i)));
        let text = fs::read_to_string(written).unwrap();
        assert!(text.contains("net.tcp.service[ftp,,21]"));
    }
}
