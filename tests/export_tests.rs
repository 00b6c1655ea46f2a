// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for dictionary export files

use napoletani_index::export::{write_export, ExportFormat};
use napoletani_index::i18n::Locale;
use tempfile::TempDir;

#[test]
fn test_write_full_dictionary_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("i18n").join("dictionary.json");

    write_export(&path, ExportFormat::Json, None).expect("export should succeed");

    let content = std::fs::read_to_string(&path).expect("file written");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(parsed["it"]["overlay"]["legendTitle"], "Hype");
    assert_eq!(parsed["en"]["modal"]["useCases"]["find"]["icon"], "✊");
    assert_eq!(parsed["en"]["overlay"]["bins"][0]["color"], "#800026");
}

#[test]
fn test_write_single_locale_yaml() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("en.yaml");

    write_export(&path, ExportFormat::Yaml, Some(Locale::En)).expect("export should succeed");

    let content = std::fs::read_to_string(&path).expect("file written");
    let parsed: serde_json::Value = serde_yaml::from_str(&content).expect("valid YAML");
    assert_eq!(parsed["overlay"]["title"], "Neapolitans Index");
    assert!(parsed.get("it").is_none());
}

#[test]
fn test_write_into_missing_parent_fails_cleanly() {
    let dir = TempDir::new().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").expect("blocker file");

    let err = write_export(&blocker.join("out.json"), ExportFormat::Json, None)
        .expect_err("parent is a file");
    assert!(format!("{:#}", err).contains("not-a-dir"));
}
