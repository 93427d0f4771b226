//! Integration tests for rewriting a directory of JSON files

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use jsonrebrand::rewrite::{NonObjectPolicy, RewriteEvent, WriteMode};
use jsonrebrand::{process_directory, RewriteConfig, RewriteEngine, RewriteError};

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_rewrites_locale_files() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"global":{"name":"sudo-flix"},"home":{"title":"Welcome to sudo-flix","items":["sudo-flix",3]}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("es.json"),
        r#"{"global":{"name":"sudo-flix"},"home":{"title":"Bienvenido a sudo-flix, película"}}"#,
    )
    .unwrap();

    let summary = process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.statistics.files_found, 2);
    assert_eq!(summary.statistics.files_written, 2);
    assert_eq!(summary.statistics.replacements, 5);

    assert_eq!(
        read_json(&dir.path().join("en.json")),
        json!({"global":{"name":"levrx"},"home":{"title":"Welcome to levrx","items":["levrx",3]}})
    );

    let es = fs::read_to_string(dir.path().join("es.json")).unwrap();
    assert!(es.contains("película"));
    assert!(es.starts_with("{\n    \"global\": {\n        \"name\": \"levrx\"\n    },"));
}

#[test]
fn test_non_object_top_level_is_reformatted_not_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, r#"["sudo-flix"]"#).unwrap();

    process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[\n    \"sudo-flix\"\n]");
}

#[test]
fn test_legacy_config_skips_non_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, r#"["sudo-flix"]"#).unwrap();
    fs::write(dir.path().join("obj.json"), r#"{"a":"sudo-flix"}"#).unwrap();

    let config = RewriteConfig::legacy();
    assert_eq!(config.non_object, NonObjectPolicy::Skip);
    assert_eq!(config.write_mode, WriteMode::Direct);
    let summary = RewriteEngine::new(config)
        .unwrap()
        .process_directory(dir.path())
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"["sudo-flix"]"#);
    assert_eq!(read_json(&dir.path().join("obj.json")), json!({"a": "levrx"}));
    assert_eq!(summary.statistics.files_skipped, 1);
}

#[test]
fn test_non_json_files_untouched() {
    let dir = tempdir().unwrap();
    let txt = dir.path().join("README.txt");
    let broken = dir.path().join("broken.json.bak");
    fs::write(&txt, "sudo-flix").unwrap();
    fs::write(&broken, "{ not json").unwrap();

    let summary = process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert_eq!(summary.statistics.files_found, 0);
    assert_eq!(fs::read_to_string(&txt).unwrap(), "sudo-flix");
    assert_eq!(fs::read_to_string(&broken).unwrap(), "{ not json");
}

#[test]
fn test_subdirectories_ignored_unless_recursive() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir_all(&sub).unwrap();
    let inner = sub.join("inner.json");
    fs::write(&inner, r#"{"a":"sudo-flix"}"#).unwrap();

    process_directory(dir.path(), "sudo-flix", "levrx").unwrap();
    assert_eq!(fs::read_to_string(&inner).unwrap(), r#"{"a":"sudo-flix"}"#);

    let config = RewriteConfig::default().with_recursive(true);
    RewriteEngine::new(config)
        .unwrap()
        .process_directory(dir.path())
        .unwrap();
    assert_eq!(read_json(&inner), json!({"a": "levrx"}));
}

#[test]
fn test_parse_error_aborts_run() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ name: invalid }").unwrap();

    let err = process_directory(dir.path(), "sudo-flix", "levrx").unwrap_err();

    assert_matches!(err, RewriteError::ParseError(_));
    assert_eq!(err.path(), Some(bad.as_path()));
    assert_eq!(fs::read_to_string(&bad).unwrap(), "{ name: invalid }");
}

#[derive(Debug, PartialEq)]
enum Seen {
    Processed(PathBuf),
    Failed(PathBuf),
}

#[test]
fn test_abort_leaves_files_after_failure_untouched() {
    let dir = tempdir().unwrap();
    let mut originals: HashMap<PathBuf, Vec<u8>> = HashMap::new();
    for (name, content) in [
        ("a.json", r#"{"a":"sudo-flix"}"#),
        ("b.json", r#"{"b":"sudo-flix"}"#),
        ("bad.json", "{ name: invalid }"),
        ("c.json", r#"{"c":"sudo-flix"}"#),
        ("d.json", r#"{"d":"sudo-flix"}"#),
    ] {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        originals.insert(path, content.as_bytes().to_vec());
    }

    let mut seen = Vec::new();
    let result = RewriteEngine::new(RewriteConfig::default())
        .unwrap()
        .process_directory_with(dir.path(), |event| match event {
            RewriteEvent::Processed(outcome) => seen.push(Seen::Processed(outcome.path.clone())),
            RewriteEvent::Failed(path, _) => seen.push(Seen::Failed(path.to_path_buf())),
            RewriteEvent::Found(_) => {}
        });

    let err = result.unwrap_err();
    let bad = dir.path().join("bad.json");
    assert_eq!(err.path(), Some(bad.as_path()));

    // The failure is the last event; nothing is processed after it
    assert_eq!(seen.last(), Some(&Seen::Failed(bad.clone())));
    let processed: Vec<PathBuf> = seen
        .iter()
        .filter_map(|s| match s {
            Seen::Processed(path) => Some(path.clone()),
            Seen::Failed(_) => None,
        })
        .collect();
    assert_eq!(processed.len(), seen.len() - 1);

    for (path, original) in &originals {
        let current = fs::read(path).unwrap();
        if processed.contains(path) {
            assert_ne!(&current, original, "{} should be rewritten", path.display());
        } else {
            assert_eq!(&current, original, "{} should be untouched", path.display());
        }
    }
}

#[test]
fn test_scalar_top_level_documents_reformatted_not_replaced() {
    let dir = tempdir().unwrap();
    let text = dir.path().join("name.json");
    let number = dir.path().join("count.json");
    fs::write(&text, "\"sudo-flix\"").unwrap();
    fs::write(&number, "  42\n").unwrap();

    let summary = process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert_eq!(summary.statistics.replacements, 0);
    assert_eq!(summary.statistics.files_written, 2);
    assert_eq!(fs::read_to_string(&text).unwrap(), "\"sudo-flix\"");
    assert_eq!(fs::read_to_string(&number).unwrap(), "42");
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_rewritten_through_link() {
    let dir = tempdir().unwrap();
    let target_dir = tempdir().unwrap();
    let real = target_dir.path().join("shared.json");
    let link = dir.path().join("en.json");
    fs::write(&real, r#"{"name":"sudo-flix"}"#).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(read_json(&real), json!({"name": "levrx"}));
}

#[test]
fn test_continue_on_error_processes_remaining_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.json"), "{ name: invalid }").unwrap();
    fs::write(dir.path().join("good.json"), r#"{"name":"sudo-flix"}"#).unwrap();
    fs::write(dir.path().join("empty.json"), "").unwrap();

    let config = RewriteConfig::default().with_continue_on_error(true);
    let summary = RewriteEngine::new(config)
        .unwrap()
        .process_directory(dir.path())
        .unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.failures.len(), 2);
    assert_eq!(summary.statistics.files_failed, 2);
    assert_eq!(read_json(&dir.path().join("good.json")), json!({"name": "levrx"}));
}

#[test]
fn test_atomic_mode_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    for name in ["a.json", "b.json", "c.json"] {
        fs::write(dir.path().join(name), r#"{"x":"sudo-flix"}"#).unwrap();
    }

    process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("en.json");
    fs::write(&path, r#"{"a":["sudo-flix sudo-flix"],"b":{"c":"sudo-flix"}}"#).unwrap();

    process_directory(dir.path(), "sudo-flix", "levrx").unwrap();
    let first = fs::read_to_string(&path).unwrap();
    let summary = process_directory(dir.path(), "sudo-flix", "levrx").unwrap();

    assert_eq!(summary.statistics.replacements, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}
