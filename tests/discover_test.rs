use notebook_discovery::{
    discover_notebooks, discover_with_table, resolve_timeout, CategoryTimeout, NotebookCase,
    TimeoutTable,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, r#"{"cells": []}"#).unwrap();
}

fn workshop() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "labs/NxD/a.ipynb");
    touch(root, "labs/NxD/.ipynb_checkpoints/a-checkpoint.ipynb");
    touch(root, "labs/NKI/b.ipynb");
    temp_dir
}

fn case(root: &Path, relative: &str, timeout: u64) -> NotebookCase {
    NotebookCase::new(root.join(relative).to_string_lossy(), timeout)
}

#[test]
fn test_resolve_known_categories() {
    assert_eq!(resolve_timeout("labs/NxD/llama.ipynb"), 1800);
    assert_eq!(resolve_timeout("labs/FineTuning/sft.ipynb"), 3600);
    assert_eq!(resolve_timeout("labs/vLLM/serve.ipynb"), 1800);
    assert_eq!(resolve_timeout("labs/NKI/kernel.ipynb"), 900);
}

#[test]
fn test_resolve_unknown_category_defaults() {
    for path in ["labs/Misc/a.ipynb", "a.ipynb", "", "NxD/a.ipynb", "labs/NxD"] {
        assert_eq!(resolve_timeout(path), 900, "path: {path:?}");
    }
}

#[test]
fn test_resolve_ambiguous_path_uses_table_order() {
    assert_eq!(resolve_timeout("labs/NKI/x/labs/NxD/a.ipynb"), 1800);
    assert_eq!(resolve_timeout("labs/NxD/x/labs/FineTuning/a.ipynb"), 1800);
    assert_eq!(resolve_timeout("labs/NKI/x/labs/FineTuning/a.ipynb"), 3600);
}

#[test]
fn test_discover_nonexistent_dir_is_empty() {
    let cases = discover_notebooks(Path::new("nonexistent_dir")).unwrap();
    assert!(cases.is_empty());
}

#[test]
fn test_discover_empty_labs_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let labs = temp_dir.path().join("labs");
    fs::create_dir(&labs).unwrap();

    assert!(discover_notebooks(&labs).unwrap().is_empty());
}

#[test]
fn test_discover_excludes_checkpoints() {
    let temp_dir = workshop();
    let root = temp_dir.path();

    let found: HashSet<_> = discover_notebooks(&root.join("labs"))
        .unwrap()
        .into_iter()
        .collect();

    let expected: HashSet<_> = [
        case(root, "labs/NxD/a.ipynb", 1800),
        case(root, "labs/NKI/b.ipynb", 900),
    ]
    .into_iter()
    .collect();

    assert_eq!(found, expected);
}

#[test]
fn test_discover_is_idempotent() {
    let temp_dir = workshop();
    let labs = temp_dir.path().join("labs");

    let first: HashSet<_> = discover_notebooks(&labs).unwrap().into_iter().collect();
    let second: HashSet<_> = discover_notebooks(&labs).unwrap().into_iter().collect();

    assert_eq!(first, second);
}

#[test]
fn test_discover_ignores_non_notebooks() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "labs/vLLM/serve.ipynb");
    touch(root, "labs/vLLM/serve.py");
    touch(root, "labs/vLLM/notes.ipynb.bak");
    touch(root, "labs/README.md");

    let cases = discover_notebooks(&root.join("labs")).unwrap();

    assert_eq!(cases, vec![case(root, "labs/vLLM/serve.ipynb", 1800)]);
}

#[test]
fn test_discover_with_custom_table() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "labs/Inference/a.ipynb");
    touch(root, "labs/NxD/b.ipynb");

    let table = TimeoutTable {
        default_timeout: 120,
        categories: vec![CategoryTimeout::new("Inference", 600)],
        ..TimeoutTable::builtin()
    };

    let cases = discover_with_table(&root.join("labs"), &table).unwrap();

    assert_eq!(
        cases,
        vec![
            case(root, "labs/Inference/a.ipynb", 600),
            case(root, "labs/NxD/b.ipynb", 120),
        ]
    );
}
