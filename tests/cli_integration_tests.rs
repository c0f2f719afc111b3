mod utils;

use extnorm::cli::{run, Args, Runner};
use extnorm::error::Error;
use extnorm::CollisionPolicy;
use std::fs;
use tempfile::TempDir;
use test_log::test;
use utils::{
    assert_trees_match, build_tree, build_tree_with_content, receipt_line, receipt_lines,
};

fn args_for(root: &std::path::Path, receipt: &std::path::Path) -> Args {
    Args {
        root_directory: Some(root.to_path_buf()),
        receipt: Some(receipt.to_path_buf()),
        yes: true,
        verbose: 2,
        ..Default::default()
    }
}

#[test]
fn run_normalizes_with_defaults() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("datasets");
    let receipt = tmp.path().join("receipt.txt");
    build_tree(&root, &["nim/detect.nim", "model.py"]);

    run(args_for(&root, &receipt)).unwrap();

    let expected = tmp.path().join("expected");
    build_tree_with_content(
        &expected,
        &[("nim/detect.txt", "nim/detect.nim"), ("model.txt", "model.py")],
    );
    assert_trees_match(&root, &expected);
    assert_eq!(receipt_lines(&receipt).len(), 2);
}

#[test]
fn runner_reports_the_summary() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("datasets");
    let receipt = tmp.path().join("receipt.txt");
    build_tree(&root, &["a.c", "b.h", "c.md"]);

    let args = Args { extension: Some(".md".to_string()), ..args_for(&root, &receipt) };
    let summary = Runner::new(args).execute().unwrap().unwrap();

    assert_eq!(summary.renamed, 2);
    assert_eq!(summary.unchanged, 1);
    assert!(root.join("a.md").is_file());
    assert!(root.join("b.md").is_file());
}

#[test]
fn dry_run_skips_the_prompt_and_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("datasets");
    let receipt = tmp.path().join("receipt.txt");
    build_tree(&root, &["a.py"]);

    let args = Args { dry_run: true, yes: false, ..args_for(&root, &receipt) };
    let summary = Runner::new(args).execute().unwrap().unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.renamed, 1);
    assert!(root.join("a.py").is_file());
    assert!(!receipt.exists());
}

#[test]
fn config_file_supplies_the_run() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("datasets");
    let receipt = tmp.path().join("renames.log");
    build_tree_with_content(&root, &[("a.py", "python"), ("a.txt", "notes")]);

    let config = tmp.path().join("extnorm.json");
    fs::write(
        &config,
        serde_json::json!({
            "root_directory": root,
            "receipt_file": receipt,
            "on_collision": CollisionPolicy::Overwrite.to_string(),
        })
        .to_string(),
    )
    .unwrap();

    let args = Args { config: Some(config), yes: true, ..Default::default() };
    run(args).unwrap();

    assert_eq!(fs::read_to_string(root.join("a.txt")).unwrap(), "python");
    assert_eq!(
        receipt_lines(&receipt),
        vec![receipt_line(&root.join("a.py"), &root.join("a.txt"))]
    );
}

#[test]
fn missing_root_is_reported() {
    let tmp = TempDir::new().unwrap();
    let receipt = tmp.path().join("receipt.txt");

    let err = run(args_for(&tmp.path().join("missing"), &receipt)).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!receipt.exists());
}

#[test]
fn missing_root_everywhere_is_an_error() {
    let args = Args { yes: true, ..Default::default() };
    assert!(matches!(run(args), Err(Error::MissingRootDirectory)));
}
