//! Integration tests for texwc CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn texwc(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("texwc").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `a.tex` includes `b.tex` and a missing file; `b.tex` includes `c.tex`.
fn sample_project() -> TempDir {
    let temp = tempdir().unwrap();
    write(temp.path(), "a.tex", "Hello world. \\input{b}\n\\include{missing}\n");
    write(temp.path(), "b.tex", "你好 test \\input{c}");
    write(temp.path(), "c.tex", "deep text");
    temp
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    texwc(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("--output").not());
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    texwc(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("texwc"));
}

#[test]
fn test_two_file_scenario() {
    let temp = tempdir().unwrap();
    write(temp.path(), "a.tex", "Hello world. \\input{b}");
    write(temp.path(), "b.tex", "你好 test");

    let expected = format!(
        "Word Count Tree Structure:\n\
         a.tex (CN: 0, EN: 2, Total: 2)\n\
         └── b.tex (CN: 2, EN: 1, Total: 3)\n\
         {}\n\
         GRAND TOTAL: CN: 2, EN: 3, Total: 5\n",
        "-".repeat(60)
    );

    texwc(temp.path())
        .arg("a.tex")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_tree_with_missing_include() {
    let temp = sample_project();

    texwc(temp.path())
        .arg("a.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("├── b.tex (CN: 2, EN: 1, Total: 3)"))
        .stdout(predicate::str::contains("│   └── c.tex (CN: 0, EN: 2, Total: 2)"))
        .stdout(predicate::str::contains(
            "└── missing.tex (CN: 0, EN: 0, Total: 0) [Error: File not found]",
        ))
        .stdout(predicate::str::contains("GRAND TOTAL: CN: 2, EN: 5, Total: 7"));
}

#[test]
fn test_max_depth_zero() {
    let temp = sample_project();

    texwc(temp.path())
        .args(["a.tex", "--max-depth", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.tex (CN: 0, EN: 2, Total: 2)"))
        .stdout(predicate::str::contains("b.tex").not())
        .stdout(predicate::str::contains("GRAND TOTAL: CN: 2, EN: 5, Total: 7"));
}

#[test]
fn test_max_depth_one() {
    let temp = sample_project();

    texwc(temp.path())
        .args(["a.tex", "--max-depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── b.tex"))
        .stdout(predicate::str::contains("c.tex").not())
        .stdout(predicate::str::contains("GRAND TOTAL: CN: 2, EN: 5, Total: 7"));
}

#[test]
fn test_commented_include_has_no_node() {
    let temp = tempdir().unwrap();
    write(temp.path(), "main.tex", "% \\input{ghost}\nReal text here");

    texwc(temp.path())
        .arg("main.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost").not())
        .stdout(predicate::str::contains("GRAND TOTAL: CN: 0, EN: 3, Total: 3"));
}

#[test]
fn test_default_root_and_fallback_dir() {
    let temp = tempdir().unwrap();
    write(temp.path(), "body/graduate/content.tex", "默认 root");
    write(temp.path(), "body/graduate/abstract.tex", "摘要");

    texwc(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("body/graduate/content.tex (CN: 2, EN: 1"));

    texwc(temp.path())
        .arg("abstract.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("body/graduate/abstract.tex (CN: 2, EN: 0"));
}

#[test]
fn test_root_not_found() {
    let temp = tempdir().unwrap();

    texwc(temp.path())
        .arg("nowhere.tex")
        .assert()
        .failure()
        .stdout(predicate::str::diff("Error: Root file nowhere.tex not found.\n"))
        .stderr(predicate::str::contains("Root file").not());
}
