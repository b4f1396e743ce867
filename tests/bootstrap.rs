//! Integration tests for `project-guard bootstrap` against a local template tree.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CORE: &[&str] = &[
    "core/.claude/settings.json",
    "core/.claude/hooks/pre-tool-use-safety.py",
    "core/.claude/hooks/project-boundary.py",
    "core/.claude/hooks/prompt-safety-check.py",
    "core/.claude/commands/help.md",
];

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn templates() -> TempDir {
    let dir = TempDir::new().unwrap();
    for path in CORE {
        write(dir.path(), path, "#!/bin/sh\n");
    }
    write(
        dir.path(),
        "domains/git/manifest.json",
        r#"{"files": {".claude/commands": ["commit.md"]}}"#,
    );
    write(dir.path(), "domains/git/.claude/commands/commit.md", "# commit\n");
    write(
        dir.path(),
        "domains/python/manifest.json",
        r#"{"files": {"": ["Makefile"], "tests": ["conftest.py"]}}"#,
    );
    write(dir.path(), "domains/python/Makefile", "setup:\n\tpip install -e .\n");
    write(dir.path(), "domains/python/tests/conftest.py", "import pytest\n");
    dir
}

fn bootstrap(templates: &TempDir, project: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("project-guard");
    cmd.env("PROJECT_GUARD_CONFIG", project.join("no-such-config.toml"))
        .arg("bootstrap")
        .arg("--base-url")
        .arg(templates.path())
        .arg("--dir")
        .arg(project);
    cmd
}

#[test]
fn test_non_interactive_setup() {
    let templates = templates();
    let project = TempDir::new().unwrap();

    bootstrap(&templates, project.path())
        .args(["--name", "demo", "--domains", "git,python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Project setup complete!"))
        .stdout(predicate::str::contains("Set up Python environment: make setup"));

    let root = project.path();
    let doc = fs::read_to_string(root.join("CLAUDE.md")).unwrap();
    assert!(doc.contains("**Domains**: git, python\n"));
    assert!(doc.contains("**Description**: A custom project"));
    assert!(root.join(".claude/settings.json").exists());
    assert!(root.join(".claude/hooks/pre-tool-use-safety.py").exists());
    assert!(root.join(".claude/commands/commit.md").exists());
    assert!(root.join("Makefile").exists());
    assert!(root.join("tests/conftest.py").exists());
}

#[test]
fn test_gitignore_is_idempotent() {
    let templates = templates();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".gitignore"), "target/\n").unwrap();

    for _ in 0..2 {
        bootstrap(&templates, project.path())
            .args(["--name", "demo", "--domains", "git"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(project.path().join(".gitignore")).unwrap();
    assert!(content.starts_with("target/\n"));
    assert_eq!(content.matches("# Claude Code specific").count(), 1);
}

#[test]
fn test_unknown_domain_is_skipped() {
    let templates = templates();
    let project = TempDir::new().unwrap();

    bootstrap(&templates, project.path())
        .args(["--name", "demo", "--domains", "kubernetes", "--type", "Web API"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to fetch manifest for kubernetes"));

    let doc = fs::read_to_string(project.path().join("CLAUDE.md")).unwrap();
    assert!(doc.contains("**Type**: Web API"));
    assert!(doc.contains("**Domains**: git, kubernetes"));
}

#[cfg(unix)]
#[test]
fn test_hooks_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let templates = templates();
    let project = TempDir::new().unwrap();

    bootstrap(&templates, project.path())
        .args(["--name", "demo", "--domains", "git"])
        .assert()
        .success();

    for hook in ["pre-tool-use-safety.py", "project-boundary.py", "prompt-safety-check.py"] {
        let path = project.path().join(".claude/hooks").join(hook);
        let mode = fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755, "{hook}");
    }
}

#[test]
fn test_interactive_setup_over_stdin() {
    let templates = templates();
    let project = TempDir::new().unwrap();

    bootstrap(&templates, project.path())
        .arg("--interactive")
        .write_stdin("shop\n2\ny\nn\nn\nn\nOrders pipeline\n")
        .assert()
        .success();

    let doc = fs::read_to_string(project.path().join("CLAUDE.md")).unwrap();
    assert!(doc.contains("**Name**: shop"));
    assert!(doc.contains("**Type**: Data Pipeline"));
    assert!(doc.contains("**Description**: Orders pipeline"));
    assert!(doc.contains("**Domains**: git, python"));
}

#[test]
fn test_interactive_eof_fails() {
    let templates = templates();
    let project = TempDir::new().unwrap();

    bootstrap(&templates, project.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bootstrap failed"));
    assert!(!project.path().join("CLAUDE.md").exists());
}
