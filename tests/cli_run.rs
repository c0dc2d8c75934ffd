// tests/cli_run.rs

mod common;

use assert_cmd::prelude::*;
use common::{build_zip, repo2ai_cmd, spawn_mock_github, Metadata};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_run_writes_tree_and_contents() -> Result<(), Box<dyn std::error::Error>> {
    let archive = build_zip(&[
        ("hello-main/", ""),
        ("hello-main/README.md", "# Hello"),
        ("hello-main/src/", ""),
        ("hello-main/src/main.py", "print('hi')"),
    ]);
    let server = spawn_mock_github(Metadata::Branch("main".into()), Some(archive));
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("https://github.com/octo/hello")
        .arg("--api-url")
        .arg(&server.base_url)
        .arg("--archive-url")
        .arg(&server.base_url)
        .assert()
        .success();

    let expected = "# This is the structure of the repository and its contents:\n\n\
                    root\n\
                    - hello\n  \
                    - hello-main\n    \
                    - README.md\n    \
                    - src\n      \
                    - main.py\n\
                    \n\n# The following are the contents of the repository:\n\
                    \n\n## Content of README.md\n\n```markdown\n# Hello\n```\n\
                    \n\n## Content of main.py\n\n```python\nprint('hi')\n```\n";
    assert_eq!(fs::read_to_string(temp.path().join("output.txt"))?, expected);
    assert!(temp.path().join("repo/hello/hello-main/src/main.py").is_file());
    Ok(())
}

#[test]
fn test_custom_destination_and_output() -> Result<(), Box<dyn std::error::Error>> {
    let archive = build_zip(&[("hello-dev/notes.txt", "n")]);
    let server = spawn_mock_github(Metadata::MissingField, Some(archive));
    let temp = tempdir()?;
    let destination = temp.path().join("checkout");
    let output = temp.path().join("out/flat.md");

    repo2ai_cmd()
        .arg("https://github.com/octo/hello/")
        .arg("-d")
        .arg(&destination)
        .arg("-o")
        .arg(&output)
        .arg("--api-url")
        .arg(&server.base_url)
        .arg("--archive-url")
        .arg(&server.base_url)
        .assert()
        .success();

    // No default_branch in the metadata, so the archive for "main" is requested.
    assert!(server
        .hits()
        .contains(&"/octo/hello/archive/refs/heads/main.zip".to_string()));
    let written = fs::read_to_string(&output)?;
    assert!(written.contains("root\n- hello\n  - hello-dev\n    - notes.txt\n"));
    assert!(written.ends_with("## Content of notes.txt\n\n```\nn\n```\n"));
    Ok(())
}

#[test]
fn test_git_branch_option_downloads_that_branch() -> Result<(), Box<dyn std::error::Error>> {
    let archive = build_zip(&[("hello-feature/a.rs", "fn a() {}")]);
    let server = spawn_mock_github(Metadata::NotFound, Some(archive));
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("https://github.com/octo/hello")
        .arg("--git-branch")
        .arg("feature")
        .arg("--api-url")
        .arg(&server.base_url)
        .arg("--archive-url")
        .arg(&server.base_url)
        .assert()
        .success();

    assert_eq!(
        server.hits(),
        vec!["/octo/hello/archive/refs/heads/feature.zip".to_string()]
    );
    assert!(fs::read_to_string(temp.path().join("output.txt"))?
        .contains("## Content of a.rs\n\n```rust\nfn a() {}\n```\n"));
    Ok(())
}

#[test]
fn test_non_github_url_fails_without_touching_disk() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("https://gitlab.com/octo/hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "The provided URL must be a GitHub repository URL.",
        ));

    assert!(!temp.path().join("repo").exists());
    assert!(!temp.path().join("output.txt").exists());
    Ok(())
}

#[test]
fn test_unknown_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_mock_github(Metadata::NotFound, None);
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("https://github.com/octo/missing")
        .arg("--api-url")
        .arg(&server.base_url)
        .arg("--archive-url")
        .arg(&server.base_url)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Request to"))
        .stderr(predicate::str::contains("/repos/octo/missing"));

    assert!(!temp.path().join("output.txt").exists());
    Ok(())
}

#[test]
fn test_malformed_archive_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_mock_github(
        Metadata::Branch("main".into()),
        Some(b"definitely not a zip".to_vec()),
    );
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("https://github.com/octo/hello")
        .arg("--api-url")
        .arg(&server.base_url)
        .arg("--archive-url")
        .arg(&server.base_url)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract ZIP archive"));

    assert!(!temp.path().join("output.txt").exists());
    Ok(())
}

#[test]
fn test_invalid_api_url_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    repo2ai_cmd()
        .current_dir(temp.path())
        .arg("--api-url")
        .arg("ftp://example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-url"));

    assert!(!temp.path().join("repo").exists());
    Ok(())
}

#[test]
fn test_version_flag() -> Result<(), Box<dyn std::error::Error>> {
    repo2ai_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
