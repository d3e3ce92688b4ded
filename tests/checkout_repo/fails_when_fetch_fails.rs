use crate::common;
use assert_fs::TempDir;
use predicates::prelude::predicate;

#[test]
fn fails_when_fetch_fails() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let destination = root.path().join("llvm-project");

    let version_file = root.path().join("llvm-version.txt");
    std::fs::write(&version_file, "f4d9b8c8ef3f2a1d0b9c8e7f6a5d4c3b2a190807\n")?;

    let missing_origin = root.path().join("no-such-origin");

    common::run_mlir_dist(
        root.path(),
        &[
            "checkout-repo",
            destination.to_str().unwrap(),
            &common::file_url(&missing_origin),
            "main",
            version_file.to_str().unwrap(),
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("git fetch"));

    // The branch-checkout step is never attempted: no local branch exists,
    // and the destination is left partially initialized.
    assert!(destination.join(".git").exists());
    common::run_git_command(&destination, &["rev-parse", "--verify", "refs/heads/main"])
        .assert()
        .failure();

    // Re-invoking against the now-existing destination fails at the
    // precondition check.
    common::run_mlir_dist(
        root.path(),
        &[
            "checkout-repo",
            destination.to_str().unwrap(),
            &common::file_url(&missing_origin),
            "main",
            version_file.to_str().unwrap(),
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

    Ok(())
}
