use crate::common;
use assert_fs::TempDir;

#[test]
fn pins_non_tip_revision_with_permissive_origin() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let origin = root.path().join("origin");
    common::create_origin_repository(&origin, 3);
    let pinned = common::rev_parse(&origin, "HEAD~2");

    // Unadvertised commits are only fetchable when the server side allows
    // it; real forges enable this, so the fixture does too.
    common::run_git_command(&origin, &["config", "uploadpack.allowAnySHA1InWant", "true"])
        .assert()
        .success();

    let version_file = root.path().join("llvm-version.txt");
    std::fs::write(&version_file, format!("{pinned}\n"))?;

    let destination = root.path().join("llvm-project");

    common::run_mlir_dist(
        root.path(),
        &[
            "checkout-repo",
            destination.to_str().unwrap(),
            &common::file_url(&origin),
            "main",
            version_file.to_str().unwrap(),
        ],
    )
    .assert()
    .success();

    assert_eq!(common::rev_parse(&destination, "HEAD"), pinned);
    assert_eq!(common::history_depth(&destination), 1);

    Ok(())
}
