use crate::common;
use assert_fs::TempDir;
use predicates::prelude::predicate;

#[test]
fn runs_configure_then_install_targets() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let (repo_root, llvm_repo_dir) = common::create_build_tree(root.path());
    std::fs::write(
        repo_root.join("version_info.json"),
        r#"{"package-suffix": "-nightly", "package-version": "0.2a1", "llvm-revision": "deadbeef"}"#,
    )?;

    let spy = root.path().join("cmake_spy.log");
    let path = common::install_fake_cmake(&root.path().join("bin"), &spy);

    common::run_mlir_dist(&repo_root, &["build"])
        .env("PATH", &path)
        .env("LLVM_REPO_DIR", &llvm_repo_dir)
        .env("USE_NINJA", "OFF")
        .env("USE_CCACHE", "OFF")
        .env("USE_LLD", "OFF")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using REPO_DIR"))
        .stdout(predicate::str::contains("Staged distribution metadata"));

    let invocations = std::fs::read_to_string(&spy)?;
    let lines: Vec<&str> = invocations.lines().collect();
    assert_eq!(lines.len(), 2, "expected configure then build: {invocations}");
    assert!(lines[0].contains("-DCMAKE_BUILD_TYPE=Release"));
    assert!(lines[0].contains("-DLLVM_ENABLE_PROJECTS=mlir"));
    assert!(lines[0].contains("-DMLIR_BINDINGS_PYTHON_ENABLED=ON"));
    assert!(lines[1].starts_with("--build"));
    assert!(lines[1].contains("--target install-mlir-headers"));
    assert!(lines[1].contains("install-MLIRPublicAPI-stripped"));

    // Staging ran against the (empty) install tree.
    let install_dir = repo_root.join("install").join("llvm");
    assert!(install_dir.join("python").join("__init__.py").is_file());

    let build_info: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(install_dir.join("build_info.json"))?)?;
    assert_eq!(build_info["package_suffix"], "-nightly");
    assert_eq!(build_info["package_version"], "0.2a1");
    assert_eq!(build_info["llvm_revision"], "deadbeef");

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(install_dir.join("dist_manifest.json"))?)?;
    let package_data = manifest["package_data"].as_array().unwrap();
    assert!(package_data.iter().any(|item| item == "lib/cmake/mlir/*.cmake"));
    assert!(package_data.iter().any(|item| item == "bin/mlir-tblgen*"));

    Ok(())
}
