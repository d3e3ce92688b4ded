#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub fn run_mlir_dist(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mlir-dist").expect("Failed to find mlir-dist binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Create a local origin repository with `commits` commits on `main`,
/// returning the tip commit id.
pub fn create_origin_repository(dir: &Path, commits: usize) -> String {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    std::fs::create_dir_all(dir).expect("Failed to create origin directory");
    run_git_command(dir, &["init", "-b", "main"]).assert().success();
    run_git_command(dir, &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.email", "fake_email@email.com"])
        .assert()
        .success();

    for index in 0..commits {
        let content = Words(5..10).fake::<Vec<String>>().join(" ");
        std::fs::write(dir.join(format!("file{index}.txt")), content)
            .expect("Failed to write file");
        run_git_command(dir, &["add", "."]).assert().success();
        run_git_command(dir, &["commit", "-m", &format!("commit {index}")])
            .assert()
            .success();
    }

    rev_parse(dir, "HEAD")
}

pub fn rev_parse(dir: &Path, revision: &str) -> String {
    let output = run_git_command(dir, &["rev-parse", revision])
        .output()
        .expect("Failed to run git rev-parse");
    assert!(output.status.success(), "git rev-parse {revision} failed");

    String::from_utf8(output.stdout)
        .expect("Commit id is not UTF-8")
        .trim()
        .to_string()
}

/// Number of commits reachable from HEAD; 1 for a depth-1 checkout.
pub fn history_depth(dir: &Path) -> usize {
    let output = run_git_command(dir, &["rev-list", "--count", "HEAD"])
        .output()
        .expect("Failed to run git rev-list");
    assert!(output.status.success(), "git rev-list failed");

    String::from_utf8(output.stdout)
        .expect("Commit count is not UTF-8")
        .trim()
        .parse()
        .expect("Commit count is not a number")
}

pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Skeleton of a distribution repository next to a minimal LLVM source tree,
/// returning `(repo_root, llvm_repo_dir)`.
pub fn create_build_tree(root: &Path) -> (PathBuf, PathBuf) {
    let repo_root = root.join("repo");
    let llvm_repo_dir = root.join("llvm-project");

    std::fs::create_dir_all(&repo_root).expect("Failed to create repo root");
    std::fs::create_dir_all(llvm_repo_dir.join("llvm")).expect("Failed to create LLVM tree");
    std::fs::write(
        llvm_repo_dir.join("llvm").join("CMakeLists.txt"),
        "project(LLVM)\n",
    )
    .expect("Failed to write CMakeLists.txt");

    (repo_root, llvm_repo_dir)
}

/// Install a stub `cmake` into `bin_dir` that appends each invocation's
/// arguments to `spy` and exits 0, returning a PATH that resolves to it first.
pub fn install_fake_cmake(bin_dir: &Path, spy: &Path) -> OsString {
    std::fs::create_dir_all(bin_dir).expect("Failed to create bin dir");

    let tool = bin_dir.join("cmake");
    let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nexit 0\n", spy.display());
    std::fs::write(&tool, script).expect("Failed to write fake cmake");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake cmake executable");
    }

    let mut paths = vec![bin_dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).expect("Failed to join PATH entries")
}
