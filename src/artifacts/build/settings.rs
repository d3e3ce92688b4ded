use anyhow::Context;
use derive_new::new;
use std::env;
use std::path::{Path, PathBuf};

/// Build configuration parsed from the environment.
///
/// The packaging pipeline drives this tool from CI, so everything is plain
/// environment variables rather than a config file:
///
/// - `REPO_DIR`: distribution repository root (default: current directory)
/// - `LLVM_REPO_DIR`: LLVM monorepo checkout (default: `<repo>/../llvm-project`)
/// - `RELEASE_MODE`: release vs. debug-info build (default: on)
/// - `LLVM_ASSERTIONS`: enable LLVM assertions (default: off)
/// - `PYTHON3_EXECUTABLE` / `PYTHON3_INCLUDE_DIR`: optional interpreter
///   passthroughs for the python-bindings build
#[derive(Debug, Clone, new)]
pub struct BuildSettings {
    repo_root: PathBuf,
    llvm_repo_dir: PathBuf,
    release_mode: bool,
    assertions: bool,
    python_executable: Option<PathBuf>,
    python_include_dir: Option<PathBuf>,
}

impl BuildSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let repo_root = match env::var_os("REPO_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().context("failed to resolve current directory")?,
        };

        let llvm_repo_dir = env::var_os("LLVM_REPO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| repo_root.join("..").join("llvm-project"));

        Ok(Self::new(
            repo_root,
            llvm_repo_dir,
            bool_setting(env::var("RELEASE_MODE").ok().as_deref(), true),
            bool_setting(env::var("LLVM_ASSERTIONS").ok().as_deref(), false),
            env::var_os("PYTHON3_EXECUTABLE").map(PathBuf::from),
            env::var_os("PYTHON3_INCLUDE_DIR").map(PathBuf::from),
        ))
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn llvm_repo_dir(&self) -> &Path {
        &self.llvm_repo_dir
    }

    pub fn build_dir(&self) -> PathBuf {
        self.repo_root.join("build").join("llvm")
    }

    pub fn install_dir(&self) -> PathBuf {
        self.repo_root.join("install").join("llvm")
    }

    pub fn release_mode(&self) -> bool {
        self.release_mode
    }

    pub fn assertions(&self) -> bool {
        self.assertions
    }

    pub fn python_executable(&self) -> Option<&Path> {
        self.python_executable.as_deref()
    }

    pub fn python_include_dir(&self) -> Option<&Path> {
        self.python_include_dir.as_deref()
    }
}

/// `ON`, `1` and the empty string enable a setting; any other value disables
/// it. An unset variable keeps the default.
fn bool_setting(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(value) => value.is_empty() || value == "ON" || value == "1",
    }
}
