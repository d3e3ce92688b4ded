use crate::artifacts::build::plan::ConfigurePlan;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Builds `cmake` invocations against one build directory.
///
/// CMake itself is expected on PATH; only auxiliary tools (ninja, ccache,
/// lld) go through discovery when the configure plan is assembled.
pub(crate) struct CMake {
    build_dir: Box<Path>,
}

impl CMake {
    pub(crate) fn new(build_dir: &Path) -> Self {
        CMake {
            build_dir: build_dir.into(),
        }
    }

    pub(crate) fn cache_path(&self) -> PathBuf {
        self.build_dir.join("CMakeCache.txt")
    }

    pub(crate) fn configure(&self, plan: &ConfigurePlan) -> Command {
        let mut command = Command::new("cmake");
        command.args(plan.args());
        command
    }

    pub(crate) fn build(&self, targets: &[String]) -> Command {
        let mut command = Command::new("cmake");
        command
            .arg("--build")
            .arg(&*self.build_dir)
            .arg("--target")
            .args(targets);
        command
    }
}
