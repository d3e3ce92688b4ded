use crate::areas::distribution::Distribution;
use crate::areas::exec;
use crate::areas::staging::{BuildInfo, DistManifest};
use crate::artifacts::build::plan::{ConfigurePlan, DetectedTools, install_targets};
use crate::artifacts::build::version_info::VersionInfo;
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use std::fs;
use std::io::Write;
use std::process::Output;
use tokio::process::Command;

#[derive(Debug, Clone, Copy, new)]
pub struct BuildOptions {
    /// Discard any existing CMake cache before configuring.
    pub rerun_cmake: bool,
    /// Stop once configure terminates, leaving a chance to adjust options
    /// in the build directory by hand.
    pub cmake_only: bool,
}

impl Distribution {
    /// Configure and build the LLVM+MLIR tree, then stage the install
    /// directory as a distributable package layout.
    ///
    /// Strictly sequential; every external invocation is fatal on error and
    /// partial build state is left for the next run to pick up.
    pub async fn build(&mut self, options: BuildOptions) -> anyhow::Result<()> {
        let settings = self.settings().clone();

        self.report(format!("Using REPO_DIR = {}", settings.repo_root().display()))?;
        self.report(format!(
            "Using LLVM_REPO_DIR = {}",
            settings.llvm_repo_dir().display()
        ))?;

        let cmake_lists = settings.llvm_repo_dir().join("llvm").join("CMakeLists.txt");
        anyhow::ensure!(
            cmake_lists.is_file(),
            "could not find LLVM sources in {}",
            settings.llvm_repo_dir().display()
        );

        let version_info = VersionInfo::load(settings.repo_root())?;

        // Cycling CI configurations reuse the build tree for incrementality;
        // clearing just the cache is enough to force a fresh configure.
        if options.rerun_cmake {
            let cache = self.cmake().cache_path();
            if cache.exists() {
                self.report("Removing existing CMakeCache.txt")?;
                fs::remove_file(&cache)
                    .with_context(|| format!("failed to remove {}", cache.display()))?;
            }
        }

        let tools = DetectedTools::detect();
        if let Some(ninja) = &tools.ninja {
            self.report(format!("Using ninja {}", ninja.display()))?;
        }
        if let Some(ccache) = &tools.ccache {
            self.report(format!("Using ccache {}", ccache.display()))?;
        }
        if let Some(lld) = &tools.lld {
            self.report(format!("Using linker {}", lld.display()))?;
        }

        let plan = ConfigurePlan::assemble(&settings, &tools);
        self.run_step(self.cmake().configure(&plan), "cmake configure")
            .await?;

        if options.cmake_only {
            self.report(format!(
                "Configure finished; you can continue manually in {}",
                settings.build_dir().display()
            ))?;
            return Ok(());
        }

        let targets = install_targets(settings.release_mode());
        self.run_step(self.cmake().build(&targets), "cmake build")
            .await?;

        self.stage(&version_info)?;

        Ok(())
    }

    /// Repackage the install tree as an importable module structure: package
    /// markers, discovered packages, artifact globs and build metadata.
    fn stage(&self, version_info: &VersionInfo) -> anyhow::Result<()> {
        self.staging().ensure_package_markers()?;

        let packages = self.staging().discover_packages()?;
        self.report(format!("Found packages: {}", packages.join(", ")))?;

        let headers = self.staging().header_files()?;
        let package_data = self.staging().package_data(&headers);

        let info = BuildInfo::new(
            version_info.package_suffix().to_string(),
            version_info.package_version().to_string(),
            version_info.llvm_revision().to_string(),
        );
        self.staging().write_build_info(&info)?;

        let manifest = DistManifest::new(packages, package_data);
        self.staging().write_manifest(&manifest)?;

        self.report(format!(
            "Staged distribution metadata in {}",
            self.staging().install_dir().display()
        ))?;

        Ok(())
    }

    fn report(&self, message: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{} {}", "--".dimmed(), message.as_ref())?;
        Ok(())
    }

    async fn run_step(&self, command: Command, label: &str) -> anyhow::Result<Output> {
        writeln!(
            self.writer(),
            "{} {}",
            "Run:".dimmed(),
            exec::render(&command)
        )?;

        exec::run_tool(command, label).await
    }
}
