use anyhow::Context;
use derive_new::new;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Metadata stamped into the staged install tree, identifying what was built.
#[derive(Debug, Clone, Serialize, new)]
pub(crate) struct BuildInfo {
    package_suffix: String,
    package_version: String,
    llvm_revision: String,
}

/// Listing of everything the staged tree ships: importable packages found
/// under `python/` and the artifact globs that accompany them.
#[derive(Debug, Clone, Serialize, new)]
pub(crate) struct DistManifest {
    packages: Vec<String>,
    package_data: Vec<String>,
}

/// Turns a raw CMake install tree into a distributable package layout.
///
/// The build system lays out pure-python sources under `python/` and native
/// artifacts under `bin/`, `lib/` and `include/`. Staging makes that tree
/// importable as-is: package markers, discovered package names, and two JSON
/// files (`build_info.json`, `dist_manifest.json`) describing the result.
pub(crate) struct Staging {
    install_dir: Box<Path>,
}

impl Staging {
    pub(crate) fn new(install_dir: &Path) -> Self {
        Staging {
            install_dir: install_dir.into(),
        }
    }

    pub(crate) fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Make `python/` a package root even when the build shipped nothing
    /// pure-python; downstream importers rely on the marker being present.
    pub(crate) fn ensure_package_markers(&self) -> anyhow::Result<()> {
        let python_dir = self.install_dir.join("python");
        fs::create_dir_all(&python_dir)
            .with_context(|| format!("failed to create {}", python_dir.display()))?;

        let marker = python_dir.join("__init__.py");
        if !marker.exists() {
            fs::write(&marker, b"").with_context(|| format!("failed to create {}", marker.display()))?;
        }

        Ok(())
    }

    /// Directories under `python/` carrying an `__init__.py`, as dotted names.
    pub(crate) fn discover_packages(&self) -> anyhow::Result<Vec<String>> {
        let python_dir = self.install_dir.join("python");
        let mut packages = Vec::new();

        for entry in WalkDir::new(&python_dir).min_depth(1) {
            let entry = entry?;
            if entry.file_type().is_dir() && entry.path().join("__init__.py").is_file() {
                let relative = entry.path().strip_prefix(&python_dir)?;
                let dotted = relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(".");
                packages.push(dotted);
            }
        }

        packages.sort();
        Ok(packages)
    }

    /// Relative paths of the shipped C API headers (`include/mlir-c/**`).
    pub(crate) fn header_files(&self) -> anyhow::Result<Vec<String>> {
        let include_dir = self.install_dir.join("include").join("mlir-c");
        let mut headers = Vec::new();

        if !include_dir.exists() {
            return Ok(headers);
        }

        for entry in WalkDir::new(&include_dir) {
            let entry = entry?;
            if entry.file_type().is_file() {
                let relative = entry.path().strip_prefix(&*self.install_dir)?;
                headers.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }

        headers.sort();
        Ok(headers)
    }

    /// Fixed artifact globs every distribution ships, plus discovered headers.
    ///
    /// Wild-carding all of `lib/*.so` would duplicate every soname symlink,
    /// so the public library names are listed one by one.
    pub(crate) fn package_data(&self, headers: &[String]) -> Vec<String> {
        let extension_glob = if cfg!(windows) {
            "python/*.pyd"
        } else {
            "python/*.so"
        };

        let mut data: Vec<String> = [
            extension_glob,
            // Windows DLLs live in bin/ and are otherwise not linked;
            // import libs live in lib/.
            "bin/*.dll",
            "lib/*.lib",
            "lib/libMLIRPublicAPI.so",
            "lib/libMLIRPublicAPI.dylib",
            // CMake export files.
            "lib/cmake/llvm/*.cmake",
            "lib/cmake/mlir/*.cmake",
            // Tools needed to build against the distribution.
            "bin/mlir-tblgen*",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        data.extend(headers.iter().cloned());
        data
    }

    pub(crate) fn write_build_info(&self, info: &BuildInfo) -> anyhow::Result<PathBuf> {
        self.write_json("build_info.json", info)
    }

    pub(crate) fn write_manifest(&self, manifest: &DistManifest) -> anyhow::Result<PathBuf> {
        self.write_json("dist_manifest.json", manifest)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> anyhow::Result<PathBuf> {
        let path = self.install_dir.join(name);
        let contents =
            serde_json::to_string_pretty(value).with_context(|| format!("failed to serialize {name}"))?;
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
