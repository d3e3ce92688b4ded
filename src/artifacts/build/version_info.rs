use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Release metadata read from `version_info.json` at the repository root.
///
/// CI writes this file when cutting a release; local builds usually run
/// without it, so every field falls back to a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "package-suffix", default)]
    package_suffix: Option<String>,
    #[serde(rename = "package-version", default)]
    package_version: Option<String>,
    #[serde(rename = "llvm-revision", default)]
    llvm_revision: Option<String>,
}

impl VersionInfo {
    pub fn load(repo_root: &Path) -> anyhow::Result<Self> {
        let path = repo_root.join("version_info.json");

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("malformed {}", path.display()))
    }

    pub fn package_suffix(&self) -> &str {
        self.package_suffix.as_deref().unwrap_or("")
    }

    pub fn package_version(&self) -> &str {
        self.package_version.as_deref().unwrap_or("0.1a1")
    }

    pub fn llvm_revision(&self) -> &str {
        self.llvm_revision.as_deref().unwrap_or("UNKNOWN")
    }
}
