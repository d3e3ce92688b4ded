use crate::artifacts::checkout::branch_name::BranchName;
use crate::artifacts::checkout::revision::Revision;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Everything one checkout invocation needs, resolved up front.
///
/// The destination is created fresh by the procedure; the revision comes from
/// a version file and is fixed before any tool runs.
#[derive(Debug, Clone, new)]
pub struct CheckoutRequest {
    destination: PathBuf,
    remote_url: String,
    branch: BranchName,
    revision: Revision,
}

impl CheckoutRequest {
    pub fn from_cli(
        destination: &Path,
        remote_url: &str,
        branch: &str,
        version_file: &Path,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(!remote_url.trim().is_empty(), "remote URL must not be empty");

        let branch = BranchName::parse(branch)?;
        let revision = Revision::from_pin_file(version_file)?;

        Ok(Self::new(
            destination.to_path_buf(),
            remote_url.to_string(),
            branch,
            revision,
        ))
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }
}
