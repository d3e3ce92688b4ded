use std::fmt;

/// A validated branch name, safe to embed in refspecs and ref paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        super::validate_ref_component(value, "branch name")?;

        Ok(BranchName(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
