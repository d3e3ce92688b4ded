use anyhow::Context;
use std::fmt;
use std::path::Path;

/// A pinned revision: one commit identifier (or ref name) chosen in advance,
/// as opposed to "latest on branch".
///
/// The pin is sourced from a single-line version file with surrounding
/// whitespace stripped, and is immutable for the duration of one checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        let value = value.trim();
        super::validate_ref_component(value, "revision")?;

        Ok(Revision(value.to_string()))
    }

    pub fn from_pin_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read version file {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("invalid revision in version file {}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
