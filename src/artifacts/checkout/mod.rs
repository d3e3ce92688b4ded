pub mod branch_name;
pub mod request;
pub mod revision;

/// Reject values that cannot safely be spliced into a refspec or passed as a
/// positional git argument: empty strings, flag look-alikes, `..` sequences
/// and anything containing whitespace or control bytes.
pub(crate) fn validate_ref_component(value: &str, what: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("{what} must not be empty");
    }
    if value.starts_with('-') {
        anyhow::bail!("{what} must not start with '-'");
    }
    if value.contains("..") {
        anyhow::bail!("{what} must not contain '..'");
    }
    if value.bytes().any(|byte| byte <= 0x20 || byte == 0x7f) {
        anyhow::bail!("{what} must not contain whitespace or control characters");
    }

    Ok(())
}
