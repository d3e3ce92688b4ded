use is_executable::IsExecutable;
use std::env;
use std::path::{Path, PathBuf};

/// Locate `tool` on PATH, honoring `PATHEXT` extensions on Windows.
pub(crate) fn which(tool: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    let search_dirs: Vec<PathBuf> = env::split_paths(&path).collect();
    which_in(tool, &search_dirs)
}

pub(crate) fn which_in(tool: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .flat_map(|dir| candidates(dir, tool))
        .find(|candidate| candidate.is_file() && candidate.is_executable())
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(tool)];

    if let Ok(pathext) = env::var("PATHEXT") {
        for ext in pathext.split(';').filter(|ext| !ext.is_empty()) {
            candidates.push(dir.join(format!("{tool}{ext}")));
        }
    }

    candidates
}

/// Resolve an optional build tool, honoring a `USE_<TOOL>` override:
/// `OFF` disables the tool entirely, `ON` or an empty value searches PATH,
/// and anything else names an explicit executable to use.
pub(crate) fn use_tool_path(tool: &str) -> Option<PathBuf> {
    let variable = format!("USE_{}", tool.to_uppercase());

    match env::var(&variable) {
        Err(_) => which(tool),
        Ok(value) if value.eq_ignore_ascii_case("off") => None,
        Ok(value) if value.is_empty() || value.eq_ignore_ascii_case("on") => which(tool),
        Ok(value) => {
            let path = PathBuf::from(value);
            (path.is_file() && path.is_executable()).then_some(path)
        }
    }
}
