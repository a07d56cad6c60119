//! Git queries used by configuration resolution.

use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Find the root directory of the enclosing git work tree.
///
/// Returns `None` when not inside a work tree or when git is unavailable.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if !output.status.success() {
        debug!("not inside a git work tree");
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let root = stdout.trim();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}
