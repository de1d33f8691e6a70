use crate::constants::VCS_MARKERS;
use crate::finder::find_upward;
use crate::resolve::canonical_or_self;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Find the version-control root for `origin` by trying each marker
/// candidate in order and taking the first hit. The bare `.git` form runs
/// first so submodule checkouts (where `.git` is a file) resolve correctly.
pub fn find_root(origin: &Path) -> Option<PathBuf> {
    find_root_with(origin, &[])
}

/// Like [`find_root`], but with user-configured marker patterns tried ahead
/// of the built-in version-control chain.
pub fn find_root_with(origin: &Path, extra_markers: &[String]) -> Option<PathBuf> {
    extra_markers
        .iter()
        .map(String::as_str)
        .chain(VCS_MARKERS)
        .find_map(|marker| find_upward(origin, marker))
}

/// [`find_root`] with the current working directory as a last resort, so
/// callers always get somewhere to operate from.
pub fn root_or_default(origin: &Path) -> Result<PathBuf> {
    match find_root(origin) {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(canonical_or_self(&cwd))
        }
    }
}

/// Ask git itself for the top-level directory, anchored at `dir`. Slower
/// than walking the filesystem; kept as an alternative path for setups
/// where the marker walk isn't trusted.
pub fn git_toplevel_in(dir: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .ok()?;

    // Nonzero exit means "not a repo" (or worse); whatever got printed is
    // irrelevant at that point.
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_line = stdout.lines().next()?.trim();
    if first_line.is_empty() {
        return None;
    }

    Some(PathBuf::from(first_line))
}
