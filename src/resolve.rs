use std::path::{Path, PathBuf};

/// Canonicalize a path, falling back to the path as given when the
/// filesystem can't resolve it (unsaved buffers, dead symlinks).
pub fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Turn a reference path (usually the file open in the editor) into the
/// directory the upward search starts from. Files resolve to their parent;
/// anything that isn't a directory on disk falls back the same way.
pub fn search_origin(reference: &Path) -> PathBuf {
    let dir = if reference.is_dir() {
        reference.to_path_buf()
    } else {
        match reference.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };

    canonical_or_self(&dir)
}

/// Whether `candidate` is `origin` itself or one of its ancestors.
///
/// Comparison is per path component, so `/foo/bar` is not treated as an
/// ancestor of `/foo/barbaz`. Both sides are expected pre-canonicalized.
pub fn is_ancestor_of(candidate: &Path, origin: &Path) -> bool {
    origin.starts_with(candidate)
}
