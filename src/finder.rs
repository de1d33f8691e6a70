use crate::resolve::{canonical_or_self, is_ancestor_of};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// What a marker pattern is allowed to match on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    File,
    Dir,
}

/// A marker name plus the kind it denotes. A trailing path separator on the
/// raw pattern means "must be a directory"; no other characters are special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    pub name: String,
    pub kind: MarkerKind,
}

impl MarkerPattern {
    /// Parse a raw pattern string. Empty patterns (including a bare
    /// separator) never match anything, so they parse to `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, kind) = match raw
            .strip_suffix(MAIN_SEPARATOR)
            .or_else(|| raw.strip_suffix('/'))
        {
            Some(name) => (name, MarkerKind::Dir),
            None => (raw, MarkerKind::File),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            kind,
        })
    }
}

/// Walk from `origin` up toward the filesystem root, looking for an entry
/// matching `pattern` at each level, and resolve the project root from the
/// first hit. Returns `None` when nothing matches all the way up.
pub fn find_upward(origin: &Path, pattern: &str) -> Option<PathBuf> {
    let marker = MarkerPattern::parse(pattern)?;
    let origin = canonical_or_self(origin);

    for dir in origin.ancestors() {
        let candidate = dir.join(&marker.name);
        match marker.kind {
            MarkerKind::Dir if candidate.is_dir() => {
                return Some(resolve_dir_match(&candidate, &origin));
            }
            MarkerKind::File if candidate.is_file() => {
                // A matched file marks its containing directory as the root.
                return Some(canonical_or_self(dir));
            }
            _ => {}
        }
    }

    None
}

/// Find the nearest ancestor-level directory named `name`, returning the
/// match itself. Unlike [`find_upward`] with a directory pattern, no root
/// resolution is applied to the hit.
pub fn find_nearest_dir(origin: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let origin = canonical_or_self(origin);
    origin
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
        .map(|candidate| canonical_or_self(&candidate))
}

/// A matched marker *directory* resolves to the project root in one of two
/// ways, depending on where it sits relative to the search origin:
///
/// - the match is an ancestor of (or equal to) the origin — the search
///   started inside the marker itself, and the match is the root;
/// - otherwise the match was found as an entry inside some ancestor, so the
///   root is the directory holding it, one level above the match.
fn resolve_dir_match(found: &Path, origin: &Path) -> PathBuf {
    let found = canonical_or_self(found);

    if is_ancestor_of(&found, origin) {
        found
    } else {
        match found.parent() {
            Some(parent) => parent.to_path_buf(),
            None => found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Marker names no real ancestor of a tempdir will contain, so the walk
    // above the fixture tree stays inert.
    const DIR_MARKER: &str = ".rootward-fixture-vcs";
    const FILE_MARKER: &str = "rootward-fixture.json";

    #[test]
    fn test_marker_pattern_trailing_separator_means_directory() {
        let dir = MarkerPattern::parse(".git/").unwrap();
        assert_eq!(dir.name, ".git");
        assert_eq!(dir.kind, MarkerKind::Dir);

        let file = MarkerPattern::parse(".git").unwrap();
        assert_eq!(file.name, ".git");
        assert_eq!(file.kind, MarkerKind::File);
    }

    #[test]
    fn test_marker_pattern_empty_is_none() {
        assert_eq!(MarkerPattern::parse(""), None);
        assert_eq!(MarkerPattern::parse("/"), None);
    }

    #[test]
    fn test_find_upward_no_match_returns_none() {
        let temp_dir = tempdir().unwrap();
        let deep = temp_dir.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(find_upward(&deep, DIR_MARKER), None);
        assert_eq!(find_upward(&deep, &format!("{DIR_MARKER}/")), None);
    }

    #[test]
    fn test_find_upward_empty_pattern_never_matches() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(find_upward(temp_dir.path(), ""), None);
    }

    #[test]
    fn test_directory_marker_found_as_sibling_resolves_to_its_parent() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        let deep = root.join("src/deep");
        fs::create_dir_all(root.join(DIR_MARKER)).unwrap();
        fs::create_dir_all(&deep).unwrap();

        let result = find_upward(&deep, &format!("{DIR_MARKER}/"));
        assert_eq!(result, Some(root.canonicalize().unwrap()));
    }

    #[test]
    fn test_directory_marker_found_as_ancestor_resolves_to_itself() {
        // Searching from inside the marker directory takes the other branch:
        // the match is an ancestor of the origin and is returned as-is.
        let temp_dir = tempdir().unwrap();
        let marker_dir = temp_dir.path().join("project").join(DIR_MARKER);
        let inside = marker_dir.join("objects");
        fs::create_dir_all(&inside).unwrap();

        let result = find_upward(&inside, &format!("{DIR_MARKER}/"));
        assert_eq!(result, Some(marker_dir.canonicalize().unwrap()));
    }

    #[test]
    fn test_file_marker_resolves_to_containing_directory() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(root.join(FILE_MARKER), "{}").unwrap();

        let result = find_upward(&src, FILE_MARKER);
        assert_eq!(result, Some(root.canonicalize().unwrap()));
    }

    #[test]
    fn test_file_pattern_does_not_match_a_directory() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        fs::create_dir_all(root.join(DIR_MARKER)).unwrap();
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();

        // Bare (file) form must not match the directory entry.
        assert_eq!(find_upward(&src, DIR_MARKER), None);
    }

    #[test]
    fn test_directory_pattern_does_not_match_a_file() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(root.join(FILE_MARKER), "").unwrap();

        assert_eq!(find_upward(&src, &format!("{FILE_MARKER}/")), None);
    }

    #[test]
    fn test_find_upward_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        let deep = root.join("src/deep");
        fs::create_dir_all(root.join(DIR_MARKER)).unwrap();
        fs::create_dir_all(&deep).unwrap();

        let pattern = format!("{DIR_MARKER}/");
        let first = find_upward(&deep, &pattern);
        let second = find_upward(&deep, &pattern);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_find_nearest_dir_returns_raw_match() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        let marker_dir = root.join(DIR_MARKER);
        let deep = root.join("src/deep");
        fs::create_dir_all(&marker_dir).unwrap();
        fs::create_dir_all(&deep).unwrap();

        // The match itself comes back, not its parent.
        let result = find_nearest_dir(&deep, DIR_MARKER);
        assert_eq!(result, Some(marker_dir.canonicalize().unwrap()));
    }

    #[test]
    fn test_find_nearest_dir_missing_returns_none() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(find_nearest_dir(temp_dir.path(), DIR_MARKER), None);
        assert_eq!(find_nearest_dir(temp_dir.path(), ""), None);
    }
}
