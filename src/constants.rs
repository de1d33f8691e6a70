/// Optional per-project config file, looked up the same way markers are.
pub const CONFIG_FILE: &str = "rootward.toml";

/// Version-control marker candidates, tried in order. The bare form matches
/// a submodule-style `.git` file; the slash form matches the usual directory.
pub const VCS_MARKERS: [&str; 2] = [".git", ".git/"];
