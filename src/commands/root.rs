use crate::config::load_config;
use crate::resolve::{canonical_or_self, search_origin};
use crate::vcs;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub fn run_root(path: Option<PathBuf>, strict: bool, shell: bool, json: bool) -> Result<()> {
    let reference = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let origin = search_origin(&reference);

    let (root, source) = if shell {
        match vcs::git_toplevel_in(&origin) {
            Some(root) => (root, "git"),
            None if strict => bail!(
                "🛑 git couldn't resolve a top-level directory from {}.\n\
                 → Are you inside a git repository?\n\
                 → Drop --strict to fall back to the current directory.",
                origin.display()
            ),
            None => {
                let cwd = std::env::current_dir()?;
                (canonical_or_self(&cwd), "cwd")
            }
        }
    } else {
        let config = load_config(&origin)?;
        match vcs::find_root_with(&origin, &config.markers) {
            Some(root) => (root, "marker"),
            None if strict => bail!(
                "🛑 Couldn't find a project root above {}.\n\
                 → No version-control marker (or configured marker) exists in this or any parent folder.\n\
                 → Drop --strict to fall back to the current directory.",
                origin.display()
            ),
            None => (vcs::root_or_default(&origin)?, "cwd"),
        }
    };

    print_resolved(&root, source, json)
}

fn print_resolved(root: &Path, source: &str, json: bool) -> Result<()> {
    if json {
        let payload = serde_json::json!({ "root": root, "source": source });
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", root.display());
    }
    Ok(())
}
