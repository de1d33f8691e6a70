use crate::finder::find_nearest_dir;
use crate::resolve::search_origin;
use anyhow::{Result, bail};
use std::path::PathBuf;

pub fn run_find(name: &str, path: Option<PathBuf>, json: bool) -> Result<()> {
    let reference = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let origin = search_origin(&reference);

    let Some(found) = find_nearest_dir(&origin, name) else {
        bail!(
            "🛑 No directory named '{}' found above {}.\n\
             → The name is matched exactly, one directory level at a time.",
            name,
            origin.display()
        );
    };

    if json {
        let payload = serde_json::json!({ "name": name, "path": found });
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", found.display());
    }

    Ok(())
}
