use crate::constants::CONFIG_FILE;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-project settings, read from the nearest `rootward.toml` above the
/// search origin. Everything is optional; no file at all means defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct RootwardConfig {
    /// Marker patterns tried before the built-in version-control chain.
    /// Same syntax as the CLI: a trailing slash means "directory".
    #[serde(default)]
    pub markers: Vec<String>,
}

pub fn load_config(origin: &Path) -> Result<RootwardConfig> {
    let Some(config_path) = config_path_for(origin) else {
        return Ok(RootwardConfig::default());
    };

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: RootwardConfig = toml::from_str(&contents).with_context(|| {
        format!(
            "🛑 Corrupted {} found at {}\n\
             → The TOML syntax is invalid. Check for syntax errors and try again.",
            CONFIG_FILE,
            config_path.display()
        )
    })?;

    Ok(config)
}

// A plain upward file lookup, deliberately not routed through the marker
// machinery: config has to be findable before any root is known.
fn config_path_for(origin: &Path) -> Option<PathBuf> {
    origin
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}
