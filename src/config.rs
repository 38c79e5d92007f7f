use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".pygrep.yml";

/// Resolved configuration from .pygrep.yml.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default extractor toggles applied when --only is not given.
    /// Validated through the registry exactly like the CLI flag.
    pub extractors: Vec<String>,
    /// Walk-time exclude globs.
    pub exclude: Vec<String>,
    /// Source file extensions considered during directory walks.
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractors: Vec::new(),
            exclude: Vec::new(),
            extensions: vec!["py".to_string(), "pyx".to_string()],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(rename = "Extractors", default)]
    extractors: Vec<String>,
    #[serde(rename = "Exclude", default)]
    exclude: Vec<String>,
    #[serde(rename = "Extensions")]
    extensions: Option<Vec<String>>,
}

/// Load config from the given path, or look for `.pygrep.yml` in the
/// target directory. A missing file yields the defaults; a malformed one
/// is fatal.
pub fn load_config(path: Option<&Path>, target_dir: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => target_dir
            .unwrap_or(Path::new("."))
            .join(CONFIG_FILE_NAME),
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }

    let raw: RawConfig = serde_yml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    let defaults = Config::default();
    Ok(Config {
        extractors: raw.extractors,
        exclude: raw.exclude,
        extensions: raw.extensions.unwrap_or(defaults.extensions),
    })
}
