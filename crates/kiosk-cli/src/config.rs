use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use kiosk_client::DEFAULT_BACKEND_URL;

/// Resolve the config directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. KIOSK_CONFIG_DIR environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.museum-kiosk (fallback for systems without XDG)
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("KIOSK_CONFIG_DIR") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("museum-kiosk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".museum-kiosk"));
    }

    anyhow::bail!("could not determine config directory: no HOME or XDG config dir found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
        }
    }
}

impl Config {
    /// Missing file means defaults; a present-but-broken file is an error
    /// the user should see, not silently ignore.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

}

/// Effective backend URL: CLI flag > KIOSK_BACKEND_URL > config file > default.
pub fn resolve_backend_url(flag: Option<&str>, config: &Config) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Ok(url) = std::env::var("KIOSK_BACKEND_URL") {
        return url;
    }
    config.backend_url.clone()
}
