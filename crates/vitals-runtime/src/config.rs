use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use vitals_types::Source;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VITALS_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.vitals (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VITALS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("vitals"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".vitals"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Remote blob store configuration. The shipped backend is a directory,
/// typically a synced or mounted drive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub enabled: bool,
    /// Replay records from a local JSON file instead of a live connector.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fixture: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Secret the blob cipher key is derived from. The
    /// VITALS_ENCRYPTION_KEY environment variable takes precedence so the
    /// secret can stay out of the config file.
    #[serde(default)]
    pub encryption_key: Option<String>,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    #[serde(default)]
    pub sources: HashMap<String, SourceConfig>,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn source(&self, source: Source) -> SourceConfig {
        self.sources
            .get(source.name())
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_source(&mut self, source: Source, config: SourceConfig) {
        self.sources.insert(source.name().to_string(), config);
    }

    /// Encryption secret, environment first.
    pub fn encryption_secret(&self) -> Option<String> {
        std::env::var("VITALS_ENCRYPTION_KEY")
            .ok()
            .or_else(|| self.encryption_key.clone())
    }
}
