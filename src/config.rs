use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, DateError};
use crate::utils::Timezone;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// IANA zone name, `utc` or `local`; absent means local.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    pub fn load() -> Self {
        Self::load_internal(false)
    }

    pub fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn zone(&self) -> Result<Timezone, DateError> {
        Timezone::parse(self.timezone.as_deref())
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return config,
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: {e}");
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/assert-util/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("assert-util").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("assert-util").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.assert-util.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".assert-util.toml"));
        }

        paths
    }
}
