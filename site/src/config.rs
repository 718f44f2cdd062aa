//! Configuration file support.
//!
//! Loads optional `voidrose.toml` from the working directory, or an explicit
//! path given with `--config`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use voidrose_about::theme::{Theme, ThemeError, ThemeOverrides};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "voidrose.toml";

/// Output directory when neither the CLI nor the config names one.
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid theme override")]
    Theme(#[from] ThemeError),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `render` writes the site
    pub out_dir: Option<PathBuf>,
    /// Overrides merged over the built-in theme
    pub theme: ThemeOverrides,
}

impl SiteConfig {
    /// Load `voidrose.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`SiteConfig::load`], a
    /// missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Built-in theme with this config's overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();
        if !self.theme.is_empty() {
            theme.apply_overrides(&self.theme)?;
        }
        Ok(theme)
    }

    /// Output directory: CLI flag, then config, then [`DEFAULT_OUT_DIR`].
    pub fn out_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}
