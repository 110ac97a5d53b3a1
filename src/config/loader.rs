use std::path::{Path, PathBuf};

use crate::error::{BikeshareError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

/// A loaded configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults were used.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

const LOCAL_CONFIG_NAME: &str = ".bikeshare.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.bikeshare.toml` in current directory
/// 2. Platform-specific user config directory:
///    - Windows: `%APPDATA%\bikeshare-explorer\config.toml`
///    - macOS: `~/Library/Application Support/bikeshare-explorer/config.toml`
///    - Linux: `~/.config/bikeshare-explorer/config.toml` (XDG)
/// 3. Returns `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| {
                BikeshareError::Config(format!("cannot read {}: {e}", path.display()))
            })?;
        let config = Self::parse_config(&content)?;

        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
