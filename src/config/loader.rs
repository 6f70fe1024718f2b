//! Configuration loading and discovery for `avatar.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::AvatarConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`find_config`].
pub const CONFIG_FILE: &str = "avatar.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse avatar.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override catalog source
    pub catalog: Option<PathBuf>,
    /// Override asset root
    pub assets: Option<PathBuf>,
    /// Override frame size
    pub size: Option<[u32; 2]>,
    /// Override scale factor
    pub scale: Option<u8>,
    /// Override random seed
    pub seed: Option<u64>,
}

/// Find avatar.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for avatar.toml
/// 2. Check XDG_CONFIG_HOME/avatarkit/avatar.toml (or ~/.config/avatarkit/avatar.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find avatar.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("avatarkit").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find avatar.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an avatar.toml file.
///
/// If a path is provided, loads from that file. Otherwise uses [`find_config`];
/// if nothing is found the defaults are returned. Relative catalog paths are
/// resolved against the directory holding the file.
pub fn load_config(path: Option<&Path>) -> Result<AvatarConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<AvatarConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: AvatarConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = project_root(path) {
        config.catalog.path = resolve_path(root, &config.catalog.path);
        config.catalog.assets = resolve_path(root, &config.catalog.assets);
    }
    Ok(config)
}

/// Configuration used when no avatar.toml is found.
pub fn default_config() -> AvatarConfig {
    AvatarConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. A catalog given on
/// the command line without an asset root also becomes the asset root when it
/// is a directory.
pub fn merge_cli_overrides(
    config: &mut AvatarConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref catalog) = overrides.catalog {
        config.catalog.path = catalog.clone();
        if overrides.assets.is_none() {
            config.catalog.assets = if catalog.is_dir() {
                catalog.clone()
            } else {
                catalog
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."))
            };
        }
    }
    if let Some(ref assets) = overrides.assets {
        config.catalog.assets = assets.clone();
    }
    if let Some(size) = overrides.size {
        config.render.size = size;
    }
    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }
    if let Some(seed) = overrides.seed {
        config.random.seed = Some(seed);
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
