//! Configuration schema types for `avatar.toml`
//!
//! Defines the structure and validation rules of the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest integer scale factor accepted for rendering.
pub const MAX_SCALE: u8 = 16;

/// Largest accepted frame side, in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Largest accepted side of the scaled output image, in pixels.
pub const MAX_OUTPUT_SIZE: u32 = 16384;

/// Log verbosity named in `[logging] level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level reached by raising `self` by `steps` (one per `-v`).
    pub fn raised(self, steps: u8) -> LogLevel {
        const ORDER: [LogLevel; 5] =
            [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug, LogLevel::Trace];
        let index = ORDER.iter().position(|l| *l == self).unwrap_or(1);
        ORDER[(index + steps as usize).min(ORDER.len() - 1)]
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Where parts come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (`.json`, `.jsonl`, `.json5`) or asset directory
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Root that part `src` paths resolve against
    #[serde(default = "default_assets")]
    pub assets: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: default_catalog_path(), assets: default_assets() }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_assets() -> PathBuf {
    PathBuf::from(".")
}

/// PNG output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame size [width, height] every layer is painted to
    #[serde(default = "default_size")]
    pub size: [u32; 2],
    /// Integer upscale applied after compositing
    #[serde(default = "default_scale")]
    pub scale: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { size: default_size(), scale: default_scale() }
    }
}

fn default_size() -> [u32; 2] {
    [512, 512]
}

fn default_scale() -> u8 {
    1
}

/// Random generation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed for reproducible avatars; absent means OS entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Diagnostics settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Root of `avatar.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.scale")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "avatar.toml: '{}' {}", self.field, self.message)
    }
}

impl AvatarConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.catalog.path.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "catalog.path".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        let [width, height] = self.render.size;
        if width == 0 || height == 0 {
            errors.push(ConfigValidationError {
                field: "render.size".to_string(),
                message: "dimensions must be positive".to_string(),
            });
        } else if width > MAX_SIZE || height > MAX_SIZE {
            errors.push(ConfigValidationError {
                field: "render.size".to_string(),
                message: format!("dimensions must be at most {}", MAX_SIZE),
            });
        }

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        } else if width.max(height).saturating_mul(u32::from(self.render.scale))
            > MAX_OUTPUT_SIZE
        {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!(
                    "scales a {}x{} frame beyond {} pixels per side",
                    width, height, MAX_OUTPUT_SIZE
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: AvatarConfig = toml::from_str("").unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("catalog.json"));
        assert_eq!(config.catalog.assets, PathBuf::from("."));
        assert_eq!(config.render.size, [512, 512]);
        assert_eq!(config.render.scale, 1);
        assert_eq!(config.random.seed, None);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[catalog]
path = "parts"
assets = "parts"

[render]
size = [256, 128]
scale = 4

[random]
seed = 42

[logging]
level = "debug"
"#;
        let config: AvatarConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("parts"));
        assert_eq!(config.render.size, [256, 128]);
        assert_eq!(config.render.scale, 4);
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result: Result<AvatarConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = AvatarConfig::default();
        config.catalog.path = PathBuf::new();
        config.render.size = [0, 10];
        config.render.scale = 17;

        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["catalog.path", "render.size", "render.scale"]);
        assert!(errors[2].to_string().contains("between 1 and 16"));
    }

    #[test]
    fn test_validate_rejects_oversized_frames() {
        let mut config = AvatarConfig::default();
        config.render.size = [u32::MAX, 64];
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "render.size");
        assert!(errors[0].to_string().contains("at most 4096"));

        config.render.size = [4096, 4096];
        config.render.scale = 5;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "render.scale");

        config.render.scale = 4;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_log_level_raised() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
        assert_eq!(LogLevel::Error.raised(2), LogLevel::Info);
    }
}
