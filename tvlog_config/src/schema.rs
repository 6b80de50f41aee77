use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// Display settings live in tvlog_core next to the renderer
use tvlog_core::DisplayConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "display": {
    "indent": 4
  },
  "logging": {
    "level": "warn"
  }
}
"#;

impl Config {
    /// Default config location, `~/tvlog/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load from `path`. A missing file yields the defaults; a malformed one
    /// is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file at {}: {e}", path.display())
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("tvlog"))
    }

    /// Write the config template to `path`, creating parent directories.
    pub fn create_config_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - display.indent: Spaces per level when listing series");
        println!("   - logging.level: Log level (error, warn, info, debug, trace); RUST_LOG overrides it");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.indent, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_template_matches_defaults() {
        let config: Config = serde_json::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.display.indent, Config::default().display.indent);
        assert_eq!(config.logging.level, Config::default().logging.level);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.display.indent, 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "display": { "indent": 2 } }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.indent, 2);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_create_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        Config::create_config_at(&path).unwrap();
        assert!(path.exists());
        assert!(Config::create_config_at(&path).is_err());

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "warn");
    }
}
