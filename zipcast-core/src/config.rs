use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the per-directory config file, checked before the platform path.
pub const LOCAL_CONFIG_FILE: &str = "app.config";

/// The `[secrets]` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Secrets {
    /// Example TOML:
    /// [secrets]
    /// apikey = "..."
    #[serde(rename = "apikey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub secrets: Secrets,
}

impl Config {
    /// Returns the AccuWeather API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.secrets.api_key.as_deref()
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.secrets.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if no file exists yet.
    ///
    /// An `app.config` in the working directory takes precedence over the
    /// platform config file.
    pub fn load() -> Result<Self> {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }

        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Read and parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform path, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the platform config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "zipcast", "zipcast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_none_by_default() {
        let cfg = Config::default();
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn set_api_key_is_readable_back() {
        let mut cfg = Config::default();

        cfg.set_api_key("SECRET_KEY".into());

        assert_eq!(cfg.api_key(), Some("SECRET_KEY"));
    }

    #[test]
    fn parses_secrets_table() {
        let cfg: Config = toml::from_str(
            r#"
            [secrets]
            apikey = "ABC123"
            "#,
        )
        .expect("config must parse");

        assert_eq!(cfg.api_key(), Some("ABC123"));
    }

    #[test]
    fn parses_empty_file_as_default() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn load_from_reads_file_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "[secrets]\napikey = \"FROM_DISK\"\n").expect("write config");

        let cfg = Config::load_from(&path).expect("load must succeed");

        assert_eq!(cfg.api_key(), Some("FROM_DISK"));
    }

    #[test]
    fn load_from_errors_on_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "not valid toml [").expect("write config");

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn serializes_back_to_secrets_table() {
        let mut cfg = Config::default();
        cfg.set_api_key("ABC123".into());

        let toml = toml::to_string_pretty(&cfg).expect("serialize");

        assert!(toml.contains("[secrets]"));
        assert!(toml.contains("apikey = \"ABC123\""));
    }
}
