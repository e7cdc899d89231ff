//! Runtime configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (~/.lineage/config.yaml, or an explicit path)
//! 3. Environment variables (LINEAGE_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

/// Default config file name inside the config directory
const CONFIG_FILE: &str = "config.yaml";

/// Runtime configuration loader
pub struct ConfigLoader {
    /// Config file to read
    config_path: Utf8PathBuf,
    /// Whether a missing file is an error
    required: bool,
}

impl ConfigLoader {
    /// Create a loader for the standard config file (~/.lineage/config.yaml)
    ///
    /// A missing file is not an error; defaults apply.
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join(CONFIG_FILE);
        Ok(Self {
            config_path,
            required: false,
        })
    }

    /// Create a loader for an explicit config file, which must exist
    pub fn with_path(config_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            required: true,
        }
    }

    /// Get the standard config directory (~/.lineage)
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;

        Utf8PathBuf::from_path_buf(home.join(".lineage"))
            .map_err(|p| Error::invalid_config(format!("Non UTF-8 home directory: {}", p.display())))
    }

    /// Load runtime configuration with precedence applied
    pub fn load(&self) -> Result<RuntimeConfig> {
        let mut config = if self.config_path.exists() {
            debug!("Loading configuration from {}", self.config_path);
            Self::load_yaml_file(&self.config_path)?
        } else if self.required {
            return Err(Error::config_not_found(self.config_path.as_str()));
        } else {
            debug!(
                "No configuration at {}, using defaults",
                self.config_path
            );
            RuntimeConfig::default()
        };

        config = Self::apply_env_overrides(config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(path: &Utf8Path) -> Result<RuntimeConfig> {
        let content = fs::read_to_string(path)?;
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(RuntimeConfig::default());
        }
        serde_yaml_ng::from_str(&content).map_err(|source| Error::YamlParse {
            path: path.to_string(),
            source,
        })
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("LINEAGE_CLOUDDRIVER_URL") {
            config.clouddriver.base_url = val;
        }

        if let Ok(val) = env::var("LINEAGE_HTTP_TIMEOUT_SECS") {
            config.clouddriver.timeout_secs = val
                .parse()
                .map_err(|_| Error::invalid_env_var("LINEAGE_HTTP_TIMEOUT_SECS", val))?;
        }

        if let Ok(val) = env::var("LINEAGE_RETRY_MAX_ATTEMPTS") {
            config.retry.max_attempts = val
                .parse()
                .map_err(|_| Error::invalid_env_var("LINEAGE_RETRY_MAX_ATTEMPTS", val))?;
        }

        if let Ok(val) = env::var("LINEAGE_RETRY_DELAY_MS") {
            config.retry.initial_delay_ms = val
                .parse()
                .map_err(|_| Error::invalid_env_var("LINEAGE_RETRY_DELAY_MS", val))?;
        }

        if let Ok(val) = env::var("LINEAGE_RETRY_FAST_FAIL") {
            config.retry.fast_fail = val
                .parse()
                .map_err(|_| Error::invalid_env_var("LINEAGE_RETRY_FAST_FAIL", val))?;
        }

        Ok(config)
    }

    fn validate(config: &RuntimeConfig) -> Result<()> {
        if config.retry.max_attempts == 0 {
            return Err(Error::invalid_config("retry.max-attempts must be at least 1"));
        }
        if config.clouddriver.base_url.trim().is_empty() {
            return Err(Error::invalid_config("clouddriver.base-url must not be empty"));
        }
        Ok(())
    }

    /// Get the config file path
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn temp_config(content: &str) -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join(CONFIG_FILE))
            .expect("Invalid UTF-8 path");
        fs::write(&path, content).unwrap();
        (ConfigLoader::with_path(path), temp_dir)
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let (loader, _temp) = temp_config(
            r#"
clouddriver:
  base-url: "https://clouddriver.prod.example.com"
  timeout-secs: 5
retry:
  max-attempts: 4
  initial-delay-ms: 250
"#,
        );

        let config = loader.load().unwrap();
        assert_eq!(
            config.clouddriver.base_url,
            "https://clouddriver.prod.example.com"
        );
        assert_eq!(config.clouddriver.timeout_secs, 5);
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.retry.initial_delay_ms, 250);
        assert!(!config.retry.fast_fail);
    }

    #[test]
    #[serial]
    fn test_empty_file_yields_defaults() {
        let (loader, _temp) = temp_config("");
        let config = loader.load().unwrap();
        assert_eq!(config.retry.max_attempts, 15);
        assert_eq!(config.clouddriver.base_url, "http://localhost:7002");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let loader = ConfigLoader::with_path("/nonexistent/lineage/config.yaml");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    #[serial]
    fn test_invalid_yaml() {
        let (loader, _temp) = temp_config("retry: [not, a, map]");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::YamlParse { .. }));
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains(loader.config_path().as_str()));
    }

    #[test]
    #[serial]
    fn test_zero_attempts_rejected() {
        let (loader, _temp) = temp_config("retry:\n  max-attempts: 0\n");
        let err = loader.load().unwrap_err();
        assert!(err.to_string().contains("max-attempts"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        let (loader, _temp) = temp_config("retry:\n  max-attempts: 4\n");

        env::set_var("LINEAGE_CLOUDDRIVER_URL", "http://clouddriver.env:7002");
        env::set_var("LINEAGE_RETRY_MAX_ATTEMPTS", "7");
        env::set_var("LINEAGE_RETRY_DELAY_MS", "10");
        env::set_var("LINEAGE_RETRY_FAST_FAIL", "true");

        let config = loader.load().unwrap();
        assert_eq!(config.clouddriver.base_url, "http://clouddriver.env:7002");
        assert_eq!(config.retry.max_attempts, 7);
        assert_eq!(config.retry.initial_delay_ms, 10);
        assert!(config.retry.fast_fail);

        env::remove_var("LINEAGE_CLOUDDRIVER_URL");
        env::remove_var("LINEAGE_RETRY_MAX_ATTEMPTS");
        env::remove_var("LINEAGE_RETRY_DELAY_MS");
        env::remove_var("LINEAGE_RETRY_FAST_FAIL");
    }

    #[test]
    #[serial]
    fn test_env_override_invalid_number() {
        let (loader, _temp) = temp_config("");

        env::set_var("LINEAGE_HTTP_TIMEOUT_SECS", "soon");
        let result = loader.load();
        env::remove_var("LINEAGE_HTTP_TIMEOUT_SECS");

        assert!(matches!(result, Err(Error::InvalidEnvVar { .. })));
    }
}
