//! Error types for lineage-core

use thiserror::Error;

/// Result type alias using lineage-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for lineage
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file is not valid YAML for `RuntimeConfig`
    #[error("Failed to parse {path}: {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment override could not be parsed
    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar { var: String, value: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid environment variable error
    pub fn invalid_env_var(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            var: var.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_env_var_message() {
        let err = Error::invalid_env_var("LINEAGE_RETRY_MAX_ATTEMPTS", "many");
        assert_eq!(
            err.to_string(),
            "Invalid value for LINEAGE_RETRY_MAX_ATTEMPTS: many"
        );
    }
}
