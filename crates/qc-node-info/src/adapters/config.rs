use crate::ports::{ConfigProvider, NodeInfoConfig};

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: NodeInfoConfig,
}

impl StaticConfigProvider {
    /// Create with default node settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified node settings.
    #[must_use]
    pub fn with_config(mut self, config: NodeInfoConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn node_config(&self) -> NodeInfoConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Production Config Loading (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use crate::domain::IdentityKey;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        node: NodeInfoConfig,
        #[serde(default)]
        identity: IdentityConfig,
    }

    #[derive(Debug, Deserialize, Default)]
    struct IdentityConfig {
        key: Option<String>,
    }

    /// TOML-based configuration provider.
    ///
    /// Loads the local node's descriptor settings from a TOML file. Missing
    /// keys fall back to `NodeInfoConfig::default()`.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [node]
    /// moniker = "validator-0"
    /// network = "quantum-chain-1"
    /// listen_address = "0.0.0.0:26656"
    /// version = "1.2.3"
    /// channels = [32, 33, 48]
    /// other = ["tx_index=on"]
    ///
    /// [identity]
    /// key = "02a1b2..."
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: NodeInfoConfig,
        identity_key: Option<IdentityKey>,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read or parsed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let identity_key = file
                .identity
                .key
                .as_deref()
                .map(IdentityKey::from_hex)
                .transpose()
                .map_err(|e| ConfigError::InvalidIdentityKey(e.to_string()))?;

            Ok(Self {
                config: file.node,
                identity_key,
            })
        }

        /// Identity key from the `[identity]` table, if present.
        pub fn identity_key(&self) -> Option<&IdentityKey> {
            self.identity_key.as_ref()
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn node_config(&self) -> NodeInfoConfig {
            self.config.clone()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            error: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// `[identity] key` is not valid hex.
        #[error("Invalid identity key: {0}")]
        InvalidIdentityKey(String),
    }

}

#[cfg(feature = "config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
