use std::path::Path;

use pathwire_core::types::ProtocolVersion;
use serde::Deserialize;
use thiserror::Error;

use crate::subnet::Subnet;

/// Default encryption layer name.
pub const DEFAULT_ENCRYPTION: &str = "Plaintext";

/// Errors returned when loading subnet configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Subnet settings as found in a deployment's TOML file.
///
/// ```toml
/// subnet = "mainnet"
/// encryption = "Plaintext"
///
/// [version]
/// major = 0
/// minor = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubnetConfig {
    pub subnet: String,
    pub encryption: String,
    pub version: ProtocolVersion,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        Self {
            subnet: String::new(),
            encryption: DEFAULT_ENCRYPTION.to_string(),
            version: ProtocolVersion::CURRENT,
        }
    }
}

impl SubnetConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn into_subnet(self) -> Subnet {
        Subnet::with_version(self.subnet, self.encryption, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SubnetConfig, DEFAULT_ENCRYPTION};
    use pathwire_core::types::ProtocolVersion;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = SubnetConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(cfg, SubnetConfig::default());
        assert_eq!(cfg.encryption, DEFAULT_ENCRYPTION);
        assert_eq!(cfg.version, ProtocolVersion::CURRENT);
    }

    #[test]
    fn version_table_overrides_build_constants() {
        let cfg = SubnetConfig::from_toml_str(
            r#"
            subnet = "testnet"
            encryption = "SSL"

            [version]
            major = 1
            minor = 2
            "#,
        )
        .expect("config should parse");
        assert_eq!(cfg.subnet, "testnet");
        assert_eq!(cfg.version, ProtocolVersion::new(1, 2, 0));

        let subnet = cfg.into_subnet();
        assert_eq!(subnet.encryption(), "SSL");
        assert_eq!(subnet.version().protocol_string(), "1.2");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SubnetConfig::from_toml_str("subnet = \"a\"\nport = 4444\n")
            .expect_err("unknown key should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SubnetConfig::load("/nonexistent/pathwire.toml").expect_err("missing file");
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read config"));
    }
}
