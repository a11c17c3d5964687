//! Host configuration
//!
//! Read from an optional YAML file named by `TRUST_REGISTRY_CONFIG`; the
//! listen address can be overridden with `TRUST_REGISTRY_ADDR`.
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "TRUST_REGISTRY_CONFIG";
pub const ADDR_ENV: &str = "TRUST_REGISTRY_ADDR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Socket address the API binds to
    pub listen_addr: String,
    /// Records created at startup, see `trust_registry::seed`
    pub seed_file: Option<PathBuf>,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8787".to_string(),
            seed_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl HostConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// File named by the environment (if any), then environment overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Ok(addr) = std::env::var(ADDR_ENV) {
            config.listen_addr = addr;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = HostConfig::from_yaml("seed_file: seeds/root.yaml\n").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8787");
        assert_eq!(config.seed_file, Some(PathBuf::from("seeds/root.yaml")));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(HostConfig::from_yaml("").unwrap(), HostConfig::default());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(HostConfig::from_yaml("listen_addr: [1, 2]").is_err());
    }
}
