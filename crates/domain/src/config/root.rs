use serde::{Deserialize, Serialize};

use super::blocking::BlockingConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::redirect::RedirectConfig;
use super::server::{ResolutionMode, ServerConfig};
use super::store::{StoreBackend, StoreConfig};
use crate::redirect::RedirectTarget;

const LOCAL_CONFIG_PATH: &str = "sinkhole-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sinkhole-dns/config.toml";

/// Main configuration structure for Sinkhole DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, variant)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolver
    #[serde(default)]
    pub dns: DnsConfig,

    /// Blacklist matching
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Sinkhole answer address
    #[serde(default)]
    pub redirect: RedirectConfig,

    /// Blacklist and client activity store
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sinkhole-dns.toml in current directory
    /// 3. /etc/sinkhole-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream_dns {
            self.dns.upstream_dns = upstream;
        }
        if let Some(url) = overrides.store_url {
            self.store.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.dns.upstream_host_port().is_none() {
            return Err(ConfigError::Validation(format!(
                "upstream_dns must be host:port, got '{}'",
                self.dns.upstream_dns
            )));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout cannot be 0".to_string(),
            ));
        }

        if self.server.mode == ResolutionMode::Filter && self.store.backend == StoreBackend::Memory
        {
            return Err(ConfigError::Validation(
                "store.backend = \"memory\" cannot be used with mode = \"filter\"".to_string(),
            ));
        }

        self.redirect_target()?;
        Ok(())
    }

    pub fn redirect_target(&self) -> Result<RedirectTarget, ConfigError> {
        RedirectTarget::from_config(&self.redirect)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_dns: Option<String>,
    pub store_url: Option<String>,
    pub log_level: Option<String>,
}
