use super::errors::ConfigError;
use crate::root_hints::ROOT_SERVERS;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Starting server set for every lookup and every alias restart
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Destination port for every nameserver query
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-server deadline, in seconds
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Referral and alias steps allowed for a single lookup
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl ResolverConfig {
    pub fn root_server_addrs(&self) -> Result<Vec<Ipv4Addr>, ConfigError> {
        self.root_servers
            .iter()
            .map(|s| {
                s.trim().parse::<Ipv4Addr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid root server '{}': {}", s, e))
                })
            })
            .collect()
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }
        self.root_server_addrs()?;

        if self.port == 0 {
            return Err(ConfigError::Validation(
                "Nameserver port cannot be 0".to_string(),
            ));
        }
        if self.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }
        if self.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout_secs: default_query_timeout_secs(),
            max_hops: default_max_hops(),
            cache_enabled: true,
        }
    }
}

fn default_root_servers() -> Vec<String> {
    ROOT_SERVERS.iter().map(|ip| ip.to_string()).collect()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_secs() -> u64 {
    3
}

fn default_max_hops() -> usize {
    30
}

fn default_true() -> bool {
    true
}
