use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Single upstream resolver, `host:port`.
    #[serde(default = "default_upstream_dns")]
    pub upstream_dns: String,

    /// Per-exchange I/O timeout of the upstream transports, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl DnsConfig {
    /// Splits `upstream_dns` into host and port. IPv6 literals must be bracketed.
    ///
    /// The host may be a name; it is resolved once at startup.
    pub fn upstream_host_port(&self) -> Option<(&str, u16)> {
        let (host, port) = self.upstream_dns.trim().rsplit_once(':')?;
        let port: u16 = port.parse().ok().filter(|p| *p != 0)?;

        let host = match host.strip_prefix('[') {
            Some(bracketed) => bracketed.strip_suffix(']')?,
            None if host.contains(':') => return None,
            None => host,
        };

        if host.is_empty() || host.contains(char::is_whitespace) {
            return None;
        }
        Some((host, port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_dns: default_upstream_dns(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_upstream_dns() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout() -> u64 {
    2
}
