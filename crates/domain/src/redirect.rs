use crate::config::RedirectConfig;
use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr};

/// Where blocked A queries are pointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Explicitly configured `redirect_site`.
    Explicit(Ipv4Addr),
    /// This host's outbound address, discovered per request.
    OutboundIp,
    Loopback,
}

impl RedirectTarget {
    pub fn from_config(config: &RedirectConfig) -> Result<Self, DomainError> {
        if !config.use_redirect {
            return Ok(Self::Loopback);
        }

        let site = config.redirect_site.trim();
        if site.is_empty() {
            return Ok(Self::OutboundIp);
        }

        match site.parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) => Ok(Self::Explicit(ip)),
            Ok(IpAddr::V6(_)) => Err(DomainError::InvalidIpAddress(format!(
                "redirect_site must be an IPv4 address, got '{}'",
                site
            ))),
            Err(_) => Err(DomainError::InvalidIpAddress(site.to_string())),
        }
    }
}
