use crate::ports::OutboundIpProvider;
use sinkhole_dns_domain::RedirectTarget;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::warn;

/// Resolves the sinkhole address for a blocked A query.
pub struct RedirectResolver {
    target: RedirectTarget,
    outbound: Arc<dyn OutboundIpProvider>,
}

impl RedirectResolver {
    pub fn new(target: RedirectTarget, outbound: Arc<dyn OutboundIpProvider>) -> Self {
        Self { target, outbound }
    }

    pub fn target(&self) -> RedirectTarget {
        self.target
    }

    pub fn resolve(&self) -> Ipv4Addr {
        match self.target {
            RedirectTarget::Explicit(ip) => ip,
            RedirectTarget::Loopback => Ipv4Addr::LOCALHOST,
            RedirectTarget::OutboundIp => match self.outbound.outbound_ip() {
                Ok(IpAddr::V4(ip)) => ip,
                Ok(IpAddr::V6(ip)) => {
                    warn!(outbound_ip = %ip, "Outbound address is IPv6, redirecting to loopback");
                    Ipv4Addr::LOCALHOST
                }
                Err(e) => {
                    warn!(error = %e, "Outbound address lookup failed, redirecting to loopback");
                    Ipv4Addr::LOCALHOST
                }
            },
        }
    }
}
