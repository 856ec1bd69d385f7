use sinkhole_dns_domain::DomainError;
use std::net::IpAddr;

pub trait OutboundIpProvider: Send + Sync {
    /// Address this host uses for outbound traffic.
    fn outbound_ip(&self) -> Result<IpAddr, DomainError>;
}
