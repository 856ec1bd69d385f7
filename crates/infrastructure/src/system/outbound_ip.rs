use sinkhole_dns_application::ports::OutboundIpProvider;
use sinkhole_dns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

const DEFAULT_PROBE: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Discovers the outbound address by connecting an unbound UDP socket.
///
/// `connect` on a UDP socket only selects a route; no packet is sent.
pub struct UdpProbeOutboundIp {
    probe: SocketAddr,
}

impl UdpProbeOutboundIp {
    pub fn new() -> Self {
        Self::with_probe(DEFAULT_PROBE)
    }

    pub fn with_probe(probe: SocketAddr) -> Self {
        Self { probe }
    }
}

impl Default for UdpProbeOutboundIp {
    fn default() -> Self {
        Self::new()
    }
}

impl OutboundIpProvider for UdpProbeOutboundIp {
    fn outbound_ip(&self) -> Result<IpAddr, DomainError> {
        let bind: SocketAddr = if self.probe.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind).map_err(|e| DomainError::IoError(e.to_string()))?;
        socket
            .connect(self.probe)
            .map_err(|e| DomainError::IoError(format!("No route to {}: {}", self.probe, e)))?;
        socket
            .local_addr()
            .map(|addr| addr.ip())
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}
