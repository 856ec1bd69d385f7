pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use sinkhole_dns_domain::{DomainError, TransportKind};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Self::Udp(_) => TransportKind::Datagram,
            Self::Tcp(_) => TransportKind::Stream,
        }
    }
}

pub fn create_transport(kind: TransportKind, addr: SocketAddr) -> Transport {
    match kind {
        TransportKind::Datagram => Transport::Udp(udp::UdpTransport::new(addr)),
        TransportKind::Stream => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}
