use crate::dns::transport::{create_transport, Transport};
use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use sinkhole_dns_application::ports::UpstreamExchange;
use sinkhole_dns_domain::{DomainError, TransportKind};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Relays queries to the single configured upstream resolver, reusing the
/// transport class of the inbound connection.
pub struct UpstreamForwarder {
    upstream: SocketAddr,
    udp: Transport,
    tcp: Transport,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self {
            upstream,
            udp: create_transport(TransportKind::Datagram, upstream),
            tcp: create_transport(TransportKind::Stream, upstream),
            timeout,
        }
    }

    fn transport_for(&self, kind: TransportKind) -> &Transport {
        match kind {
            TransportKind::Datagram => &self.udp,
            TransportKind::Stream => &self.tcp,
        }
    }
}

#[async_trait]
impl UpstreamExchange for UpstreamForwarder {
    async fn exchange(
        &self,
        request: &Message,
        transport: TransportKind,
    ) -> Result<Message, DomainError> {
        let query_bytes = request.to_bytes().map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to serialize query: {}", e))
        })?;

        let transport = self.transport_for(transport);
        let response = transport.send(&query_bytes, self.timeout).await?;

        let message = Message::from_vec(&response.bytes).map_err(|e| {
            DomainError::UpstreamExchange(format!(
                "Failed to parse response from {}: {}",
                self.upstream, e
            ))
        })?;

        if message.id() != request.id() {
            return Err(DomainError::UpstreamExchange(format!(
                "Response id {} from {} does not match query id {}",
                message.id(),
                self.upstream,
                request.id()
            )));
        }

        debug!(
            upstream = %self.upstream,
            protocol = response.protocol_used,
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            "Upstream exchange complete"
        );

        Ok(message)
    }

    fn upstream_name(&self) -> String {
        self.upstream.to_string()
    }
}
