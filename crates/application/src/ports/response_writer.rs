use async_trait::async_trait;
use hickory_proto::op::Message;
use sinkhole_dns_domain::{DomainError, TransportKind};
use std::net::SocketAddr;

/// The requesting client's side of a connection.
///
/// `send` consumes the writer, so a reply can be written at most once.
#[async_trait]
pub trait ResponseWriter: Send {
    fn transport(&self) -> TransportKind;

    fn remote_addr(&self) -> SocketAddr;

    async fn send(self, message: Message) -> Result<(), DomainError>
    where
        Self: Sized;
}
