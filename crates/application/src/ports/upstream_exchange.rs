use async_trait::async_trait;
use hickory_proto::op::Message;
use sinkhole_dns_domain::{DomainError, TransportKind};

#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Relay `request` to the configured resolver over `transport`. Single attempt.
    async fn exchange(
        &self,
        request: &Message,
        transport: TransportKind,
    ) -> Result<Message, DomainError>;

    fn upstream_name(&self) -> String;
}
