use async_trait::async_trait;
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity, DomainError};

#[async_trait]
pub trait ClientActivityRepository: Send + Sync {
    /// Add the client to the roster. Inserting a known client is a no-op.
    async fn add_client(&self, client: &ClientIdentity) -> Result<(), DomainError>;

    /// Append to the client's history, preserving arrival order.
    async fn append_history(
        &self,
        client: &ClientIdentity,
        entry: &ActivityEntry,
    ) -> Result<(), DomainError>;

    async fn list_clients(&self) -> Result<Vec<String>, DomainError>;

    async fn history(&self, client: &ClientIdentity) -> Result<Vec<ActivityEntry>, DomainError>;
}
