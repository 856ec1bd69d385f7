use crate::ports::ClientActivityRepository;
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity, DomainError};
use std::sync::Arc;

pub struct GetClientsUseCase {
    activity_repo: Arc<dyn ClientActivityRepository>,
}

impl GetClientsUseCase {
    pub fn new(activity_repo: Arc<dyn ClientActivityRepository>) -> Self {
        Self { activity_repo }
    }

    pub async fn list(&self) -> Result<Vec<String>, DomainError> {
        let mut clients = self.activity_repo.list_clients().await?;
        clients.sort();
        Ok(clients)
    }

    /// Oldest entry first.
    pub async fn history(&self, client: &ClientIdentity) -> Result<Vec<ActivityEntry>, DomainError> {
        self.activity_repo.history(client).await
    }
}
