use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use sinkhole_dns_application::ports::{BlacklistRepository, ClientActivityRepository};
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity, DomainError};

/// Process-local stand-in for the external store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    blacklist: DashSet<String>,
    clients: DashSet<String>,
    history: DashMap<String, Vec<ActivityEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blacklist<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for domain in domains {
            store.blacklist.insert(domain.into());
        }
        store
    }
}

#[async_trait]
impl BlacklistRepository for MemoryStore {
    async fn is_listed(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.blacklist.contains(domain))
    }

    async fn add_domain(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.blacklist.insert(domain.to_string()))
    }

    async fn remove_domain(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.blacklist.remove(domain).is_some())
    }

    async fn list_domains(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.blacklist.iter().map(|d| d.key().clone()).collect())
    }
}

#[async_trait]
impl ClientActivityRepository for MemoryStore {
    async fn add_client(&self, client: &ClientIdentity) -> Result<(), DomainError> {
        self.clients.insert(client.to_string());
        Ok(())
    }

    async fn append_history(
        &self,
        client: &ClientIdentity,
        entry: &ActivityEntry,
    ) -> Result<(), DomainError> {
        self.history
            .entry(client.to_string())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.clients.iter().map(|c| c.key().clone()).collect())
    }

    async fn history(&self, client: &ClientIdentity) -> Result<Vec<ActivityEntry>, DomainError> {
        Ok(self
            .history
            .get(client.as_str())
            .map(|entries| entries.clone())
            .unwrap_or_default())
    }
}
