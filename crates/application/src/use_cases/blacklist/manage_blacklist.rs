use crate::ports::BlacklistRepository;
use sinkhole_dns_domain::{normalize_hostname, DomainError};
use std::sync::Arc;
use tracing::info;

pub struct ManageBlacklistUseCase {
    blacklist: Arc<dyn BlacklistRepository>,
}

impl ManageBlacklistUseCase {
    pub fn new(blacklist: Arc<dyn BlacklistRepository>) -> Self {
        Self { blacklist }
    }

    /// Returns false when the domain was already listed.
    pub async fn add(&self, domain: &str) -> Result<bool, DomainError> {
        let domain = Self::validate(domain)?;
        let added = self.blacklist.add_domain(domain).await?;
        info!(domain = %domain, added, "Blacklist add");
        Ok(added)
    }

    pub async fn remove(&self, domain: &str) -> Result<bool, DomainError> {
        let domain = Self::validate(domain)?;
        let removed = self.blacklist.remove_domain(domain).await?;
        info!(domain = %domain, removed, "Blacklist remove");
        Ok(removed)
    }

    pub async fn list(&self) -> Result<Vec<String>, DomainError> {
        let mut domains = self.blacklist.list_domains().await?;
        domains.sort();
        Ok(domains)
    }

    fn validate(domain: &str) -> Result<&str, DomainError> {
        let domain = normalize_hostname(domain.trim());
        if domain.is_empty() || domain.contains(char::is_whitespace) {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }
        Ok(domain)
    }
}
