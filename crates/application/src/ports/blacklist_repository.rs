use async_trait::async_trait;
use sinkhole_dns_domain::DomainError;

/// Set of blacklisted domains (no trailing dot), maintained outside the resolution path.
#[async_trait]
pub trait BlacklistRepository: Send + Sync {
    /// Exact, case-sensitive membership test.
    async fn is_listed(&self, domain: &str) -> Result<bool, DomainError>;

    async fn add_domain(&self, domain: &str) -> Result<bool, DomainError>;

    async fn remove_domain(&self, domain: &str) -> Result<bool, DomainError>;

    async fn list_domains(&self) -> Result<Vec<String>, DomainError>;
}
