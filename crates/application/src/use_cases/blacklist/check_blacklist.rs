use crate::ports::BlacklistRepository;
use sinkhole_dns_domain::{blacklist_candidates, DomainError};
use std::sync::Arc;
use tracing::debug;

/// Blacklist membership with optional two-label parent fallback.
pub struct CheckBlacklistUseCase {
    blacklist: Arc<dyn BlacklistRepository>,
}

impl CheckBlacklistUseCase {
    pub fn new(blacklist: Arc<dyn BlacklistRepository>) -> Self {
        Self { blacklist }
    }

    /// The first store error aborts the check; the caller decides the fail policy.
    pub async fn execute(&self, hostname: &str, wildcard: bool) -> Result<bool, DomainError> {
        let candidates = blacklist_candidates(hostname, wildcard);

        for (i, candidate) in candidates.iter().enumerate() {
            if i > 0 {
                debug!(parent = %candidate, hostname = %hostname, "Testing parent domain");
            }
            if self.blacklist.is_listed(candidate).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
