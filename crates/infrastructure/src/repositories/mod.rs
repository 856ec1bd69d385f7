mod memory_store;
mod redis_blacklist_repository;
mod redis_client_activity_repository;

pub use memory_store::MemoryStore;
pub use redis_blacklist_repository::RedisBlacklistRepository;
pub use redis_client_activity_repository::RedisClientActivityRepository;

use redis::aio::ConnectionManager;
use sinkhole_dns_domain::DomainError;

/// Set holding blacklisted domains.
pub const BLACKLIST_KEY: &str = "blacklist:domain";
/// Set holding every client identity ever seen.
pub const CLIENT_LIST_KEY: &str = "client:list";

/// List holding one client's lookup history.
pub fn client_history_key(client: &str) -> String {
    format!("client:{}", client)
}

/// Opens a multiplexed, auto-reconnecting connection shared by all repositories.
pub async fn connect_redis(url: &str) -> Result<ConnectionManager, DomainError> {
    let client = redis::Client::open(url)
        .map_err(|e| DomainError::ConfigError(format!("Invalid store url '{}': {}", url, e)))?;
    ConnectionManager::new(client)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to connect to store {}: {}", url, e)))
}
