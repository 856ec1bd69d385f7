use super::BLACKLIST_KEY;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use sinkhole_dns_application::ports::BlacklistRepository;
use sinkhole_dns_domain::DomainError;

pub struct RedisBlacklistRepository {
    conn: ConnectionManager,
}

impl RedisBlacklistRepository {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl BlacklistRepository for RedisBlacklistRepository {
    async fn is_listed(&self, domain: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        conn.sismember::<_, _, bool>(BLACKLIST_KEY, domain)
            .await
            .map_err(|e| DomainError::StoreRead(e.to_string()))
    }

    async fn add_domain(&self, domain: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let added = conn
            .sadd::<_, _, i64>(BLACKLIST_KEY, domain)
            .await
            .map_err(|e| DomainError::StoreWrite(e.to_string()))?;
        Ok(added > 0)
    }

    async fn remove_domain(&self, domain: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let removed = conn
            .srem::<_, _, i64>(BLACKLIST_KEY, domain)
            .await
            .map_err(|e| DomainError::StoreWrite(e.to_string()))?;
        Ok(removed > 0)
    }

    async fn list_domains(&self) -> Result<Vec<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.smembers::<_, Vec<String>>(BLACKLIST_KEY)
            .await
            .map_err(|e| DomainError::StoreRead(e.to_string()))
    }
}
