use super::{client_history_key, CLIENT_LIST_KEY};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use sinkhole_dns_application::ports::ClientActivityRepository;
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity, DomainError};
use tracing::warn;

pub struct RedisClientActivityRepository {
    conn: ConnectionManager,
}

impl RedisClientActivityRepository {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ClientActivityRepository for RedisClientActivityRepository {
    async fn add_client(&self, client: &ClientIdentity) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.sadd::<_, _, ()>(CLIENT_LIST_KEY, client.as_str())
            .await
            .map_err(|e| DomainError::StoreWrite(e.to_string()))
    }

    async fn append_history(
        &self,
        client: &ClientIdentity,
        entry: &ActivityEntry,
    ) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.rpush::<_, _, ()>(client_history_key(client.as_str()), entry.to_string())
            .await
            .map_err(|e| DomainError::StoreWrite(e.to_string()))
    }

    async fn list_clients(&self) -> Result<Vec<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.smembers::<_, Vec<String>>(CLIENT_LIST_KEY)
            .await
            .map_err(|e| DomainError::StoreRead(e.to_string()))
    }

    async fn history(&self, client: &ClientIdentity) -> Result<Vec<ActivityEntry>, DomainError> {
        let mut conn = self.conn.clone();
        let lines = conn
            .lrange::<_, Vec<String>>(client_history_key(client.as_str()), 0, -1)
            .await
            .map_err(|e| DomainError::StoreRead(e.to_string()))?;

        Ok(lines
            .iter()
            .filter_map(|line| {
                let entry = ActivityEntry::parse(line);
                if entry.is_none() {
                    warn!(client = %client, line = %line, "Skipping unparsable history entry");
                }
                entry
            })
            .collect())
    }
}
