use sinkhole_dns_application::ports::{BlacklistRepository, ClientActivityRepository};
use sinkhole_dns_domain::{Config, StoreBackend};
use sinkhole_dns_infrastructure::repositories::{
    connect_redis, MemoryStore, RedisBlacklistRepository, RedisClientActivityRepository,
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct Stores {
    pub blacklist: Arc<dyn BlacklistRepository>,
    pub activity: Arc<dyn ClientActivityRepository>,
}

pub async fn open_stores(config: &Config) -> anyhow::Result<Stores> {
    match config.store.backend {
        StoreBackend::Redis => {
            info!("Connecting to store: {}", config.store.url);

            let conn = connect_redis(&config.store.url).await.map_err(|e| {
                error!("Failed to connect to store: {}", e);
                anyhow::anyhow!(e)
            })?;

            Ok(Stores {
                blacklist: Arc::new(RedisBlacklistRepository::new(conn.clone())),
                activity: Arc::new(RedisClientActivityRepository::new(conn)),
            })
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; blacklist and client history are lost on exit");
            let store = Arc::new(MemoryStore::new());
            Ok(Stores {
                blacklist: store.clone(),
                activity: store,
            })
        }
    }
}
