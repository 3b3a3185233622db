use std::sync::Arc;

use super::{
    config::Config,
    database::{MemoryStore, Store, init_redis},
    error::AppError,
};

pub struct AppState {
    pub config: Config,
    pub store: Store,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        let store = match &config.redis_url {
            Some(redis_url) => Store::Redis(init_redis(redis_url).await?),
            None => Store::Memory(MemoryStore::default()),
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Store) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
