//! # Storage
//!
//! Where registrations live between requests.
//!
//! ## Memory
//! - Plain list behind a lock, ids assigned from its length
//! - Default when no `REDIS_URL` is configured, lost on restart
//!
//! ## Redis
//! - Counter key: `INCR` hands out the next id, starting at 1
//! - Hash key: one field per id, value is the stored record as JSON
//! - Listing reads the whole hash and orders by id
//! - `INCR` and `HSET` are separate round trips: the record JSON embeds the id,
//!   so it can only be built once the counter answers. A failed `HSET` leaves
//!   that id unused and the listing skips it. Ids stay unique and ordered but
//!   may have gaps.
use std::collections::HashMap;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use registry::{Registration, StoredRegistration};
use tokio::sync::RwLock;

use crate::error::AppError;

pub const NEXT_ID_KEY: &str = "registration:next_id";
pub const REGISTRATIONS_KEY: &str = "registrations";

pub enum Store {
    Memory(MemoryStore),
    Redis(RedisStore),
}

impl Store {
    pub async fn save(&self, registration: Registration) -> Result<StoredRegistration, AppError> {
        match self {
            Store::Memory(store) => Ok(store.save(registration).await),
            Store::Redis(store) => store.save(registration).await,
        }
    }

    /// Every stored registration in id order.
    pub async fn all(&self) -> Result<Vec<StoredRegistration>, AppError> {
        match self {
            Store::Memory(store) => Ok(store.all().await),
            Store::Redis(store) => store.all().await,
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    registrations: RwLock<Vec<StoredRegistration>>,
}

impl MemoryStore {
    async fn save(&self, registration: Registration) -> StoredRegistration {
        let mut registrations = self.registrations.write().await;

        let stored = StoredRegistration::new(registrations.len() as u64 + 1, registration);
        registrations.push(stored.clone());

        stored
    }

    async fn all(&self) -> Vec<StoredRegistration> {
        self.registrations.read().await.clone()
    }
}

pub struct RedisStore {
    connection: ConnectionManager,
}

pub async fn init_redis(redis_url: &str) -> Result<RedisStore, AppError> {
    let config = ConnectionManagerConfig::new().set_number_of_retries(1);

    let client = Client::open(redis_url)?;
    let connection = client.get_connection_manager_with_config(config).await?;

    Ok(RedisStore { connection })
}

impl RedisStore {
    async fn save(&self, registration: Registration) -> Result<StoredRegistration, AppError> {
        let mut connection = self.connection.clone();

        // id is spent even if the write below fails
        let id: u64 = connection.incr(NEXT_ID_KEY, 1).await?;
        let stored = StoredRegistration::new(id, registration);

        let _: () = connection
            .hset(REGISTRATIONS_KEY, id, serde_json::to_string(&stored)?)
            .await?;

        Ok(stored)
    }

    async fn all(&self) -> Result<Vec<StoredRegistration>, AppError> {
        let mut connection = self.connection.clone();

        let entries: HashMap<u64, String> = connection.hgetall(REGISTRATIONS_KEY).await?;

        let mut registrations = entries
            .values()
            .map(|json| serde_json::from_str(json))
            .collect::<Result<Vec<StoredRegistration>, _>>()?;
        registrations.sort_by_key(|stored| stored.id);

        Ok(registrations)
    }
}
