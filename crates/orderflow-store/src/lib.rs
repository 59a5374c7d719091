#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a store feature: `memory` or `sqlite`.");

use async_trait::async_trait;
use orderflow_types::domain::order::{NewOrder, Order, OrderId};
use orderflow_types::ports::order_store::{OrderStore, StoreError};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(all(feature = "sqlite", not(feature = "memory")))]
const DEFAULT_SQLITE_URL: &str = "sqlite://orders.db";

/// The store selected at startup from the enabled features.
pub enum Store {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteStore),
}

pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Store> {
    Store::build(database_url).await
}

impl Store {
    /// SQLite when a url is given and the `sqlite` feature is on, otherwise the
    /// in-memory table.
    pub async fn build(database_url: Option<&str>) -> anyhow::Result<Self> {
        let store = match database_url {
            #[cfg(feature = "sqlite")]
            Some(url) => Self::Sqlite(sqlite::SqliteStore::new(url).await?),
            #[cfg(feature = "memory")]
            _ => Self::Memory(memory::InMemoryStore::new()),
            #[cfg(not(feature = "memory"))]
            None => Self::Sqlite(sqlite::SqliteStore::new(DEFAULT_SQLITE_URL).await?),
        };
        tracing::info!(backend = store.backend(), "order store ready");
        Ok(store)
    }

    pub fn backend(&self) -> &'static str {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(_) => "memory",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait]
impl OrderStore for Store {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(store) => store.insert(order).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.insert(order).await,
        }
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        match self {
            #[cfg(feature = "memory")]
            Self::Memory(store) => store.find_by_id(id).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.find_by_id(id).await,
        }
    }
}
