use async_trait::async_trait;
use orderflow_types::domain::order::{Mode, NewOrder, Order, OrderId};
use orderflow_types::ports::order_store::{OrderStore, StoreError};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbOrder {
    id: i64,
    user_id: i64,
    product_id: i64,
    mode: String,
}

impl DbOrder {
    fn into_order(self) -> Result<Order, StoreError> {
        let mode = self
            .mode
            .parse::<Mode>()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Order {
            id: OrderId(self.id),
            user_id: self.user_id,
            product_id: self.product_id,
            mode,
        })
    }
}

impl SqliteStore {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_orders.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl OrderStore for SqliteStore {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        let res = sqlx::query("INSERT INTO orders (user_id, product_id, mode) VALUES (?, ?, ?)")
            .bind(order.user_id)
            .bind(order.product_id)
            .bind(order.mode.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(order.with_id(OrderId(res.last_insert_rowid())))
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row: Option<DbOrder> =
            sqlx::query_as("SELECT id, user_id, product_id, mode FROM orders WHERE id = ?")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        row.map(DbOrder::into_order).transpose()
    }
}
