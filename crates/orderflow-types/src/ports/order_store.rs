use async_trait::async_trait;

use crate::domain::order::{NewOrder, Order, OrderId};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Persistence for orders. Implementations assign ids; callers never choose them.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError>;
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}

#[async_trait]
impl<T: OrderStore + ?Sized> OrderStore for std::sync::Arc<T> {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        (**self).insert(order).await
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        (**self).find_by_id(id).await
    }
}
