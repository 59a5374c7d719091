use async_trait::async_trait;
use dashmap::DashMap;
use orderflow_types::domain::order::{NewOrder, Order, OrderId};
use orderflow_types::ports::order_store::{OrderStore, StoreError};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Process-local order table. Clones share the same table and id sequence.
#[derive(Clone)]
pub struct InMemoryStore {
    map: Arc<DashMap<OrderId, Order>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drops every stored order. Issued ids are not reused afterwards.
    pub fn clear(&self) {
        self.map.clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        let id = OrderId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let order = order.with_id(id);
        self.map.insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self.map.get(&id).map(|r| r.clone()))
    }
}
