use chrono::Utc;
use orderflow_types::domain::notification::{NotificationError, NotificationEvent};
use orderflow_types::domain::order::{NewOrder, Order};

use crate::errors::AppError;

pub fn order_created(order: &Order, recipient: &str) -> Result<NotificationEvent, NotificationError> {
    NotificationEvent::new(
        format!("Order {} created", order.id),
        format!(
            "Order {} for user {} (product {}, mode {}) was created at {}.",
            order.id,
            order.user_id,
            order.product_id,
            order.mode,
            Utc::now().to_rfc3339()
        ),
        recipient,
    )
}

pub fn order_failed(
    order: &NewOrder,
    error: &AppError,
    recipient: &str,
) -> Result<NotificationEvent, NotificationError> {
    NotificationEvent::new(
        format!("Order for user {} failed", order.user_id),
        format!(
            "Order for user {} (product {}, mode {}) failed at {} with {}: {}",
            order.user_id,
            order.product_id,
            order.mode,
            Utc::now().to_rfc3339(),
            error.class(),
            error
        ),
        recipient,
    )
}
