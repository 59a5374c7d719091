use orderflow_types::domain::notification::{NotificationError, NotificationEvent};
use orderflow_types::domain::order::{NewOrder, Order, OrderId, OrderInput};
use orderflow_types::ports::notifier::Notifier;
use orderflow_types::ports::order_store::OrderStore;
use orderflow_types::ports::user_directory::{DirectoryError, UserDirectory};

use crate::application::notifications;
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub admin_email: String,
    pub send_success_mail: bool,
}

/// Validates, resolves the user, persists, then notifies the administrator.
///
/// Holds no per-request state; the store is the only shared mutable state.
pub struct OrderWorkflow<S, D, N> {
    store: S,
    directory: D,
    notifier: N,
    config: WorkflowConfig,
}

impl<S, D, N> OrderWorkflow<S, D, N>
where
    S: OrderStore,
    D: UserDirectory,
    N: Notifier,
{
    pub fn new(store: S, directory: D, notifier: N, config: WorkflowConfig) -> Self {
        Self {
            store,
            directory,
            notifier,
            config,
        }
    }

    pub async fn create_order(&self, input: OrderInput) -> Result<Order, AppError> {
        // Validation failures never reach the directory, the store or the mailer.
        let new_order = input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        tracing::debug!(
            user_id = new_order.user_id,
            product_id = new_order.product_id,
            "order validated"
        );

        match self.place(new_order).await {
            Ok(order) => {
                tracing::info!(order_id = %order.id, user_id = order.user_id, "order created");
                if self.config.send_success_mail {
                    self.emit(notifications::order_created(&order, &self.config.admin_email))
                        .await;
                } else {
                    tracing::debug!(order_id = %order.id, "success notification skipped");
                }
                Ok(order)
            }
            Err(err) => {
                tracing::warn!(
                    user_id = new_order.user_id,
                    class = err.class(),
                    error = %err,
                    "order rejected"
                );
                self.emit(notifications::order_failed(
                    &new_order,
                    &err,
                    &self.config.admin_email,
                ))
                .await;
                Err(err)
            }
        }
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, AppError> {
        match self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::Internal(e.into()))?
        {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound(format!("order {}", id))),
        }
    }

    async fn place(&self, order: NewOrder) -> Result<Order, AppError> {
        let user = self
            .directory
            .exists(order.user_id)
            .await
            .map_err(|e| match e {
                DirectoryError::NotFound(id) => AppError::ReferenceNotFound(format!("user {id}")),
                DirectoryError::Unavailable(msg) => AppError::Dependency(msg),
            })?;
        tracing::debug!(user_id = user.id, user_name = %user.name, "user resolved");

        let stored = self
            .store
            .insert(order)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
        tracing::debug!(order_id = %stored.id, "order persisted");
        Ok(stored)
    }

    /// Side-channel effect: one delivery attempt, outcome logged and dropped.
    async fn emit(&self, event: Result<NotificationEvent, NotificationError>) {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "notification not sent");
                return;
            }
        };
        match self.notifier.notify(&event).await {
            Ok(()) => tracing::debug!(subject = event.subject(), "notification sent"),
            Err(err) => {
                tracing::warn!(subject = event.subject(), error = %err, "notification failed")
            }
        }
    }
}
