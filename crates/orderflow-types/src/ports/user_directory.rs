use async_trait::async_trait;

use crate::domain::user::User;

#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    #[error("user {0} does not exist")]
    NotFound(i64),

    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Resolves `user_id` with a single lookup. No caching, no retries.
    async fn exists(&self, user_id: i64) -> Result<User, DirectoryError>;
}

#[async_trait]
impl<T: UserDirectory + ?Sized> UserDirectory for std::sync::Arc<T> {
    async fn exists(&self, user_id: i64) -> Result<User, DirectoryError> {
        (**self).exists(user_id).await
    }
}
