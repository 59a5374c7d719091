use async_trait::async_trait;
use orderflow_types::domain::user::User;
use orderflow_types::ports::user_directory::{DirectoryError, UserDirectory};
use reqwest::StatusCode;

use crate::{ClientBuilder, HttpClient};

/// `GET <base>/user/{id}` against the external user service.
#[derive(Clone)]
pub struct UserDirectoryClient {
    http: HttpClient,
}

impl From<HttpClient> for UserDirectoryClient {
    fn from(http: HttpClient) -> Self {
        Self { http }
    }
}

impl UserDirectoryClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ClientBuilder<Self>> {
        ClientBuilder::new(base_url)
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryClient {
    async fn exists(&self, user_id: i64) -> Result<User, DirectoryError> {
        let url = self
            .http
            .url(&format!("user/{user_id}"))
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        tracing::debug!(%url, user_id, "looking up user");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        match res.status() {
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound(user_id)),
            status if status.is_success() => res
                .json::<User>()
                .await
                .map_err(|e| DirectoryError::Unavailable(format!("invalid user payload: {e}"))),
            status => {
                tracing::warn!(%status, user_id, "user service returned unexpected status");
                Err(DirectoryError::Unavailable(format!(
                    "unexpected status {status}"
                )))
            }
        }
    }
}
