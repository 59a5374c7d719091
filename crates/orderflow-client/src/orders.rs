use orderflow_types::domain::order::{Order, OrderId, OrderInput};

use crate::{ClientBuilder, HttpClient};

/// Typed client for the order API served by `orderflow-hex`.
#[derive(Clone)]
pub struct OrdersClient {
    http: HttpClient,
}

impl From<HttpClient> for OrdersClient {
    fn from(http: HttpClient) -> Self {
        Self { http }
    }
}

impl OrdersClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ClientBuilder<Self>> {
        ClientBuilder::new(base_url)
    }

    pub async fn create_order(&self, input: &OrderInput) -> anyhow::Result<Order> {
        let res = self
            .http
            .post(self.http.url("order")?)
            .json(input)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_order(&self, id: OrderId) -> anyhow::Result<Order> {
        let res = self
            .http
            .get(self.http.url(&format!("order/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}
