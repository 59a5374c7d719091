//! Outbound HTTP adapters: the user directory, the mailer, and a typed client
//! for the order API itself.

use std::marker::PhantomData;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{RequestBuilder, Url};

pub mod directory;
pub mod mailer;
pub mod orders;

pub use directory::UserDirectoryClient;
pub use mailer::MailerClient;
pub use orders::OrdersClient;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared connection state for every client in this crate. Each request
/// carries the configured timeout, even when the `reqwest::Client` was
/// supplied by the caller.
#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url).timeout(self.timeout)
    }

    fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url).timeout(self.timeout)
    }
}

#[derive(Clone)]
pub struct ClientBuilder<C> {
    base: Url,
    headers: HeaderMap,
    timeout: Duration,
    client: Option<reqwest::Client>,
    _target: PhantomData<fn() -> C>,
}

impl<C: From<HttpClient>> ClientBuilder<C> {
    fn new(base_url: &str) -> anyhow::Result<Self> {
        // Without a trailing slash `Url::join` would replace the last path segment.
        let mut base = Url::parse(base_url).context("invalid base url")?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            headers: HeaderMap::new(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
            _target: PhantomData,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<C> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if !self.headers.is_empty() {
                    builder = builder.default_headers(self.headers);
                }
                builder.build()?
            }
        };
        Ok(C::from(HttpClient {
            base: self.base,
            client,
            timeout: self.timeout,
        }))
    }
}
