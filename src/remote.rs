//! Remote bootstrap source.
//!
//! A single GET against a fixed endpoint returning a JSON array of
//! task-like objects. A non-2xx response or transport/body failure is a
//! fetch failure carrying the cause; no partial data is ever returned.
//! Normalization of missing fields happens in the `Task` decode, not here.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::task::Task;

/// Default endpoint supplying the initial task set
pub const DEFAULT_API_URL: &str = "https://jsl-kanban-api.vercel.app/";

/// Source of the initial task collection
#[async_trait]
pub trait RemoteSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>>;
}

/// Production source: HTTP GET against the configured endpoint
#[derive(Debug, Clone)]
pub struct HttpRemoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpRemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        tracing::debug!(url = %self.url, "fetching remote tasks");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus(status.as_u16()));
        }

        let tasks = response.json::<Vec<Task>>().await?;
        tracing::debug!(count = tasks.len(), "remote fetch succeeded");
        Ok(tasks)
    }
}
