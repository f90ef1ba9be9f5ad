use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Fetches a URL and decodes the body as JSON.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

