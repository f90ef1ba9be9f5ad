use crate::config::settings::GithubSettings;
use crate::domain::ports::JsonFetcher;
use crate::utils::error::{OrgError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;

/// GETs `url` and decodes the body as JSON. Non-2xx responses are errors.
pub async fn get_json(client: &Client, url: &str) -> Result<Value> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);
    if !status.is_success() {
        return Err(OrgError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// [`JsonFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &GithubSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = &settings.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                OrgError::InvalidConfigValueError {
                    field: "github.token".to_string(),
                    value: "<redacted>".to_string(),
                    reason: "Token contains characters not allowed in a header".to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        get_json(&self.client, url).await
    }
}
