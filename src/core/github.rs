//! Thin client for the public repositories of a GitHub organisation.
//!
//! Only two endpoints are touched: `GET /orgs/{org}` and the `repos_url` it
//! advertises. Both payloads are fetched at most once per client.

use crate::config::settings::DEFAULT_API_BASE;
use crate::domain::ports::JsonFetcher;
use crate::utils::error::{OrgError, Result};
use crate::utils::memoize::Memoized;
use crate::utils::nested::access_nested_map;
use crate::utils::validation::{validate_non_empty_string, validate_url};
use serde_json::Value;
use url::Url;

pub struct GithubOrgClient<F: JsonFetcher> {
    org_name: String,
    api_base: Url,
    fetcher: F,
    org: Memoized<Value>,
    repos_payload: Memoized<Value>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Result<Self> {
        Self::with_api_base(org_name, DEFAULT_API_BASE, fetcher)
    }

    pub fn with_api_base(
        org_name: impl Into<String>,
        api_base: impl Into<String>,
        fetcher: F,
    ) -> Result<Self> {
        let org_name = org_name.into();
        validate_non_empty_string("org", &org_name)?;

        let api_base = api_base.into();
        validate_url("api_base", &api_base)?;
        let api_base = Url::parse(&api_base).map_err(|e| OrgError::InvalidConfigValueError {
            field: "api_base".to_string(),
            value: api_base.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            org_name,
            api_base,
            fetcher,
            org: Memoized::new(),
            repos_payload: Memoized::new(),
        })
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// `{api_base}/orgs/{org}`, with the org name escaped as one path segment.
    pub fn org_url(&self) -> String {
        let mut url = self.api_base.clone();
        // http(s) bases always accept path segments; validated in the constructor
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("orgs").push(&self.org_name);
        }
        url.into()
    }

    /// The organisation payload.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                tracing::info!("Fetching organisation {}", self.org_name);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    pub async fn public_repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        access_nested_map(org, &["repos_url"])?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OrgError::UnexpectedShape {
                field: "repos_url".to_string(),
                expected: "a string".to_string(),
            })
    }

    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                tracing::info!("Fetching repositories of {}", self.org_name);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// Repository names in payload order, optionally limited to one license key.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self
            .repos_payload()
            .await?
            .as_array()
            .ok_or_else(|| OrgError::UnexpectedShape {
                field: "repos".to_string(),
                expected: "an array".to_string(),
            })?;

        let names = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .filter_map(|repo| match repo.get("name").and_then(Value::as_str) {
                Some(name) => Some(name.to_string()),
                None => {
                    tracing::debug!("Skipping repository entry without a name");
                    None
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "{} of {} repositories selected (license filter: {:?})",
            names.len(),
            repos.len(),
            license
        );
        Ok(names)
    }

    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        match access_nested_map(repo, &["license", "key"]) {
            Ok(key) => key.as_str() == Some(license_key),
            Err(_) => false,
        }
    }
}
