use anyhow::Result;
use httpmock::prelude::*;
use orgkit::{GithubOrgClient, GithubSettings, HttpFetcher, OrgError, Settings};
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const ORG_PAYLOAD: &str = include_str!("fixtures/org_payload.json");
const REPOS_PAYLOAD: &str = include_str!("fixtures/repos_payload.json");

const EXPECTED_REPOS: [&str; 9] = [
    "episodes.dart",
    "cpp-netlib",
    "dagger",
    "ios-webkit-debug-proxy",
    "google.github.io",
    "kratu",
    "build-debian-cloud",
    "traceur-compiler",
    "firmata.py",
];

const APACHE2_REPOS: [&str; 4] = ["dagger", "kratu", "traceur-compiler", "firmata.py"];

/// The org fixture points its `repos_url` at the mock server.
fn org_payload(server: &MockServer) -> Value {
    serde_json::from_str(&ORG_PAYLOAD.replace("{BASE}", &server.base_url())).unwrap()
}

fn repos_payload() -> Value {
    serde_json::from_str(REPOS_PAYLOAD).unwrap()
}

fn client_for(server: &MockServer) -> GithubOrgClient<HttpFetcher> {
    let settings = GithubSettings {
        api_base: server.base_url(),
        user_agent: "orgkit-integration".to_string(),
        ..GithubSettings::default()
    };
    let fetcher = HttpFetcher::new(&settings).unwrap();
    GithubOrgClient::with_api_base("google", settings.api_base.as_str(), fetcher).unwrap()
}

#[tokio::test]
async fn test_public_repos() -> Result<()> {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google");
        then.status(200).json_body(org_payload(&server));
    });
    let repos_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google/repos");
        then.status(200).json_body(repos_payload());
    });

    let client = client_for(&server);
    let repos = client.public_repos(None).await?;

    assert_eq!(repos, EXPECTED_REPOS);
    org_mock.assert();
    repos_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_public_repos_with_license() -> Result<()> {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google");
        then.status(200).json_body(org_payload(&server));
    });
    let repos_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google/repos");
        then.status(200).json_body(repos_payload());
    });

    let client = client_for(&server);
    let apache = client.public_repos(Some("apache-2.0")).await?;
    let all = client.public_repos(None).await?;

    assert_eq!(apache, APACHE2_REPOS);
    assert_eq!(all.len(), EXPECTED_REPOS.len());
    // Both payloads are fetched once and reused.
    org_mock.assert_hits(1);
    repos_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_unknown_org_surfaces_http_status() {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google");
        then.status(404)
            .json_body(serde_json::json!({"message": "Not Found"}));
    });

    let client = client_for(&server);
    let err = client.public_repos(None).await.unwrap_err();

    org_mock.assert();
    assert!(matches!(err, OrgError::HttpStatus { status: 404, .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_html_org_response_is_not_a_network_error() {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET).path("/orgs/google");
        then.status(200).body("<html>rate limited</html>");
    });

    let client = client_for(&server);
    let err = client.org().await.unwrap_err();

    org_mock.assert();
    assert!(matches!(err, OrgError::SerializationError(_)));
    assert!(!err.user_friendly_message().contains("Could not reach"));
    assert_ne!(err.recovery_suggestion(), "Check your network connection and the configured api_base");
}

#[tokio::test]
async fn test_client_built_from_settings_file() -> Result<()> {
    let server = MockServer::start();
    let org_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/orgs/google")
            .header("user-agent", "from-file");
        then.status(200).json_body(org_payload(&server));
    });

    let mut settings_file = NamedTempFile::new()?;
    write!(
        settings_file,
        "[github]\napi_base = \"{}\"\nuser_agent = \"from-file\"\ntimeout_seconds = 5\n",
        server.base_url()
    )?;

    let settings = Settings::from_file(settings_file.path())?;
    let fetcher = HttpFetcher::new(&settings.github)?;
    let client = GithubOrgClient::with_api_base("google", settings.github.api_base.as_str(), fetcher)?;

    let repos_url = client.public_repos_url().await?;

    org_mock.assert();
    assert_eq!(repos_url, format!("{}/orgs/google/repos", server.base_url()));
    Ok(())
}
