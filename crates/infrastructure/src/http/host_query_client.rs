use async_trait::async_trait;
use gethost_application::ports::HostQueryPort;
use gethost_domain::DomainError;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// URL parsers collapse `.` and `..` path segments, so such fragments travel in the query string.
fn is_dot_fragment(fragment: &str) -> bool {
    !fragment.is_empty() && fragment.chars().all(|c| c == '.')
}

/// Message of a 400 answer, without the prefix the server's error display adds.
fn rejection_message(body: &str) -> String {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());
    message
        .strip_prefix("Invalid host query: ")
        .map(str::to_string)
        .unwrap_or(message)
}

/// Queries a running gethost server over HTTP.
pub struct HttpHostQueryClient {
    http: HttpClient,
    base_url: String,
}

impl HttpHostQueryClient {
    /// `base_url` includes scheme, host and port, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// `/hosts/{fragment}[/nc]`, or `/hosts[?fragment=..][&nc=true]` when the fragment is
    /// empty or made of dots only.
    pub fn hosts_url(&self, fragment: &str, force_refresh: bool) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            DomainError::RemoteQueryFailed(format!("Invalid server URL {}: {}", self.base_url, e))
        })?;
        let in_path = !fragment.is_empty() && !is_dot_fragment(fragment);

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                DomainError::RemoteQueryFailed(format!(
                    "Server URL cannot carry a path: {}",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("hosts");
            if in_path {
                segments.push(fragment);
                if force_refresh {
                    segments.push("nc");
                }
            }
        }

        if !in_path {
            if is_dot_fragment(fragment) {
                url.query_pairs_mut().append_pair("fragment", fragment);
            }
            if force_refresh {
                url.query_pairs_mut().append_pair("nc", "true");
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl HostQueryPort for HttpHostQueryClient {
    #[instrument(skip(self), name = "remote_query_hosts")]
    async fn query_hosts(
        &self,
        fragment: &str,
        force_refresh: bool,
    ) -> Result<Vec<String>, DomainError> {
        let url = self.hosts_url(fragment, force_refresh)?;
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::RemoteQueryFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::InvalidQuery(rejection_message(&body)));
        }
        if !status.is_success() {
            return Err(DomainError::RemoteQueryFailed(format!(
                "Server answered {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::RemoteQueryFailed(e.to_string()))?;

        serde_json::from_str::<Vec<String>>(&body).map_err(|e| {
            DomainError::RemoteQueryFailed(format!("Malformed host list: {}", e))
        })
    }
}
