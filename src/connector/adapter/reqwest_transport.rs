use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use tracing::debug;

use crate::application::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};
use crate::domain::DomainError;

/// Default target: the backend running locally on its standard port.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`HttpTransport`] over a pooled `reqwest` client.
///
/// Every request is bounded by the configured timeout; expiry is reported as
/// [`DomainError::Timeout`] so a hung backend never hangs the caller.
/// Path segments are percent-encoded one by one onto the base URL.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base: Url,
    base_url: String,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| DomainError::internal(format!("invalid API URL {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(DomainError::internal(format!(
                "API URL {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            client,
            base,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &ApiRequest) -> Result<Url, DomainError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::internal(format!("API URL {} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }

    fn map_error(&self, request: &ApiRequest, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::timeout(format!("{} after {:?}", request, self.timeout))
        } else if e.is_connect() {
            DomainError::network(format!("backend not reachable at {}: {e}", self.base_url))
        } else {
            DomainError::network(format!("{} failed: {e}", request))
        }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, DomainError> {
        let mut builder = self
            .client
            .request(to_method(request.method), self.url(request)?)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(request, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_error(request, e))?;

        debug!("{} -> {}", request, status);
        Ok(ApiResponse::new(status, body))
    }
}
