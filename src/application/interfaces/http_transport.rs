use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend request relative to the API base URL.
///
/// The route is kept as raw path segments; transports percent-encode each
/// segment, so an id containing `/` or `?` stays a single segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// `route` is a fixed route such as `/viajes/mis-viajes`; it is split on
    /// `/`. Append caller-supplied values with [`Self::segment`].
    pub fn new(method: HttpMethod, route: &str) -> Self {
        Self {
            method,
            segments: route
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(route: &str) -> Self {
        Self::new(HttpMethod::Get, route)
    }

    pub fn post(route: &str) -> Self {
        Self::new(HttpMethod::Post, route)
    }

    pub fn patch(route: &str) -> Self {
        Self::new(HttpMethod::Patch, route)
    }

    pub fn delete(route: &str) -> Self {
        Self::new(HttpMethod::Delete, route)
    }

    /// Appends one path segment verbatim, e.g. a resource id.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    /// Unencoded path, for logs and routing in fakes.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, DomainError> {
        let value = serde_json::to_value(body)
            .map_err(|e| DomainError::serialization(format!("request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

/// Raw backend response: status plus the undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        Self::new(status, serde_json::to_string(body).unwrap_or_default())
    }

    pub fn no_content() -> Self {
        Self::new(204, "")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Parsed body, or `None` when empty or not JSON.
    pub fn json_body(&self) -> Option<Value> {
        if self.body.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    /// Decodes a response into the caller's type. `204` and empty success
    /// bodies decode as JSON `null`, so `()` and `Option<T>` callers succeed.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        if !self.is_success() {
            return Err(DomainError::backend(self.status, self.json_body()));
        }

        if self.status == 204 || self.body.trim().is_empty() {
            return serde_json::from_value(Value::Null).map_err(|e| {
                DomainError::serialization(format!("expected a body, got none ({e})"))
            });
        }

        serde_json::from_str(&self.body)
            .map_err(|e| DomainError::serialization(format!("response body: {e}")))
    }
}

/// Sends requests to the backend, attaching the bearer credential when given.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, DomainError>;
}
