use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::debug;

use super::RefreshCoordinator;
use crate::application::{ApiRequest, HttpTransport, SessionObserver, TokenStore};
use crate::domain::DomainError;

/// Authenticated request wrapper shared by every endpoint module.
///
/// Attaches the stored access token, and on a 401 (when a refresh token is
/// stored) hands over to the session's [`RefreshCoordinator`] and retries the
/// request exactly once with the token it returns. A second rejection is
/// returned to the caller as-is.
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
    coordinator: RefreshCoordinator,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        let coordinator =
            RefreshCoordinator::new(Arc::clone(&transport), Arc::clone(&tokens), observer);
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            tokens,
            coordinator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn coordinator(&self) -> &RefreshCoordinator {
        &self.coordinator
    }

    /// Sends a request, refreshing the session on an authorization failure.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, DomainError> {
        self.send(request, true).await
    }

    /// Like [`Self::execute`] for endpoints whose response body is not needed.
    /// Accepts an empty `204` as well as any JSON acknowledgement.
    pub async fn execute_discarding(&self, request: ApiRequest) -> Result<(), DomainError> {
        self.execute::<IgnoredAny>(request).await.map(|_| ())
    }

    /// Sends a request without the refresh path. Used by endpoints where a 401
    /// means bad credentials rather than a stale token.
    pub async fn execute_unguarded<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, DomainError> {
        self.send(request, false).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        allow_refresh: bool,
    ) -> Result<T, DomainError> {
        let generation = self.coordinator.generation();
        let token = self.tokens.access_token().await?;

        debug!("{}", request);
        let response = self.transport.send(&request, token.as_deref()).await?;

        if response.is_unauthorized()
            && allow_refresh
            && self.tokens.refresh_token().await?.is_some()
        {
            let fresh = self.coordinator.recover(generation).await?;
            debug!("{} (retry after token refresh)", request);
            let retried = self.transport.send(&request, Some(&fresh)).await?;
            return retried.decode();
        }

        response.decode()
    }
}
