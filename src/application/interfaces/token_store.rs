use async_trait::async_trait;

use crate::domain::{DomainError, TokenPair};

/// Persistence for the session's access and refresh tokens.
///
/// Getters return `Ok(None)` when nothing is stored or the backing storage
/// does not exist yet.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, DomainError>;

    async fn refresh_token(&self) -> Result<Option<String>, DomainError>;

    /// Writes both tokens in one call. Implementations are not required to
    /// make the pair atomic.
    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;

    async fn store_pair(&self, pair: &TokenPair) -> Result<(), DomainError> {
        self.set_tokens(&pair.access_token, &pair.refresh_token).await
    }
}
