use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::TokenStore;
use crate::domain::{DomainError, TokenPair};

/// Process-local token storage, lost on exit.
pub struct InMemoryTokenStore {
    pair: Mutex<Option<TokenPair>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            pair: Mutex::new(None),
        }
    }

    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        Self {
            pair: Mutex::new(Some(TokenPair::new(access_token, refresh_token))),
        }
    }

    pub async fn snapshot(&self) -> Option<TokenPair> {
        self.pair.lock().await.clone()
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn access_token(&self) -> Result<Option<String>, DomainError> {
        Ok(self.pair.lock().await.as_ref().map(|p| p.access_token.clone()))
    }

    async fn refresh_token(&self) -> Result<Option<String>, DomainError> {
        Ok(self.pair.lock().await.as_ref().map(|p| p.refresh_token.clone()))
    }

    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), DomainError> {
        *self.pair.lock().await = Some(TokenPair::new(access_token, refresh_token));
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        *self.pair.lock().await = None;
        Ok(())
    }
}
