use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::TokenStore;
use crate::domain::DomainError;

const TOKENS_FILE: &str = "tokens.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(rename = "leoneta_access_token", skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(rename = "leoneta_refresh_token", skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Tokens persisted as JSON in the client data directory.
///
/// A missing file means no session. Writes replace the whole file, so both
/// tokens land together; concurrent processes are not coordinated.
pub struct FileTokenStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(TOKENS_FILE),
            io: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoredTokens, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredTokens::default()),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tokens) => Ok(tokens),
            Err(e) => {
                warn!(
                    "Ignoring unreadable token file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(StoredTokens::default())
            }
        }
    }

    async fn write(&self, tokens: &StoredTokens) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(tokens)
            .map_err(|e| DomainError::serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        restrict_permissions(&tmp).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Stored tokens in {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), DomainError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), DomainError> {
    Ok(())
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn access_token(&self) -> Result<Option<String>, DomainError> {
        let _guard = self.io.lock().await;
        Ok(self.read().await?.access_token)
    }

    async fn refresh_token(&self) -> Result<Option<String>, DomainError> {
        let _guard = self.io.lock().await;
        Ok(self.read().await?.refresh_token)
    }

    async fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), DomainError> {
        let _guard = self.io.lock().await;
        self.write(&StoredTokens {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        })
        .await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let _guard = self.io.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_means_no_tokens() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tokens_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        FileTokenStore::new(dir.path())
            .set_tokens("a1", "r1")
            .await
            .unwrap();

        let reopened = FileTokenStore::new(dir.path());
        assert_eq!(reopened.access_token().await.unwrap().as_deref(), Some("a1"));
        assert_eq!(reopened.refresh_token().await.unwrap().as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn file_uses_storage_key_names() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        store.set_tokens("a1", "r1").await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["leoneta_access_token"], "a1");
        assert_eq!(json["leoneta_refresh_token"], "r1");
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        store.set_tokens("a1", "r1").await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(!store.path().exists());
        assert!(store.access_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("leoneta"));

        store.set_tokens("a1", "r1").await.unwrap();

        assert!(store.path().exists());
    }
}
