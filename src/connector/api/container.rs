use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::debug;

use crate::application::{
    ApiClient, AuthUseCase, DashboardUseCase, ProfileUseCase, ReservationsUseCase, TokenStore,
    TripsUseCase, VehiclesUseCase,
};
use crate::connector::adapter::{
    FileTokenStore, InMemoryTokenStore, LoginPromptObserver, ReqwestTransport, DEFAULT_API_URL,
    DEFAULT_TIMEOUT,
};

pub const DEFAULT_DATA_DIR: &str = "~/.leoneta";

pub struct ContainerConfig {
    pub api_url: String,
    /// Directory holding `tokens.json`. `~` is expanded.
    pub data_dir: String,
    pub timeout: Duration,
    /// Keep tokens in memory only; nothing is written to `data_dir`.
    pub memory_tokens: bool,
}

impl ContainerConfig {
    /// Reads configuration from the environment with local-first defaults:
    ///
    /// | Variable                | Default                 |
    /// |-------------------------|-------------------------|
    /// | `LEONETA_API_URL`       | `http://localhost:3000` |
    /// | `LEONETA_DATA_DIR`      | `~/.leoneta`            |
    /// | `LEONETA_TIMEOUT_SECS`  | `30`                    |
    /// | `LEONETA_MEMORY_TOKENS` | off (`1` to enable)     |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("LEONETA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let data_dir =
            std::env::var("LEONETA_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let timeout = std::env::var("LEONETA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let memory_tokens = std::env::var("LEONETA_MEMORY_TOKENS")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            api_url,
            data_dir,
            timeout,
            memory_tokens,
        }
    }
}

/// Wires adapters into one [`ApiClient`] per process and hands out use cases
/// that share it, so every command in a session goes through the same
/// refresh coordinator.
pub struct Container {
    client: Arc<ApiClient>,
    observer: Arc<LoginPromptObserver>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config.api_url, config.timeout)?);

        let tokens: Arc<dyn TokenStore> = if config.memory_tokens {
            debug!("Using in-memory token storage");
            Arc::new(InMemoryTokenStore::new())
        } else {
            let dir = PathBuf::from(expand_tilde(&config.data_dir));
            debug!("Using token file in {}", dir.display());
            Arc::new(FileTokenStore::new(dir))
        };

        let observer = Arc::new(LoginPromptObserver::new("leoneta auth login"));
        let client = Arc::new(ApiClient::new(
            config.api_url.clone(),
            transport,
            tokens,
            observer.clone(),
        ));

        debug!("Backend at {} (timeout {:?})", config.api_url, config.timeout);

        Ok(Self {
            client,
            observer,
            config,
        })
    }

    pub fn auth_use_case(&self) -> AuthUseCase {
        AuthUseCase::new(self.client.clone())
    }

    pub fn profile_use_case(&self) -> ProfileUseCase {
        ProfileUseCase::new(self.client.clone())
    }

    pub fn vehicles_use_case(&self) -> VehiclesUseCase {
        VehiclesUseCase::new(self.client.clone())
    }

    pub fn trips_use_case(&self) -> TripsUseCase {
        TripsUseCase::new(self.client.clone())
    }

    pub fn reservations_use_case(&self) -> ReservationsUseCase {
        ReservationsUseCase::new(self.client.clone())
    }

    pub fn dashboard_use_case(&self) -> DashboardUseCase {
        DashboardUseCase::new(self.client.clone())
    }

    /// Whether this session ended with an unrecoverable refresh failure.
    pub fn session_expired(&self) -> bool {
        self.observer.has_fired()
    }

    /// Fails once the session has expired, telling the user how to sign in.
    pub fn ensure_session(&self) -> Result<()> {
        if self.session_expired() {
            bail!(
                "session expired; sign in again with `{}`",
                self.observer.login_hint()
            );
        }
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }
}

pub fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
