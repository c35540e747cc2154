use std::sync::Arc;

use reqwest::Url;
use serde::Serialize;
use tracing::{info, warn};

use crate::application::{ApiClient, ApiRequest, REFRESH_PATH};
use crate::domain::{
    AuthResponse, Credentials, DomainError, OAuthLogin, Registration, TokenPair, User,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

/// Login, registration and session lifecycle.
///
/// Successful logins store the issued token pair so later requests are
/// authenticated.
pub struct AuthUseCase {
    client: Arc<ApiClient>,
}

impl AuthUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, DomainError> {
        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }

        let request = ApiRequest::post("/auth/register").with_json(registration)?;
        let response: AuthResponse = self.client.execute_unguarded(request).await?;
        self.client.tokens().store_pair(&response.tokens).await?;

        info!("Registered {}", response.user.email);
        Ok(response)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, DomainError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }

        let credentials = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post("/auth/login").with_json(&credentials)?;
        let response: AuthResponse = self.client.execute_unguarded(request).await?;
        self.client.tokens().store_pair(&response.tokens).await?;

        info!("Logged in as {}", response.user.email);
        Ok(response)
    }

    pub async fn me(&self) -> Result<User, DomainError> {
        self.client.execute(ApiRequest::get("/auth/me")).await
    }

    /// Revokes the refresh token on the backend and forgets the local pair.
    /// Local tokens are cleared even when the backend call fails.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let refresh_token = self.client.tokens().refresh_token().await?;
        let request = ApiRequest::post("/auth/logout").with_json(&LogoutBody { refresh_token })?;

        if let Err(e) = self.client.execute_discarding(request).await {
            warn!("Backend logout failed: {}", e);
        }

        self.client.tokens().clear().await?;
        info!("Logged out");
        Ok(())
    }

    /// Exchanges a refresh token directly, outside the coordinated path.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let request = ApiRequest::post(REFRESH_PATH).with_json(&RefreshBody { refresh_token })?;
        self.client.execute_unguarded(request).await
    }

    /// Where the browser is sent to start a Google sign-in.
    pub fn google_url(&self) -> String {
        format!("{}/auth/google", self.client.base_url())
    }

    /// Completes a Google sign-in from the backend's redirect URL, which
    /// carries `accessToken`, `refreshToken` and `registroCompleto`.
    pub async fn complete_oauth_callback(
        &self,
        callback_url: &str,
    ) -> Result<OAuthLogin, DomainError> {
        let login = parse_oauth_callback(callback_url)?;
        self.client.tokens().store_pair(&login.tokens).await?;

        info!(
            "Signed in with Google (registration complete: {})",
            login.registration_complete
        );
        Ok(login)
    }
}

fn parse_oauth_callback(callback_url: &str) -> Result<OAuthLogin, DomainError> {
    let url = Url::parse(callback_url)
        .map_err(|e| DomainError::validation(format!("invalid callback URL: {e}")))?;

    let mut access = None;
    let mut refresh = None;
    let mut registration_complete = true;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "accessToken" if !value.is_empty() => access = Some(value.into_owned()),
            "refreshToken" if !value.is_empty() => refresh = Some(value.into_owned()),
            "registroCompleto" => registration_complete = value != "false",
            _ => {}
        }
    }

    match (access, refresh) {
        (Some(access), Some(refresh)) => Ok(OAuthLogin {
            tokens: TokenPair::new(access, refresh),
            registration_complete,
        }),
        _ => Err(DomainError::validation(
            "callback URL does not carry both tokens",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLBACK: &str = "http://localhost:3001/auth/callback";

    #[test]
    fn callback_with_incomplete_registration() {
        let url = format!("{CALLBACK}?accessToken=a1&refreshToken=r1&registroCompleto=false");
        let login = parse_oauth_callback(&url).unwrap();

        assert_eq!(login.tokens, TokenPair::new("a1", "r1"));
        assert!(login.needs_registration());
    }

    #[test]
    fn callback_defaults_to_complete_registration() {
        let url = format!("{CALLBACK}?accessToken=a1&refreshToken=r1");
        let login = parse_oauth_callback(&url).unwrap();
        assert!(!login.needs_registration());
    }

    #[test]
    fn callback_without_tokens_is_rejected() {
        let err = parse_oauth_callback(&format!("{CALLBACK}?accessToken=a1")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = parse_oauth_callback("not a url").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
