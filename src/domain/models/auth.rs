use serde::{Deserialize, Serialize};

use super::User;

/// Access/refresh credential pair issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenPair,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "carrera", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

/// Outcome of the OAuth redirect once its tokens have been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthLogin {
    pub tokens: TokenPair,
    pub registration_complete: bool,
}

impl OAuthLogin {
    pub fn needs_registration(&self) -> bool {
        !self.registration_complete
    }
}
