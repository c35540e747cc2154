use std::sync::Arc;

use serde::Serialize;

use crate::application::{ApiClient, ApiRequest};
use crate::domain::{CompleteRegistration, DomainError, ProfileUpdate, User, UserStats};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoChange<'a> {
    photo_url: &'a str,
}

/// User profile reads and updates.
pub struct ProfileUseCase {
    client: Arc<ApiClient>,
}

impl ProfileUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, user_id: &str) -> Result<User, DomainError> {
        self.client
            .execute(ApiRequest::get("/usuarios").segment(user_id))
            .await
    }

    pub async fn update(&self, user_id: &str, update: &ProfileUpdate) -> Result<User, DomainError> {
        if update.is_empty() {
            return Err(DomainError::validation("nothing to update"));
        }
        let request = ApiRequest::patch("/usuarios").segment(user_id).with_json(update)?;
        self.client.execute(request).await
    }

    pub async fn complete_registration(
        &self,
        user_id: &str,
        details: &CompleteRegistration,
    ) -> Result<User, DomainError> {
        let request = ApiRequest::patch("/usuarios")
            .segment(user_id)
            .segment("complete-registration")
            .with_json(details)?;
        self.client.execute(request).await
    }

    pub async fn stats(&self, user_id: &str) -> Result<UserStats, DomainError> {
        self.client
            .execute(ApiRequest::get("/usuarios").segment(user_id).segment("stats"))
            .await
    }

    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if new_password.is_empty() {
            return Err(DomainError::validation("new password must not be empty"));
        }
        let request = ApiRequest::patch("/usuarios")
            .segment(user_id)
            .segment("change-password")
            .with_json(&PasswordChange {
                current_password,
                new_password,
            })?;
        self.client.execute_discarding(request).await
    }

    pub async fn update_photo(&self, user_id: &str, photo_url: &str) -> Result<User, DomainError> {
        let request = ApiRequest::patch("/usuarios")
            .segment(user_id)
            .segment("photo")
            .with_json(&PhotoChange { photo_url })?;
        self.client.execute(request).await
    }
}
