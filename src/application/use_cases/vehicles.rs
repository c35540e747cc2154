use std::sync::Arc;

use serde::Serialize;

use crate::application::{ApiClient, ApiRequest};
use crate::domain::{DomainError, NewVehicle, Vehicle, VehicleUpdate};

#[derive(Serialize)]
struct ActiveFlag {
    #[serde(rename = "activo")]
    active: bool,
}

pub struct VehiclesUseCase {
    client: Arc<ApiClient>,
}

impl VehiclesUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Vehicles owned by the logged-in user.
    pub async fn list_mine(&self) -> Result<Vec<Vehicle>, DomainError> {
        self.client.execute(ApiRequest::get("/vehiculos")).await
    }

    pub async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, DomainError> {
        let request = ApiRequest::post("/vehiculos").with_json(vehicle)?;
        self.client.execute(request).await
    }

    pub async fn update(&self, id: &str, update: &VehicleUpdate) -> Result<Vehicle, DomainError> {
        if update.is_empty() {
            return Err(DomainError::validation("nothing to update"));
        }
        let request = ApiRequest::patch("/vehiculos").segment(id).with_json(update)?;
        self.client.execute(request).await
    }

    pub async fn set_primary(&self, id: &str) -> Result<Vehicle, DomainError> {
        self.client
            .execute(ApiRequest::patch("/vehiculos").segment(id).segment("principal"))
            .await
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<Vehicle, DomainError> {
        let request = ApiRequest::patch("/vehiculos")
            .segment(id)
            .segment("activo")
            .with_json(&ActiveFlag { active })?;
        self.client.execute(request).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.client
            .execute_discarding(ApiRequest::delete("/vehiculos").segment(id))
            .await
    }
}
