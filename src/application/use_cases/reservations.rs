use std::sync::Arc;

use serde::Serialize;

use crate::application::{ApiClient, ApiRequest};
use crate::domain::{DomainError, NewReservation, Reservation};

#[derive(Serialize)]
struct DriverReply<'a> {
    #[serde(rename = "mensajeConductor", skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// Seat reservations, from the passenger and the driver side.
pub struct ReservationsUseCase {
    client: Arc<ApiClient>,
}

impl ReservationsUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_mine(&self) -> Result<Vec<Reservation>, DomainError> {
        self.client
            .execute(ApiRequest::get("/reservaciones/mis-reservaciones"))
            .await
    }

    pub async fn list_for_trip(&self, trip_id: &str) -> Result<Vec<Reservation>, DomainError> {
        self.client
            .execute(ApiRequest::get("/reservaciones/viaje").segment(trip_id))
            .await
    }

    pub async fn create(&self, reservation: &NewReservation) -> Result<Reservation, DomainError> {
        if reservation.seats == Some(0) {
            return Err(DomainError::validation("at least one seat must be reserved"));
        }
        let request = ApiRequest::post("/reservaciones").with_json(reservation)?;
        self.client.execute(request).await
    }

    pub async fn confirm(
        &self,
        id: &str,
        message: Option<&str>,
    ) -> Result<Reservation, DomainError> {
        self.reply(id, "confirmar", message).await
    }

    pub async fn reject(
        &self,
        id: &str,
        message: Option<&str>,
    ) -> Result<Reservation, DomainError> {
        self.reply(id, "rechazar", message).await
    }

    pub async fn cancel(&self, id: &str) -> Result<Reservation, DomainError> {
        self.client
            .execute(ApiRequest::patch("/reservaciones").segment(id).segment("cancelar"))
            .await
    }

    pub async fn complete(&self, id: &str) -> Result<Reservation, DomainError> {
        self.client
            .execute(ApiRequest::patch("/reservaciones").segment(id).segment("completar"))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.client
            .execute_discarding(ApiRequest::delete("/reservaciones").segment(id))
            .await
    }

    async fn reply(
        &self,
        id: &str,
        action: &str,
        message: Option<&str>,
    ) -> Result<Reservation, DomainError> {
        let request = ApiRequest::patch("/reservaciones")
            .segment(id)
            .segment(action)
            .with_json(&DriverReply { message })?;
        self.client.execute(request).await
    }
}
