use std::sync::Arc;

use crate::application::{ApiClient, ApiRequest};
use crate::domain::{DomainError, NewTrip, Trip, TripPage, TripSearch, TripUpdate};

/// Trip search, publication and lifecycle transitions.
pub struct TripsUseCase {
    client: Arc<ApiClient>,
}

impl TripsUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn search(&self, search: &TripSearch) -> Result<TripPage, DomainError> {
        let request = ApiRequest::get("/viajes").with_query(search.to_query());
        self.client.execute(request).await
    }

    pub async fn get(&self, id: &str) -> Result<Trip, DomainError> {
        self.client
            .execute(ApiRequest::get("/viajes").segment(id))
            .await
    }

    /// Trips published by the logged-in driver.
    pub async fn list_mine(&self) -> Result<Vec<Trip>, DomainError> {
        self.client.execute(ApiRequest::get("/viajes/mis-viajes")).await
    }

    pub async fn create(&self, trip: &NewTrip) -> Result<Trip, DomainError> {
        if trip.total_seats == 0 {
            return Err(DomainError::validation("a trip needs at least one seat"));
        }
        let request = ApiRequest::post("/viajes").with_json(trip)?;
        self.client.execute(request).await
    }

    pub async fn update(&self, id: &str, update: &TripUpdate) -> Result<Trip, DomainError> {
        if update.is_empty() {
            return Err(DomainError::validation("nothing to update"));
        }
        let request = ApiRequest::patch("/viajes").segment(id).with_json(update)?;
        self.client.execute(request).await
    }

    pub async fn cancel(&self, id: &str) -> Result<Trip, DomainError> {
        self.transition(id, "cancelar").await
    }

    pub async fn start(&self, id: &str) -> Result<Trip, DomainError> {
        self.transition(id, "iniciar").await
    }

    pub async fn complete(&self, id: &str) -> Result<Trip, DomainError> {
        self.transition(id, "completar").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.client
            .execute_discarding(ApiRequest::delete("/viajes").segment(id))
            .await
    }

    async fn transition(&self, id: &str, action: &str) -> Result<Trip, DomainError> {
        self.client
            .execute(ApiRequest::patch("/viajes").segment(id).segment(action))
            .await
    }
}
