use std::sync::Arc;

use futures_util::future::try_join3;
use tracing::debug;

use super::{AuthUseCase, TripsUseCase, VehiclesUseCase};
use crate::application::ApiClient;
use crate::domain::{DomainError, TripPage, TripSearch, User, Vehicle};

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: User,
    pub trips: TripPage,
    pub vehicles: Vec<Vehicle>,
}

/// Loads the landing view: trip search results, the current profile and the
/// user's vehicles, fetched concurrently.
pub struct DashboardUseCase {
    auth: AuthUseCase,
    trips: TripsUseCase,
    vehicles: VehiclesUseCase,
}

impl DashboardUseCase {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthUseCase::new(Arc::clone(&client)),
            trips: TripsUseCase::new(Arc::clone(&client)),
            vehicles: VehiclesUseCase::new(client),
        }
    }

    pub async fn execute(&self, search: &TripSearch) -> Result<Dashboard, DomainError> {
        let (trips, profile, vehicles) = try_join3(
            self.trips.search(search),
            self.auth.me(),
            self.vehicles.list_mine(),
        )
        .await?;

        debug!(
            "Dashboard loaded: {} trips, {} vehicles",
            trips.data.len(),
            vehicles.len()
        );

        Ok(Dashboard {
            profile,
            trips,
            vehicles,
        })
    }
}
