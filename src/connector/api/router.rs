use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    AuthController, DashboardController, ProfileController, ReservationController, TripController,
    VehicleController,
};

pub struct Router<'a> {
    auth_controller: AuthController<'a>,
    profile_controller: ProfileController<'a>,
    vehicle_controller: VehicleController<'a>,
    trip_controller: TripController<'a>,
    reservation_controller: ReservationController<'a>,
    dashboard_controller: DashboardController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            auth_controller: AuthController::new(container),
            profile_controller: ProfileController::new(container),
            vehicle_controller: VehicleController::new(container),
            trip_controller: TripController::new(container),
            reservation_controller: ReservationController::new(container),
            dashboard_controller: DashboardController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Auth { command } => self.auth_controller.handle(command).await,
            Commands::Profile { command } => self.profile_controller.handle(command).await,
            Commands::Vehicles { command } => self.vehicle_controller.handle(command).await,
            Commands::Trips { command } => self.trip_controller.handle(command).await,
            Commands::Reservations { command } => {
                self.reservation_controller.handle(command).await
            }
            Commands::Dashboard { search } => self.dashboard_controller.show(search).await,
        }
    }
}
