pub mod auth_controller;
pub mod dashboard_controller;
pub mod output;
pub mod profile_controller;
pub mod reservation_controller;
pub mod trip_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use dashboard_controller::DashboardController;
pub use profile_controller::ProfileController;
pub use reservation_controller::ReservationController;
pub use trip_controller::TripController;
pub use vehicle_controller::VehicleController;
