pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ApiClient, ApiRequest, ApiResponse, AuthUseCase, Dashboard, DashboardUseCase, HttpMethod,
    HttpTransport, ProfileUseCase, RefreshCoordinator, ReservationsUseCase, SessionObserver,
    TokenStore, TripsUseCase, VehiclesUseCase,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, FileTokenStore, InMemoryTokenStore, LoginPromptObserver,
    ReqwestTransport, Router,
};

pub use domain::{
    AuthResponse, CompleteRegistration, DomainError, ErrorKind, NewReservation, NewTrip,
    NewVehicle, OAuthLogin, ProfileUpdate, Registration, Reservation, TokenPair, Trip, TripPage,
    TripSearch, TripUpdate, User, UserStats, Vehicle, VehicleUpdate,
};
