mod auth;
mod dashboard;
mod profile;
mod reservations;
mod trips;
mod vehicles;

pub use auth::*;
pub use dashboard::*;
pub use profile::*;
pub use reservations::*;
pub use trips::*;
pub use vehicles::*;
