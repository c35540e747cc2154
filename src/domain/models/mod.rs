mod auth;
mod reservation;
mod trip;
mod user;
mod vehicle;

pub use auth::*;
pub use reservation::*;
pub use trip::*;
pub use user::*;
pub use vehicle::*;
