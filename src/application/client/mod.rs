mod api_client;
mod refresh_coordinator;

pub use api_client::*;
pub use refresh_coordinator::*;
