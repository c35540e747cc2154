mod http_transport;
mod session_observer;
mod token_store;

pub use http_transport::*;
pub use session_observer::*;
pub use token_store::*;
