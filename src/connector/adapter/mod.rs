mod file_token_store;
mod in_memory_token_store;
mod login_prompt_observer;
mod reqwest_transport;

pub use file_token_store::*;
pub use in_memory_token_store::*;
pub use login_prompt_observer::*;
pub use reqwest_transport::*;
