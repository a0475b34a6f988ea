pub mod client;
pub mod config;
pub mod error;
pub mod github;
pub mod http;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
