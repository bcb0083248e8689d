pub mod catalog;
pub mod core;
pub mod environment;
pub mod types;
pub mod web;

pub use catalog::Catalog;
pub use environment::EnvironmentConfig;
pub use web::{build_rocket, start_web_server, ServerConfig};
