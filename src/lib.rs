pub mod config;
pub mod types;
pub mod utils;
pub mod services;
pub mod api;

pub use config::Config;
pub use types::*;
