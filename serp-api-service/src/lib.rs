pub mod client;
pub mod config;
pub mod error_handler;
pub mod provider;
pub mod telemetry;
pub mod types;

pub use client::SerpApiClient;
pub use config::{search_params::SearchParams, serp_config::SerpConfig};
pub use error_handler::{ConfigError, SerpError};
pub use provider::SearchProvider;
