pub mod default_config;
pub mod search_params;
pub mod serp_config;
