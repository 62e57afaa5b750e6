pub mod config;
pub mod paths;

pub use config::{Config, TmdbConfig, API_BASE_URL_ENV, API_KEY_ENV};
pub use paths::{container_base_path, PathManager};
